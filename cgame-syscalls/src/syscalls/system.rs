// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console, cvars, commands, files, heap, and the script precompiler.

use core::ffi::{c_void, CStr};

use module_abi::{
    Arg, ExecWhen, FileHandle, FsMode, PcToken, QTime, SeekOrigin, Vec3, VmCvar,
    MAX_QPATH_LENGTH,
};

use crate::{CgameCall, CgameSyscalls};

impl CgameSyscalls<'_> {
    /// Milliseconds since the host started.
    pub fn milliseconds(&self) -> i32 {
        self.invoke(CgameCall::Milliseconds, &[])
    }

    /// Creates the cvar if it doesn't exist yet, and mirrors it into `cvar`
    /// if one is given.
    pub fn cvar_register(
        &self,
        cvar: Option<&mut VmCvar>,
        name: &CStr,
        default_value: &CStr,
        flags: i32,
    ) {
        let cvar = cvar.map_or(Arg::null(), Arg::ptr_mut);
        self.invoke(
            CgameCall::CvarRegister,
            &[cvar, Arg::str(name), Arg::str(default_value), Arg::int(flags)],
        )
    }

    /// Refreshes a mirrored cvar from the host.
    pub fn cvar_update(&self, cvar: &mut VmCvar) {
        self.invoke(CgameCall::CvarUpdate, &[Arg::ptr_mut(cvar)])
    }

    pub fn cvar_set(&self, name: &CStr, value: &CStr) {
        self.invoke(CgameCall::CvarSet, &[Arg::str(name), Arg::str(value)])
    }

    pub fn cvar_set_value(&self, name: &CStr, value: f32) {
        self.invoke(CgameCall::CvarSetValue, &[Arg::str(name), Arg::float(value)])
    }

    /// Resets the cvar to its default value.
    pub fn cvar_reset(&self, name: &CStr) {
        self.invoke(CgameCall::CvarReset, &[Arg::str(name)])
    }

    pub fn cvar_variable_value(&self, name: &CStr) -> f32 {
        self.invoke(CgameCall::CvarVariableValue, &[Arg::str(name)])
    }

    pub fn cvar_variable_integer_value(&self, name: &CStr) -> i32 {
        self.invoke(CgameCall::CvarVariableIntegerValue, &[Arg::str(name)])
    }

    pub fn cvar_variable_string_buffer(&self, name: &CStr, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::CvarVariableStringBuffer,
            &[Arg::str(name), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// Like [`CgameSyscalls::cvar_variable_string_buffer`], but returns the
    /// value that will take effect after a restart, if one is pending.
    pub fn cvar_latched_variable_string_buffer(&self, name: &CStr, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::CvarLatchedVariableStringBuffer,
            &[Arg::str(name), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// Writes an info string of every cvar with the `bit` flag set.
    pub fn cvar_info_string_buffer(&self, bit: i32, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::CvarInfoStringBuffer,
            &[Arg::int(bit), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// Clamps the cvar's value to `min..=max` from now on.
    pub fn cvar_check_range(&self, name: &CStr, min: f32, max: f32, integral: bool) {
        self.invoke(
            CgameCall::CvarCheckRange,
            &[
                Arg::str(name),
                Arg::float(min),
                Arg::float(max),
                Arg::boolean(integral),
            ],
        )
    }

    /// Argument count of the command being executed.
    pub fn argc(&self) -> i32 {
        self.invoke(CgameCall::Argc, &[])
    }

    pub fn argv(&self, n: i32, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::Argv,
            &[Arg::int(n), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// All the arguments of the command being executed, space-separated.
    pub fn args(&self, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::Args,
            &[Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// The arguments as typed, quotes included.
    pub fn literal_args(&self, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::LiteralArgs,
            &[Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// Opens a file. Returns the file's length (negative if it couldn't be
    /// opened) and its handle.
    pub fn fs_open_file(&self, path: &CStr, mode: FsMode) -> (i32, FileHandle) {
        let mut handle = 0i32;
        let length = self.invoke(
            CgameCall::FsFOpenFile,
            &[Arg::str(path), Arg::ptr_mut(&mut handle), mode.into()],
        );
        (length, FileHandle::new(handle))
    }

    /// The length of a file, without opening it. Negative if it doesn't
    /// exist.
    pub fn fs_file_length(&self, path: &CStr) -> i32 {
        self.invoke(
            CgameCall::FsFOpenFile,
            &[Arg::str(path), Arg::null(), FsMode::Read.into()],
        )
    }

    /// Reads up to `buffer.len()` bytes. Returns the amount read.
    pub fn fs_read(&self, buffer: &mut [u8], file: FileHandle) -> i32 {
        self.invoke(
            CgameCall::FsRead,
            &[Arg::ptr_mut(buffer), Arg::len(buffer.len()), file.into()],
        )
    }

    /// Returns the amount of bytes written.
    pub fn fs_write(&self, buffer: &[u8], file: FileHandle) -> i32 {
        self.invoke(
            CgameCall::FsWrite,
            &[Arg::ptr(buffer), Arg::len(buffer.len()), file.into()],
        )
    }

    pub fn fs_seek(&self, file: FileHandle, offset: i32, origin: SeekOrigin) -> i32 {
        self.invoke(
            CgameCall::FsSeek,
            &[file.into(), Arg::int(offset), origin.into()],
        )
    }

    pub fn fs_tell(&self, file: FileHandle) -> i32 {
        self.invoke(CgameCall::FsTell, &[file.into()])
    }

    pub fn fs_close_file(&self, file: FileHandle) {
        self.invoke(CgameCall::FsFCloseFile, &[file.into()])
    }

    /// Writes the nul-separated names of the files in `path` with the given
    /// extension into `list`. Returns how many there are.
    pub fn fs_get_file_list(&self, path: &CStr, extension: &CStr, list: &mut [u8]) -> i32 {
        self.invoke(
            CgameCall::FsGetFileList,
            &[
                Arg::str(path),
                Arg::str(extension),
                Arg::ptr_mut(list),
                Arg::len(list.len()),
            ],
        )
    }

    pub fn fs_delete(&self, path: &CStr) -> i32 {
        self.invoke(CgameCall::FsDelete, &[Arg::str(path)])
    }

    pub fn fs_rename(&self, from: &CStr, to: &CStr) -> i32 {
        self.invoke(CgameCall::FsRename, &[Arg::str(from), Arg::str(to)])
    }

    pub fn cmd_execute_text(&self, when: ExecWhen, text: &CStr) {
        self.invoke(CgameCall::CmdExecuteText, &[when.into(), Arg::str(text)])
    }

    /// Registers a console command, so it gets forwarded to the module.
    pub fn add_command(&self, name: &CStr) {
        self.invoke(CgameCall::AddCommand, &[Arg::str(name)])
    }

    pub fn remove_command(&self, name: &CStr) {
        self.invoke(CgameCall::RemoveCommand, &[Arg::str(name)])
    }

    /// Sends a command to the server.
    pub fn send_client_command(&self, command: &CStr) {
        self.invoke(CgameCall::SendClientCommand, &[Arg::str(command)])
    }

    /// Renders a frame right away, e.g. to show loading progress.
    pub fn update_screen(&self) {
        self.invoke(CgameCall::UpdateScreen, &[])
    }

    pub fn get_clipboard_data(&self, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::GetClipboardData,
            &[Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    pub fn cmd_auto_complete(&self, input: &CStr, output: &mut [u8]) {
        self.invoke(
            CgameCall::CmdAutoComplete,
            &[Arg::str(input), Arg::ptr_mut(output), Arg::len(output.len())],
        )
    }

    /// Shuts down the local server, if one is running.
    pub fn sv_shutdown(&self, message: &CStr) {
        self.invoke(CgameCall::SvShutdown, &[Arg::str(message)])
    }

    pub fn memory_remaining(&self) -> i32 {
        self.invoke(CgameCall::MemoryRemaining, &[])
    }

    pub fn pc_add_global_define(&self, define: &CStr) -> i32 {
        self.invoke(CgameCall::PcAddGlobalDefine, &[Arg::str(define)])
    }

    pub fn pc_remove_all_global_defines(&self) {
        self.invoke(CgameCall::PcRemoveAllGlobalDefines, &[])
    }

    /// Opens a script. Returns its handle, or zero if it couldn't be loaded.
    pub fn pc_load_source(&self, filename: &CStr, base_path: &CStr) -> i32 {
        self.invoke(
            CgameCall::PcLoadSource,
            &[Arg::str(filename), Arg::str(base_path)],
        )
    }

    pub fn pc_free_source(&self, handle: i32) -> i32 {
        self.invoke(CgameCall::PcFreeSource, &[Arg::int(handle)])
    }

    /// Reads the next token. Returns zero at the end of the script.
    pub fn pc_read_token(&self, handle: i32, token: &mut PcToken) -> i32 {
        self.invoke(
            CgameCall::PcReadToken,
            &[Arg::int(handle), Arg::ptr_mut(token)],
        )
    }

    pub fn pc_unread_token(&self, handle: i32) {
        self.invoke(CgameCall::PcUnreadToken, &[Arg::int(handle)])
    }

    /// Where the script's last token was read from.
    pub fn pc_source_file_and_line(
        &self,
        handle: i32,
        filename: &mut [u8; MAX_QPATH_LENGTH],
        line: &mut i32,
    ) -> i32 {
        self.invoke(
            CgameCall::PcSourceFileAndLine,
            &[Arg::int(handle), Arg::ptr_mut(filename), Arg::ptr_mut(line)],
        )
    }

    /// Allocates from the host's module heap. Null if out of memory.
    pub fn heap_malloc(&self, size: i32) -> *mut c_void {
        self.invoke(CgameCall::HeapMalloc, &[Arg::int(size)])
    }

    pub fn heap_available(&self) -> i32 {
        self.invoke(CgameCall::HeapAvailable, &[])
    }

    /// Returns an allocation to the host's module heap.
    ///
    /// ### Safety
    ///
    /// `data` must have been returned by [`CgameSyscalls::heap_malloc`] and
    /// not freed yet, and must not be used after this.
    pub unsafe fn heap_free(&self, data: *mut c_void) {
        self.invoke(CgameCall::HeapFree, &[Arg::raw(data.cast_const())])
    }

    /// The current wall clock time. Returns seconds since the epoch.
    pub fn real_time(&self, time: &mut QTime) -> i32 {
        self.invoke(CgameCall::RealTime, &[Arg::ptr_mut(time)])
    }

    /// Rounds each component to the nearest integer, the way the host does
    /// before networking a vector.
    pub fn snap_vector(&self, vector: &mut Vec3) {
        self.invoke(CgameCall::SnapVector, &[Arg::ptr_mut(vector)])
    }
}

#[cfg(test)]
mod tests {
    use module_abi::{
        pass_float, testing::RecordingGateway, Arg, ExecWhen, FileHandle, FsMode, SeekOrigin,
        VmCvar, Word,
    };

    use crate::{CgameCall, CgameSyscalls};

    #[test]
    fn file_lengths_are_queried_without_a_handle() {
        let gateway = RecordingGateway::replying(2048);
        let syscalls = CgameSyscalls::new(&gateway);

        assert_eq!(2048, syscalls.fs_file_length(c"scripts/hud.menu"));

        let call = gateway.last_call().unwrap();
        assert!(call.is(CgameCall::FsFOpenFile));
        assert_eq!(Arg::null(), call.args[1]);
        assert_eq!(Arg::from(FsMode::Read), call.args[2]);
    }

    #[test]
    fn opened_files_report_their_length_and_handle() {
        let gateway = RecordingGateway::replying(-1);
        let syscalls = CgameSyscalls::new(&gateway);

        let (length, handle) = syscalls.fs_open_file(c"missing.cfg", FsMode::Write);
        assert_eq!(-1, length);
        assert!(!handle.is_valid(), "nothing wrote the handle");
        assert_eq!(Arg::from(FsMode::Write), gateway.last_call().unwrap().args[2]);
    }

    #[test]
    fn seeks_send_the_handle_first() {
        let gateway = RecordingGateway::new();
        let syscalls = CgameSyscalls::new(&gateway);

        syscalls.fs_seek(FileHandle::new(6), -12, SeekOrigin::End);

        let call = gateway.last_call().unwrap();
        assert_eq!(
            [Arg::Int(6), Arg::Int(-12), Arg::from(SeekOrigin::End)],
            call.args.as_slice(),
        );
    }

    #[test]
    fn unmirrored_cvars_are_registered_with_a_null_pointer() {
        let gateway = RecordingGateway::new();
        let syscalls = CgameSyscalls::new(&gateway);

        syscalls.cvar_register(None, c"cg_draw2d", c"1", 0);
        assert_eq!(Arg::null(), gateway.last_call().unwrap().args[0]);

        let mut cvar = bytemuck::Zeroable::zeroed();
        syscalls.cvar_register(Some(&mut cvar), c"cg_draw2d", c"1", 0);
        assert_eq!(Arg::ptr::<VmCvar>(&cvar), gateway.last_call().unwrap().args[0]);
    }

    #[test]
    fn range_checks_send_float_bits() {
        let gateway = RecordingGateway::new();
        let syscalls = CgameSyscalls::new(&gateway);

        syscalls.cvar_check_range(c"cg_fov", 1.0, 160.0, true);

        let call = gateway.last_call().unwrap();
        assert!(call.is(CgameCall::CvarCheckRange));
        assert_eq!(Arg::Float(pass_float(1.0)), call.args[1]);
        assert_eq!(Arg::Float(pass_float(160.0)), call.args[2]);
        assert_eq!(Arg::Int(1), call.args[3]);
    }

    #[test]
    fn commands_are_queued_with_their_timing() {
        let gateway = RecordingGateway::new();
        let syscalls = CgameSyscalls::new(&gateway);

        let text = c"vid_restart\n";
        syscalls.cmd_execute_text(ExecWhen::Insert, text);

        let call = gateway.last_call().unwrap();
        assert_eq!(Arg::Int(1), call.args[0]);
        assert_eq!(Arg::str(text), call.args[1]);
    }

    #[test]
    fn heap_pointers_pass_through() {
        let gateway = RecordingGateway::replying(0x1000 as Word);
        let syscalls = CgameSyscalls::new(&gateway);

        assert_eq!(0x1000, syscalls.heap_malloc(64) as usize);
        // Safety: the recording host doesn't free anything.
        unsafe { syscalls.heap_free(syscalls.heap_malloc(16)) };
        assert_eq!(
            Arg::Ptr(0x1000 as *const core::ffi::c_void),
            gateway.last_call().unwrap().args[0],
        );
    }
}
