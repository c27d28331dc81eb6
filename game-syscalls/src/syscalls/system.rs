// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::ffi::{c_void, CStr};

use module_abi::{
    Arg, ExecWhen, FileHandle, FsMode, PcToken, QTime, SeekOrigin, Vec3, VmCvar,
    MAX_QPATH_LENGTH,
};

use crate::{GameCall, GameSyscalls};

impl GameSyscalls<'_> {
    /// Milliseconds since the host started.
    pub fn milliseconds(&self) -> i32 {
        self.invoke(GameCall::Milliseconds, &[])
    }

    pub fn argc(&self) -> i32 {
        self.invoke(GameCall::Argc, &[])
    }

    pub fn argv(&self, n: i32, buffer: &mut [u8]) {
        self.invoke(
            GameCall::Argv,
            &[Arg::int(n), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    pub fn args(&self, buffer: &mut [u8]) {
        self.invoke(GameCall::Args, &[Arg::ptr_mut(buffer), Arg::len(buffer.len())])
    }

    pub fn literal_args(&self, buffer: &mut [u8]) {
        self.invoke(
            GameCall::LiteralArgs,
            &[Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// Opens a file, returning its length (negative on failure) and handle.
    pub fn fs_open_file(&self, path: &CStr, mode: FsMode) -> (i32, FileHandle) {
        let mut handle = 0i32;
        let length = self.invoke(
            GameCall::FsFOpenFile,
            &[Arg::str(path), Arg::ptr_mut(&mut handle), mode.into()],
        );
        (length, FileHandle::new(handle))
    }

    /// The length of a file without opening it, negative if it's missing.
    pub fn fs_file_length(&self, path: &CStr) -> i32 {
        self.invoke(
            GameCall::FsFOpenFile,
            &[Arg::str(path), Arg::null(), FsMode::Read.into()],
        )
    }

    pub fn fs_read(&self, buffer: &mut [u8], file: FileHandle) -> i32 {
        self.invoke(
            GameCall::FsRead,
            &[Arg::ptr_mut(buffer), Arg::len(buffer.len()), file.into()],
        )
    }

    pub fn fs_write(&self, buffer: &[u8], file: FileHandle) -> i32 {
        self.invoke(
            GameCall::FsWrite,
            &[Arg::ptr(buffer), Arg::len(buffer.len()), file.into()],
        )
    }

    pub fn fs_seek(&self, file: FileHandle, offset: i32, origin: SeekOrigin) -> i32 {
        self.invoke(
            GameCall::FsSeek,
            &[file.into(), Arg::int(offset), origin.into()],
        )
    }

    pub fn fs_tell(&self, file: FileHandle) -> i32 {
        self.invoke(GameCall::FsTell, &[file.into()])
    }

    pub fn fs_close_file(&self, file: FileHandle) {
        self.invoke(GameCall::FsFCloseFile, &[file.into()])
    }

    /// Writes the nul-separated names of matching files into `list`, and
    /// returns how many there are.
    pub fn fs_get_file_list(&self, path: &CStr, extension: &CStr, list: &mut [u8]) -> i32 {
        self.invoke(
            GameCall::FsGetFileList,
            &[
                Arg::str(path),
                Arg::str(extension),
                Arg::ptr_mut(list),
                Arg::len(list.len()),
            ],
        )
    }

    pub fn fs_delete(&self, path: &CStr) -> i32 {
        self.invoke(GameCall::FsDelete, &[Arg::str(path)])
    }

    pub fn fs_rename(&self, from: &CStr, to: &CStr) -> i32 {
        self.invoke(GameCall::FsRename, &[Arg::str(from), Arg::str(to)])
    }

    pub fn cmd_execute_text(&self, when: ExecWhen, text: &CStr) {
        self.invoke(GameCall::CmdExecuteText, &[when.into(), Arg::str(text)])
    }

    pub fn cvar_register(
        &self,
        cvar: Option<&mut VmCvar>,
        name: &CStr,
        default_value: &CStr,
        flags: i32,
    ) {
        let cvar = cvar.map_or(Arg::null(), Arg::ptr_mut);
        self.invoke(
            GameCall::CvarRegister,
            &[cvar, Arg::str(name), Arg::str(default_value), Arg::int(flags)],
        )
    }

    pub fn cvar_update(&self, cvar: &mut VmCvar) {
        self.invoke(GameCall::CvarUpdate, &[Arg::ptr_mut(cvar)])
    }

    pub fn cvar_set(&self, name: &CStr, value: &CStr) {
        self.invoke(GameCall::CvarSet, &[Arg::str(name), Arg::str(value)])
    }

    pub fn cvar_set_value(&self, name: &CStr, value: f32) {
        self.invoke(GameCall::CvarSetValue, &[Arg::str(name), Arg::float(value)])
    }

    pub fn cvar_variable_value(&self, name: &CStr) -> f32 {
        self.invoke(GameCall::CvarVariableValue, &[Arg::str(name)])
    }

    pub fn cvar_variable_integer_value(&self, name: &CStr) -> i32 {
        self.invoke(GameCall::CvarVariableIntegerValue, &[Arg::str(name)])
    }

    pub fn cvar_variable_string_buffer(&self, name: &CStr, buffer: &mut [u8]) {
        self.string_query(GameCall::CvarVariableStringBuffer, name, buffer)
    }

    /// The value that takes effect after a restart, if one is pending.
    pub fn cvar_latched_variable_string_buffer(&self, name: &CStr, buffer: &mut [u8]) {
        self.string_query(GameCall::CvarLatchedVariableStringBuffer, name, buffer)
    }

    /// The value the cvar was registered with.
    pub fn cvar_default_variable_string_buffer(&self, name: &CStr, buffer: &mut [u8]) {
        self.string_query(GameCall::CvarDefaultVariableStringBuffer, name, buffer)
    }

    pub fn cvar_info_string_buffer(&self, bit: i32, buffer: &mut [u8]) {
        self.invoke(
            GameCall::CvarInfoStringBuffer,
            &[Arg::int(bit), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    pub fn cvar_check_range(&self, name: &CStr, min: f32, max: f32, integral: bool) {
        self.invoke(
            GameCall::CvarCheckRange,
            &[
                Arg::str(name),
                Arg::float(min),
                Arg::float(max),
                Arg::boolean(integral),
            ],
        )
    }

    pub fn add_command(&self, name: &CStr) {
        self.invoke(GameCall::AddCommand, &[Arg::str(name)])
    }

    pub fn remove_command(&self, name: &CStr) {
        self.invoke(GameCall::RemoveCommand, &[Arg::str(name)])
    }

    /// Seconds since the epoch, with the broken-down local time written into
    /// `time`.
    pub fn real_time(&self, time: &mut QTime) -> i32 {
        self.invoke(GameCall::RealTime, &[Arg::ptr_mut(time)])
    }

    pub fn snap_vector(&self, vector: &mut Vec3) {
        self.invoke(GameCall::SnapVector, &[Arg::ptr_mut(vector)])
    }

    pub fn pc_add_global_define(&self, define: &CStr) -> i32 {
        self.invoke(GameCall::PcAddGlobalDefine, &[Arg::str(define)])
    }

    pub fn pc_remove_global_define(&self, define: &CStr) -> i32 {
        self.invoke(GameCall::PcRemoveGlobalDefine, &[Arg::str(define)])
    }

    pub fn pc_remove_all_global_defines(&self) {
        self.invoke(GameCall::PcRemoveAllGlobalDefines, &[])
    }

    /// Returns the script's handle, zero if it couldn't be loaded.
    pub fn pc_load_source(&self, filename: &CStr, base_path: &CStr) -> i32 {
        self.invoke(
            GameCall::PcLoadSource,
            &[Arg::str(filename), Arg::str(base_path)],
        )
    }

    pub fn pc_free_source(&self, handle: i32) -> i32 {
        self.invoke(GameCall::PcFreeSource, &[Arg::int(handle)])
    }

    /// Adds a define to one open script only.
    pub fn pc_add_define(&self, handle: i32, define: &CStr) -> i32 {
        self.invoke(
            GameCall::PcAddDefine,
            &[Arg::int(handle), Arg::str(define)],
        )
    }

    pub fn pc_read_token(&self, handle: i32, token: &mut PcToken) -> i32 {
        self.invoke(
            GameCall::PcReadToken,
            &[Arg::int(handle), Arg::ptr_mut(token)],
        )
    }

    pub fn pc_unread_token(&self, handle: i32) {
        self.invoke(GameCall::PcUnreadToken, &[Arg::int(handle)])
    }

    pub fn pc_source_file_and_line(
        &self,
        handle: i32,
        filename: &mut [u8; MAX_QPATH_LENGTH],
        line: &mut i32,
    ) -> i32 {
        self.invoke(
            GameCall::PcSourceFileAndLine,
            &[Arg::int(handle), Arg::ptr_mut(filename), Arg::ptr_mut(line)],
        )
    }

    /// Null if the module heap is exhausted.
    pub fn heap_malloc(&self, size: i32) -> *mut c_void {
        self.invoke(GameCall::HeapMalloc, &[Arg::int(size)])
    }

    pub fn heap_available(&self) -> i32 {
        self.invoke(GameCall::HeapAvailable, &[])
    }

    /// ### Safety
    ///
    /// `data` must have been returned by [`GameSyscalls::heap_malloc`], not
    /// freed yet, and not used after this.
    pub unsafe fn heap_free(&self, data: *mut c_void) {
        self.invoke(GameCall::HeapFree, &[Arg::raw(data.cast_const())])
    }

    /// Offers the files in `directory` as console completions.
    pub fn field_complete_filename(
        &self,
        directory: &CStr,
        extension: &CStr,
        strip_extension: bool,
        allow_non_pure_files: bool,
    ) {
        self.invoke(
            GameCall::FieldCompleteFilename,
            &[
                Arg::str(directory),
                Arg::str(extension),
                Arg::boolean(strip_extension),
                Arg::boolean(allow_non_pure_files),
            ],
        )
    }

    pub fn field_complete_command(&self, command: &CStr, commands: bool, cvars: bool) {
        self.invoke(
            GameCall::FieldCompleteCommand,
            &[Arg::str(command), Arg::boolean(commands), Arg::boolean(cvars)],
        )
    }

    /// Offers the given words as console completions. `list` holds
    /// nul-terminated words, and ends with an empty one. Panics otherwise,
    /// since the host reads up to that empty word.
    pub fn field_complete_list(&self, list: &[u8]) {
        assert!(
            list.ends_with(b"\0\0") || list == b"\0",
            "completion lists must end with an empty word",
        );
        self.invoke(GameCall::FieldCompleteList, &[Arg::ptr(list)])
    }

    fn string_query(&self, operation: GameCall, name: &CStr, buffer: &mut [u8]) {
        self.invoke(
            operation,
            &[Arg::str(name), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }
}
