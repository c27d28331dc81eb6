// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server state, snapshots, demos, input, voice chat, cinematics, and camera
//! paths.

use core::ffi::CStr;

use bytemuck::Pod;
use module_abi::{Arg, NetField, UserCmd, Vec3};

use crate::{
    CgameCall, CgameSyscalls, CinematicStatus, ClientState, DemoFileInfo, GameState, JoyEvent,
    Snapshot, DEMO_TIME_LENGTH, MAX_SPLITVIEW,
};

impl CgameSyscalls<'_> {
    /// Milliseconds since the player last sent voice data.
    pub fn get_voip_time(&self, player_num: i32) -> i32 {
        self.invoke(CgameCall::GetVoipTime, &[Arg::int(player_num)])
    }

    pub fn get_voip_power(&self, player_num: i32) -> f32 {
        self.invoke(CgameCall::GetVoipPower, &[Arg::int(player_num)])
    }

    pub fn get_voip_gain(&self, player_num: i32) -> f32 {
        self.invoke(CgameCall::GetVoipGain, &[Arg::int(player_num)])
    }

    pub fn get_voip_mute_player(&self, player_num: i32) -> bool {
        self.invoke(CgameCall::GetVoipMutePlayer, &[Arg::int(player_num)])
    }

    pub fn get_voip_mute_all(&self) -> bool {
        self.invoke(CgameCall::GetVoipMuteAll, &[])
    }

    /// Copies the current config strings.
    pub fn get_game_state(&self, state: &mut GameState) {
        self.invoke(
            CgameCall::GetGameState,
            &[Arg::ptr_mut(state), Arg::size_of::<GameState>()],
        )
    }

    /// The number of the latest snapshot received, and its server time.
    pub fn get_current_snapshot_number(&self) -> (i32, i32) {
        let mut snapshot_number = 0;
        let mut server_time = 0;
        self.invoke::<()>(
            CgameCall::GetCurrentSnapshotNumber,
            &[Arg::ptr_mut(&mut snapshot_number), Arg::ptr_mut(&mut server_time)],
        );
        (snapshot_number, server_time)
    }

    /// Copies a snapshot, if it's still buffered. The player and entity
    /// states are written in the module's own layouts, which the host learns
    /// from [`CgameSyscalls::set_net_fields`].
    ///
    /// Returns false if the snapshot has already been dropped from the
    /// buffer.
    pub fn get_snapshot<P: Pod, E: Pod>(
        &self,
        snapshot_number: i32,
        snapshot: &mut Snapshot,
        player_states: &mut [P; MAX_SPLITVIEW],
        entities: &mut [E],
    ) -> bool {
        self.invoke(
            CgameCall::GetSnapshot,
            &[
                Arg::int(snapshot_number),
                Arg::ptr_mut(snapshot),
                Arg::size_of::<Snapshot>(),
                Arg::ptr_mut(player_states),
                Arg::ptr_mut(entities),
                Arg::len(entities.len()),
            ],
        )
    }

    /// Makes the server command the current command, so its arguments can be
    /// read with [`CgameSyscalls::argv`]. Returns false for commands that
    /// were handled by the host.
    pub fn get_server_command(&self, command_number: i32) -> bool {
        self.invoke(CgameCall::GetServerCommand, &[Arg::int(command_number)])
    }

    pub fn get_current_cmd_number(&self) -> i32 {
        self.invoke(CgameCall::GetCurrentCmdNumber, &[])
    }

    /// Copies one of the local player's recent input frames. Returns false
    /// if it's no longer buffered.
    pub fn get_user_cmd(&self, cmd_number: i32, cmd: &mut UserCmd, local_player_num: i32) -> bool {
        self.invoke(
            CgameCall::GetUserCmd,
            &[
                Arg::int(cmd_number),
                Arg::ptr_mut(cmd),
                Arg::int(local_player_num),
            ],
        )
    }

    /// Tells the host the layouts of the module's entity state `E` and player
    /// state `P`. Only the first `*_network_size` bytes of each are sent
    /// over the network.
    ///
    /// Panics if a network size is larger than its state struct, as the host
    /// would read past the end of it.
    pub fn set_net_fields<E, P>(
        &self,
        entity_network_size: usize,
        entity_fields: &[NetField],
        player_network_size: usize,
        player_fields: &[NetField],
    ) {
        assert!(
            entity_network_size <= size_of::<E>() && player_network_size <= size_of::<P>(),
            "networked sizes must fit in the state structs",
        );
        self.invoke(
            CgameCall::SetNetFields,
            &[
                Arg::size_of::<E>(),
                Arg::len(entity_network_size),
                Arg::ptr(entity_fields),
                Arg::len(entity_fields.len()),
                Arg::size_of::<P>(),
                Arg::len(player_network_size),
                Arg::ptr(player_fields),
                Arg::len(player_fields.len()),
            ],
        )
    }

    pub fn get_demo_state(&self) -> i32 {
        self.invoke(CgameCall::GetDemoState, &[])
    }

    /// Playback position in milliseconds.
    pub fn get_demo_pos(&self) -> i32 {
        self.invoke(CgameCall::GetDemoPos, &[])
    }

    pub fn get_demo_name(&self, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::GetDemoName,
            &[Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    pub fn get_demo_length(&self) -> i32 {
        self.invoke(CgameCall::GetDemoLength, &[])
    }

    /// Reads the header of a demo file. Returns nonzero if the file was
    /// found, along with what the header says. The host gets no lengths for
    /// the time strings, and fills up to [`DEMO_TIME_LENGTH`] bytes of each.
    pub fn get_demo_file_info(&self, demo_name: &CStr) -> (i32, DemoFileInfo) {
        let mut info = DemoFileInfo {
            protocol: 0,
            length: 0,
            start_time: [0; DEMO_TIME_LENGTH],
            end_time: [0; DEMO_TIME_LENGTH],
            run_time: 0,
        };
        let found = self.invoke(
            CgameCall::GetDemoFileInfo,
            &[
                Arg::str(demo_name),
                Arg::ptr_mut(&mut info.protocol),
                Arg::ptr_mut(&mut info.length),
                Arg::ptr_mut(&mut info.start_time),
                Arg::ptr_mut(&mut info.end_time),
                Arg::ptr_mut(&mut info.run_time),
            ],
        );
        (found, info)
    }

    pub fn get_client_state(&self, state: &mut ClientState) {
        self.invoke(
            CgameCall::GetClientState,
            &[Arg::ptr_mut(state), Arg::size_of::<ClientState>()],
        )
    }

    /// Copies one config string. Returns zero if `index` is out of range.
    pub fn get_config_string(&self, index: i32, buffer: &mut [u8]) -> i32 {
        self.invoke(
            CgameCall::GetConfigString,
            &[Arg::int(index), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// Sets the window title's map name part.
    pub fn set_map_title(&self, name: &CStr) {
        self.invoke(CgameCall::SetMapTitle, &[Arg::str(name)])
    }

    pub fn set_view_angles(&self, local_player_num: i32, angles: &Vec3) {
        self.invoke(
            CgameCall::SetViewAngles,
            &[Arg::int(local_player_num), Arg::ptr(angles)],
        )
    }

    pub fn get_view_angles(&self, local_player_num: i32, angles: &mut Vec3) {
        self.invoke(
            CgameCall::GetViewAngles,
            &[Arg::int(local_player_num), Arg::ptr_mut(angles)],
        )
    }

    pub fn key_is_down(&self, key: i32) -> bool {
        self.invoke(CgameCall::KeyIsDown, &[Arg::int(key)])
    }

    /// Releases every key.
    pub fn key_clear_states(&self) {
        self.invoke(CgameCall::KeyClearStates, &[])
    }

    /// The first key from `start_key` on which is bound to `binding`, or -1.
    pub fn key_get_key(&self, binding: &CStr, start_key: i32) -> i32 {
        self.invoke(
            CgameCall::KeyGetKey,
            &[Arg::str(binding), Arg::int(start_key)],
        )
    }

    pub fn key_set_repeat(&self, repeat: bool) {
        self.invoke(CgameCall::KeySetRepeat, &[Arg::boolean(repeat)])
    }

    pub fn key_keynum_to_string_buf(&self, key: i32, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::KeyKeynumToStringBuf,
            &[Arg::int(key), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    pub fn key_get_binding_buf(&self, key: i32, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::KeyGetBindingBuf,
            &[Arg::int(key), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    pub fn key_set_binding(&self, key: i32, binding: &CStr) {
        self.invoke(
            CgameCall::KeySetBinding,
            &[Arg::int(key), Arg::str(binding)],
        )
    }

    pub fn key_set_overstrike_mode(&self, overstrike: bool) {
        self.invoke(
            CgameCall::KeySetOverstrikeMode,
            &[Arg::boolean(overstrike)],
        )
    }

    pub fn key_get_overstrike_mode(&self) -> bool {
        self.invoke(CgameCall::KeyGetOverstrikeMode, &[])
    }

    pub fn key_get_caps_lock_mode(&self) -> bool {
        self.invoke(CgameCall::KeyGetCapsLockMode, &[])
    }

    pub fn key_get_num_lock_mode(&self) -> bool {
        self.invoke(CgameCall::KeyGetNumLockMode, &[])
    }

    /// Which of the local player's mouse inputs are routed to the module.
    pub fn mouse_get_state(&self, local_player_num: i32) -> i32 {
        self.invoke(CgameCall::MouseGetState, &[Arg::int(local_player_num)])
    }

    pub fn mouse_set_state(&self, local_player_num: i32, state: i32) {
        self.invoke(
            CgameCall::MouseSetState,
            &[Arg::int(local_player_num), Arg::int(state)],
        )
    }

    /// Binds a joystick event to a key. Returns the key that was bound to it
    /// before, or -1.
    pub fn set_key_for_joy_event(&self, local_player_num: i32, event: &JoyEvent, key: i32) -> i32 {
        self.invoke(
            CgameCall::SetKeyForJoyEvent,
            &[Arg::int(local_player_num), Arg::ptr(event), Arg::int(key)],
        )
    }

    pub fn get_key_for_joy_event(&self, local_player_num: i32, event: &JoyEvent) -> i32 {
        self.invoke(
            CgameCall::GetKeyForJoyEvent,
            &[Arg::int(local_player_num), Arg::ptr(event)],
        )
    }

    /// Finds the next joystick event from `start_index` on which is bound to
    /// `key`. Returns its index, or -1 if there are no more.
    pub fn get_joy_event_for_key(
        &self,
        local_player_num: i32,
        key: i32,
        start_index: i32,
        event: &mut JoyEvent,
    ) -> i32 {
        self.invoke(
            CgameCall::GetJoyEventForKey,
            &[
                Arg::int(local_player_num),
                Arg::int(key),
                Arg::int(start_index),
                Arg::ptr_mut(event),
            ],
        )
    }

    pub fn joy_event_to_string(&self, event: &JoyEvent, buffer: &mut [u8]) {
        self.invoke(
            CgameCall::JoyEventToString,
            &[Arg::ptr(event), Arg::ptr_mut(buffer), Arg::len(buffer.len())],
        )
    }

    /// Starts a cinematic in the given screen rectangle. Returns its handle,
    /// or a negative value if it couldn't be opened.
    pub fn cin_play_cinematic(
        &self,
        name: &CStr,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        bits: i32,
    ) -> i32 {
        self.invoke(
            CgameCall::CinPlayCinematic,
            &[
                Arg::str(name),
                Arg::int(x),
                Arg::int(y),
                Arg::int(width),
                Arg::int(height),
                Arg::int(bits),
            ],
        )
    }

    pub fn cin_stop_cinematic(&self, handle: i32) -> CinematicStatus {
        self.invoke(CgameCall::CinStopCinematic, &[Arg::int(handle)])
    }

    /// Decodes the cinematic up to the current time.
    pub fn cin_run_cinematic(&self, handle: i32) -> CinematicStatus {
        self.invoke(CgameCall::CinRunCinematic, &[Arg::int(handle)])
    }

    pub fn cin_draw_cinematic(&self, handle: i32) {
        self.invoke(CgameCall::CinDrawCinematic, &[Arg::int(handle)])
    }

    pub fn cin_set_extents(&self, handle: i32, x: i32, y: i32, width: i32, height: i32) {
        self.invoke(
            CgameCall::CinSetExtents,
            &[
                Arg::int(handle),
                Arg::int(x),
                Arg::int(y),
                Arg::int(width),
                Arg::int(height),
            ],
        )
    }

    pub fn load_camera(&self, name: &CStr) -> bool {
        self.invoke(CgameCall::LoadCamera, &[Arg::str(name)])
    }

    /// Starts the loaded camera path at `time`.
    pub fn start_camera(&self, time: i32) {
        self.invoke(CgameCall::StartCamera, &[Arg::int(time)])
    }

    /// Where the camera is at `time`. Returns false once the path has ended.
    pub fn get_camera_info(&self, time: i32, origin: &mut Vec3, angles: &mut Vec3) -> bool {
        self.invoke(
            CgameCall::GetCameraInfo,
            &[Arg::int(time), Arg::ptr_mut(origin), Arg::ptr_mut(angles)],
        )
    }
}
