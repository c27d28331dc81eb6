// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed-layout types only the cgame table passes by pointer. The ones the
//! host validates the size of (see [`crate::CgameCall::signature`]) are sent
//! along with their `size_of`.

use bytemuck::{Pod, Zeroable};
use module_abi::{FromWord, QHandle, Vec3, Word};

/// How many local players can share one client (split screen).
pub const MAX_SPLITVIEW: usize = 4;
/// Size of the area visibility bitmasks.
pub const MAX_MAP_AREA_BYTES: usize = 32;
/// Amount of config strings in a [`GameState`].
pub const MAX_CONFIGSTRINGS: usize = 1024;
/// Size of the string data of a [`GameState`].
pub const MAX_GAMESTATE_CHARS: usize = 16000;
/// Glyphs in a registered font.
pub const GLYPHS_PER_FONT: usize = 256;
/// Vertices in one [`PolyBuffer`].
pub const MAX_PB_VERTS: usize = 1025;
/// Indices in one [`PolyBuffer`].
pub const MAX_PB_INDICES: usize = MAX_PB_VERTS * 6;
/// Size of the time strings in a demo header. The host writes each one with
/// no length argument, up to this many bytes including the nul.
pub const DEMO_TIME_LENGTH: usize = 64;

/// Something for the renderer to draw, added to the scene under construction.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct RefEntity {
    /// Model, poly, sprite, beam, and so on.
    pub kind: i32,
    pub render_fx: i32,
    pub model: QHandle,

    /// Lighting is sampled from here instead of `origin` if the
    /// corresponding render flag is set.
    pub lighting_origin: Vec3,
    pub shadow_plane: f32,
    pub axis: [Vec3; 3],
    /// Nonzero if `axis` contains scaling and needs renormalizing.
    pub non_normalized_axes: i32,

    pub origin: Vec3,
    pub frame: i32,
    pub frame_model: QHandle,
    pub old_origin: Vec3,
    pub old_frame: i32,
    pub old_frame_model: QHandle,
    /// 0.0 is `frame`, 1.0 is `old_frame`.
    pub backlerp: f32,

    pub torso_frame: i32,
    pub torso_frame_model: QHandle,
    pub old_torso_frame: i32,
    pub old_torso_frame_model: QHandle,
    pub torso_backlerp: f32,
    pub torso_axis: [Vec3; 3],

    pub skin_num: i32,
    pub custom_skin: QHandle,
    pub custom_shader: QHandle,
    pub shader_rgba: [u8; 4],
    pub shader_tex_coord: [f32; 2],
    pub shader_time: f32,

    pub radius: f32,
    pub rotation: f32,
}

/// The view to render a scene from.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct RefDef {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub fov_x: f32,
    pub fov_y: f32,
    pub view_origin: Vec3,
    pub view_axis: [Vec3; 3],
    /// Time in milliseconds, for shader effects.
    pub time: i32,
    pub rd_flags: i32,
    /// One bit per map area, set if the area is visible.
    pub area_mask: [u8; MAX_MAP_AREA_BYTES],
}

/// The renderer's capabilities and current video mode.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GlConfig {
    pub renderer_string: [u8; 1024],
    pub vendor_string: [u8; 1024],
    pub version_string: [u8; 1024],
    pub extensions_string: [u8; 8192],
    pub max_texture_size: i32,
    pub num_texture_units: i32,
    pub color_bits: i32,
    pub depth_bits: i32,
    pub stencil_bits: i32,
    pub driver_type: i32,
    pub hardware_type: i32,
    pub device_supports_gamma: i32,
    pub texture_compression: i32,
    pub texture_env_add_available: i32,
    pub vid_width: i32,
    pub vid_height: i32,
    pub window_aspect: f32,
    pub display_frequency: i32,
    pub is_fullscreen: i32,
    pub stereo_enabled: i32,
    pub smp_active: i32,
}

/// All config strings, as received from the server.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GameState {
    /// Offset of each config string in `string_data`.
    pub string_offsets: [i32; MAX_CONFIGSTRINGS],
    pub string_data: [u8; MAX_GAMESTATE_CHARS],
    /// How much of `string_data` is in use.
    pub data_count: i32,
}

impl GameState {
    /// The config string at `index`, without its nul terminator. Empty for
    /// out-of-range indices and unset strings.
    pub fn config_string(&self, index: usize) -> &[u8] {
        let Some(&offset) = self.string_offsets.get(index) else {
            return &[];
        };
        let Some(data) = usize::try_from(offset)
            .ok()
            .and_then(|offset| self.string_data.get(offset..))
        else {
            return &[];
        };
        let len = data.iter().position(|&c| c == 0).unwrap_or(data.len());
        &data[..len]
    }
}

/// The header of a snapshot. The player states and entities are written into
/// separate, module-defined arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Snapshot {
    pub snap_flags: i32,
    pub ping: i32,
    pub server_time: i32,
    pub num_player_states: i32,
    /// For each local player, the index of their player state, or -1.
    pub local_player_index: [i32; MAX_SPLITVIEW],
    pub player_nums: [i32; MAX_SPLITVIEW],
    pub area_mask: [[u8; MAX_MAP_AREA_BYTES]; MAX_SPLITVIEW],
    pub num_entities: i32,
    pub num_server_commands: i32,
    pub server_command_sequence: i32,
}

/// The client's connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct ClientState {
    pub conn_state: i32,
    pub connect_packet_count: i32,
    pub player_nums: [i32; MAX_SPLITVIEW],
    pub server_name: [u8; 1024],
    pub update_info_string: [u8; 1024],
    pub message_string: [u8; 1024],
}

#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GlyphInfo {
    pub height: i32,
    pub top: i32,
    pub bottom: i32,
    pub pitch: i32,
    pub x_skip: i32,
    pub image_width: i32,
    pub image_height: i32,
    pub s: f32,
    pub t: f32,
    pub s2: f32,
    pub t2: f32,
    pub glyph: QHandle,
    pub shader_name: [u8; 32],
}

/// A registered font, written by the host.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct FontInfo {
    pub glyphs: [GlyphInfo; GLYPHS_PER_FONT],
    pub glyph_scale: f32,
    pub name: [u8; 64],
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct PolyVert {
    pub xyz: Vec3,
    pub st: [f32; 2],
    pub modulate: [u8; 4],
}

/// A batch of transient geometry sharing one shader.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PolyBuffer {
    pub xyz: [[f32; 4]; MAX_PB_VERTS],
    pub st: [[f32; 2]; MAX_PB_VERTS],
    pub color: [[u8; 4]; MAX_PB_VERTS],
    pub num_verts: i32,
    pub indices: [u32; MAX_PB_INDICES],
    pub num_indices: i32,
    pub shader: QHandle,
}

/// A fragment of a decal projected onto the world, pointing into the point
/// buffer passed alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct MarkFragment {
    pub first_point: i32,
    pub num_points: i32,
    pub bmodel_num: i32,
}

/// A joystick button, hat or axis movement that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct JoyEvent {
    /// Button, hat or axis.
    pub kind: i32,
    /// Which button, hat or axis.
    pub index: i32,
    /// Hat mask or axis sign, unused for buttons.
    pub value: i32,
}

/// The fog model of a fog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct FogKind(pub i32);

impl FogKind {
    pub const NONE: FogKind = FogKind(0);
    pub const EXPONENTIAL: FogKind = FogKind(1);
    pub const LINEAR: FogKind = FogKind(2);
}

/// Fog settings, as answered by the fog queries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fog {
    pub kind: FogKind,
    pub color: Vec3,
    pub depth_for_opaque: f32,
    pub density: f32,
    pub far_clip: f32,
}

/// Playback state of a cinematic. Returned as a plain integer, so values
/// outside the known constants are passed on as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CinematicStatus(pub i32);

impl CinematicStatus {
    pub const IDLE: CinematicStatus = CinematicStatus(0);
    pub const PLAY: CinematicStatus = CinematicStatus(1);
    pub const EOF: CinematicStatus = CinematicStatus(2);
    pub const ID_BLT: CinematicStatus = CinematicStatus(3);
    pub const ID_IDLE: CinematicStatus = CinematicStatus(4);
    pub const LOOPED: CinematicStatus = CinematicStatus(5);
    pub const ID_WAIT: CinematicStatus = CinematicStatus(6);
}

impl FromWord for CinematicStatus {
    fn from_word(word: Word) -> CinematicStatus {
        CinematicStatus(i32::from_word(word))
    }
}

/// Everything a demo file's header describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoFileInfo {
    pub protocol: i32,
    /// Length in milliseconds.
    pub length: i32,
    /// Wall clock time the recording started, nul-terminated.
    pub start_time: [u8; DEMO_TIME_LENGTH],
    /// Wall clock time the recording ended, nul-terminated.
    pub end_time: [u8; DEMO_TIME_LENGTH],
    /// Seconds since the epoch the file was created.
    pub run_time: i32,
}

#[cfg(test)]
mod tests {
    use bytemuck::Zeroable;

    use super::{GameState, PolyVert, MAX_GAMESTATE_CHARS};

    #[test]
    fn poly_verts_are_tightly_packed() {
        assert_eq!(24, size_of::<PolyVert>());
    }

    #[test]
    fn config_strings_are_read_from_the_string_data() {
        let mut state = GameState::zeroed();
        state.string_data[1..6].copy_from_slice(b"q3dm1");
        state.string_offsets[3] = 1;
        state.string_offsets[4] = MAX_GAMESTATE_CHARS as i32 + 10;
        state.string_offsets[5] = -1;

        assert_eq!(b"q3dm1", state.config_string(3));
        assert_eq!(b"", state.config_string(0), "offset 0 is the empty string");
        assert_eq!(b"", state.config_string(4));
        assert_eq!(b"", state.config_string(5));
        assert_eq!(b"", state.config_string(100_000));
    }
}
