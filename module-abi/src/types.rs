// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed-layout types both call tables pass by pointer. These are read and
//! written by the host directly, so their layouts are part of the boundary
//! contract just like the operation ids are.

use bytemuck::{Pod, Zeroable};

use crate::Arg;

/// A point or direction in world space.
pub type Vec3 = [f32; 3];

/// Longest string value a [`VmCvar`] mirrors, including the nul.
pub const MAX_CVAR_VALUE_STRING: usize = 256;
/// Longest token the script precompiler returns, including the nul.
pub const MAX_TOKEN_LENGTH: usize = 1024;
/// Longest path the host writes into path buffers, including the nul.
pub const MAX_QPATH_LENGTH: usize = 1024;

/// A plane hit by a trace.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct CPlane {
    #[allow(missing_docs)]
    pub normal: Vec3,
    /// Distance from the origin along `normal`.
    pub dist: f32,
    /// Which axis the plane is aligned to, if any (0..=2), or 3.
    pub kind: u8,
    /// Bit `n` is set if `normal[n]` is negative.
    pub sign_bits: u8,
    #[allow(missing_docs)]
    pub pad: [u8; 2],
}

/// The result of a collision trace, written by the host.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Trace {
    /// Nonzero if the whole trace was inside a solid.
    pub all_solid: i32,
    /// Nonzero if the trace started inside a solid.
    pub start_solid: i32,
    /// How far along the trace got before hitting something, 1.0 for the
    /// full distance.
    pub fraction: f32,
    /// The final position.
    pub end_pos: Vec3,
    /// The plane that was hit, if `fraction` is below 1.0.
    pub plane: CPlane,
    #[allow(missing_docs)]
    pub surface_flags: i32,
    #[allow(missing_docs)]
    pub contents: i32,
    /// The entity that was hit.
    pub entity_num: i32,
    /// Sideways fraction, for capsule traces.
    pub lateral_fraction: f32,
}

/// An interpolated model tag: a position and a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Orientation {
    #[allow(missing_docs)]
    pub origin: Vec3,
    /// Forward, left and up, in that order.
    pub axis: [Vec3; 3],
}

/// One frame of a player's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct UserCmd {
    #[allow(missing_docs)]
    pub server_time: i32,
    /// View angles, as 16-bit fixed point in the low bits.
    pub angles: [i32; 3],
    #[allow(missing_docs)]
    pub state_value: i32,
    #[allow(missing_docs)]
    pub buttons: i32,
    #[allow(missing_docs)]
    pub weapon: u8,
    #[allow(missing_docs)]
    pub forward_move: i8,
    #[allow(missing_docs)]
    pub right_move: i8,
    #[allow(missing_docs)]
    pub up_move: i8,
}

/// A module-side mirror of a host console variable, refreshed by the cvar
/// update operations.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct VmCvar {
    /// The host's handle for the variable.
    pub handle: i32,
    /// Incremented by the host each time the value changes.
    pub modification_count: i32,
    #[allow(missing_docs)]
    pub value: f32,
    #[allow(missing_docs)]
    pub integer: i32,
    /// The value as a nul-terminated string.
    pub string: [u8; MAX_CVAR_VALUE_STRING],
}

/// Broken down calendar time, as written by the real time operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
#[allow(missing_docs)]
pub struct QTime {
    pub sec: i32,
    pub min: i32,
    pub hour: i32,
    pub month_day: i32,
    pub month: i32,
    pub year: i32,
    pub week_day: i32,
    pub year_day: i32,
    pub is_dst: i32,
}

/// A token read by the host's script precompiler.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PcToken {
    /// String, literal, number, name or punctuation.
    pub kind: i32,
    /// Further classification within `kind`.
    pub subtype: i32,
    #[allow(missing_docs)]
    pub int_value: i32,
    #[allow(missing_docs)]
    pub float_value: f32,
    /// The token text, nul-terminated.
    pub string: [u8; MAX_TOKEN_LENGTH],
}

/// Describes one networked field of a module-defined state struct, for the
/// net field operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct NetField {
    /// Field name, nul-terminated.
    pub name: [u8; 32],
    /// Byte offset of the field in the state struct.
    pub offset: i32,
    /// Width in bits, 0 for floats.
    pub bits: i32,
}

impl NetField {
    /// Creates a field description. Names longer than 31 bytes are cut off.
    pub fn new(name: &str, offset: usize, bits: i32) -> NetField {
        let mut field = NetField::zeroed();
        let len = name.len().min(field.name.len() - 1);
        field.name[..len].copy_from_slice(&name.as_bytes()[..len]);
        field.offset = i32::try_from(offset).unwrap_or(i32::MAX);
        field.bits = bits;
        field
    }
}

/// How the file opening operations open a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
#[allow(missing_docs)]
pub enum FsMode {
    Read = 0,
    Write = 1,
    Append = 2,
    AppendSync = 3,
}

/// Where a seek offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
#[allow(missing_docs)]
pub enum SeekOrigin {
    Current = 0,
    End = 1,
    Start = 2,
}

/// When the host should run text sent with the command execution operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExecWhen {
    /// Right away, before the operation returns.
    Now = 0,
    /// Before the rest of the command buffer.
    Insert = 1,
    /// After the rest of the command buffer.
    Append = 2,
}

impl From<FsMode> for Arg {
    fn from(mode: FsMode) -> Arg {
        Arg::Int(mode as i32)
    }
}

impl From<SeekOrigin> for Arg {
    fn from(origin: SeekOrigin) -> Arg {
        Arg::Int(origin as i32)
    }
}

impl From<ExecWhen> for Arg {
    fn from(when: ExecWhen) -> Arg {
        Arg::Int(when as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::{CPlane, NetField, Orientation, PcToken, QTime, Trace, UserCmd, VmCvar};

    #[test]
    fn layouts_match_the_host() {
        assert_eq!(20, size_of::<CPlane>());
        assert_eq!(60, size_of::<Trace>());
        assert_eq!(48, size_of::<Orientation>());
        assert_eq!(28, size_of::<UserCmd>());
        assert_eq!(272, size_of::<VmCvar>());
        assert_eq!(36, size_of::<QTime>());
        assert_eq!(1040, size_of::<PcToken>());
        assert_eq!(40, size_of::<NetField>());
    }

    #[test]
    fn net_field_names_stay_nul_terminated() {
        let field = NetField::new("a_field_name_that_goes_on_and_on_and_on", 12, 8);
        assert_eq!(0, field.name[31]);
        assert_eq!(b"a_field_name", &field.name[..12]);
        assert_eq!(12, field.offset);

        let short = NetField::new("pos", 0, 0);
        assert_eq!(b"pos\0", &short.name[..4]);
    }
}
