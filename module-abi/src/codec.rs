// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Floats travel through the integer-only call channel as their bit patterns.

/// Reinterprets the bits of `value` as an integer for transport as an argument
/// word. No numeric conversion happens: NaN payloads, signed zeroes and
/// subnormals all survive the trip through [`take_float`].
pub fn pass_float(value: f32) -> i32 {
    bytemuck::cast::<f32, i32>(value)
}

/// Reinterprets an integer received from the other side of the boundary as
/// the float whose bits it holds. The inverse of [`pass_float`].
pub fn take_float(bits: i32) -> f32 {
    bytemuck::cast::<i32, f32>(bits)
}
