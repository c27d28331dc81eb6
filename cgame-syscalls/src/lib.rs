// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The host operations available to client-side game modules.
//!
//! [`CgameCall`] is the call table: every operation's id and signature, in
//! the order the host numbers them. [`CgameSyscalls`] wraps each operation in
//! a typed method. A module normally gets those through [`bound`], which
//! reaches the host through the gateway its `dllEntry` bound (with the
//! `dll-entry` feature), or the `env.syscall` import on wasm.

#![no_std]

mod call;
mod syscalls;
mod types;

pub use call::*;
pub use syscalls::*;
pub use types::*;

use module_abi::Gateway;

#[cfg(not(target_family = "wasm"))]
static GATEWAY: module_abi::GatewaySlot =
    module_abi::GatewaySlot::new(module_abi::ModuleKind::Cgame);

/// The entry point the host looks up after loading the module library, and
/// calls once with its dispatcher before anything else.
///
/// ### Safety
///
/// Must only be called by the host, with a dispatcher that fulfills the
/// requirements of [`module_abi::NativeGateway::new`].
#[cfg(all(feature = "dll-entry", not(target_family = "wasm")))]
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn dllEntry(syscall: module_abi::SyscallFn) {
    // A second bind is already logged by the slot, and the first dispatcher
    // stays in use.
    let _ = unsafe { GATEWAY.bind(syscall) };
}

#[cfg(not(target_family = "wasm"))]
fn gateway() -> &'static dyn Gateway {
    &GATEWAY
}

#[cfg(target_family = "wasm")]
fn gateway() -> &'static dyn Gateway {
    &module_abi::ImportGateway
}

/// The operations of the host this module was loaded by.
///
/// Usable from anywhere in the module once `dllEntry` has run. Calls made
/// before that panic.
pub fn bound() -> CgameSyscalls<'static> {
    CgameSyscalls::new(gateway())
}

/// True if the host has bound its dispatcher. Always true on wasm, where the
/// host is reachable through an import.
pub fn is_bound() -> bool {
    #[cfg(not(target_family = "wasm"))]
    return GATEWAY.is_bound();
    #[cfg(target_family = "wasm")]
    return true;
}
