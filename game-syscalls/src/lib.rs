// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The host operations available to server-side game logic modules.
//!
//! Laid out like `cgame-syscalls`: [`GameCall`] is the call table,
//! [`GameSyscalls`] the typed wrappers, and [`bound`] reaches the host that
//! loaded this module.

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
    module_abi::GatewaySlot::new(module_abi::ModuleKind::Game);

/// The entry point the host calls with its dispatcher right after loading the
/// module library.
///
/// ### Safety
///
/// Must only be called by the host, with a dispatcher that fulfills the
/// requirements of [`module_abi::NativeGateway::new`].
#[cfg(all(feature = "dll-entry", not(target_family = "wasm")))]
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn dllEntry(syscall: module_abi::SyscallFn) {
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

/// The operations of the host this module was loaded by. Calls made before
/// `dllEntry` has run panic.
pub fn bound() -> GameSyscalls<'static> {
    GameSyscalls::new(gateway())
}

/// True if the host has bound its dispatcher (always, on wasm).
pub fn is_bound() -> bool {
    #[cfg(not(target_family = "wasm"))]
    return GATEWAY.is_bound();
    #[cfg(target_family = "wasm")]
    return true;
}
