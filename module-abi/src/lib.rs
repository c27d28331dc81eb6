// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! This crate mainly revolves around the [`Gateway`] trait, the one way a
//! game module reaches the host engine. Every host operation is a numbered
//! call with a fixed signature, transported as a [`GenericCall`]: the module
//! kind, the operation id, and up to [`MAX_CALL_ARGS`] argument words.
//!
//! The per-module-kind call tables and their typed wrappers live in the
//! `cgame-syscalls` and `game-syscalls` crates. This crate contains the parts
//! both of them need: the float transport codec, the word and argument types,
//! the native and sandboxed gateways, the set-once [`GatewaySlot`] a module's
//! `dllEntry` binds, and the plain-old-data types shared by both tables.
//!
//! This is split off so that the two tables can be compiled (and loaded)
//! independently while agreeing on the calling convention.

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

mod call;
mod codec;
mod handles;
mod native;
#[cfg(target_family = "wasm")]
mod sandbox;
mod signature;
mod slot;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod types;

pub use call::*;
pub use codec::*;
pub use handles::*;
pub use native::*;
#[cfg(target_family = "wasm")]
pub use sandbox::*;
pub use signature::*;
pub use slot::*;
pub use types::*;

use core::fmt::Debug;

use enum_map::Enum;

/// The most argument words any operation in any call table takes.
///
/// The widest operations are the torso tag interpolations, which take fifteen.
pub const MAX_CALL_ARGS: usize = 15;

/// The kinds of modules the host loads. Each kind has its own, independent
/// numbering space for operation ids: the same id means different operations
/// for different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum ModuleKind {
    /// Client-side presentation logic.
    Cgame,
    /// Server-side simulation logic.
    Game,
}

impl ModuleKind {
    /// Short lowercase name, as used in manifests and logs.
    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::Cgame => "cgame",
            ModuleKind::Game => "game",
        }
    }
}

/// The host side of the boundary, as seen from the module.
///
/// The host receives each call as one synchronous round-trip and answers with
/// a single word. Operation-level failures are encoded in that word (negative
/// counts, zero handles, false) and are not interpreted on this side.
///
/// Like the rest of the boundary, this trait is object safe, and the typed
/// wrappers only ever hold a `&dyn Gateway`.
pub trait Gateway {
    /// Perform one numbered operation and return its result word.
    fn call(&self, call: &GenericCall) -> Word;
}

/// An operation in one module kind's call table.
///
/// Implemented by the closed call enums of the syscall crates. Ids are the
/// enum discriminants, contiguous from zero, and never reassigned: new
/// operations are appended at the end.
pub trait Call: Copy + Debug {
    /// The module kind whose numbering space this table belongs to.
    const MODULE: ModuleKind;

    /// The stable operation id.
    fn id(self) -> i32;

    /// Looks up the operation with the given id, if there is one.
    fn from_id(id: i32) -> Option<Self>;

    /// The operation's name and fixed signature.
    fn signature(self) -> Signature;
}

/// Ends the module's process after a fatal error report.
///
/// The host is expected to never return from an error report, but if it does,
/// the module must not continue either. With the `std` feature, this exits
/// with a failure status. Otherwise (and always in this crate's own unit
/// tests) it panics, which aborts on `panic = "abort"` module builds.
pub fn terminate() -> ! {
    #[cfg(all(feature = "std", not(test)))]
    std::process::exit(1);
    #[cfg(not(all(feature = "std", not(test))))]
    panic!("module terminated after reporting a fatal error");
}
