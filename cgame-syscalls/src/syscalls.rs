// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod client;
mod collision;
mod lan;
mod renderer;
mod sound;
mod system;

#[cfg(test)]
mod every_operation;

use core::ffi::CStr;

use module_abi::{terminate, Arg, FromWord, Gateway};

use crate::{CgameCall, RefEntity};

/// Lets the module draw some entities itself instead of handing them to the
/// host's renderer.
///
/// Consulted by [`CgameSyscalls::r_add_ref_entity_to_scene`] before anything
/// is sent to the host.
pub trait CustomSurfaces {
    /// Returns true if `entity` was fully taken care of, in which case the
    /// host never hears of it.
    fn add_custom_surface(&self, entity: &RefEntity) -> bool;
}

/// The typed host operations of a cgame module.
///
/// One method per [`CgameCall`], each marshalling its arguments, sending them
/// through the gateway, and converting the result back. Results are passed on
/// as the host returned them: negative counts, zero handles and false are for
/// the caller to interpret.
///
/// Output strings are written into caller-provided byte buffers, which the
/// host always nul-terminates (truncating if needed).
#[derive(Clone, Copy)]
pub struct CgameSyscalls<'a> {
    gateway: &'a dyn Gateway,
    custom_surfaces: Option<&'a dyn CustomSurfaces>,
}

impl<'a> CgameSyscalls<'a> {
    /// Creates the wrappers for the given gateway. Modules generally use
    /// [`crate::bound`] instead, this is for hosts embedding a module and for
    /// tests.
    pub fn new(gateway: &'a dyn Gateway) -> CgameSyscalls<'a> {
        CgameSyscalls {
            gateway,
            custom_surfaces: None,
        }
    }

    /// Routes every entity added to the scene through `handler` first.
    pub fn with_custom_surfaces(self, handler: &'a dyn CustomSurfaces) -> CgameSyscalls<'a> {
        CgameSyscalls {
            custom_surfaces: Some(handler),
            ..self
        }
    }

    fn invoke<R: FromWord>(&self, operation: CgameCall, args: &[Arg]) -> R {
        module_abi::invoke(self.gateway, operation, args)
    }

    /// Prints text to the host's console.
    pub fn print(&self, text: &CStr) {
        self.invoke(CgameCall::Print, &[Arg::str(text)])
    }

    /// Reports a fatal error to the host, which shuts the module down.
    ///
    /// Never returns. Should the host return anyway, the module terminates
    /// itself (see [`module_abi::terminate`]).
    pub fn error(&self, text: &CStr) -> ! {
        let () = self.invoke(CgameCall::Error, &[Arg::str(text)]);
        terminate()
    }

    /// Adds an entity to the scene under construction, unless the
    /// [`CustomSurfaces`] handler takes care of it.
    pub fn r_add_ref_entity_to_scene(&self, entity: &RefEntity) {
        if let Some(handler) = self.custom_surfaces {
            if handler.add_custom_surface(entity) {
                tracing::trace!(kind = entity.kind, "entity drawn as a custom surface");
                return;
            }
        }
        self.invoke(
            CgameCall::RAddRefEntityToScene,
            &[Arg::ptr(entity), Arg::size_of::<RefEntity>()],
        )
    }
}
