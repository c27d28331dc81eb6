// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod server;
mod system;
mod world;

#[cfg(test)]
mod every_operation;

use core::ffi::{c_void, CStr};

use module_abi::{terminate, Arg, FromWord, Gateway};

use crate::GameCall;

/// The typed host operations of a game logic module.
///
/// One method per [`GameCall`]. Like the cgame wrappers, these pass results on
/// as the host returned them, and write output strings into caller-provided
/// buffers which the host nul-terminates.
#[derive(Clone, Copy)]
pub struct GameSyscalls<'a> {
    gateway: &'a dyn Gateway,
}

impl<'a> GameSyscalls<'a> {
    pub fn new(gateway: &'a dyn Gateway) -> GameSyscalls<'a> {
        GameSyscalls { gateway }
    }

    fn invoke<R: FromWord>(&self, operation: GameCall, args: &[Arg]) -> R {
        module_abi::invoke(self.gateway, operation, args)
    }

    /// Prints text to the server console.
    pub fn print(&self, text: &CStr) {
        self.invoke(GameCall::Print, &[Arg::str(text)])
    }

    /// Reports a fatal error to the host. Never returns, see
    /// [`module_abi::terminate`].
    pub fn error(&self, text: &CStr) -> ! {
        let () = self.invoke(GameCall::Error, &[Arg::str(text)]);
        terminate()
    }

    /// Tells the host where the module keeps its entities and players, so it
    /// can read them directly when building snapshots. Called again whenever
    /// `entity_count` changes.
    ///
    /// The host reads elements with the strides of `E` and `P`, which are
    /// sent along.
    ///
    /// ### Safety
    ///
    /// `entities` must point to at least `entity_count` elements, and
    /// `player_states` to one per client slot. Both must stay valid, and not
    /// move, until they are located again or the module shuts down.
    pub unsafe fn locate_game_data<E, P>(
        &self,
        entities: *mut E,
        entity_count: usize,
        player_states: *mut P,
    ) {
        tracing::debug!(
            entity_count,
            entity_size = size_of::<E>(),
            player_size = size_of::<P>(),
            "locating game data"
        );
        self.invoke(
            GameCall::LocateGameData,
            &[
                Arg::raw(entities.cast_const().cast::<c_void>()),
                Arg::len(entity_count),
                Arg::size_of::<E>(),
                Arg::raw(player_states.cast_const().cast::<c_void>()),
                Arg::size_of::<P>(),
            ],
        )
    }
}
