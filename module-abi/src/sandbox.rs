// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sandboxed builds: on wasm there's no `dllEntry`, the host instead provides
//! the dispatcher as an import, so the gateway is available from the start.

use arrayvec::ArrayVec;

use crate::{Gateway, GenericCall, Word, MAX_CALL_ARGS};

mod host {
    use crate::Word;

    #[link(wasm_import_module = "env")]
    extern "C" {
        /// Imported from the host: performs operation `id` with `count` words
        /// read from `args`.
        pub fn syscall(id: i32, args: *const Word, count: i32) -> Word;
    }
}

/// A [`Gateway`] calling the `env.syscall` import of a sandboxed module.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportGateway;

impl Gateway for ImportGateway {
    fn call(&self, call: &GenericCall) -> Word {
        let words = call
            .args
            .iter()
            .map(|arg| arg.word())
            .collect::<ArrayVec<Word, MAX_CALL_ARGS>>();
        // Safety: the import is provided by the host which loaded this
        // module, and the pointer and count describe `words` exactly. The host
        // only reads the words during the call.
        unsafe { host::syscall(call.id, words.as_ptr(), words.len() as i32) }
    }
}
