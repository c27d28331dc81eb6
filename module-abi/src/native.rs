// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use arrayvec::ArrayVec;

use crate::{Gateway, GenericCall, Word, MAX_CALL_ARGS};

/// The host's dispatcher as handed to a native module's `dllEntry`: the
/// operation id followed by the argument words, C variadic.
pub type SyscallFn = unsafe extern "C" fn(Word, ...) -> Word;

/// A [`Gateway`] calling straight into the host's variadic dispatcher.
#[derive(Clone, Copy)]
pub struct NativeGateway {
    syscall: SyscallFn,
}

impl NativeGateway {
    /// Wraps the dispatcher the host passed to `dllEntry`.
    ///
    /// ### Safety
    ///
    /// `syscall` must be the host's dispatcher for the module kind the calls
    /// will be issued as, and stay callable for as long as this gateway is
    /// used. The host dereferences the pointer arguments of each call, so the
    /// host and module must agree on the call table and the struct layouts.
    pub unsafe fn new(syscall: SyscallFn) -> NativeGateway {
        NativeGateway { syscall }
    }
}

impl Gateway for NativeGateway {
    fn call(&self, call: &GenericCall) -> Word {
        let words = call
            .args
            .iter()
            .map(|arg| arg.word())
            .collect::<ArrayVec<Word, MAX_CALL_ARGS>>();
        let id = call.id as Word;
        let f = self.syscall;

        // Safety: NativeGateway::new requires the pointer to be the host's
        // dispatcher, which reads exactly as many words as the operation's
        // signature declares. dispatch() checks the arity against that
        // signature, and variadic calls with more words than the callee reads
        // are fine in the C calling conventions anyway.
        unsafe {
            match words.as_slice() {
                [] => f(id),
                [a] => f(id, *a),
                [a, b] => f(id, *a, *b),
                [a, b, c] => f(id, *a, *b, *c),
                [a, b, c, d] => f(id, *a, *b, *c, *d),
                [a, b, c, d, e] => f(id, *a, *b, *c, *d, *e),
                [a, b, c, d, e, g] => f(id, *a, *b, *c, *d, *e, *g),
                [a, b, c, d, e, g, h] => f(id, *a, *b, *c, *d, *e, *g, *h),
                [a, b, c, d, e, g, h, i] => f(id, *a, *b, *c, *d, *e, *g, *h, *i),
                [a, b, c, d, e, g, h, i, j] => f(id, *a, *b, *c, *d, *e, *g, *h, *i, *j),
                [a, b, c, d, e, g, h, i, j, k] => {
                    f(id, *a, *b, *c, *d, *e, *g, *h, *i, *j, *k)
                }
                [a, b, c, d, e, g, h, i, j, k, l] => {
                    f(id, *a, *b, *c, *d, *e, *g, *h, *i, *j, *k, *l)
                }
                [a, b, c, d, e, g, h, i, j, k, l, m] => {
                    f(id, *a, *b, *c, *d, *e, *g, *h, *i, *j, *k, *l, *m)
                }
                [a, b, c, d, e, g, h, i, j, k, l, m, n] => {
                    f(id, *a, *b, *c, *d, *e, *g, *h, *i, *j, *k, *l, *m, *n)
                }
                [a, b, c, d, e, g, h, i, j, k, l, m, n, o] => {
                    f(id, *a, *b, *c, *d, *e, *g, *h, *i, *j, *k, *l, *m, *n, *o)
                }
                [a, b, c, d, e, g, h, i, j, k, l, m, n, o, p] => {
                    f(id, *a, *b, *c, *d, *e, *g, *h, *i, *j, *k, *l, *m, *n, *o, *p)
                }
                _ => unreachable!("ArrayVec capacity is MAX_CALL_ARGS"),
            }
        }
    }
}
