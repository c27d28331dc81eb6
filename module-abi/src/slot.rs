// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::fmt::{self, Display};

use crossbeam_utils::atomic::AtomicCell;

use crate::{Gateway, GenericCall, ModuleKind, NativeGateway, SyscallFn, Word};

/// The process-wide "how to reach the host" of a native module.
///
/// Starts out unbound, and is bound exactly once, by the module's `dllEntry`,
/// right after the host loads the module. There's no way back to unbound: a
/// fresh bind needs a fresh load of the module (and so a fresh slot).
///
/// Calls made through an unbound slot panic. Continuing without a host would
/// only corrupt everything after it, so this is treated like calling through
/// an invalid address, but detected instead of jumping to one.
pub struct GatewaySlot {
    module: ModuleKind,
    syscall: AtomicCell<Option<SyscallFn>>,
}

impl GatewaySlot {
    /// Creates an unbound slot for a module of the given kind. Intended to be
    /// used to initialize a `static`.
    pub const fn new(module: ModuleKind) -> GatewaySlot {
        GatewaySlot {
            module,
            syscall: AtomicCell::new(None),
        }
    }

    /// Binds the host's dispatcher. Returns [`AlreadyBound`] (leaving the
    /// first dispatcher in place) if the slot has already been bound.
    ///
    /// ### Safety
    ///
    /// The same requirements as [`NativeGateway::new`] apply to `syscall`,
    /// for the rest of the process' lifetime.
    pub unsafe fn bind(&self, syscall: SyscallFn) -> Result<(), AlreadyBound> {
        match self.syscall.compare_exchange(None, Some(syscall)) {
            Ok(_) => {
                tracing::debug!(module = self.module.name(), "gateway bound");
                Ok(())
            }
            Err(_) => {
                tracing::error!(
                    module = self.module.name(),
                    "gateway bound a second time, keeping the first one"
                );
                Err(AlreadyBound {
                    module: self.module,
                })
            }
        }
    }

    /// True after a successful [`GatewaySlot::bind`].
    pub fn is_bound(&self) -> bool {
        self.syscall.load().is_some()
    }

    /// The bound dispatcher, if any.
    pub fn syscall(&self) -> Option<SyscallFn> {
        self.syscall.load()
    }

    /// The module kind this slot was created for.
    pub fn module(&self) -> ModuleKind {
        self.module
    }
}

impl Gateway for GatewaySlot {
    fn call(&self, call: &GenericCall) -> Word {
        let Some(syscall) = self.syscall.load() else {
            tracing::error!(
                module = self.module.name(),
                id = call.id,
                "called the host before dllEntry bound the gateway"
            );
            panic!(
                "{} operation {} called before dllEntry bound the gateway",
                self.module.name(),
                call.id,
            );
        };
        // Safety: GatewaySlot::bind has the same requirements as
        // NativeGateway::new.
        let gateway = unsafe { NativeGateway::new(syscall) };
        gateway.call(call)
    }
}

/// Returned by [`GatewaySlot::bind`] when the slot was already bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyBound {
    /// The kind of the module whose slot was bound twice.
    pub module: ModuleKind,
}

impl Display for AlreadyBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the {} gateway is already bound", self.module.name())
    }
}

impl core::error::Error for AlreadyBound {}

#[cfg(test)]
mod tests {
    use crate::{invoke, testing::TestCall, Arg, Gateway, GenericCall, ModuleKind, SyscallFn, Word};

    use super::{AlreadyBound, GatewaySlot};

    extern "C" fn first_host(_id: Word) -> Word {
        1
    }

    extern "C" fn second_host(_id: Word) -> Word {
        2
    }

    /// Only used to exercise the binding state, the result is never called.
    fn as_syscall(f: extern "C" fn(Word) -> Word) -> SyscallFn {
        // Safety: function pointers are the same size, and the result is
        // never called.
        unsafe { core::mem::transmute::<extern "C" fn(Word) -> Word, SyscallFn>(f) }
    }

    #[test]
    fn binds_exactly_once() {
        let slot = GatewaySlot::new(ModuleKind::Cgame);
        assert!(!slot.is_bound());

        // Safety: the slot is never called through.
        unsafe { slot.bind(as_syscall(first_host)) }.unwrap();
        assert!(slot.is_bound());

        // Safety: the slot is never called through.
        let second = unsafe { slot.bind(as_syscall(second_host)) };
        assert_eq!(
            Err(AlreadyBound {
                module: ModuleKind::Cgame
            }),
            second,
        );
        assert_eq!(
            (first_host as extern "C" fn(Word) -> Word) as usize,
            slot.syscall().unwrap() as usize,
            "a second bind replaced the first gateway",
        );
    }

    // Apple arm64 passes variadic arguments on the stack.
    #[cfg(not(all(target_arch = "aarch64", target_vendor = "apple")))]
    /// Answers `TestCall::Read` with the buffer's length if the buffer starts
    /// with "ok", and with -1 for anything else.
    extern "C" fn reading_host(id: Word, buffer: Word, length: Word) -> Word {
        if id != TestCall::Read as Word || length < 2 {
            return -1;
        }
        // Safety: the test passes a buffer of `length` bytes.
        let start = unsafe { core::slice::from_raw_parts(buffer as *const u8, 2) };
        if start == b"ok" {
            length
        } else {
            -1
        }
    }

    #[cfg(not(all(target_arch = "aarch64", target_vendor = "apple")))]
    #[test]
    fn calls_reach_the_bound_host() {
        static SLOT: GatewaySlot = GatewaySlot::new(ModuleKind::Game);
        let host = reading_host as extern "C" fn(Word, Word, Word) -> Word;
        // Safety: reading_host reads its integer arguments from the same
        // places a variadic callee would, on the targets these tests run on.
        unsafe { SLOT.bind(core::mem::transmute::<_, SyscallFn>(host)) }.unwrap();

        let buffer = *b"ok, 9 bytes";
        let read: i32 = invoke(&SLOT, TestCall::Read, &[Arg::ptr(&buffer), Arg::len(9)]);
        assert_eq!(9, read);

        let wrong: i32 = invoke(&SLOT, TestCall::Read, &[Arg::ptr(b"no"), Arg::len(2)]);
        assert_eq!(-1, wrong);
    }

    #[test]
    #[should_panic = "called before dllEntry bound the gateway"]
    fn calls_through_an_unbound_slot_fail_fast() {
        let slot = GatewaySlot::new(ModuleKind::Game);
        slot.call(&GenericCall {
            module: ModuleKind::Game,
            id: 2,
            args: &[],
        });
    }
}
