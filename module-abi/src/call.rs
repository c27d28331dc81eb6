// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::ffi::{c_void, CStr};

use enum_map::Enum;

use crate::{pass_float, take_float, Call, Gateway, ModuleKind};

/// A machine-pointer-sized value, the uniform argument and return slot of the
/// call channel. Matches the C `intptr_t` the host's dispatcher works with.
pub type Word = isize;

/// One argument of a [`GenericCall`], tagged with how it was marshalled.
///
/// The tag only exists on this side of the boundary, the host receives plain
/// words (see [`Arg::word`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    /// An integer, boolean, handle, length, or enum value.
    Int(i32),
    /// An address the host may read from or write to.
    Ptr(*const c_void),
    /// The bits of a float, as produced by [`pass_float`].
    Float(i32),
}

impl Arg {
    /// Marshals an integer.
    pub fn int(value: i32) -> Arg {
        Arg::Int(value)
    }

    /// Marshals a boolean as 1 or 0.
    pub fn boolean(value: bool) -> Arg {
        Arg::Int(value as i32)
    }

    /// Marshals a float by reinterpreting its bits.
    pub fn float(value: f32) -> Arg {
        Arg::Float(pass_float(value))
    }

    /// Marshals the address of a value the host will only read.
    pub fn ptr<T: ?Sized>(value: &T) -> Arg {
        Arg::Ptr((value as *const T).cast())
    }

    /// Marshals the address of a value the host may write into.
    pub fn ptr_mut<T: ?Sized>(value: &mut T) -> Arg {
        Arg::Ptr((value as *mut T).cast_const().cast())
    }

    /// Marshals an optional read-only value, with `None` as a null pointer.
    pub fn opt_ptr<T>(value: Option<&T>) -> Arg {
        match value {
            Some(value) => Arg::ptr(value),
            None => Arg::null(),
        }
    }

    /// Marshals a raw address as-is.
    pub fn raw(ptr: *const c_void) -> Arg {
        Arg::Ptr(ptr)
    }

    /// A null pointer.
    pub fn null() -> Arg {
        Arg::Ptr(core::ptr::null())
    }

    /// Marshals a nul-terminated string.
    pub fn str(value: &CStr) -> Arg {
        Arg::Ptr(value.as_ptr().cast())
    }

    /// Marshals the length of a buffer or the element count of an array.
    ///
    /// Lengths that don't fit in the 32-bit channel are clamped: the host
    /// will then use less of the buffer than it has, never more.
    pub fn len(len: usize) -> Arg {
        Arg::Int(i32::try_from(len).unwrap_or(i32::MAX))
    }

    /// Marshals the byte size of `T`, for operations which pass a
    /// fixed-layout struct (or an array of them) by pointer and let the host
    /// validate the layout it's about to read or write.
    pub fn size_of<T>() -> Arg {
        Arg::len(size_of::<T>())
    }

    /// The word this argument is transported as.
    pub fn word(self) -> Word {
        match self {
            Arg::Int(value) | Arg::Float(value) => value as Word,
            Arg::Ptr(ptr) => ptr as Word,
        }
    }
}

/// One call across the boundary: which module kind's table, which operation,
/// and the marshalled arguments. Only lives for the duration of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericCall<'a> {
    /// The numbering space `id` belongs to.
    pub module: ModuleKind,
    /// The operation id within `module`'s table.
    pub id: i32,
    /// The arguments, in the operation's declared order.
    pub args: &'a [Arg],
}

impl GenericCall<'_> {
    /// The operation this call refers to in table `C`, if `C` is the table
    /// of the module kind which issued the call.
    pub fn operation<C: Call>(&self) -> Option<C> {
        if self.module == C::MODULE {
            C::from_id(self.id)
        } else {
            None
        }
    }
}

/// Conversion of the single result word back into an operation's declared
/// return type.
pub trait FromWord {
    /// Converts the result word. Must not fail: any failure sentinel the host
    /// returned is passed on as-is for the caller to interpret.
    fn from_word(word: Word) -> Self;
}

impl FromWord for () {
    fn from_word(_: Word) {}
}

impl FromWord for i32 {
    fn from_word(word: Word) -> i32 {
        word as i32
    }
}

impl FromWord for bool {
    fn from_word(word: Word) -> bool {
        word as i32 != 0
    }
}

impl FromWord for f32 {
    fn from_word(word: Word) -> f32 {
        take_float(word as i32)
    }
}

impl FromWord for *mut c_void {
    fn from_word(word: Word) -> *mut c_void {
        word as *mut c_void
    }
}

/// Builds the [`GenericCall`] for `operation` and sends it through `gateway`,
/// returning the raw result word.
///
/// This is the only place calls enter a gateway from the typed wrappers. In
/// debug builds the arguments are checked against the operation's registered
/// [`Signature`](crate::Signature), so a wrapper that disagrees with the call
/// table (wrong arity, a float passed as an integer, a struct size that
/// doesn't match the registered layout) panics instead of reaching the host.
pub fn dispatch<C: Call>(gateway: &dyn Gateway, operation: C, args: &[Arg]) -> Word {
    if cfg!(debug_assertions) {
        if let Err(mismatch) = operation.signature().check(args) {
            panic!("{operation:?} was marshalled incorrectly: {mismatch}");
        }
    }
    gateway.call(&GenericCall {
        module: C::MODULE,
        id: operation.id(),
        args,
    })
}

/// [`dispatch`], with the result converted to the operation's return type.
pub fn invoke<C: Call, R: FromWord>(gateway: &dyn Gateway, operation: C, args: &[Arg]) -> R {
    R::from_word(dispatch(gateway, operation, args))
}

/// Every operation of table `C`, in id order.
pub fn operations<C: Call + Enum>() -> impl Iterator<Item = C> {
    (0..C::LENGTH).map(C::from_usize)
}
