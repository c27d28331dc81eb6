// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! A fake host for tests: records every call it receives and answers with
//! canned result words.

use core::cell::{Cell, RefCell};

use arrayvec::ArrayVec;
use enum_map::Enum;

use crate::{operations, Arg, Call, Gateway, GenericCall, ModuleKind, Word, MAX_CALL_ARGS};

/// A [`GenericCall`] with its arguments copied out, as seen by
/// [`RecordingGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The numbering space of `id`.
    pub module: ModuleKind,
    /// The operation id.
    pub id: i32,
    /// The marshalled arguments.
    pub args: ArrayVec<Arg, MAX_CALL_ARGS>,
}

impl RecordedCall {
    /// True if this is a call of `operation`.
    pub fn is<C: Call>(&self, operation: C) -> bool {
        self.module == C::MODULE && self.id == operation.id()
    }
}

/// A [`Gateway`] which records the calls it receives and returns a fixed word
/// (or a per-operation override) for each.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    calls: RefCell<ArrayVec<RecordedCall, 64>>,
    reply: Cell<Word>,
    overrides: RefCell<ArrayVec<(ModuleKind, i32, Word), 16>>,
}

impl RecordingGateway {
    /// Creates a gateway that answers every call with zero.
    pub fn new() -> RecordingGateway {
        RecordingGateway::default()
    }

    /// Creates a gateway that answers every call with `reply`.
    pub fn replying(reply: Word) -> RecordingGateway {
        let gateway = RecordingGateway::default();
        gateway.reply.set(reply);
        gateway
    }

    /// Makes calls of `operation` return `reply` instead of the default.
    pub fn reply_to<C: Call>(&self, operation: C, reply: Word) {
        self.overrides
            .borrow_mut()
            .push((C::MODULE, operation.id(), reply));
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> ArrayVec<RecordedCall, 64> {
        self.calls.borrow().clone()
    }

    /// The most recently received call.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.borrow().last().cloned()
    }

    /// How many calls of `operation` were received.
    pub fn count<C: Call>(&self, operation: C) -> usize {
        let calls = self.calls.borrow();
        calls.iter().filter(|call| call.is(operation)).count()
    }
}

impl Gateway for RecordingGateway {
    fn call(&self, call: &GenericCall) -> Word {
        let recorded = RecordedCall {
            module: call.module,
            id: call.id,
            args: call.args.iter().copied().collect(),
        };
        self.calls
            .borrow_mut()
            .try_push(recorded)
            .expect("RecordingGateway only records 64 calls");

        let overrides = self.overrides.borrow();
        overrides
            .iter()
            .find(|(module, id, _)| *module == call.module && *id == call.id)
            .map(|(_, _, reply)| *reply)
            .unwrap_or(self.reply.get())
    }
}

/// Panics if table `C` breaks any of the rules every call table follows: ids
/// are the enum indices (so contiguous from zero), [`Call::from_id`] inverts
/// [`Call::id`], names are unique, and no operation takes more than
/// [`MAX_CALL_ARGS`] words. Returns the widest arity in the table.
pub fn assert_table_is_well_formed<C: Call + Enum + PartialEq>() -> usize {
    let mut widest = 0;
    for (index, operation) in operations::<C>().enumerate() {
        let signature = operation.signature();
        assert_eq!(index as i32, operation.id(), "{operation:?} is out of order");
        assert_eq!(Some(operation), C::from_id(operation.id()));
        assert!(
            signature.arity() <= MAX_CALL_ARGS,
            "{operation:?} takes {} arguments",
            signature.arity(),
        );
        widest = widest.max(signature.arity());

        for other in operations::<C>().skip(index + 1) {
            assert_ne!(
                signature.name,
                other.signature().name,
                "{operation:?} and {other:?} share a name",
            );
        }
    }
    assert_eq!(None, C::from_id(-1));
    assert_eq!(None, C::from_id(C::LENGTH as i32));
    widest
}

/// A small call table for this crate's own tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum TestCall {
    Print,
    Error,
    Read,
    Value,
    Exists,
    Milliseconds,
}

#[cfg(test)]
impl Call for TestCall {
    const MODULE: ModuleKind = ModuleKind::Game;

    fn id(self) -> i32 {
        self as i32
    }

    fn from_id(id: i32) -> Option<TestCall> {
        let index = usize::try_from(id).ok()?;
        (index < TestCall::LENGTH).then(|| TestCall::from_usize(index))
    }

    fn signature(self) -> crate::Signature {
        use crate::{ArgKind::*, ReturnKind, Signature};
        match self {
            TestCall::Print => Signature::new("TEST_PRINT", &[Ptr], ReturnKind::Void),
            TestCall::Error => Signature::new("TEST_ERROR", &[Ptr], ReturnKind::Void),
            TestCall::Read => Signature::new("TEST_READ", &[Ptr, Len], ReturnKind::Int),
            TestCall::Value => Signature::new("TEST_VALUE", &[Ptr], ReturnKind::Float),
            TestCall::Exists => Signature::new("TEST_EXISTS", &[Int], ReturnKind::Bool),
            TestCall::Milliseconds => Signature::new("TEST_MILLISECONDS", &[], ReturnKind::Int),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{dispatch, Arg, Call, GenericCall, ModuleKind};

    use super::{assert_table_is_well_formed, RecordingGateway, TestCall};

    #[test]
    fn test_table_is_well_formed() {
        assert_eq!(2, assert_table_is_well_formed::<TestCall>());
    }

    #[test]
    fn overrides_apply_to_their_operation_only() {
        let gateway = RecordingGateway::replying(7);
        gateway.reply_to(TestCall::Read, -1);

        assert_eq!(-1, dispatch(&gateway, TestCall::Read, &[Arg::null(), Arg::len(4)]));
        assert_eq!(7, dispatch(&gateway, TestCall::Milliseconds, &[]));
        assert_eq!(1, gateway.count(TestCall::Read));
        assert_eq!(2, gateway.calls().len());
    }

    #[test]
    fn generic_calls_resolve_only_in_their_own_table() {
        let args = [];
        let call = GenericCall {
            module: ModuleKind::Game,
            id: 5,
            args: &args,
        };
        assert_eq!(Some(TestCall::Milliseconds), call.operation::<TestCall>());

        let other_kind = GenericCall {
            module: ModuleKind::Cgame,
            ..call
        };
        assert_eq!(None, other_kind.operation::<TestCall>());
        assert_eq!(None, TestCall::from_id(6));
        assert_eq!(None, TestCall::from_id(-1));
    }
}
