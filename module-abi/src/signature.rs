// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::fmt::{self, Display};

use crate::{Arg, MAX_CALL_ARGS};

/// What an argument word of an operation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// A signed 32-bit integer, handle, or enum value.
    Int,
    /// A boolean, as 1 or 0.
    Bool,
    /// A float, transported by bits.
    Float,
    /// An opaque pointer: a string, an out-parameter, a buffer, a struct.
    Ptr,
    /// The byte length or element count of a neighbouring buffer pointer.
    Len,
    /// The byte size of the fixed-layout struct passed by pointer just before
    /// it. Holds the size the table was declared with, which is what the
    /// module must send.
    StructSize(usize),
    /// The byte size of a module-defined element type the host indexes into
    /// (e.g. the module's entity struct). Not known to the table.
    ElementSize,
}

impl ArgKind {
    /// Short name used in manifests.
    pub fn name(self) -> &'static str {
        match self {
            ArgKind::Int => "int",
            ArgKind::Bool => "bool",
            ArgKind::Float => "float",
            ArgKind::Ptr => "ptr",
            ArgKind::Len => "len",
            ArgKind::StructSize(_) => "struct_size",
            ArgKind::ElementSize => "element_size",
        }
    }
}

/// What the result word of an operation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    /// Nothing, the word is ignored.
    Void,
    /// A signed 32-bit integer or handle.
    Int,
    /// A boolean, nonzero for true.
    Bool,
    /// An address in the module's memory.
    Ptr,
    /// A float, transported by bits.
    Float,
    /// A small enum, as an integer.
    Enum,
}

impl ReturnKind {
    /// Short name used in manifests.
    pub fn name(self) -> &'static str {
        match self {
            ReturnKind::Void => "void",
            ReturnKind::Int => "int",
            ReturnKind::Bool => "bool",
            ReturnKind::Ptr => "ptr",
            ReturnKind::Float => "float",
            ReturnKind::Enum => "enum",
        }
    }
}

/// The fixed signature of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// The operation's name in the host's table, e.g. `"CG_R_RENDERSCENE"`.
    pub name: &'static str,
    /// Argument kinds in call order. The length is the operation's arity.
    pub args: &'static [ArgKind],
    /// What the result word carries.
    pub ret: ReturnKind,
}

impl Signature {
    /// Creates a signature.
    pub const fn new(name: &'static str, args: &'static [ArgKind], ret: ReturnKind) -> Signature {
        Signature { name, args, ret }
    }

    /// The amount of argument words the operation takes.
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// The struct size words this operation sends, with their positions.
    pub fn struct_sizes(&self) -> impl Iterator<Item = (usize, usize)> + 'static {
        let args: &'static [ArgKind] = self.args;
        args.iter().enumerate().filter_map(|(i, kind)| match kind {
            ArgKind::StructSize(size) => Some((i, *size)),
            _ => None,
        })
    }

    /// Checks that `args` were marshalled the way this signature declares.
    pub fn check(&self, args: &[Arg]) -> Result<(), SignatureMismatch> {
        if args.len() != self.args.len() || args.len() > MAX_CALL_ARGS {
            return Err(SignatureMismatch::Arity {
                expected: self.args.len(),
                actual: args.len(),
            });
        }
        for (index, (kind, arg)) in self.args.iter().zip(args).enumerate() {
            let matches = match (kind, arg) {
                (ArgKind::Int | ArgKind::Len | ArgKind::ElementSize, Arg::Int(_)) => true,
                (ArgKind::Bool, Arg::Int(value)) => *value == 0 || *value == 1,
                (ArgKind::Float, Arg::Float(_)) => true,
                (ArgKind::Ptr, Arg::Ptr(_)) => true,
                (ArgKind::StructSize(size), Arg::Int(sent)) => {
                    if usize::try_from(*sent).ok() != Some(*size) {
                        return Err(SignatureMismatch::StructSize {
                            index,
                            expected: *size,
                            actual: *sent,
                        });
                    }
                    true
                }
                _ => false,
            };
            if !matches {
                return Err(SignatureMismatch::Kind {
                    index,
                    expected: *kind,
                    actual: *arg,
                });
            }
        }
        Ok(())
    }
}

/// How a marshalled call disagreed with its operation's [`Signature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMismatch {
    /// Wrong amount of argument words.
    Arity {
        /// The declared arity.
        expected: usize,
        /// The amount of words marshalled.
        actual: usize,
    },
    /// An argument was marshalled as the wrong kind of word.
    Kind {
        /// Position of the argument.
        index: usize,
        /// The declared kind.
        expected: ArgKind,
        /// The marshalled word.
        actual: Arg,
    },
    /// A struct size word doesn't match the size the table declares.
    StructSize {
        /// Position of the size word.
        index: usize,
        /// The declared struct size.
        expected: usize,
        /// The size that was sent.
        actual: i32,
    },
}

impl Display for SignatureMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureMismatch::Arity { expected, actual } => {
                write!(f, "expected {expected} arguments, got {actual}")
            }
            SignatureMismatch::Kind {
                index,
                expected,
                actual,
            } => write!(f, "argument {index} should be {expected:?}, got {actual:?}"),
            SignatureMismatch::StructSize {
                index,
                expected,
                actual,
            } => write!(
                f,
                "argument {index} should be the struct size {expected}, got {actual}",
            ),
        }
    }
}

impl core::error::Error for SignatureMismatch {}
