// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use bytemuck::{Pod, Zeroable};

use crate::{Arg, FromWord, Word};

macro_rules! gen_handle_code {
    ($(#[$attr:meta])* $handle_name:ident) => {
        $(#[$attr])*
        pub struct $handle_name(i32);

        impl $handle_name {
            #[doc = concat!("Creates a new [`", stringify!($handle_name), "`]. Generally only the host hands these out.")]
            pub fn new(id: i32) -> $handle_name {
                $handle_name(id)
            }

            #[doc = concat!("Returns the inner value passed into [`", stringify!($handle_name), "::new`].")]
            pub fn inner(self) -> i32 {
                self.0
            }
        }

        impl FromWord for $handle_name {
            fn from_word(word: Word) -> $handle_name {
                $handle_name(i32::from_word(word))
            }
        }

        impl From<$handle_name> for Arg {
            fn from(handle: $handle_name) -> Arg {
                Arg::Int(handle.0)
            }
        }
    };
}

gen_handle_code!(
    /// Host file handle, as returned by the file opening operations.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    FileHandle
);

gen_handle_code!(
    /// Host handle to a registered renderer resource: a model, shader, or skin.
    ///
    /// Zero is what the host returns when registration fails (and also refers
    /// to the default resource of the kind, which is why it isn't an
    /// `Option`). Also stored in the structs the host reads, hence the
    /// transparent layout.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
    #[repr(transparent)]
    QHandle
);

gen_handle_code!(
    /// Host handle to a registered sound effect.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    SfxHandle
);

gen_handle_code!(
    /// Host handle to a collision model.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    ClipHandle
);

impl FileHandle {
    /// The host never hands out zero for an open file.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl QHandle {
    /// False if this is the host's "registration failed" handle.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arg, FromWord};

    use super::{ClipHandle, FileHandle, QHandle, SfxHandle};

    #[test]
    fn handles_travel_as_plain_ints() {
        assert_eq!(Arg::Int(7), Arg::from(FileHandle::new(7)));
        assert_eq!(Arg::Int(-1), Arg::from(QHandle::new(-1)));
        assert_eq!(Arg::Int(3), Arg::from(SfxHandle::new(3)));
        assert_eq!(Arg::Int(12), Arg::from(ClipHandle::new(12)));

        assert_eq!(ClipHandle::new(12), ClipHandle::from_word(12));
        assert_eq!(40, SfxHandle::from_word(40).inner());
    }

    #[test]
    fn zero_is_the_invalid_handle() {
        assert!(!FileHandle::default().is_valid());
        assert!(!QHandle::from_word(0).is_valid());
        assert!(QHandle::new(5).is_valid());
        assert_eq!(0, bytemuck::cast::<QHandle, i32>(QHandle::default()));
    }
}
