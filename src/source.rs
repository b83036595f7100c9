/*!
Source classification.

Every safe way to construct a `ZBuilder` goes through the `StrLike` trait:
the source declares, for a given width, whether its storage already carries
a zero terminator or whether it is merely a bounded sequence of units whose
termination has to be decided by looking at the last unit.

This is a closed set of shapes.  Raw pointers are deliberately *not* part of
it; the trust contract they carry makes them the business of the `unsafe`
`ZBuilder::from_ptr` constructor instead.
*/
use std::ffi::{CStr, CString};
#[cfg(unix)]
use std::path::{Path, PathBuf};

use libc::{c_char, wchar_t};
use widestring::{U16CStr, U16CString, U32CStr, U32CString};

use encoding::{Encoding, MultiByte, Utf16, Utf32, Utf8, Wide};

/**
The two shapes a safe source can classify as.
*/
pub enum Classified<'a, U: 'a> {
    /**
    The source guarantees that its own storage ends with a zero unit; the
    reference is to the first unit of that storage.  The builder borrows it
    directly, taking no ownership.
    */
    Terminated(&'a U),

    /**
    A contiguous, sized sequence of units.  Whether its storage can be
    borrowed is decided by inspecting the last unit only.
    */
    Units(&'a [U]),
}

/**
A value that can act as the source of a `ZBuilder` of width `E`.
*/
pub trait StrLike<E>
where
    E: Encoding,
{
    /**
    Classifies this source for the construction decision.
    */
    fn classify(&self) -> Classified<E::Unit>;
}

macro_rules! sequence_impls {
    ($enc:ty, $unit:ty) => {
        impl StrLike<$enc> for [$unit] {
            fn classify(&self) -> Classified<$unit> {
                Classified::Units(self)
            }
        }

        impl<const LEN: usize> StrLike<$enc> for [$unit; LEN] {
            fn classify(&self) -> Classified<$unit> {
                Classified::Units(&self[..])
            }
        }

        impl StrLike<$enc> for Vec<$unit> {
            fn classify(&self) -> Classified<$unit> {
                Classified::Units(&self[..])
            }
        }
    };
}

sequence_impls! { MultiByte, c_char }
sequence_impls! { Wide, wchar_t }
sequence_impls! { Utf8, u8 }
sequence_impls! { Utf16, u16 }
sequence_impls! { Utf32, u32 }

macro_rules! terminated_impls {
    ($enc:ty, $unit:ty, $borrowed:ty, $owned:ty) => {
        impl StrLike<$enc> for $borrowed {
            fn classify(&self) -> Classified<$unit> {
                // `as_ptr` always addresses at least the terminator.
                Classified::Terminated(unsafe { &*self.as_ptr() })
            }
        }

        impl StrLike<$enc> for $owned {
            fn classify(&self) -> Classified<$unit> {
                Classified::Terminated(unsafe { &*self.as_ptr() })
            }
        }
    };
}

terminated_impls! { MultiByte, c_char, CStr, CString }
terminated_impls! { Utf16, u16, U16CStr, U16CString }
terminated_impls! { Utf32, u32, U32CStr, U32CString }

impl StrLike<Utf8> for str {
    fn classify(&self) -> Classified<u8> {
        Classified::Units(self.as_bytes())
    }
}

impl StrLike<Utf8> for String {
    fn classify(&self) -> Classified<u8> {
        Classified::Units(self.as_bytes())
    }
}

/**
Paths classify as bounded sequences of `c_char`: their internal storage
carries no terminator, so they borrow only when empty (via the shared zero)
and copy otherwise.
*/
#[cfg(unix)]
impl StrLike<MultiByte> for Path {
    fn classify(&self) -> Classified<c_char> {
        use std::os::unix::ffi::OsStrExt;

        let bytes = self.as_os_str().as_bytes();
        Classified::Units(unsafe {
            ::std::slice::from_raw_parts(bytes.as_ptr() as *const c_char, bytes.len())
        })
    }
}

#[cfg(unix)]
impl StrLike<MultiByte> for PathBuf {
    fn classify(&self) -> Classified<c_char> {
        StrLike::<MultiByte>::classify(self.as_path())
    }
}
