/*!
This crate adapts heterogeneous "string-like" values into the one
representation classic C interfaces want: a pointer to a zero-terminated,
read-only unit sequence.  Copying is avoided whenever the source can be
proven, at construction time, to already end with a zero unit; otherwise the
units are copied once into an internally owned, zero-suffixed buffer.

# Quick Reference

The following table describes, per source shape, what pointer a builder
provides and whether constructing it copies.

| Source | Copies? | Pointer |
| ---: | --- | --- |
| null pointer, default construction | never | shared zero-length string, or null under `KeepNullPointer` |
| non-null foreign pointer (`from_ptr`) | never | the pointer itself, trusted to be terminated |
| `CStr` / `CString` (`U16CStr`, `U32CString`, … for the Unicode widths) | never | the source's own terminated storage |
| empty slice, array, or `Vec` | never | shared zero-length string |
| slice, array, or `Vec` whose *last* unit is zero | never | the sequence's own storage |
| any other slice, array, or `Vec` (also `str`, `String`, `Path`) | once | the builder's owned, zero-suffixed buffer |

The provided pointer is valid only while both the builder and (for the
non-copying rows) the original source are alive.  The safe constructors
enforce this with a lifetime; `from_ptr` leaves it to the caller.
*/
extern crate libc;
extern crate widestring;

pub mod behavior;
pub mod builder;
pub mod encoding;
pub mod source;

pub use behavior::{KeepNullPointer, MakeZeroLength, NullBehavior};
pub use builder::ZBuilder;
pub use encoding::{Encoding, MultiByte, Unit, Utf16, Utf32, Utf8, Wide};
pub use source::{Classified, StrLike};

/// Builder over the narrow width, `libc::c_char`.
pub type ZMbBuilder<'a> = ZBuilder<'a, MultiByte>;

/// Builder over the wide width, `libc::wchar_t`.
pub type ZWBuilder<'a> = ZBuilder<'a, Wide>;

/// Builder over UTF-8 code units.
pub type ZU8Builder<'a> = ZBuilder<'a, Utf8>;

/// Builder over UTF-16 code units.
pub type ZU16Builder<'a> = ZBuilder<'a, Utf16>;

/// Builder over UTF-32 code units.
pub type ZU32Builder<'a> = ZBuilder<'a, Utf32>;
