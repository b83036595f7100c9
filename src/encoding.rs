/*!
Character widths and their units.

Each width is a marker type implementing `Encoding`.  The associated `Unit`
type is the primitive a foreign interface actually traffics in: `c_char` for
narrow strings, `wchar_t` for wide strings, and the unsigned code unit types
for the three Unicode widths.
*/
use libc::{c_char, wchar_t};

macro_rules! naive_unit_impl {
    ($ty_name:ty) => {
        impl Unit for $ty_name {
            #[inline]
            fn zero() -> Self {
                0 as $ty_name
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0 as $ty_name
            }
        }
    };
}

/**
Marks a type as a character width usable by `ZBuilder`.

This is a closed set: exactly the five widths below are recognised.
*/
pub trait Encoding {
    /**
    The unit type foreign interfaces use for this width.
    */
    type Unit: Unit;

    /**
    Returns the process-wide shared zero unit for this width.

    The referenced static is immutable and lives for the whole process, so
    the returned pointer may be handed out freely as a zero-length string.
    */
    fn shared_zero() -> &'static Self::Unit;

    /**
    Returns a string which can be used to uniquely identify this width in
    debug output.
    */
    fn debug_prefix() -> &'static str;
}

/**
A single character unit.  Only needs to know what "zero" looks like.
*/
pub trait Unit: Copy + PartialEq + ::std::fmt::Debug + 'static {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

naive_unit_impl! { i8 }
naive_unit_impl! { u8 }
naive_unit_impl! { u16 }
naive_unit_impl! { u32 }
naive_unit_impl! { i32 }

/**
The narrow width: units are `libc::c_char`, the element type of classic C
strings in the current multibyte encoding.
*/
pub enum MultiByte {}

static ZERO_MB: c_char = 0;

impl Encoding for MultiByte {
    type Unit = c_char;

    fn shared_zero() -> &'static c_char {
        &ZERO_MB
    }

    fn debug_prefix() -> &'static str {
        "Mb"
    }
}

/**
The wide width: units are `libc::wchar_t`.  Note that the size and
signedness of `wchar_t` are platform-defined.
*/
pub enum Wide {}

static ZERO_W: wchar_t = 0;

impl Encoding for Wide {
    type Unit = wchar_t;

    fn shared_zero() -> &'static wchar_t {
        &ZERO_W
    }

    fn debug_prefix() -> &'static str {
        "W"
    }
}

/**
The UTF-8 code unit width.
*/
pub enum Utf8 {}

static ZERO_U8: u8 = 0;

impl Encoding for Utf8 {
    type Unit = u8;

    fn shared_zero() -> &'static u8 {
        &ZERO_U8
    }

    fn debug_prefix() -> &'static str {
        "U8"
    }
}

/**
The UTF-16 code unit width.
*/
pub enum Utf16 {}

static ZERO_U16: u16 = 0;

impl Encoding for Utf16 {
    type Unit = u16;

    fn shared_zero() -> &'static u16 {
        &ZERO_U16
    }

    fn debug_prefix() -> &'static str {
        "U16"
    }
}

/**
The UTF-32 code unit width.
*/
pub enum Utf32 {}

static ZERO_U32: u32 = 0;

impl Encoding for Utf32 {
    type Unit = u32;

    fn shared_zero() -> &'static u32 {
        &ZERO_U32
    }

    fn debug_prefix() -> &'static str {
        "U32"
    }
}
