/*!
The same construction decisions must hold for every character width.
*/
extern crate libc;
extern crate zbuilder;

macro_rules! width_cases {
    ($name:ident, $enc:ty, $unit:ty) => {
        mod $name {
            use std::ptr;
            use zbuilder::{KeepNullPointer, ZBuilder};

            type Builder<'a> = ZBuilder<'a, $enc>;
            type NullKeeping<'a> = ZBuilder<'a, $enc, KeepNullPointer>;

            #[test]
            fn null_source_is_zero_length() {
                let b = Builder::null_source();
                assert!(!b.get().is_null());
                assert_eq!(b.length(), 0);
            }

            #[test]
            fn null_source_keeps_null() {
                let b = NullKeeping::null_source();
                assert!(b.get().is_null());
                assert_eq!(b.length(), 0);
            }

            #[test]
            fn null_foreign_pointer_follows_policy() {
                let b = unsafe { Builder::from_ptr(ptr::null()) };
                assert!(!b.get().is_null());

                let b = unsafe { NullKeeping::from_ptr(ptr::null()) };
                assert!(b.get().is_null());
            }

            #[test]
            fn terminated_sequence_is_borrowed() {
                let units: [$unit; 4] = [65 as $unit, 66 as $unit, 67 as $unit, 0 as $unit];
                let b = Builder::new(&units);
                assert_eq!(b.get(), units.as_ptr());
                assert_eq!(b.length(), 3);
                assert!(!b.owns_buffer());
            }

            #[test]
            fn unterminated_sequence_is_copied() {
                let units: [$unit; 3] = [65 as $unit, 66 as $unit, 67 as $unit];
                let b = Builder::new(&units);
                assert_ne!(b.get(), units.as_ptr());
                assert_eq!(b.length(), 3);
                assert!(b.owns_buffer());
                assert_eq!(b.as_units(), &units[..]);
            }

            #[test]
            fn empty_sequence_is_shared_zero() {
                let units: [$unit; 0] = [];
                let b = Builder::new(&units);
                assert!(!b.get().is_null());
                assert_ne!(b.get(), units.as_ptr());
                assert_eq!(b.length(), 0);
            }
        }
    };
}

width_cases! { multi_byte, ::zbuilder::MultiByte, ::libc::c_char }
width_cases! { wide, ::zbuilder::Wide, ::libc::wchar_t }
width_cases! { utf8, ::zbuilder::Utf8, u8 }
width_cases! { utf16, ::zbuilder::Utf16, u16 }
width_cases! { utf32, ::zbuilder::Utf32, u32 }
