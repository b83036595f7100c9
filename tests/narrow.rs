/*!
Narrow-width behaviour, mirroring the classic C-string interop cases.
*/
extern crate libc;
extern crate zbuilder;

use std::ffi::CString;
use std::ptr;

use libc::c_char;
use zbuilder::{KeepNullPointer, MultiByte, ZBuilder, ZMbBuilder};

#[test]
fn null_source_makes_zero_length() {
    let b = ZMbBuilder::null_source();
    assert!(!b.get().is_null());
    assert_eq!(b.length(), 0);
    assert_eq!(b.as_units(), &[]);
}

#[test]
fn null_source_keeps_null_pointer() {
    let b: ZBuilder<MultiByte, KeepNullPointer> = ZBuilder::null_source();
    assert!(b.get().is_null());
    assert_eq!(b.length(), 0);
}

#[test]
fn null_foreign_pointer_follows_policy() {
    let b = unsafe { ZMbBuilder::from_ptr(ptr::null()) };
    assert!(!b.get().is_null());
    assert_eq!(b.length(), 0);

    let b: ZBuilder<MultiByte, KeepNullPointer> = unsafe { ZBuilder::from_ptr(ptr::null()) };
    assert!(b.get().is_null());
    assert_eq!(b.length(), 0);
}

#[test]
fn trusted_foreign_pointer_is_passed_through() {
    let terminated: [c_char; 4] = [0x41, 0x42, 0x43, 0];
    let b = unsafe { ZMbBuilder::from_ptr(terminated.as_ptr()) };
    assert_eq!(b.get(), terminated.as_ptr());
    assert_eq!(b.length(), 3);
    assert!(!b.owns_buffer());
}

#[test]
fn terminated_array_is_borrowed() {
    let terminated: [c_char; 4] = [0x41, 0x42, 0x43, 0];
    let b = ZMbBuilder::new(&terminated);
    assert_eq!(b.get(), terminated.as_ptr());
    assert_eq!(b.length(), 3);
    assert!(!b.owns_buffer());
}

#[test]
fn unterminated_array_is_copied() {
    let units: [c_char; 3] = [0x41, 0x42, 0x43];
    let b = ZMbBuilder::new(&units);
    assert_ne!(b.get(), units.as_ptr());
    assert_eq!(b.length(), 3);
    assert!(b.owns_buffer());
    assert_eq!(b.as_units(), &units[..]);
}

#[test]
fn slice_view_is_classified_like_its_storage() {
    let units: [c_char; 4] = [0x41, 0x42, 0x43, 0];

    // The full view ends with the terminator: borrowed.
    let b = ZMbBuilder::new(&units[..]);
    assert_eq!(b.get(), units.as_ptr());

    // A shortened view does not: copied.
    let b = ZMbBuilder::new(&units[..3]);
    assert_ne!(b.get(), units.as_ptr());
    assert_eq!(b.length(), 3);
}

#[test]
fn empty_sequence_is_the_shared_zero() {
    let empty: [c_char; 0] = [];
    let b = ZMbBuilder::new(&empty);
    assert!(!b.get().is_null());
    assert_ne!(b.get(), empty.as_ptr());
    assert_eq!(b.length(), 0);
    assert!(!b.owns_buffer());
}

#[test]
fn growable_buffer_is_copied_unless_terminated() {
    let v: Vec<c_char> = vec![0x41, 0x42, 0x43];
    let b = ZMbBuilder::new(&v);
    assert_ne!(b.get(), v.as_ptr());
    assert_eq!(b.length(), 3);

    let v: Vec<c_char> = vec![0x41, 0x42, 0x43, 0];
    let b = ZMbBuilder::new(&v);
    assert_eq!(b.get(), v.as_ptr());
    assert_eq!(b.length(), 3);
}

#[test]
fn owned_c_string_is_borrowed() {
    let owned = CString::new("ABC").unwrap();
    let b = ZMbBuilder::new(&owned);
    assert_eq!(b.get(), owned.as_ptr());
    assert_eq!(b.length(), 3);
    assert!(!b.owns_buffer());

    let b = ZMbBuilder::new(owned.as_c_str());
    assert_eq!(b.get(), owned.as_ptr());
}

#[test]
fn embedded_zero_still_copies_and_stops_the_scan() {
    let units: [c_char; 3] = [0x41, 0, 0x42];
    let b = ZMbBuilder::new(&units);
    assert!(b.owns_buffer());
    assert_eq!(b.length(), 1);

    let expect: [c_char; 2] = [0x41, 0];
    assert_eq!(b.as_units_with_term(), &expect[..]);
}

#[cfg(unix)]
#[test]
fn platform_path_copies_unless_empty() {
    use std::path::Path;

    let path = Path::new("ABC");
    let b = ZMbBuilder::new(path);
    assert!(b.owns_buffer());
    assert_eq!(b.length(), 3);

    let empty = Path::new("");
    let b = ZMbBuilder::new(empty);
    assert!(!b.get().is_null());
    assert_eq!(b.length(), 0);
    assert!(!b.owns_buffer());
}
