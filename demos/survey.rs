/*!
Surveys every source category over the narrow width, printing the pointer a
builder provides, the scanned length, and the builder's state.

Run with `cargo run --example survey`.
*/
extern crate libc;
extern crate zbuilder;

use std::ffi::CString;
use std::ptr;

use libc::c_char;
use zbuilder::{KeepNullPointer, MultiByte, NullBehavior, StrLike, ZBuilder, ZMbBuilder};

fn report<N>(tag: &str, builder: &ZBuilder<MultiByte, N>)
where
    N: NullBehavior,
{
    println!(
        "{:<28} | pointer: {:14p} | length: {} | {:?}",
        tag,
        builder.get(),
        builder.length(),
        builder
    );
}

fn print_info<S>(tag: &str, source: &S)
where
    S: StrLike<MultiByte> + ?Sized,
{
    report(tag, &ZMbBuilder::new(source));
}

fn main() {
    report("default construction", &ZMbBuilder::null_source());

    let keeping: ZBuilder<MultiByte, KeepNullPointer> = ZBuilder::null_source();
    report("default, null-keeping", &keeping);

    report("null foreign pointer", &unsafe { ZMbBuilder::from_ptr(ptr::null()) });

    let terminated: [c_char; 4] = [0x41, 0x42, 0x43, 0];
    report("trusted foreign pointer", &unsafe {
        ZMbBuilder::from_ptr(terminated.as_ptr())
    });

    print_info("terminated array", &terminated);

    let unterminated: [c_char; 3] = [0x41, 0x42, 0x43];
    print_info("unterminated array", &unterminated);
    print_info("shortened view", &terminated[..3]);

    let empty: [c_char; 0] = [];
    print_info("empty array", &empty);

    let growable: Vec<c_char> = vec![0x41, 0x42, 0x43];
    print_info("growable buffer", &growable);

    let owned = CString::new("ABC").unwrap();
    print_info("owned C string", &owned);

    #[cfg(unix)]
    {
        use std::path::Path;

        print_info("platform path", Path::new("ABC"));
        print_info("empty platform path", Path::new(""));
    }
}
