/*!
The adapter itself.

`ZBuilder` holds exactly one of four states: a null pointer, the shared
static zero unit of its width, a borrowed pointer into caller-owned
terminated storage, or an owned zero-suffixed buffer.  Ownership is a
first-class state here, not an inference from pointer identity, so copy,
take, and swap never have to repoint anything: the result pointer is
recomputed from the state on demand.
*/
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::mem;
use std::ptr;
use std::slice;

use behavior::{MakeZeroLength, NullBehavior};
use encoding::{Encoding, Unit};
use source::{Classified, StrLike};

enum Repr<U> {
    Null,
    SharedZero,
    Borrowed(*const U),
    Owned(Vec<U>),
}

/**
Adapts a string-like source into a pointer to a zero-terminated, read-only
unit sequence.

The source's shape decides, at construction time, whether the pointer can
borrow the source's own storage or whether the units have to be copied into
an internally owned, zero-suffixed buffer.  The copy path is the only one
that allocates.

The pointer provided by `get()` is valid exactly as long as the builder
(and, for borrowed state, the original source) remains alive.  The `'a`
lifetime enforces the latter for every safe constructor.

# Parameters

`E` defines the character width.  *e.g.* `MultiByte` for classic narrow C
strings, and `Wide` for C wide strings.

`N` defines what a builder constructed from a null source provides:
`MakeZeroLength` (the default) hands out the shared zero-length string,
`KeepNullPointer` hands out a null pointer.
*/
pub struct ZBuilder<'a, E, N = MakeZeroLength>
where
    E: Encoding,
    N: NullBehavior,
{
    repr: Repr<E::Unit>,
    _marker: PhantomData<(&'a E::Unit, N)>,
}

/*
Walks `ptr` to the first zero unit.  The caller must guarantee the pointed
storage is zero-terminated and live.
*/
unsafe fn scan_len<U>(ptr: *const U) -> usize
where
    U: Unit,
{
    let mut len = 0;
    let mut cur = ptr;

    while !(*cur).is_zero() {
        len += 1;
        cur = cur.offset(1);
    }

    len
}

fn copy_suffixed<U>(units: &[U]) -> Vec<U>
where
    U: Unit,
{
    let mut buf = Vec::with_capacity(units.len() + 1);
    buf.extend_from_slice(units);
    buf.push(U::zero());
    buf
}

impl<'a, E, N> ZBuilder<'a, E, N>
where
    E: Encoding,
    N: NullBehavior,
{
    /**
    Creates a builder in the null-source state: the state a builder
    constructed from a null pointer lands in, as decided by `N`.
    */
    pub fn null_source() -> Self {
        let repr = if N::keep_null() {
            Repr::Null
        } else {
            Repr::SharedZero
        };

        ZBuilder {
            repr: repr,
            _marker: PhantomData,
        }
    }

    /**
    Creates a builder from a string-like source.

    Sources whose storage is known to be zero-terminated (`CStr` and
    friends) are borrowed directly.  Bounded sequences are borrowed if their
    *last* unit is zero, replaced by the shared zero-length string if they
    are empty, and copied into an owned zero-suffixed buffer otherwise.

    Only the last unit is ever inspected; an embedded zero ahead of a
    non-zero last unit still takes the copy path, and `length()` will stop
    at the embedded zero.
    */
    pub fn new<S>(source: &'a S) -> Self
    where
        S: StrLike<E> + ?Sized,
    {
        let repr = match source.classify() {
            Classified::Terminated(first) => Repr::Borrowed(first as *const E::Unit),
            Classified::Units(units) => {
                if units.is_empty() {
                    Repr::SharedZero
                } else if units[units.len() - 1].is_zero() {
                    Repr::Borrowed(units.as_ptr())
                } else {
                    Repr::Owned(copy_suffixed(units))
                }
            }
        };

        ZBuilder {
            repr: repr,
            _marker: PhantomData,
        }
    }

    /**
    Creates a builder from a foreign string pointer, without inspection and
    without copying.  A null `ptr` yields the null-source state.

    # Safety

    A non-null `ptr` is trusted to reference zero-terminated storage that
    outlives the builder.  Neither property is checked; passing a pointer to
    unterminated storage makes any later `length()` call, and any foreign
    consumer of `get()`, read out of bounds.
    */
    pub unsafe fn from_ptr(ptr: *const E::Unit) -> Self {
        if ptr.is_null() {
            ZBuilder::null_source()
        } else {
            ZBuilder {
                repr: Repr::Borrowed(ptr),
                _marker: PhantomData,
            }
        }
    }

    /**
    Provides the zero-terminated string as a pointer to its first unit.

    The pointer is null only under the `KeepNullPointer` policy, and only
    for a builder in the null-source state.
    */
    pub fn get(&self) -> *const E::Unit {
        match self.repr {
            Repr::Null => ptr::null(),
            Repr::SharedZero => E::shared_zero() as *const E::Unit,
            Repr::Borrowed(p) => p,
            Repr::Owned(ref buf) => buf.as_ptr(),
        }
    }

    /**
    Counts the units ahead of the first zero unit.

    The zero unit is the sentinel where foreign consumers stop; it is not
    necessarily the last unit in the underlying storage.  The count is
    recomputed on every call, so this is *O*(length).  A null result
    pointer reports zero without scanning.
    */
    pub fn length(&self) -> usize {
        let ptr = self.get();

        if ptr.is_null() {
            0
        } else {
            unsafe { scan_len(ptr) }
        }
    }

    /**
    Returns the units ahead of the first zero unit as a slice.  This *does
    not* include the terminator.
    */
    pub fn as_units(&self) -> &[E::Unit] {
        let ptr = self.get();

        if ptr.is_null() {
            return &[];
        }

        unsafe { slice::from_raw_parts(ptr, scan_len(ptr)) }
    }

    /**
    Returns the units up to and *including* the first zero unit as a slice.
    Empty only for a null result pointer.
    */
    pub fn as_units_with_term(&self) -> &[E::Unit] {
        let ptr = self.get();

        if ptr.is_null() {
            return &[];
        }

        unsafe { slice::from_raw_parts(ptr, scan_len(ptr) + 1) }
    }

    /**
    Returns `true` if the builder took the copy path and the result pointer
    addresses its internally owned buffer.
    */
    pub fn owns_buffer(&self) -> bool {
        match self.repr {
            Repr::Owned(_) => true,
            _ => false,
        }
    }

    /**
    Exchanges the entire state of two builders of the same width and
    policy.  Each ends up observing exactly what the other observed before,
    including ownership of any copied buffer.
    */
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.repr, &mut other.repr);
    }

    /**
    Moves the state out, leaving `self` in the null-source state of its
    policy.  An owned buffer is transferred, not copied; the returned
    builder observes the same storage address.
    */
    pub fn take(&mut self) -> Self {
        mem::replace(self, ZBuilder::null_source())
    }

    /**
    Discards the `'a` tie to the source by forcing the copy path for
    borrowed state.  Null, shared-zero, and owned states pass through
    unchanged.

    For borrowed state this copies the units up to the first zero
    terminator, so the result observes the same `get()` contents at a
    different address.
    */
    pub fn into_owned(self) -> ZBuilder<'static, E, N> {
        let repr = match self.repr {
            Repr::Null => Repr::Null,
            Repr::SharedZero => Repr::SharedZero,
            Repr::Owned(buf) => Repr::Owned(buf),
            Repr::Borrowed(ptr) => {
                let units = unsafe { slice::from_raw_parts(ptr, scan_len(ptr)) };
                Repr::Owned(copy_suffixed(units))
            }
        };

        ZBuilder {
            repr: repr,
            _marker: PhantomData,
        }
    }
}

impl<'a, E, N> Clone for ZBuilder<'a, E, N>
where
    E: Encoding,
    N: NullBehavior,
{
    /**
    An owning builder deep-copies its buffer; the clone observes equal
    contents at its own address.  A non-owning builder duplicates its
    pointer verbatim, since the referenced storage is external and the
    clone does not become its owner.
    */
    fn clone(&self) -> Self {
        let repr = match self.repr {
            Repr::Null => Repr::Null,
            Repr::SharedZero => Repr::SharedZero,
            Repr::Borrowed(p) => Repr::Borrowed(p),
            Repr::Owned(ref buf) => Repr::Owned(buf.clone()),
        };

        ZBuilder {
            repr: repr,
            _marker: PhantomData,
        }
    }
}

impl<'a, E, N> Debug for ZBuilder<'a, E, N>
where
    E: Encoding,
    N: NullBehavior,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self.repr {
            Repr::Null => write!(fmt, "Z{}(null)", E::debug_prefix()),
            Repr::SharedZero => write!(fmt, "Z{}(shared zero)", E::debug_prefix()),
            Repr::Borrowed(p) => write!(
                fmt,
                "Z{}(borrowed {:p}, {} units)",
                E::debug_prefix(),
                p,
                self.length()
            ),
            Repr::Owned(ref buf) => write!(
                fmt,
                "Z{}(owned {:p}, {} units)",
                E::debug_prefix(),
                buf.as_ptr(),
                self.length()
            ),
        }
    }
}

impl<'a, E, N> Default for ZBuilder<'a, E, N>
where
    E: Encoding,
    N: NullBehavior,
{
    fn default() -> Self {
        ZBuilder::null_source()
    }
}

impl<'a, E, N> Eq for ZBuilder<'a, E, N>
where
    E: Encoding,
    N: NullBehavior,
{
}

impl<'a, 'b, E, N> PartialEq<ZBuilder<'b, E, N>> for ZBuilder<'a, E, N>
where
    E: Encoding,
    N: NullBehavior,
{
    fn eq(&self, other: &ZBuilder<'b, E, N>) -> bool {
        self.get().is_null() == other.get().is_null() && self.as_units() == other.as_units()
    }
}
