/*!
Null-input policies.

A `ZBuilder` constructed from a null source (the default constructor, or a
null foreign pointer) lands in one of two states, selected at compile time
by a marker type implementing `NullBehavior`.
*/

/**
Decides what pointer a builder provides when it was constructed from a null
source.

In practice, this is implemented by a marker type (which is not intended to
actually be instantiated anywhere).
*/
pub trait NullBehavior {
    /**
    Returns `true` if a null source should surface as a null result pointer,
    `false` if it should surface as the shared zero-length string.
    */
    fn keep_null() -> bool;
}

/**
A null source yields a valid pointer to a zero-length string (the shared
static zero unit of the builder's width).  This is the default policy.
*/
pub enum MakeZeroLength {}

impl NullBehavior for MakeZeroLength {
    fn keep_null() -> bool {
        false
    }
}

/**
A null source yields a null result pointer.  `length()` reports zero without
scanning in that state.
*/
pub enum KeepNullPointer {}

impl NullBehavior for KeepNullPointer {
    fn keep_null() -> bool {
        true
    }
}
