//! Appending one NUL-terminated byte string onto another.
//!
//! Three flavours of the same operation live here:
//!
//! * [`compat::strcat`] walks raw pointers exactly like the C routine and trusts
//!   the caller about capacity and termination.
//! * [`concat()`] works on a fixed `&mut [u8]` buffer and reports a
//!   [`ConcatError`] instead of writing past its end.
//! * [`concat_owned()`] appends onto a growable [`CString`](std::ffi::CString)
//!   and cannot fail.
//!
//! The bounded BSD relatives [`compat::strlcpy`] and [`compat::strlcat`] are
//! provided for callers that prefer truncation.

pub mod compat;
pub mod concat;
pub mod libc;
pub mod log;

pub use concat::{ConcatError, concat, concat_owned};
