// reexport everything in libc from this module, then override the string routines to take u8 pointers
pub use ::libc::*;

pub unsafe fn strlen(cs: *const u8) -> usize {
    unsafe { ::libc::strlen(cs.cast()) }
}

pub unsafe fn strnlen(cs: *const u8, maxlen: usize) -> usize {
    unsafe { ::libc::strnlen(cs.cast(), maxlen) }
}

pub unsafe fn strcat(dst: *mut u8, src: *const u8) -> *mut u8 {
    unsafe { ::libc::strcat(dst.cast(), src.cast()).cast() }
}
