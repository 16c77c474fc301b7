/// The strcat() function appends the NUL-terminated string src to the end of dst,
/// overwriting the NUL at the end of dst, then adds a terminating NUL.
///
/// dst must have room for strlen(dst) + strlen(src) + 1 bytes and the two strings
/// must not overlap. Returns dst.
pub unsafe fn strcat(dst: *mut u8, src: *const u8) -> *mut u8 {
    unsafe {
        let mut d = dst;
        while *d != b'\0' {
            d = d.add(1);
        }

        let mut s = src;
        while *s != b'\0' {
            *d = *s;
            d = d.add(1);
            s = s.add(1);
        }
        *d = b'\0';

        dst
    }
}
