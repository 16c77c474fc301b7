use crate::libc;

/// The strlcpy() function copies up to size - 1 characters from the NUL-terminated string src to dst,
/// NUL-terminating the result when size is not 0. Returns strlen(src).
pub unsafe fn strlcpy(dst: *mut u8, src: *const u8, size: usize) -> usize {
    unsafe {
        let src_strlen = libc::strlen(src);

        if let Some(room) = size.checked_sub(1) {
            let len = src_strlen.min(room);
            core::ptr::copy_nonoverlapping(src, dst, len);
            *dst.add(len) = b'\0';
        }

        src_strlen
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_strlcpy_fits() {
        let mut buf = [0xffu8; 8];
        let n = unsafe { strlcpy(buf.as_mut_ptr(), c"Hello ".as_ptr().cast(), buf.len()) };

        assert_eq!(n, 6);
        assert_eq!(&buf[..7], b"Hello \0");
    }

    #[test]
    fn test_strlcpy_truncates() {
        let mut buf = [0xffu8; 4];
        let n = unsafe { strlcpy(buf.as_mut_ptr(), c"Hello".as_ptr().cast(), buf.len()) };

        // a return >= size means the copy was truncated
        assert_eq!(n, 5);
        assert_eq!(&buf, b"Hel\0");
    }

    #[test]
    fn test_strlcpy_zero_size() {
        let mut buf = [0xffu8; 2];
        let n = unsafe { strlcpy(buf.as_mut_ptr(), c"abc".as_ptr().cast(), 0) };

        assert_eq!(n, 3);
        assert_eq!(buf, [0xff, 0xff]);
    }
}
