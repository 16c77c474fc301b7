use crate::libc;

/// The strlcat() function appends the NUL-terminated string src to the end of dst.
/// It will append at most size - strlen(dst) - 1 bytes, NUL-terminating the result.
///
/// Returns the length of the string it tried to create; a value >= size means the
/// result was truncated. If no NUL is found in the first size bytes of dst nothing
/// is written.
pub unsafe fn strlcat(dst: *mut u8, src: *const u8, size: usize) -> usize {
    unsafe {
        let dst_strlen = libc::strnlen(dst, size);
        let src_strlen = libc::strlen(src);

        if dst_strlen == size {
            return size + src_strlen;
        }

        let len = src_strlen.min(size - dst_strlen - 1);
        core::ptr::copy_nonoverlapping(src, dst.add(dst_strlen), len);
        *dst.add(dst_strlen + len) = b'\0';

        dst_strlen + src_strlen
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_strlcat_exact_fit() {
        let mut buf = *b"Hello \0\0\0\0\0\0";
        let n = unsafe { strlcat(buf.as_mut_ptr(), c"World".as_ptr().cast(), buf.len()) };

        assert_eq!(n, 11);
        assert_eq!(&buf, b"Hello World\0");
    }

    #[test]
    fn test_strlcat_truncates() {
        let mut buf = *b"Hello \0\0\0\0\0";
        let n = unsafe { strlcat(buf.as_mut_ptr(), c"World".as_ptr().cast(), buf.len()) };

        assert_eq!(n, 11);
        assert!(n >= buf.len());
        assert_eq!(&buf, b"Hello Worl\0");
    }

    #[test]
    fn test_strlcat_unterminated_dst() {
        let mut buf = *b"abcd";
        let n = unsafe { strlcat(buf.as_mut_ptr(), c"xy".as_ptr().cast(), buf.len()) };

        assert_eq!(n, 6);
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn test_strlcat_empty_src() {
        let mut buf = *b"x\0";
        let n = unsafe { strlcat(buf.as_mut_ptr(), c"".as_ptr().cast(), buf.len()) };

        assert_eq!(n, 1);
        assert_eq!(&buf, b"x\0");
    }
}
