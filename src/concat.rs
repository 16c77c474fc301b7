use std::ffi::{CStr, CString};

use crate::log_debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConcatError {
    #[error("destination is not nul-terminated within {capacity} bytes")]
    Unterminated { capacity: usize },
    #[error("capacity exceeded: need {needed} bytes, have {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },
}

/// Appends `src` to the NUL-terminated string at the start of `dst`.
///
/// The length of `dst` is its capacity: it must hold the existing string, all of
/// `src` and the terminating NUL. On success the returned string starts at
/// `dst[0]`; on error `dst` is left untouched.
pub fn concat<'a>(dst: &'a mut [u8], src: &CStr) -> Result<&'a CStr, ConcatError> {
    let capacity = dst.len();
    let Some(dst_strlen) = dst.iter().position(|&ch| ch == b'\0') else {
        log_debug!("concat: no terminator in {capacity} byte destination");
        return Err(ConcatError::Unterminated { capacity });
    };

    let src = src.to_bytes();
    let end = dst_strlen + src.len();
    let needed = end + 1;
    if needed > capacity {
        log_debug!("concat: need {needed} bytes, have {capacity}");
        return Err(ConcatError::CapacityExceeded { needed, capacity });
    }

    dst[dst_strlen..end].copy_from_slice(src);
    dst[end] = b'\0';
    log_debug!("concat: {dst_strlen} + {} bytes", src.len());

    CStr::from_bytes_with_nul(&dst[..needed]).map_err(|_| ConcatError::Unterminated { capacity })
}

/// Appends `src` to an owned string, growing it as needed.
pub fn concat_owned(dst: &mut CString, src: &CStr) {
    let mut bytes = std::mem::take(dst).into_bytes();
    bytes.reserve_exact(src.to_bytes().len() + 1);
    bytes.extend_from_slice(src.to_bytes());
    log_debug!("concat_owned: now {} bytes", bytes.len());

    match CString::new(bytes) {
        Ok(joined) => *dst = joined,
        Err(_) => unreachable!("both halves come from nul-terminated strings"),
    }
}
