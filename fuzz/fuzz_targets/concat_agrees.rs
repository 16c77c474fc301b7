#![no_main]

use std::ffi::{CStr, CString};

#[derive(arbitrary::Arbitrary, Debug)]
struct ConcatInput {
    dst: Vec<u8>,
    src: Vec<u8>,
    slack: u8,
}

libfuzzer_sys::fuzz_target!(|input: ConcatInput| {
    let ConcatInput { mut dst, mut src, slack } = input;
    dst.retain(|&ch| ch != b'\0');
    src.retain(|&ch| ch != b'\0');

    let dst_len = dst.len();
    let src = CString::new(src).expect("nul bytes were removed");
    let capacity = dst_len + src.as_bytes().len() + 1 + slack as usize;
    let mut fixed = vec![0u8; capacity];
    fixed[..dst_len].copy_from_slice(&dst);
    let mut raw = fixed.clone();

    let checked = strcat_rs::concat(&mut fixed, &src)
        .expect("capacity is sufficient")
        .to_bytes()
        .to_vec();
    let unchecked = unsafe {
        let out = strcat_rs::compat::strcat(raw.as_mut_ptr(), src.as_ptr().cast());
        CStr::from_ptr(out.cast()).to_bytes().to_vec()
    };
    let mut owned = CString::new(dst).expect("nul bytes were removed");
    strcat_rs::concat_owned(&mut owned, &src);

    assert_eq!(
        checked, unchecked,
        "Regression detected!\nchecked: {checked:?}\nunchecked: {unchecked:?}",
    );
    assert_eq!(checked.as_slice(), owned.as_bytes());

    // one byte short of room must be refused without touching the buffer
    let mut short = vec![0u8; capacity - 1 - slack as usize];
    short[..dst_len].copy_from_slice(&owned.as_bytes()[..dst_len]);
    let before = short.clone();
    assert!(strcat_rs::concat(&mut short, &src).is_err());
    assert_eq!(short, before);
});
