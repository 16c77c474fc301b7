use std::{ffi::CStr, io::Write as _, process::ExitCode};

use strcat_rs::{
    ConcatError,
    compat::strlcpy,
    concat,
    log::{log_add_level, log_close, log_open},
    log_debug,
};

fn main() -> ExitCode {
    // -v, -vv, ... raise the log level; everything else is ignored
    for arg in std::env::args().skip(1) {
        if let Some(flags) = arg.strip_prefix('-') {
            if !flags.is_empty() && flags.bytes().all(|ch| ch == b'v') {
                flags.bytes().for_each(|_| log_add_level());
            }
        }
    }
    log_open("main");

    let mut str1 = [0u8; 100];
    let code = match hello_world(&mut str1) {
        Ok(out) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(out.to_bytes()).and_then(|()| stdout.flush()) {
                log_debug!("write to stdout failed: {err}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("strcat-rs: {err}");
            ExitCode::FAILURE
        }
    };

    log_close();
    code
}

fn hello_world(str1: &mut [u8]) -> Result<&CStr, ConcatError> {
    unsafe { strlcpy(str1.as_mut_ptr(), c"Hello ".as_ptr().cast(), str1.len()) };
    let str2 = c"World";

    concat(str1, str2)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hello_world() {
        let mut str1 = [0xffu8; 100];
        assert_eq!(hello_world(&mut str1), Ok(c"Hello World"));
    }

    #[test]
    fn test_hello_world_small_buffer() {
        let mut str1 = [0u8; 11];
        assert_eq!(
            hello_world(&mut str1),
            Err(ConcatError::CapacityExceeded {
                needed: 12,
                capacity: 11
            })
        );
    }
}
