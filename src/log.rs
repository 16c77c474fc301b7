// Copyright (c) 2007 Nicholas Marriott <nicholas.marriott@gmail.com>
//
// Permission to use, copy, modify, and distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
// ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF MIND, USE, DATA OR PROFITS, WHETHER
// IN AN ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING
// OUT OF OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
//! Diagnostic log file.
//!
//! Library code logs through [`log_debug!`](crate::log_debug) and the `log` facade. Nothing is
//! written anywhere until the level has been raised with [`log_add_level`] and
//! [`log_open`] has installed the file sink.
use std::{
    fmt::Write as _,
    fs::File,
    io::{LineWriter, Write as _},
    path::Path,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicI32, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

use ::log::{LevelFilter, Log, Metadata, Record};

#[doc(hidden)]
pub use ::log as facade;

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {$crate::log::facade::debug!($($arg)*)};
}

static LOG_FILE: Mutex<Option<LineWriter<File>>> = Mutex::new(None);
static LOG_LEVEL: AtomicI32 = AtomicI32::new(0);
static LOGGER: FileLog = FileLog;

const DEFAULT_ORDERING: Ordering = Ordering::SeqCst;

struct FileLog;

impl Log for FileLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= level_filter(log_get_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            log_vwrite(record);
        }
    }

    fn flush(&self) {
        if let Some(f) = log_file().as_mut() {
            let _ = f.flush();
        }
    }
}

fn log_file() -> MutexGuard<'static, Option<LineWriter<File>>> {
    LOG_FILE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn level_filter(level: i32) -> LevelFilter {
    match level {
        i32::MIN..=0 => LevelFilter::Off,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn log_add_level() {
    LOG_LEVEL.fetch_add(1, DEFAULT_ORDERING);
}

pub fn log_get_level() -> i32 {
    LOG_LEVEL.load(DEFAULT_ORDERING)
}

/// Opens `strcat-<name>-<pid>.log` in the current directory if logging is enabled.
pub fn log_open(name: &str) {
    log_open_in(Path::new("."), name);
}

pub fn log_open_in(dir: &Path, name: &str) {
    let level = log_get_level();
    if level == 0 {
        return;
    }

    log_close();
    let filename = dir.join(log_file_name(name));
    let Ok(file) = File::options().append(true).create(true).open(&filename) else {
        return;
    };

    *log_file() = Some(LineWriter::new(file));

    // fails if a logger was installed earlier, in which case ours is already it
    let _ = ::log::set_logger(&LOGGER);
    ::log::set_max_level(level_filter(level));
}

fn log_file_name(name: &str) -> String {
    format!("strcat-{}-{}.log", name, std::process::id())
}

pub fn log_close() {
    if let Some(mut old_handle) = log_file().take() {
        let _ = old_handle.flush();
    }
    ::log::set_max_level(LevelFilter::Off);
}

fn log_vwrite(record: &Record) {
    let mut guard = log_file();
    let Some(f) = guard.as_mut() else {
        return;
    };

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let micros = duration.subsec_micros();
    let file = record.file().unwrap_or("?");
    let line = record.line().unwrap_or(0);
    let msg = vis(&record.args().to_string());

    let _ = writeln!(f, "{secs}.{micros:06} {file}:{line} {msg}");
}

/// C-style escaping of everything that is not printable ASCII, so one record stays on one line.
fn vis(msg: &str) -> String {
    let mut out = String::with_capacity(msg.len());
    for &ch in msg.as_bytes() {
        match ch {
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'\r' => out.push_str("\\r"),
            0x07 => out.push_str("\\a"),
            0x08 => out.push_str("\\b"),
            0x0b => out.push_str("\\v"),
            0x0c => out.push_str("\\f"),
            b'\\' => out.push_str("\\\\"),
            b' '..=b'~' => out.push(ch as char),
            _ => {
                let _ = write!(out, "\\{ch:03o}");
            }
        }
    }
    out
}
