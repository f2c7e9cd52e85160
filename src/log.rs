// src/log.rs
//
// `log` facade sink: "[HH:MM:SS.mmm][LEVEL] msg" to stderr, and appended to
// a file when one is configured.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<Logger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub(crate) fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

struct Logger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
    stderr: Mutex<()>,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if let Ok(_guard) = self.stderr.lock() {
            let _ = std::io::stderr().write_all(line.as_bytes());
        }
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the process logger. Only the first call has any effect.
pub fn init(level: LevelFilter, file: Option<PathBuf>) -> std::io::Result<()> {
    let file = match file {
        Some(p) => Some(Mutex::new(open_log_file(&p)?)),
        None => None,
    };
    start();

    let mut installed = false;
    let logger = LOGGER.get_or_init(|| {
        installed = true;
        Logger { level, file, stderr: Mutex::new(()) }
    });
    if installed && log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}
