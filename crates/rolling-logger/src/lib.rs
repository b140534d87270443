//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stderr and to
//! `<log_dir>/<app>.log`. The file is rotated to `<app>.log.1` once it grows
//! past [`MAX_FILE_BYTES`]. `log` records are bridged into the subscriber, so
//! crates using `log::info!` end up in the same file.
//!
//! The last [`RECENT_CAPACITY`] lines are also kept in memory for display.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const MAX_FILE_BYTES: u64 = 1024 * 1024;
pub const RECENT_CAPACITY: usize = 200;

static RECENT: Mutex<VecDeque<String>> = Mutex::new(VecDeque::new());
static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

struct FileState {
    file: File,
    len: u64,
}

/// Size-bounded log file with a single backup generation
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    state: Mutex<FileState>,
}

impl RollingFile {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            state: Mutex::new(FileState { file, len }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".1");
        PathBuf::from(name)
    }

    fn rotate(&self, state: &mut FileState) -> io::Result<()> {
        state.file.flush()?;
        std::fs::rename(&self.path, self.backup_path())?;
        state.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        state.len = 0;
        Ok(())
    }

    fn write_chunk(&self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.len > 0 && state.len + buf.len() as u64 > self.max_bytes {
            self.rotate(&mut state)?;
        }
        state.file.write_all(buf)?;
        state.len += buf.len() as u64;
        Ok(buf.len())
    }
}

pub struct RollingWriter<'a> {
    target: &'a RollingFile,
}

impl Write for RollingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        remember(&String::from_utf8_lossy(buf));
        self.target.write_chunk(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.target
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .file
            .flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriter { target: self }
    }
}

fn remember(chunk: &str) {
    let mut recent = RECENT.lock().unwrap_or_else(PoisonError::into_inner);
    for line in chunk.lines().filter(|line| !line.trim().is_empty()) {
        if recent.len() == RECENT_CAPACITY {
            recent.pop_front();
        }
        recent.push_back(line.to_string());
    }
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    RECENT
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .cloned()
        .collect()
}

/// Path of the active log file, once `init_logger` has run
pub fn log_file() -> Option<&'static Path> {
    LOG_FILE.get().map(PathBuf::as_path)
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> io::Result<()> {
    std::fs::create_dir_all(&log_dir)?;
    let path = log_dir.join(format!("{}.log", app_name));
    let file = RollingFile::open(&path, MAX_FILE_BYTES)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_timer(LocalTime).with_writer(io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime)
                .with_ansi(false)
                .with_writer(file),
        )
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;

    let _ = LOG_FILE.set(path);
    tracing::info!("Logger started for {}", app_name);
    Ok(())
}

fn ensure_initialized() -> io::Result<()> {
    if LOG_FILE.get().is_some() {
        Ok(())
    } else {
        Err(io::Error::new(io::ErrorKind::NotConnected, "logger not initialized"))
    }
}

pub fn info(message: &str) -> io::Result<()> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> io::Result<()> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}
