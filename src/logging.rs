//! Tracing subscriber setup driven by [`LoggingConfig`]

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Log file that empties itself and starts over once it reaches `max_bytes`
#[derive(Debug)]
pub struct TruncatingFile {
    file: File,
    written: u64,
    max_bytes: u64,
}

impl TruncatingFile {
    /// Open `path` for writing, discarding previous content. `max_bytes == 0` disables the limit.
    pub fn open(path: impl AsRef<Path>, max_bytes: u64) -> crate::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self {
            file,
            written: 0,
            max_bytes,
        })
    }
}

impl Write for TruncatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.file.set_len(0)?;
            self.file.seek(SeekFrom::Start(0))?;
            self.written = 0;
        }
        let count = self.file.write(buf)?;
        self.written += count as u64;
        Ok(count)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn fmt_layer<W>(format: &str, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);
    if format == "json" {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the configured level.
///
/// File output goes through a background writer thread; keep the returned
/// guard alive until shutdown so buffered lines get flushed.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut guard = None;

    if config.writes_to_console() {
        layers.push(fmt_layer(&config.format, io::stdout, true));
    }

    if config.writes_to_file() {
        let file = TruncatingFile::open(&config.file_path, config.max_file_size_bytes())
            .with_context(|| format!("Failed to open log file {}", config.file_path))?;
        let (writer, file_guard) = tracing_appender::non_blocking(file);
        layers.push(fmt_layer(&config.format, writer, false));
        guard = Some(file_guard);
    }

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("Invalid log level '{}'", config.level))?,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(guard)
}
