//! Tracing setup for the browser. Events are formatted by `tracing-subscriber`
//! and each finished line is forwarded to `console.log`. Timestamps are off
//! because `SystemTime` is unavailable on `wasm32-unknown-unknown`.

use std::io::{self, Write};

use tracing_subscriber::fmt::MakeWriter;

use super::config::AppConfig;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn console_log(line: &str) {
    #[cfg(target_arch = "wasm32")]
    log(line);
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

/// Installs the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(config: &AppConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(config.tracing_level())
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!(level = %config.tracing_level(), "logging initialized");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

/// Buffers one formatted event and emits it when flushed or dropped.
#[derive(Default)]
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn take_line(&mut self) -> Option<String> {
        let bytes = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&bytes);
        let line = line.trim_end();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            console_log(&line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
