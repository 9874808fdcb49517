//! Clipboard sinks for the composed URL.
//!
//! The terminal form has no platform clipboard API to call, so the default
//! sink emits an OSC 52 escape sequence and lets the terminal emulator set the
//! system clipboard. Terminals that do not honour OSC 52 silently ignore it.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use std::io::{self, IsTerminal, Stdout, Write};

use crate::common::constants::{OSC52_PREFIX, OSC52_SUFFIX};

/// Destination for a copy action.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Writes text as an OSC 52 "set clipboard" sequence.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<Stdout> {
    /// Fails when stdout is redirected, since the sequence would land in a
    /// file or pipe instead of reaching a terminal.
    pub fn stdout() -> Result<Self> {
        let stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(anyhow::anyhow!(
                "stdout is not a terminal; OSC 52 clipboard is unavailable"
            ));
        }
        Ok(Self::new(stdout))
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let sequence = osc52_sequence(text);
        debug!("Writing {} byte OSC 52 sequence", sequence.len());
        self.out
            .write_all(sequence.as_bytes())
            .context("Failed to write OSC 52 sequence")?;
        self.out.flush().context("Failed to flush OSC 52 sequence")?;
        Ok(())
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Stand-in used when copying is switched off or unsupported; every write fails.
#[derive(Debug, Clone)]
pub struct DisabledClipboard {
    reason: String,
}

impl DisabledClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Clipboard for DisabledClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(anyhow::anyhow!("Clipboard unavailable: {}", self.reason))
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("{}{}{}", OSC52_PREFIX, BASE64.encode(text), OSC52_SUFFIX)
}
