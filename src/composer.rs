use anyhow::Result;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;
use crate::common::constants::COPIED_INDICATOR;
use crate::utm::{compose, valid_url, ParameterSet, UtmKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    NoBaseUrlEntered,
    InvalidUrl,
    ValidUrlWithOutput,
}

/// Form state: one value per field plus the output derived from them.
#[derive(Debug, Clone)]
pub struct Composer {
    base_url: String,
    params: ParameterSet,
    output: String,
    copied_indicator: Duration,
    copied_until: Option<Instant>,
}

impl Composer {
    pub fn new(base_url: &str, params: ParameterSet) -> Self {
        let mut full = ParameterSet::full("", "", "", "", "");
        for (key, value) in params.iter() {
            full.set(key, value);
        }

        let mut composer = Self {
            base_url: base_url.to_string(),
            params: full,
            output: String::new(),
            copied_indicator: COPIED_INDICATOR,
            copied_until: None,
        };
        composer.recompute();
        composer
    }

    pub fn with_copied_indicator(mut self, indicator: Duration) -> Self {
        self.copied_indicator = indicator;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn param(&self, key: UtmKey) -> &str {
        self.params.get(key).unwrap_or("")
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.to_string();
        self.recompute();
    }

    pub fn set_param(&mut self, key: UtmKey, value: &str) {
        self.params.set(key, value);
        self.recompute();
    }

    pub fn state(&self) -> ComposerState {
        if self.base_url.trim().is_empty() {
            ComposerState::NoBaseUrlEntered
        } else if self.output.is_empty() {
            ComposerState::InvalidUrl
        } else {
            ComposerState::ValidUrlWithOutput
        }
    }

    pub fn is_valid(&self) -> bool {
        valid_url(&self.base_url)
    }

    pub fn can_copy(&self) -> bool {
        self.state() == ComposerState::ValidUrlWithOutput
    }

    /// Copies the output and lights the copied indicator until
    /// `now + copied_indicator`. A failed write leaves the indicator untouched.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> Result<()> {
        if !self.can_copy() {
            return Err(anyhow::anyhow!("Nothing to copy: base URL is missing or invalid"));
        }

        if let Err(e) = clipboard.write_text(&self.output) {
            warn!("Clipboard write failed: {}", e);
            return Err(e);
        }

        self.copied_until = Some(now + self.copied_indicator);
        info!("Copied {}", self.output);
        Ok(())
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    fn recompute(&mut self) {
        self.output = compose(&self.base_url, &self.params);
        debug!("Recomputed output ({:?}): '{}'", self.state(), self.output);
    }
}
