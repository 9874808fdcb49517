use std::fmt;
use std::str::FromStr;

use crate::common::constants::UTM_KEYS;

/// One of the five recognised UTM query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtmKey {
    Source,
    Medium,
    Campaign,
    Term,
    Content,
}

impl UtmKey {
    pub const ALL: [UtmKey; 5] = [
        UtmKey::Source,
        UtmKey::Medium,
        UtmKey::Campaign,
        UtmKey::Term,
        UtmKey::Content,
    ];

    /// Query parameter name, e.g. `utm_source`.
    pub fn as_str(&self) -> &'static str {
        UTM_KEYS[self.index()]
    }

    /// Name without the `utm_` prefix, used as the form field label.
    pub fn short_name(&self) -> &'static str {
        &self.as_str()[4..]
    }

    fn index(&self) -> usize {
        match self {
            UtmKey::Source => 0,
            UtmKey::Medium => 1,
            UtmKey::Campaign => 2,
            UtmKey::Term => 3,
            UtmKey::Content => 4,
        }
    }
}

impl fmt::Display for UtmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UtmKey {
    type Err = anyhow::Error;

    /// Accepts both `utm_source` and `source`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let short = lower.strip_prefix("utm_").unwrap_or(&lower);
        UtmKey::ALL
            .into_iter()
            .find(|k| k.short_name() == short)
            .ok_or_else(|| anyhow::anyhow!("Unknown UTM parameter '{}'", s))
    }
}

/// Ordered mapping from UTM key to raw (untrimmed) value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(UtmKey, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding all five keys in form order.
    pub fn full(source: &str, medium: &str, campaign: &str, term: &str, content: &str) -> Self {
        let mut set = Self::new();
        for (key, value) in UtmKey::ALL
            .into_iter()
            .zip([source, medium, campaign, term, content])
        {
            set.set(key, value);
        }
        set
    }

    pub fn with(mut self, key: UtmKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Replaces the value in place when `key` is already present.
    pub fn set(&mut self, key: UtmKey, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: UtmKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (UtmKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
