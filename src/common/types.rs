/// Result of composing one base URL read from a batch source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLine {
    pub base_url: String,
    /// Empty when the base URL was invalid
    pub composed: String,
}

impl BatchLine {
    pub fn is_valid(&self) -> bool {
        !self.composed.is_empty()
    }
}

/// Batch composition statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchStats {
    pub composed: usize,
    pub invalid: usize,
    pub total: usize,
}

impl BatchStats {
    pub fn from_lines(lines: &[BatchLine]) -> Self {
        let composed = lines.iter().filter(|l| l.is_valid()).count();
        Self {
            composed,
            invalid: lines.len() - composed,
            total: lines.len(),
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.composed as f64 / self.total as f64 * 100.0
        }
    }
}
