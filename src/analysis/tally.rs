/*!
 * Per-character counters that keep first-seen order.
 */

use std::fmt::Write;

/// Counts keyed by character name, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTally {
    entries: Vec<(String, usize)>,
}

impl LineTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to a name, registering it on first use.
    pub fn add(&mut self, name: &str, amount: usize) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += amount,
            None => self.entries.push((name.to_string(), amount)),
        }
    }

    pub fn increment(&mut self, name: &str) {
        self.add(name, 1);
    }

    pub fn get(&self, name: &str) -> usize {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Percentage of the total held by `name`.
    pub fn share(&self, name: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(name) as f64 / total as f64 * 100.0
    }

    /// One line per name: padded name, a bar with one block per 5 %, and the rounded percentage.
    pub fn distribution_lines(&self, prefix: &str) -> Vec<String> {
        self.iter()
            .map(|(name, _)| {
                let percent = self.share(name);
                let mut line = String::new();
                let _ = write!(
                    line,
                    "{}{:<12}: {} {}%",
                    prefix,
                    name,
                    distribution_bar(percent),
                    percent.round_ties_even() as u64
                );
                line
            })
            .collect()
    }
}

/// One `█` per full 5 %.
pub fn distribution_bar(percent: f64) -> String {
    "█".repeat((percent / 5.0).floor().max(0.0) as usize)
}
