//! Grouping and accumulator helpers shared by the reports

use std::collections::HashMap;
use std::hash::Hash;

/// Groups records by key, keeping groups in the order their key was first
/// seen during the scan.
pub(crate) struct Groups<K, V> {
    slots: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> Groups<K, V>
where
    K: Eq + Hash + Clone,
    V: Default,
{
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Accumulator for `key`, created on first sight
    pub(crate) fn entry(&mut self, key: K) -> &mut V {
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.slots.insert(key.clone(), slot);
                self.entries.push((key, V::default()));
                slot
            }
        };

        &mut self.entries[slot].1
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

/// Running arithmetic mean; values that are never pushed do not count.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Mean {
    sum: f64,
    count: u64,
}

impl Mean {
    pub(crate) fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// `None` when nothing was pushed
    pub(crate) fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    pub(crate) fn value_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

/// `part / whole * 100`, or 0 for an empty whole
pub(crate) fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_first_seen_order() {
        let mut groups: Groups<&str, u32> = Groups::new();
        for key in ["Forward", "Defender", "Forward", "Goalkeeper", "Defender"] {
            *groups.entry(key) += 1;
        }

        let entries = groups.into_entries();
        assert_eq!(
            entries,
            vec![("Forward", 2), ("Defender", 2), ("Goalkeeper", 1)]
        );
    }

    #[test]
    fn test_groups_are_case_sensitive() {
        let mut groups: Groups<&str, u32> = Groups::new();
        *groups.entry("forward") += 1;
        *groups.entry("Forward") += 1;

        assert_eq!(groups.into_entries().len(), 2);
    }

    #[test]
    fn test_mean() {
        let mut mean = Mean::default();
        assert_eq!(mean.value(), None);
        assert_eq!(mean.value_or_zero(), 0.0);

        mean.push(5.0);
        mean.push(4.0);
        mean.push(4.0);
        assert!((mean.value().unwrap() - 13.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_of_empty_whole_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
