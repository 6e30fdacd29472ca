//! # Unit Counter

use crate::types::{Count, Unit, VocabHashMap, hash_map_with_capacity};

/// Frequency counter over vocabulary units.
#[derive(Debug, Clone, Default)]
pub struct UnitCounter {
    /// The unit counts.
    pub counts: VocabHashMap<Unit, Count>,
}

impl UnitCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self {
            counts: hash_map_with_capacity(1024),
        }
    }

    /// Count one occurrence of `unit`.
    pub fn update<S: AsRef<str>>(
        &mut self,
        unit: S,
    ) {
        let unit = unit.as_ref();
        match self.counts.get_mut(unit) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(unit.into(), 1);
            }
        }
    }

    /// Count every unit in `units`.
    pub fn update_from_units<I>(
        &mut self,
        units: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for unit in units {
            self.update(unit);
        }
    }

    /// Count every character of `text`.
    pub fn update_from_chars(
        &mut self,
        text: &str,
    ) {
        let mut buf = [0u8; 4];
        for c in text.chars() {
            self.update(c.encode_utf8(&mut buf));
        }
    }

    /// The count for `unit`; zero when unseen.
    pub fn count(
        &self,
        unit: &str,
    ) -> Count {
        self.counts.get(unit).copied().unwrap_or(0)
    }

    /// The number of distinct units.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Is the counter empty?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Drop every unit counted fewer than `cutoff` times,
    /// or for which `reject` returns true.
    ///
    /// ## Returns
    /// The number of units dropped.
    pub fn retain_frequent<F>(
        &mut self,
        cutoff: Count,
        reject: F,
    ) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let before = self.counts.len();
        self.counts
            .retain(|unit, count| *count >= cutoff && !reject(unit.as_str()));
        before - self.counts.len()
    }

    /// Release the units, ordered by (count descending, unit ascending).
    pub fn into_sorted_units(self) -> Vec<Unit> {
        let mut entries: Vec<(Unit, Count)> = self.counts.into_iter().collect();
        entries.sort_by(|(a, ca), (b, cb)| cb.cmp(ca).then_with(|| a.cmp(b)));
        entries.into_iter().map(|(unit, _)| unit).collect()
    }
}
