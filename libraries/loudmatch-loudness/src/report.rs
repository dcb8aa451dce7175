//! Pairwise loudness comparison report

use crate::gain::db_to_ratio;
use crate::measure::Measurement;

/// Loudness comparison of one same-named file pair
#[derive(Debug, Clone, PartialEq)]
pub struct DiffEntry {
    /// File name shared by both sides
    pub name: String,
    /// Level of the file in the first directory
    pub reference: Measurement,
    /// Level of the file in the second directory
    pub target: Measurement,
    /// Amplitude ratio `10^((reference - target) / 20)`
    pub ratio: f64,
}

impl DiffEntry {
    /// Compare two measurements
    pub fn new(name: impl Into<String>, reference: Measurement, target: Measurement) -> Self {
        Self {
            name: name.into(),
            ratio: db_to_ratio(reference.value - target.value),
            reference,
            target,
        }
    }

    /// Report line, e.g. `[track.mp3] dBFS: -14.0, -16.8  gain: 1.349`
    ///
    /// Levels and gain always print with a decimal point.
    pub fn line(&self) -> String {
        format!(
            "[{}] {}: {:?}, {:?}  gain: {:?}",
            self.name,
            self.reference.mode.unit(),
            self.reference.value,
            self.target.value,
            self.ratio
        )
    }
}

/// Collected comparisons with their mean ratio
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    entries: Vec<DiffEntry>,
}

impl DiffReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pair and return the new entry
    pub fn push(
        &mut self,
        name: impl Into<String>,
        reference: Measurement,
        target: Measurement,
    ) -> &DiffEntry {
        self.entries.push(DiffEntry::new(name, reference, target));
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pairs were recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Arithmetic mean of the per-pair ratios, `None` for an empty report
    pub fn mean_ratio(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(|e| e.ratio).sum();
        Some(sum / self.entries.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasureMode;

    fn dbfs(value: f64) -> Measurement {
        Measurement {
            value,
            mode: MeasureMode::Dbfs,
        }
    }

    #[test]
    fn entry_ratio_and_line() {
        let entry = DiffEntry::new("a.mp3", dbfs(-10.0), dbfs(-30.0));
        assert!((entry.ratio - 10.0).abs() < 1e-12);
        assert_eq!(entry.line(), format!("[a.mp3] dBFS: -10.0, -30.0  gain: {:?}", entry.ratio));

        let whole = DiffEntry::new("b.mp3", dbfs(-20.0), dbfs(-20.0));
        assert_eq!(whole.line(), "[b.mp3] dBFS: -20.0, -20.0  gain: 1.0");
    }

    #[test]
    fn empty_report_has_no_mean() {
        let report = DiffReport::new();
        assert!(report.is_empty());
        assert_eq!(report.mean_ratio(), None);
    }

    #[test]
    fn mean_of_two_pairs() {
        let mut report = DiffReport::new();
        report.push("a", dbfs(-10.0), dbfs(-30.0)); // 10.0
        report.push("b", dbfs(-20.0), dbfs(-20.0)); // 1.0
        assert_eq!(report.len(), 2);
        assert!((report.mean_ratio().unwrap() - 5.5).abs() < 1e-12);
        assert_eq!(report.entries()[1].name, "b");
    }
}
