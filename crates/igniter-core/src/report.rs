//! Container-scoped accumulator of condition outcomes.

use std::sync::Mutex;

use crate::condition::ConditionKind;
use crate::outcome::ConditionOutcome;

/// Append-only log of condition evaluations, for diagnostics.
///
/// One report is created per container by the host and passed explicitly
/// into every evaluation; it lives for the lifetime of that container. The
/// interior mutex only exists so a single handle can be shared during
/// bootstrap; resolution itself runs on one thread.
#[derive(Debug, Default)]
pub struct EvaluationReport {
    entries: Mutex<Vec<ReportEntry>>,
}

#[derive(Debug, Clone)]
struct ReportEntry {
    source: String,
    outcomes: Vec<(ConditionKind, ConditionOutcome)>,
}

impl EvaluationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one evaluation under the given source identifier.
    pub fn record(&self, source: &str, kind: ConditionKind, outcome: ConditionOutcome) {
        let mut entries = self.lock();
        match entries.iter_mut().find(|entry| entry.source == source) {
            Some(entry) => entry.outcomes.push((kind, outcome)),
            None => entries.push(ReportEntry {
                source: source.to_owned(),
                outcomes: vec![(kind, outcome)],
            }),
        }
    }

    /// Returns the outcomes recorded for one source, in recording order.
    pub fn outcomes_for(&self, source: &str) -> Vec<(ConditionKind, ConditionOutcome)> {
        self.lock()
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.outcomes.clone())
            .unwrap_or_default()
    }

    /// Returns every source that has at least one recorded outcome, in
    /// first-recording order.
    pub fn sources(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|entry| entry.source.clone())
            .collect()
    }

    /// Snapshot of the whole report for rendering front-ends.
    pub fn snapshot(&self) -> Vec<(String, Vec<(ConditionKind, ConditionOutcome)>)> {
        self.lock()
            .iter()
            .map(|entry| (entry.source.clone(), entry.outcomes.clone()))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReportEntry>> {
        // A panic while holding the lock leaves the data intact.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ConditionMessage;

    #[test]
    fn records_in_order_per_source() {
        let report = EvaluationReport::new();
        report.record(
            "unit-a",
            ConditionKind::RuntimeVersion,
            ConditionOutcome::matched(ConditionMessage::empty()),
        );
        report.record(
            "unit-a",
            ConditionKind::PropertyValue,
            ConditionOutcome::no_match(ConditionMessage::of("nope")),
        );
        report.record(
            "unit-b",
            ConditionKind::ResourcePresence,
            ConditionOutcome::matched(ConditionMessage::empty()),
        );

        let outcomes = report.outcomes_for("unit-a");
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].0, ConditionKind::RuntimeVersion);
        assert!(outcomes[0].1.is_match());
        assert_eq!(outcomes[1].0, ConditionKind::PropertyValue);
        assert!(!outcomes[1].1.is_match());

        assert_eq!(report.sources(), vec!["unit-a", "unit-b"]);
    }

    #[test]
    fn unknown_source_is_empty() {
        let report = EvaluationReport::new();
        assert!(report.outcomes_for("missing").is_empty());
    }
}
