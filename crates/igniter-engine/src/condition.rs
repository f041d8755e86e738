//! Condition evaluation.
//!
//! Conditions themselves are declared data ([`igniter_core::Condition`]);
//! this module evaluates them against the [`ResolutionContext`]. Every
//! evaluation is logged and recorded into the caller's [`EvaluationReport`]
//! before the boolean is returned; an error inside a variant propagates and
//! aborts bootstrap.

mod property;
mod resource;
mod runtime_version;
mod web;


use igniter_core::{
    AttributeCatalog, Condition, ConditionOutcome, EvaluationReport, UnitId,
};

use crate::context::ResolutionContext;
use crate::error::Result;

/// Evaluates conditions and records their outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates one condition for a source, recording the outcome in the
    /// report and returning the match flag.
    pub fn matches(
        &self,
        context: &ResolutionContext,
        source: &str,
        condition: &Condition,
        report: &EvaluationReport,
    ) -> Result<bool> {
        let outcome = self.evaluate(context, condition)?;
        self.log_outcome(source, condition, &outcome);
        report.record(source, condition.kind(), outcome.clone());
        Ok(outcome.is_match())
    }

    /// Evaluates every condition declared for a unit; true only when all
    /// match. Evaluation stops at the first non-match, after recording it.
    pub fn unit_matches(
        &self,
        context: &ResolutionContext,
        unit: &UnitId,
        catalog: &AttributeCatalog,
        report: &EvaluationReport,
    ) -> Result<bool> {
        for condition in catalog.conditions(unit) {
            if !self.matches(context, unit.as_str(), condition, report)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Pure evaluation dispatch over the condition variants.
    pub fn evaluate(
        &self,
        context: &ResolutionContext,
        condition: &Condition,
    ) -> Result<ConditionOutcome> {
        match condition {
            Condition::RuntimeVersion {
                comparator,
                version,
            } => Ok(runtime_version::evaluate(context, *comparator, *version)),
            Condition::ResourcePresence { locations } => resource::evaluate(context, locations),
            Condition::WebApplicationType { required } => Ok(web::evaluate(context, *required)),
            Condition::PropertyValue {
                name,
                expected,
                match_if_missing,
            } => Ok(property::evaluate(context, name, expected, *match_if_missing)),
        }
    }

    fn log_outcome(&self, source: &str, condition: &Condition, outcome: &ConditionOutcome) {
        let verdict = if outcome.is_match() {
            "matched"
        } else {
            "did not match"
        };
        if outcome.message().is_empty() {
            tracing::trace!("Condition {} on {source} {verdict}", condition.kind());
        } else {
            tracing::trace!(
                "Condition {} on {source} {verdict} due to {}",
                condition.kind(),
                outcome.message()
            );
        }
    }
}
