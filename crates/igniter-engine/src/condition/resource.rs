//! Resource presence condition.

use igniter_core::{ConditionKind, ConditionMessage, ConditionOutcome};

use crate::context::ResolutionContext;
use crate::error::Result;

/// Resolves every location's placeholders against the environment and
/// collects all that do not exist; matches only when none are missing.
///
/// An unresolvable placeholder is fatal, not a non-match.
pub(super) fn evaluate(context: &ResolutionContext, locations: &[String]) -> Result<ConditionOutcome> {
    let mut missing = Vec::new();
    for location in locations {
        let resolved = context.environment().resolve_placeholders(location)?;
        if !context.resources().exists(&resolved) {
            missing.push(resolved);
        }
    }
    if missing.is_empty() {
        Ok(ConditionOutcome::matched(
            ConditionMessage::for_condition(ConditionKind::ResourcePresence)
                .found("resources", locations),
        ))
    } else {
        Ok(ConditionOutcome::no_match(
            ConditionMessage::for_condition(ConditionKind::ResourcePresence)
                .did_not_find("resources", &missing),
        ))
    }
}
