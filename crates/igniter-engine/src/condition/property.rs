//! Property value condition.

use igniter_core::{ConditionKind, ConditionMessage, ConditionOutcome};

use crate::context::ResolutionContext;

/// Compares a configuration property against the expected values.
///
/// An empty expectation list only requires the property to be present with
/// any value; an absent property matches iff `match_if_missing`.
pub(super) fn evaluate(
    context: &ResolutionContext,
    name: &str,
    expected: &[String],
    match_if_missing: bool,
) -> ConditionOutcome {
    let builder = || ConditionMessage::for_condition(ConditionKind::PropertyValue);
    match context.environment().get(name) {
        None if match_if_missing => {
            ConditionOutcome::matched(builder().because(format!("property '{name}' absent")))
        }
        None => {
            ConditionOutcome::no_match(builder().did_not_find("property", [name]))
        }
        Some(value) if expected.is_empty() || expected.iter().any(|e| e == value) => {
            ConditionOutcome::matched(
                builder().because(format!("property '{name}' has value '{value}'")),
            )
        }
        Some(value) => ConditionOutcome::no_match(builder().because(format!(
            "property '{name}' has value '{value}', expected one of {expected:?}"
        ))),
    }
}
