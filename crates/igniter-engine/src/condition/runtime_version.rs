//! Runtime version condition.

use igniter_core::{ConditionKind, ConditionMessage, ConditionOutcome, RuntimeVersion, VersionComparator};

use crate::context::ResolutionContext;

/// Compares the running platform version against the declared one. The
/// message names both versions regardless of the outcome.
pub(super) fn evaluate(
    context: &ResolutionContext,
    comparator: VersionComparator,
    required: RuntimeVersion,
) -> ConditionOutcome {
    let running = context.runtime_version();
    let message = ConditionMessage::for_condition(ConditionKind::RuntimeVersion).because(format!(
        "required {comparator} {required}, running {running}"
    ));
    if comparator.matches(running, required) {
        ConditionOutcome::matched(message)
    } else {
        ConditionOutcome::no_match(message)
    }
}
