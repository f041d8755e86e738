//! Web application type condition.

use igniter_core::{ConditionKind, ConditionMessage, ConditionOutcome, WebApplicationType};

use crate::context::ResolutionContext;

/// Matches when the required flavor's marker type is present in the runtime.
/// With no declared flavor the condition matches unconditionally.
pub(super) fn evaluate(
    context: &ResolutionContext,
    required: Option<WebApplicationType>,
) -> ConditionOutcome {
    let Some(required) = required else {
        return ConditionOutcome::matched(
            ConditionMessage::for_condition(ConditionKind::WebApplicationType)
                .because("no required web application type declared"),
        );
    };
    let marker = required.marker_type();
    if context.types().contains(marker) {
        ConditionOutcome::matched(
            ConditionMessage::for_condition(ConditionKind::WebApplicationType)
                .found("marker type", [marker]),
        )
    } else {
        ConditionOutcome::no_match(
            ConditionMessage::for_condition(ConditionKind::WebApplicationType)
                .did_not_find("marker type", [marker]),
        )
    }
}
