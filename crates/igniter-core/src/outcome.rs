//! Condition outcomes and their diagnostic messages.

use std::fmt;

use crate::condition::ConditionKind;

/// Human-readable diagnostic attached to a condition outcome.
///
/// Purely informational; never consulted for control flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionMessage(String);

impl ConditionMessage {
    /// The empty message.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A message from literal text.
    pub fn of(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Starts a message for the given condition kind, e.g.
    /// `(ResourcePresence) did not find resources 'x', 'y'`.
    pub fn for_condition(kind: ConditionKind) -> ConditionMessageBuilder {
        ConditionMessageBuilder {
            prefix: format!("({kind})"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builder producing the common message phrasings.
#[derive(Debug)]
pub struct ConditionMessageBuilder {
    prefix: String,
}

impl ConditionMessageBuilder {
    /// `(Kind) found <what> <items>`.
    pub fn found<I, T>(self, what: &str, items: I) -> ConditionMessage
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        ConditionMessage(format!("{} found {what} {}", self.prefix, join(items)))
    }

    /// `(Kind) did not find <what> <items>`.
    pub fn did_not_find<I, T>(self, what: &str, items: I) -> ConditionMessage
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        ConditionMessage(format!(
            "{} did not find {what} {}",
            self.prefix,
            join(items)
        ))
    }

    /// `(Kind) <reason>`.
    pub fn because(self, reason: impl fmt::Display) -> ConditionMessage {
        ConditionMessage(format!("{} {reason}", self.prefix))
    }
}

fn join<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    items
        .into_iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The immutable result of evaluating one condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionOutcome {
    matched: bool,
    message: ConditionMessage,
}

impl ConditionOutcome {
    /// A matching outcome.
    pub fn matched(message: ConditionMessage) -> Self {
        Self {
            matched: true,
            message,
        }
    }

    /// A non-matching outcome.
    pub fn no_match(message: ConditionMessage) -> Self {
        Self {
            matched: false,
            message,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }

    pub fn message(&self) -> &ConditionMessage {
        &self.message
    }
}
