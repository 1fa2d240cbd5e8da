use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The event surface the binder reacts to. Targets are element ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Event {
    Ready,
    Keyup { target: String },
    Click { target: String },
}

/// Resolution of a click after any confirm gate has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickOutcome {
    /// Default action goes ahead.
    Proceed,
    /// User declined the prompt; default action is blocked.
    Suppressed,
}

impl ClickOutcome {
    pub fn proceeds(self) -> bool {
        matches!(self, ClickOutcome::Proceed)
    }
}

impl fmt::Display for ClickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickOutcome::Proceed => write!(f, "proceed"),
            ClickOutcome::Suppressed => write!(f, "suppressed"),
        }
    }
}

impl FromStr for ClickOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "proceed" => Ok(ClickOutcome::Proceed),
            "suppressed" => Ok(ClickOutcome::Suppressed),
            _ => Err(format!("Invalid click outcome: {}", s)),
        }
    }
}
