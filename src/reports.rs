//! Details on the result of some procedure.
use serde::Serialize;

/// The verdict of a query, aka. whether the goals are entailed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum Verdict {
    /// The goals are covered.
    Yes,

    /// The goals are not covered, and no further progress is possible.
    No,
}

impl From<bool> for Verdict {
    fn from(entailed: bool) -> Self {
        match entailed {
            true => Verdict::Yes,
            false => Verdict::No,
        }
    }
}

/// High-level reports regarding a context.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// A verdict from a completed solve.
    Verdict(Verdict),

    /// No solve has completed.
    Unknown,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verdict(verdict) => write!(f, "{verdict}"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
