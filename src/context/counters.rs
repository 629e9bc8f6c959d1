use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of passes made over the knowledge base by forward chaining.
    pub passes: usize,

    /// A count of iterations of the SLD search loop.
    pub iterations: usize,

    /// A count of formulas derived or solved.
    pub facts: usize,

    /// A count of implications rewritten during preprocessing.
    pub rewrites: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
