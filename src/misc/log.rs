/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [forward chaining](crate::procedures::forward_chain)
    pub const FORWARD: &str = "forward";

    /// Logs related to [SLD resolution](crate::procedures::sld)
    pub const SLD: &str = "sld";

    /// Logs related to [entailment checks](crate::procedures::entailment)
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to [preprocessing](crate::preprocessing)
    pub const PREPROCESSING: &str = "preprocessing";

    /// Logs related to reading a knowledge base
    pub const PARSER: &str = "parser";

    /// Logs related to the [context](crate::context)
    pub const CONTEXT: &str = "context";
}
