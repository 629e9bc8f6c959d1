use std::str::FromStr;

use serde::Serialize;

/// Variant engines to use when solving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    /// Derive all facts by forward chaining, then check the goals are entailed
    Forward,

    /// Search for the goals by SLD-style resolution
    Sld,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Sld => write!(f, "sld"),
        }
    }
}

impl FromStr for Engine {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),

            "sld" => Ok(Self::Sld),

            _unkown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn string_round() {
        for engine in [Engine::Forward, Engine::Sld] {
            assert_eq!(Engine::from_str(&engine.to_string()), Ok(engine));
        }
        assert!(Engine::from_str("backward").is_err());
    }
}
