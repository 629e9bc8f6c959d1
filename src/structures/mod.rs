//! Key structures, such as formulas and the stores of known facts.
//!
//! # Knowledge bases
//!
//! A knowledge base is an ordered sequence of [formulas](formula), represented as a slice or vector of formulas.
//! Order matters, as both engines scan a knowledge base from first to last and act on the first applicable formula.
//!
//! # Goals
//!
//! A goal list is an ordered sequence of [symbols](formula::Symbol), read as the conjunction of those symbols.
//!
//! # Facts
//!
//! The result of an engine is some store of known [facts], either:
//! - A set of derived formulas, from forward chaining.
//! - A [history] of solved formulas, from SLD resolution.

pub mod facts;
pub mod formula;
pub mod history;
