//! Error types used in the library.
//!
//! - Neither engine returns an error, as every formula has a recognised shape for the engines.
//!   A stalled search is a verdict of [No](crate::reports::Verdict::No), not an error.
//! - The [entailment check](crate::procedures::entailment) is defined only for some shapes of query, and returns an error on any other shape.
//! - Errors when reading a knowledge base are [parse errors](ParseError).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// Any error from the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Entailment(EntailmentError),
    Parse(ParseError),
    State(StateError),
}

/// Noted errors during an entailment check.
///
/// Each is a query with no recognised shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntailmentError {
    /// An implication was given as a query.
    Implication,

    /// A disjunction of some arity other than two was given as a query.
    DisjunctionArity(usize),
}

impl From<EntailmentError> for ErrorKind {
    fn from(e: EntailmentError) -> Self {
        ErrorKind::Entailment(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),

    /// A clause without any literals was closed at the given line.
    EmptyClause(usize),

    /// The input ended inside a clause.
    UnterminatedClause,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from requests made in an unsuitable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A formula or goal was added after a solve.
    SolveComplete,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for EntailmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Implication => write!(f, "an implication is not a query"),
            Self::DisjunctionArity(n) => write!(f, "a disjunction of {n} operands is not a query"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::Line(line) => write!(f, "unreadable line {line}"),
            Self::MisplacedProblem(line) => write!(f, "problem specification at line {line}"),
            Self::EmptyClause(line) => write!(f, "empty clause at line {line}"),
            Self::UnterminatedClause => write!(f, "unterminated clause"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailment(e) => write!(f, "Entailment: {e}"),
            Self::Parse(e) => write!(f, "Parse: {e}"),
            Self::State(StateError::SolveComplete) => write!(f, "State: the solve is complete"),
        }
    }
}

impl std::error::Error for ErrorKind {}
