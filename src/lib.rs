//! A library for propositional inference over knowledge bases of formulas.
//!
//! prop_chain answers two questions about a knowledge base built from atomic symbols, negation, conjunction, disjunction, and implication:
//! - Which facts are derivable by [forward chaining](crate::procedures::forward_chain).
//! - Whether a conjunction of goal symbols is entailed, by an [SLD-style search](crate::procedures::sld).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config), which selects the engine used to solve.
//! Formulas may be added through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [programatically](crate::context::Context::add_formula), and goals through [add_goal](crate::context::Context::add_goal).
//!
//! Both engines read the knowledge base repeatedly but never mutate it.
//! Each owns a private accumulator:
//! - Forward chaining grows a set of derived facts until a pass adds nothing.
//! - SLD resolution grows an ordered [history](crate::structures::history::SolvedHistory), one formula per step, until the goals are covered or no clause applies.
//!
//! Useful starting points, then, may be:
//! - The [structures] to familiarise yourself with formulas and the stores of known facts.
//! - The [procedures] to inspect the engines and the entailment check.
//! - The [preprocessing] module for the rewrite of implications to disjunctions.
//!
//! The engines may also be used directly, without a context.
//!
//! ```rust
//! # use prop_chain::procedures::{forward_chain::forward_chain, entailment::is_solved, sld::sld_resolve};
//! # use prop_chain::reports::Verdict;
//! # use prop_chain::structures::formula::{Formula, Symbol};
//! let a = Formula::symbol("a");
//! let b = Formula::symbol("b");
//! let knowledge_base = vec![a.clone(), Formula::implies(a.clone(), b.clone())];
//!
//! let derived = forward_chain(&knowledge_base);
//! assert!(derived.contains(&a) && derived.contains(&b));
//! assert_eq!(is_solved(&derived, &b), Ok(true));
//!
//! assert_eq!(sld_resolve(&knowledge_base, &[Symbol::from("b")]), Verdict::Yes);
//! ```
//!
//! # Examples
//!
//! + Parse a DIMACS formula and check goals with the SLD engine.
//!
//! ```rust
//! # use prop_chain::context::Context;
//! # use prop_chain::config::Config;
//! # use prop_chain::reports::{Report, Verdict};
//! # use prop_chain::structures::formula::Symbol;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 3 3
//!  1     0
//! -1  2  0
//! -2  3  0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! the_context.add_goal(Symbol::from("3"));
//!
//! assert_eq!(the_context.solve(), Ok(Verdict::Yes));
//! assert_eq!(the_context.report(), Report::Verdict(Verdict::Yes));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! No logger is installed by the library.
//!
//! The targets are listed in [misc::log].

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

#[doc(hidden)]
pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod misc;
pub mod reports;

pub mod preprocessing;
