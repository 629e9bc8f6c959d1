/*!
The context --- to which formulas and goals are added and within which solves take place, etc.

A context holds a knowledge base and a list of goals, and a solve runs the [configured](crate::config::Config) engine over these to obtain a [Verdict].
The result of the engine (the derived facts or the solved history) is kept alongside the verdict for inspection.

# Example
```rust
# use prop_chain::context::Context;
# use prop_chain::config::{Config, Engine};
# use prop_chain::reports::{Report, Verdict};
# use prop_chain::structures::formula::{Formula, Symbol};
let mut config = Config::default();
config.engine.value = Engine::Forward;

let mut the_context = Context::from_config(config);
let a = Formula::symbol("a");
let b = Formula::symbol("b");

assert!(the_context.add_formula(a.clone()).is_ok());
assert!(the_context.add_formula(Formula::implies(a, b.clone())).is_ok());
assert!(the_context.add_goal(Symbol::from("b")).is_ok());

assert_eq!(the_context.report(), Report::Unknown);
assert_eq!(the_context.solve(), Ok(Verdict::Yes));
assert!(the_context.derived().is_some_and(|facts| facts.contains(&b)));
```
*/

mod counters;
pub use counters::Counters;

use std::time::Instant;

use crate::{
    config::{Config, Engine},
    misc::log::targets,
    preprocessing,
    procedures::{
        entailment::is_solved,
        forward_chain::{DerivedFacts, ForwardChain},
        sld::SldResolution,
    },
    reports::{Report, Verdict},
    structures::{
        formula::{Formula, Symbol},
        history::SolvedHistory,
    },
    types::err::{self},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve has completed with the verdict.
    Solved(Verdict),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solved(verdict) => write!(f, "Solved ({verdict})"),
        }
    }
}

/// A context, holding a knowledge base and goals.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counts for the most recent solve.
    pub counters: Counters,

    pub(crate) knowledge_base: Vec<Formula>,

    pub(crate) goals: Vec<Symbol>,

    pub(crate) state: ContextState,

    derived: Option<DerivedFacts>,

    solved: Option<SolvedHistory>,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            knowledge_base: Vec::default(),
            goals: Vec::default(),
            state: ContextState::Input,
            derived: None,
            solved: None,
        }
    }

    /// Solves for the goals over the knowledge base, with the configured engine.
    ///
    /// With forward chaining the verdict is [Yes](Verdict::Yes) exactly when each goal is solved on the derived facts.
    pub fn solve(&mut self) -> Result<Verdict, err::ErrorKind> {
        if let ContextState::Solved(verdict) = self.state {
            return Ok(verdict);
        }

        let start = Instant::now();

        if self.config.preprocessing.value {
            self.counters.rewrites = preprocessing::implications_to_cnf(&mut self.knowledge_base);
        }

        log::info!(target: targets::CONTEXT, "Solving {} goals over {} formulas with {}", self.goals.len(), self.knowledge_base.len(), self.config.engine.value);

        let verdict = match self.config.engine.value {
            Engine::Forward => {
                let mut engine = ForwardChain::new(&self.knowledge_base);
                engine.run();
                self.counters.passes = engine.passes();

                let derived = engine.into_derived();
                self.counters.facts = derived.len();

                let mut entailed = true;
                for goal in &self.goals {
                    if !is_solved(&derived, &Formula::Symbol(goal.clone()))? {
                        entailed = false;
                        break;
                    }
                }

                self.derived = Some(derived);
                Verdict::from(entailed)
            }

            Engine::Sld => {
                let mut search = SldResolution::new(&self.knowledge_base, &self.goals);
                let verdict = search.run();
                self.counters.iterations = search.iterations();

                let solved = search.into_solved();
                self.counters.facts = solved.len();

                self.solved = Some(solved);
                verdict
            }
        };

        self.counters.time = start.elapsed();
        self.state = ContextState::Solved(verdict);

        Ok(verdict)
    }

    /// A report on the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input => Report::Unknown,
            ContextState::Solved(verdict) => Report::Verdict(verdict),
        }
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    /// The knowledge base, in order.
    pub fn knowledge_base(&self) -> &[Formula] {
        &self.knowledge_base
    }

    /// The goals, in order.
    pub fn goals(&self) -> &[Symbol] {
        &self.goals
    }

    /// Every symbol occurring in the knowledge base, in order of first occurrence.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut found: Vec<&Symbol> = Vec::default();
        for formula in &self.knowledge_base {
            for symbol in formula.symbols() {
                if !found.contains(&symbol) {
                    found.push(symbol);
                }
            }
        }
        found
    }

    /// The facts derived by forward chaining, if forward chaining has been used to solve.
    pub fn derived(&self) -> Option<&DerivedFacts> {
        self.derived.as_ref()
    }

    /// The history of an SLD search, if SLD resolution has been used to solve.
    pub fn solved(&self) -> Option<&SolvedHistory> {
        self.solved.as_ref()
    }
}
