/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [add_formula](crate::context::Context::add_formula), to append a formula to the knowledge base.
- [add_goal](crate::context::Context::add_goal), to append a symbol to the goals.

In addition, a knowledge base may be read from a DIMACS representation, with [read_dimacs](crate::context::Context::read_dimacs).

Input is permitted only until a solve.

# Examples

```rust
# use prop_chain::context::Context;
# use prop_chain::config::Config;
# use prop_chain::reports::Verdict;
# use prop_chain::structures::formula::{Formula, Symbol};
#
let mut the_context = Context::from_config(Config::default());
let x = Formula::symbol("x");
let y = Formula::symbol("y");

assert!(the_context.add_formula(Formula::or(vec![x, Formula::not(y.clone())])).is_ok());
assert!(the_context.add_formula(y).is_ok());
assert!(the_context.add_goal(Symbol::from("x")).is_ok());

assert_eq!(the_context.solve(), Ok(Verdict::Yes));
```
*/
mod dimacs;
pub use dimacs::SymbolTable;

use crate::{
    context::{Context, ContextState},
    misc::log::targets,
    structures::formula::{Formula, Symbol},
    types::err::{self},
};

impl Context {
    /// Appends a formula to the knowledge base.
    pub fn add_formula(&mut self, formula: impl Into<Formula>) -> Result<(), err::ErrorKind> {
        self.check_input()?;

        let formula = formula.into();
        log::trace!(target: targets::CONTEXT, "Formula {formula}");
        self.knowledge_base.push(formula);
        Ok(())
    }

    /// Appends a symbol to the goals.
    pub fn add_goal(&mut self, goal: impl Into<Symbol>) -> Result<(), err::ErrorKind> {
        self.check_input()?;

        let goal = goal.into();
        log::trace!(target: targets::CONTEXT, "Goal {goal}");
        if !self.symbols().contains(&&goal) {
            log::warn!(target: targets::CONTEXT, "Goal {goal} does not occur in the knowledge base");
        }
        self.goals.push(goal);
        Ok(())
    }

    fn check_input(&self) -> Result<(), err::StateError> {
        match self.state {
            ContextState::Input => Ok(()),
            ContextState::Solved(_) => Err(err::StateError::SolveComplete),
        }
    }
}
