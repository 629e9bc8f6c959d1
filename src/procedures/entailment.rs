/*!
Checks on whether a query is covered by some store of facts.

By the shape of the query:
- A symbol is covered if the symbol is a fact.
- A negation `¬P` is covered if `P` is a fact.
- A conjunction, or a disjunction of exactly two operands, is covered if both operands are covered, with the left checked first.

Any other shape of query is an error.

# Negation

The check on a negation is for the *presence* of the inner formula.
That is, `¬P` is read as a query on whether `P` was solved as its own node, and this differs from the reading of negation in [SLD resolution](crate::procedures::sld).

```rust
# use std::collections::HashSet;
# use prop_chain::procedures::entailment::is_solved;
# use prop_chain::structures::formula::Formula;
let p = Formula::symbol("p");
let facts: HashSet<Formula> = [p.clone()].into_iter().collect();

assert_eq!(is_solved(&facts, &Formula::not(p)), Ok(true));
```
*/

use crate::{
    misc::log::targets,
    structures::{
        facts::FactBase,
        formula::{Formula, Symbol},
    },
    types::err,
};

/// Whether the query is covered by the facts.
pub fn is_solved(
    facts: &(impl FactBase + ?Sized),
    query: &Formula,
) -> Result<bool, err::EntailmentError> {
    let covered = match query {
        Formula::Symbol(_) => facts.holds(query),

        Formula::Not(inner) => facts.holds(inner),

        Formula::And(left, right) => is_solved(facts, left)? && is_solved(facts, right)?,

        Formula::Or(operands) => match operands.as_slice() {
            [left, right] => is_solved(facts, left)? && is_solved(facts, right)?,
            _ => return Err(err::EntailmentError::DisjunctionArity(operands.len())),
        },

        Formula::Implies(_, _) => return Err(err::EntailmentError::Implication),
    };

    log::trace!(target: targets::ENTAILMENT, "{query}: {covered}");
    Ok(covered)
}

/// Whether every goal is among the facts.
pub fn goals_entailed(facts: &(impl FactBase + ?Sized), goals: &[Symbol]) -> bool {
    goals.iter().all(|goal| facts.holds_symbol(goal))
}
