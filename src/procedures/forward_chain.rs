/*!
Forward chaining, to a fixpoint.

# Overview

Full passes are made over the knowledge base until a pass adds no new fact.
Within a pass each formula is examined in order, and facts added earlier in the pass are visible to later formulas:
- An implication whose premise is derived and whose conclusion is not adds the conclusion.
- A conjunction whose operands are both derived adds the conjunction itself (not the operands).
- A symbol is asserted, and so is added.
- Disjunctions and negations are not acted on.

The derived set only grows, and is bounded by the formulas occuring in the knowledge base, so the number of passes is finite.

# Gaps

The derived set is not complete with respect to disjunctive information, or negation.
For example, from `a ∨ b` and `¬a` nothing is derived.
This is a property of the procedure, and is not reported.

# Example

```rust
# use prop_chain::procedures::forward_chain::ForwardChain;
# use prop_chain::structures::formula::Formula;
let a = Formula::symbol("a");
let b = Formula::symbol("b");
let knowledge_base = vec![Formula::implies(a.clone(), b.clone()), a.clone()];

let mut engine = ForwardChain::new(&knowledge_base);

assert!(engine.pass());
assert!(engine.pass());
assert!(!engine.pass());

assert!(engine.derived().contains(&b));
```
*/

use std::collections::HashSet;

use crate::{misc::log::targets, structures::formula::Formula};

/// The set of facts derived by forward chaining.
pub type DerivedFacts = HashSet<Formula>;

/// An instance of forward chaining over some knowledge base.
pub struct ForwardChain<'kb> {
    knowledge_base: &'kb [Formula],

    derived: DerivedFacts,

    /// A count of passes made over the knowledge base.
    passes: usize,
}

impl<'kb> ForwardChain<'kb> {
    /// An instance of forward chaining with nothing derived.
    pub fn new(knowledge_base: &'kb [Formula]) -> Self {
        Self::from_derived(knowledge_base, DerivedFacts::default())
    }

    /// An instance of forward chaining which begins from some set of derived facts.
    pub fn from_derived(knowledge_base: &'kb [Formula], derived: DerivedFacts) -> Self {
        ForwardChain {
            knowledge_base,
            derived,
            passes: 0,
        }
    }

    /// Makes a single pass over the knowledge base.
    ///
    /// Returns whether some new fact was derived.
    pub fn pass(&mut self) -> bool {
        self.passes += 1;
        let mut fresh = false;

        for formula in self.knowledge_base {
            match formula {
                Formula::Implies(premise, conclusion) => {
                    if self.derived.contains(&**premise)
                        && !self.derived.contains(&**conclusion)
                    {
                        log::trace!(target: targets::FORWARD, "{conclusion} from {formula}");
                        self.derived.insert((**conclusion).clone());
                        fresh = true;
                    }
                }

                Formula::And(left, right) => {
                    if self.derived.contains(&**left)
                        && self.derived.contains(&**right)
                        && self.derived.insert(formula.clone())
                    {
                        log::trace!(target: targets::FORWARD, "{formula} from its operands");
                        fresh = true;
                    }
                }

                Formula::Symbol(_) => {
                    if self.derived.insert(formula.clone()) {
                        log::trace!(target: targets::FORWARD, "{formula} asserted");
                        fresh = true;
                    }
                }

                // Left unresolved.
                Formula::Or(_) | Formula::Not(_) => {}
            }
        }

        fresh
    }

    /// Makes passes over the knowledge base until some pass derives no new fact.
    pub fn run(&mut self) -> &DerivedFacts {
        while self.pass() {}

        log::info!(target: targets::FORWARD, "Fixpoint of {} facts after {} passes", self.derived.len(), self.passes);
        &self.derived
    }

    /// The facts derived so far.
    pub fn derived(&self) -> &DerivedFacts {
        &self.derived
    }

    /// A count of passes made so far, including a final pass which derived nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn into_derived(self) -> DerivedFacts {
        self.derived
    }
}

/// All facts derivable from the knowledge base by forward chaining.
pub fn forward_chain(knowledge_base: &[Formula]) -> DerivedFacts {
    let mut engine = ForwardChain::new(knowledge_base);
    engine.run();
    engine.into_derived()
}

#[cfg(test)]
mod forward_chain_tests {
    use super::*;

    fn s(name: &str) -> Formula {
        Formula::symbol(name)
    }

    #[test]
    fn modus_ponens() {
        let knowledge_base = vec![s("a"), Formula::implies(s("a"), s("b"))];
        let derived = forward_chain(&knowledge_base);

        assert_eq!(derived, [s("a"), s("b")].into_iter().collect());
    }

    #[test]
    fn chain_across_passes() {
        // Listed against the direction of inference, so each pass adds one link.
        let knowledge_base = vec![
            Formula::implies(s("c"), s("d")),
            Formula::implies(s("b"), s("c")),
            Formula::implies(s("a"), s("b")),
            s("a"),
        ];

        let mut engine = ForwardChain::new(&knowledge_base);
        engine.run();

        assert!(engine.derived().contains(&s("d")));
        assert_eq!(engine.passes(), 5);
    }

    #[test]
    fn conjunction_is_added_whole() {
        let conjunction = Formula::and(s("a"), s("b"));
        let knowledge_base = vec![s("a"), s("b"), conjunction.clone()];

        let derived = forward_chain(&knowledge_base);

        assert!(derived.contains(&conjunction));
        assert_eq!(derived.len(), 3);
    }

    #[test]
    fn conjunction_premise() {
        let conjunction = Formula::and(s("a"), s("b"));
        let knowledge_base = vec![
            Formula::implies(conjunction.clone(), s("c")),
            conjunction,
            s("b"),
            s("a"),
        ];

        assert!(forward_chain(&knowledge_base).contains(&s("c")));
    }

    #[test]
    fn unsatisfied_conjunction() {
        let knowledge_base = vec![s("a"), Formula::and(s("a"), s("b"))];
        let derived = forward_chain(&knowledge_base);

        assert_eq!(derived, [s("a")].into_iter().collect());
    }

    #[test]
    fn disjunction_and_negation_are_inert() {
        let knowledge_base = vec![
            Formula::or(vec![s("a"), s("b")]),
            Formula::not(s("a")),
            Formula::implies(Formula::not(s("a")), s("c")),
        ];

        assert!(forward_chain(&knowledge_base).is_empty());
    }

    #[test]
    fn rewritten_implication_is_inert() {
        let knowledge_base = vec![s("a"), Formula::implies(s("a"), s("b")).to_cnf()];
        let derived = forward_chain(&knowledge_base);

        assert!(!derived.contains(&s("b")));
    }

    #[test]
    fn empty_knowledge_base() {
        let mut engine = ForwardChain::new(&[]);
        assert!(engine.run().is_empty());
        assert_eq!(engine.passes(), 1);
    }
}
