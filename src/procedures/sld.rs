/*!
An SLD-style resolution search for a verdict on a list of goals.

# Overview

A history of solved formulas is grown one formula at a time, until either:
- Every goal is in the history, and the verdict is [Yes](Verdict::Yes), or:
- No formula of the knowledge base can extend the history, and the verdict is [No](Verdict::No).

Each step scans the knowledge base from the first formula, and the first formula which extends the history is used:
- An implication `P → C` where `P` is a solved *symbol* and `C` is unsolved extends the history by `C`.
- A disjunction is read as a clause `p ∨ ¬n₁ ∨ … ∨ ¬nₖ`.
  The operands are scanned in order:
  + An operand which is not a negation and is unsolved is a candidate, replacing any earlier candidate.
  + An operand `¬n` where `n` is unsolved rejects the disjunction, and ends the scan.

  If the scan ends with a candidate, the history is extended by the candidate.
  So, of the unsolved positive operands, the *last* is used.
- A symbol which is unsolved extends the history by the symbol.
- Conjunctions and negations are never used.

The scan restarts from the first formula on every step, rather than resuming from the formula used on the previous step.

# Termination

Each step extends the history by a formula not already in the history, and each formula added occurs in the knowledge base.
So, the number of steps is bounded by the count of distinct conclusions, positive operands, and symbols in the knowledge base.
When each formula can contribute at most one formula (e.g. each disjunction has a single positive operand) the search ends after at most `k + 1` iterations on a knowledge base of `k` formulas.

# Example

```rust
# use prop_chain::procedures::sld::{SldResolution, Step};
# use prop_chain::reports::Verdict;
# use prop_chain::structures::formula::{Formula, Symbol};
let x = Formula::symbol("x");
let y = Formula::symbol("y");
let knowledge_base = vec![Formula::or(vec![x.clone(), Formula::not(y.clone())]), y.clone()];
let goals = vec![Symbol::from("x")];

let mut search = SldResolution::new(&knowledge_base, &goals);

assert_eq!(search.step(), Step::Solved(y));
assert_eq!(search.step(), Step::Solved(x));
assert_eq!(search.run(), Verdict::Yes);
```
*/

use crate::{
    misc::log::targets,
    procedures::entailment::goals_entailed,
    reports::Verdict,
    structures::{
        formula::{Formula, Symbol},
        history::SolvedHistory,
    },
};

/// The result of a single step of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The formula was appended to the history.
    Solved(Formula),

    /// No formula of the knowledge base extends the history.
    Stalled,
}

/// An instance of an SLD-style search over some knowledge base, for some goals.
pub struct SldResolution<'kb, 'g> {
    knowledge_base: &'kb [Formula],

    goals: &'g [Symbol],

    solved: SolvedHistory,

    /// A count of iterations of the search loop, each of which checks the goals.
    iterations: usize,
}

impl<'kb, 'g> SldResolution<'kb, 'g> {
    pub fn new(knowledge_base: &'kb [Formula], goals: &'g [Symbol]) -> Self {
        SldResolution {
            knowledge_base,
            goals,
            solved: SolvedHistory::default(),
            iterations: 0,
        }
    }

    /// Whether every goal has been solved.
    pub fn goals_met(&self) -> bool {
        goals_entailed(&self.solved, self.goals)
    }

    /// Extends the history by the first applicable formula of the knowledge base, if one exists.
    pub fn step(&mut self) -> Step {
        for clause in self.knowledge_base {
            let extension = match clause {
                Formula::Implies(premise, conclusion) => {
                    match premise.as_symbol().is_some()
                        && self.solved.contains(premise)
                        && !self.solved.contains(conclusion)
                    {
                        true => Some(&**conclusion),
                        false => None,
                    }
                }

                Formula::Or(operands) => self.positive_candidate(operands),

                Formula::Symbol(_) => match self.solved.contains(clause) {
                    true => None,
                    false => Some(clause),
                },

                // Never used.
                Formula::And(_, _) | Formula::Not(_) => None,
            };

            if let Some(formula) = extension {
                log::trace!(target: targets::SLD, "{formula} from {clause}");
                self.solved.push(formula.clone());
                return Step::Solved(formula.clone());
            }
        }

        log::trace!(target: targets::SLD, "Stalled with {} solved", self.solved.len());
        Step::Stalled
    }

    /// The positive operand a disjunction contributes to the history, if any.
    fn positive_candidate<'c>(&self, operands: &'c [Formula]) -> Option<&'c Formula> {
        let mut candidate = None;

        for operand in operands {
            match operand {
                Formula::Not(inner) => {
                    if !self.solved.contains(inner) {
                        return None;
                    }
                }

                positive => {
                    if !self.solved.contains(positive) {
                        candidate = Some(positive);
                    }
                }
            }
        }

        candidate
    }

    /// Steps until the goals are met, or the search stalls.
    pub fn run(&mut self) -> Verdict {
        loop {
            self.iterations += 1;

            if self.goals_met() {
                log::info!(target: targets::SLD, "Goals met after {} iterations", self.iterations);
                return Verdict::Yes;
            }

            if let Step::Stalled = self.step() {
                log::info!(target: targets::SLD, "Stalled after {} iterations", self.iterations);
                return Verdict::No;
            }
        }
    }

    /// The knowledge base of the search.
    pub fn knowledge_base(&self) -> &'kb [Formula] {
        self.knowledge_base
    }

    /// The history of solved formulas.
    pub fn solved(&self) -> &SolvedHistory {
        &self.solved
    }

    /// A count of iterations of the search loop.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn into_solved(self) -> SolvedHistory {
        self.solved
    }
}

/// The verdict of an SLD-style search for the goals over the knowledge base.
pub fn sld_resolve(knowledge_base: &[Formula], goals: &[Symbol]) -> Verdict {
    SldResolution::new(knowledge_base, goals).run()
}
