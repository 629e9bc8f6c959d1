/*!
The ordered history of formulas solved during [SLD resolution](crate::procedures::sld).

A history is append-only.
Formulas are kept in the order they were solved, and an index supports membership probes without a scan of the history.

A formula already in the history is never appended a second time.

```rust
# use prop_chain::structures::history::SolvedHistory;
# use prop_chain::structures::formula::Formula;
let mut history = SolvedHistory::default();

assert!(history.push(Formula::symbol("b")));
assert!(history.push(Formula::symbol("a")));
assert!(!history.push(Formula::symbol("b")));

let order = history.iter().map(|f| f.to_string()).collect::<Vec<_>>();
assert_eq!(order, vec!["b", "a"]);
```
*/

use std::collections::HashSet;

use crate::structures::{facts::FactBase, formula::Formula};

/// Formulas solved during a search, in order of solution.
#[derive(Clone, Debug, Default)]
pub struct SolvedHistory {
    order: Vec<Formula>,
    index: HashSet<Formula>,
}

impl SolvedHistory {
    /// Appends the formula, if the formula is not already in the history.
    ///
    /// Returns whether the formula was appended.
    pub fn push(&mut self, formula: Formula) -> bool {
        match self.index.insert(formula.clone()) {
            true => {
                self.order.push(formula);
                true
            }
            false => false,
        }
    }

    /// Whether the formula is in the history.
    pub fn contains(&self, formula: &Formula) -> bool {
        self.index.contains(formula)
    }

    /// An iterator over the history, in order of solution.
    pub fn iter(&self) -> impl Iterator<Item = &Formula> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FactBase for SolvedHistory {
    fn holds(&self, formula: &Formula) -> bool {
        self.contains(formula)
    }
}
