/*!
Stores of known facts.

Anything which can answer whether a formula is known is a [FactBase].
The trait is implemented for the derived set of forward chaining, the [history](crate::structures::history::SolvedHistory) of SLD resolution, and for plain slices, vectors, and sets of formulas.

```rust
# use std::collections::HashSet;
# use prop_chain::structures::facts::FactBase;
# use prop_chain::structures::formula::{Formula, Symbol};
let facts: HashSet<Formula> = [Formula::symbol("p")].into_iter().collect();

assert!(facts.holds(&Formula::symbol("p")));
assert!(facts.holds_symbol(&Symbol::from("p")));
assert!(!facts.holds_symbol(&Symbol::from("q")));
```
*/

use std::collections::HashSet;

use crate::structures::formula::{Formula, Symbol};

/// Something which knows whether a formula is among its facts.
pub trait FactBase {
    /// Whether the formula is among the facts.
    fn holds(&self, formula: &Formula) -> bool;

    /// Whether the symbol, as a formula, is among the facts.
    fn holds_symbol(&self, symbol: &Symbol) -> bool {
        self.holds(&Formula::Symbol(symbol.clone()))
    }
}

impl FactBase for HashSet<Formula> {
    fn holds(&self, formula: &Formula) -> bool {
        self.contains(formula)
    }
}

impl FactBase for [Formula] {
    fn holds(&self, formula: &Formula) -> bool {
        self.contains(formula)
    }

    fn holds_symbol(&self, symbol: &Symbol) -> bool {
        self.iter().any(|fact| fact.as_symbol() == Some(symbol))
    }
}

impl FactBase for Vec<Formula> {
    fn holds(&self, formula: &Formula) -> bool {
        self.as_slice().holds(formula)
    }

    fn holds_symbol(&self, symbol: &Symbol) -> bool {
        self.as_slice().holds_symbol(symbol)
    }
}
