/*!
Preprocessing of a knowledge base, before inference.

For the moment this is limited to the rewrite of each top-level implication `P → C` to the disjunction `¬P ∨ C`, via [to_cnf](Formula::to_cnf).

The rewrite is optional, and made only on request (see [Config::preprocessing](crate::config::Config::preprocessing)).
Note, the rewrite changes which engine acts on a formula, as [forward chaining](crate::procedures::forward_chain) does not act on disjunctions while [SLD resolution](crate::procedures::sld) reads a disjunction as a clause.

```rust
# use prop_chain::preprocessing::implications_to_cnf;
# use prop_chain::structures::formula::Formula;
let mut knowledge_base = vec![
    Formula::symbol("a"),
    Formula::implies(Formula::symbol("a"), Formula::symbol("b")),
];

assert_eq!(implications_to_cnf(&mut knowledge_base), 1);
assert_eq!(knowledge_base[1].to_string(), "(¬a ∨ b)");
```
*/

use crate::{misc::log::targets, structures::formula::Formula};

/// Rewrites each top-level implication of the knowledge base, in place.
///
/// Returns a count of the formulas rewritten.
pub fn implications_to_cnf(knowledge_base: &mut [Formula]) -> usize {
    let mut count = 0;

    for formula in knowledge_base.iter_mut() {
        if let Formula::Implies(_, _) = formula {
            let implication = std::mem::replace(formula, Formula::Or(Vec::default()));
            *formula = implication.to_cnf();
            log::trace!(target: targets::PREPROCESSING, "Rewrote to {formula}");
            count += 1;
        }
    }

    log::info!(target: targets::PREPROCESSING, "{count} implications rewritten");
    count
}
