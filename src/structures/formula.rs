/*!
Formulas, aka. nodes of a propositional expression tree.

A formula is one of:
- A [Symbol], an atomic proposition identified by its name.
- The negation of a formula.
- The conjunction of exactly two formulas.
- The disjunction of an ordered sequence of formulas.
- An implication from a premise to a conclusion.

Formulas are immutable values.
Equality, ordering, and hashing are structural, and so two formulas built independently from equal names are interchangeable as members of a set or a sequence.

```rust
# use prop_chain::structures::formula::Formula;
let p = Formula::symbol("p");
let q = Formula::symbol("q");

let rule = Formula::implies(p.clone(), q.clone());
assert_eq!(rule.to_string(), "(p → q)");

assert_eq!(rule.to_cnf(), Formula::or(vec![Formula::not(p), q]));
```

# Notes
- The order of the operands of a disjunction is preserved, and is significant to the [SLD engine](crate::procedures::sld).
- Conjunction is binary, while disjunction has arbitrary arity.
*/

use serde::Serialize;

/// An atomic proposition, identified by name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Symbol(String);

impl Symbol {
    /// A symbol with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    /// The name of the symbol.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol(name)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the expression tree.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Formula {
    /// An atomic proposition.
    Symbol(Symbol),

    /// The negation of the inner formula.
    Not(Box<Formula>),

    /// The conjunction of a left and right formula.
    And(Box<Formula>, Box<Formula>),

    /// The disjunction of the operands, in order of construction.
    Or(Vec<Formula>),

    /// An implication from a premise (first) to a conclusion (second).
    Implies(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// The symbol with the given name, as a formula.
    pub fn symbol(name: impl Into<String>) -> Self {
        Formula::Symbol(Symbol::new(name))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(operands: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(operands.into_iter().collect())
    }

    pub fn implies(premise: Formula, conclusion: Formula) -> Self {
        Formula::Implies(Box::new(premise), Box::new(conclusion))
    }

    /// The rewrite of an implication `P → C` to the disjunction `¬P ∨ C`.
    ///
    /// Only the top level of the formula is rewritten.
    /// Any other variant is returned unchanged, and implications nested within the formula are untouched.
    pub fn to_cnf(self) -> Formula {
        match self {
            Formula::Implies(premise, conclusion) => {
                Formula::Or(vec![Formula::Not(premise), *conclusion])
            }
            other => other,
        }
    }

    /// The symbol of the formula, if the formula is a symbol.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Formula::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Every symbol occurring in the formula, in order of first occurrence.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut found: Vec<&Symbol> = Vec::default();
        let mut stack = vec![self];

        while let Some(formula) = stack.pop() {
            match formula {
                Formula::Symbol(symbol) => {
                    if !found.contains(&symbol) {
                        found.push(symbol);
                    }
                }

                Formula::Not(inner) => stack.push(inner),

                Formula::And(left, right) | Formula::Implies(left, right) => {
                    stack.push(right);
                    stack.push(left);
                }

                Formula::Or(operands) => stack.extend(operands.iter().rev()),
            }
        }

        found
    }
}

impl From<Symbol> for Formula {
    fn from(symbol: Symbol) -> Self {
        Formula::Symbol(symbol)
    }
}

impl From<&str> for Formula {
    fn from(name: &str) -> Self {
        Formula::symbol(name)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Not(inner) => write!(f, "¬{inner}"),
            Self::And(left, right) => write!(f, "({left} ∧ {right})"),
            Self::Or(operands) => {
                let parts = operands
                    .iter()
                    .map(|operand| operand.to_string())
                    .collect::<Vec<_>>();
                write!(f, "({})", parts.join(" ∨ "))
            }
            Self::Implies(premise, conclusion) => write!(f, "({premise} → {conclusion})"),
        }
    }
}

#[cfg(test)]
mod formula_tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn structural_equality() {
        let one = Formula::and(Formula::symbol("a"), Formula::not(Formula::symbol("b")));
        let other = Formula::and(Formula::symbol("a"), Formula::not(Formula::symbol("b")));
        assert_eq!(one, other);

        let mut set = HashSet::new();
        assert!(set.insert(one));
        assert!(!set.insert(other));
    }

    #[test]
    fn operand_order_matters() {
        let ab = Formula::or(vec![Formula::symbol("a"), Formula::symbol("b")]);
        let ba = Formula::or(vec![Formula::symbol("b"), Formula::symbol("a")]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn cnf_of_implication() {
        let p = Formula::and(Formula::symbol("p"), Formula::symbol("q"));
        let c = Formula::symbol("r");

        let rewritten = Formula::implies(p.clone(), c.clone()).to_cnf();
        assert_eq!(rewritten, Formula::or(vec![Formula::not(p), c]));
    }

    #[test]
    fn cnf_is_top_level_only() {
        let nested = Formula::not(Formula::implies(Formula::symbol("a"), Formula::symbol("b")));
        assert_eq!(nested.clone().to_cnf(), nested);

        let symbol = Formula::symbol("a");
        assert_eq!(symbol.clone().to_cnf(), symbol);
    }

    #[test]
    fn symbols_in_order() {
        let formula = Formula::implies(
            Formula::and(Formula::symbol("b"), Formula::symbol("a")),
            Formula::or(vec![Formula::symbol("c"), Formula::not(Formula::symbol("b"))]),
        );

        let names = formula
            .symbols()
            .into_iter()
            .map(|symbol| symbol.name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn display() {
        let formula = Formula::or(vec![
            Formula::symbol("x"),
            Formula::not(Formula::symbol("y")),
            Formula::and(Formula::symbol("p"), Formula::symbol("q")),
        ]);
        assert_eq!(formula.to_string(), "(x ∨ ¬y ∨ (p ∧ q))");
    }
}
