use std::{collections::HashMap, io::BufRead};

use crate::{
    context::Context,
    misc::log::targets,
    structures::formula::{Formula, Symbol},
    types::err::{self, ParseError},
};

/// A map from the (absolute) integers of a DIMACS input to the symbols used in the knowledge base.
pub type SymbolTable = HashMap<isize, Symbol>;

impl Context {
    /// Reads a DIMACS file into the knowledge base of the context.
    ///
    /// Each clause is translated to a formula, preserving the order of clauses and of literals:
    /// - A clause of a single positive literal is a symbol.
    /// - A clause of a single negative literal is the negation of a symbol.
    /// - Any longer clause is a disjunction.
    ///
    /// Symbols are named by the integer of the literal, without sign, and repeat literals in a clause are skipped.
    /// On success, the map from integers to symbols is returned.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use prop_chain::context::Context;
    /// # use prop_chain::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c A comment
    /// p cnf 3 2
    ///  3 -1 -2 0
    /// -1       0
    /// ");
    ///
    /// let symbols = the_context.read_dimacs(dimacs.as_slice()).expect("parse");
    /// assert_eq!(symbols.len(), 3);
    ///
    /// let formulas = the_context.knowledge_base().iter().map(|f| f.to_string()).collect::<Vec<_>>();
    /// assert_eq!(formulas, vec!["(3 ∨ ¬1 ∨ ¬2)", "¬1"]);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<SymbolTable, err::ErrorKind> {
        self.check_input()?;

        let mut symbols = SymbolTable::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<isize> = Vec::default();
        let mut clauses: Vec<Formula> = Vec::default();

        let mut expected: Option<(usize, usize)> = None;
        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(line_counter + 1))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => {}

                Some('%') => break 'formula_loop,

                Some('p') => {
                    if expected.is_some() || !clauses.is_empty() || !clause_buffer.is_empty() {
                        return Err(err::ErrorKind::from(ParseError::MisplacedProblem(
                            line_counter,
                        )));
                    }
                    expected = Some(problem_specification(&buffer)?);
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        let parsed_int = match item.parse::<isize>() {
                            Ok(int) if int != isize::MIN => int,
                            _ => {
                                return Err(err::ErrorKind::from(ParseError::Line(line_counter)))
                            }
                        };

                        match parsed_int {
                            0 => {
                                if clause_buffer.is_empty() {
                                    return Err(err::ErrorKind::from(ParseError::EmptyClause(
                                        line_counter,
                                    )));
                                }

                                let the_clause = std::mem::take(&mut clause_buffer);
                                let formula = clause_formula(&the_clause, &mut symbols);
                                log::trace!(target: targets::PARSER, "Clause {formula}");
                                clauses.push(formula);
                            }

                            _ => {
                                if !clause_buffer.contains(&parsed_int) {
                                    clause_buffer.push(parsed_int);
                                }
                            }
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(ParseError::UnterminatedClause));
        }

        let clause_count = clauses.len();
        if let Some((symbol_count, expected_clauses)) = expected {
            if symbol_count != symbols.len() || expected_clauses != clause_count {
                log::warn!(target: targets::PARSER, "Expected {symbol_count} symbols and {expected_clauses} clauses");
            }
        }
        log::info!(target: targets::PARSER, "Parse result: {} symbols and {clause_count} clauses", symbols.len());

        self.knowledge_base.extend(clauses);

        Ok(symbols)
    }
}

/// The symbol and clause counts of a problem specification line.
fn problem_specification(line: &str) -> Result<(usize, usize), ParseError> {
    let mut problem_details = line.split_whitespace().skip(2);

    let mut next_count = || -> Result<usize, ParseError> {
        match problem_details.next().map(|string| string.parse::<usize>()) {
            Some(Ok(count)) => Ok(count),
            _ => Err(ParseError::ProblemSpecification),
        }
    };

    let symbol_count = next_count()?;
    let clause_count = next_count()?;
    Ok((symbol_count, clause_count))
}

/// The formula of a literal, with the symbol of the literal recorded in the table.
fn literal_formula(literal: isize, symbols: &mut SymbolTable) -> Formula {
    let symbol = symbols
        .entry(literal.abs())
        .or_insert_with(|| Symbol::new(literal.abs().to_string()))
        .clone();

    match literal.is_positive() {
        true => Formula::Symbol(symbol),
        false => Formula::not(Formula::Symbol(symbol)),
    }
}

/// The formula of a (non-empty) clause of integer literals.
fn clause_formula(clause: &[isize], symbols: &mut SymbolTable) -> Formula {
    match clause {
        [literal] => literal_formula(*literal, symbols),
        _ => Formula::Or(
            clause
                .iter()
                .map(|literal| literal_formula(*literal, symbols))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod dimacs_tests {
    use crate::config::Config;

    use super::*;

    fn read(dimacs: &str) -> (Context, Result<SymbolTable, err::ErrorKind>) {
        let mut ctx = Context::from_config(Config::default());
        let result = ctx.read_dimacs(dimacs.as_bytes());
        (ctx, result)
    }

    #[test]
    fn units_and_clauses() {
        let (ctx, result) = read("p cnf 3 3\n1 0\n-2 0\n3 -1 0\n");
        assert!(result.is_ok());

        assert_eq!(
            ctx.knowledge_base(),
            &[
                Formula::symbol("1"),
                Formula::not(Formula::symbol("2")),
                Formula::or(vec![Formula::symbol("3"), Formula::not(Formula::symbol("1"))]),
            ]
        );
    }

    #[test]
    fn clause_across_lines() {
        let (ctx, result) = read("1 2\n3 0 4\n0\n");
        assert_eq!(result.map(|symbols| symbols.len()), Ok(4));
        assert_eq!(ctx.knowledge_base().len(), 2);
        assert_eq!(ctx.knowledge_base()[1], Formula::symbol("4"));
    }

    #[test]
    fn duplicate_literals() {
        let (ctx, result) = read("2 2 -1 2 0\n");
        assert!(result.is_ok());
        assert_eq!(
            ctx.knowledge_base(),
            &[Formula::or(vec![Formula::symbol("2"), Formula::not(Formula::symbol("1"))])]
        );
    }

    #[test]
    fn percent_ends_formula() {
        let (ctx, result) = read("1 0\n%\n0\n");
        assert!(result.is_ok());
        assert_eq!(ctx.knowledge_base().len(), 1);
    }

    #[test]
    fn errors() {
        assert_eq!(
            read("p cnf x 2\n").1,
            Err(err::ErrorKind::Parse(ParseError::ProblemSpecification))
        );
        assert_eq!(
            read("1 0\np cnf 1 1\n").1,
            Err(err::ErrorKind::Parse(ParseError::MisplacedProblem(2)))
        );
        assert_eq!(
            read("c\n1 q 0\n").1,
            Err(err::ErrorKind::Parse(ParseError::Line(2)))
        );
        assert_eq!(
            read("1 0\n0\n").1,
            Err(err::ErrorKind::Parse(ParseError::EmptyClause(2)))
        );
        assert_eq!(
            read("1 2\n").1,
            Err(err::ErrorKind::Parse(ParseError::UnterminatedClause))
        );
    }

    #[test]
    fn literal_without_magnitude() {
        assert_eq!(
            read("1 0\n-9223372036854775808 0\n").1,
            Err(err::ErrorKind::Parse(ParseError::Line(2)))
        );

        let (ctx, result) = read("-9223372036854775807 0\n");
        assert!(result.is_ok());
        assert_eq!(
            ctx.knowledge_base(),
            &[Formula::not(Formula::symbol("9223372036854775807"))]
        );
    }

    #[test]
    fn failed_read_leaves_knowledge_base() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.read_dimacs("4 0\n".as_bytes()).is_ok());

        assert_eq!(
            ctx.read_dimacs("1 0\n2 0\n3 x 0\n".as_bytes()),
            Err(err::ErrorKind::Parse(ParseError::Line(3)))
        );
        assert_eq!(ctx.knowledge_base(), &[Formula::symbol("4")]);

        assert!(ctx.read_dimacs("1 2\n".as_bytes()).is_err());
        assert_eq!(ctx.knowledge_base(), &[Formula::symbol("4")]);
    }
}
