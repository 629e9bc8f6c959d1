use std::io::IsTerminal;

use crossterm::style::Stylize;

use prop_chain::{
    context::Context, reports::Verdict, structures::formula::Formula, types::err::ErrorKind,
};

/// Prints the result of reading a DIMACS file, exiting on an error.
pub fn examine_parse_result(result: Result<usize, ErrorKind>, ctx: &Context) {
    match result {
        Ok(symbol_count) => println!(
            "c Parsed {symbol_count} symbols and {} formulas",
            ctx.knowledge_base().len()
        ),
        Err(e) => {
            println!("c Parse error: {e}");
            std::process::exit(1);
        }
    }
}

/// Prints the derived facts or solved history of a context, as a single `v` line.
pub fn print_facts(ctx: &Context) {
    let facts: Vec<&Formula> = match (ctx.derived(), ctx.solved()) {
        (Some(derived), _) => {
            let mut facts = derived.iter().collect::<Vec<_>>();
            facts.sort();
            facts
        }
        (None, Some(history)) => history.iter().collect(),
        (None, None) => Vec::default(),
    };

    let parts = facts.iter().map(|f| f.to_string()).collect::<Vec<_>>();
    println!("v {}", parts.join(" "));
}

pub fn print_stats(ctx: &Context) {
    println!("c {}", ctx.config.engine);
    println!("c {}", ctx.config.preprocessing);
    println!("c Symbols:    {}", ctx.symbols().len());
    println!("c Rewrites:   {}", ctx.counters.rewrites);
    println!("c Passes:     {}", ctx.counters.passes);
    println!("c Iterations: {}", ctx.counters.iterations);
    println!("c Facts:      {}", ctx.counters.facts);
    println!("c Time:       {:.2?}", ctx.counters.time);
}

/// Prints the verdict, coloured when written to a terminal.
pub fn print_verdict(verdict: Verdict) {
    let token = verdict.to_string();

    match std::io::stdout().is_terminal() {
        true => match verdict {
            Verdict::Yes => println!("s {}", token.green()),
            Verdict::No => println!("s {}", token.red()),
        },
        false => println!("s {token}"),
    }
}

pub fn exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Yes => 10,
        Verdict::No => 20,
    }
}
