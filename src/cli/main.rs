#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::BufReader;

use clap::Parser;

use prop_chain::context::Context;

mod args;
mod misc;

use args::Args;

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    #[cfg(feature = "log")]
    init_logger(args.log_level);

    #[cfg(not(feature = "log"))]
    let _ = args.log_level;

    let path = match &args.formula_file {
        Some(path) => path,
        None => {
            println!("c Path to CNF required");
            std::process::exit(1);
        }
    };

    let mut ctx = Context::from_config(args.config());

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let parse_result = ctx
        .read_dimacs(BufReader::new(&file))
        .map(|symbols| symbols.len());
    misc::examine_parse_result(parse_result, &ctx);

    for goal in &args.goals {
        if let Err(e) = ctx.add_goal(goal.as_str()) {
            println!("c Goal error: {e}");
            std::process::exit(1);
        }
    }

    let verdict = match ctx.solve() {
        Ok(verdict) => verdict,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    if args.derived {
        misc::print_facts(&ctx);
    }

    if args.stats {
        misc::print_stats(&ctx);
    }

    misc::print_verdict(verdict);
    std::process::exit(misc::exit_code(verdict));
}

/// Installs a console logger, writing to stderr.
#[cfg(feature = "log")]
fn init_logger(level: log::LevelFilter) {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} [{t}] {m}{n}")))
        .build();

    let config = match Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
    {
        Ok(config) => config,
        Err(e) => {
            println!("c Failed to configure logs: {e:?}");
            return;
        }
    };

    if let Err(e) = log4rs::init_config(config) {
        println!("c Failed to install logs: {e}");
    }
}
