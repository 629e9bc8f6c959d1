use std::path::PathBuf;

use clap::Parser;

use prop_chain::config::{Config, Engine};

/// Determines whether goals are entailed by a knowledge base read from a DIMACS file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to parse
    #[arg(required_unless_present = "markdown_help")]
    pub formula_file: Option<PathBuf>,

    /// A goal symbol (symbols are named by their integer in the DIMACS file)
    #[arg(short, long = "goal", value_delimiter = ',')]
    pub goals: Vec<String>,

    /// Which engine to use
    #[arg(short, long, default_value_t = Engine::Sld, value_enum)]
    pub engine: Engine,

    /// Rewrite each implication to a disjunction before a solve
    #[arg(long, default_value_t = false)]
    pub cnf: bool,

    /// Display the derived facts, or the solved history, on completion
    #[arg(short, long, default_value_t = false)]
    pub derived: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// The level of logs to display (when built with logs)
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    pub log_level: log::LevelFilter,

    /// Print the help of the cli as markdown
    #[arg(long, hide = true, default_value_t = false)]
    pub markdown_help: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        let mut the_config = Config::default();
        the_config.engine.value = self.engine;
        the_config.preprocessing.value = self.cnf;
        the_config
    }
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn goals_and_engine() {
        let args = Args::parse_from(["prop_chain_cli", "tc1.cnf", "-g", "4,3", "--goal", "7", "-e", "forward", "--cnf"]);

        assert_eq!(args.goals, vec!["4", "3", "7"]);
        assert_eq!(args.formula_file, Some(PathBuf::from("tc1.cnf")));

        let config = args.config();
        assert_eq!(config.engine.value, Engine::Forward);
        assert!(config.preprocessing.value);
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["prop_chain_cli", "tc1.cnf"]);
        assert!(args.goals.is_empty());
        assert_eq!(args.engine, Engine::Sld);
        assert_eq!(args.log_level, log::LevelFilter::Warn);
        assert!(!args.config().preprocessing.value);
    }

    #[test]
    fn log_level() {
        let args = Args::parse_from(["prop_chain_cli", "tc1.cnf", "--log-level", "trace"]);
        assert_eq!(args.log_level, log::LevelFilter::Trace);

        assert!(Args::try_parse_from(["prop_chain_cli", "tc1.cnf", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn file_required() {
        assert!(Args::try_parse_from(["prop_chain_cli"]).is_err());
        assert!(Args::try_parse_from(["prop_chain_cli", "--markdown-help"]).is_ok());
    }
}
