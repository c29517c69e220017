//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::OutputFormat;

/// Flat parent-link records to nested hierarchies, plus a fixed-arity curry utility
#[derive(Parser, Debug)]
#[command(name = "lineage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .lineage.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and print the hierarchy
    Tree {
        /// Record file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Parent id to start from (default: records without a parent)
        #[arg(short, long)]
        root: Option<String>,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print leaf ids
    Leaves {
        /// Record file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Parent id to start from
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Print every root-to-leaf path
    Branches {
        /// Record file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Parent id to start from
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Report duplicate ids, dangling parents and self-parents
    Check {
        /// Record file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Feed arguments one at a time into a curried fold
    Curry {
        /// Fold to apply once enough arguments arrived
        #[arg(value_enum)]
        op: FoldOp,
        /// Number of arguments the fold takes
        #[arg(short, long)]
        arity: usize,
        /// Arguments, supplied one per step
        #[arg(allow_negative_numbers = true)]
        args: Vec<i64>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a commented config template
    Template,
    /// Print config file locations
    Path,
}

/// Folds available to the curry command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FoldOp {
    Sum,
    Product,
}

impl FoldOp {
    /// Fold `args`, `None` on `i64` overflow. The empty fold is the identity.
    pub fn fold(self, args: &[i64]) -> Option<i64> {
        match self {
            FoldOp::Sum => args.iter().try_fold(0i64, |acc, &x| acc.checked_add(x)),
            FoldOp::Product => args.iter().try_fold(1i64, |acc, &x| acc.checked_mul(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_curry_args_when_parsing_then_collects_numbers() {
        let cli = Cli::parse_from(["lineage", "curry", "product", "-a", "3", "2", "-4", "5"]);
        match cli.command {
            Some(Commands::Curry { op, arity, args }) => {
                assert_eq!(op, FoldOp::Product);
                assert_eq!(arity, 3);
                assert_eq!(args, vec![2, -4, 5]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::parse_from(["lineage", "-ddd", "config", "show"]);
        assert_eq!(cli.debug, 3);
    }

    #[test]
    fn given_fold_ops_when_folding_then_sum_and_product() {
        assert_eq!(FoldOp::Sum.fold(&[1, 2, 3, 4]), Some(10));
        assert_eq!(FoldOp::Product.fold(&[1, 2, 3, 4]), Some(24));
        assert_eq!(FoldOp::Sum.fold(&[]), Some(0));
        assert_eq!(FoldOp::Product.fold(&[]), Some(1));
    }

    #[test]
    fn given_result_beyond_i64_when_folding_then_none() {
        assert_eq!(FoldOp::Product.fold(&[i64::MAX, 2]), None);
        assert_eq!(FoldOp::Sum.fold(&[i64::MAX, 1]), None);
        assert_eq!(FoldOp::Sum.fold(&[i64::MIN, -1]), None);
    }
}
