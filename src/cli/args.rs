//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// In-order traversal of binary trees given in level-order notation
#[derive(Parser, Debug)]
#[command(name = "inorder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print node values in in-order sequence
    Traverse {
        #[command(flatten)]
        input: TreeInput,

        /// Fail instead of growing past this many nodes
        #[arg(short, long)]
        capacity: Option<usize>,

        /// Cross-check against the recursive traversal
        #[arg(long)]
        verify: bool,

        /// Output format
        #[arg(short = 'o', long, value_enum)]
        format: Option<OutputFormat>,

        /// Also print the tree
        #[arg(long)]
        show_tree: bool,
    },

    /// Print the tree structure
    Render {
        #[command(flatten)]
        input: TreeInput,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where the level-order tree comes from.
#[derive(Args, Debug)]
pub struct TreeInput {
    /// Tree in level-order notation, e.g. "[1,null,2,3]"; "-" reads stdin
    #[arg(allow_hyphen_values = true)]
    pub tree: Option<String>,

    /// Read the tree from a file
    #[arg(short, long, conflicts_with = "tree", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}
