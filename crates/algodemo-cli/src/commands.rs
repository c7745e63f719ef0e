//! CLI command definitions using clap

use crate::config::OutputFormat;
use algodemo::sorting::SortAlgorithm;
use clap::{Parser, Subcommand, ValueEnum};

/// algodemo: textbook algorithms behind a console menu
#[derive(Parser, Debug)]
#[command(name = "algodemo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for one-shot commands
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Subcommand to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive numbered menu
    Menu(MenuArgs),

    /// Convert an infix expression to prefix and/or postfix
    Convert(ConvertArgs),

    /// Binary search a sorted list of integers
    Search(SearchArgs),

    /// Sort integers, printing every pass
    Sort(SortArgs),

    /// Build a min or max heap
    Heap(HeapArgs),

    /// Breadth-first traversal of a graph given as an adjacency matrix
    Bfs(BfsArgs),
}

/// Arguments for the menu command
#[derive(Parser, Debug, Default)]
pub struct MenuArgs {
    /// Reject stray characters, unbalanced parentheses and misplaced tokens
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Infix expression, e.g. "(a+b)*c"
    pub expression: String,

    /// Which notation to print
    #[arg(short, long, value_enum, default_value = "both")]
    pub notation: NotationArg,

    /// Reject stray characters, unbalanced parentheses and misplaced tokens
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the search command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Value to look for
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: i64,

    /// Sorted values
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Arguments for the sort command
#[derive(Parser, Debug)]
pub struct SortArgs {
    /// Sorting algorithm
    #[arg(short, long, value_enum, default_value = "selection")]
    pub algorithm: SortArg,

    /// Values to sort
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Arguments for the heap command
#[derive(Parser, Debug)]
pub struct HeapArgs {
    /// Heap type: min or max
    #[arg(short, long, default_value = "min")]
    pub kind: String,

    /// Values to arrange
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Arguments for the bfs command
#[derive(Parser, Debug)]
pub struct BfsArgs {
    /// Adjacency matrix, rows separated by ';', e.g. "0 1;1 0"
    #[arg(short, long)]
    pub matrix: String,

    /// Starting vertex
    #[arg(short, long, default_value = "0")]
    pub start: usize,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Notation selection for the convert command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotationArg {
    /// Prefix only
    Prefix,
    /// Postfix only
    Postfix,
    /// Both notations
    #[default]
    Both,
}

impl NotationArg {
    /// Whether prefix output is requested
    #[must_use]
    pub const fn wants_prefix(self) -> bool {
        matches!(self, Self::Prefix | Self::Both)
    }

    /// Whether postfix output is requested
    #[must_use]
    pub const fn wants_postfix(self) -> bool {
        matches!(self, Self::Postfix | Self::Both)
    }
}

/// Sorting algorithm argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortArg {
    /// Selection sort
    #[default]
    Selection,
    /// Bubble sort
    Bubble,
}

impl From<SortArg> for SortAlgorithm {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Selection => Self::Selection,
            SortArg::Bubble => Self::Bubble,
        }
    }
}
