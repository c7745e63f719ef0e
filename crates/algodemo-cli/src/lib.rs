//! algodemo CLI library
//!
//! Interactive menu and one-shot subcommands over the `algodemo`
//! algorithms.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod menu;
pub mod output;

pub use commands::{
    BfsArgs, Cli, Commands, ConvertArgs, FormatArg, HeapArgs, MenuArgs, NotationArg, SearchArgs,
    SortArg, SortArgs,
};
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use menu::{Menu, MenuCommand, Session};
pub use output::{render, Report};
