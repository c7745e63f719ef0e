//! algodemo: textbook algorithms behind a console menu
//!
//! ## Usage
//!
//! ```bash
//! algodemo                                  # Interactive menu
//! algodemo convert "(a+b)*c"                # Prefix and postfix
//! algodemo convert "a+b*c" -n postfix       # Postfix only
//! algodemo sort -a bubble 5 3 8 1           # Sort with per-pass trace
//! algodemo bfs --matrix "0 1;1 0" -s 0      # Breadth-first traversal
//! algodemo heap -k max 3 9 2 --format json  # JSON output
//! ```

use algodemo::expression::Converter;
use algodemo_cli::{
    handlers, input, logging, render, Cli, CliConfig, CliResult, Commands, Menu, MenuArgs,
    Verbosity,
};
use clap::Parser;
use console::style;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Menu(MenuArgs::default()));

    let rendered = match command {
        Commands::Menu(args) => return run_menu(&config.with_strict(args.strict)),
        Commands::Convert(args) => {
            let config = config.with_strict(args.strict);
            let converter = Converter::with_mode(config.expression_mode());
            let report = handlers::convert(&args.expression, args.notation, converter)?;
            render(&report, config.format)?
        }
        Commands::Search(args) => {
            render(&handlers::search(args.values, args.target), config.format)?
        }
        Commands::Sort(args) => render(
            &handlers::sort(args.values, args.algorithm.into()),
            config.format,
        )?,
        Commands::Heap(args) => render(&handlers::heap(args.values, &args.kind)?, config.format)?,
        Commands::Bfs(args) => {
            let matrix = input::parse_matrix(&args.matrix)?;
            let (graph, _) = handlers::graph(&matrix)?;
            render(&handlers::bfs(&graph, args.start)?, config.format)?
        }
    };

    println!("{rendered}");
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_format(cli.format.into())
}

fn run_menu(config: &CliConfig) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock())
        .with_converter(Converter::with_mode(config.expression_mode()))
        .run()
}
