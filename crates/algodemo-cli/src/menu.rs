//! Interactive numbered menu
//!
//! The loop reads from any [`BufRead`] and writes to any [`Write`], so it
//! runs the same against a terminal or a scripted buffer. End of input
//! behaves like choosing "Exit".

use crate::commands::NotationArg;
use crate::error::{CliError, CliResult};
use crate::handlers;
use crate::input::{parse_count, parse_integer, parse_integers};
use crate::output::Report;
use algodemo::expression::Converter;
use algodemo::graph::Graph;
use algodemo::sorting::SortAlgorithm;
use std::io::{BufRead, Write};
use tracing::debug;

/// One menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// 1. Binary search
    BinarySearch,
    /// 2. Selection sort
    SelectionSort,
    /// 3. Bubble sort
    BubbleSort,
    /// 4. Infix to prefix / postfix
    ConvertExpression,
    /// 5. Heap construction
    BuildHeap,
    /// 6. Graph from adjacency matrix
    CreateGraph,
    /// 7. Breadth-first traversal of the current graph
    Traverse,
    /// 8. Leave the menu
    Exit,
}

impl MenuCommand {
    /// Every entry in menu order
    pub const ALL: [Self; 8] = [
        Self::BinarySearch,
        Self::SelectionSort,
        Self::BubbleSort,
        Self::ConvertExpression,
        Self::BuildHeap,
        Self::CreateGraph,
        Self::Traverse,
        Self::Exit,
    ];

    /// Number shown in the menu
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::BinarySearch => 1,
            Self::SelectionSort => 2,
            Self::BubbleSort => 3,
            Self::ConvertExpression => 4,
            Self::BuildHeap => 5,
            Self::CreateGraph => 6,
            Self::Traverse => 7,
            Self::Exit => 8,
        }
    }

    /// Label shown in the menu
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BinarySearch => "Binary Search",
            Self::SelectionSort => "Selection Sort",
            Self::BubbleSort => "Bubble Sort",
            Self::ConvertExpression => "Infix to Prefix/Postfix Conversion",
            Self::BuildHeap => "Build Heap",
            Self::CreateGraph => "Graph Creation",
            Self::Traverse => "Breadth-First Search",
            Self::Exit => "Exit",
        }
    }

    /// Parses a typed choice such as `"4"`
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: u8 = choice.trim().parse().ok()?;
        Self::ALL.into_iter().find(|cmd| cmd.number() == number)
    }
}

/// State carried between menu entries
#[derive(Debug, Default)]
pub struct Session {
    graph: Option<Graph>,
}

impl Session {
    /// Creates an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently created graph
    #[must_use]
    pub const fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Replaces the current graph
    pub fn set_graph(&mut self, graph: Graph) {
        self.graph = Some(graph);
    }
}

/// Interactive menu over an input and output stream
#[derive(Debug)]
pub struct Menu<R, W> {
    input: R,
    output: W,
    session: Session,
    converter: Converter,
}

const INVALID_OPTION: &str = "Invalid option. Please enter a number between 1 and 8.";
const NO_GRAPH: &str = "Graph not created. Please create a graph first.";

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu with a lenient expression converter
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            session: Session::new(),
            converter: Converter::lenient(),
        }
    }

    /// Sets the expression converter used by entry 4
    #[must_use]
    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = converter;
        self
    }

    /// Session state
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the menu, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until "Exit" or end of input
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Please select an option (1-8): ")? else {
                break;
            };
            match MenuCommand::from_choice(&choice) {
                Some(MenuCommand::Exit) => {
                    writeln!(self.output, "Exiting program.")?;
                    break;
                }
                Some(command) => self.dispatch(command)?,
                None => writeln!(self.output, "{INVALID_OPTION}")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Runs one entry; user mistakes are reported and swallowed
    pub fn dispatch(&mut self, command: MenuCommand) -> CliResult<()> {
        debug!(?command, "menu dispatch");
        let result = match command {
            MenuCommand::BinarySearch => self.binary_search(),
            MenuCommand::SelectionSort => self.sort(SortAlgorithm::Selection),
            MenuCommand::BubbleSort => self.sort(SortAlgorithm::Bubble),
            MenuCommand::ConvertExpression => self.convert(),
            MenuCommand::BuildHeap => self.build_heap(),
            MenuCommand::CreateGraph => self.create_graph(),
            MenuCommand::Traverse => self.traverse(),
            MenuCommand::Exit => Ok(()),
        };
        match result {
            Err(err) if err.is_user_error() => {
                let message = Self::user_message(command, &err);
                writeln!(self.output, "{message}")?;
                Ok(())
            }
            other => other,
        }
    }

    fn user_message(command: MenuCommand, err: &CliError) -> String {
        if let CliError::InvalidInput { .. } = err {
            let hint = match command {
                MenuCommand::BinarySearch => {
                    "Invalid input! Ensure the array is sorted and values are integers."
                }
                MenuCommand::Traverse => "Invalid input! Ensure the starting node is an integer.",
                _ => "Invalid input! Ensure all values are integers.",
            };
            return hint.to_string();
        }
        format!("Error: {err}")
    }

    fn print_menu(&mut self) -> CliResult<()> {
        for command in MenuCommand::ALL {
            writeln!(self.output, "{}. {}", command.number(), command.label())?;
        }
        Ok(())
    }

    /// Writes `message` and reads one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> CliResult<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print_report<T: Report>(&mut self, report: &T) -> CliResult<()> {
        for line in report.text_lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn binary_search(&mut self) -> CliResult<()> {
        let Some(line) = self.prompt("Enter a sorted array (space-separated): ")? else {
            return Ok(());
        };
        let values = parse_integers(&line)?;
        let Some(line) = self.prompt("Enter the target value: ")? else {
            return Ok(());
        };
        let target = parse_integer(&line)?;
        let report = handlers::search(values, target);
        self.print_report(&report)
    }

    fn sort(&mut self, algorithm: SortAlgorithm) -> CliResult<()> {
        let Some(line) = self.prompt("Enter an array (space-separated): ")? else {
            return Ok(());
        };
        let report = handlers::sort(parse_integers(&line)?, algorithm);
        self.print_report(&report)
    }

    fn convert(&mut self) -> CliResult<()> {
        let Some(line) = self.prompt("Enter an infix expression: ")? else {
            return Ok(());
        };
        let report = handlers::convert(&line, NotationArg::Both, self.converter)?;
        self.print_report(&report)
    }

    fn build_heap(&mut self) -> CliResult<()> {
        let Some(line) = self.prompt("Enter an array (space-separated): ")? else {
            return Ok(());
        };
        let values = parse_integers(&line)?;
        let Some(kind) = self.prompt("Select heap type (min/max): ")? else {
            return Ok(());
        };
        let report = handlers::heap(values, &kind)?;
        self.print_report(&report)
    }

    fn create_graph(&mut self) -> CliResult<()> {
        let Some(line) = self.prompt("Enter the number of vertices: ")? else {
            return Ok(());
        };
        let n = parse_count(&line)?;
        writeln!(self.output, "Enter the adjacency matrix:")?;
        let mut matrix = Vec::new();
        for _ in 0..n {
            let Some(row) = self.prompt("")? else {
                return Ok(());
            };
            matrix.push(parse_integers(&row)?);
        }
        let (graph, report) = handlers::graph(&matrix)?;
        self.session.set_graph(graph);
        self.print_report(&report)
    }

    fn traverse(&mut self) -> CliResult<()> {
        if self.session.graph().is_none() {
            writeln!(self.output, "{NO_GRAPH}")?;
            return Ok(());
        }
        let Some(line) = self.prompt("Enter the starting node for BFS: ")? else {
            return Ok(());
        };
        let start = parse_count(&line)?;
        let report = match self.session.graph() {
            Some(graph) => handlers::bfs(graph, start)?,
            None => return Ok(()),
        };
        self.print_report(&report)
    }
}
