//! Result reports and their text / JSON rendering
//!
//! Each one-shot command and each menu entry produces a report. The menu
//! always prints the text form; one-shot commands honour `--format`.

use crate::config::OutputFormat;
use crate::error::CliResult;
use algodemo::heap::HeapKind;
use algodemo::sorting::{SortAlgorithm, SortTrace};
use serde::Serialize;

/// A command result that renders as text lines or as JSON
pub trait Report: Serialize {
    /// Human-readable lines, without trailing newlines
    fn text_lines(&self) -> Vec<String>;
}

/// Renders a report in the requested format
pub fn render<R: Report>(report: &R, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(report.text_lines().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Prefix and/or postfix forms of one infix expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Input as given
    pub infix: String,
    /// Prefix form, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Postfix form, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
}

impl Report for ConversionReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(prefix) = &self.prefix {
            lines.push(format!("Prefix Expression: {prefix}"));
        }
        if let Some(postfix) = &self.postfix {
            lines.push(format!("Postfix Expression: {postfix}"));
        }
        lines
    }
}

/// Outcome of a binary search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Searched values
    pub values: Vec<i64>,
    /// Value looked for
    pub target: i64,
    /// Index of a match
    pub index: Option<usize>,
}

impl Report for SearchReport {
    fn text_lines(&self) -> Vec<String> {
        match self.index {
            Some(i) => vec![format!("Target found at index {i}.")],
            None => vec!["Target not found.".to_string()],
        }
    }
}

/// Sort input, per-pass snapshots and result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortReport {
    /// Algorithm used
    pub algorithm: SortAlgorithm,
    /// Values before sorting
    pub before: Vec<i64>,
    /// Snapshot after each outer pass
    pub steps: SortTrace<i64>,
    /// Sorted values
    pub sorted: Vec<i64>,
}

impl Report for SortReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Array before sorting: {:?}", self.before)];
        lines.extend(self.steps.render_lines());
        lines.push(format!("Sorted array: {:?}", self.sorted));
        lines
    }
}

/// A constructed heap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeapReport {
    /// Heap ordering
    pub kind: HeapKind,
    /// Values in heap layout
    pub heap: Vec<i64>,
}

impl Report for HeapReport {
    fn text_lines(&self) -> Vec<String> {
        vec![format!("Constructed {} heap: {:?}", self.kind, self.heap)]
    }
}

/// A constructed graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport {
    /// Number of vertices
    pub vertices: usize,
    /// Number of undirected edges
    pub edges: usize,
    /// `v: neighbours` lines
    pub adjacency: Vec<String>,
}

impl Report for GraphReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Graph created with {} vertices and {} edges:",
            self.vertices, self.edges
        )];
        lines.extend(self.adjacency.iter().map(|line| format!("  {line}")));
        lines
    }
}

/// Breadth-first visit order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsReport {
    /// Start vertex
    pub start: usize,
    /// Vertices in visit order
    pub order: Vec<usize>,
}

impl Report for BfsReport {
    fn text_lines(&self) -> Vec<String> {
        self.order
            .iter()
            .map(|node| format!("Visited node: {node}"))
            .collect()
    }
}
