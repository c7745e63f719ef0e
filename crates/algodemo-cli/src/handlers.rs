//! Command handlers shared by the one-shot subcommands and the menu

use crate::commands::NotationArg;
use crate::error::CliResult;
use crate::output::{BfsReport, ConversionReport, GraphReport, HeapReport, SearchReport, SortReport};
use algodemo::expression::Converter;
use algodemo::graph::Graph;
use algodemo::heap::{build_heap, HeapKind};
use algodemo::search::binary_search;
use algodemo::sorting::SortAlgorithm;
use tracing::{info, warn};

/// Converts `infix` to the requested notations
pub fn convert(
    infix: &str,
    notation: NotationArg,
    converter: Converter,
) -> CliResult<ConversionReport> {
    info!(infix, mode = ?converter.mode(), "converting expression");
    let prefix = if notation.wants_prefix() {
        Some(converter.prefix_str(infix)?)
    } else {
        None
    };
    let postfix = if notation.wants_postfix() {
        Some(converter.postfix_str(infix)?)
    } else {
        None
    };
    Ok(ConversionReport {
        infix: infix.to_string(),
        prefix,
        postfix,
    })
}

/// Binary searches `values` for `target`
pub fn search(values: Vec<i64>, target: i64) -> SearchReport {
    if !values.windows(2).all(|w| w[0] <= w[1]) {
        warn!("search input is not sorted; result may be wrong");
    }
    let index = binary_search(&values, &target);
    info!(wanted = target, ?index, "binary search done");
    SearchReport {
        values,
        target,
        index,
    }
}

/// Sorts `values` with `algorithm`, keeping the per-pass trace
pub fn sort(values: Vec<i64>, algorithm: SortAlgorithm) -> SortReport {
    let mut sorted = values.clone();
    let trace = algorithm.sort(&mut sorted);
    info!(algorithm = algorithm.name(), passes = trace.len(), "sorted");
    SortReport {
        algorithm,
        before: values,
        steps: trace,
        sorted,
    }
}

/// Builds a heap; `kind` is `min` or `max`, case-insensitive
pub fn heap(values: Vec<i64>, kind: &str) -> CliResult<HeapReport> {
    let kind: HeapKind = kind.parse()?;
    Ok(HeapReport {
        kind,
        heap: build_heap(values, kind),
    })
}

/// Builds a graph from an adjacency matrix
pub fn graph(matrix: &[Vec<i64>]) -> CliResult<(Graph, GraphReport)> {
    let graph = Graph::from_adjacency_matrix(matrix)?;
    let report = GraphReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        adjacency: graph.adjacency_lines(),
    };
    Ok((graph, report))
}

/// Breadth-first traversal from `start`
pub fn bfs(graph: &Graph, start: usize) -> CliResult<BfsReport> {
    let order = graph.bfs(start)?;
    info!(start, visited = order.len(), "bfs done");
    Ok(BfsReport { start, order })
}
