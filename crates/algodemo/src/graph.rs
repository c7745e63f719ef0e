//! Undirected graph built from an adjacency matrix, with breadth-first traversal

use crate::core::{AlgoError, AlgoResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Undirected graph over vertices `0..vertex_count`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from a square 0/1 adjacency matrix
    ///
    /// Only the upper triangle is read: an edge `{i, j}` exists when
    /// `matrix[i][j] == 1` for some `i < j`. Every row is a vertex, isolated
    /// ones included. Entries other than `1` are treated as "no edge".
    pub fn from_adjacency_matrix(matrix: &[Vec<i64>]) -> AlgoResult<Self> {
        let n = matrix.len();
        if let Some((row, values)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(AlgoError::invalid_matrix(format!(
                "row {row} has {} entries, expected {n}",
                values.len()
            )));
        }

        let mut adjacency = vec![Vec::new(); n];
        for (i, row) in matrix.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate().skip(i + 1) {
                if cell == 1 {
                    adjacency[i].push(j);
                    adjacency[j].push(i);
                }
            }
        }

        let graph = Self { adjacency };
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }

    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Neighbours of `node` in edge-insertion order
    pub fn neighbors(&self, node: usize) -> AlgoResult<&[usize]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or(AlgoError::NodeOutOfRange {
                node,
                vertices: self.vertex_count(),
            })
    }

    /// Breadth-first visit order starting at `start`
    ///
    /// ```rust
    /// use algodemo::graph::Graph;
    ///
    /// let g = Graph::from_adjacency_matrix(&[
    ///     vec![0, 1, 1],
    ///     vec![1, 0, 0],
    ///     vec![1, 0, 0],
    /// ]).unwrap();
    /// assert_eq!(g.bfs(1).unwrap(), vec![1, 0, 2]);
    /// ```
    pub fn bfs(&self, start: usize) -> AlgoResult<Vec<usize>> {
        self.neighbors(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &next in &self.adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        Ok(order)
    }

    /// One `v: n1 n2 ...` line per vertex
    #[must_use]
    pub fn adjacency_lines(&self) -> Vec<String> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(v, neighbours)| {
                let list: Vec<String> = neighbours.iter().map(ToString::to_string).collect();
                format!("{v}: {}", list.join(" ")).trim_end().to_string()
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path_graph() -> Graph {
        // 0 - 1 - 2 - 3
        Graph::from_adjacency_matrix(&[
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_matrix_counts() {
        let g = path_graph();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(1).unwrap(), &[0, 2]);
    }

    #[test]
    fn test_only_upper_triangle_is_read() {
        let g = Graph::from_adjacency_matrix(&[vec![0, 0], vec![1, 0]]).unwrap();
        assert_eq!(g.edge_count(), 0);
        let g = Graph::from_adjacency_matrix(&[vec![0, 1], vec![0, 0]]).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_non_one_entries_are_not_edges() {
        let g = Graph::from_adjacency_matrix(&[vec![0, 2], vec![2, 0]]).unwrap();
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_self_loops_ignored() {
        let g = Graph::from_adjacency_matrix(&[vec![1]]).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.bfs(0).unwrap(), vec![0]);
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let result = Graph::from_adjacency_matrix(&[vec![0, 1], vec![1]]);
        assert!(matches!(result, Err(AlgoError::InvalidMatrix(_))));
    }

    #[test]
    fn test_empty_matrix() {
        let g = Graph::from_adjacency_matrix(&[]).unwrap();
        assert_eq!(g.vertex_count(), 0);
        assert!(g.bfs(0).is_err());
    }

    #[test]
    fn test_bfs_path() {
        assert_eq!(path_graph().bfs(0).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(path_graph().bfs(2).unwrap(), vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_bfs_levels_before_depth() {
        // 0 connects to 1 and 2; 1 connects to 3
        let g = Graph::from_adjacency_matrix(&[
            vec![0, 1, 1, 0],
            vec![1, 0, 0, 1],
            vec![1, 0, 0, 0],
            vec![0, 1, 0, 0],
        ])
        .unwrap();
        assert_eq!(g.bfs(0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bfs_skips_other_components() {
        let g = Graph::from_adjacency_matrix(&[
            vec![0, 1, 0],
            vec![1, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert_eq!(g.bfs(0).unwrap(), vec![0, 1]);
        assert_eq!(g.bfs(2).unwrap(), vec![2]);
    }

    #[test]
    fn test_bfs_out_of_range() {
        assert_eq!(
            path_graph().bfs(9),
            Err(AlgoError::NodeOutOfRange {
                node: 9,
                vertices: 4
            })
        );
    }

    #[test]
    fn test_adjacency_lines() {
        let g = Graph::from_adjacency_matrix(&[
            vec![0, 1, 0],
            vec![1, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert_eq!(g.adjacency_lines(), vec!["0: 1", "1: 0", "2:"]);
    }
}
