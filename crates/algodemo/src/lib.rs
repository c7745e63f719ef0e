//! algodemo - textbook algorithm demonstrations
//!
//! A small collection of classic algorithms, each a stateless function or
//! a small value type:
//!
//! - **expression**: infix → postfix / prefix conversion (shunting yard),
//!   plus evaluation and the postfix → infix inverse
//! - **search**: binary search
//! - **sorting**: selection and bubble sort with a per-pass trace
//! - **heap**: min / max heap construction
//! - **graph**: adjacency-matrix graph with breadth-first traversal
//!
//! # Example
//!
//! ```rust
//! use algodemo::prelude::*;
//!
//! assert_eq!(infix_to_postfix("a+b*c"), "abc*+");
//! assert_eq!(infix_to_prefix("a+b*c"), "+a*bc");
//!
//! // Strict mode rejects what the lenient default silently tolerates
//! assert!(Converter::strict().postfix_str("(a+b").is_err());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod expression;
pub mod graph;
pub mod heap;
pub mod search;
pub mod sorting;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{AlgoError, AlgoResult};
    pub use crate::expression::{
        convert_to_postfix, convert_to_prefix, evaluate_postfix, infix_to_postfix,
        infix_to_prefix, Conversion, Converter, Expression, Mode, Operator, Token,
    };
    pub use crate::graph::Graph;
    pub use crate::heap::{build_heap, HeapKind};
    pub use crate::search::binary_search;
    pub use crate::sorting::{bubble_sort, selection_sort, SortAlgorithm, SortTrace};
}
