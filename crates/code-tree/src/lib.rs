//! Code Tree Library
//!
//! Folds lines of hierarchical classification codes (ICD-9 chapters, blocks,
//! categories, ...) into one tree that shares common prefixes, then
//! linearizes it as an Euler tour for linear-layout visualizations.
//!
//! # Core Concepts
//!
//! - **CodeTree**: arena tree under an artificial `epsilon` root
//! - **Segment**: one `name[:level]` field of an input line
//! - **EulerTour**: names and levels visited by the depth-first walk
//!
//! # Example
//!
//! ```
//! use code_tree::prelude::*;
//!
//! let mut tree = CodeTree::new();
//! ingest_str(&mut tree, "A,B\nA,C\n");
//!
//! let tour = EulerTour::traverse(&tree, TourMode::Open);
//! assert_eq!(tour.names(), &["epsilon", "A", "B", "A", "C", "A"]);
//! assert_eq!(tour.levels(), &[0.0, 1.0, 2.0, 1.0, 2.0, 1.0]);
//! ```

pub mod error;
pub mod euler;
pub mod export;
pub mod ingest;
pub mod parser;
pub mod pipeline;
pub mod tree;

pub use error::{Error, ParseError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::euler::{EulerTour, TourEvent, TourMode};
    pub use crate::ingest::{ingest_reader, ingest_str, IngestReport};
    pub use crate::parser::{parse_line, Segment};
    pub use crate::pipeline::{run, RunConfig, RunSummary};
    pub use crate::tree::prelude::*;
}
