//! Writers for the tour sequences and the tree structure
//!
//! Every writer takes any `io::Write`; the pipeline decides where the bytes go.

mod dot;
mod graphml;

pub use dot::write_dot;
pub use graphml::write_graphml;

use crate::euler::EulerTour;
use std::io::{self, Write};

/// File receiving the visited names
pub const TOUR_FILE: &str = "euler_tour.txt";
/// File receiving the visited levels
pub const LEVELS_FILE: &str = "levels.txt";
/// File receiving the GraphML tree
pub const GRAPHML_FILE: &str = "tree.graphml";
/// File receiving the Graphviz rendering
pub const DOT_FILE: &str = "tree.dot";

/// Write the visited names, one per line
pub fn write_tour_names<W: Write>(tour: &EulerTour, out: &mut W) -> io::Result<()> {
    for name in tour.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Write the visited levels, one per line, aligned with the names
///
/// Whole levels print without a fraction (`2`), others in shortest form (`2.5`).
pub fn write_tour_levels<W: Write>(tour: &EulerTour, out: &mut W) -> io::Result<()> {
    for level in tour.levels() {
        writeln!(out, "{}", level)?;
    }
    Ok(())
}
