//! Feeding code listings into a tree line by line

use crate::error::ParseError;
use crate::parser::parse_line;
use crate::tree::CodeTree;
use log::{debug, warn};
use std::io::{self, BufRead};

/// A line that was left out because it failed to parse
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub error: ParseError,
}

/// Tally of one ingest pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Lines seen, blank ones included
    pub lines_read: usize,
    /// Lines without any segment
    pub blank_lines: usize,
    /// Lines that added at least one node
    pub paths_added: usize,
    /// Lines whose full path was already present
    pub duplicates: usize,
    /// Nodes created across all lines
    pub nodes_created: usize,
    /// Lines rejected by the parser
    pub skipped: Vec<SkippedLine>,
}

impl IngestReport {
    /// Parse one line and insert it into the tree
    ///
    /// The line is parsed completely before the tree is touched, so a parse
    /// failure leaves the tree exactly as it was.
    pub fn feed(&mut self, tree: &mut CodeTree, number: usize, line: &str) {
        self.lines_read += 1;

        let segments = match parse_line(line) {
            Ok(segments) => segments,
            Err(error) => return self.skip(number, error),
        };

        if segments.is_empty() {
            self.blank_lines += 1;
            return;
        }

        let insertion = tree.insert(&segments);
        debug!(
            "line {}: {} segments, {} new nodes",
            number,
            segments.len(),
            insertion.created
        );

        if insertion.is_duplicate() {
            self.duplicates += 1;
        } else {
            self.paths_added += 1;
            self.nodes_created += insertion.created;
        }
    }

    /// Decode one raw line and feed it; undecodable lines are skipped
    pub fn feed_bytes(&mut self, tree: &mut CodeTree, number: usize, bytes: &[u8]) {
        match std::str::from_utf8(bytes) {
            Ok(line) => self.feed(tree, number, line),
            Err(err) => {
                self.lines_read += 1;
                self.skip(
                    number,
                    ParseError::InvalidEncoding {
                        valid_up_to: err.valid_up_to(),
                    },
                );
            }
        }
    }

    fn skip(&mut self, number: usize, error: ParseError) {
        warn!("skipping line {}: {}", number, error);
        self.skipped.push(SkippedLine {
            line: number,
            error,
        });
    }
}

/// Read every line of `reader` into the tree
///
/// Read failures abort the pass; parse and encoding failures only skip
/// their line.
pub fn ingest_reader<R: BufRead>(tree: &mut CodeTree, mut reader: R) -> io::Result<IngestReport> {
    let mut report = IngestReport::default();
    let mut buf = Vec::new();
    let mut number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        report.feed_bytes(tree, number, &buf);
    }

    Ok(report)
}

/// Ingest an in-memory listing
pub fn ingest_str(tree: &mut CodeTree, text: &str) -> IngestReport {
    let mut report = IngestReport::default();
    for (index, line) in text.lines().enumerate() {
        report.feed(tree, index + 1, line);
    }
    report
}
