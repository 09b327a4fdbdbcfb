//! End-to-end run: read codes, build the tree, write the tour and graph files

use crate::error::{Error, Result};
use crate::euler::{EulerTour, TourMode};
use crate::export::{self, DOT_FILE, GRAPHML_FILE, LEVELS_FILE, TOUR_FILE};
use crate::ingest::{ingest_reader, IngestReport};
use crate::tree::{CodeTree, Tree, DEFAULT_ROOT_NAME};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Code listing, one comma-separated path per line
    pub codes: PathBuf,
    /// Directory receiving the output files
    pub results: PathBuf,
    /// Name of the artificial root
    pub root_name: String,
    /// Open or closed tour
    pub mode: TourMode,
    /// Also write a Graphviz rendering
    pub dot: bool,
}

impl RunConfig {
    /// Configuration with default root name, open tour and no DOT output
    pub fn new(codes: impl Into<PathBuf>, results: impl Into<PathBuf>) -> Self {
        Self {
            codes: codes.into(),
            results: results.into(),
            root_name: DEFAULT_ROOT_NAME.to_string(),
            mode: TourMode::Open,
            dot: false,
        }
    }

    /// Reject settings that cannot produce output
    pub fn validate(&self) -> Result<()> {
        if self.root_name.trim().is_empty() {
            return Err(Error::Config {
                reason: "root name must not be empty".into(),
            });
        }
        if self.results.exists() && !self.results.is_dir() {
            return Err(Error::Config {
                reason: format!("{} is not a directory", self.results.display()),
            });
        }
        Ok(())
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub report: IngestReport,
    /// Nodes in the finished tree, root included
    pub node_count: usize,
    /// Records in the tour
    pub tour_len: usize,
    /// Files written, in write order
    pub outputs: Vec<PathBuf>,
}

/// Build the tree from `config.codes` and write every output file
///
/// The input is opened before anything is created on disk, so a missing
/// listing leaves the results directory untouched.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;

    let file = File::open(&config.codes).map_err(|source| Error::Read {
        path: config.codes.clone(),
        source,
    })?;
    info!("reading codes from {}", config.codes.display());

    let mut tree = CodeTree::with_root(config.root_name.trim());
    let report = ingest_reader(&mut tree, BufReader::new(file)).map_err(|source| Error::Read {
        path: config.codes.clone(),
        source,
    })?;
    info!(
        "{} lines read, {} nodes in tree, {} lines skipped",
        report.lines_read,
        tree.node_count(),
        report.skipped.len()
    );

    let tour = EulerTour::traverse(&tree, config.mode);
    info!("{:?} tour has {} records", config.mode, tour.len());

    let outputs = write_outputs(&config.results, &tree, &tour, config.dot)?;

    Ok(RunSummary {
        report,
        node_count: tree.node_count(),
        tour_len: tour.len(),
        outputs,
    })
}

/// Write the tour, levels and GraphML files (plus DOT if asked) into `dir`
pub fn write_outputs(
    dir: &Path,
    tree: &CodeTree,
    tour: &EulerTour,
    dot: bool,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut outputs = vec![
        write_file(&dir.join(TOUR_FILE), |out| export::write_tour_names(tour, out))?,
        write_file(&dir.join(LEVELS_FILE), |out| export::write_tour_levels(tour, out))?,
        write_file(&dir.join(GRAPHML_FILE), |out| export::write_graphml(tree, out))?,
    ];
    if dot {
        outputs.push(write_file(&dir.join(DOT_FILE), |out| {
            export::write_dot(tree, out)
        })?);
    }

    Ok(outputs)
}

fn write_file<F>(path: &Path, write: F) -> Result<PathBuf>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let result = File::create(path).and_then(|file| {
        let mut out = BufWriter::new(file);
        write(&mut out)?;
        out.flush()
    });

    match result {
        Ok(()) => {
            info!("wrote {}", path.display());
            Ok(path.to_path_buf())
        }
        Err(source) => Err(Error::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = RunConfig::new("codes.csv", "out");
        assert_eq!(config.root_name, "epsilon");
        assert_eq!(config.mode, TourMode::Open);
        assert!(!config.dot);
    }

    #[test]
    fn test_results_must_be_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("taken");
        fs::write(&file, "").unwrap();

        let config = RunConfig::new(temp.path().join("codes.csv"), &file);
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_empty_root_name_rejected() {
        let mut config = RunConfig::new("codes.csv", "out");
        config.root_name = "  ".into();
        assert!(run(&config).unwrap_err().is_config());
    }

    #[test]
    fn test_missing_input_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let results = temp.path().join("results");
        let config = RunConfig::new(temp.path().join("missing.csv"), &results);

        let err = run(&config).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(!results.exists());
    }
}
