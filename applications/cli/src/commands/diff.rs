//! `volume-diff`: compare same-named files in two directories

use super::{default_decoder, load_and_measure};
use crate::error::{CliError, Result};
use loudmatch_loudness::{DiffReport, MeasureMode};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file in the first directory and its same-named counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub name: String,
    pub first: PathBuf,
    pub second: PathBuf,
}

/// Pair every regular file in `dir1` with the same name in `dir2`
///
/// Symlinks are followed, so a link to a regular file counts as one. Pairs
/// are sorted by file name. A missing counterpart is an error, as is a
/// `dir1` without regular files.
pub fn collect_pairs(dir1: &Path, dir2: &Path) -> Result<Vec<FilePair>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir1)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        names.push(entry.file_name());
    }
    names.sort();

    if names.is_empty() {
        return Err(CliError::NoFiles(dir1.to_path_buf()));
    }

    names
        .into_iter()
        .map(|file_name| {
            let first = dir1.join(&file_name);
            let second = dir2.join(&file_name);
            let name = file_name.to_string_lossy().into_owned();
            if !second.is_file() {
                return Err(CliError::MissingPair {
                    name,
                    dir: dir2.to_path_buf(),
                });
            }
            Ok(FilePair {
                name,
                first,
                second,
            })
        })
        .collect()
}

/// Measure every pair and write the report lines to `out`
///
/// Each pair is printed as soon as it is measured; the average line follows
/// the last pair.
pub fn run(dir1: &Path, dir2: &Path, mode: MeasureMode, out: &mut dyn Write) -> Result<DiffReport> {
    let pairs = collect_pairs(dir1, dir2)?;
    let mut decoder = default_decoder();
    let mut report = DiffReport::new();

    for pair in &pairs {
        let (_, first) = load_and_measure(&mut decoder, &pair.first, mode)?;
        let (_, second) = load_and_measure(&mut decoder, &pair.second, mode)?;

        let entry = report.push(pair.name.clone(), first, second);
        writeln!(out, "{}", entry.line())?;
    }

    if let Some(mean) = report.mean_ratio() {
        writeln!(out, "Average gain: {:?}", mean)?;
    }
    debug!("Compared {} pairs", report.len());

    Ok(report)
}
