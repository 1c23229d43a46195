//! Input collaborators: the FASTA sequence source and the flat `key = value`
//! scoring file. All error handling for the tool lives here; the engine
//! itself is total.

use bio::io::fasta;
use gotoh_types::{Score, Scoring, Sequence};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {path}: {source}")]
    MissingInputFile { path: PathBuf, source: io::Error },
    #[error("parameter file does not set `{0}`")]
    MissingParameter(&'static str),
    #[error("value `{value}` for `{key}` is not a number")]
    MalformedParameterValue { key: String, value: String },
    #[error("cannot write {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },
}

fn unreadable(path: &Path) -> impl FnOnce(io::Error) -> InputError + '_ {
    |source| InputError::MissingInputFile {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a FASTA file: headers are ignored, the sequence lines of all
/// records are concatenated and normalized to uppercase.
pub fn read_fasta(path: &Path) -> Result<Sequence, InputError> {
    let file = File::open(path).map_err(unreadable(path))?;
    let mut seq = Sequence::new();
    for record in fasta::Reader::new(BufReader::new(file)).records() {
        let record = record.map_err(unreadable(path))?;
        seq.extend(record.seq().iter().map(|c| c.to_ascii_uppercase()));
    }
    Ok(seq)
}

/// Reads the scoring parameter file.
pub fn read_scoring(path: &Path) -> Result<Scoring, InputError> {
    let text = std::fs::read_to_string(path).map_err(unreadable(path))?;
    parse_scoring(&text)
}

/// Parses `key = value` lines. Lines without a `=` (blank lines included)
/// and unrecognized keys are ignored.
fn parse_scoring(text: &str) -> Result<Scoring, InputError> {
    let mut params = HashMap::new();
    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        let value: Score = value
            .parse()
            .map_err(|_| InputError::MalformedParameterValue {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        params.insert(key.to_string(), value);
    }

    let get = |key: &'static str| {
        params
            .get(key)
            .copied()
            .ok_or(InputError::MissingParameter(key))
    };
    Ok(Scoring::new(
        get("match")?,
        get("mismatch")?,
        get("gap_open")?,
        get("gap_extend")?,
    ))
}
