use clap::{value_parser, Parser};
use std::path::PathBuf;

/// Local alignment of two FASTA sequences with affine gap penalties.
#[derive(Parser)]
#[clap(about, disable_version_flag(true))]
pub struct Cli {
    /// FASTA file with the first sequence.
    #[clap(value_parser = value_parser!(PathBuf))]
    pub seq1: PathBuf,

    /// FASTA file with the second sequence.
    #[clap(value_parser = value_parser!(PathBuf))]
    pub seq2: PathBuf,

    /// `key = value` file setting match, mismatch, gap_open and gap_extend.
    #[clap(value_parser = value_parser!(PathBuf))]
    pub params: PathBuf,

    /// Where to write the alignment report.
    #[clap(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Also write a JSON rendering of the result next to the report.
    #[clap(long)]
    pub json: bool,
}
