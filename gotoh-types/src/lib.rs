pub mod alignment;
pub mod scoring;

// Re-export types for convenience of `use gotoh_types::*;`.
pub use alignment::*;
pub use scoring::*;

/// A single sequence symbol.
pub type Base = u8;
/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];
/// Type for alignment scores. Scores are real-valued since the parameter
/// file holds real numbers.
pub type Score = f64;

/// The gap symbol used in rendered alignments.
pub const GAP: Base = b'-';

/// The three Gotoh layers: `M` ends in a (mis)match, `Ix` in a gap in the
/// second sequence, `Iy` in a gap in the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    M,
    Ix,
    Iy,
}

/// Trace label of a cell: the layer its score came from, or `None` when the
/// cell restarted at 0.
pub type FromLayer = Option<Layer>;

pub fn to_string(seq: Seq) -> String {
    String::from_utf8(seq.to_vec()).unwrap()
}
