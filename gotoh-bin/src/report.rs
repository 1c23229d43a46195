//! The result reporter: a two-line text artifact (score line plus the two
//! gapped rows) and an optional JSON rendering.

use crate::input::InputError;
use gotoh_types::{to_string, Alignment, Scoring};
use std::path::Path;

pub fn render(alignment: &Alignment) -> String {
    format!("Best Alignment Score: {}\n{alignment}", alignment.score)
}

pub fn render_json(alignment: &Alignment, scoring: &Scoring) -> String {
    serde_json::json!({
        "score": alignment.score,
        "aligned1": to_string(&alignment.a),
        "aligned2": to_string(&alignment.b),
        "matches": alignment.matches(),
        "scoring": scoring,
    })
    .to_string()
}

pub fn write_report(text: &str, path: &Path) -> Result<(), InputError> {
    std::fs::write(path, text).map_err(|source| InputError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_has_score_line_and_both_rows() {
        let alignment = Alignment {
            a: b"ACGT".to_vec(),
            b: b"AC-T".to_vec(),
            score: 8.,
        };
        assert_eq!(render(&alignment), "Best Alignment Score: 8\nACGT\nAC-T\n");
    }

    #[test]
    fn json_holds_the_gapped_rows() {
        let alignment = Alignment {
            a: b"AC-T".to_vec(),
            b: b"ACGT".to_vec(),
            score: 5.5,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&alignment, &Scoring::default())).unwrap();
        assert_eq!(json["aligned1"], "AC-T");
        assert_eq!(json["score"], 5.5);
        assert_eq!(json["scoring"]["match_score"], 1.0);
    }
}
