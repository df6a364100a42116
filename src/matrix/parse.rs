//! Text format for cost matrices.
//!
//! ```text
//! 4
//! 0 10 15 20
//! 10 0 35 25
//! 15 35 0 30
//! 20 25 30 0
//! ```
//!
//! The first line holds `N`; the next `N` lines each hold `N`
//! whitespace-separated integers. Anything after the last row is ignored.

use super::CostMatrix;
use crate::error::{TspError, TspResult};
use std::path::Path;
use std::str::FromStr;

impl FromStr for CostMatrix {
    type Err = TspError;

    fn from_str(s: &str) -> TspResult<Self> {
        let mut lines = s.lines();

        let header = lines.next().ok_or_else(|| TspError::Parse {
            line: 1,
            message: "missing location count".into(),
        })?;
        let n: usize = header.trim().parse().map_err(|e| TspError::Parse {
            line: 1,
            message: format!("invalid location count {:?}: {e}", header.trim()),
        })?;

        // The header is untrusted; rows are only allocated as they are read.
        let mut rows = Vec::new();
        for i in 0..n {
            let line_no = i + 2;
            let line = lines.next().ok_or_else(|| TspError::Parse {
                line: line_no,
                message: format!("expected {n} rows, found {i}"),
            })?;
            let row = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<i64>().map_err(|e| TspError::Parse {
                        line: line_no,
                        message: format!("invalid cost {tok:?}: {e}"),
                    })
                })
                .collect::<TspResult<Vec<i64>>>()?;
            rows.push(row);
        }

        CostMatrix::new(rows)
    }
}

impl CostMatrix {
    /// Reads a matrix from a file in the text format above.
    pub fn read<P: AsRef<Path>>(path: P) -> TspResult<Self> {
        std::fs::read_to_string(path)?.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let m: CostMatrix = "3\n0 1 2\n3 0 4\n5 6 0\n".parse().unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.cost(1, 2), 4);
        assert_eq!(m.cost(2, 0), 5);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace_and_trailing_lines() {
        let m: CostMatrix = " 2 \r\n  0   9\r\n7 0\r\n\nignored trailer\n".parse().unwrap();
        assert_eq!(m.cost(0, 1), 9);
        assert_eq!(m.cost(1, 0), 7);
    }

    #[test]
    fn test_parse_zero_locations() {
        let m: CostMatrix = "0\n".parse().unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_parse_bad_header() {
        let err = "three\n".parse::<CostMatrix>().unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 1, .. }));
        let err = "".parse::<CostMatrix>().unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_missing_row() {
        let err = "3\n0 1 2\n1 0 2\n".parse::<CostMatrix>().unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_parse_huge_header_is_an_error() {
        let err = "99999999999999999\n0\n".parse::<CostMatrix>().unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_bad_token() {
        let err = "2\n0 x\n1 0\n".parse::<CostMatrix>().unwrap_err();
        assert!(matches!(err, TspError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_short_row() {
        let err = "2\n0 1\n1\n".parse::<CostMatrix>().unwrap_err();
        assert!(matches!(err, TspError::NotSquare { row: 1, .. }));
    }

    #[test]
    fn test_parse_negative() {
        let err = "2\n0 -1\n1 0\n".parse::<CostMatrix>().unwrap_err();
        assert!(matches!(err, TspError::NegativeCost { .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let err = CostMatrix::read("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, TspError::Io(_)));
    }
}
