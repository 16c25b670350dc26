//! # BYU Header
//!
//! First line of a BYU file: part, vertex, face and edge counts.
//!
//! ## Example
//!
//! ```rust
//! use byu_import::header::ByuHeader;
//!
//! let header = ByuHeader::parse("1 8 12 36", 1).unwrap();
//! assert_eq!(header.vertex_count, 8);
//! assert_eq!(header.face_count, 12);
//! ```

use crate::error::{ByuError, ByuResult};
use config::constants::{ImportConfig, BYU_HEADER_FIELDS, SUPPORTED_PART_COUNT};

/// Parsed BYU header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByuHeader {
    /// Number of parts; only 1 is importable.
    pub part_count: i64,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of triangular faces.
    pub face_count: usize,
    /// Number of edges (connectivity entries). Not used by import.
    pub edge_count: i64,
}

impl ByuHeader {
    /// Parses the header line.
    ///
    /// Needs at least four integer tokens; extra tokens are ignored.
    /// Vertex and face counts must be non-negative.
    pub fn parse(text: &str, line: usize) -> ByuResult<Self> {
        let mut values = [0i64; BYU_HEADER_FIELDS];
        let mut tokens = text.split_whitespace();
        for (slot, value) in values.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| {
                ByuError::invalid_format(
                    line,
                    format!("header needs {BYU_HEADER_FIELDS} integers, found {slot}"),
                )
            })?;
            *value = parse_int(token, line)?;
        }

        let [part_count, vertex_count, face_count, edge_count] = values;
        Ok(Self {
            part_count,
            vertex_count: parse_count(vertex_count, "vertex", line)?,
            face_count: parse_count(face_count, "face", line)?,
            edge_count,
        })
    }

    /// Checks the header against what the importer accepts.
    ///
    /// Rejects multi-part files and counts over the configured limits.
    /// Limits are capped at the `u32` index range.
    pub fn check(&self, config: &ImportConfig, line: usize) -> ByuResult<()> {
        if self.part_count != SUPPORTED_PART_COUNT {
            return Err(ByuError::invalid_format(
                line,
                format!(
                    "only single-part BYU files supported, found {} parts",
                    self.part_count
                ),
            ));
        }
        let vertex_limit = config.vertex_limit();
        if self.vertex_count > vertex_limit {
            return Err(ByuError::invalid_format(
                line,
                format!(
                    "vertex count {} exceeds limit {vertex_limit}",
                    self.vertex_count
                ),
            ));
        }
        let face_limit = config.face_limit();
        if self.face_count > face_limit {
            return Err(ByuError::invalid_format(
                line,
                format!("face count {} exceeds limit {face_limit}", self.face_count),
            ));
        }
        Ok(())
    }
}

/// Parses one integer token.
pub(crate) fn parse_int(token: &str, line: usize) -> ByuResult<i64> {
    token
        .parse()
        .map_err(|_| ByuError::invalid_format(line, format!("expected integer, found '{token}'")))
}

fn parse_count(value: i64, what: &str, line: usize) -> ByuResult<usize> {
    usize::try_from(value).map_err(|_| {
        ByuError::invalid_format(line, format!("{what} count must be non-negative, found {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ByuError) -> String {
        match err {
            ByuError::InvalidFormat { message, .. } => message,
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_header() {
        let header = ByuHeader::parse("  1   4 2\t0 ", 1).unwrap();
        assert_eq!(
            header,
            ByuHeader {
                part_count: 1,
                vertex_count: 4,
                face_count: 2,
                edge_count: 0,
            }
        );
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let header = ByuHeader::parse("1 3 1 3 99", 1).unwrap();
        assert_eq!(header.edge_count, 3);
    }

    #[test]
    fn test_too_few_tokens() {
        let err = ByuHeader::parse("1 4 2", 1).unwrap_err();
        assert!(message(err).contains("found 3"));
    }

    #[test]
    fn test_non_integer_token() {
        let err = ByuHeader::parse("1 4.5 2 0", 1).unwrap_err();
        assert!(message(err).contains("'4.5'"));
    }

    #[test]
    fn test_negative_count() {
        let err = ByuHeader::parse("1 -4 2 0", 1).unwrap_err();
        assert!(message(err).contains("vertex count must be non-negative"));
    }

    #[test]
    fn test_check_rejects_multi_part() {
        let header = ByuHeader::parse("2 4 2 0", 1).unwrap();
        let err = header.check(&ImportConfig::default(), 1).unwrap_err();
        assert!(message(err).contains("single-part"));
    }

    #[test]
    fn test_check_rejects_over_limit() {
        let config = ImportConfig::new(3, 10).unwrap();
        let header = ByuHeader::parse("1 4 2 0", 1).unwrap();
        let err = header.check(&config, 1).unwrap_err();
        assert!(message(err).contains("exceeds limit 3"));
    }
}
