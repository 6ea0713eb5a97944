//! CSV artifact reading with strict header validation.

use crate::artifact::Artifact;
use crate::error::ArtifactError;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

/// A parsed data row together with its line number in the file.
pub(crate) struct Row {
    pub line: u64,
    pub record: StringRecord,
}

/// Read every data row of an artifact after checking its header.
pub(crate) fn read_rows(path: &Path, artifact: Artifact) -> Result<Vec<Row>, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing {
            path: path.to_path_buf(),
        });
    }

    let csv_err = |source| ArtifactError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_err)?;

    let found: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();
    if found != artifact.columns() {
        return Err(ArtifactError::Header {
            path: path.to_path_buf(),
            expected: artifact.columns().iter().map(|c| c.to_string()).collect(),
            found,
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(Row { line, record });
    }
    Ok(rows)
}

impl Row {
    /// Parse one column of this row, mapping failures to a `Malformed` error.
    pub fn parse<T, F, E>(
        &self,
        path: &Path,
        column: usize,
        name: &str,
        parse: F,
    ) -> Result<T, ArtifactError>
    where
        F: FnOnce(&str) -> Result<T, E>,
        E: std::fmt::Display,
    {
        let malformed = |message: String| ArtifactError::Malformed {
            path: path.to_path_buf(),
            line: self.line,
            message,
        };
        let raw = self
            .record
            .get(column)
            .ok_or_else(|| malformed(format!("missing column '{name}'")))?;
        parse(raw.trim()).map_err(|e| malformed(format!("invalid {name} '{raw}': {e}")))
    }
}
