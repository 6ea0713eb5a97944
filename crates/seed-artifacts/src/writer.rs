//! CSV artifact writing.

use crate::artifact::Artifact;
use crate::error::ArtifactError;
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from writing one artifact.
#[derive(Debug, Clone, Default)]
pub struct ArtifactMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

/// Write an artifact file: the header row followed by `rows`.
///
/// Any existing file at `path` is replaced.
pub(crate) fn write_rows<I>(
    path: &Path,
    artifact: Artifact,
    rows: I,
) -> Result<ArtifactMetrics, ArtifactError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let start_time = Instant::now();
    let mut metrics = ArtifactMetrics::default();

    let io_err = |source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source| ArtifactError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    writer.write_record(artifact.columns()).map_err(csv_err)?;

    for row in rows {
        writer.write_record(&row).map_err(csv_err)?;
        metrics.rows_written += 1;

        if metrics.rows_written % 10000 == 0 {
            debug!("Written {} rows to {}", metrics.rows_written, artifact);
        }
    }

    writer.flush().map_err(io_err)?;
    drop(writer);

    metrics.file_size_bytes = std::fs::metadata(path).map_err(io_err)?.len();
    metrics.total_duration = start_time.elapsed();

    info!(
        "Wrote artifact '{}': {} rows, {} bytes",
        path.display(),
        metrics.rows_written,
        metrics.file_size_bytes
    );

    Ok(metrics)
}
