//! Publishing collected specs into the output directory
//!
//! The artifact is streamed to its destination, flushed to disk, then read
//! back once and parsed as JSON. A destination that fails to parse is left in
//! place and reported.

use crate::error::CollectError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

/// Copy `source` to `destination`, fsync it, and check it parses as JSON.
///
/// Returns the number of bytes copied.
pub fn publish(source: &Path, destination: &Path) -> Result<u64, CollectError> {
    let bytes = copy_durably(source, destination)?;
    validate_json(destination)?;
    debug!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "Published spec"
    );
    Ok(bytes)
}

fn copy_durably(source: &Path, destination: &Path) -> Result<u64, CollectError> {
    let mut reader = File::open(source).map_err(|e| CollectError::SourceUnreadable {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut writer = File::create(destination).map_err(|e| CollectError::DestinationUnwritable {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let copy_err = |e: io::Error| CollectError::Copy {
        path: destination.to_path_buf(),
        source: e,
    };
    let bytes = io::copy(&mut reader, &mut writer).map_err(copy_err)?;
    writer.sync_all().map_err(copy_err)?;
    Ok(bytes)
}

/// Parse `path` as a single JSON document of any shape.
pub fn validate_json(path: &Path) -> Result<(), CollectError> {
    let file = File::open(path).map_err(|e| CollectError::DestinationUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_reader::<_, serde_json::Value>(BufReader::new(file)).map_err(|e| {
        CollectError::InvalidJson {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    Ok(())
}
