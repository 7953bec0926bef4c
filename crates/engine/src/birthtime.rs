// crates/engine/src/birthtime.rs
use crate::error::{EngineError, Result};
use crate::options::{MtimeFallback, TimestampSource};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

/// Creation time of a file, truncated to milliseconds.
///
/// When the platform cannot report a creation time the modification time is
/// used instead, unless `fallback` is [`MtimeFallback::Deny`]. The substitution
/// is logged and reported through the returned [`TimestampSource`].
///
/// # Errors
///
/// Returns [`EngineError::BirthtimeUnavailable`] when the creation time is
/// missing and the fallback is denied, or [`EngineError::Metadata`] when
/// neither timestamp can be read.
pub fn file_timestamp(
    meta: &Metadata,
    path: &Path,
    fallback: MtimeFallback,
) -> Result<(DateTime<Utc>, TimestampSource)> {
    match meta.created() {
        Ok(created) => Ok((truncate_millis(created)?, TimestampSource::Birth)),
        Err(source) => match fallback {
            MtimeFallback::Deny => Err(EngineError::BirthtimeUnavailable {
                path: path.to_path_buf(),
                source,
            }),
            MtimeFallback::Allow => {
                tracing::warn!(
                    path = %path.display(),
                    reason = %source,
                    "creation time unavailable, substituting modification time"
                );
                let modified = meta.modified().map_err(|e| EngineError::Metadata {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                Ok((truncate_millis(modified)?, TimestampSource::Modified))
            }
        },
    }
}

fn truncate_millis(time: SystemTime) -> Result<DateTime<Utc>> {
    let dt = DateTime::<Utc>::from(time);
    DateTime::from_timestamp_millis(dt.timestamp_millis())
        .ok_or_else(|| EngineError::Timestamp(format!("out of range: {dt}")))
}

/// Format as `YYYY-MM-DDTHH:MM:SS.sssZ`.
#[must_use]
pub fn format_iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 timestamp with an explicit offset into UTC.
///
/// # Errors
///
/// Returns [`EngineError::Timestamp`] if `s` is not valid RFC 3339.
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EngineError::Timestamp(format!("{s}: {e}")))
}
