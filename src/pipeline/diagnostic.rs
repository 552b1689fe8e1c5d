//! Per-run artifacts for tracing a surprising request back to its report.
//!
//! Off unless `HEALTH_SUPPORT_DUMP_DIR` is set. Each run writes:
//! ```text
//! {dump_dir}/{run_id}/
//!   00-source-info.json
//!   01-lines.json
//!   02-parsed.json
//!   03-request.json
//!   04-verdict.json
//! ```
//!
//! The artifacts contain patient data. Point the dump directory somewhere
//! private.

use std::path::{Path, PathBuf};

use serde::Serialize;
use uuid::Uuid;

/// Create `base/{run_id}` and return it.
///
/// A directory that cannot be created turns dumping off for the run.
pub fn run_dir_in(base: &Path, run_id: &Uuid) -> Option<PathBuf> {
    let dir = base.join(run_id.to_string());
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(error) => {
            tracing::warn!(
                run_id = %run_id,
                base = %base.display(),
                %error,
                "Run artifacts disabled: cannot create run directory"
            );
            None
        }
    }
}

/// Save `value` as pretty JSON at `dir/artifact`.
///
/// Errors are logged, never returned.
pub fn dump_json<T: Serialize>(dir: &Path, artifact: &str, value: &T) {
    let saved = serde_json::to_vec_pretty(value)
        .map_err(|e| e.to_string())
        .and_then(|json| {
            std::fs::write(dir.join(artifact), &json)
                .map(|()| json.len())
                .map_err(|e| e.to_string())
        });

    match saved {
        Ok(bytes) => tracing::debug!(artifact, bytes, "Run artifact saved"),
        Err(error) => tracing::warn!(
            artifact,
            dir = %dir.display(),
            %error,
            "Run artifact skipped"
        ),
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
