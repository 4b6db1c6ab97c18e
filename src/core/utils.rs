use crate::core::model::PromptRecord;
use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Ensure directory exists.
pub fn ensure_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| format!("Unable to create directory {}: {}", path.display(), e))?;
    }
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(0o700)).ok();
    }
    Ok(())
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Time-based id: the creation timestamp, bumped until no existing record uses it.
pub fn new_id(now: i64, existing: &[PromptRecord]) -> String {
    let mut candidate = now;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|r| r.id == id) {
            return id;
        }
        candidate += 1;
    }
}

/// Renders a `createdAt` timestamp for display.
pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::PromptDraft;

    fn record(id: &str) -> PromptRecord {
        PromptRecord::create(
            PromptDraft {
                title: "t".to_string(),
                prompt: "p".to_string(),
                ..Default::default()
            },
            id.to_string(),
            0,
        )
    }

    #[test]
    fn new_id_is_the_timestamp() {
        assert_eq!(new_id(1700000000000, &[]), "1700000000000");
    }

    #[test]
    fn new_id_skips_taken_values() {
        let existing = vec![record("100"), record("101")];
        assert_eq!(new_id(100, &existing), "102");
    }

    #[test]
    fn format_timestamp_handles_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), "unknown");
    }
}
