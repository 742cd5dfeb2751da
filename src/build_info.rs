//! Commit and date stamped in by the build script.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner for `--version` output.
pub fn version_line() -> String {
    format!(
        "treasure-hunter {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line_mentions_date() {
        assert!(version_line().contains(BUILD_DATE));
    }
}
