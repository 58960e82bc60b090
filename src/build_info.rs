//! Commit and date stamped in by `build.rs`, reported by `--version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `flappy-skies <date> (<commit>)`.
pub fn version_line() -> String {
    format!("flappy-skies {} ({})", BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_present() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line() {
        let line = version_line();
        assert!(line.starts_with("flappy-skies "));
        assert!(line.ends_with(&format!("({})", BUILD_COMMIT)));
    }
}
