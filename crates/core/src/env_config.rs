//! Environment variable parsing with warn-level logging for invalid values.

use std::path::{Path, PathBuf};

use crate::constants::{DATASET_ENV_VAR, DEFAULT_DATASET_FILE};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Resolve the dataset path: explicit argument, then `HOLY_WORD_DATASET`,
/// then [`default_dataset_path`].
pub fn resolve_dataset_path(explicit: Option<&Path>) -> PathBuf {
    resolve_dataset_path_from(explicit, DATASET_ENV_VAR)
}

fn resolve_dataset_path_from(explicit: Option<&Path>, env_var: &str) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var_os(env_var) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => default_dataset_path(),
    }
}

/// [`DEFAULT_DATASET_FILE`] next to the running executable if it exists there,
/// otherwise the same file name relative to the working directory.
pub fn default_dataset_path() -> PathBuf {
    let exe_dir = std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf));
    dataset_path_near(exe_dir.as_deref())
}

fn dataset_path_near(exe_dir: Option<&Path>) -> PathBuf {
    exe_dir
        .map(|dir| dir.join(DEFAULT_DATASET_FILE))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_var(name: &str, value: &str) {
        // SAFETY: each test touches its own uniquely named variable.
        unsafe { std::env::set_var(name, value) };
    }

    fn remove_var(name: &str) {
        // SAFETY: see `set_var`.
        unsafe { std::env::remove_var(name) };
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "TEST_HOLY_WORD_PARSE_VALID_51021";
        set_var(var_name, "8080");
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 8080);
        remove_var(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "TEST_HOLY_WORD_PARSE_INVALID_51022";
        set_var(var_name, "not-a-port");
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 3001);
        remove_var(var_name);
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "TEST_HOLY_WORD_PARSE_MISSING_51023";
        remove_var(var_name);
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 3001);
    }

    #[test]
    fn test_env_parse_out_of_range() {
        let var_name = "TEST_HOLY_WORD_PARSE_RANGE_51024";
        set_var(var_name, "70000");
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 3001);
        remove_var(var_name);
    }

    #[test]
    fn test_env_parse_string_value() {
        let var_name = "TEST_HOLY_WORD_PARSE_HOST_51025";
        set_var(var_name, "127.0.0.1");
        let result = env_parse_with_default(var_name, "0.0.0.0".to_owned());
        assert_eq!(result, "127.0.0.1");
        remove_var(var_name);
    }

    #[test]
    fn test_explicit_dataset_path_wins() {
        let path = resolve_dataset_path(Some(Path::new("/srv/verses.json")));
        assert_eq!(path, PathBuf::from("/srv/verses.json"));
    }

    #[test]
    fn test_dataset_env_var_used_without_flag() {
        let var_name = "TEST_HOLY_WORD_DATASET_ENV_51026";
        set_var(var_name, "/data/from-env.json");
        let path = resolve_dataset_path_from(None, var_name);
        assert_eq!(path, PathBuf::from("/data/from-env.json"));
        remove_var(var_name);
    }

    #[test]
    fn test_dataset_flag_beats_env_var() {
        let var_name = "TEST_HOLY_WORD_DATASET_FLAG_51027";
        set_var(var_name, "/data/from-env.json");
        let path = resolve_dataset_path_from(Some(Path::new("/data/from-flag.json")), var_name);
        assert_eq!(path, PathBuf::from("/data/from-flag.json"));
        remove_var(var_name);
    }

    #[test]
    fn test_empty_dataset_env_var_ignored() {
        let var_name = "TEST_HOLY_WORD_DATASET_EMPTY_51028";
        set_var(var_name, "");
        let path = resolve_dataset_path_from(None, var_name);
        assert_eq!(path, default_dataset_path());
        remove_var(var_name);
    }

    #[test]
    fn test_dataset_next_to_executable_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let colocated = dir.path().join(DEFAULT_DATASET_FILE);
        std::fs::write(&colocated, "[]").unwrap();
        assert_eq!(dataset_path_near(Some(dir.path())), colocated);
    }

    #[test]
    fn test_dataset_falls_back_to_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(dataset_path_near(Some(dir.path())), PathBuf::from(DEFAULT_DATASET_FILE));
        assert_eq!(dataset_path_near(None), PathBuf::from(DEFAULT_DATASET_FILE));
    }

    #[test]
    fn test_default_dataset_path_file_name() {
        let path = default_dataset_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(DEFAULT_DATASET_FILE));
    }
}
