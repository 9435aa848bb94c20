//! Legacy solution file path cleanup
//!
//! Older clients allowed numeric suffixes on exercise directories
//! (`hello-world-2/`) so people could keep parallel versions of an exercise,
//! and some uploaded the whole local path. Others sent Windows paths with
//! backslashes as part of the filename. Both shapes still come back from the
//! API and have to be normalized before anything is written.

use regex::Regex;
use std::path::PathBuf;

/// Normalize an API file path into a path relative to the exercise directory
///
/// 1. Strip everything up to and including a `<slug>-<digits>/` directory.
/// 2. Turn backslashes into forward slashes.
/// 3. Convert to a native relative path. Empty, `.` and `..` segments are
///    dropped so the result never leaves the exercise directory.
///
/// ```
/// use solution_dl::download::sanitize_legacy_filepath;
/// use std::path::PathBuf;
///
/// let path = sanitize_legacy_filepath("/full/path/hello-world-12/src/lib.rs", "hello-world");
/// assert_eq!(path, PathBuf::from("src").join("lib.rs"));
/// ```
pub fn sanitize_legacy_filepath(file: &str, slug: &str) -> PathBuf {
    let pattern = format!(r"\A.*[/\\]{}-\d*[/\\]", regex::escape(slug));
    let file = match Regex::new(&pattern) {
        Ok(numeric_suffix) => numeric_suffix.replace(file, ""),
        // escaped input always compiles; keep the path as-is otherwise
        Err(_) => file.into(),
    };

    file.replace('\\', "/")
        .split('/')
        .filter(|segment| !matches!(*segment, "" | "." | ".."))
        .collect()
}
