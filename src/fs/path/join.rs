use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

pub const SEPARATOR: u8 = b'/';

/// Joins path segments with exactly one separator between each pair.
///
/// Separators at the end of the joined prefix and at the start of each later segment collapse into
/// one. A leading separator on the first segment and a trailing separator on the last one are
/// kept. Empty segments are skipped. This is a purely syntactic join: `.` and `..` are left alone.
///
/// ```
/// # use runner_fs::fs::path::join_path;
/// assert_eq!(join_path(["foo/", "/bar/", "baz/qux/"]), "foo/bar/baz/qux/");
/// assert_eq!(join_path(["/", "file"]), "/file");
/// ```
pub fn join_path<I, S>(segments: I) -> OsString
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut joined: Vec<u8> = Vec::new();

    for segment in segments {
        let segment = segment.as_ref().as_bytes();
        if segment.is_empty() {
            continue;
        }
        if joined.is_empty() {
            joined.extend_from_slice(segment);
            continue;
        }

        let end = joined.iter().rposition(|&ch| ch != SEPARATOR).map_or(0, |i| i + 1);
        joined.truncate(end);
        joined.push(SEPARATOR);

        let start = segment.iter().position(|&ch| ch != SEPARATOR).unwrap_or(segment.len());
        joined.extend_from_slice(&segment[start..]);
    }

    OsString::from_vec(joined)
}

/// Variadic form of [`join_path`], accepting anything that is `AsRef<OsStr>`.
///
/// ```
/// # use runner_fs::join_path;
/// assert_eq!(join_path!("/foo/", "/bar/"), "/foo/bar/");
/// ```
#[macro_export]
macro_rules! join_path {
    ($($segment:expr),+ $(,)?) => {
        $crate::fs::path::join_path([$(::std::ffi::OsStr::new(&$segment)),+])
    };
}
