use std::ffi::{OsStr, OsString};
use std::ops::Range;
use std::os::unix::ffi::OsStrExt;

use rand::Rng;
use rand::distr::Alphanumeric;

use super::{SEPARATOR, join_path};
use crate::fs::error::InvalidArgumentError;

pub const PLACEHOLDER: u8 = b'*';

/// Number of random characters substituted for the placeholder.
pub const TEMP_NAME_LEN: usize = 16;

/// Generates a candidate temporary file name inside `directory`.
///
/// `pattern` is a file name containing exactly one run of `*`, which is replaced by
/// [`TEMP_NAME_LEN`] random alphanumeric characters drawn from `rng`. The name is not checked
/// against the filesystem; use exclusive creation to claim it.
pub fn temp_name<D, P, R>(directory: D, pattern: P, rng: &mut R) -> Result<OsString, InvalidArgumentError>
where
    D: AsRef<OsStr>,
    P: AsRef<OsStr>,
    R: Rng + ?Sized,
{
    let pattern = pattern.as_ref();
    let run = check_pattern(pattern)?;
    let pattern = pattern.as_bytes();

    let mut name = Vec::with_capacity(pattern.len() - run.len() + TEMP_NAME_LEN);
    name.extend_from_slice(&pattern[..run.start]);
    name.extend((0..TEMP_NAME_LEN).map(|_| rng.sample(Alphanumeric)));
    name.extend_from_slice(&pattern[run.end..]);

    Ok(join_path([directory.as_ref(), OsStr::from_bytes(&name)]))
}

/// Checks that `pattern` is usable by [`temp_name`], returning the byte range of its placeholder
/// run.
pub fn check_pattern<P: AsRef<OsStr>>(pattern: P) -> Result<Range<usize>, InvalidArgumentError> {
    let pattern = pattern.as_ref().as_bytes();
    if pattern.contains(&SEPARATOR) {
        Err(InvalidArgumentError("pattern contains a path separator"))?
    }
    if pattern.contains(&b'\0') {
        Err(InvalidArgumentError("pattern contains a NUL byte"))?
    }
    placeholder_run(pattern)
}

fn placeholder_run(pattern: &[u8]) -> Result<Range<usize>, InvalidArgumentError> {
    let start = pattern
        .iter()
        .position(|&ch| ch == PLACEHOLDER)
        .ok_or(InvalidArgumentError("pattern has no placeholder"))?;
    let end = pattern[start..]
        .iter()
        .position(|&ch| ch != PLACEHOLDER)
        .map_or(pattern.len(), |len| start + len);

    if pattern[end..].contains(&PLACEHOLDER) {
        Err(InvalidArgumentError("pattern has more than one placeholder"))?
    }
    Ok(start..end)
}
