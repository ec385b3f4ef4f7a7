#![cfg(test)]

use std::path::Path;
use std::thread;

use super::*;
use crate::fs::file::{File, FileMode};
use crate::fs::ops::{UnlinkError, file_exists};
use crate::fs::path::temp_name;
use crate::util::panic::assert_panics;
use crate::util::test::{scratch_dir, seeded_rng};

fn file_name(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

#[test]
fn test_create() {
    let dir = scratch_dir();
    let mut file = TempFile::create(dir.path(), "foo-*.tmp", &mut rand::rng()).unwrap();
    let path = Path::new(file.path()).to_owned();

    assert_eq!(path.parent(), Some(dir.path()), "The file should be created directly inside the directory.");
    assert!(file_name(&path).starts_with("foo-"));
    assert!(file_name(&path).ends_with(".tmp"));
    assert!(file_exists(&path));
    assert!(file.is_pending_deletion());

    assert_eq!(file.close(), Ok(()));
    assert!(file.path().is_empty(), "Closing should clear the path.");
    assert!(!file.is_pending_deletion());
    assert!(!file_exists(&path), "Closing should delete the file.");
}

#[test]
fn test_write() {
    let dir = scratch_dir();
    let mut file = TempFile::create(dir.path(), "foo-*.tmp", &mut seeded_rng(5)).unwrap();
    let path = Path::new(file.path()).to_owned();

    assert_eq!(file.write("hello world\n"), Ok(()));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "hello world\n",
        "Writes should be visible before the file is closed."
    );
    assert_eq!(file.close(), Ok(()));
    assert!(file.path().is_empty());
    assert!(!file_exists(&path));
}

#[test]
fn test_drop_deletes() {
    let dir = scratch_dir();
    let path = {
        let mut file = TempFile::create(dir.path(), "drop-*", &mut seeded_rng(6)).unwrap();
        file.write("gone soon").unwrap();
        Path::new(file.path()).to_owned()
    };
    assert!(!file_exists(&path), "Dropping without closing should still delete the file.");

    let file = TempFile::create(dir.path(), "thread-*", &mut seeded_rng(7)).unwrap();
    let path = Path::new(file.path()).to_owned();
    thread::spawn(move || drop(file)).join().unwrap();
    assert!(!file_exists(&path), "The file should be deleted exactly once by its final owner.");
}

#[test]
fn test_release() {
    let dir = scratch_dir();
    let temp = TempFile::create(dir.path(), "keep-*.txt", &mut seeded_rng(8)).unwrap();
    let path = Path::new(temp.path()).to_owned();

    let mut file: File = temp.into_file();
    assert_eq!(file.write("kept"), Ok(()));
    assert_eq!(file.close(), Ok(()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "kept", "A released file should survive.");

    let mut temp = TempFile::create(dir.path(), "keep-*.txt", &mut seeded_rng(9)).unwrap();
    let mut file = temp.release();
    assert!(temp.path().is_empty());
    assert_eq!(temp.close(), Ok(()), "Closing a released temporary file should do nothing.");
    assert_eq!(file.close(), Ok(()));
}

#[test]
fn test_close_reports_unlink_failure() {
    let dir = scratch_dir();
    let mut file = TempFile::create(dir.path(), "gone-*", &mut seeded_rng(10)).unwrap();
    std::fs::remove_file(file.path()).unwrap();

    assert_eq!(
        file.close(),
        Err(TempCloseError::Unlink(UnlinkError::NotFound(crate::fs::error::NotFoundError))),
        "An unlink failure after a successful close should be reported."
    );
    assert!(file.path().is_empty());
    assert!(!file.is_pending_deletion(), "No deletion obligation should survive close.");
}

#[test]
fn test_retries_taken_names() {
    let dir = scratch_dir();
    let taken = temp_name(dir.path(), "retry-*", &mut seeded_rng(11)).unwrap();
    std::fs::write(&taken, "occupied").unwrap();

    let result = TempFile::options().attempts(1).create(dir.path(), "retry-*", &mut seeded_rng(11));
    assert_eq!(
        result.unwrap_err(),
        TempError::ResourceExhausted(crate::fs::error::ResourceExhaustedError { attempts: 1 }),
    );

    let mut file = TempFile::options().attempts(2).create(dir.path(), "retry-*", &mut seeded_rng(11)).unwrap();
    assert_ne!(file.path(), taken.as_os_str(), "A taken name should be replaced by a fresh one.");
    assert_eq!(file.close(), Ok(()));
    assert_eq!(std::fs::read_to_string(&taken).unwrap(), "occupied", "A taken file must not be touched.");
}

#[test]
fn test_create_errors() {
    let dir = scratch_dir();
    let missing = dir.path().join("missing");
    assert!(TempFile::create(&missing, "x-*", &mut seeded_rng(12)).is_err_and(|e| e.is_not_found()));
    assert!(TempFile::create(dir.path(), "x", &mut seeded_rng(12)).is_err_and(|e| e.is_invalid_argument()));
    assert!(TempFile::options().attempts(0).create(dir.path(), "x-*", &mut seeded_rng(12)).is_err_and(|e| e.is_resource_exhausted()));
    assert!(
        TempFile::options().attempts(0).create(dir.path(), "x", &mut seeded_rng(12)).is_err_and(|e| e.is_invalid_argument()),
        "A malformed pattern should be rejected before any attempt is made."
    );
}

#[test]
fn test_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_dir();
    let mut file = TempFile::create(dir.path(), "perm-*", &mut seeded_rng(13)).unwrap();
    let mode = std::fs::metadata(file.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0, "Temporary files should only be accessible by their owner.");
    assert_eq!(file.close(), Ok(()));
}

#[test]
fn test_double_close_panics() {
    let dir = scratch_dir();
    let mut file = TempFile::create(dir.path(), "twice-*", &mut seeded_rng(14)).unwrap();
    assert_eq!(file.close(), Ok(()));
    assert_panics!({
        let _ = file.close();
    }, "Closing a temporary file twice should panic.");
}

#[test]
fn test_read_back() {
    let dir = scratch_dir();
    let mut file = TempFile::create(dir.path(), "rb-*", &mut seeded_rng(15)).unwrap();
    let path = Path::new(file.path()).to_owned();
    file.write("abc").unwrap();
    file.sync().unwrap();

    let mut reader = File::open(file.path(), FileMode::READ).unwrap();
    let mut content = Vec::new();
    reader.read_to_end(&mut content).unwrap();
    assert_eq!(content, b"abc");
    assert_eq!(reader.close(), Ok(()));
    assert_eq!(file.close(), Ok(()));
    assert!(!file_exists(&path));
}
