use std::fmt::{self, Debug, Formatter};
use std::ops::{BitOr, BitOrAssign};

use libc::{O_CREAT, O_EXCL, O_RDONLY, O_RDWR, O_WRONLY, c_int};

use crate::fs::error::InvalidArgumentError;

/// The set of options a [`File`](super::File) is opened with, combined with `|`.
///
/// At least one of [`READ`](FileMode::READ) and [`WRITE`](FileMode::WRITE) is required.
/// [`EXCLUSIVE`](FileMode::EXCLUSIVE) is only meaningful together with
/// [`CREATE`](FileMode::CREATE): the two together create the file atomically, failing if anything
/// already exists at the path.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileMode(u8);

impl FileMode {
    pub const READ: FileMode = FileMode(0b0001);
    pub const WRITE: FileMode = FileMode(0b0010);
    pub const CREATE: FileMode = FileMode(0b0100);
    pub const EXCLUSIVE: FileMode = FileMode(0b1000);

    pub const READ_WRITE: FileMode = FileMode::READ.union(FileMode::WRITE);

    const NAMES: [(FileMode, &'static str); 4] = [
        (FileMode::READ, "READ"),
        (FileMode::WRITE, "WRITE"),
        (FileMode::CREATE, "CREATE"),
        (FileMode::EXCLUSIVE, "EXCLUSIVE"),
    ];

    pub const fn empty() -> FileMode {
        FileMode(0)
    }

    pub const fn union(self, other: FileMode) -> FileMode {
        FileMode(self.0 | other.0)
    }

    pub const fn contains(self, other: FileMode) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) const fn flags(self) -> Result<c_int, InvalidArgumentError> {
        let access = match (self.contains(FileMode::READ), self.contains(FileMode::WRITE)) {
            (true, true) => O_RDWR,
            (true, false) => O_RDONLY,
            (false, true) => O_WRONLY,
            (false, false) => return Err(InvalidArgumentError("neither read nor write requested")),
        };

        let create = match (self.contains(FileMode::CREATE), self.contains(FileMode::EXCLUSIVE)) {
            (true, true) => O_CREAT | O_EXCL,
            (true, false) => O_CREAT,
            (false, false) => 0,
            (false, true) => return Err(InvalidArgumentError("exclusive requested without create")),
        };

        Ok(access | create)
    }
}

impl BitOr for FileMode {
    type Output = FileMode;

    fn bitor(self, rhs: FileMode) -> FileMode {
        self.union(rhs)
    }
}

impl BitOrAssign for FileMode {
    fn bitor_assign(&mut self, rhs: FileMode) {
        *self = self.union(rhs);
    }
}

impl Debug for FileMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FileMode(")?;
        let mut names = FileMode::NAMES.iter().filter(|(flag, _)| self.contains(*flag));
        match names.next() {
            Some((_, first)) => write!(f, "{first}")?,
            None => write!(f, "empty")?,
        }
        for (_, name) in names {
            write!(f, " | {name}")?;
        }
        write!(f, ")")
    }
}
