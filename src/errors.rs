use std::error::Error;
use std::fmt;
use std::io;

/// Types of errors that can occur during group lookups
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No usable entry with the requested group name
    UnknownGroup,
    /// No entry with the requested group id
    UnknownGroupId,
    /// The group database could not be opened
    Open,
    /// Reading the group database failed part way through
    Read,
    /// A gid field is not a valid numeric group id
    InvalidGid,
}

/// Internal representation of lookup errors
#[derive(Debug)]
enum ErrorRepr {
    /// I/O error while opening or reading the database
    FromIo(ErrorKind, io::Error),
    /// Lookup key that was not found, or gid that failed to parse
    WithKey(ErrorKind, String),
}

/// Error type for group lookups
#[derive(Debug)]
pub struct GroupError {
    repr: ErrorRepr,
}

impl GroupError {
    pub(crate) fn open(e: io::Error) -> GroupError {
        GroupError {
            repr: ErrorRepr::FromIo(ErrorKind::Open, e),
        }
    }

    pub(crate) fn read(e: io::Error) -> GroupError {
        GroupError {
            repr: ErrorRepr::FromIo(ErrorKind::Read, e),
        }
    }

    /// The kind of failure
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::FromIo(kind, _) | ErrorRepr::WithKey(kind, _) => kind,
        }
    }

    /// Whether the database was scanned completely without a match
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnknownGroup | ErrorKind::UnknownGroupId
        )
    }

    /// The searched name or id for not-found errors, or the rejected gid
    pub fn key(&self) -> Option<&str> {
        match self.repr {
            ErrorRepr::WithKey(_, ref key) => Some(key.as_str()),
            ErrorRepr::FromIo(..) => None,
        }
    }
}

impl Error for GroupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.repr {
            ErrorRepr::FromIo(_, ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.repr {
            ErrorRepr::FromIo(ErrorKind::Open, ref e) => {
                write!(f, "Unable to open the group database: {}", e)
            }
            ErrorRepr::FromIo(_, ref e) => {
                write!(f, "Unable to read the group database: {}", e)
            }
            ErrorRepr::WithKey(ErrorKind::UnknownGroup, ref name) => {
                write!(f, "Unknown group {}", name)
            }
            ErrorRepr::WithKey(ErrorKind::UnknownGroupId, ref id) => {
                write!(f, "Unknown group id {}", id)
            }
            ErrorRepr::WithKey(_, ref gid) => write!(f, "Invalid group id {:?}", gid),
        }
    }
}

impl<T: Into<String>> From<(ErrorKind, T)> for GroupError {
    fn from((kind, key): (ErrorKind, T)) -> GroupError {
        GroupError {
            repr: ErrorRepr::WithKey(kind, key.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinct_from_io() {
        let e = GroupError::from((ErrorKind::UnknownGroup, "staff"));
        assert!(e.is_not_found());
        assert_eq!(e.key(), Some("staff"));
        assert!(e.source().is_none());
        assert_eq!(e.to_string(), "Unknown group staff");

        let e = GroupError::open(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(e.kind(), ErrorKind::Open);
        assert!(!e.is_not_found());
        assert!(e.key().is_none());
        assert!(e.source().is_some());
    }
}
