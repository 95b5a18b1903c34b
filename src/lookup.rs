use crate::errors::*;
use crate::parser;
use nix::unistd::Gid;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Location of the system group database
pub const GROUP_FILE: &str = "/etc/group";

/// A resolved group entry
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupRecord {
    name: String,
    gid: String,
}

impl GroupRecord {
    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group id, exactly as written in the database
    pub fn gid(&self) -> &str {
        &self.gid
    }

    /// Group id as a numeric `Gid`
    pub fn gid_numeric(&self) -> Result<Gid, GroupError> {
        self.gid
            .parse::<libc::gid_t>()
            .map(Gid::from_raw)
            .map_err(|_| GroupError::from((ErrorKind::InvalidGid, self.gid.as_str())))
    }
}

/// Name and gid fields of one well-formed database line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: Vec<u8>,
    pub gid: Vec<u8>,
}

impl Entry {
    fn into_record(self) -> GroupRecord {
        GroupRecord {
            name: String::from_utf8_lossy(&self.name).into_owned(),
            gid: String::from_utf8_lossy(&self.gid).into_owned(),
        }
    }
}

/// Lazy iterator over the well-formed entries of a group database.
///
/// Blank, comment-only and malformed lines are skipped. A read error is
/// yielded once, after which the iterator is exhausted.
pub struct Entries<R> {
    reader: R,
    line: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Entries<R> {
    pub fn new(reader: R) -> Self {
        Entries {
            reader,
            line: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<Entry, GroupError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    if let Some([name, _, gid, _]) = parser::parse_line(&self.line) {
                        return Some(Ok(Entry {
                            name: name.to_vec(),
                            gid: gid.to_vec(),
                        }));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(GroupError::read(e)));
                }
            }
        }
        None
    }
}

impl<R: BufRead> std::iter::FusedIterator for Entries<R> {}

fn find_first<R, F>(reader: R, mut matches: F) -> Result<Option<GroupRecord>, GroupError>
where
    R: BufRead,
    F: FnMut(&Entry) -> bool,
{
    for entry in Entries::new(reader) {
        let entry = entry?;
        if matches(&entry) {
            let record = entry.into_record();
            tracing::trace!(name = record.name(), gid = record.gid(), "matched group entry");
            return Ok(Some(record));
        }
    }
    Ok(None)
}

/// Find the first entry whose gid field is exactly `id`
pub fn find_group_id<R: BufRead>(id: &str, reader: R) -> Result<GroupRecord, GroupError> {
    find_first(reader, |entry| entry.gid == id.as_bytes())?
        .ok_or_else(|| GroupError::from((ErrorKind::UnknownGroupId, id)))
}

/// Find the first entry named exactly `name` that has a non-empty gid
pub fn find_group_name<R: BufRead>(name: &str, reader: R) -> Result<GroupRecord, GroupError> {
    find_first(reader, |entry| {
        entry.name == name.as_bytes() && !entry.gid.is_empty()
    })?
    .ok_or_else(|| GroupError::from((ErrorKind::UnknownGroup, name)))
}

/// Group database lookups
///
/// # Example
/// ```no_run
/// use groupfile::GroupFile;
///
/// let staff = GroupFile::default().lookup_group("staff").unwrap();
/// println!("{} has gid {}", staff.name(), staff.gid());
/// ```
#[derive(Clone, Debug)]
pub struct GroupFile {
    path: PathBuf,
}

impl Default for GroupFile {
    fn default() -> Self {
        GroupFile {
            path: PathBuf::from(GROUP_FILE),
        }
    }
}

impl GroupFile {
    /// Read a different database instead of `/etc/group`
    pub fn path<T: AsRef<Path>>(mut self, path: T) -> Self {
        self.path = path.as_ref().to_owned();
        self
    }

    /// Look up a group by name
    pub fn lookup_group(&self, name: &str) -> Result<GroupRecord, GroupError> {
        find_group_name(name, self.open()?)
    }

    /// Look up a group by its textual id
    pub fn lookup_group_id(&self, id: &str) -> Result<GroupRecord, GroupError> {
        find_group_id(id, self.open()?)
    }

    /// Look up a group by numeric id
    pub fn lookup_gid(&self, gid: Gid) -> Result<GroupRecord, GroupError> {
        self.lookup_group_id(&gid.as_raw().to_string())
    }

    fn open(&self) -> Result<BufReader<File>, GroupError> {
        tracing::trace!(path = %self.path.display(), "opening group database");
        let file = File::open(&self.path).map_err(GroupError::open)?;
        Ok(BufReader::new(file))
    }
}

/// Look up a group by name in `/etc/group`
pub fn lookup_group(name: &str) -> Result<GroupRecord, GroupError> {
    GroupFile::default().lookup_group(name)
}

/// Look up a group by id in `/etc/group`
pub fn lookup_group_id(id: &str) -> Result<GroupRecord, GroupError> {
    GroupFile::default().lookup_group_id(id)
}
