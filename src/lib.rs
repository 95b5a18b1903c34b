/*!
# groupfile

Group name and group id lookups that read the system group database
directly, without going through `getgrnam(3)` or `getgrgid(3)`.

## Overview

The database is a line-oriented text file, `/etc/group` by default:

```text
# name:password:gid:members
wheel:*:0:root
staff:*:20:alice,bob
```

- Everything from the first `#` on a line is a comment
- Leading and trailing ASCII whitespace is ignored, as are blank lines
- Lines with fewer than four `:`-separated fields are skipped
- The first matching line wins

A lookup by id compares the gid field as a string, without numeric
conversion. A lookup by name only accepts entries with a non-empty gid.

Not finding a group is reported as an error whose kind is
[`ErrorKind::UnknownGroup`] or [`ErrorKind::UnknownGroupId`], which callers can
tell apart from a database that could not be opened ([`ErrorKind::Open`]) or
read ([`ErrorKind::Read`]).

## Example

```no_run
use groupfile::{lookup_group, lookup_group_id};

let wheel = lookup_group("wheel").unwrap();
assert_eq!(lookup_group_id(wheel.gid()).unwrap().name(), "wheel");
```

Any buffered reader can be searched:

```
use groupfile::find_group_id;
use std::io::Cursor;

let db = Cursor::new("# comment\n\nstaff:*:20:\n");
assert_eq!(find_group_id("20", db).unwrap().name(), "staff");
```
*/

pub use self::errors::*;
pub use self::lookup::*;

mod errors;
mod lookup;
pub mod parser;

/// Whether the group database is expected to exist on this target.
///
/// This is decided at build time. Android has no `/etc/group`.
pub const fn is_available() -> bool {
    cfg!(all(unix, not(target_os = "android")))
}

/// Reexported dependencies for use in consuming crates.
///
/// ## Available Reexports
///
/// - `libc`: Low-level bindings to the C standard library
/// - `nix`: Rust friendly bindings to *nix APIs, used for the `Gid` type
pub mod reexports {
    pub use {libc, nix};
}
