//! Decoding of single lines of a group database.
//!
//! A line looks like `wheel:*:0:root,admin`. Everything from the first `#`
//! is a comment, and surrounding ASCII whitespace is ignored.

/// Number of fields in a group entry: name, password, gid and member list.
pub const FIELDS: usize = 4;

/// Return `line` up to, but not including, the first `#`.
pub fn remove_comment(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == b'#') {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Whether `b` is an ASCII space character.
pub fn is_space(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}

/// Strip leading and trailing ASCII spaces. Other Unicode whitespace is kept.
pub fn trim_space(mut line: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = line {
        if !is_space(*first) {
            break;
        }
        line = rest;
    }
    while let [rest @ .., last] = line {
        if !is_space(*last) {
            break;
        }
        line = rest;
    }
    line
}

/// Split `line` into exactly [`FIELDS`] pieces on `:`.
///
/// The last piece keeps any further `:` verbatim. Returns `None` if the line
/// has fewer pieces.
pub fn split_fields(line: &[u8]) -> Option<[&[u8]; FIELDS]> {
    let mut parts = line.splitn(FIELDS, |&b| b == b':');
    Some([parts.next()?, parts.next()?, parts.next()?, parts.next()?])
}

/// Normalize and split one raw line.
///
/// Blank lines, comment-only lines and malformed lines all yield `None`.
pub fn parse_line(line: &[u8]) -> Option<[&[u8]; FIELDS]> {
    let text = trim_space(remove_comment(line));
    if text.is_empty() {
        return None;
    }
    split_fields(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_removal() {
        assert_eq!(remove_comment(b"wheel:*:0:root"), b"wheel:*:0:root");
        assert_eq!(remove_comment(b"# only a comment"), b"");
        assert_eq!(remove_comment(b"a:*:1:#c:extra"), b"a:*:1:");
        assert_eq!(remove_comment(b"a#b#c"), b"a");
    }

    #[test]
    fn trimming_is_ascii_only() {
        assert_eq!(trim_space(b" \t wheel:*:0:\r\n"), b"wheel:*:0:");
        assert_eq!(trim_space(b" \t\r\n"), b"");
        assert_eq!(trim_space(b""), b"");
        // U+00A0 NO-BREAK SPACE is not stripped
        assert_eq!(trim_space("\u{a0}x ".as_bytes()), "\u{a0}x".as_bytes());
        assert_eq!(trim_space(b"a b"), b"a b");
    }

    #[test]
    fn splitting() {
        let expected: [&[u8]; FIELDS] = [b"wheel", b"*", b"0", b"root,admin"];
        assert_eq!(split_fields(b"wheel:*:0:root,admin"), Some(expected));

        let fields = split_fields(b"x:y:1:a:b:c").unwrap();
        assert_eq!(fields[3], b"a:b:c");

        let expected: [&[u8]; FIELDS] = [b"nogroup", b"*", b"", b""];
        assert_eq!(split_fields(b"nogroup:*::"), Some(expected));

        assert!(split_fields(b"wheel:*:0").is_none());
        assert!(split_fields(b"wheel").is_none());
    }

    #[test]
    fn comment_is_removed_before_splitting() {
        let expected: [&[u8]; FIELDS] = [b"a", b"*", b"1", b""];
        assert_eq!(parse_line(b"a:*:1:#comment:extra:fields"), Some(expected));
        // The comment swallows the field separators, leaving too few fields
        assert!(parse_line(b"a:*#:1:2").is_none());
    }

    #[test]
    fn blank_and_comment_lines() {
        assert!(parse_line(b"").is_none());
        assert!(parse_line(b"   \t\n").is_none());
        assert!(parse_line(b"  # comment").is_none());
        assert!(parse_line(b"staff:*:20:\n").is_some());
    }
}
