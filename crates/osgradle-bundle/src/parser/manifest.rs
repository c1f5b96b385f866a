//! Reader for the main section of a `META-INF/MANIFEST.MF` file.
//!
//! Headers are `Name: value` lines; a line starting with a single space
//! continues the previous value. The main section ends at the first blank
//! line. Header names compare case-insensitively.

use std::collections::BTreeMap;

use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::char,
    combinator::{opt, rest, verify},
    sequence::preceded,
};

/// Main-section headers of a manifest, keyed case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestHeaders {
    headers: BTreeMap<String, String>,
}

impl ManifestHeaders {
    /// Returns the raw value of a header, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns `true` when no header was read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    fn insert(&mut self, name: &str, value: String) {
        let _ = self.headers.insert(name.to_ascii_lowercase(), value);
    }
}

const fn is_colon(c: char) -> bool {
    c == ':'
}

/// Header name: a non-blank run up to the first `:`.
fn header_name(input: &str) -> IResult<&str, &str> {
    verify(take_till1(is_colon), |name: &str| !name.trim().is_empty()).parse(input)
}

/// `Name: value`; the single space after the colon is not part of the value.
fn header_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, name) = header_name(input)?;
    let (header_value, _) = (char(':'), opt(char(' '))).parse(input)?;
    Ok(("", (name.trim(), header_value)))
}

/// A line continuing the previous value: one leading space, then the text.
fn continuation_line(input: &str) -> IResult<&str, &str> {
    preceded(char(' '), rest).parse(input)
}

/// Parses manifest text into its main-section headers.
///
/// Lines that are neither a header nor a continuation are skipped.
#[must_use]
pub fn parse_manifest(text: &str) -> ManifestHeaders {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut headers = ManifestHeaders::default();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        if line.is_empty() {
            break;
        }
        if let Ok((_, continuation)) = continuation_line(line) {
            if let Some((_, value)) = current.as_mut() {
                value.push_str(continuation);
            } else {
                tracing::warn!(line, "manifest continuation line without a header");
            }
            continue;
        }
        if let Some((name, value)) = current.take() {
            headers.insert(&name, value);
        }
        match header_line(line) {
            Ok((_, (name, value))) => current = Some((name.to_owned(), value.to_owned())),
            Err(_) => tracing::warn!(line, "skipping malformed manifest line"),
        }
    }

    if let Some((name, value)) = current {
        headers.insert(&name, value);
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_simple_headers() {
        let headers = parse_manifest(
            "Manifest-Version: 1.0\r\nBundle-SymbolicName: org.example.core\r\nBundle-Version: 1.2.0\r\n",
        );
        assert_eq!(headers.get("Manifest-Version"), Some("1.0"));
        assert_eq!(headers.get("Bundle-SymbolicName"), Some("org.example.core"));
        assert_eq!(headers.get("Bundle-Version"), Some("1.2.0"));
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let headers = parse_manifest("bundle-symbolicname: core\n");
        assert_eq!(headers.get("Bundle-SymbolicName"), Some("core"));
    }

    #[test]
    fn continuation_lines_are_joined_without_leading_space() {
        let headers = parse_manifest(
            "Require-Bundle: org.eclipse.core.runtime,\n org.eclipse.ui;bundle-vers\n ion=\"3.0.0\"\nBundle-Version: 1.0\n",
        );
        assert_eq!(
            headers.get("Require-Bundle"),
            Some("org.eclipse.core.runtime,org.eclipse.ui;bundle-version=\"3.0.0\"")
        );
        assert_eq!(headers.get("Bundle-Version"), Some("1.0"));
    }

    #[test]
    fn main_section_ends_at_blank_line() {
        let headers = parse_manifest("Bundle-Version: 1.0\n\nName: some/entry\nBundle-Version: 9.9\n");
        assert_eq!(headers.get("Bundle-Version"), Some("1.0"));
        assert!(headers.get("Name").is_none());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let headers = parse_manifest("not a header\nBundle-Version: 2.0\n");
        assert!(headers.get("not a header").is_none());
        assert_eq!(headers.get("Bundle-Version"), Some("2.0"));
    }

    #[test]
    fn empty_text_has_no_headers() {
        assert!(parse_manifest("").is_empty());
    }

    #[test]
    fn blank_header_name_is_malformed() {
        let headers = parse_manifest(": orphan\nBundle-Version: 3.0\n");
        assert_eq!(headers.get(""), None);
        assert_eq!(headers.get("Bundle-Version"), Some("3.0"));
    }

    #[test]
    fn value_keeps_spaces_beyond_the_first() {
        let headers = parse_manifest("Bundle-Name:   padded\nBundle-Vendor:tight\n");
        assert_eq!(headers.get("Bundle-Name"), Some("  padded"));
        assert_eq!(headers.get("Bundle-Vendor"), Some("tight"));
    }
}
