//! Parsing of the request `Cookie` header.
//!
//! The header is treated as untrusted text and as the only source of truth.
//! Pairs are split on `;`, spaces and tabs around each pair are dropped, and
//! the name/value split happens at the first `=`. Nothing is unquoted or decoded:
//! the marker has to appear byte-for-byte.

use crate::marker::SessionMarker;
use crate::tainted::Tainted;

/// One `name=value` pair borrowed from a cookie header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CookiePair<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
}

/// Iterator over the pairs of a cookie header.
///
/// Segments that are blank, lack `=`, or have an empty name are skipped.
#[derive(Debug, Clone)]
pub(crate) struct CookiePairs<'a> {
    segments: std::str::Split<'a, char>,
}

impl<'a> CookiePairs<'a> {
    pub(crate) fn new(header: &'a str) -> Self {
        Self {
            segments: header.split(';'),
        }
    }
}

impl<'a> Iterator for CookiePairs<'a> {
    type Item = CookiePair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for segment in self.segments.by_ref() {
            let segment = segment.trim_matches(is_optional_whitespace);
            let Some((name, value)) = segment.split_once('=') else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            return Some(CookiePair { name, value });
        }
        None
    }
}

/// `OWS` from RFC 7230: only space and horizontal tab. Other Unicode
/// whitespace and CR/LF stay part of the pair.
fn is_optional_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Returns `true` if the header carries the marker pair.
///
/// Stops at the first match; the rest of the header is never looked at.
/// An empty header never matches.
pub(crate) fn contains_marker(header: &Tainted<String>, marker: &SessionMarker) -> bool {
    CookiePairs::new(header.as_inner()).any(|pair| marker.matches(pair.name, pair.value))
}
