//! Matching a document against a compact pattern while unpacking values.
//!
//! ```text
//! pattern := '?'                          any value, nothing captured
//!          | '$' ('a'|'o'|'s'|'n'|'b')   capture a value of that type
//!          | '[' pattern (',' pattern)* ']'
//!          | '{' key ':' pattern (',' key ':' pattern)* '}'
//!          | literal                      compared structurally
//! ```
//!
//! Keys and literals are JSON values; single-quoted strings are accepted.
//! Array patterns must name every element, object patterns may name a
//! subset of the keys.

mod matcher;

use smallvec::SmallVec;

use crate::types::ValueRef;
use crate::MatchOptions;

use matcher::Matcher;

/// Captured values in pattern order, borrowed from the matched tree.
pub type Captures<'a, 'src> = SmallVec<[ValueRef<'a, 'src>; 8]>;

/// Outcome of a match. A malformed pattern (`BadFormat`) is reported apart
/// from data that does not have the expected shape (`NoMatch`).
#[derive(Debug, Clone)]
pub enum MatchOutcome<'a, 'src> {
    Match(Captures<'a, 'src>),
    NoMatch,
    BadFormat(String),
}

impl<'a, 'src> MatchOutcome<'a, 'src> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Match(_))
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchOutcome::NoMatch)
    }

    pub fn is_bad_format(&self) -> bool {
        matches!(self, MatchOutcome::BadFormat(_))
    }

    pub fn captures(&self) -> Option<&[ValueRef<'a, 'src>]> {
        match self {
            MatchOutcome::Match(captures) => Some(captures.as_slice()),
            _ => None,
        }
    }

    pub fn into_captures(self) -> Option<Captures<'a, 'src>> {
        match self {
            MatchOutcome::Match(captures) => Some(captures),
            _ => None,
        }
    }
}

pub fn match_and_unpack<'a, 'src>(
    value: ValueRef<'a, 'src>,
    pattern: &str,
) -> MatchOutcome<'a, 'src> {
    match_and_unpack_with(value, pattern, &MatchOptions::default())
}

pub fn match_and_unpack_with<'a, 'src>(
    value: ValueRef<'a, 'src>,
    pattern: &str,
    options: &MatchOptions,
) -> MatchOutcome<'a, 'src> {
    Matcher::new(pattern.as_bytes(), options).run(value)
}
