use crate::arena::{Arena, NodeId, NodeKind};
use crate::compare::equal;
use crate::decode::{self, scan::skip_spaces};
use crate::types::ValueRef;
use crate::{MatchOptions, ParseOptions};

use super::{Captures, MatchOutcome};

/// Why a sub-pattern failed. Propagated with `?` up to `Matcher::run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mismatch {
    NoMatch,
    BadFormat(String),
}

type Step<T = ()> = Result<T, Mismatch>;

/// Walks one pattern against one tree, depth first, left to right.
///
/// Literals and object keys in the pattern are decoded by the JSON parser
/// into `scratch`, which is rolled back after every use.
pub(crate) struct Matcher<'p, 'a, 'src> {
    fmt: &'p [u8],
    cur: usize,
    scratch: Arena<'p>,
    literal_options: ParseOptions,
    max_depth: usize,
    depth: usize,
    captures: Captures<'a, 'src>,
}

impl<'p, 'a, 'src> Matcher<'p, 'a, 'src> {
    pub(crate) fn new(fmt: &'p [u8], options: &MatchOptions) -> Self {
        Self {
            fmt,
            cur: 0,
            scratch: Arena::new(options.scratch_capacity),
            literal_options: options.literal_options(),
            max_depth: options.max_depth,
            depth: 0,
            captures: Captures::new(),
        }
    }

    pub(crate) fn run(mut self, value: ValueRef<'a, 'src>) -> MatchOutcome<'a, 'src> {
        let result = self.match_value(value).and_then(|()| self.expect_end());
        match result {
            Ok(()) => MatchOutcome::Match(self.captures),
            Err(Mismatch::NoMatch) => MatchOutcome::NoMatch,
            Err(Mismatch::BadFormat(message)) => MatchOutcome::BadFormat(message),
        }
    }

    fn bad_format(&self, message: &str) -> Mismatch {
        Mismatch::BadFormat(format!("{message} at offset {}", self.cur))
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.fmt.get(self.cur).copied()
    }

    #[inline]
    fn skip_spaces(&mut self) {
        self.cur = skip_spaces(self.fmt, self.cur);
    }

    fn require(&self) -> Step<u8> {
        self.peek()
            .ok_or_else(|| self.bad_format("Unexpected end of pattern"))
    }

    fn enter(&mut self) -> Step {
        if self.depth >= self.max_depth {
            return Err(self.bad_format(&format!(
                "Pattern nesting deeper than {} levels",
                self.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expect_end(&mut self) -> Step {
        self.skip_spaces();
        if self.cur < self.fmt.len() {
            return Err(self.bad_format("Unexpected trailing characters in pattern"));
        }
        Ok(())
    }

    fn match_value(&mut self, value: ValueRef<'a, 'src>) -> Step {
        self.skip_spaces();
        match self.require()? {
            b'?' => {
                self.cur += 1;
                Ok(())
            }
            b'$' => self.unpack(value),
            c => match value.kind() {
                NodeKind::Array => self.match_array(value),
                NodeKind::Object => self.match_object(value),
                _ if c == b'[' || c == b'{' => {
                    self.skip_pattern()?;
                    Err(Mismatch::NoMatch)
                }
                _ => self.match_literal(value),
            },
        }
    }

    /// Reads the type letter after `$`.
    fn capture_kind(&mut self) -> Step<NodeKind> {
        self.cur += 1; // $
        let letter = self.require()?;
        let Some(kind) = NodeKind::from_type_letter(letter) else {
            return Err(self.bad_format(&format!(
                "Unknown capture type '{}'",
                letter.escape_ascii()
            )));
        };
        self.cur += 1;
        Ok(kind)
    }

    fn unpack(&mut self, value: ValueRef<'a, 'src>) -> Step {
        let expected = self.capture_kind()?;
        if value.kind() != expected {
            return Err(Mismatch::NoMatch);
        }
        self.captures.push(value);
        Ok(())
    }

    /// One pattern element per actual element. Which side runs out first
    /// decides the outcome: a well-placed `]` or `,` that shows a length
    /// difference is a `NoMatch`, any other separator is a `BadFormat`.
    fn match_array(&mut self, value: ValueRef<'a, 'src>) -> Step {
        if self.peek() != Some(b'[') {
            return Err(Mismatch::NoMatch);
        }
        self.enter()?;
        self.cur += 1;

        if value.is_empty() {
            self.skip_spaces();
            if self.require()? != b']' {
                return Err(Mismatch::NoMatch);
            }
            self.cur += 1;
            self.leave();
            return Ok(());
        }

        for entry in value.entries() {
            self.skip_spaces();
            if self.require()? == b']' {
                return Err(Mismatch::NoMatch);
            }
            self.match_value(entry.value)?;

            self.skip_spaces();
            match (entry.is_last(), self.require()?) {
                (false, b',') | (true, b']') => self.cur += 1,
                (false, b']') | (true, b',') => return Err(Mismatch::NoMatch),
                (false, _) => return Err(self.bad_format("Expected ',' or ']' in array pattern")),
                (true, _) => return Err(self.bad_format("Expected ']' after last array element")),
            }
        }

        self.leave();
        Ok(())
    }

    /// Keys are looked up by exact bytes; unnamed keys of the actual object
    /// are ignored.
    fn match_object(&mut self, value: ValueRef<'a, 'src>) -> Step {
        if self.peek() != Some(b'{') {
            return Err(Mismatch::NoMatch);
        }
        self.enter()?;
        self.cur += 1;

        self.skip_spaces();
        if self.require()? == b'}' {
            self.cur += 1;
            self.leave();
            return Ok(());
        }

        loop {
            self.skip_spaces();
            let key = self.decode_key()?;
            let child = value.get(key).ok_or(Mismatch::NoMatch)?;

            self.skip_spaces();
            if self.peek() != Some(b':') {
                return Err(self.bad_format("Expected ':' after key in object pattern"));
            }
            self.cur += 1;

            self.match_value(child)?;

            self.skip_spaces();
            match self.require()? {
                b'}' => {
                    self.cur += 1;
                    break;
                }
                b',' => self.cur += 1,
                _ => return Err(self.bad_format("Expected ',' or '}' in object pattern")),
            }
        }

        self.leave();
        Ok(())
    }

    /// Checks one sub-pattern for syntax and moves past it without
    /// matching. Used when a composite pattern meets a scalar value.
    fn skip_pattern(&mut self) -> Step {
        self.skip_spaces();
        match self.require()? {
            b'?' => {
                self.cur += 1;
                Ok(())
            }
            b'$' => self.capture_kind().map(|_| ()),
            b'[' => {
                self.enter()?;
                self.cur += 1;
                self.skip_spaces();
                if self.require()? == b']' {
                    self.cur += 1;
                } else {
                    loop {
                        self.skip_pattern()?;
                        self.skip_spaces();
                        match self.require()? {
                            b',' => self.cur += 1,
                            b']' => {
                                self.cur += 1;
                                break;
                            }
                            _ => return Err(self.bad_format("Expected ',' or ']' in array pattern")),
                        }
                    }
                }
                self.leave();
                Ok(())
            }
            b'{' => {
                self.enter()?;
                self.cur += 1;
                self.skip_spaces();
                if self.require()? == b'}' {
                    self.cur += 1;
                } else {
                    loop {
                        self.skip_spaces();
                        self.decode_key()?;
                        self.skip_spaces();
                        if self.peek() != Some(b':') {
                            return Err(self.bad_format("Expected ':' after key in object pattern"));
                        }
                        self.cur += 1;
                        self.skip_pattern()?;
                        self.skip_spaces();
                        match self.require()? {
                            b',' => self.cur += 1,
                            b'}' => {
                                self.cur += 1;
                                break;
                            }
                            _ => return Err(self.bad_format("Expected ',' or '}' in object pattern")),
                        }
                    }
                }
                self.leave();
                Ok(())
            }
            _ => {
                let mark = self.scratch.checkpoint();
                self.parse_literal()?;
                self.scratch.rollback(mark);
                Ok(())
            }
        }
    }

    fn match_literal(&mut self, value: ValueRef<'a, 'src>) -> Step {
        let mark = self.scratch.checkpoint();
        let id = self.parse_literal()?;
        let same = equal(value, self.scratch.value(id));
        self.scratch.rollback(mark);
        if same {
            Ok(())
        } else {
            Err(Mismatch::NoMatch)
        }
    }

    fn decode_key(&mut self) -> Step<&'p [u8]> {
        let mark = self.scratch.checkpoint();
        let id = self.parse_literal()?;
        let key = self.scratch.value(id).as_bytes();
        self.scratch.rollback(mark);
        key.ok_or_else(|| self.bad_format("Object pattern key must be a string"))
    }

    /// Decodes the JSON literal starting at the cursor and moves past it.
    fn parse_literal(&mut self) -> Step<NodeId> {
        let fmt = self.fmt;
        match decode::parse(&fmt[self.cur..], &mut self.scratch, &self.literal_options) {
            Ok(parsed) => {
                self.cur += parsed.consumed;
                Ok(parsed.root)
            }
            Err(err) => Err(Mismatch::BadFormat(format!(
                "Invalid literal at offset {}: {err}",
                self.cur + err.offset
            ))),
        }
    }
}
