use memchr::memchr;
use smallvec::SmallVec;

use crate::arena::{Arena, Node, NodeData, NodeId, NodeKind};
use crate::constants::is_keyword;
use crate::num::number::{push_int_digit, FloatAccumulator};
use crate::num::Number;
use crate::{Error, ParseOptions, Result};

use super::scan::{is_alpha, is_digit, is_printable, scan_while, skip_spaces};

type ChildBuf = SmallVec<[NodeId; 16]>;

/// Recursive-descent reader building nodes into an arena.
///
/// The parser never rolls the arena back itself; `decode::parse` owns the
/// checkpoint so that a failure anywhere below leaves nothing behind.
pub(crate) struct Parser<'a, 'src> {
    arena: &'a mut Arena<'src>,
    src: &'src [u8],
    idx: usize,
    options: ParseOptions,
    depth: usize,
}

impl<'a, 'src> Parser<'a, 'src> {
    pub(crate) fn new(src: &'src [u8], arena: &'a mut Arena<'src>, options: &ParseOptions) -> Self {
        Self {
            arena,
            src,
            idx: 0,
            options: *options,
            depth: 0,
        }
    }

    /// Bytes consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.idx
    }

    pub(crate) fn parse_value(&mut self) -> Result<NodeId> {
        self.skip_spaces();
        let Some(c) = self.peek() else {
            return Err(self.error("Missing value"));
        };
        match c {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'0'..=b'9' => self.parse_number(),
            _ if self.is_quote(c) => self.parse_string(),
            _ => self.parse_keyword(),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.src.get(self.idx).copied()
    }

    #[inline]
    fn step(&mut self) {
        self.idx += 1;
    }

    #[inline]
    fn skip_spaces(&mut self) {
        self.idx = skip_spaces(self.src, self.idx);
    }

    #[inline]
    fn is_quote(&self, c: u8) -> bool {
        c == b'"' || (c == b'\'' && self.options.allow_single_quoted_strings)
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::syntax(message, self.idx)
    }

    fn unexpected(&self, c: u8, expected: &str, context: &str) -> Error {
        if is_printable(c) {
            self.error(format!("{expected} (character '{}' instead)", c as char))
        } else {
            self.error(format!("Invalid byte {c:#04x} {context}"))
        }
    }

    fn alloc(&mut self, node: Node<'src>) -> Result<NodeId> {
        self.arena.alloc_node(node, self.idx)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::depth_limit(self.options.max_depth, self.idx));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Reads a quoted run up to the first repeat of the opening quote.
    fn parse_string_bytes(&mut self) -> Result<&'src [u8]> {
        let quote = self.src[self.idx];
        self.step();
        let start = self.idx;
        match memchr(quote, &self.src[start..]) {
            Some(len) => {
                self.idx = start + len + 1;
                Ok(&self.src[start..start + len])
            }
            None => {
                self.idx = self.src.len();
                Err(self.error(if quote == b'"' {
                    "No closing '\"' after string"
                } else {
                    "No closing '\\'' after string"
                }))
            }
        }
    }

    fn parse_string(&mut self) -> Result<NodeId> {
        let bytes = self.parse_string_bytes()?;
        self.alloc(Node::scalar(NodeKind::String, NodeData::String(bytes)))
    }

    fn parse_object(&mut self) -> Result<NodeId> {
        self.enter()?;
        self.step(); // {

        self.skip_spaces();
        let Some(c) = self.peek() else {
            return Err(self.error("Source end in object"));
        };
        let mut children = ChildBuf::new();
        if c == b'}' {
            self.step();
        } else {
            loop {
                let c = self.src[self.idx];
                if !self.is_quote(c) {
                    return Err(self.unexpected(c, "Missing key", "in object"));
                }
                let key = self.parse_string_bytes()?;

                self.skip_spaces();
                let Some(c) = self.peek() else {
                    return Err(self.error("Source end in object (after key)"));
                };
                if c != b':' {
                    return Err(self.unexpected(c, "Missing ':' after key", "in object (after key)"));
                }
                self.step();

                let child = self.parse_value()?;
                self.arena.set_key(child, key);
                children.push(child);

                self.skip_spaces();
                let Some(c) = self.peek() else {
                    return Err(self.error("Source end in object (after value)"));
                };
                if c == b'}' {
                    self.step();
                    break;
                }
                if c != b',' {
                    return Err(self.unexpected(
                        c,
                        "Missing ',' or '}' after value",
                        "in object (after value)",
                    ));
                }
                self.step();

                self.skip_spaces();
                if self.peek().is_none() {
                    return Err(self.error("Source end in object (after ',')"));
                }
            }
        }

        self.leave();
        let span = self.arena.alloc_children(&children, self.idx)?;
        self.alloc(Node::composite(NodeKind::Object, span))
    }

    fn parse_array(&mut self) -> Result<NodeId> {
        self.enter()?;
        self.step(); // [

        self.skip_spaces();
        let Some(c) = self.peek() else {
            return Err(self.error("Source end in array"));
        };
        let mut children = ChildBuf::new();
        if c == b']' {
            self.step();
        } else {
            loop {
                children.push(self.parse_value()?);

                self.skip_spaces();
                let Some(c) = self.peek() else {
                    return Err(self.error("Source end in array (after value)"));
                };
                if c == b']' {
                    self.step();
                    break;
                }
                if c != b',' {
                    return Err(self.unexpected(
                        c,
                        "Missing ',' or ']' after value",
                        "in array (after value)",
                    ));
                }
                self.step();

                self.skip_spaces();
                if self.peek().is_none() {
                    return Err(self.error("Source end in array (after ',')"));
                }
            }
        }

        self.leave();
        let span = self.arena.alloc_children(&children, self.idx)?;
        self.alloc(Node::composite(NodeKind::Array, span))
    }

    fn parse_number(&mut self) -> Result<NodeId> {
        let int_end = scan_while(self.src, self.idx, is_digit);
        if self.src.get(int_end) == Some(&b'.') {
            self.parse_float()
        } else {
            self.parse_int()
        }
    }

    fn parse_int(&mut self) -> Result<NodeId> {
        let mut value = 0i64;
        while let Some(c) = self.peek().filter(|c| is_digit(*c)) {
            value = push_int_digit(value, c - b'0').ok_or_else(|| Error::overflow(self.idx))?;
            self.step();
        }
        let number = Number::from_i64(value);
        self.alloc(Node::scalar(NodeKind::Number, NodeData::Number(number)))
    }

    fn parse_float(&mut self) -> Result<NodeId> {
        let mut acc = FloatAccumulator::new();
        while let Some(c) = self.peek().filter(|c| is_digit(*c)) {
            acc.push_int_digit(c - b'0');
            self.step();
        }
        self.step(); // .
        while let Some(c) = self.peek().filter(|c| is_digit(*c)) {
            acc.push_fraction_digit(c - b'0');
            self.step();
        }
        let number = Number::from_f64(acc.finish());
        self.alloc(Node::scalar(NodeKind::Number, NodeData::Number(number)))
    }

    fn parse_keyword(&mut self) -> Result<NodeId> {
        let c = self.src[self.idx];
        if !is_alpha(c) {
            return Err(if is_printable(c) {
                self.error(format!("Unexpected character '{}'", c as char))
            } else {
                self.error(format!("Invalid byte {c:#04x}"))
            });
        }

        let start = self.idx;
        self.idx = scan_while(self.src, start, is_alpha);
        let token = &self.src[start..self.idx];
        if !is_keyword(token) {
            return Err(self.error(format!(
                "Invalid token '{}'",
                String::from_utf8_lossy(token)
            )));
        }

        let node = match token {
            b"null" => Node::scalar(NodeKind::Null, NodeData::None),
            b"true" => Node::scalar(NodeKind::Boolean, NodeData::Bool(true)),
            _ => Node::scalar(NodeKind::Boolean, NodeData::Bool(false)),
        };
        self.alloc(node)
    }
}
