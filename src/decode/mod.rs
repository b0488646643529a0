pub(crate) mod parser;
pub mod scan;

use crate::arena::{Arena, NodeId};
use crate::{ParseOptions, Result};

use parser::Parser;

/// Root of a successful parse and how many source bytes it spans.
///
/// Bytes after `consumed` are left alone; callers that want a single
/// document per buffer check the remainder themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    pub root: NodeId,
    pub consumed: usize,
}

/// Parses one value from the start of `source` into `arena`.
///
/// On failure the arena is rolled back to the state it had on entry.
pub fn parse<'src>(
    source: &'src [u8],
    arena: &mut Arena<'src>,
    options: &ParseOptions,
) -> Result<Parsed> {
    let mark = arena.checkpoint();
    let result = {
        let mut parser = Parser::new(source, arena, options);
        parser.parse_value().map(|root| Parsed {
            root,
            consumed: parser.position(),
        })
    };
    if result.is_err() {
        arena.rollback(mark);
    }
    result
}

pub fn parse_str<'src>(
    source: &'src str,
    arena: &mut Arena<'src>,
    options: &ParseOptions,
) -> Result<Parsed> {
    parse(source.as_bytes(), arena, options)
}

pub fn parse_with_defaults<'src>(source: &'src [u8], arena: &mut Arena<'src>) -> Result<Parsed> {
    parse(source, arena, &ParseOptions::default())
}
