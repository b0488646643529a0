//! Arena-backed JSON documents with structural comparison and pattern
//! unpacking.
//!
//! ```
//! use ejson::{Arena, MatchOutcome, ParseOptions};
//!
//! let source = br#"[97.24, true, {"name": false, "pass": "HelloKitty"}]"#;
//! let mut arena = Arena::default();
//! let parsed = ejson::parse(source, &mut arena, &ParseOptions::default()).unwrap();
//! let root = arena.value(parsed.root);
//!
//! match ejson::match_and_unpack(root, "[$n, true, {'name': $b}]") {
//!     MatchOutcome::Match(captures) => {
//!         assert_eq!(captures[0].as_i64(), Some(97));
//!         assert_eq!(captures[1].as_bool(), Some(false));
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! };
//! ```

pub mod arena;
pub mod compare;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod num;
pub mod options;
pub mod pattern;
mod ser;
pub mod types;

pub use crate::arena::{Arena, Checkpoint, NodeId, NodeKind};
pub use crate::compare::equal;
pub use crate::decode::{parse, parse_str, parse_with_defaults, Parsed};
pub use crate::encode::{to_string, to_vec, write_to_slice};
pub use crate::error::{Error, ErrorKind};
pub use crate::num::Number;
pub use crate::options::{MatchOptions, ParseOptions};
pub use crate::pattern::{match_and_unpack, match_and_unpack_with, Captures, MatchOutcome};
pub use crate::types::{Entries, Entry, ValueRef};

pub type Result<T> = std::result::Result<T, Error>;
