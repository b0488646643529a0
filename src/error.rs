use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Overflow,
    OutOfMemory,
    DepthLimit,
}

/// A parse failure. `Display` renders only the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte offset into the source where the failure was detected.
    pub offset: usize,
}

impl Error {
    pub fn syntax(message: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            offset,
        }
    }

    pub fn overflow(offset: usize) -> Self {
        Self {
            kind: ErrorKind::Overflow,
            message: "Overflow".to_string(),
            offset,
        }
    }

    pub fn out_of_memory(offset: usize) -> Self {
        Self {
            kind: ErrorKind::OutOfMemory,
            message: "Out of arena memory".to_string(),
            offset,
        }
    }

    pub fn depth_limit(max_depth: usize, offset: usize) -> Self {
        Self {
            kind: ErrorKind::DepthLimit,
            message: format!("Nesting deeper than {max_depth} levels"),
            offset,
        }
    }
}
