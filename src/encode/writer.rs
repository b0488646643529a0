use std::fmt;

/// Destination for serialized bytes.
pub trait Sink {
    fn append(&mut self, bytes: &[u8]);
}

impl Sink for Vec<u8> {
    fn append(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Truncating writer over a caller-owned buffer.
///
/// Copies as many bytes as fit and keeps counting past the end, so
/// `finish()` always reports the full length the value needs.
pub struct BoundedWriter<'a> {
    dst: &'a mut [u8],
    num: usize,
}

impl<'a> BoundedWriter<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, num: 0 }
    }

    pub fn is_truncated(&self) -> bool {
        self.num >= self.dst.len()
    }

    /// Writes the NUL terminator: right after the output when it fits,
    /// otherwise over the last byte. An empty buffer is left untouched.
    pub fn finish(self) -> usize {
        let max = self.dst.len();
        if self.num < max {
            self.dst[self.num] = 0;
        } else if max > 0 {
            self.dst[max - 1] = 0;
        }
        self.num
    }
}

impl Sink for BoundedWriter<'_> {
    fn append(&mut self, bytes: &[u8]) {
        let max = self.dst.len();
        if self.num < max {
            let copy = bytes.len().min(max - self.num);
            self.dst[self.num..self.num + copy].copy_from_slice(&bytes[..copy]);
        }
        self.num += bytes.len();
    }
}

/// Forwards to a `fmt::Formatter`, remembering the first failure.
pub(crate) struct FmtSink<'a, 'b> {
    inner: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
}

impl<'a, 'b> FmtSink<'a, 'b> {
    pub(crate) fn new(inner: &'a mut fmt::Formatter<'b>) -> Self {
        Self {
            inner,
            result: Ok(()),
        }
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.result
    }
}

impl Sink for FmtSink<'_, '_> {
    fn append(&mut self, bytes: &[u8]) {
        if self.result.is_err() {
            return;
        }
        self.result = self.inner.write_str(&String::from_utf8_lossy(bytes));
    }
}
