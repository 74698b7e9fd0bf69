//! Output builder for the single-pass rewrite.

use std::collections::TryReserveError;

/// Accumulates output from verbatim spans of `input` and literal insertions.
///
/// Bytes of `input` are not copied until a replacement needs to be spliced in,
/// so an untouched file costs a single copy when [`SpanBuilder::finish`] runs.
pub(crate) struct SpanBuilder<'a> {
    input: &'a [u8],
    output: Vec<u8>,
    start: usize,
}

impl<'a> SpanBuilder<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            output: Vec::with_capacity(input.len()),
            start: 0,
        }
    }

    /// Copies `input[start..end]` verbatim. Empty or inverted ranges copy nothing.
    fn flush(&mut self, end: usize) {
        let end = end.min(self.input.len());
        if end > self.start {
            self.output.extend_from_slice(&self.input[self.start..end]);
        }
    }

    /// Flushes up to `end`, appends `replacement`, and resumes verbatim copying at `resume`.
    pub(crate) fn splice(&mut self, end: usize, replacement: &[u8], resume: usize) {
        self.flush(end);
        self.output.extend_from_slice(replacement);
        self.start = resume;
    }

    /// Like [`SpanBuilder::splice`] with `count` copies of `byte` as the replacement.
    ///
    /// Fails without touching the output if `count` bytes cannot be allocated.
    pub(crate) fn splice_repeated(
        &mut self,
        end: usize,
        byte: u8,
        count: usize,
        resume: usize,
    ) -> Result<(), TryReserveError> {
        let pending = end.min(self.input.len()).saturating_sub(self.start);
        self.output.try_reserve(pending.saturating_add(count))?;
        self.flush(end);
        self.output.resize(self.output.len() + count, byte);
        self.start = resume;
        Ok(())
    }

    pub(crate) fn finish(mut self) -> Vec<u8> {
        self.flush(self.input.len());
        self.output
    }
}
