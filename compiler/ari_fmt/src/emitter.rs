//! Output Emitter
//!
//! The printer produces text in fragments; an [`Emitter`] decides where the
//! fragments go.

use std::fmt;

/// Sink for rendered text fragments.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);
}

/// Collects fragments into a `String`.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the emitter and return what was written.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Forwards fragments to a formatter, remembering the first write error.
pub(crate) struct FormatterEmitter<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    result: fmt::Result,
}

impl<'a, 'f> FormatterEmitter<'a, 'f> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'f>) -> Self {
        FormatterEmitter { f, result: Ok(()) }
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.result
    }
}

impl Emitter for FormatterEmitter<'_, '_> {
    fn emit(&mut self, text: &str) {
        if self.result.is_ok() {
            self.result = self.f.write_str(text);
        }
    }
}
