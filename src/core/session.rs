use crate::domain::model::Counter;
use crate::utils::error::Result;
use std::io::Write;

/// Per-run state: the output sink and the greeter's counter.
pub struct Session<W: Write> {
    out: W,
    counter: Counter,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            counter: Counter::new(),
        }
    }

    /// Writes `text` as-is, no newline appended.
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut Counter {
        &mut self.counter
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
