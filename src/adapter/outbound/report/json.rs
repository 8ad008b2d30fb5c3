//! Line-delimited JSON output: one object per league.

use std::io::Write;

use crate::domain::Event;
use crate::error::Result;
use crate::port::Report;

pub struct JsonReport<W> {
    out: W,
}

impl<W: Write + Send> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Report for JsonReport<W> {
    fn emit(&mut self, event: &Event) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
