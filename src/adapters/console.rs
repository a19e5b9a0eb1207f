use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Line-oriented sink: one line per record, appended to the writer.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
    records: usize,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, records: 0 }
    }

    pub fn records_written(&self) -> usize {
        self.records
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write_record(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        self.records += 1;
        Ok(())
    }
}
