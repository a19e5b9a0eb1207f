use crate::utils::error::Result;

/// A destination for formatted text. Each call writes one record.
pub trait OutputSink {
    fn write_record(&mut self, text: &str) -> Result<()>;
}

