// Adapters layer: concrete output sinks behind the OutputSink port.

pub mod console;
pub mod page;

use crate::domain::ports::OutputSink;
use crate::utils::error::{CakeError, Result};
use console::ConsoleSink;
use page::Page;
use std::io::{self, Write};

/// Routes a print either to the console or to a page element.
#[derive(Debug)]
pub struct Output<W: Write> {
    console: ConsoleSink<W>,
    page: Option<Page>,
}

impl Output<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(ConsoleSink::stdout())
    }
}

impl<W: Write> Output<W> {
    pub fn new(console: ConsoleSink<W>) -> Self {
        Self {
            console,
            page: None,
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    /// `None` selects the console; `Some` selects the matching page element.
    pub fn select(&mut self, selector: Option<&str>) -> Result<&mut dyn OutputSink> {
        let sink: &mut dyn OutputSink = match selector {
            None => &mut self.console,
            Some(selector) => {
                let page = self.page.as_mut().ok_or_else(|| CakeError::SinkNotFound {
                    selector: selector.to_string(),
                })?;
                page.element_mut(selector)?
            }
        };
        Ok(sink)
    }

    pub fn console(&self) -> &ConsoleSink<W> {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut ConsoleSink<W> {
        &mut self.console
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn into_parts(self) -> (ConsoleSink<W>, Option<Page>) {
        (self.console, self.page)
    }
}
