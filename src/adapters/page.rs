//! In-memory page document whose elements are addressed by `#id` selectors.
//!
//! Writing to an element replaces its text. The page can be rendered to a
//! small HTML document once printing is done.

use crate::domain::ports::OutputSink;
use crate::utils::error::{CakeError, Result};

/// Splits `#id` into `id`, rejecting anything that is not a plain id selector.
pub fn parse_selector(selector: &str) -> Result<&str> {
    let invalid = |reason: &str| CakeError::InvalidSelector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    };

    let id = selector
        .strip_prefix('#')
        .ok_or_else(|| invalid("only '#id' selectors are supported"))?;

    let mut chars = id.chars();
    match chars.next() {
        None => return Err(invalid("the id after '#' is empty")),
        Some(c) if c.is_ascii_digit() => return Err(invalid("an id cannot start with a digit")),
        Some(_) => {}
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid("ids may only contain letters, digits, '-' and '_'"));
    }

    Ok(id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: String,
    text: String,
}

impl Element {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl OutputSink for Element {
    fn write_record(&mut self, text: &str) -> Result<()> {
        self.text.clear();
        self.text.push_str(text);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    elements: Vec<Element>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_elements<I, S>(title: impl Into<String>, ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut page = Self::new(title);
        for id in ids {
            page.add_element(id.as_ref())?;
        }
        Ok(page)
    }

    /// Adds an empty element. Adding an id that already exists is a no-op.
    pub fn add_element(&mut self, id: &str) -> Result<()> {
        let id = parse_selector(&format!("#{}", id))?.to_string();
        if !self.elements.iter().any(|e| e.id == id) {
            self.elements.push(Element {
                id,
                text: String::new(),
            });
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element_mut(&mut self, selector: &str) -> Result<&mut Element> {
        let id = parse_selector(selector)?;
        self.elements
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CakeError::SinkNotFound {
                selector: selector.to_string(),
            })
    }

    pub fn text_of(&self, selector: &str) -> Result<&str> {
        let id = parse_selector(selector)?;
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(Element::text)
            .ok_or_else(|| CakeError::SinkNotFound {
                selector: selector.to_string(),
            })
    }

    pub fn render_html(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str("</head>\n<body>\n");
        for element in &self.elements {
            html.push_str(&format!(
                "<div id=\"{}\">{}</div>\n",
                element.id,
                escape_html(&element.text)
            ));
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
