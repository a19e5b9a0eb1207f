use crate::adapters::page::Page;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use super::{toml_config::BakeryConfig, CliConfig, DEFAULT_HTML_PATH};
#[cfg(feature = "cli")]
use crate::adapters::{console::ConsoleSink, page::parse_selector, Output};
#[cfg(feature = "cli")]
use crate::core::engine::{BakeReport, BakeryEngine};
#[cfg(feature = "cli")]
use crate::domain::model::CakeSpec;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use std::io::Write;

/// Where the CLI writes the rendered page.
#[derive(Debug, Clone)]
pub struct HtmlFile {
    path: PathBuf,
}

impl HtmlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_page(&self, page: &Page) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, page.render_html())?;
        tracing::debug!("Wrote page to {}", self.path.display());
        Ok(())
    }
}

/// What a CLI run printed, and where the page went if one was used.
#[cfg(feature = "cli")]
#[derive(Debug)]
pub struct CliRun<W: Write> {
    pub report: BakeReport,
    pub output: Output<W>,
    pub page_path: Option<PathBuf>,
}

/// Runs the `cake-shop` command: loads the bakery file, adds the flag-built
/// cake, prints every cake and writes the page when a selector is in play.
///
/// Flags take priority over the file's `[output]` table.
#[cfg(feature = "cli")]
pub fn run_cli<W: Write>(config: &CliConfig, console: ConsoleSink<W>) -> Result<CliRun<W>> {
    config.validate()?;

    let bakery = match &config.config {
        Some(path) => {
            tracing::info!("Loading bakery file from: {}", path);
            let bakery = BakeryConfig::from_file(path)?;
            bakery.validate()?;
            bakery
        }
        None => BakeryConfig::default(),
    };

    let mut specs = bakery.cake_specs()?;
    match config.cake_spec() {
        Some(spec) => specs.push(spec),
        None if specs.is_empty() => specs.push(CakeSpec::new()),
        None => {}
    }

    let selector = config.selector.as_deref().or(bakery.selector());

    let mut output = Output::new(console);
    if let Some(selector) = selector {
        let mut page = Page::with_elements(bakery.page_title(), bakery.page_elements())?;
        page.add_element(parse_selector(selector)?)?;
        output = output.with_page(page);
    }

    let engine = BakeryEngine::new(bakery.defaults()?).announcing(config.bake);
    let report = engine.run(specs, &mut output, selector)?;

    let page_path = match output.page() {
        Some(page) => {
            let path = config
                .html_out
                .as_deref()
                .or(bakery.html_path())
                .unwrap_or(DEFAULT_HTML_PATH);
            let file = HtmlFile::new(path);
            file.write_page(page)?;
            tracing::info!("Page saved to: {}", path);
            Some(file.path().to_path_buf())
        }
        None => None,
    };

    Ok(CliRun {
        report,
        output,
        page_path,
    })
}
