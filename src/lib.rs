pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{console::ConsoleSink, page::Page, Output};
pub use config::{cli::HtmlFile, toml_config::BakeryConfig};
pub use core::{engine::BakeryEngine, printer::CakePrinter};
pub use domain::model::{Cake, CakeDefaults, CakeSpec};
pub use utils::error::{CakeError, Result};
