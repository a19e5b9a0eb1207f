pub mod cli;
pub mod toml_config;

use crate::domain::model::CakeSpec;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HTML_PATH: &str = "./output/index.html";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cake-shop")]
#[command(about = "Build cakes and print their details to the console or a page")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with defaults, page elements and a list of cakes")]
    pub config: Option<String>,

    #[arg(long = "type", help = "Cake type, e.g. Sponge")]
    pub cake_type: Option<String>,

    #[arg(long)]
    pub layers: Option<u32>,

    #[arg(long, value_delimiter = ',')]
    pub ingredients: Vec<String>,

    #[arg(long, help = "Print into this page element (e.g. #output) instead of the console")]
    pub selector: Option<String>,

    #[arg(long, help = "Where to write the rendered page")]
    pub html_out: Option<String>,

    #[arg(long, help = "Also print the bake() sentence for each cake")]
    pub bake: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The cake described by flags, if any cake flag was given.
    pub fn cake_spec(&self) -> Option<CakeSpec> {
        let spec = CakeSpec {
            r#type: self.cake_type.clone(),
            layers: self.layers,
            ingredients: (!self.ingredients.is_empty()).then(|| self.ingredients.clone()),
        };
        (!spec.is_empty()).then_some(spec)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(selector) = &self.selector {
            validation::validate_selector("selector", selector)?;
        }
        if let Some(path) = &self.html_out {
            validation::validate_path("html_out", path)?;
        }
        Ok(())
    }
}
