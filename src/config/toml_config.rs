use crate::domain::model::{CakeDefaults, CakeSpec};
use crate::utils::error::{CakeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PAGE_TITLE: &str = "Cakes";

/// A bakery file: a default table, page layout, output settings and a batch of cakes.
///
/// Cake tables are kept as loose values so that a wrong field type is
/// reported as `InvalidFieldType` with its position rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BakeryConfig {
    pub defaults: Option<serde_json::Value>,
    pub page: Option<PageConfig>,
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub cakes: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: Option<String>,
    #[serde(default)]
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub selector: Option<String>,
    pub html_path: Option<String>,
}

impl BakeryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CakeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CakeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CakeError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn defaults(&self) -> Result<CakeDefaults> {
        let base = CakeDefaults::default();
        match &self.defaults {
            None => Ok(base),
            Some(value) => {
                let overrides = CakeSpec::from_value(value).map_err(|e| located("defaults", e))?;
                Ok(base.overridden_by(overrides))
            }
        }
    }

    pub fn cake_specs(&self) -> Result<Vec<CakeSpec>> {
        self.cakes
            .iter()
            .enumerate()
            .map(|(i, value)| {
                CakeSpec::from_value(value).map_err(|e| located(&format!("cakes[{}]", i), e))
            })
            .collect()
    }

    pub fn page_title(&self) -> &str {
        self.page
            .as_ref()
            .and_then(|p| p.title.as_deref())
            .unwrap_or(DEFAULT_PAGE_TITLE)
    }

    pub fn page_elements(&self) -> &[String] {
        self.page.as_ref().map(|p| p.elements.as_slice()).unwrap_or(&[])
    }

    pub fn selector(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.selector.as_deref())
    }

    pub fn html_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.html_path.as_deref())
    }

    pub fn validate_config(&self) -> Result<()> {
        let defaults = self.defaults()?;
        validation::validate_non_empty_string("defaults.type", &defaults.r#type)?;

        self.cake_specs()?;

        validation::validate_element_ids("page.elements", self.page_elements())?;

        if let Some(output) = &self.output {
            if let Some(selector) = &output.selector {
                validation::validate_selector("output.selector", selector)?;
            }
            if let Some(path) = &output.html_path {
                validation::validate_path("output.html_path", path)?;
            }
        }

        Ok(())
    }
}

impl Validate for BakeryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

fn located(prefix: &str, error: CakeError) -> CakeError {
    match error {
        CakeError::InvalidFieldType {
            field,
            expected,
            found,
        } => CakeError::InvalidFieldType {
            field: format!("{}.{}", prefix, field),
            expected,
            found,
        },
        other => other,
    }
}
