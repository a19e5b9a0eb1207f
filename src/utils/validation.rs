use crate::adapters::page::parse_selector;
use crate::utils::error::{CakeError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CakeError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_selector(field_name: &str, selector: &str) -> Result<()> {
    parse_selector(selector)
        .map(|_| ())
        .map_err(|e| CakeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: selector.to_string(),
            reason: e.to_string(),
        })
}

/// Element ids are selectors without the leading `#`; they must also be unique.
pub fn validate_element_ids(field_name: &str, ids: &[String]) -> Result<()> {
    let mut seen = HashSet::new();

    for id in ids {
        validate_selector(field_name, &format!("#{}", id))?;
        if !seen.insert(id.as_str()) {
            return Err(CakeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.clone(),
                reason: "Duplicate element id".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.html_path", "./output/index.html").is_ok());
        assert!(validate_path("output.html_path", "").is_err());
        assert!(validate_path("output.html_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_selector() {
        assert!(validate_selector("output.selector", "#output").is_ok());
        assert!(validate_selector("output.selector", "output").is_err());
        assert!(validate_selector("output.selector", "#").is_err());
    }

    #[test]
    fn test_validate_element_ids() {
        let ids = vec!["output".to_string(), "sidebar".to_string()];
        assert!(validate_element_ids("page.elements", &ids).is_ok());

        let duplicated = vec!["output".to_string(), "output".to_string()];
        assert!(validate_element_ids("page.elements", &duplicated).is_err());

        let malformed = vec!["two words".to_string()];
        assert!(validate_element_ids("page.elements", &malformed).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("x".to_string());
        assert_eq!(validate_required_field("f", &present).unwrap(), "x");
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("f", &missing),
            Err(CakeError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("defaults.type", "Sponge").is_ok());
        assert!(validate_non_empty_string("defaults.type", "   ").is_err());
    }
}
