use crate::utils::error::{MapError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MapError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Every entry must be one of `allowed`, and at least one entry is required.
pub fn validate_allowed_values(field_name: &str, values: &[String], allowed: &[&str]) -> Result<()> {
    if values.is_empty() {
        return Err(MapError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();
    for value in values {
        if !allowed_set.contains(value.as_str()) {
            return Err(MapError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // written so that NaN is rejected as well
    if !(value >= min && value <= max) {
        return Err(MapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("earthquake_endpoint", "https://example.com").is_ok());
        assert!(validate_url("earthquake_endpoint", "http://example.com").is_ok());
        assert!(validate_url("earthquake_endpoint", "").is_err());
        assert!(validate_url("earthquake_endpoint", "invalid-url").is_err());
        assert!(validate_url("earthquake_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_allowed_values() {
        let formats = vec!["html".to_string(), "json".to_string()];
        assert!(validate_allowed_values("formats", &formats, &["html", "json"]).is_ok());

        let invalid = vec!["png".to_string()];
        assert!(validate_allowed_values("formats", &invalid, &["html", "json"]).is_err());
        assert!(validate_allowed_values("formats", &[], &["html", "json"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("map.zoom", 3u8, 0, 19).is_ok());
        assert!(validate_range("map.zoom", 20u8, 0, 19).is_err());
        assert!(validate_range("map.center.lat", f64::NAN, -90.0, 90.0).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }
}
