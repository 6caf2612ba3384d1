use crate::config::types::{FileConfig, HttpConfig, SourceConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &FileConfig) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_http_config(&config.http)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates the remote source configuration
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates HTTP timeouts
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be greater than 0".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if config.name.chars().any(char::is_whitespace) || config.version.chars().any(char::is_whitespace)
    {
        return Err(ConfigError::Validation(format!(
            "user-agent must not contain whitespace, got '{}'",
            config.header_value()
        )));
    }

    Ok(())
}
