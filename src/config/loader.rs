//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::QuireConfig;
use crate::domain::errors::QuireError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into QuireConfig
/// 4. Applies environment variable overrides (QUIRE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use quire::config::loader::load_config;
///
/// let config = load_config("quire.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<QuireConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(QuireError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        QuireError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration from `path`, or starts from defaults when the file is absent
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<QuireConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    let mut config = QuireConfig::default();
    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

/// Parses configuration from TOML text
///
/// Performs the same substitution, override and validation steps as [`load_config`].
pub fn parse_config(contents: &str) -> Result<QuireConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: QuireConfig = toml::from_str(&contents)
        .map_err(|e| QuireError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &QuireConfig) -> Result<()> {
    config.validate().map_err(|e| {
        QuireError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| QuireError::Other(format!("Invalid substitution pattern: {}", e)))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if index > 0 {
            result.push('\n');
        }

        if line.trim_start().starts_with('#') {
            result.push_str(line);
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
    }

    if !missing_vars.is_empty() {
        return Err(QuireError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using QUIRE_* prefix
///
/// Environment variables follow the pattern: QUIRE_<SECTION>_<KEY>
/// For example: QUIRE_EXPORT_FORMAT, QUIRE_LOGGING_LOCAL_PATH
fn apply_env_overrides(config: &mut QuireConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("QUIRE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("QUIRE_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("QUIRE_EXPORT_FORMAT") {
        config.export.format = val.to_lowercase();
    }
    if let Ok(val) = std::env::var("QUIRE_EXPORT_ROW_SHAPE") {
        config.export.row_shape = val.to_lowercase();
    }
    if let Ok(val) = std::env::var("QUIRE_EXPORT_CSV_DELIMITER") {
        config.export.csv_delimiter = val;
    }
    if let Ok(val) = std::env::var("QUIRE_EXPORT_SUMMARY_SHEET_TITLE") {
        config.export.summary_sheet_title = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("QUIRE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("QUIRE_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("QUIRE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("QUIRE_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val.to_lowercase();
    }

    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(QuireError::Configuration(format!(
            "{} must be a boolean, got '{}'",
            name, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("QUIRE_LOADER_TEST_DIR", "/srv/out");
        let input = "output_dir = \"${QUIRE_LOADER_TEST_DIR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "output_dir = \"/srv/out\"");
        std::env::remove_var("QUIRE_LOADER_TEST_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("QUIRE_LOADER_MISSING_VAR");
        let input = "output_dir = \"${QUIRE_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("QUIRE_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("QUIRE_LOADER_COMMENTED");
        let input = "# output_dir = \"${QUIRE_LOADER_COMMENTED}\"\nformat = \"csv\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "No").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-quire.toml");
        assert!(matches!(result, Err(QuireError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[export]
output_dir = "out"
format = "json"
row_shape = "raw"
csv_delimiter = ";"
summary_sheet_title = "Overview"

[logging]
local_enabled = false
local_rotation = "hourly"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.export.format, "json");
        assert_eq!(config.export.row_shape, "raw");
        assert_eq!(config.export.csv_delimiter, ";");
        assert_eq!(config.export.summary_sheet_title, "Overview");
        assert_eq!(config.logging.local_rotation, "hourly");
    }

    #[test]
    fn test_parse_config_rejects_invalid_values() {
        let result = parse_config("[export]\nformat = \"xlsx\"\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("export.format"));
    }

    #[test]
    fn test_parse_config_rejects_malformed_toml() {
        assert!(parse_config("[export\nformat = 1").is_err());
    }
}
