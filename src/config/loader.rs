//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ClinicExportConfig;
use super::secret::secret_string;
use crate::domain::errors::ClinicError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "CLINIC_EXPORT";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into [`ClinicExportConfig`]
/// 4. Applies environment variable overrides (CLINIC_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`ClinicError::Configuration`] if the file is missing or unreadable,
/// a referenced variable is unset, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use clinic_export::config::loader::load_config;
///
/// let config = load_config("clinic-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClinicExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClinicError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClinicError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ClinicExportConfig = toml::from_str(&contents)
        .map_err(|e| ClinicError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ClinicError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched so documented placeholders
/// don't have to be set.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClinicError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ClinicError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

/// Applies environment variable overrides using the CLINIC_EXPORT_* prefix
///
/// Variables follow the pattern `CLINIC_EXPORT_<SECTION>_<KEY>`,
/// for example `CLINIC_EXPORT_STORE_BASE_URL` or `CLINIC_EXPORT_EXPORT_OUTPUT_DIR`.
fn apply_env_overrides(config: &mut ClinicExportConfig) {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("STORE_BASE_URL") {
        config.store.base_url = val;
    }
    if let Some(val) = env_override("STORE_API_KEY") {
        config.store.api_key = secret_string(val);
    }
    if let Some(timeout) = env_override("STORE_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
        config.store.timeout_seconds = timeout;
    }

    if let Some(val) = env_override("EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }

    if let Some(val) = env_override("NOTIFIER_ENABLED") {
        config.notifier.enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("NOTIFIER_API_KEY") {
        config.notifier.api_key = Some(secret_string(val));
    }
    if let Some(val) = env_override("NOTIFIER_OPERATOR_ADDRESS") {
        config.notifier.operator_address = val;
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
