use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Upper bound on loop iterations accepted from any config source.
pub const MAX_ITERATIONS: usize = 1_000_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub script: Option<ScriptSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptSection {
    pub iterations: Option<usize>,
    pub message: Option<String>,
    pub rename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub filter: Option<String>,
    pub json: Option<bool>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| {
            FixtureError::ConfigReadError {
                path: path.as_ref().display().to_string(),
                source,
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HOLDER_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.logging.as_ref()?.filter.as_deref()
    }

    pub fn log_json(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(script) = &self.script {
            if let Some(iterations) = script.iterations {
                validate_range("script.iterations", iterations, 0, MAX_ITERATIONS)?;
            }
            if let Some(rename) = &script.rename {
                validate_non_empty_string("script.rename", rename)?;
            }
        }
        if let Some(filter) = self.log_filter() {
            validate_non_empty_string("logging.filter", filter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[script]
iterations = 3
message = "Hello!\n"
rename = "Noa"

[logging]
filter = "cfunctions=trace"
json = true
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        let script = config.script.as_ref().unwrap();
        assert_eq!(script.iterations, Some(3));
        assert_eq!(script.message.as_deref(), Some("Hello!\n"));
        assert_eq!(script.rename.as_deref(), Some("Noa"));
        assert_eq!(config.log_filter(), Some("cfunctions=trace"));
        assert!(config.log_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.script.is_none());
        assert!(config.log_filter().is_none());
        assert!(!config.log_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = FileConfig::from_toml_str("[script]\niterations = 2000000\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(FixtureError::InvalidConfigValueError { .. })
        ));

        let config = FileConfig::from_toml_str("[script]\nrename = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = FileConfig::from_toml_str("[script\niterations = ");
        assert!(matches!(result, Err(FixtureError::ConfigParseError(_))));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CFUNCTIONS_TEST_RENAME", "Tamar");
        let config =
            FileConfig::from_toml_str("[script]\nrename = \"${CFUNCTIONS_TEST_RENAME}\"\n")
                .unwrap();
        assert_eq!(
            config.script.unwrap().rename.as_deref(),
            Some("Tamar")
        );

        let config =
            FileConfig::from_toml_str("[script]\nrename = \"${CFUNCTIONS_TEST_UNSET_VAR}\"\n")
                .unwrap();
        assert_eq!(
            config.script.unwrap().rename.as_deref(),
            Some("${CFUNCTIONS_TEST_UNSET_VAR}")
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[script]\niterations = 7").unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.script.unwrap().iterations, Some(7));
    }

    #[test]
    fn test_missing_file_is_config_read_error() {
        let result = FileConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(
            result,
            Err(FixtureError::ConfigReadError { ref path, .. }) if path == "/definitely/not/here.toml"
        ));
    }
}
