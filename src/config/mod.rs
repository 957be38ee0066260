#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use toml_config::{FileConfig, MAX_ITERATIONS};

pub const DEFAULT_ITERATIONS: usize = 200;
pub const DEFAULT_MESSAGE: &str = "Hey there!!\n";

/// Resolved settings for one run of the driving loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub iterations: usize,
    /// Argument handed to `print_stuff` on every iteration.
    pub message: String,
    /// When set, the holder is renamed through its setter before the getter runs.
    pub rename: Option<String>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            message: DEFAULT_MESSAGE.to_string(),
            rename: None,
        }
    }
}

impl ScriptConfig {
    /// 套用檔案中的 [script] 設定，未設定的欄位保留目前的值
    pub fn with_file(mut self, file: &FileConfig) -> Self {
        if let Some(script) = &file.script {
            if let Some(iterations) = script.iterations {
                self.iterations = iterations;
            }
            if let Some(message) = &script.message {
                self.message = message.clone();
            }
            if script.rename.is_some() {
                self.rename = script.rename.clone();
            }
        }
        self
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        validate_range("iterations", self.iterations, 0, MAX_ITERATIONS)?;
        if let Some(rename) = &self.rename {
            validate_non_empty_string("rename", rename)?;
        }
        Ok(())
    }
}
