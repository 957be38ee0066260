use crate::config::toml_config::FileConfig;
use crate::config::ScriptConfig;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cfunctions")]
#[command(about = "Runs the callback dispatch fixture and prints its output")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of loop iterations
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Text passed to print_stuff on every iteration
    #[arg(long)]
    pub message: Option<String>,

    /// Rename the holder through its setter before reading it back
    #[arg(long)]
    pub rename: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併設定：命令列 > 設定檔 > 預設值
    pub fn resolve(&self, file: &FileConfig) -> ScriptConfig {
        let mut config = ScriptConfig::default().with_file(file);
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(message) = &self.message {
            config.message = message.clone();
        }
        if self.rename.is_some() {
            config.rename = self.rename.clone();
        }
        config
    }
}
