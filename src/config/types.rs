// Configuration type definitions

use serde::Deserialize;

/// Shell configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// String printed before each read
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: default_prompt(),
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Minimum column width for rendered counts
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_width() -> usize {
    8
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            width: default_width(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
