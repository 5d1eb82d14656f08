use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

// Absolute Typst length, e.g. `11pt` or `3.5mm`
static TEXT_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)?(pt|mm|cm|in)$").expect("Static regex did not compile.")
});

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub text: TextConfig,
    pub headings: HeadingConfig,
    pub lists: ListConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub numbers: bool,
    pub paper: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            numbers: false,
            paper: "a4".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Written into the Typst source as-is, so it is checked on load.
    pub size: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            size: "11pt".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadingConfig {
    pub level: u8,
    pub keep_with_next: bool,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            level: 2,
            keep_with_next: true,
        }
    }
}

impl HeadingConfig {
    /// Heading depth clamped to what Typst can express.
    pub fn depth(&self) -> usize {
        usize::from(self.level.clamp(1, 6))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub keep_together_max: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            keep_together_max: 5,
        }
    }
}

impl Config {
    /// Config bundled into the binary. Validated by the build script.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled default if it
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        if !TEXT_SIZE.is_match(&config.text.size) {
            return Err(Error::InvalidConfig {
                path: path.to_path_buf(),
                message: format!(
                    "text.size must be a length like \"11pt\", got {:?}",
                    config.text.size
                ),
            });
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
