use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::core::{LoadOptions, OverlayOptions, overlay::DEFAULT_COLUMN_PREFIX};

pub const CONFIG_FILE_NAME: &str = ".texttablerc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Prefix in front of `textId` and language tags in overlay headers.
    #[serde(default = "default_column_prefix")]
    pub column_prefix: String,
    /// Overlay cell delimiter; a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Overlay text encoding label (WHATWG), e.g. `utf-8` or `windows-1251`.
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Index of the first appended "extra" row in the JSON table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_extra_row: Option<usize>,
    /// Only list missing ids for languages with more entries than this.
    #[serde(default = "default_missing_report_threshold")]
    pub missing_report_threshold: usize,
    /// Where merged and exported tables are written.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_column_prefix() -> String {
    DEFAULT_COLUMN_PREFIX.to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_missing_report_threshold() -> usize {
    10
}

fn default_output() -> String {
    "outputtexttable.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_prefix: default_column_prefix(),
            delimiter: default_delimiter(),
            encoding: default_encoding(),
            first_extra_row: None,
            missing_report_threshold: default_missing_report_threshold(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the delimiter is not one ASCII character or the
    /// encoding label is unknown.
    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        self.text_encoding()?;
        Ok(())
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        parse_delimiter(&self.delimiter)
    }

    pub fn text_encoding(&self) -> Result<&'static Encoding> {
        Encoding::for_label(self.encoding.trim().as_bytes())
            .with_context(|| format!("Unknown text encoding in 'encoding': \"{}\"", self.encoding))
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            first_extra_row: self.first_extra_row,
        }
    }

    pub fn overlay_options(&self) -> Result<OverlayOptions> {
        Ok(OverlayOptions {
            delimiter: self.delimiter_byte()?,
            encoding: self.text_encoding()?,
            column_prefix: self.column_prefix.clone(),
        })
    }
}

/// Accepts a single ASCII character, or `\t`/`tab` for tab-separated files.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    if matches!(value, "\\t" | "tab") {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => bail!(
            "Invalid delimiter \"{}\": expected a single ASCII character",
            value
        ),
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
