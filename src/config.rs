use crate::error::{Result, TagCheckError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for tagcheck.
///
/// Contains the tag vocabularies, the documentation/manifest file names the
/// checks look for, and policy switches.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub vocabulary: VocabularyConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Returns the default list of development-only tags.
fn default_development_tags() -> Vec<String> {
    [
        ":memo:",
        ":fire:",
        ":fire_engine:",
        ":tv:",
        ":lock:",
        ":bath:",
        ":green_heart:",
        ":cat:",
        ":bomb:",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Returns the default list of release tags.
fn default_release_tags() -> Vec<String> {
    [
        ":tada:",
        ":zap:",
        ":sparkles:",
        ":rainbow:",
        ":ambulance:",
        ":heart_eyes:",
        ":cherries:",
        ":book:",
        ":euro:",
        ":handshake:",
        ":shield:",
        ":arrow_up:",
        ":arrow_down:",
        ":x:",
        ":sos:",
        ":peace_symbol:",
        ":alien:",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Returns the default list of version digit tags, index = digit value.
fn default_version_digit_tags() -> Vec<String> {
    [
        ":zero:", ":one:", ":two:", ":three:", ":four:", ":five:", ":six:", ":seven:", ":eight:",
        ":nine:",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Returns the default subset of release tags that require spelled-out version digits.
fn default_requires_version_digits() -> Vec<String> {
    [":x:", ":arrow_up:", ":arrow_down:", ":tada:"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_major_tag() -> String {
    ":sparkles:".to_string()
}

fn default_minor_tag() -> String {
    ":zap:".to_string()
}

fn default_patch_tag() -> String {
    ":ambulance:".to_string()
}

/// Tag vocabulary configuration.
///
/// Defines which `:word:` tokens are recognized and how they are classified.
/// Tests substitute smaller vocabularies through this struct.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VocabularyConfig {
    #[serde(default = "default_development_tags")]
    pub development: Vec<String>,

    #[serde(default = "default_release_tags")]
    pub release: Vec<String>,

    #[serde(default = "default_version_digit_tags")]
    pub version_digits: Vec<String>,

    #[serde(default = "default_requires_version_digits")]
    pub requires_version_digits: Vec<String>,

    #[serde(default = "default_major_tag")]
    pub major_tag: String,

    #[serde(default = "default_minor_tag")]
    pub minor_tag: String,

    #[serde(default = "default_patch_tag")]
    pub patch_tag: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        VocabularyConfig {
            development: default_development_tags(),
            release: default_release_tags(),
            version_digits: default_version_digit_tags(),
            requires_version_digits: default_requires_version_digits(),
            major_tag: default_major_tag(),
            minor_tag: default_minor_tag(),
            patch_tag: default_patch_tag(),
        }
    }
}

fn default_manifest_suffix() -> String {
    "__manifest__.py".to_string()
}

fn default_changelog_path() -> String {
    "doc/changelog.rst".to_string()
}

fn default_readme_file() -> String {
    "README.rst".to_string()
}

fn default_index_path() -> String {
    "doc/index.rst".to_string()
}

/// Names of the files the documentation/version checks look for.
///
/// These are injected rather than hard-coded so the engine stays testable
/// against arbitrary repository layouts.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilesConfig {
    #[serde(default = "default_manifest_suffix")]
    pub manifest_suffix: String,

    #[serde(default = "default_changelog_path")]
    pub changelog: String,

    #[serde(default = "default_readme_file")]
    pub readme: String,

    #[serde(default = "default_index_path")]
    pub index: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest_suffix: default_manifest_suffix(),
            changelog: default_changelog_path(),
            readme: default_readme_file(),
            index: default_index_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Policy switches.
///
/// The historical check variants differed in whether manifest versions were
/// reconciled across the whole pull request and whether patch-class commits
/// were exempt from the README/index requirement; both are knobs here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PolicyConfig {
    #[serde(default = "default_true")]
    pub aggregate_manifest: bool,

    #[serde(default = "default_true")]
    pub patch_exempt_readme: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            aggregate_manifest: true,
            patch_exempt_readme: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vocabulary: VocabularyConfig::default(),
            files: FilesConfig::default(),
            policy: PolicyConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagcheck.toml` in current directory
/// 3. `~/.config/.tagcheck.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(TagCheckError::Config)` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|e| {
            TagCheckError::config(format!("cannot read {}: {}", path.display(), e))
        })
    };

    let config_str = if let Some(path) = config_path {
        read(Path::new(path))?
    } else if Path::new("./tagcheck.toml").exists() {
        read(Path::new("./tagcheck.toml"))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagcheck.toml");
        if config_path.exists() {
            read(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| TagCheckError::config(e.to_string()))
}
