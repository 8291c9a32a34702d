use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use url::Url;

use crate::errors::AppError;
use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Root of the documentation tree
    #[serde(default = "default_content_root")]
    pub content_root: PathBuf,

    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO), also used as the target file suffix
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// File discovery and classification
    #[serde(default)]
    pub scan: ScanConfig,

    /// Rule-based translation settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Optional high-quality translation provider
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Report output
    #[serde(default)]
    pub report: ReportConfig,
}

/// Path patterns used while walking the content tree.
///
/// Patterns are case-insensitive regexes matched against the '/'-separated
/// path relative to the content root.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScanConfig {
    #[serde(default = "default_skip_patterns")]
    pub skip_patterns: Vec<String>,

    #[serde(default = "default_priority_patterns")]
    pub priority_patterns: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_patterns: default_skip_patterns(),
            priority_patterns: default_priority_patterns(),
        }
    }
}

/// Which document structure analyzer to use
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// One paragraph per non-blank line
    #[default]
    Line,
    /// Consecutive prose lines merged into one paragraph
    Block,
}

/// A link appended to the "additional resources" section of enhanced pages
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

/// Rule-based translation settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Lexical fallback threshold in conservative mode
    #[serde(default = "default_conservative_threshold")]
    pub conservative_threshold: f64,

    /// Lexical fallback threshold in aggressive mode
    #[serde(default = "default_aggressive_threshold")]
    pub aggressive_threshold: f64,

    /// Fallback only runs when the text has more source letters than this
    #[serde(default = "default_min_source_letters")]
    pub min_source_letters: usize,

    /// Frontmatter keys whose values are translated
    #[serde(default = "default_translatable_fields")]
    pub translatable_fields: Vec<String>,

    #[serde(default)]
    pub segmenter: SegmenterKind,

    /// Add `dir: rtl` to enhanced frontmatter when missing
    #[serde(default = "default_true")]
    pub add_rtl_direction: bool,

    #[serde(default = "default_resource_links")]
    pub resource_links: Vec<ResourceLink>,
}

impl TranslationConfig {
    /// Target-script ratio below which lexical fallback kicks in
    pub fn fallback_threshold(&self, aggressive: bool) -> f64 {
        if aggressive {
            self.aggressive_threshold
        } else {
            self.conservative_threshold
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            conservative_threshold: default_conservative_threshold(),
            aggressive_threshold: default_aggressive_threshold(),
            min_source_letters: default_min_source_letters(),
            translatable_fields: default_translatable_fields(),
            segmenter: SegmenterKind::default(),
            add_rtl_direction: true,
            resource_links: default_resource_links(),
        }
    }
}

/// OpenAI-compatible chat completion provider
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider used only when enabled here or via --ai
    #[serde(default)]
    pub enabled: bool,

    // @field: Model name
    #[serde(default = "default_model")]
    pub model: String,

    // @field: API key, falls back to OPENAI_API_KEY
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Fixed sleep between consecutive requests
    #[serde(default = "default_rate_limit_delay_ms")]
    pub rate_limit_delay_ms: u64,
}

impl ProviderConfig {
    /// Configured key, or the `OPENAI_API_KEY` environment variable
    pub fn resolved_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }
        std::env::var("OPENAI_API_KEY").unwrap_or_default()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            rate_limit_delay_ms: default_rate_limit_delay_ms(),
        }
    }
}

/// Where and how run reports are written
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportConfig {
    /// Directory for report files; relative paths resolve against the working directory
    #[serde(default = "default_report_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_true")]
    pub write_json: bool,

    #[serde(default = "default_true")]
    pub write_text: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_report_dir(),
            write_json: true,
            write_text: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_content_root() -> PathBuf {
    PathBuf::from("content")
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "ar".to_string()
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_skip_patterns() -> Vec<String> {
    [
        r"(^|/)\.git",
        r"\.DS_Store",
        r".*\.tmp$",
        r".*\.log$",
        r"(^|/)node_modules/",
        r"(^|/)\.next/",
        r"(^|/)__pycache__/",
        r"(^|/)(assets|images|_snippets)/",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_priority_patterns() -> Vec<String> {
    [
        r"(^|/)index\.md$",
        r"(^|/)README\.md$",
        r"^get-started/",
        r"^authentication/",
        r"^account-and-profile/",
        r"^actions/.*quickstart",
        r"^actions/.*get-started",
        r"^issues/",
        r"^pull-requests/",
        r"^repositories/",
        r"^copilot/",
        r"^support/",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_conservative_threshold() -> f64 {
    0.25
}

fn default_aggressive_threshold() -> f64 {
    0.6
}

fn default_min_source_letters() -> usize {
    50
}

fn default_translatable_fields() -> Vec<String> {
    ["title", "shortTitle", "intro", "permissions"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_resource_links() -> Vec<ResourceLink> {
    vec![
        ResourceLink {
            title: "المستندات الرئيسية لـ GitHub".to_string(),
            url: "https://docs.github.com/ar".to_string(),
        },
        ResourceLink {
            title: "مجتمع GitHub باللغة العربية".to_string(),
            url: "https://github.com/community".to_string(),
        },
        ResourceLink {
            title: "الدعم الفني".to_string(),
            url: "https://support.github.com".to_string(),
        },
    ]
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_rate_limit_delay_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Load `path`, or write the default configuration there when it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        log::warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, code) in [
            ("source", &self.source_language),
            ("target", &self.target_language),
        ] {
            language_utils::normalize_to_part2t(code).map_err(|_| {
                AppError::Config(format!("Invalid {} language code: {}", name, code))
            })?;
        }

        for pattern in self
            .scan
            .skip_patterns
            .iter()
            .chain(self.scan.priority_patterns.iter())
        {
            Regex::new(pattern).map_err(|e| {
                AppError::Config(format!("Invalid path pattern '{}': {}", pattern, e))
            })?;
        }

        for (name, value) in [
            ("conservative_threshold", self.translation.conservative_threshold),
            ("aggressive_threshold", self.translation.aggressive_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::Config(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }

        Url::parse(&self.provider.endpoint).map_err(|e| {
            AppError::Config(format!(
                "Invalid provider endpoint '{}': {}",
                self.provider.endpoint, e
            ))
        })?;

        if !(0.0..=2.0).contains(&self.provider.temperature) {
            return Err(AppError::Config(format!(
                "Provider temperature must be between 0.0 and 2.0, got {}",
                self.provider.temperature
            )));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            content_root: default_content_root(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            log_level: LogLevel::default(),
            scan: ScanConfig::default(),
            translation: TranslationConfig::default(),
            provider: ProviderConfig::default(),
            report: ReportConfig::default(),
        }
    }
}
