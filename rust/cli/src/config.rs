use serde::{Deserialize, Serialize};
use std::fs;

/// Upper bound for `threads`; larger values are almost certainly typos.
const MAX_THREADS: usize = 512;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// File suffixes listed by the directory source (without the dot).
    pub extensions: Vec<String>,
    /// Rayon pool size for the per-file fan-out; 0 uses rayon's default.
    pub threads: usize,
    pub recursive: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub extensions: ValueSource,
    pub threads: ValueSource,
    pub recursive: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            extensions: ValueSource::Default,
            threads: ValueSource::Default,
            recursive: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".into()],
            threads: 0,
            recursive: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("POKERHUD_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.extensions {
            cfg.extensions = v;
            sources.extensions = ValueSource::File;
        }
        if let Some(v) = f.threads {
            cfg.threads = v;
            sources.threads = ValueSource::File;
        }
        if let Some(v) = f.recursive {
            cfg.recursive = v;
            sources.recursive = ValueSource::File;
        }
    }

    if let Ok(exts) = std::env::var("POKERHUD_EXTENSIONS")
        && !exts.is_empty()
    {
        cfg.extensions = parse_list(&exts);
        sources.extensions = ValueSource::Env;
    }
    if let Ok(threads) = std::env::var("POKERHUD_THREADS")
        && !threads.is_empty()
    {
        cfg.threads = threads
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid threads".into()))?;
        sources.threads = ValueSource::Env;
    }
    if let Ok(rec) = std::env::var("POKERHUD_RECURSIVE")
        && !rec.is_empty()
    {
        cfg.recursive =
            parse_bool(&rec).ok_or_else(|| ConfigError::Invalid("Invalid recursive".into()))?;
        sources.recursive = ValueSource::Env;
    }

    cfg.extensions = cfg
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect();

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    extensions: Option<Vec<String>>,
    #[serde(default)]
    threads: Option<usize>,
    #[serde(default)]
    recursive: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.extensions.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: extensions must not be empty".into(),
        ));
    }
    if cfg.threads > MAX_THREADS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: threads must be <= {}",
            MAX_THREADS
        )));
    }
    Ok(())
}

fn parse_list(s: &str) -> Vec<String> {
    s.split(',').map(|e| e.trim().to_string()).collect()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
