use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_LOG_FILTER: &str = "warn,gunslinger_world=info,gunslinger_cli=info";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub starting_money: u32,
    pub buy_in: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub starting_money: ValueSource,
    pub buy_in: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub log_filter: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            starting_money: ValueSource::Default,
            buy_in: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            log_filter: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Lets a `--seed` flag win over everything else.
    pub fn with_cli_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.config.seed = Some(seed);
            self.sources.seed = ValueSource::Cli;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            starting_money: 0,
            buy_in: 10,
            small_blind: 5,
            big_blind: 10,
            log_filter: DEFAULT_LOG_FILTER.into(),
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `GUNSLINGER_CONFIG`, then the
/// `GUNSLINGER_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("GUNSLINGER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.starting_money {
            cfg.starting_money = v;
            sources.starting_money = ValueSource::File;
        }
        if let Some(v) = f.buy_in {
            cfg.buy_in = v;
            sources.buy_in = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.log_filter {
            cfg.log_filter = v;
            sources.log_filter = ValueSource::File;
        }
    }

    if let Some(seed) = env_number("GUNSLINGER_SEED", "Invalid seed")? {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Some(money) = env_number("GUNSLINGER_STARTING_MONEY", "Invalid starting money")? {
        cfg.starting_money = money;
        sources.starting_money = ValueSource::Env;
    }
    if let Some(buy_in) = env_number("GUNSLINGER_BUY_IN", "Invalid buy-in")? {
        cfg.buy_in = buy_in;
        sources.buy_in = ValueSource::Env;
    }
    if let Ok(filter) = std::env::var("GUNSLINGER_LOG")
        && !filter.is_empty()
    {
        cfg.log_filter = filter;
        sources.log_filter = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_number<T: std::str::FromStr>(key: &str, what: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("{what}: {v}"))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    starting_money: Option<u32>,
    #[serde(default)]
    buy_in: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    log_filter: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.small_blind == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: small_blind must be >0".into(),
        ));
    }
    if cfg.big_blind <= cfg.small_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: big_blind must be greater than small_blind".into(),
        ));
    }
    if cfg.buy_in < cfg.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: buy_in must be at least the big blind".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const KEYS: [&str; 5] = [
        "GUNSLINGER_CONFIG",
        "GUNSLINGER_SEED",
        "GUNSLINGER_STARTING_MONEY",
        "GUNSLINGER_BUY_IN",
        "GUNSLINGER_LOG",
    ];

    fn clear_env() {
        for key in KEYS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.buy_in, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\nbuy_in = 50\nbig_blind = 20\nsmall_blind = 10").unwrap();
        unsafe {
            std::env::set_var("GUNSLINGER_CONFIG", file.path());
            std::env::set_var("GUNSLINGER_SEED", "99");
        }

        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.buy_in, 50);
        assert_eq!(resolved.sources.buy_in, ValueSource::File);
        assert_eq!(resolved.config.big_blind, 20);
        assert_eq!(resolved.sources.starting_money, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn cli_seed_wins() {
        clear_env();
        unsafe {
            std::env::set_var("GUNSLINGER_SEED", "3");
        }
        let resolved = load_with_sources().unwrap().with_cli_seed(Some(4));
        clear_env();
        assert_eq!(resolved.config.seed, Some(4));
        assert_eq!(resolved.sources.seed, ValueSource::Cli);
    }

    #[test]
    #[serial]
    fn bad_values_are_rejected() {
        clear_env();
        unsafe {
            std::env::set_var("GUNSLINGER_BUY_IN", "lots");
        }
        let err = load_with_sources().unwrap_err();
        clear_env();
        assert_eq!(err.to_string(), "Invalid buy-in: lots");

        unsafe {
            std::env::set_var("GUNSLINGER_BUY_IN", "5");
        }
        let err = load_with_sources().unwrap_err();
        clear_env();
        assert!(err.to_string().contains("buy_in must be at least the big blind"));
    }
}
