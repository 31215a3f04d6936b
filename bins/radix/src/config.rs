use std::path::Path;

use clap::Args;
use mapper::{EnumMapper, Enumerable, Radix, TwoWayMapper};
use serde::Deserialize;

use crate::convert::radix;
use crate::error::RadixError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

const DEFAULT_CONFIG: &str = "radix.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub from: Option<u32>,
    pub to: Option<u32>,
    pub case: Option<String>,
}

pub fn load_config(path: &str) -> Result<Config, RadixError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| RadixError::Config(format!("cannot read config {path}: {e}")))?;
    parse_config(&content).map_err(|e| RadixError::Config(format!("bad config {path}: {e}")))
}

fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    /// Path to the config file [default: radix.toml, if present]
    #[arg(long, env = "RADIX_CONFIG")]
    pub config: Option<String>,

    /// Radix of the input values (2..=36)
    #[arg(long)]
    pub from: Option<u32>,

    /// Radix of the output values (2..=36)
    #[arg(long)]
    pub to: Option<u32>,

    /// Letter case of output digits: lower or upper
    #[arg(long)]
    pub case: Option<String>,

    /// Values to convert
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

// ═══════════════════════════════════════════════════════════════
//  Letter case
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerable)]
pub enum LetterCase {
    Lower,
    Upper,
}

fn case_mapper() -> EnumMapper<LetterCase, String, impl Fn(LetterCase) -> String> {
    EnumMapper::from_enum(LetterCase::Lower, |case: LetterCase| {
        let name = match case {
            LetterCase::Lower => "lower",
            LetterCase::Upper => "upper",
        };
        name.to_owned()
    })
}

/// Unknown names fall back to lowercase.
pub fn letter_case(name: &str) -> LetterCase {
    let mapper = case_mapper();
    let name = name.trim().to_ascii_lowercase();
    if mapper.lookup(&name).is_none() {
        tracing::warn!(case = %name, "unknown letter case, using lower");
    }
    mapper.map_backward(name)
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Settings after merging: radix.toml < env/CLI
#[derive(Debug)]
pub struct Effective {
    pub from: Radix,
    pub to: Radix,
    pub case: LetterCase,
}

impl Effective {
    pub fn new(args: &ConvertArgs) -> Result<Self, RadixError> {
        let cfg = match args.config.as_deref() {
            Some(path) => load_config(path)?,
            None if Path::new(DEFAULT_CONFIG).exists() => load_config(DEFAULT_CONFIG)?,
            None => Config::default(),
        };
        Self::merge(args, cfg)
    }

    fn merge(args: &ConvertArgs, cfg: Config) -> Result<Self, RadixError> {
        let from = match args.from.or(cfg.from) {
            Some(value) => radix(value)?,
            None => Radix::DECIMAL,
        };
        let to = match args.to.or(cfg.to) {
            Some(value) => radix(value)?,
            None => Radix::DECIMAL,
        };
        let case = match args.case.as_deref().or(cfg.case.as_deref()) {
            Some(name) => letter_case(name),
            None => LetterCase::Lower,
        };

        tracing::debug!(%from, %to, ?case, "effective settings");
        Ok(Self { from, to, case })
    }
}
