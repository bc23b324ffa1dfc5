use anyhow::{anyhow, bail, Context, Result};
use chrono_tz::Tz;

pub const DEFAULT_TABLE: &str = "stickers";
pub const DEFAULT_MAX_STICKERS: i64 = 50;
pub const DEFAULT_LOCATION: Tz = Tz::UTC;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub database_location: String,
    pub stickers_table: String,
    pub max_stickers: i64,
    pub location: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let telegram_token = lookup("TELEGRAM_TOKEN").context("TELEGRAM_TOKEN must be set")?;
        let database_location =
            lookup("DATABASE_LOCATION").context("DATABASE_LOCATION must be set")?;

        let stickers_table = lookup("STICKERS_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string());
        if !is_valid_table_name(&stickers_table) {
            bail!("STICKERS_TABLE {:?} is not a valid table name", stickers_table);
        }

        let max_stickers = match lookup("MAX_STICKERS") {
            Some(value) => value
                .parse::<i64>()
                .with_context(|| format!("MAX_STICKERS {:?} is not a number", value))?,
            None => DEFAULT_MAX_STICKERS,
        };
        if max_stickers <= 0 {
            bail!("MAX_STICKERS must be positive, got {}", max_stickers);
        }

        let location = match lookup("LOCATION") {
            Some(value) => value
                .parse::<Tz>()
                .map_err(|_| anyhow!("LOCATION {:?} is not a time zone like Europe/Kyiv", value))?,
            None => DEFAULT_LOCATION,
        };

        Ok(Config {
            telegram_token,
            database_location,
            stickers_table,
            max_stickers,
            location,
        })
    }
}

// The table name is spliced into SQL, so only plain identifiers are allowed
fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("DATABASE_LOCATION", "stickers.db"),
        ]))
        .unwrap();

        assert_eq!(config.stickers_table, "stickers");
        assert_eq!(config.max_stickers, 50);
        assert_eq!(config.location, Tz::UTC);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("DATABASE_LOCATION", ":memory:"),
            ("STICKERS_TABLE", "user_stickers"),
            ("MAX_STICKERS", "10"),
            ("LOCATION", "Europe/Kyiv"),
        ]))
        .unwrap();

        assert_eq!(config.stickers_table, "user_stickers");
        assert_eq!(config.max_stickers, 10);
        assert_eq!(config.location, Tz::Europe__Kyiv);
    }

    #[test]
    fn missing_token_fails() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_LOCATION", "stickers.db")]));
        assert!(result.is_err());
    }

    #[test]
    fn bad_values_fail() {
        let base = [
            ("TELEGRAM_TOKEN", "123:abc"),
            ("DATABASE_LOCATION", "stickers.db"),
        ];

        for bad in [
            ("STICKERS_TABLE", "stickers; DROP TABLE x"),
            ("STICKERS_TABLE", "1stickers"),
            ("MAX_STICKERS", "lots"),
            ("MAX_STICKERS", "0"),
            ("LOCATION", "Mars/Olympus_Mons"),
            ("LOCATION", "+03:00"),
        ] {
            let mut pairs = base.to_vec();
            pairs.push(bad);
            assert!(
                Config::from_lookup(lookup_from(&pairs)).is_err(),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
