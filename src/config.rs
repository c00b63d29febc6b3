use crate::intake::TICK_PERIOD;
use anyhow::{bail, Context};
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TICK_MS: u64 = TICK_PERIOD.as_millis() as u64;
const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
const DEFAULT_LOG_FILTER: &str = "claims_tracker=info";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub tick_period: Duration,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_period: TICK_PERIOD,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Loads `.env` if present, then reads `CLAIMS_TRACKER_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let tick_ms: u64 = parse_var(&lookup, "CLAIMS_TRACKER_TICK_MS", DEFAULT_TICK_MS)?;
        if tick_ms == 0 {
            bail!("CLAIMS_TRACKER_TICK_MS must be greater than zero");
        }

        let window_width = parse_var(
            &lookup,
            "CLAIMS_TRACKER_WINDOW_WIDTH",
            DEFAULT_WINDOW_WIDTH,
        )?;
        let window_height = parse_var(
            &lookup,
            "CLAIMS_TRACKER_WINDOW_HEIGHT",
            DEFAULT_WINDOW_HEIGHT,
        )?;

        let log_filter =
            lookup("CLAIMS_TRACKER_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            tick_period: Duration::from_millis(tick_ms),
            window_width,
            window_height,
            log_filter,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = TrackerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.tick_period, TICK_PERIOD);
        assert_eq!(config.tick_period, Duration::from_millis(300));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = TrackerConfig::from_lookup(lookup(&[
            ("CLAIMS_TRACKER_TICK_MS", "50"),
            ("CLAIMS_TRACKER_WINDOW_WIDTH", " 900 "),
            ("CLAIMS_TRACKER_LOG", "claims_tracker=debug"),
        ]))
        .unwrap();

        assert_eq!(config.tick_period, Duration::from_millis(50));
        assert_eq!(config.window_width, 900.0);
        assert_eq!(config.window_height, 820.0);
        assert_eq!(config.log_filter, "claims_tracker=debug");
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = TrackerConfig::from_lookup(lookup(&[("CLAIMS_TRACKER_TICK_MS", "fast")]))
            .unwrap_err();
        assert!(err.to_string().contains("CLAIMS_TRACKER_TICK_MS"));

        let err =
            TrackerConfig::from_lookup(lookup(&[("CLAIMS_TRACKER_TICK_MS", "0")])).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
