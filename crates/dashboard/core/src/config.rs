use std::env;

use crate::dataview::Aggregation;

/// Defaults the factory applies to optional widget attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactoryConfig {
    /// Aggregation used by category widgets that do not name one.
    pub default_aggregation: Aggregation,
    /// Bin count used by histogram and time-series widgets that do not name one.
    pub default_bins: u32,
}

impl FactoryConfig {
    pub const DEFAULT_AGGREGATION: Aggregation = Aggregation::Count;
    pub const DEFAULT_BINS: u32 = 10;

    pub const fn new() -> Self {
        Self {
            default_aggregation: Self::DEFAULT_AGGREGATION,
            default_bins: Self::DEFAULT_BINS,
        }
    }

    #[must_use]
    pub const fn with_default_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.default_aggregation = aggregation;
        self
    }

    /// Values below one are raised to one.
    #[must_use]
    pub fn with_default_bins(mut self, bins: u32) -> Self {
        self.default_bins = bins.max(1);
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `DASHBOARD_DEFAULT_AGGREGATION` (`count`, `sum`, `avg`, `max`, `min`)
    /// - `DASHBOARD_DEFAULT_BINS`
    ///
    /// Unset or unparsable variables keep the built-in defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`FactoryConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(aggregation) = read_var::<Aggregation>(&lookup, "DASHBOARD_DEFAULT_AGGREGATION")
        {
            config.default_aggregation = aggregation;
        }

        if let Some(bins) = read_var::<u32>(&lookup, "DASHBOARD_DEFAULT_BINS") {
            config = config.with_default_bins(bins);
        }

        config
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_conventions() {
        let config = FactoryConfig::default();
        assert_eq!(config.default_aggregation, Aggregation::Count);
        assert_eq!(config.default_bins, 10);
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = FactoryConfig::from_lookup(|key| match key {
            "DASHBOARD_DEFAULT_AGGREGATION" => Some("avg".into()),
            "DASHBOARD_DEFAULT_BINS" => Some(" 24 ".into()),
            _ => None,
        });
        assert_eq!(config.default_aggregation, Aggregation::Avg);
        assert_eq!(config.default_bins, 24);
    }

    #[test]
    fn unparsable_values_are_ignored_and_zero_bins_clamped() {
        let config = FactoryConfig::from_lookup(|key| match key {
            "DASHBOARD_DEFAULT_AGGREGATION" => Some("median".into()),
            "DASHBOARD_DEFAULT_BINS" => Some("0".into()),
            _ => None,
        });
        assert_eq!(config.default_aggregation, Aggregation::Count);
        assert_eq!(config.default_bins, 1);
    }
}
