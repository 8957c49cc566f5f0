use chrono::Duration;
use log::info;
use serde::Deserialize;
use std::env::vars;

use crate::ErrorCorrection;

/// Quiet period before a typed change is rendered.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Share of the display width given to the code.
pub const DEFAULT_WIDTH_RATIO: f32 = 0.9;

#[derive(Debug, Deserialize)]
struct RawConfig {
    qrgen_debounce_ms: Option<u64>,
    qrgen_ecc: Option<ErrorCorrection>,
    qrgen_boost_ecc: Option<bool>,
    qrgen_width_ratio: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QrConfig {
    debounce: Duration,
    ecc: ErrorCorrection,
    boost_ecc: bool,
    width_ratio: f32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::milliseconds(DEFAULT_DEBOUNCE_MS as i64),
            ecc: ErrorCorrection::Medium,
            boost_ecc: true,
            width_ratio: DEFAULT_WIDTH_RATIO,
        }
    }
}

impl QrConfig {
    /// Reads `QRGEN_*` environment variables, falling back to defaults for
    /// anything unset.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            qrgen_debounce_ms,
            qrgen_ecc,
            qrgen_boost_ecc,
            qrgen_width_ratio,
        } = raw_config;

        let debounce_ms = qrgen_debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS);
        let debounce = match i64::try_from(debounce_ms) {
            Ok(ms) => Duration::milliseconds(ms),
            Err(_) => anyhow::bail!("QRGEN_DEBOUNCE_MS is out of range: {debounce_ms}"),
        };

        let width_ratio = qrgen_width_ratio.unwrap_or(DEFAULT_WIDTH_RATIO);
        if !width_ratio.is_finite() || width_ratio <= 0.0 || width_ratio > 1.0 {
            anyhow::bail!("QRGEN_WIDTH_RATIO must be in (0, 1], got {width_ratio}");
        }

        let ecc = qrgen_ecc.unwrap_or_default();
        let boost_ecc = qrgen_boost_ecc.unwrap_or(true);
        info!(
            "Using debounce {debounce_ms}ms, {ecc:?} error correction (boost: {boost_ecc}), width ratio {width_ratio}"
        );

        Ok(Self {
            debounce,
            ecc,
            boost_ecc,
            width_ratio,
        })
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_ecc(mut self, ecc: ErrorCorrection) -> Self {
        self.ecc = ecc;
        self
    }

    pub fn with_boost_ecc(mut self, boost_ecc: bool) -> Self {
        self.boost_ecc = boost_ecc;
        self
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn ecc(&self) -> ErrorCorrection {
        self.ecc
    }

    pub fn boost_ecc(&self) -> bool {
        self.boost_ecc
    }

    pub fn width_ratio(&self) -> f32 {
        self.width_ratio
    }

    /// Pixel width reserved for the code on a display `display_width` wide.
    pub fn target_width(&self, display_width: f32) -> usize {
        let width = (display_width * self.width_ratio).round();
        if width.is_finite() && width > 0.0 {
            width as usize
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn defaults_when_nothing_is_set() {
        let raw: RawConfig = from_iter(Vec::<(&str, &str)>::new()).expect("empty env parses");
        let config = QrConfig::from_raw(raw).expect("defaults are valid");
        assert_eq!(config, QrConfig::default());
        assert_eq!(config.debounce(), Duration::milliseconds(300));
        assert_eq!(config.ecc(), ErrorCorrection::Medium);
        assert!(config.boost_ecc());
    }

    #[test]
    fn reads_overrides_from_env() {
        let raw: RawConfig = from_iter(vec![
            ("QRGEN_DEBOUNCE_MS", "150"),
            ("QRGEN_ECC", "high"),
            ("QRGEN_BOOST_ECC", "false"),
            ("QRGEN_WIDTH_RATIO", "0.5"),
        ])
        .expect("RawConfig should deserialize");

        let config = QrConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.debounce(), Duration::milliseconds(150));
        assert_eq!(config.ecc(), ErrorCorrection::High);
        assert!(!config.boost_ecc());
        assert_eq!(config.target_width(1000.0), 500);
    }

    #[test]
    fn width_ratio_outside_unit_range_is_rejected() {
        for ratio in ["0", "-0.5", "1.5"] {
            let raw: RawConfig = from_iter(vec![("QRGEN_WIDTH_RATIO", ratio)])
                .expect("RawConfig should deserialize");
            let result = QrConfig::from_raw(raw);
            assert!(result.is_err(), "ratio {ratio} should be rejected");
            assert!(
                result
                    .unwrap_err()
                    .to_string()
                    .contains("QRGEN_WIDTH_RATIO")
            );
        }
    }

    #[test]
    fn target_width_rounds_ninety_percent() {
        let config = QrConfig::default();
        assert_eq!(config.target_width(1080.0), 972);
        assert_eq!(config.target_width(401.0), 361);
        assert_eq!(config.target_width(0.0), 0);
    }
}
