//! Face configuration
//!
//! Parsed at boot from the watch.toml compiled into the binary. This is
//! a minimal TOML-subset parser in the same spirit as the full-size TOML
//! spec but handling only what the face needs:
//!
//! - `[section]` headers
//! - `key = value` pairs (quoted string, boolean, unsigned integer)
//! - `#` comments
//!
//! The build script already validated the embedded file with a real TOML
//! parser on the host, so errors here mean the file outgrew the subset.

use bitface_core::time::HourStyle;

/// Parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ConfigError {
    /// Unrecognized or malformed section header
    InvalidSection,
    /// Line is neither a header nor a key = value pair
    InvalidLine,
    /// Value has the wrong type or an unsupported spelling
    InvalidValue,
}

/// Everything the face reads from watch.toml
#[derive(Debug, Clone, defmt::Format)]
pub struct FaceConfig {
    /// 12-hour or 24-hour dial
    pub hour_style: HourStyle,
    /// Show the hobbit-time phrase in the header band
    pub hobbit_text: bool,
    /// Flip panel VCOM polarity every N ticks; 0 disables
    pub vcom_every_ticks: u32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            hour_style: HourStyle::H24,
            hobbit_text: true,
            vcom_every_ticks: 1,
        }
    }
}

/// Current parsing context
#[derive(Clone, Copy)]
enum Section {
    Root,
    Face,
    Panel,
}

impl FaceConfig {
    /// Parse the TOML subset into a config
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let mut config = FaceConfig::default();
        let mut section = Section::Root;

        for raw_line in input.lines() {
            let line = raw_line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or(ConfigError::InvalidSection)?;
                section = match name.trim() {
                    "face" => Section::Face,
                    "panel" => Section::Panel,
                    _ => return Err(ConfigError::InvalidSection),
                };
                continue;
            }

            let (key, value) = line.split_once('=').ok_or(ConfigError::InvalidLine)?;
            let (key, value) = (key.trim(), value.trim());

            match (section, key) {
                (Section::Face, "hour_style") => {
                    config.hour_style = match parse_string(value)? {
                        "12h" => HourStyle::H12,
                        "24h" => HourStyle::H24,
                        _ => return Err(ConfigError::InvalidValue),
                    };
                }
                (Section::Face, "hobbit_text") => {
                    config.hobbit_text = parse_bool(value)?;
                }
                (Section::Panel, "vcom_every_ticks") => {
                    config.vcom_every_ticks =
                        value.parse().map_err(|_| ConfigError::InvalidValue)?;
                }
                // Unknown keys are ignored so the file can grow without
                // bricking older firmware
                _ => {}
            }
        }

        Ok(config)
    }
}

fn parse_string(value: &str) -> Result<&str, ConfigError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ConfigError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_embedded_default() {
        let config = FaceConfig::parse(include_str!("../watch.toml")).unwrap();
        assert_eq!(config.hour_style, HourStyle::H24);
        assert!(config.hobbit_text);
        assert_eq!(config.vcom_every_ticks, 1);
    }

    #[test]
    fn test_parse_overrides() {
        let input = "
            [face]
            hour_style = \"12h\"  # civilian time
            hobbit_text = false

            [panel]
            vcom_every_ticks = 2
        ";
        let config = FaceConfig::parse(input).unwrap();
        assert_eq!(config.hour_style, HourStyle::H12);
        assert!(!config.hobbit_text);
        assert_eq!(config.vcom_every_ticks, 2);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            FaceConfig::parse("[face]\nhour_style = \"13h\""),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            FaceConfig::parse("[face]\nhobbit_text = yes"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            FaceConfig::parse("[clock]"),
            Err(ConfigError::InvalidSection)
        );
        assert_eq!(
            FaceConfig::parse("hour_style"),
            Err(ConfigError::InvalidLine)
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = FaceConfig::parse("[face]\ntheme = \"dark\"").unwrap();
        assert!(config.hobbit_text);
    }
}
