//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
///
/// An unknown command is not an error: the interpreter renders it as a
/// regular output line.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("asset error: {0}")]
    Asset(String),

    #[error("side effect failed: {0}")]
    Effect(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn asset_error_display() {
        let e = FolioError::Asset("/Resume.pdf not found".into());
        assert_eq!(format!("{e}"), "asset error: /Resume.pdf not found");
    }

    #[test]
    fn effect_error_display() {
        let e = FolioError::Effect("download blocked".into());
        assert_eq!(format!("{e}"), "side effect failed: download blocked");
    }

    #[test]
    fn terminal_error_display() {
        let e = FolioError::Terminal("raw mode".into());
        assert_eq!(format!("{e}"), "terminal error: raw mode");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e: FolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("char_delay_ms = [[[").unwrap_err();
        let e: FolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let e: FolioError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<()> = Err(FolioError::Asset("gone".into()));
        assert!(r.is_err());
    }
}
