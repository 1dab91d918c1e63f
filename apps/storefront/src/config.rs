//! # Storefront Configuration
//!
//! Loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`)
//! 2. Environment variables (`FONTSTORE_DB_PATH`, `FONTSTORE_CURRENCY_SYMBOL`)
//! 3. Defaults (platform data directory, `$`)
//!
//! Commerce settings live in [`fontstore_commerce::CommerceConfig`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use fontstore_core::Money;
use serde::Serialize;

/// Database file name inside the platform data directory.
pub const DB_FILE_NAME: &str = "fontstore.db";

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Storefront configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// SQLite file holding the cart slot.
    pub db_path: PathBuf,

    /// Prefix for displayed amounts.
    pub currency_symbol: String,
}

impl StorefrontConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Platform-Specific Database Paths
    /// - **macOS**: `~/Library/Application Support/com.fontstore.storefront/fontstore.db`
    /// - **Windows**: `%APPDATA%\fontstore\storefront\data\fontstore.db`
    /// - **Linux**: `~/.local/share/storefront/fontstore.db`
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), default_db_path)
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// `default_path` is only called when no path is configured.
    pub fn from_lookup<F, D>(lookup: F, default_path: D) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        D: FnOnce() -> anyhow::Result<PathBuf>,
    {
        let db_path = match lookup("FONTSTORE_DB_PATH").filter(|p| !p.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_path()?,
        };

        let currency_symbol = lookup("FONTSTORE_CURRENCY_SYMBOL")
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        Ok(StorefrontConfig {
            db_path,
            currency_symbol,
        })
    }

    /// Replaces the database path.
    pub fn with_db_path(mut self, path: impl AsRef<Path>) -> Self {
        self.db_path = path.as_ref().to_path_buf();
        self
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use fontstore_core::Money;
    /// use fontstore_storefront::config::StorefrontConfig;
    ///
    /// let config = StorefrontConfig {
    ///     db_path: "cart.db".into(),
    ///     currency_symbol: "$".into(),
    /// };
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / 100).unsigned_abs(),
            (cents % 100).unsigned_abs()
        )
    }
}

/// Platform data directory joined with [`DB_FILE_NAME`], created if missing.
fn default_db_path() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "fontstore", "storefront")
        .context("Could not determine app data directory")?;

    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Could not create {}", data_dir.display()))?;

    Ok(data_dir.join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(symbol: &str) -> StorefrontConfig {
        StorefrontConfig {
            db_path: PathBuf::from("cart.db"),
            currency_symbol: symbol.to_string(),
        }
    }

    #[test]
    fn test_format_currency_positive() {
        let config = config("$");
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_negative_and_symbol() {
        assert_eq!(config("$").format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(config("€").format_currency(Money::from_cents(34100)), "€341.00");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let loaded = StorefrontConfig::from_lookup(
            |name| match name {
                "FONTSTORE_DB_PATH" => Some("/tmp/fonts.db".to_string()),
                "FONTSTORE_CURRENCY_SYMBOL" => Some("Rp ".to_string()),
                _ => None,
            },
            || panic!("default path must not be computed"),
        )
        .unwrap();

        assert_eq!(loaded.db_path, PathBuf::from("/tmp/fonts.db"));
        assert_eq!(loaded.format_currency(Money::from_cents(2900)), "Rp 29.00");
    }

    #[test]
    fn test_defaults() {
        let loaded =
            StorefrontConfig::from_lookup(|_| None, || Ok(PathBuf::from("/data/fontstore.db")))
                .unwrap();

        assert_eq!(loaded.db_path, PathBuf::from("/data/fontstore.db"));
        assert_eq!(loaded.currency_symbol, DEFAULT_CURRENCY_SYMBOL);

        let moved = loaded.with_db_path("/elsewhere.db");
        assert_eq!(moved.db_path, PathBuf::from("/elsewhere.db"));
    }
}
