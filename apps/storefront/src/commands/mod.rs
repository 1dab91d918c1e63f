//! # Storefront Commands
//!
//! One module per surface. Every handler returns a serializable response;
//! [`Render`] turns it into terminal text, `--json` prints it as is.
//!
//! ## Runtime Boundary
//! Commerce calls are async and run through the caller's [`Runtime`]. Cart
//! mutations are synchronous and happen outside `block_on`, because the
//! SQLite cart storage drives its own runtime.
//!
//! [`Runtime`]: tokio::runtime::Runtime

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;

use serde::Serialize;

use crate::config::StorefrontConfig;

/// Terminal rendering of a command response.
pub trait Render: Serialize {
    fn render(&self, config: &StorefrontConfig) -> String;
}

/// Renders `response` as text or pretty JSON.
pub fn format_output<R: Render>(
    response: &R,
    json: bool,
    config: &StorefrontConfig,
) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(response)
    } else {
        Ok(response.render(config))
    }
}

/// Shortens `text` to `max` characters, marking the cut with `…`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Serif", 10), "Serif");
        assert_eq!(truncate("Montserrat Pro", 6), "Monts…");
    }
}
