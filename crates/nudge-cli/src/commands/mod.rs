//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_session, money formatting)
//! - `reports` - One-shot reports (list, nudges, trends, what-if, categories)
//! - `shell` - Interactive session

pub mod core;
pub mod reports;
pub mod shell;

// Re-export command functions for main.rs
pub use self::core::*;
pub use reports::*;
pub use shell::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
