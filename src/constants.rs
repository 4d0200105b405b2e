//! Application-wide constants
//!
//! This module contains constants used throughout the application.

/// Maximum length for moderator feedback in characters
/// Bounds the free-text note a moderator may attach to a decision.
pub const MAX_FEEDBACK_LENGTH: usize = 2_000;

/// Default number of queue entries returned per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum number of queue entries returned per page
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default username displayed for unauthenticated users
pub const GUEST_USERNAME: &str = "Guest";
