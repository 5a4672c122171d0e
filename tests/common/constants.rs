//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes (catalog entries, titles, scores, etc.),
//! update only this file.

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// "Grey Horizons", Fiction, about ships and the sea (joy 0.2)
pub const SEA_BOOK_ID: i64 = 9780000000001;

/// "The Glad Harbor", Fiction, about a ship in a storm (joy 0.9)
pub const STORM_BOOK_ID: i64 = 9780000000002;

/// "Daily Loaves", Nonfiction, about baking bread (joy 0.5)
pub const BREAD_BOOK_ID: i64 = 9780000000003;

/// "Silent Alleys", Fiction, about a city detective (no joy score)
pub const CRIME_BOOK_ID: i64 = 9780000000004;

// ============================================================================
// Test Catalog Titles
// ============================================================================

pub const SEA_BOOK_TITLE: &str = "Grey Horizons";
pub const STORM_BOOK_TITLE: &str = "The Glad Harbor";
pub const BREAD_BOOK_TITLE: &str = "Daily Loaves";
pub const CRIME_BOOK_TITLE: &str = "Silent Alleys";

// ============================================================================
// Timeouts
// ============================================================================

/// Timeout for individual HTTP requests in tests
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// How long to wait for the test server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 10_000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
