//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes (user credentials, catalog IDs, etc.),
//! update only this file.

// ============================================================================
// Test User Credentials
// ============================================================================

/// User registered by the fixtures
pub const TEST_USER: &str = "testuser";

/// Password of the user registered by the fixtures
pub const TEST_PASS: &str = "testpass123";

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// Actor ID for "Christian Bale"
pub const ACTOR_BALE_ID: i64 = 1;

/// Actor ID for "Michael Caine"
pub const ACTOR_CAINE_ID: i64 = 2;

/// Actor ID for "Al Pacino"
pub const ACTOR_PACINO_ID: i64 = 3;

/// Movie ID for "Batman Begins" (Bale, Caine)
pub const MOVIE_BATMAN_ID: i64 = 1;

/// Movie ID for "Heat" (Pacino)
pub const MOVIE_HEAT_ID: i64 = 2;

/// Movie ID for "The Prestige" (Bale, Caine)
pub const MOVIE_PRESTIGE_ID: i64 = 3;

/// Movie ID for "Combat Zone" (no cast)
pub const MOVIE_COMBAT_ID: i64 = 4;

/// ID that no fixture ever uses
pub const MISSING_ID: i64 = 9999;

// ============================================================================
// Test Catalog Names
// ============================================================================

pub const ACTOR_BALE_NAME: &str = "Christian Bale";
pub const ACTOR_CAINE_NAME: &str = "Michael Caine";
pub const ACTOR_PACINO_NAME: &str = "Al Pacino";

pub const MOVIE_BATMAN_NAME: &str = "Batman Begins";
pub const MOVIE_HEAT_NAME: &str = "Heat";
pub const MOVIE_PRESTIGE_NAME: &str = "The Prestige";
pub const MOVIE_COMBAT_NAME: &str = "Combat Zone";

/// Number of movies created by the fixtures
pub const MOVIES_COUNT: usize = 4;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
