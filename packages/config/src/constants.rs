// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across labtrack

// Storage Configuration
pub const LABTRACK_DATA_DIR: &str = "LABTRACK_DATA_DIR";
pub const LABTRACK_STORAGE_BACKEND: &str = "LABTRACK_STORAGE_BACKEND";
pub const LABTRACK_CORRUPT_STORE_POLICY: &str = "LABTRACK_CORRUPT_STORE_POLICY";

// Request Repository Configuration
pub const LABTRACK_ID_STRATEGY: &str = "LABTRACK_ID_STRATEGY";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// System Environment Variables
pub const HOME: &str = "HOME";
