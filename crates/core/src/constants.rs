//! Shared constants for holy-word.

use chrono::NaiveDate;

/// Day 1 of the verse cycle.
pub const START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 20) {
    Some(date) => date,
    None => panic!("invalid start date"),
};

/// Dataset file name looked up next to the running executable.
pub const DEFAULT_DATASET_FILE: &str = "verses-data.json";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "HOLY_WORD_DATASET";

/// Default port of the long-running server.
pub const DEFAULT_PORT: u16 = 3001;

/// Default bind host of the long-running server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const VERSES_PATH: &str = "/api/verses";
pub const DAILY_VERSE_PATH: &str = "/api/daily-verse";
pub const HEALTH_PATH: &str = "/health";

/// Text of the `usage.documentation` field in the verse list.
pub const API_DOCUMENTATION: &str =
    "This API provides free access to Bible verses in English and Telugu";

/// Client-facing error bodies. Never carry internal detail.
pub const LIST_VERSES_FAILED: &str = "Failed to fetch verses";
pub const DAILY_VERSE_FAILED: &str = "Failed to fetch daily verse";
pub const NO_VERSE_FOUND: &str = "No verse found for today";
