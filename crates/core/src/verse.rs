use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{API_DOCUMENTATION, DAILY_VERSE_PATH, VERSES_PATH};

/// One verse exactly as it appears in the dataset file.
///
/// Text fields that are missing or `null` in the file deserialize as empty
/// strings; only `Count` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    #[serde(rename = "Count")]
    pub sequence_number: u64,
    #[serde(rename = "English verse", default, deserialize_with = "null_as_empty")]
    pub english_text: String,
    #[serde(rename = "English reference", default, deserialize_with = "null_as_empty")]
    pub english_reference: String,
    #[serde(rename = "Telugu verse part 1", default, deserialize_with = "null_as_empty")]
    pub telugu_text_part1: String,
    #[serde(rename = "Telugu verse part 2", default, deserialize_with = "null_as_empty")]
    pub telugu_text_part2: String,
    #[serde(rename = "Telugu reference", default, deserialize_with = "null_as_empty")]
    pub telugu_reference: String,
    #[serde(rename = "image reference for background", default, deserialize_with = "null_as_empty")]
    pub background_image_description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Public shape of a verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseResponse {
    pub id: u64,
    pub english: String,
    pub english_reference: String,
    pub telugu: String,
    pub telugu_reference: String,
    pub background_image: String,
}

/// Today's verse with its position in the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyVerseResponse {
    #[serde(flatten)]
    pub verse: VerseResponse,
    /// Days since launch, 1-based. Not wrapped at the end of the cycle.
    pub day_number: i64,
    pub total_verses: usize,
}

/// Body of the full verse list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseListResponse {
    pub total_verses: usize,
    pub verses: Vec<VerseResponse>,
    pub usage: ApiUsage,
}

/// Pointers to the API routes, embedded in the verse list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUsage {
    pub daily_verse: String,
    pub all_verses: String,
    pub documentation: String,
}

impl Default for ApiUsage {
    fn default() -> Self {
        Self {
            daily_verse: DAILY_VERSE_PATH.to_owned(),
            all_verses: VERSES_PATH.to_owned(),
            documentation: API_DOCUMENTATION.to_owned(),
        }
    }
}

/// Liveness snapshot of the long-running server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub verses_loaded: usize,
}

/// Error body shared by every endpoint: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self { error: message.to_owned() }
    }
}
