use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The two independently deployed functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Verses,
    DailyVerse,
}

#[derive(Debug, Error)]
#[error("unknown function '{0}' (expected 'verses' or 'daily-verse')")]
pub struct UnknownEndpoint(pub String);

impl Endpoint {
    pub const ALL: [Self; 2] = [Self::Verses, Self::DailyVerse];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Verses => "verses",
            Self::DailyVerse => "daily-verse",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| UnknownEndpoint(s.to_owned()))
    }
}
