use serde::Serialize;

/// Kind of species call derived from a [`BestMatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// No hit survived selection; species undetermined
    NoMatch,
    /// Exactly one species was selected
    Unique,
    /// Several species tied or improved on each other
    Multiple,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => write!(f, "Unavailable"),
            Self::Unique => write!(f, "Unique"),
            Self::Multiple => write!(f, "Multiple results"),
        }
    }
}

/// Best-supported species for one input file.
///
/// `species` holds distinct names in the order their supporting hits were
/// first accepted. `best_identity` and `best_coverage` are the selector's
/// frontier values at the end of the scan (0.0 when nothing was accepted).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestMatch {
    pub species: Vec<String>,
    pub best_identity: f64,
    pub best_coverage: f64,
}

impl BestMatch {
    #[must_use]
    pub fn match_type(&self) -> MatchType {
        match self.species.len() {
            0 => MatchType::NoMatch,
            1 => MatchType::Unique,
            _ => MatchType::Multiple,
        }
    }

    /// First accepted species, if any
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.species.first().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
