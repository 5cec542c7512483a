use thiserror::Error;
use tracing::debug;

use crate::catalog::store::ReferenceIndex;
use crate::core::hit::Hit;
use crate::core::types::BestMatch;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Hit references '{0}', which is not in the reference database")]
    UnknownReference(String),
}

/// Default minimum alignment length for a hit to count as evidence
pub const DEFAULT_MIN_ALIGNMENT_LENGTH: u64 = 1000;

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Hits with fewer aligned bases than this are discarded
    pub min_alignment_length: u64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_alignment_length: DEFAULT_MIN_ALIGNMENT_LENGTH,
        }
    }
}

/// Selects the best-supported species from the hits of one input file
pub struct MatchingEngine<'a> {
    index: &'a ReferenceIndex,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(index: &'a ReferenceIndex) -> Self {
        Self {
            index,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(index: &'a ReferenceIndex, config: MatchingConfig) -> Self {
        Self { index, config }
    }

    /// Scan hits in order, keeping a non-decreasing (identity, coverage) frontier.
    ///
    /// A hit is accepted when it is long enough and neither its identity nor its
    /// coverage falls below the current best. Each accepted hit moves the
    /// frontier to its values and contributes its species unless that species
    /// was already recorded. Ties between different species therefore
    /// accumulate into a multi-species result instead of being broken.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownReference` if an accepted hit's identifier
    /// is missing from the reference index.
    pub fn find_best_matches(&self, hits: &[Hit]) -> Result<BestMatch, MatchError> {
        let mut best = BestMatch::default();

        for hit in hits {
            if hit.alignment_length < self.config.min_alignment_length {
                continue;
            }

            if hit.percent_identity >= best.best_identity && hit.query_coverage >= best.best_coverage {
                best.best_identity = hit.percent_identity;
                best.best_coverage = hit.query_coverage;

                let species = self
                    .index
                    .species(&hit.query_id)
                    .ok_or_else(|| MatchError::UnknownReference(hit.query_id.clone()))?;

                debug!(
                    "Accepted {} ({species}): {:.2}% identity, {:.2}% coverage",
                    hit.query_id, hit.percent_identity, hit.query_coverage
                );

                if !best.species.iter().any(|s| s == species) {
                    best.species.push(species.to_string());
                }
            }
        }

        Ok(best)
    }
}
