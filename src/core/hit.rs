/// Convert a base count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// A single alignment hit between a reference 16S sequence and an input file.
///
/// BLAST is run with the reference database as the query, so `query_id` is the
/// identifier of a reference sequence and is resolved through the
/// [`ReferenceIndex`](crate::catalog::store::ReferenceIndex).
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    /// Reference sequence identifier (`qseqid`)
    pub query_id: String,

    /// Number of aligned bases (`length`)
    pub alignment_length: u64,

    /// Percentage of identical positions, 0-100 (`pident`)
    pub percent_identity: f64,

    /// Aligned query span as a percentage of the query length.
    /// Not clamped: gapped aligned sequences can push this above 100.
    pub query_coverage: f64,
}

impl Hit {
    pub fn new(
        query_id: impl Into<String>,
        alignment_length: u64,
        percent_identity: f64,
        query_coverage: f64,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            alignment_length,
            percent_identity,
            query_coverage,
        }
    }

    /// Build a hit from the raw columns, computing coverage as
    /// `100 * aligned_query_len / query_len`.
    ///
    /// `query_len` must be non-zero; the parser rejects zero lengths before
    /// calling this.
    #[must_use]
    pub fn from_alignment(
        query_id: impl Into<String>,
        alignment_length: u64,
        percent_identity: f64,
        query_len: u64,
        aligned_query_len: u64,
    ) -> Self {
        let query_coverage = 100.0 * count_to_f64(aligned_query_len) / count_to_f64(query_len);
        Self::new(query_id, alignment_length, percent_identity, query_coverage)
    }
}
