use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read reference database: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed reference header on line {line}: '{header}' (expected '>ID Genus species ...')")]
    MalformedHeader { line: usize, header: String },
}

/// FASTA record marker
const HEADER_MARKER: char = '>';

/// One reference 16S sequence: identifier and two-word species name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub id: String,
    pub species_name: String,
}

impl ReferenceEntry {
    /// Parse a header line with the leading `>` already stripped.
    ///
    /// Tokens are split on single spaces; token 0 is the identifier and
    /// tokens 1 and 2 form the species name. Returns `None` if there are
    /// fewer than three tokens.
    pub fn from_header(header: &str) -> Option<Self> {
        let mut tokens = header.split(' ');
        let id = tokens.next()?;
        let genus = tokens.next()?;
        let species = tokens.next()?;

        Some(Self {
            id: id.to_string(),
            species_name: format!("{genus} {species}"),
        })
    }
}

/// Lookup from reference sequence identifier to species name.
///
/// Built once from the reference FASTA; read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReferenceIndex {
    id_to_species: HashMap<String, String>,
}

impl ReferenceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the index from a FASTA reference database.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be opened or read, or
    /// `CatalogError::MalformedHeader` if a header has fewer than three tokens.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build the index from any buffered FASTA source. Sequence lines are skipped.
    ///
    /// # Errors
    ///
    /// See [`ReferenceIndex::load_from_file`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        let mut index = Self::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(header) = line.strip_prefix(HEADER_MARKER) else {
                continue;
            };

            let entry =
                ReferenceEntry::from_header(header).ok_or_else(|| CatalogError::MalformedHeader {
                    line: i + 1,
                    header: line.clone(),
                })?;
            index.add_entry(entry);
        }

        Ok(index)
    }

    /// Add an entry. A repeated identifier replaces the earlier species name.
    pub fn add_entry(&mut self, entry: ReferenceEntry) {
        if let Some(previous) = self
            .id_to_species
            .insert(entry.id.clone(), entry.species_name.clone())
        {
            warn!(
                "Duplicate reference identifier '{}': '{}' replaced by '{}'",
                entry.id, previous, entry.species_name
            );
        }
    }

    /// Species name for a reference identifier
    pub fn species(&self, id: &str) -> Option<&str> {
        self.id_to_species.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.id_to_species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_species.is_empty()
    }
}
