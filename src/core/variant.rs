use serde::{Deserialize, Serialize};

use crate::core::types::ContigMatching;

/// A single called variant, reduced to the fields used for matching
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantRecord {
    /// Index of the contig in the source file's contig dictionary (0-based)
    pub contig_id: usize,

    /// Contig name as written in the source file
    pub contig_name: String,

    /// 0-based start of the variant on its contig (-1 for a telomeric `POS` of 0)
    pub position: i64,

    /// Length of the reference allele in bases
    pub ref_length: usize,
}

impl VariantRecord {
    pub fn new(
        contig_id: usize,
        contig_name: impl Into<String>,
        position: i64,
        ref_length: usize,
    ) -> Self {
        Self {
            contig_id,
            contig_name: contig_name.into(),
            position,
            ref_length,
        }
    }

    /// 1-based position, as displayed in VCF `POS`
    #[must_use]
    pub fn display_position(&self) -> i64 {
        self.position + 1
    }

    /// Project this record onto the fields compared by the match predicate
    #[must_use]
    pub fn key(&self, contig_matching: ContigMatching) -> VariantKey {
        let contig = match contig_matching {
            ContigMatching::Index => ContigKey::Index(self.contig_id),
            ContigMatching::Name => ContigKey::Name(self.contig_name.clone()),
        };

        VariantKey {
            contig,
            position: self.position,
            ref_length: self.ref_length,
        }
    }
}

impl std::fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} (ref_len={})",
            self.contig_name,
            self.display_position(),
            self.ref_length
        )
    }
}

/// Contig identity under a given [`ContigMatching`] mode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContigKey {
    Index(usize),
    Name(String),
}

/// Hashable projection of a [`VariantRecord`] used for exact matching
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    pub contig: ContigKey,
    pub position: i64,
    pub ref_length: usize,
}
