use crate::core::types::ContigMatching;
use crate::core::variant::VariantRecord;

/// Do a sample record and a reference record describe the same variant?
///
/// Records match when they agree exactly on contig, position and reference allele
/// length. Overlapping but unequal records do not match.
#[must_use]
pub fn matches(
    sample: &VariantRecord,
    reference: &VariantRecord,
    contig_matching: ContigMatching,
) -> bool {
    let same_contig = match contig_matching {
        ContigMatching::Index => sample.contig_id == reference.contig_id,
        ContigMatching::Name => sample.contig_name == reference.contig_name,
    };

    same_contig
        && sample.position == reference.position
        && sample.ref_length == reference.ref_length
}
