//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;

use noodles::vcf::variant::io::Write as _;
use noodles::{bcf, bgzf, vcf};
use tempfile::NamedTempFile;

pub const HEADER: &str = "##fileformat=VCFv4.2
##contig=<ID=1,length=248956422>
##contig=<ID=2,length=242193529>
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
";

/// Same contigs as [`HEADER`], declared in the opposite order
pub const SWAPPED_HEADER: &str = "##fileformat=VCFv4.2
##contig=<ID=2,length=242193529>
##contig=<ID=1,length=248956422>
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO
";

/// A VCF data line for a variant with the given 1-based position and REF allele
pub fn line(chrom: &str, pos: u64, reference: &str) -> String {
    format!("{chrom}\t{pos}\t.\t{reference}\tN\t50\tPASS\t.\n")
}

/// Write a VCF file with the given header and data lines
pub fn write_vcf(header: &str, lines: &[String]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".vcf")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(header.as_bytes()).unwrap();
    for line in lines {
        file.write_all(line.as_bytes()).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Write a bgzip-compressed VCF file with a `.vcf.gz` extension
pub fn write_vcf_gz(header: &str, lines: &[String]) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".vcf.gz")
        .tempfile()
        .expect("Failed to create temp file");
    let mut writer = bgzf::Writer::new(file.reopen().unwrap());
    writer.write_all(header.as_bytes()).unwrap();
    for line in lines {
        writer.write_all(line.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    file
}

/// Write a BCF file holding the same header and records as the VCF text
pub fn write_bcf(header: &str, lines: &[String]) -> NamedTempFile {
    let text = format!("{header}{}", lines.concat());
    let mut reader = vcf::io::Reader::new(text.as_bytes());
    let vcf_header = reader.read_header().unwrap();

    let file = tempfile::Builder::new()
        .suffix(".bcf")
        .tempfile()
        .expect("Failed to create temp file");
    let mut writer = bcf::io::Writer::new(file.reopen().unwrap());
    writer.write_header(&vcf_header).unwrap();
    for record in reader.records() {
        writer
            .write_variant_record(&vcf_header, &record.unwrap())
            .unwrap();
    }
    writer.try_finish().unwrap();
    file
}
