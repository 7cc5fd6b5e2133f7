//! Variant records from VCF and BCF files.
//!
//! Plain VCF, bgzip-compressed VCF and BCF are read with noodles. BCF is chosen by the
//! `.bcf` extension; anything else is read as VCF, and bgzip compression is detected
//! from the gzip magic bytes rather than the extension. Each call to
//! [`VariantSource::open`] opens the file again and reads its header, so every scan
//! starts from the first record and owns its file handle until it is dropped.
//!
//! Contig dictionary indexes follow the order of the `##contig` header lines. A record
//! on a contig that the header does not declare gets the next free index, so records
//! from headerless files still have stable ids within one scan.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use noodles::vcf::variant::record::ReferenceBases as _;
use noodles::{bcf, vcf};
use tracing::{debug, warn};

use crate::core::variant::VariantRecord;
use crate::parsing::source::{SourceError, VariantRecords, VariantSource};

/// On-disk encoding of a variant file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFormat {
    /// Text VCF, optionally bgzip-compressed
    Vcf,
    /// Binary BCF
    Bcf,
}

impl VariantFormat {
    /// Detect the format from the file extension, defaulting to VCF
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("bcf") => Self::Bcf,
            _ => Self::Vcf,
        }
    }
}

/// A variant file on disk
#[derive(Debug, Clone)]
pub struct VcfSource {
    path: PathBuf,
    format: VariantFormat,
}

impl VcfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = VariantFormat::from_path(&path);
        Self { path, format }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn format(&self) -> VariantFormat {
        self.format
    }
}

impl VariantSource for VcfSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<VariantRecords<'_>, SourceError> {
        match self.format {
            VariantFormat::Vcf => open_vcf(&self.path),
            VariantFormat::Bcf => open_bcf(&self.path),
        }
    }
}

/// Leading bytes of every gzip member, and so of every BGZF block
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open a VCF file, bgzip-compressed or not
fn open_vcf(path: &Path) -> Result<VariantRecords<'static>, SourceError> {
    let open_error = |source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map(BufReader::new).map_err(open_error)?;
    let compression = detect_compression(&mut file).map_err(open_error)?;
    debug!(path = %path.display(), ?compression, "Detected VCF compression");

    let mut reader = vcf::io::reader::Builder::default()
        .set_compression_method(compression)
        .build_from_reader(file)
        .map_err(open_error)?;

    let header = reader.read_header().map_err(|source| SourceError::Header {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Box::new(Records::new(reader, header, path)))
}

/// Peek at the first bytes without consuming them
fn detect_compression<R: BufRead>(reader: &mut R) -> io::Result<vcf::io::CompressionMethod> {
    let head = reader.fill_buf()?;

    if head.starts_with(&GZIP_MAGIC) {
        Ok(vcf::io::CompressionMethod::Bgzf)
    } else {
        Ok(vcf::io::CompressionMethod::None)
    }
}

/// Open a BCF file
fn open_bcf(path: &Path) -> Result<VariantRecords<'static>, SourceError> {
    let mut reader = File::open(path)
        .map(bcf::io::Reader::new)
        .map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let header = reader.read_header().map_err(|source| SourceError::Header {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Box::new(Records::new(reader, header, path)))
}

/// Format-specific record reading behind one iterator
trait RecordReader {
    type Record: vcf::variant::Record + Default;

    /// Read the next record into `record`, returning 0 at end of stream
    fn read_next(&mut self, record: &mut Self::Record) -> io::Result<usize>;
}

impl<R: BufRead> RecordReader for vcf::io::Reader<R> {
    type Record = vcf::Record;

    fn read_next(&mut self, record: &mut Self::Record) -> io::Result<usize> {
        self.read_record(record)
    }
}

impl<R: Read> RecordReader for bcf::io::Reader<R> {
    type Record = bcf::Record;

    fn read_next(&mut self, record: &mut Self::Record) -> io::Result<usize> {
        self.read_record(record)
    }
}

/// Contig name to dictionary index, seeded from the header
#[derive(Debug, Default)]
struct ContigDictionary {
    ids: HashMap<String, usize>,
}

impl ContigDictionary {
    fn from_header(header: &vcf::Header) -> Self {
        let ids = header
            .contigs()
            .keys()
            .enumerate()
            .map(|(id, name)| (name.to_string(), id))
            .collect();

        Self { ids }
    }

    fn resolve(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.ids.len();
        warn!(contig = %name, id, "Contig is not defined in the header, adding it");
        self.ids.insert(name.to_string(), id);
        id
    }
}

struct Records<T: RecordReader> {
    reader: T,
    record: T::Record,
    header: vcf::Header,
    dictionary: ContigDictionary,
    path: PathBuf,
    records_read: u64,
    finished: bool,
}

impl<T: RecordReader> Records<T> {
    fn new(reader: T, header: vcf::Header, path: &Path) -> Self {
        let dictionary = ContigDictionary::from_header(&header);

        debug!(
            path = %path.display(),
            contigs = dictionary.ids.len(),
            "Opened variant file"
        );

        Self {
            reader,
            record: T::Record::default(),
            header,
            dictionary,
            path: path.to_path_buf(),
            records_read: 0,
            finished: false,
        }
    }

    fn read_error(&self, source: io::Error) -> SourceError {
        SourceError::RecordRead {
            path: self.path.clone(),
            record: self.records_read,
            source,
        }
    }
}

impl<T: RecordReader> Iterator for Records<T> {
    type Item = Result<VariantRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = match self.reader.read_next(&mut self.record) {
            Ok(0) => {
                self.finished = true;
                debug!(
                    path = %self.path.display(),
                    records = self.records_read,
                    "Reached end of variant file"
                );
                return None;
            }
            Ok(_) => {
                self.records_read += 1;
                to_variant(&self.record, &self.header, &mut self.dictionary)
            }
            Err(e) => {
                self.records_read += 1;
                Err(e)
            }
        };

        match result {
            Ok(variant) => Some(Ok(variant)),
            Err(e) => {
                self.finished = true;
                Some(Err(self.read_error(e)))
            }
        }
    }
}

/// Reduce a noodles record to the fields used for matching
fn to_variant<R: vcf::variant::Record>(
    record: &R,
    header: &vcf::Header,
    dictionary: &mut ContigDictionary,
) -> io::Result<VariantRecord> {
    let contig_name = record.reference_sequence_name(header)?;
    let contig_id = dictionary.resolve(contig_name);

    // POS 0 (telomere) has no variant start
    let position = match record.variant_start().transpose()? {
        Some(start) => i64::try_from(usize::from(start))
            .map(|pos| pos - 1)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        None => -1,
    };

    let ref_length = record.reference_bases().len();

    Ok(VariantRecord::new(
        contig_id,
        contig_name,
        position,
        ref_length,
    ))
}
