//! High-level FCS writer.
//!
//! [`FcsWriter`] holds one file's worth of content (header, TEXT keywords, DATA
//! matrix and an ANALYSIS map that is carried along but never written) and sends
//! the encoded file to a [`Destination`].

use crate::{
    write_chunked, DataMatrix, Destination, FcsSource, Header, KeywordMap, Result, Serializer,
    WriteOptions,
};
use log::info;

/// Content of an FCS file plus the options used to write it.
///
/// # Examples
///
/// ```rust
/// use fcs_writer::{keywords, DataMatrix, FcsWriter, Header, KeywordMap, WriteOptions};
///
/// let writer = FcsWriter::new(
///     Header::default(),
///     keywords! { "$PAR" => 2, "$TOT" => 1 },
///     DataMatrix::new(vec![vec![1.5, 2.5]]),
///     KeywordMap::new(),
///     WriteOptions::new(),
/// );
/// let bytes = writer.to_bytes().unwrap();
/// assert_eq!(&bytes[bytes.len() - 8..bytes.len() - 4], &1.5f32.to_le_bytes());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FcsWriter {
    pub header: Header,
    pub text: KeywordMap,
    pub data: DataMatrix,
    pub analysis: KeywordMap,
    pub options: WriteOptions,
}

impl FcsWriter {
    pub fn new(
        header: Header,
        text: KeywordMap,
        data: DataMatrix,
        analysis: KeywordMap,
        options: WriteOptions,
    ) -> Self {
        FcsWriter {
            header,
            text,
            data,
            analysis,
            options,
        }
    }

    /// Replaces the content with what an external reader parsed.
    ///
    /// Options are kept.
    pub fn read_fcs<S: FcsSource + ?Sized>(&mut self, source: &S) {
        self.header = source.header().clone();
        self.text = source.text().clone();
        self.analysis = source.analysis().clone();
        self.data = source.data().clone();
    }

    /// Encodes the content into a complete FCS file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OffsetWidth`] if an offset does not fit the
    /// 12-digit TEXT fields.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut serializer = Serializer::new(self.options.clone());
        serializer.serialize(&self.header, &self.text, &self.data)?;
        Ok(serializer.into_inner())
    }

    /// Encodes the content and sends it to `destination` as `file_name`.
    ///
    /// A [`Destination::Download`] receives the whole file and returns immediately.
    /// A [`Destination::Directory`] receives positioned writes of
    /// [`WriteOptions::chunk_size`] bytes followed by a close.
    ///
    /// # Errors
    ///
    /// Returns encoding errors, and any error from creating or writing the file
    /// in a directory. After a failed chunk write the stream is not closed and
    /// earlier chunks may already be on disk.
    pub fn write_fcs(&self, file_name: &str, destination: Destination<'_>) -> Result<()> {
        let bytes = self.to_bytes()?;
        match destination {
            Destination::Download(target) => {
                info!("Downloading {} ({} bytes)", file_name, bytes.len());
                target.download(file_name, &bytes);
            }
            Destination::Directory(directory) => {
                info!("Writing {} ({} bytes)", file_name, bytes.len());
                let mut stream = directory.create_writable(file_name)?;
                write_chunked(stream.as_mut(), &bytes, self.options.chunk_size)?;
            }
        }
        Ok(())
    }
}
