//! Import of FCS content produced by an external reader.
//!
//! This crate does not parse FCS files. A reader exposes what it parsed through
//! [`FcsSource`], and [`crate::FcsWriter::read_fcs`] takes it over so the content can
//! be modified and written back out. [`FcsDocument`] is a plain owned source that
//! can also be loaded with serde, e.g. from the JSON a reader emits:
//!
//! ```rust
//! use fcs_writer::{FcsDocument, FcsSource};
//!
//! let json = r#"{
//!     "header": { "FCSVersion": "FCS3.1" },
//!     "text": { "$PAR": "1", "$TOT": "2", "$P1N": "FSC-A" },
//!     "data": [[1.0], [2.0]]
//! }"#;
//! let document: FcsDocument = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(document.header().format_version, "FCS3.1");
//! assert_eq!(document.data().rows(), 2);
//! assert!(document.analysis().is_empty());
//! ```

use crate::{DataMatrix, Header, KeywordMap};
use serde::{Deserialize, Serialize};

/// Parsed FCS content supplied by an external reader.
pub trait FcsSource {
    fn header(&self) -> &Header;
    fn text(&self) -> &KeywordMap;
    fn analysis(&self) -> &KeywordMap;
    fn data(&self) -> &DataMatrix;
}

/// Owned FCS content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FcsDocument {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub text: KeywordMap,
    #[serde(default)]
    pub analysis: KeywordMap,
    #[serde(default)]
    pub data: DataMatrix,
}

impl FcsSource for FcsDocument {
    fn header(&self) -> &Header {
        &self.header
    }

    fn text(&self) -> &KeywordMap {
        &self.text
    }

    fn analysis(&self) -> &KeywordMap {
        &self.analysis
    }

    fn data(&self) -> &DataMatrix {
        &self.data
    }
}
