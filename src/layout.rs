//! FCS File Layout
//!
//! This module documents the subset of the Flow Cytometry Standard written by this
//! library.
//!
//! # Segments
//!
//! ```text
//! +----------------+----------------------------+------------------------+
//! | HEADER (58 B)  | TEXT (keyword/value pairs) | DATA (little-endian f32)|
//! +----------------+----------------------------+------------------------+
//! 0               57 58                 text_end  data_start      data_end
//! ```
//!
//! Segments are contiguous: DATA begins at the byte after TEXT ends. No ANALYSIS
//! segment is written and its offsets are always `0`.
//!
//! # HEADER
//!
//! | Bytes | Content |
//! |-------|---------|
//! | 0–5   | Version identifier, e.g. `FCS3.1` |
//! | 6–9   | Four spaces |
//! | 10–17 | TEXT start, right-justified |
//! | 18–25 | TEXT end |
//! | 26–33 | DATA start |
//! | 34–41 | DATA end |
//! | 42–49 | ANALYSIS start (`0`) |
//! | 50–57 | ANALYSIS end (`0`) |
//!
//! Offsets above 99,999,999 are written as `0`; the TEXT keywords then carry them.
//! A version identifier that is not 6 characters long shifts every following byte,
//! and TEXT starts wherever the header actually ends.
//!
//! # TEXT
//!
//! The TEXT segment is a sequence of `*KEYWORD*VALUE` pairs with no trailing
//! delimiter. Offsets are stored as 12 zero-padded digits:
//!
//! ```text
//! *$PAR*2*$BEGINANALYSIS*000000000000*$BEGINDATA*000000000412*...*$P1N*FSC-A*...
//! ```
//!
//! Keywords appear in this order:
//!
//! 1. `$PAR`
//! 2. Required keywords before `$P`: `$BEGINANALYSIS`, `$BEGINDATA`, `$BEGINSTEXT`,
//!    `$BYTEORD`, `$DATATYPE`, `$ENDANALYSIS`, `$ENDDATA`, `$ENDSTEXT`, `$MODE`,
//!    `$NEXTDATA`
//! 3. Parameter keywords `$PnB`, `$PnE`, `$PnN`, `$PnR`, `$PnS`, grouped by
//!    parameter number (`$P3N` precedes `$P12N`)
//! 4. `$TOT`
//! 5. All other keywords, alphabetically
//! 6. `#`-prefixed vendor keywords, alphabetically
//!
//! # DATA
//!
//! One 4-byte little-endian IEEE-754 float per value, event by event. A file with
//! `$TOT` events of `$PAR` parameters has a DATA segment of `4 × $TOT × $PAR` bytes.
//! The caller is responsible for declaring `$DATATYPE/F/`, `$BYTEORD/1,2,3,4/` and
//! `$PnB/32/` to match.
//!
//! # Limitations
//!
//! - **File size**: offsets must fit in 12 digits (files under 1 TB)
//! - **Values**: keywords and values are not escaped; values containing the
//!   delimiter or non-ASCII characters produce an unreadable TEXT segment
//! - **Validation**: required keywords and row lengths are not checked

// This module contains only documentation; no implementation code
