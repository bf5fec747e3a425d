//! Write a small two-parameter FCS file into the current directory.
//!
//! Run with: cargo run --example write_minimal

use fcs_writer::{
    keywords, DataMatrix, Destination, FcsWriter, FsDirectory, Header, KeywordMap, WriteOptions,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = keywords! {
        "$PAR" => 2,
        "$TOT" => 3,
        "$DATATYPE" => "F",
        "$BYTEORD" => "1,2,3,4",
        "$MODE" => "L",
        "$P1N" => "FSC-A",
        "$P1B" => 32,
        "$P1E" => "0,0",
        "$P1R" => 262144,
        "$P2N" => "SSC-A",
        "$P2B" => 32,
        "$P2E" => "0,0",
        "$P2R" => 262144,
        "#SOURCE" => "fcs_writer demo",
    };
    let data = DataMatrix::new(vec![vec![1.5, 2.5], vec![3.5, 4.5], vec![5.5, 6.5]]);

    let writer = FcsWriter::new(
        Header::default(),
        text,
        data,
        KeywordMap::new(),
        WriteOptions::new(),
    );

    let bytes = writer.to_bytes()?;
    println!("Header: {}", String::from_utf8_lossy(&bytes[..58]));

    writer.write_fcs("demo.fcs", Destination::Directory(&FsDirectory::new(".")))?;
    println!("✓ Wrote demo.fcs ({} bytes)", bytes.len());

    Ok(())
}
