use fcs_writer::{
    keywords, to_bytes, to_bytes_with_options, DataMatrix, Delimiter, Error, Header,
    WriteOptions,
};

const MINIMAL_HEADER: &[u8] = b"FCS3.1          58     242     243     246       0       0";
const MINIMAL_TEXT: &[u8] = b"*$PAR*1\
*$BEGINANALYSIS*000000000000\
*$BEGINDATA*000000000243\
*$BEGINSTEXT*000000000058\
*$ENDANALYSIS*000000000000\
*$ENDDATA*000000000246\
*$ENDSTEXT*000000000242\
*$NEXTDATA*000000000000\
*$TOT*1";

#[test]
fn test_minimal_file_is_byte_exact() {
    let text = keywords! { "$TOT" => 1, "$PAR" => 1 };
    let data = DataMatrix::new(vec![vec![2.0]]);
    let bytes = to_bytes(&Header::default(), &text, &data).unwrap();

    let mut expected = MINIMAL_HEADER.to_vec();
    expected.extend_from_slice(MINIMAL_TEXT);
    expected.extend_from_slice(&2.0f32.to_le_bytes());
    assert_eq!(bytes, expected);
}

#[test]
fn test_header_is_58_bytes() {
    let text = keywords! { "$PAR" => 1 };
    let bytes = to_bytes(&Header::default(), &text, &DataMatrix::default()).unwrap();
    assert_eq!(&bytes[..10], b"FCS3.1    ");
    assert_eq!(bytes[58], b'*');
    assert!(bytes[..58].iter().all(u8::is_ascii));
}

#[test]
fn test_version_string_passed_through() {
    let text = keywords! { "$PAR" => 1 };
    let bytes = to_bytes(&Header::new("FCS3.0"), &text, &DataMatrix::default()).unwrap();
    assert_eq!(&bytes[..10], b"FCS3.0    ");
}

#[test]
fn test_data_segment_size() {
    let text = keywords! { "$PAR" => 3, "$TOT" => 5 };
    let data = DataMatrix::new(vec![vec![0.0; 3]; 5]);
    let with_data = to_bytes(&Header::default(), &text, &data).unwrap();
    let without = to_bytes(&Header::default(), &text, &DataMatrix::default()).unwrap();
    assert_eq!(with_data.len() - without.len(), 4 * 3 * 5);
}

#[test]
fn test_no_trailing_delimiter() {
    let text = keywords! { "$PAR" => 1, "ZZZ" => "last" };
    let bytes = to_bytes(&Header::default(), &text, &DataMatrix::default()).unwrap();
    assert!(bytes.ends_with(b"*ZZZ*last"));
}

#[test]
fn test_custom_delimiter_layout() {
    let options = WriteOptions::new().with_delimiter(Delimiter::Slash);
    let text = keywords! { "$TOT" => 1, "$PAR" => 1 };
    let data = DataMatrix::new(vec![vec![2.0]]);
    let bytes = to_bytes_with_options(&Header::default(), &text, &data, options).unwrap();

    // Same lengths as the asterisk layout, only the delimiter differs.
    let expected_text: Vec<u8> = MINIMAL_TEXT
        .iter()
        .map(|&b| if b == b'*' { b'/' } else { b })
        .collect();
    assert_eq!(&bytes[..58], MINIMAL_HEADER);
    assert_eq!(&bytes[58..243], &expected_text[..]);
}

#[test]
fn test_offsets_wider_than_text_fields() {
    // A stale value wider than 12 digits shrinks once the real offset replaces it.
    let text = keywords! { "$PAR" => 1, "$ENDDATA" => "1234567890123" };
    let err = to_bytes(&Header::default(), &text, &DataMatrix::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::OffsetWidth {
            first_pass,
            second_pass,
        } if first_pass == second_pass + 1
    ));
}
