//! Fatal defect coverage: each member of the error taxonomy, produced
//! from a realistic buffer and checked for the context it reports.

use olb_decoder::{DecodeError, OlbDecoder};
use olb_tests::fixture::{
    FixtureFont, LibraryBuilder, display_prop_body, framed_record, port_body,
};
use olb_types::TypeError;
use olb_wire::WireError;

fn library_with_catalogs() -> LibraryBuilder {
    LibraryBuilder::new()
        .with_string("Value")
        .with_font(FixtureFont::courier())
}

#[test]
fn unknown_record_type_reports_code_and_offset() {
    let builder = library_with_catalogs();
    let expected_offset = builder.record_stream_offset();
    let buf = builder.with_record(0x42, b"hello").build();

    match OlbDecoder::decode(&buf) {
        Err(DecodeError::UnknownRecordType { code: 0x42, offset }) => {
            assert_eq!(offset, expected_offset);
        }
        other => panic!("expected UnknownRecordType, got {other:?}"),
    }
}

#[test]
fn string_index_out_of_range_is_fatal() {
    // name_idx 99 against a one-entry string table.
    let buf = library_with_catalogs()
        .with_record(0x07, &display_prop_body(99, 0, 0, 0, 0, 0))
        .build();

    assert!(matches!(
        OlbDecoder::decode(&buf),
        Err(DecodeError::Type(TypeError::IndexOutOfRange {
            table: "string table",
            index: 99,
            len: 1
        }))
    ));
}

#[test]
fn font_index_out_of_range_is_fatal() {
    let buf = library_with_catalogs()
        .with_record(0x07, &display_prop_body(1, 0, 0, 5, 0, 0))
        .build();

    assert!(matches!(
        OlbDecoder::decode(&buf),
        Err(DecodeError::Type(TypeError::IndexOutOfRange {
            table: "font table",
            index: 5,
            len: 1
        }))
    ));
}

#[test]
fn unidentified_style_bits_are_fatal() {
    // Bits 8-13 of the style word are clear in every known sample; set
    // one and the decoder must refuse rather than guess.
    let mut body = display_prop_body(1, 0, 0, 0, 0, 0);
    body[9] |= 0b0000_0100; // high byte of the style word
    let buf = library_with_catalogs().with_record(0x07, &body).build();

    assert!(matches!(
        OlbDecoder::decode(&buf),
        Err(DecodeError::UnknownBits {
            field: "display property style word",
            ..
        })
    ));
}

#[test]
fn literal_assertion_failure_is_fatal() {
    // The display property trailer byte is 0x00 in every sample.
    let mut body = display_prop_body(1, 0, 0, 0, 0, 0);
    let last = body.len() - 1;
    body[last] = 0x5A;
    let buf = library_with_catalogs().with_record(0x07, &body).build();

    match OlbDecoder::decode(&buf) {
        Err(DecodeError::Wire(WireError::LiteralMismatch { label, found, .. })) => {
            assert_eq!(label, "display property trailer");
            assert_eq!(found, vec![0x5A]);
        }
        other => panic!("expected LiteralMismatch, got {other:?}"),
    }
}

#[test]
fn nested_record_of_the_wrong_kind_is_fatal() {
    // A port's counted children must be display properties; nest a t0x5b
    // record instead.
    let wrong_child = framed_record(0x5B, &[0x00; 2]);
    let buf = library_with_catalogs()
        .with_record(0x06, &port_body("VCC", &[wrong_child]))
        .build();

    match OlbDecoder::decode(&buf) {
        Err(DecodeError::UnexpectedRecord {
            expected, found, ..
        }) => {
            assert_eq!(expected, "display property");
            assert_eq!(found, "t0x5b");
        }
        other => panic!("expected UnexpectedRecord, got {other:?}"),
    }
}

#[test]
fn truncated_record_body_is_fatal() {
    // Declared 40 bytes but the file ends after 10.
    let buf = library_with_catalogs()
        .with_record_declared(0x28, 40, &[0u8; 10])
        .build();

    assert!(matches!(
        OlbDecoder::decode(&buf),
        Err(DecodeError::Wire(WireError::UnexpectedEof { .. }))
    ));
}

#[test]
fn garbage_between_records_is_fatal_not_ignored() {
    // A single stray byte where a preamble should start cannot form a
    // complete preamble.
    let mut buf = library_with_catalogs()
        .with_record(0x5B, &[0x00; 2])
        .build();
    buf.push(0xAA);

    assert!(matches!(
        OlbDecoder::decode(&buf),
        Err(DecodeError::Wire(WireError::UnexpectedEof { .. }))
    ));
}
