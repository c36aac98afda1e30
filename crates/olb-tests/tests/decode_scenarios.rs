//! End-to-end offset-accounting scenarios.
//!
//! Three outcomes are possible when a record reader disagrees with the
//! preamble's declaration: exact agreement (silent success), reading too
//! little (recoverable — the gap is skipped and decode continues), and
//! reading too much (fatal — later bytes would be interpreted under a
//! wrong schema). Each is pinned down here against real buffers.

use olb_decoder::{DecodeError, OlbDecoder};
use olb_tests::fixture::{LibraryBuilder, arc_body};
use olb_types::RecordKind;

// ── Exact agreement ───────────────────────────────────────────────────────────

#[test]
fn record_consuming_exactly_its_declaration_decodes_clean() {
    // A 20-byte region the reader skips in full and checkpoints.
    let buf = LibraryBuilder::new()
        .with_record(0x5B, &[0xAB; 20])
        .build();

    let decoded = OlbDecoder::decode(&buf).unwrap();
    assert_eq!(decoded.records.len(), 1);
    assert_eq!(decoded.records[0].kind(), RecordKind::T0x5b);
}

#[test]
fn field_reader_landing_on_the_declared_stop_decodes_clean() {
    // The arc reader consumes its 40 bytes field by field; the declared
    // size agrees.
    let buf = LibraryBuilder::new().with_record(0x28, &arc_body(1)).build();

    let decoded = OlbDecoder::decode(&buf).unwrap();
    assert_eq!(decoded.records.len(), 1);
    assert_eq!(decoded.records[0].kind(), RecordKind::GraphicArc);
}

// ── Underrun: implementation smaller than the declaration ─────────────────────

#[test]
fn underrun_skips_the_shortfall_and_continues() {
    // 45 declared bytes against a 40-byte reader: the 5-byte tail is
    // skipped, and the proof that the cursor lands exactly on the
    // declared stop is that the next record decodes normally.
    let mut body = arc_body(1);
    body.extend_from_slice(&[0xEE; 5]);

    let buf = LibraryBuilder::new()
        .with_record(0x28, &body)
        .with_record(0x5B, &[0x00; 4])
        .build();

    let decoded = OlbDecoder::decode(&buf).unwrap();
    assert_eq!(decoded.records.len(), 2);
    assert_eq!(decoded.records[0].kind(), RecordKind::GraphicArc);
    assert_eq!(decoded.records[1].kind(), RecordKind::T0x5b);
}

// ── Overrun: implementation larger than the declaration ───────────────────────

#[test]
fn overrun_is_fatal_and_reports_the_magnitude() {
    // The arc reader consumes 40 bytes but the preamble only declared
    // 35. The 40 bytes exist in the buffer — the defect is the
    // disagreement with the declaration, not a truncation.
    let buf = LibraryBuilder::new()
        .with_record_declared(0x28, 35, &arc_body(1))
        .build();

    match OlbDecoder::decode(&buf) {
        Err(DecodeError::Overrun { expected, actual }) => {
            assert_eq!(actual - expected, 5);
        }
        other => panic!("expected Overrun, got {other:?}"),
    }
}

#[test]
fn overrun_aborts_the_whole_file() {
    // A perfectly fine sibling after the overrunning record must not be
    // reached: fatal defects return no partial tree.
    let buf = LibraryBuilder::new()
        .with_record_declared(0x28, 35, &arc_body(1))
        .with_record(0x5B, &[0x00; 4])
        .build();

    assert!(matches!(
        OlbDecoder::decode(&buf),
        Err(DecodeError::Overrun { .. })
    ));
}
