/// Implementation of `olb validate`.
///
/// Attempts a full structural decode and reports either a series of
/// success checkmarks (`✓`) or a diagnostic failure line (`✗`). The
/// command exits 0 on a valid file and 1 on any defect (the dispatcher
/// in `main.rs` converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Header: valid (version 0x0001)
/// ✓ Catalogs: 12 strings, 2 fonts
/// ✓ Records: 3 records decoded
/// ✓ Accounting: every declared region verified by checkpoint
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: structure read past its declared end: expected 0x000000c8, ended at 0x000000d2 (10 byte(s) over)
/// ```
///
/// A file that decodes fully is structurally valid: the decode itself
/// runs the whole offset-accounting protocol, so there is no separate
/// verification pass to run.
use std::fs;

use anyhow::{Context, Result, anyhow};
use olb_decoder::{DecodeError, OlbDecoder};

use crate::ValidateArgs;

/// Run the `olb validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails any structural
/// check.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match OlbDecoder::decode(&bytes) {
        Ok(decoded) => {
            println!("✓ Header: valid (version {:#06x})", decoded.version);
            println!(
                "✓ Catalogs: {} strings, {} fonts",
                decoded.catalogs.strings.len(),
                decoded.catalogs.fonts.len()
            );
            println!(
                "✓ Records: {} record{} decoded",
                decoded.records.len(),
                if decoded.records.len() == 1 { "" } else { "s" }
            );
            println!("✓ Accounting: every declared region verified by checkpoint");
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {}", decode_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a `DecodeError` into the diagnostic line shown to the user.
///
/// The byte-accounting defects get a hint about what they usually mean
/// in practice; everything else already carries its offsets in the
/// Display impl.
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::CheckpointMismatch { .. } | DecodeError::Overrun { .. } => {
            format!("{e} — a field before this point was likely misread")
        }
        DecodeError::UnverifiedWindows { .. } => {
            format!("{e} — declared sub-regions were never visited")
        }
        DecodeError::UnknownRecordType { .. } => {
            format!("{e} — this decoder does not understand the file")
        }
        other => other.to_string(),
    }
}
