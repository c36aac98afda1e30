/// Implementation of `olb inspect`.
///
/// Decodes the library and prints a per-record summary through a
/// [`Visitor`], so this command never matches on the record enum itself —
/// it sees exactly what any other traversal consumer sees.
///
/// # Example output
///
/// ```text
/// library version 0x0001: 12 string(s), 2 font(s), 3 record(s)
///
/// port 'VCC' (2 display properties)
///   display property 'Value' at (30, -40), font 0, 90°
///   display property 'Reference' at (0, 0), font 1, 0°
/// graphic arc #7 at (10, -20), box (0, 0)-(100, 100)
/// t0x5b (contents not yet understood)
/// ```
use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use olb_decoder::OlbDecoder;
use olb_types::{Bitmap, DisplayProp, GraphicArc, PartInst, Port, T0x5b, Visitor};

use crate::InspectArgs;

/// Run the `olb inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to decode.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    let decoded = OlbDecoder::decode(&bytes)
        .with_context(|| format!("cannot decode {}", args.file.display()))?;

    println!(
        "library version {:#06x}: {} string(s), {} font(s), {} record(s)",
        decoded.version,
        decoded.catalogs.strings.len(),
        decoded.catalogs.fonts.len(),
        decoded.records.len()
    );
    println!();

    let mut summary = SummaryVisitor::default();
    for record in &decoded.records {
        record.accept(&mut summary);
    }
    print!("{}", summary.out);

    Ok(())
}

// ── Summary visitor ───────────────────────────────────────────────────────────

/// Builds the indented text summary. Descends into nested records by
/// re-dispatching through `accept`, so nesting depth follows the
/// ownership tree.
#[derive(Default)]
struct SummaryVisitor {
    out: String,
    depth: usize,
}

impl SummaryVisitor {
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{:indent$}{text}", "", indent = self.depth * 2);
    }
}

impl Visitor for SummaryVisitor {
    fn visit_port(&mut self, port: &Port) {
        self.line(&format!(
            "port '{}' ({} display propert{})",
            port.name,
            port.display_props.len(),
            if port.display_props.len() == 1 { "y" } else { "ies" }
        ));
        self.depth += 1;
        for prop in &port.display_props {
            self.visit_display_prop(prop);
        }
        self.depth -= 1;
    }

    fn visit_display_prop(&mut self, prop: &DisplayProp) {
        self.line(&format!(
            "display property '{}' at ({}, {}), font {}, {}°",
            prop.name,
            prop.x,
            prop.y,
            prop.font_idx,
            prop.rotation.degrees()
        ));
    }

    fn visit_part_inst(&mut self, part: &PartInst) {
        self.line(&format!(
            "part instance '{}' (package '{}', library {}) at ({}, {})",
            part.reference, part.package_name, part.library_id, part.x, part.y
        ));
        self.depth += 1;
        for record in part.prop_records.iter().chain(&part.pin_records) {
            record.accept(self);
        }
        self.depth -= 1;
    }

    fn visit_graphic_arc(&mut self, arc: &GraphicArc) {
        self.line(&format!(
            "graphic arc #{} at ({}, {}), box ({}, {})-({}, {})",
            arc.id, arc.x, arc.y, arc.x1, arc.y1, arc.x2, arc.y2
        ));
    }

    fn visit_bitmap(&mut self, bitmap: &Bitmap) {
        self.line(&format!(
            "bitmap {}x{} at ({}, {}), {} payload byte(s)",
            bitmap.width,
            bitmap.height,
            bitmap.x,
            bitmap.y,
            bitmap.data.len()
        ));
    }

    fn visit_t0x5b(&mut self, _rec: &T0x5b) {
        self.line("t0x5b (contents not yet understood)");
    }
}
