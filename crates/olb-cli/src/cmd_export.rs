/// Implementation of `olb export`.
///
/// Decodes the library and emits the record tree as pretty-printed JSON.
/// The JSON is assembled by a [`Visitor`] rather than serde derives, so
/// the record types stay free of serialization concerns and the export
/// shape can diverge from the in-memory layout where that reads better.
///
/// # Output shape
///
/// ```json
/// {
///   "version": 1,
///   "strings": ["Value", "Reference"],
///   "fonts": [{ "name": "Courier New", "height": 38, ... }],
///   "records": [
///     { "kind": "port", "name": "VCC", "display_props": [...] },
///     { "kind": "graphic_arc", "id": 7, ... }
///   ]
/// }
/// ```
use std::fs;

use anyhow::{Context, Result};
use olb_decoder::OlbDecoder;
use olb_types::{Bitmap, DisplayProp, GraphicArc, PartInst, Port, Record, T0x5b, Visitor};
use serde_json::{Value, json};

use crate::ExportArgs;

/// Run the `olb export` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, fails to decode, or the
/// output file cannot be written.
pub fn run(args: &ExportArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    let decoded = OlbDecoder::decode(&bytes)
        .with_context(|| format!("cannot decode {}", args.file.display()))?;

    let fonts: Vec<Value> = decoded
        .catalogs
        .fonts
        .iter()
        .map(|font| {
            json!({
                "name": font.name,
                "height": font.height,
                "width": font.width,
                "escapement": font.escapement,
                "weight": font.weight,
                "italic": font.italic,
            })
        })
        .collect();

    let document = json!({
        "version": decoded.version,
        "strings": decoded.catalogs.strings,
        "fonts": fonts,
        "records": export_records(&decoded.records),
    });
    let rendered = serde_json::to_string_pretty(&document)?;

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn export_records(records: &[Record]) -> Vec<Value> {
    let mut exporter = JsonExportVisitor::default();
    for record in records {
        record.accept(&mut exporter);
    }
    exporter.items
}

// ── JSON export visitor ───────────────────────────────────────────────────────

/// Collects one JSON value per visited record. Nested record groups are
/// exported by recursing with a fresh collector.
#[derive(Default)]
struct JsonExportVisitor {
    items: Vec<Value>,
}

fn prop_json(prop: &DisplayProp) -> Value {
    json!({
        "kind": "display_prop",
        "name": prop.name,
        "name_idx": prop.name_idx,
        "x": prop.x,
        "y": prop.y,
        "font_idx": prop.font_idx,
        "rotation_degrees": prop.rotation.degrees(),
        "color": prop.color.wire(),
    })
}

impl Visitor for JsonExportVisitor {
    fn visit_port(&mut self, port: &Port) {
        let props: Vec<Value> = port.display_props.iter().map(prop_json).collect();
        self.items.push(json!({
            "kind": "port",
            "name": port.name,
            "display_props": props,
        }));
    }

    fn visit_display_prop(&mut self, prop: &DisplayProp) {
        self.items.push(prop_json(prop));
    }

    fn visit_part_inst(&mut self, part: &PartInst) {
        self.items.push(json!({
            "kind": "part_inst",
            "package_name": part.package_name,
            "library_id": part.library_id,
            "reference": part.reference,
            "value": part.value,
            "x": part.x,
            "y": part.y,
            "color": part.color.wire(),
            "prop_records": export_records(&part.prop_records),
            "pin_records": export_records(&part.pin_records),
        }));
    }

    fn visit_graphic_arc(&mut self, arc: &GraphicArc) {
        self.items.push(json!({
            "kind": "graphic_arc",
            "id": arc.id,
            "x": arc.x,
            "y": arc.y,
            "box": [arc.x1, arc.y1, arc.x2, arc.y2],
            "start": [arc.start_x, arc.start_y],
            "end": [arc.end_x, arc.end_y],
        }));
    }

    fn visit_bitmap(&mut self, bitmap: &Bitmap) {
        self.items.push(json!({
            "kind": "bitmap",
            "x": bitmap.x,
            "y": bitmap.y,
            "width": bitmap.width,
            "height": bitmap.height,
            "payload_len": bitmap.data.len(),
        }));
    }

    fn visit_t0x5b(&mut self, _rec: &T0x5b) {
        self.items.push(json!({ "kind": "t0x5b" }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olb_types::{Color, Rotation};

    #[test]
    fn port_exports_with_nested_props() {
        let records = [Record::Port(Port {
            name: "VCC".to_string(),
            display_props: vec![DisplayProp {
                name_idx: 2,
                name: "Reference".to_string(),
                x: 0,
                y: 0,
                font_idx: 1,
                rotation: Rotation::Deg0,
                color: Color::Black,
            }],
        })];

        let exported = export_records(&records);
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0]["kind"], "port");
        assert_eq!(exported[0]["name"], "VCC");
        assert_eq!(exported[0]["display_props"][0]["name"], "Reference");
        assert_eq!(exported[0]["display_props"][0]["rotation_degrees"], 0);
    }

    #[test]
    fn part_inst_exports_nested_groups() {
        let records = [Record::PartInst(PartInst {
            package_name: "RES".to_string(),
            library_id: 3,
            x: 100,
            y: 200,
            color: Color::Other(0x30),
            prop_records: vec![Record::T0x5b(T0x5b)],
            reference: "R1".to_string(),
            pin_records: vec![],
            value: "10k".to_string(),
        })];

        let exported = export_records(&records);
        assert_eq!(exported[0]["kind"], "part_inst");
        assert_eq!(exported[0]["reference"], "R1");
        assert_eq!(exported[0]["color"], 0x30);
        assert_eq!(exported[0]["prop_records"][0]["kind"], "t0x5b");
        assert_eq!(exported[0]["pin_records"].as_array().unwrap().len(), 0);
    }
}
