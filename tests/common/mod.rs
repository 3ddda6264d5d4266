//! Hand-built ISO 8211 byte buffers shared by the end-to-end scenario
//! tests, the same way the teacher's `tests/autzen.rs` factors shared
//! fixture plumbing into helper functions rather than per-file `Cursor`
//! boilerplate.

pub const SUBFIELD_DELIMITER: u8 = 0x1F;
const FIELD_TERMINATOR: u8 = 0x1E;

pub fn field(tag: &str, data: Vec<u8>) -> (String, Vec<u8>) {
    (tag.to_string(), data)
}

/// Builds one ISO 8211 data record (leader + directory + field area) from
/// a list of (tag, data) pairs.
pub fn build_record(fields: &[(String, Vec<u8>)]) -> Vec<u8> {
    let entry_size = 12usize; // tag(4) + length(4) + position(4)
    let directory_len = fields.len() * entry_size + 1;
    let base_address = 24 + directory_len;

    let mut field_area = Vec::new();
    let mut directory = Vec::new();
    for (tag, data) in fields {
        let position = field_area.len();
        field_area.extend_from_slice(data);
        field_area.push(FIELD_TERMINATOR);
        directory.push((tag.clone(), data.len() + 1, position));
    }

    let record_length = base_address + field_area.len();
    let mut out = Vec::new();
    out.extend_from_slice(format!("{:05}", record_length).as_bytes());
    out.push(b'3');
    out.push(b'D');
    out.push(b' ');
    out.push(b'1');
    out.push(b' ');
    out.extend_from_slice(b"09");
    out.extend_from_slice(format!("{:05}", base_address).as_bytes());
    out.extend_from_slice(b"   ");
    out.extend_from_slice(b"4404");

    for (tag, length, position) in &directory {
        out.extend_from_slice(tag.as_bytes());
        out.extend_from_slice(format!("{:04}", length).as_bytes());
        out.extend_from_slice(format!("{:04}", position).as_bytes());
    }
    out.push(FIELD_TERMINATOR);
    out.extend_from_slice(&field_area);
    out
}

/// A minimal Data Descriptive Record; the reader skips the first record
/// of any dataset unconditionally, so its content doesn't matter.
pub fn ddr() -> Vec<u8> {
    build_record(&[field("0000", b"ddr".to_vec())])
}

/// `FRID`: `RCNM(1) RCID(4) PRIM(1) GRUP(1) OBJL(2) RVER(2) RUIN(1)`.
pub fn frid_bytes(rcid: u32, prim: u8, objl: u16, rver: u16, ruin: u8) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(100); // RCNM = Feature
    out.extend_from_slice(&rcid.to_le_bytes());
    out.push(prim);
    out.push(2); // GRUP
    out.extend_from_slice(&objl.to_le_bytes());
    out.extend_from_slice(&rver.to_le_bytes());
    out.push(ruin);
    out
}

/// `FOID`: `AGEN(2) FIDN(4) FIDS(2)`.
pub fn foid_bytes(agency: u16, feature_id: u32, subdivision: u16) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&agency.to_le_bytes());
    out.extend_from_slice(&feature_id.to_le_bytes());
    out.extend_from_slice(&subdivision.to_le_bytes());
    out
}

/// `VRID`: `RCNM(1) RCID(4) RVER(2) RUIN(1)`.
pub fn vrid_bytes(rcnm: u8, rcid: u32) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(rcnm);
    out.extend_from_slice(&rcid.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // RVER
    out.push(1); // RUIN insert
    out
}

/// Repeating `SG2D` groups: `YCOO(4) XCOO(4)`, little-endian, scaled by
/// `comf`.
pub fn sg2d_bytes(points: &[(f64, f64)], comf: f64) -> Vec<u8> {
    let mut out = Vec::new();
    for &(x, y) in points {
        out.extend_from_slice(&((y * comf).round() as i32).to_le_bytes());
        out.extend_from_slice(&((x * comf).round() as i32).to_le_bytes());
    }
    out
}

/// Repeating `FSPT` groups: `RCNM(1) RCID(4) ORNT(1) USAG(1) MASK(1)`.
pub fn fspt_bytes(refs: &[(u8, u32, u8)]) -> Vec<u8> {
    let mut out = Vec::new();
    for &(rcnm, rcid, ornt) in refs {
        out.push(rcnm);
        out.extend_from_slice(&rcid.to_le_bytes());
        out.push(ornt);
        out.push(1); // USAG
        out.push(255); // MASK
    }
    out
}

/// Repeating `(ATTL: u16, ATVL: delimited string)` pairs.
pub fn attf_bytes(pairs: &[(u16, &str)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (code, value) in pairs {
        out.extend_from_slice(&code.to_le_bytes());
        out.extend_from_slice(value.as_bytes());
        out.push(SUBFIELD_DELIMITER);
    }
    out
}

/// A `DSPM` field's subfields in conventional order: RCNM, RCID, HDAT,
/// VDAT, SDAT, CSCL, DUNI, HUNI, PUNI, COUN, COMF, SOMF, COMT.
pub fn dspm_bytes(hdat: &str, vdat: &str, sdat: &str, comf: &str, somf: &str) -> Vec<u8> {
    let fields = vec!["100", "1", hdat, vdat, sdat, "", "", "", "", "", comf, somf, ""];
    fields.join("\u{1F}").into_bytes()
}

/// One point feature record: a node + a feature referencing it via `FSPT`.
pub fn point_feature_bytes(
    node_id: u32,
    record_id: u32,
    x: f64,
    y: f64,
    objl: u16,
    agency: u16,
    feature_id: u32,
    attrs: &[(u16, &str)],
    comf: f64,
) -> Vec<u8> {
    let mut bytes = build_record(&[
        field("VRID", vrid_bytes(110, node_id)),
        field("SG2D", sg2d_bytes(&[(x, y)], comf)),
    ]);
    bytes.extend(build_record(&[
        field("FRID", frid_bytes(record_id, 1, objl, 0, 1)),
        field("FOID", foid_bytes(agency, feature_id, 0)),
        field("ATTF", attf_bytes(attrs)),
        field("FSPT", fspt_bytes(&[(110, node_id, 255)])),
    ]));
    bytes
}
