use bimdiff_core::{Element, VersionSnapshot};
use serde_json::{json, Value};

/// Parse a JSON fixture into elements, the way the model parser hands them over
#[allow(dead_code)]
pub fn elements(value: Value) -> Vec<Element> {
    serde_json::from_value(value).unwrap()
}

/// Parse a JSON fixture into snapshot metadata
#[allow(dead_code)]
pub fn snapshots(value: Value) -> Vec<VersionSnapshot> {
    serde_json::from_value(value).unwrap()
}

/// Old version of a small two-storey frame
#[allow(dead_code)]
pub fn frame_v1() -> Vec<Element> {
    elements(json!([
        {"localId": 1, "elementType": "IfcWall", "externalId": "2O2Fr$t4X7Zf8NOew3FLOH",
         "properties": {"LoadBearing": true, "Thickness": 0.2, "Name": "W-01"}},
        {"localId": 2, "elementType": "IfcColumn", "externalId": "1kTvXnbbzCWw8lcMd1dR4o",
         "properties": {"Height": 3.0, "Material": {"name": "Concrete", "grade": "C30/37"}}},
        {"localId": 3, "elementType": "IfcDoor", "externalId": "0wDu8b$Lz3sB0XRu9mRbO5",
         "properties": {"FireRating": "EI30"}},
        {"localId": 4, "elementType": "IfcSlab",
         "properties": {"Depth": 0.25, "Layers": ["screed", "concrete"]}}
    ]))
}

/// New version: wall thickened, door re-rated, column gone, beam added
#[allow(dead_code)]
pub fn frame_v2() -> Vec<Element> {
    elements(json!([
        {"localId": 11, "elementType": "IfcWall", "externalId": "2O2Fr$t4X7Zf8NOew3FLOH",
         "properties": {"LoadBearing": true, "Thickness": 0.25, "Name": "W-01"}},
        {"localId": 13, "elementType": "IfcDoor", "externalId": "0wDu8b$Lz3sB0XRu9mRbO5",
         "properties": {"FireRating": "EI60"}},
        {"localId": 4, "elementType": "IfcSlab",
         "properties": {"Depth": 0.25, "Layers": ["screed", "concrete"]}},
        {"localId": 15, "elementType": "IfcBeam", "externalId": "3vB2YO$MX4xv5uCqZZG05x",
         "properties": {"Length": 6.0}}
    ]))
}
