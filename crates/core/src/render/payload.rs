use crate::{render::HexShape, Hex, HexError, Point};
use serde::{de, Deserialize, Serialize};
use serde_json::Value;

/// A snapshot of a shape that's being dragged, serialized when the drag
/// starts and decoded by whatever shape it gets dropped on. This is the only
/// data that crosses the drag/drop boundary, so it carries everything needed
/// to rebuild the dragged shape.
///
/// ## Format
///
/// JSON, with `hex` and `pixel` required and the metadata fields omitted when
/// absent:
///
/// ```json
/// {
///   "hex": {"q": 1.0, "r": -1.0, "s": 0.0},
///   "pixel": {"x": 15.0, "y": -8.660254037844386},
///   "data": {"owner": "blue"},
///   "fill": "grass",
///   "className": "selected"
/// }
/// ```
///
/// Decoding is strict about the known fields: bad JSON, a missing required
/// field, a field of the wrong type (including `hex` or `pixel` written as an
/// array), or a hex that's off the `q + r + s = 0` plane are all
/// [HexError::MalformedPayload]. Nothing is defaulted except the optional
/// metadata. Unknown top-level keys are ignored, so payloads from newer
/// senders still decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub hex: Hex,
    /// Center of the dragged shape, under the layout it was dragged from
    pub pixel: Point,
    /// Arbitrary caller data attached to the shape. A JSON `null` here is
    /// treated the same as no data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl DragPayload {
    /// The key that the payload is stored under in a
    /// [DataTransfer](crate::render::DataTransfer)
    pub const KEY: &'static str = "hexagon";

    /// Serialize the payload to a JSON string
    pub fn encode(&self) -> String {
        // Every field is a plain JSON value with string keys, so this can only
        // fail if serde_json itself is broken
        serde_json::to_string(self).expect("error serializing drag payload")
    }

    /// Parse a payload from a JSON string. Returns
    /// [HexError::MalformedPayload] if it's invalid in any way.
    pub fn decode(input: &str) -> Result<Self, HexError> {
        let value: Value =
            serde_json::from_str(input).map_err(HexError::MalformedPayload)?;
        // Derived struct impls also accept the sequence form, e.g. `[0, 0]`
        // for a point. Only the object form is valid here.
        for field in ["hex", "pixel"] {
            match value.get(field) {
                Some(inner) if !inner.is_object() => {
                    return Err(HexError::MalformedPayload(de::Error::custom(
                        format!("invalid type for `{field}`, expected an object"),
                    )));
                }
                _ => {}
            }
        }
        serde_json::from_value(value).map_err(HexError::MalformedPayload)
    }
}

impl From<&HexShape> for DragPayload {
    fn from(shape: &HexShape) -> Self {
        Self {
            hex: shape.hex(),
            pixel: shape.pixel(),
            data: shape.data.clone(),
            fill: shape.fill.clone(),
            class_name: shape.class_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> DragPayload {
        DragPayload {
            hex: Hex::new_qr(1.0, -1.0),
            pixel: Point::new(15.0, -8.660254037844386),
            data: Some(json!({"owner": "blue", "units": [1, 2.5], "x": null})),
            fill: Some("grass".into()),
            class_name: Some("selected".into()),
        }
    }

    #[test]
    fn test_encode() {
        let value: Value = serde_json::from_str(&payload().encode()).unwrap();
        assert_eq!(
            value,
            json!({
                "hex": {"q": 1.0, "r": -1.0, "s": 0.0},
                "pixel": {"x": 15.0, "y": -8.660254037844386},
                "data": {"owner": "blue", "units": [1, 2.5], "x": null},
                "fill": "grass",
                "className": "selected",
            })
        );
    }

    #[test]
    fn test_encode_omits_missing() {
        let payload = DragPayload {
            data: None,
            fill: None,
            class_name: None,
            ..payload()
        };
        let value: Value = serde_json::from_str(&payload.encode()).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["hex", "pixel"]);
    }

    #[test]
    fn test_decode() {
        assert_eq!(DragPayload::decode(&payload().encode()).unwrap(), payload());

        // Integers are accepted for float fields, like a browser would send
        let decoded = DragPayload::decode(
            r#"{"hex": {"q": 0, "r": 2, "s": -2}, "pixel": {"x": 0, "y": 34}}"#,
        )
        .unwrap();
        assert_eq!(decoded.hex, Hex::new_qr(0.0, 2.0));
        assert_eq!(decoded.pixel, Point::new(0.0, 34.0));
        assert_eq!(decoded.data, None);
    }

    #[test]
    fn test_decode_extra_keys() {
        let decoded = DragPayload::decode(
            r#"{"hex": {"q": 0, "r": 0, "s": 0}, "pixel": {"x": 0, "y": 0}, "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(decoded.hex, Hex::ORIGIN);
    }

    #[test]
    fn test_decode_malformed() {
        let inputs = [
            // Not JSON
            "",
            "hexagon",
            r#"{"hex": {"q": 0, "r": 0, "s": 0}"#,
            // Missing fields
            r#"{"pixel": {"x": 0, "y": 0}}"#,
            r#"{"hex": {"q": 0, "r": 0, "s": 0}}"#,
            r#"{"hex": {"q": 0, "r": 0}, "pixel": {"x": 0, "y": 0}}"#,
            // Wrong types
            r#"{"hex": {"q": "0", "r": 0, "s": 0}, "pixel": {"x": 0, "y": 0}}"#,
            r#"{"hex": {"q": 0, "r": 0, "s": 0}, "pixel": [0, 0]}"#,
            r#"{"hex": [1, -1, 0], "pixel": {"x": 0, "y": 0}}"#,
            r#"{"hex": [1, -1, 0], "pixel": [0, 0]}"#,
            r#"{"hex": {"q": 0, "r": 0, "s": 0}, "pixel": null}"#,
            r#"[{"q": 0, "r": 0, "s": 0}, {"x": 0, "y": 0}]"#,
            r#"{"hex": {"q": 0, "r": 0, "s": 0}, "pixel": {"x": 0, "y": 0}, "fill": 3}"#,
            // Invalid hex
            r#"{"hex": {"q": 1, "r": 1, "s": 1}, "pixel": {"x": 0, "y": 0}}"#,
        ];
        for input in inputs.iter() {
            assert!(
                matches!(
                    DragPayload::decode(input),
                    Err(HexError::MalformedPayload(_))
                ),
                "expected {input:?} to be malformed"
            );
        }
    }
}
