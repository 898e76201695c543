use crate::{OrientationKind, Point};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a [crate::Layout]. This is the outward-facing
/// version of a layout: it can be deserialized from a config file, and
/// any missing fields get the defaults below. Build the layout with
/// [crate::Layout::from_config], which validates the config first.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Flat-topped or pointy-topped hexes
    pub orientation: OrientationKind,

    /// Pixel position of the center of hex `(0, 0, 0)`
    pub origin: Point,

    /// Distance from a hex's center to its corners, independently on each
    /// axis. Use equal components for regular hexagons. Both components must
    /// be positive.
    #[validate(custom = "validate_size")]
    pub size: Point,

    /// Multiplier on the distance between hex centers. 1.0 means adjacent
    /// hexes share an edge, higher values leave a gap. Must be positive.
    #[validate(range(min = 0.001))]
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Flat,
            origin: Point::ORIGIN,
            size: Point::new(10.0, 10.0),
            spacing: 1.0,
        }
    }
}

fn validate_size(size: &Point) -> Result<(), ValidationError> {
    if size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("size must be positive in x and y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"orientation": "pointy", "spacing": 1.1}"#)
                .unwrap();
        assert_eq!(
            config,
            LayoutConfig {
                orientation: OrientationKind::Pointy,
                spacing: 1.1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_deserialize_bad_orientation() {
        assert!(serde_json::from_str::<LayoutConfig>(
            r#"{"orientation": "sideways"}"#
        )
        .is_err());
    }
}
