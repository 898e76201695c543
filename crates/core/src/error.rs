use thiserror::Error;
use validator::ValidationErrors;

/// Any error that can come out of this crate. The pure geometry functions
/// (hex to pixel, pixel to hex, corners) never fail, so these are all
/// construction or decoding errors.
#[derive(Debug, Error)]
pub enum HexError {
    /// A cube coordinate whose components don't sum to zero. The caller has
    /// to supply a consistent triple; we never correct it.
    #[error(
        "Invalid hex coordinate ({q}, {r}, {s}); must be on the plane q+r+s=0"
    )]
    InvalidCoordinate { q: f64, r: f64, s: f64 },

    /// A custom orientation whose inverse matrix doesn't actually invert its
    /// forward matrix
    #[error("Invalid orientation; inverse matrix {inverse:?} does not invert forward matrix {forward:?}")]
    InvalidOrientation {
        forward: [f64; 4],
        inverse: [f64; 4],
    },

    /// A layout config failed validation
    #[error("Invalid layout config: {0}")]
    InvalidConfig(#[from] ValidationErrors),

    /// A drag/drop payload that isn't valid JSON, is missing a required
    /// field, or holds an invalid hex
    #[error("Malformed drag payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}
