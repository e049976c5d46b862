//! Named camera presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vantage_core::{Error, Vector3f};

/// Dot-product threshold for matching a direction to a preset
const MATCH_THRESHOLD: f32 = 0.9;

/// The six canonical viewpoints
///
/// The set is closed: parsing any other name is a validation error,
/// never a fallback to a default view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPreset {
    Front,
    Back,
    Top,
    Bottom,
    Left,
    Right,
}

impl ViewPreset {
    /// All presets in declaration order
    pub const ALL: [ViewPreset; 6] = [
        ViewPreset::Front,
        ViewPreset::Back,
        ViewPreset::Top,
        ViewPreset::Bottom,
        ViewPreset::Left,
        ViewPreset::Right,
    ];

    /// Canonical view direction, pointing from the object toward the camera
    pub fn direction(self) -> Vector3f {
        let (axis, _) = self.placement();
        axis
    }

    /// Up vector for this viewpoint
    pub fn up(self) -> Vector3f {
        let (_, up) = self.placement();
        up
    }

    /// One table row per preset: (camera offset axis, up vector)
    fn placement(self) -> (Vector3f, Vector3f) {
        let (axis, up) = match self {
            ViewPreset::Front => ([0.0, -1.0, 0.0], [0.0, 0.0, 1.0]),
            ViewPreset::Back => ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
            ViewPreset::Top => ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ViewPreset::Bottom => ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ViewPreset::Left => ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ViewPreset::Right => ([1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        };
        (Vector3f::from(axis), Vector3f::from(up))
    }

    /// The preset's lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            ViewPreset::Front => "front",
            ViewPreset::Back => "back",
            ViewPreset::Top => "top",
            ViewPreset::Bottom => "bottom",
            ViewPreset::Left => "left",
            ViewPreset::Right => "right",
        }
    }

    /// Preset whose canonical direction is similar to `direction`, if any
    ///
    /// Similarity compares the absolute dot product against 0.9, so a
    /// direction can match the preset facing it or its opposite; the
    /// first match in declaration order wins. Callers use this to skip
    /// an auto-detected view that duplicates a standard one.
    pub fn matching(direction: &Vector3f) -> Option<ViewPreset> {
        let norm = direction.norm();
        if norm <= f32::EPSILON {
            return None;
        }
        let unit = direction / norm;
        Self::ALL
            .into_iter()
            .find(|preset| unit.dot(&preset.direction()).abs() > MATCH_THRESHOLD)
    }
}

impl FromStr for ViewPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front" => Ok(ViewPreset::Front),
            "back" => Ok(ViewPreset::Back),
            "top" => Ok(ViewPreset::Top),
            "bottom" => Ok(ViewPreset::Bottom),
            "left" => Ok(ViewPreset::Left),
            "right" => Ok(ViewPreset::Right),
            other => Err(Error::InvalidData(format!(
                "unknown preset '{}', expected one of: front, back, top, bottom, left, right",
                other
            ))),
        }
    }
}

impl fmt::Display for ViewPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
