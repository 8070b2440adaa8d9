//! Fixed color palette.
//!
//! Groups pick one of 8 color families; allocations inside a group pick one
//! of the family's 7 shades. Indices arriving from persisted data may be out
//! of range and are clamped, never rejected.

use crate::constants::{PALETTE_FAMILIES, PALETTE_SHADES};

/// One family of related shades, dark to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFamily {
    pub name: &'static str,
    pub shades: [&'static str; PALETTE_SHADES],
}

impl ColorFamily {
    /// Returns the shade at `index`, clamping out-of-range values to the
    /// nearest valid bound.
    pub fn shade(&self, index: i32) -> &'static str {
        self.shades[clamp_index(index, PALETTE_SHADES)]
    }
}

/// The fixed, ordered palette.
pub const PALETTE: [ColorFamily; PALETTE_FAMILIES] = [
    ColorFamily {
        name: "red",
        shades: [
            "#B71C1C", "#C62828", "#D32F2F", "#E53935", "#F44336", "#EF5350", "#E57373",
        ],
    },
    ColorFamily {
        name: "orange",
        shades: [
            "#E65100", "#EF6C00", "#F57C00", "#FB8C00", "#FF9800", "#FFA726", "#FFB74D",
        ],
    },
    ColorFamily {
        name: "amber",
        shades: [
            "#FF6F00", "#FF8F00", "#FFA000", "#FFB300", "#FFC107", "#FFCA28", "#FFD54F",
        ],
    },
    ColorFamily {
        name: "green",
        shades: [
            "#1B5E20", "#2E7D32", "#388E3C", "#43A047", "#4CAF50", "#66BB6A", "#81C784",
        ],
    },
    ColorFamily {
        name: "teal",
        shades: [
            "#004D40", "#00695C", "#00796B", "#00897B", "#009688", "#26A69A", "#4DB6AC",
        ],
    },
    ColorFamily {
        name: "blue",
        shades: [
            "#0D47A1", "#1565C0", "#1976D2", "#1E88E5", "#2196F3", "#42A5F5", "#64B5F6",
        ],
    },
    ColorFamily {
        name: "purple",
        shades: [
            "#4A148C", "#6A1B9A", "#7B1FA2", "#8E24AA", "#9C27B0", "#AB47BC", "#BA68C8",
        ],
    },
    ColorFamily {
        name: "pink",
        shades: [
            "#880E4F", "#AD1457", "#C2185B", "#D81B60", "#E91E63", "#EC407A", "#F06292",
        ],
    },
];

/// Returns the family at `index`, clamping out-of-range values.
pub fn family(index: i32) -> &'static ColorFamily {
    &PALETTE[clamp_index(index, PALETTE_FAMILIES)]
}

/// Resolves the displayed color for an allocation: the shade inside its
/// group's family. `None` when either index is unset.
pub fn resolve_shade(family_index: Option<i32>, shade_index: Option<i32>) -> Option<&'static str> {
    match (family_index, shade_index) {
        (Some(f), Some(s)) => Some(family(f).shade(s)),
        _ => None,
    }
}

fn clamp_index(index: i32, len: usize) -> usize {
    if index < 0 {
        0
    } else {
        (index as usize).min(len - 1)
    }
}
