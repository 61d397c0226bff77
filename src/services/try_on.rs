// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Virtual try-on preview: where a garment image is drawn over the user's
//! photo.

use serde::Serialize;

/// Preview canvas size in pixels.
pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 500;

/// Opacity of the garment layer.
pub const OVERLAY_ALPHA: f32 = 0.7;

/// Garment shapes with their own placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Garment {
    Top,
    Dress,
    Jacket,
    Pants,
    Accessories,
}

impl Garment {
    /// Garment shape for a listing category. Categories without a shape
    /// (shoes, unknown values) get the default placement.
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "Tops" => Some(Garment::Top),
            "Dresses" => Some(Garment::Dress),
            "Outerwear" => Some(Garment::Jacket),
            "Bottoms" => Some(Garment::Pants),
            "Accessories" => Some(Garment::Accessories),
            _ => None,
        }
    }
}

/// Rectangle on the canvas the garment image is scaled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

const DEFAULT_PLACEMENT: Placement = Placement {
    x: 50,
    y: 100,
    width: 300,
    height: 200,
};

pub fn overlay_placement(garment: Option<Garment>) -> Placement {
    let base = DEFAULT_PLACEMENT;
    match garment {
        Some(Garment::Top) => Placement { y: 120, height: 180, ..base },
        Some(Garment::Dress) => Placement { y: 120, height: 300, ..base },
        Some(Garment::Jacket) => Placement { y: 100, height: 220, ..base },
        Some(Garment::Pants) => Placement { y: 250, height: 200, ..base },
        Some(Garment::Accessories) => Placement {
            x: 100,
            y: 80,
            width: 200,
            height: 100,
        },
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placements_fit_canvas() {
        for category in ["Tops", "Dresses", "Outerwear", "Bottoms", "Accessories", "Shoes"] {
            let p = overlay_placement(Garment::from_category(category));
            assert!(p.x + p.width <= CANVAS_WIDTH, "{category}");
            assert!(p.y + p.height <= CANVAS_HEIGHT, "{category}");
        }
    }

    #[test]
    fn test_placement_by_category() {
        assert_eq!(
            overlay_placement(Garment::from_category("Dresses")),
            Placement { x: 50, y: 120, width: 300, height: 300 }
        );
        assert_eq!(
            overlay_placement(Garment::from_category("Accessories")),
            Placement { x: 100, y: 80, width: 200, height: 100 }
        );
        assert_eq!(overlay_placement(Garment::from_category("Shoes")), DEFAULT_PLACEMENT);
    }
}
