use serde::{Deserialize, Serialize};

/// Backend-neutral path command, mirroring the 2D canvas path API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    ArcTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        radius: f64,
    },
    Close,
}

/// Axis-aligned rectangle with rounded corners, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl RoundedRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            radius,
        }
    }

    /// Corner radius actually drawn: at most half the width and half the height.
    #[must_use]
    pub fn effective_radius(self) -> f64 {
        let mut radius = self.radius;
        if self.width < 2.0 * radius {
            radius = self.width / 2.0;
        }
        if self.height < 2.0 * radius {
            radius = self.height / 2.0;
        }
        radius
    }
}

/// Builds the closed outline of `rect`, clockwise from the top edge.
#[must_use]
pub fn rounded_rect_path(rect: RoundedRect) -> [PathCommand; 6] {
    let RoundedRect {
        x,
        y,
        width: w,
        height: h,
        ..
    } = rect;
    let r = rect.effective_radius();

    [
        PathCommand::MoveTo { x: x + r, y },
        PathCommand::ArcTo {
            x1: x + w,
            y1: y,
            x2: x + w,
            y2: y + h,
            radius: r,
        },
        PathCommand::ArcTo {
            x1: x + w,
            y1: y + h,
            x2: x,
            y2: y + h,
            radius: r,
        },
        PathCommand::ArcTo {
            x1: x,
            y1: y + h,
            x2: x,
            y2: y,
            radius: r,
        },
        PathCommand::ArcTo {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y,
            radius: r,
        },
        PathCommand::Close,
    ]
}
