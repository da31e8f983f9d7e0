use crate::types::{EQPoint, LabelUnit, Projection};

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}
impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

/// One-based, inclusive pixel window of the image being framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLimits {
    pub xmin: u32,
    pub xmax: u32,
    pub ymin: u32,
    pub ymax: u32,
}

impl PixelLimits {
    pub fn full(naxis1: u32, naxis2: u32) -> Self {
        Self {
            xmin: 1,
            xmax: naxis1,
            ymin: 1,
            ymax: naxis2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameConfig {
    pub center: EQPoint,
    /// Pixel scale in arcseconds per pixel.
    pub scale_arcsec: f64,
    /// Rotation of the pixel grid on the sky, in degrees.
    pub rot_deg: f64,
    pub projection: Projection,
    pub naxis1: u32,
    pub naxis2: u32,
    pub limits: PixelLimits,
    pub unit: LabelUnit,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    /// Tolerance for "lands on a whole field" tests during label rendering.
    pub label_epsilon: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            // away from RA=0 so the default window does not straddle the wrap
            center: EQPoint {
                ra_deg: 180.0,
                dec_deg: 0.0,
            },
            scale_arcsec: 1.0,
            rot_deg: 0.0,
            projection: Projection::Tan,
            naxis1: 512,
            naxis2: 512,
            limits: PixelLimits::full(512, 512),
            unit: LabelUnit::Hms,
            width: 600,
            height: 600,
            margin: Margin::uniform(48),
            label_epsilon: 1e-7,
        }
    }
}
