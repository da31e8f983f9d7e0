use crate::config::FrameConfig;
use crate::context::FrameContext;
use crate::types::Point;
use crate::wcs::{build_mapping, SkyMapping};

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn make_config(patch: impl FnOnce(&mut FrameConfig)) -> FrameConfig {
    let mut cfg = FrameConfig::default();
    cfg.center = crate::types::EQPoint {
        ra_deg: 180.0,
        dec_deg: 0.0,
    };
    patch(&mut cfg);
    cfg
}

/// Reference pixel at the center of the configured image.
pub fn center_crpix(cfg: &FrameConfig) -> Point {
    Point {
        x: (cfg.naxis1 as f64 + 1.0) / 2.0,
        y: (cfg.naxis2 as f64 + 1.0) / 2.0,
    }
}

pub fn make_context(patch: impl FnOnce(&mut FrameConfig)) -> FrameContext<'static> {
    let cfg = make_config(patch);
    // tests keep contexts around for their whole run anyway
    let wcs: &'static dyn SkyMapping = Box::leak(build_mapping(&cfg, None));
    FrameContext::new(cfg, wcs, None)
}
