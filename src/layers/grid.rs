use svg::node::element::path::Data;
use svg::node::element::{Group, Path};

use crate::context::FrameContext;
use crate::error::Result;
use crate::layers::{group_with_class, Layer};
use crate::types::{EQPoint, Point, Side};

/// Graticule lines through the major tick values. Lines are sampled
/// through the mapping and cropped by the document clip path.
pub struct GridLayer {
    samples_per_line: usize,
}
impl GridLayer {
    pub fn new() -> Self {
        Self {
            samples_per_line: 64,
        }
    }

    fn polyline(g: Group, points: &[Point], class: &str) -> Group {
        if points.len() < 2 {
            return g;
        }
        let mut d = Data::new().move_to((points[0].x, points[0].y));
        for p in &points[1..] {
            d = d.line_to((p.x, p.y));
        }
        g.add(Path::new().set("class", class).set("fill", "none").set("d", d))
    }
}

/// RA extent of the image window as signed offsets from the center RA, so
/// fields straddling RA=0 stay contiguous.
fn corner_ra_span(context: &FrameContext<'_>) -> (f64, f64) {
    let limits = context.cfg.limits;
    let center_ra = context.wcs.reference().ra_deg;
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (x, y) in [
        (limits.xmin, limits.ymin),
        (limits.xmin, limits.ymax),
        (limits.xmax, limits.ymin),
        (limits.xmax, limits.ymax),
    ] {
        let sky = context.wcs.pix2sky(x as f64, y as f64);
        let d = (sky.ra_deg - center_ra + 180.0).rem_euclid(360.0) - 180.0;
        lo = lo.min(d);
        hi = hi.max(d);
    }
    (center_ra + lo, center_ra + hi)
}

fn corner_dec_span(context: &FrameContext<'_>) -> (f64, f64) {
    let limits = context.cfg.limits;
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (x, y) in [
        (limits.xmin, limits.ymin),
        (limits.xmin, limits.ymax),
        (limits.xmax, limits.ymin),
        (limits.xmax, limits.ymax),
    ] {
        let sky = context.wcs.pix2sky(x as f64, y as f64);
        lo = lo.min(sky.dec_deg);
        hi = hi.max(sky.dec_deg);
    }
    (lo, hi)
}

impl Layer for GridLayer {
    fn render(&self, context: &FrameContext<'_>) -> Result<Group> {
        let mut g = group_with_class("lines");
        // Offsets are not sky coordinates, and edge tables carry no 2D
        // mapping to trace lines through
        if !context.can_trace_grid() || context.cfg.unit.is_offset() {
            return Ok(g);
        }

        let (dec_lo, dec_hi) = corner_dec_span(context);
        let (ra_lo, ra_hi) = corner_ra_span(context);
        // overshoot a little so lines reach the border after clipping
        let dec_pad = (dec_hi - dec_lo) * 0.1;
        let ra_pad = (ra_hi - ra_lo) * 0.1;
        let n = self.samples_per_line;

        // RA meridians through the bottom-edge major ticks
        let bottom = context.plan(Side::Bottom)?;
        for tick in &bottom.major {
            let mut pts = Vec::with_capacity(n + 1);
            for i in 0..=n {
                let t = i as f64 / n as f64;
                let dec = dec_lo - dec_pad + t * (dec_hi - dec_lo + 2.0 * dec_pad);
                if let Some(p) = context.wcs.sky2pix(EQPoint {
                    ra_deg: tick.value_deg,
                    dec_deg: dec,
                }) {
                    pts.push(context.layout.to_svg(p));
                }
            }
            g = Self::polyline(g, &pts, "graticule ra");
        }

        // Dec parallels through the left-edge major ticks
        let left = context.plan(Side::Left)?;
        for tick in &left.major {
            let mut pts = Vec::with_capacity(n + 1);
            for i in 0..=n {
                let t = i as f64 / n as f64;
                let ra = ra_lo - ra_pad + t * (ra_hi - ra_lo + 2.0 * ra_pad);
                if let Some(p) = context.wcs.sky2pix(EQPoint {
                    ra_deg: ra,
                    dec_deg: tick.value_deg,
                }) {
                    pts.push(context.layout.to_svg(p));
                }
            }
            g = Self::polyline(g, &pts, "graticule dec");
        }

        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_context;
    use crate::types::LabelUnit;

    #[test]
    fn draws_meridians_and_parallels() {
        let context = make_context(|_| {});
        let g = GridLayer::new().render(&context).unwrap();
        let svg_text = g.to_string();
        assert!(svg_text.contains("graticule ra"));
        assert!(svg_text.contains("graticule dec"));
    }

    #[test]
    fn offset_units_suppress_the_graticule() {
        let context = make_context(|cfg| cfg.unit = LabelUnit::ArcsecOffset);
        let g = GridLayer::new().render(&context).unwrap();
        let svg_text = g.to_string();
        assert!(!svg_text.contains("graticule"));
    }
}
