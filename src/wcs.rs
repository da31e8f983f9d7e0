use crate::config::{FrameConfig, PixelLimits};
use crate::types::{EQPoint, Point, Projection, Side};

/// Pixel-to-sky mapping collaborator. Pixel coordinates are one-based,
/// matching FITS convention.
pub trait SkyMapping {
    fn pix2sky(&self, x: f64, y: f64) -> EQPoint;

    /// Pixel position of a sky coordinate. `None` when the position is not
    /// representable (behind the tangent plane).
    fn sky2pix(&self, sky: EQPoint) -> Option<Point>;

    /// Reference position that angular offsets are measured from.
    fn reference(&self) -> EQPoint;
}

/// CD matrix (degrees per pixel) from a pixel scale and a rotation angle.
/// The RA axis is negative: RA increases to the left, as on the sky.
fn cd_matrix(scale_arcsec: f64, rot_deg: f64) -> [[f64; 2]; 2] {
    let s = scale_arcsec / 3600.0;
    let (sin_r, cos_r) = rot_deg.to_radians().sin_cos();
    [[-s * cos_r, -s * sin_r], [-s * sin_r, s * cos_r]]
}

fn invert_cd(cd: [[f64; 2]; 2], xi: f64, eta: f64) -> (f64, f64) {
    let det = cd[0][0] * cd[1][1] - cd[0][1] * cd[1][0];
    let u = (cd[1][1] * xi - cd[0][1] * eta) / det;
    let v = (-cd[1][0] * xi + cd[0][0] * eta) / det;
    (u, v)
}

/// Gnomonic (TAN) projection about a reference sky position.
#[derive(Debug, Clone)]
pub struct TanWcs {
    crval: EQPoint,
    crpix: Point,
    cd: [[f64; 2]; 2],
}

impl TanWcs {
    pub fn new(crval: EQPoint, crpix: Point, scale_arcsec: f64, rot_deg: f64) -> Self {
        Self {
            crval,
            crpix,
            cd: cd_matrix(scale_arcsec, rot_deg),
        }
    }

    /// Intermediate world coordinates (degrees) of a pixel.
    fn iwc(&self, x: f64, y: f64) -> (f64, f64) {
        let u = x - self.crpix.x;
        let v = y - self.crpix.y;
        (
            self.cd[0][0] * u + self.cd[0][1] * v,
            self.cd[1][0] * u + self.cd[1][1] * v,
        )
    }
}

impl SkyMapping for TanWcs {
    fn pix2sky(&self, x: f64, y: f64) -> EQPoint {
        let (xi, eta) = self.iwc(x, y);
        let xi = xi.to_radians();
        let eta = eta.to_radians();

        let (sin_a0, cos_a0) = self.crval.ra_deg.to_radians().sin_cos();
        let (sin_d0, cos_d0) = self.crval.dec_deg.to_radians().sin_cos();

        // Deproject through the tangent-plane basis at the reference point:
        // center + xi*east + eta*north, renormalized onto the sphere.
        let center = [cos_d0 * cos_a0, cos_d0 * sin_a0, sin_d0];
        let east = [-sin_a0, cos_a0, 0.0];
        let north = [-sin_d0 * cos_a0, -sin_d0 * sin_a0, cos_d0];

        let px = center[0] + xi * east[0] + eta * north[0];
        let py = center[1] + xi * east[1] + eta * north[1];
        let pz = center[2] + xi * east[2] + eta * north[2];
        let norm = (px * px + py * py + pz * pz).sqrt();

        EQPoint {
            ra_deg: py.atan2(px).to_degrees().rem_euclid(360.0),
            dec_deg: (pz / norm).asin().to_degrees(),
        }
    }

    fn sky2pix(&self, sky: EQPoint) -> Option<Point> {
        let d_ra = (sky.ra_deg - self.crval.ra_deg).to_radians();
        let (sin_d, cos_d) = sky.dec_deg.to_radians().sin_cos();
        let (sin_d0, cos_d0) = self.crval.dec_deg.to_radians().sin_cos();

        let cos_c = (sin_d0 * sin_d + cos_d0 * cos_d * d_ra.cos()).clamp(-1.0, 1.0);
        if cos_c <= 0.0 {
            return None;
        }

        let xi = (cos_d * d_ra.sin() / cos_c).to_degrees();
        let eta = ((sin_d * cos_d0 - cos_d * sin_d0 * d_ra.cos()) / cos_c).to_degrees();
        let (u, v) = invert_cd(self.cd, xi, eta);
        Some(Point {
            x: self.crpix.x + u,
            y: self.crpix.y + v,
        })
    }

    fn reference(&self) -> EQPoint {
        self.crval
    }
}

/// Flat mapping: intermediate world coordinates are taken directly as
/// offsets in Dec and in RA scaled by cos(dec0). Adequate for small fields.
#[derive(Debug, Clone)]
pub struct LinearWcs {
    crval: EQPoint,
    crpix: Point,
    cd: [[f64; 2]; 2],
}

impl LinearWcs {
    pub fn new(crval: EQPoint, crpix: Point, scale_arcsec: f64, rot_deg: f64) -> Self {
        Self {
            crval,
            crpix,
            cd: cd_matrix(scale_arcsec, rot_deg),
        }
    }
}

impl SkyMapping for LinearWcs {
    fn pix2sky(&self, x: f64, y: f64) -> EQPoint {
        let u = x - self.crpix.x;
        let v = y - self.crpix.y;
        let xi = self.cd[0][0] * u + self.cd[0][1] * v;
        let eta = self.cd[1][0] * u + self.cd[1][1] * v;
        let cos_d0 = self.crval.dec_deg.to_radians().cos();
        EQPoint {
            ra_deg: (self.crval.ra_deg + xi / cos_d0).rem_euclid(360.0),
            dec_deg: self.crval.dec_deg + eta,
        }
    }

    fn sky2pix(&self, sky: EQPoint) -> Option<Point> {
        // nearest RA branch to the reference
        let d_ra = (sky.ra_deg - self.crval.ra_deg + 180.0).rem_euclid(360.0) - 180.0;
        let cos_d0 = self.crval.dec_deg.to_radians().cos();
        let xi = d_ra * cos_d0;
        let eta = sky.dec_deg - self.crval.dec_deg;
        let (u, v) = invert_cd(self.cd, xi, eta);
        Some(Point {
            x: self.crpix.x + u,
            y: self.crpix.y + v,
        })
    }

    fn reference(&self) -> EQPoint {
        self.crval
    }
}

/// Build the configured sky mapping. `crpix` defaults to the image center.
pub fn build_mapping(cfg: &FrameConfig, crpix: Option<Point>) -> Box<dyn SkyMapping> {
    let crpix = crpix.unwrap_or(Point {
        x: (cfg.naxis1 as f64 + 1.0) / 2.0,
        y: (cfg.naxis2 as f64 + 1.0) / 2.0,
    });
    match cfg.projection {
        Projection::Tan => Box::new(TanWcs::new(
            cfg.center,
            crpix,
            cfg.scale_arcsec,
            cfg.rot_deg,
        )),
        Projection::Linear => Box::new(LinearWcs::new(
            cfg.center,
            crpix,
            cfg.scale_arcsec,
            cfg.rot_deg,
        )),
    }
}

/// Angular distance between two sky positions, in degrees.
pub fn angular_distance(a: EQPoint, b: EQPoint) -> f64 {
    let (sin_da, cos_da) = a.dec_deg.to_radians().sin_cos();
    let (sin_db, cos_db) = b.dec_deg.to_radians().sin_cos();
    let cos_dra = (a.ra_deg - b.ra_deg).to_radians().cos();
    let cos_dist = (sin_da * sin_db + cos_da * cos_db * cos_dra).clamp(-1.0, 1.0);
    cos_dist.acos().to_degrees()
}

/// Per-pixel sky samples along one edge of the image window, in ascending
/// pixel order. The pixel coordinate is x for bottom/top edges and y for
/// left/right edges.
#[derive(Debug, Clone, Default)]
pub struct EdgeSamples {
    pub pixels: Vec<f64>,
    pub ra: Vec<f64>,
    pub dec: Vec<f64>,
}

pub fn sample_edge(wcs: &dyn SkyMapping, limits: PixelLimits, side: Side) -> EdgeSamples {
    let mut out = EdgeSamples::default();
    match side {
        Side::Bottom | Side::Top => {
            let y = if side == Side::Bottom {
                limits.ymin as f64
            } else {
                limits.ymax as f64
            };
            for x in limits.xmin..=limits.xmax {
                let sky = wcs.pix2sky(x as f64, y);
                out.pixels.push(x as f64);
                out.ra.push(sky.ra_deg);
                out.dec.push(sky.dec_deg);
            }
        }
        Side::Left | Side::Right => {
            let x = if side == Side::Left {
                limits.xmin as f64
            } else {
                limits.xmax as f64
            };
            for y in limits.ymin..=limits.ymax {
                let sky = wcs.pix2sky(x, y as f64);
                out.pixels.push(y as f64);
                out.ra.push(sky.ra_deg);
                out.dec.push(sky.dec_deg);
            }
        }
    }
    out
}
