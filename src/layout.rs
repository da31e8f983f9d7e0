use crate::config::FrameConfig;
use crate::types::Point;

/// Placement of the image pixel window inside the SVG canvas.
#[derive(Debug, Clone, Copy)]
pub struct FrameLayout {
    pub plot_x: f64,
    pub plot_y: f64,
    pub plot_w: f64,
    pub plot_h: f64,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl From<&FrameConfig> for FrameLayout {
    fn from(cfg: &FrameConfig) -> Self {
        let plot_x = cfg.margin.left as f64;
        let plot_y = cfg.margin.top as f64;
        let plot_w = (cfg.width - cfg.margin.left - cfg.margin.right) as f64;
        let plot_h = (cfg.height - cfg.margin.top - cfg.margin.bottom) as f64;

        Self {
            plot_x,
            plot_y,
            plot_w,
            plot_h,
            xmin: cfg.limits.xmin as f64,
            xmax: cfg.limits.xmax as f64,
            ymin: cfg.limits.ymin as f64,
            ymax: cfg.limits.ymax as f64,
        }
    }
}

impl FrameLayout {
    pub fn x_to_svg(&self, x: f64) -> f64 {
        self.plot_x + (x - self.xmin) / (self.xmax - self.xmin) * self.plot_w
    }

    /// Image y grows upward, SVG y downward.
    pub fn y_to_svg(&self, y: f64) -> f64 {
        self.plot_y + self.plot_h - (y - self.ymin) / (self.ymax - self.ymin) * self.plot_h
    }

    pub fn to_svg(&self, p: Point) -> Point {
        Point {
            x: self.x_to_svg(p.x),
            y: self.y_to_svg(p.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FrameConfig, Margin, PixelLimits};
    use crate::test_utils::approx;

    fn layout() -> FrameLayout {
        let cfg = FrameConfig {
            width: 600,
            height: 500,
            margin: Margin::uniform(50),
            limits: PixelLimits {
                xmin: 1,
                xmax: 101,
                ymin: 1,
                ymax: 81,
            },
            ..FrameConfig::default()
        };
        FrameLayout::from(&cfg)
    }

    #[test]
    fn plot_rect_respects_margins() {
        let l = layout();
        assert!(approx(l.plot_x, 50.0, 1e-12));
        assert!(approx(l.plot_y, 50.0, 1e-12));
        assert!(approx(l.plot_w, 500.0, 1e-12));
        assert!(approx(l.plot_h, 400.0, 1e-12));
    }

    #[test]
    fn corners_map_to_plot_corners() {
        let l = layout();
        // xmin → left edge, xmax → right edge
        assert!(approx(l.x_to_svg(1.0), 50.0, 1e-9));
        assert!(approx(l.x_to_svg(101.0), 550.0, 1e-9));
        // ymin → bottom of the plot (large SVG y), ymax → top
        assert!(approx(l.y_to_svg(1.0), 450.0, 1e-9));
        assert!(approx(l.y_to_svg(81.0), 50.0, 1e-9));
    }

    #[test]
    fn interior_point_interpolates_linearly() {
        let l = layout();
        // Halfway in x: pixel 51 of 1..=101
        assert!(approx(l.x_to_svg(51.0), 300.0, 1e-9));
        // Halfway in y: pixel 41 of 1..=81
        assert!(approx(l.y_to_svg(41.0), 250.0, 1e-9));
    }
}
