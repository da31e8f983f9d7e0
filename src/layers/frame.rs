use svg::node::element::{Group, Line, Rectangle};

use crate::context::FrameContext;
use crate::error::Result;
use crate::layers::{group_with_class, text, Layer};
use crate::planner::EdgePlan;
use crate::types::Side;

pub struct FrameLayer {
    major_len: f64,
    minor_len: f64,
}
impl FrameLayer {
    pub fn new() -> Self {
        Self {
            major_len: 6.0,
            minor_len: 3.0,
        }
    }

    fn h_tick(x: f64, y: f64, len: f64, class: &str) -> Line {
        Line::new()
            .set("x1", x)
            .set("y1", y)
            .set("x2", x)
            .set("y2", y + len)
            .set("class", class)
    }

    fn v_tick(x: f64, y: f64, len: f64, class: &str) -> Line {
        Line::new()
            .set("x1", x)
            .set("y1", y)
            .set("x2", x + len)
            .set("y2", y)
            .set("class", class)
    }

    fn draw_side(&self, mut g: Group, context: &FrameContext<'_>, plan: &EdgePlan) -> Group {
        let l = &context.layout;
        let (top, bottom) = (l.plot_y, l.plot_y + l.plot_h);
        let (left, right) = (l.plot_x, l.plot_x + l.plot_w);

        match plan.side {
            Side::Bottom => {
                for &px in &plan.minor {
                    g = g.add(Self::h_tick(l.x_to_svg(px), bottom, self.minor_len, "tick minor"));
                }
                for m in &plan.major {
                    let x = l.x_to_svg(m.pixel);
                    g = g.add(Self::h_tick(x, bottom, self.major_len, "tick"));
                    g = g.add(text("tick-label", x, bottom + 20.0, "middle", &m.label));
                }
            }
            Side::Top => {
                for &px in &plan.minor {
                    g = g.add(Self::h_tick(l.x_to_svg(px), top, -self.minor_len, "tick minor"));
                }
                for m in &plan.major {
                    let x = l.x_to_svg(m.pixel);
                    g = g.add(Self::h_tick(x, top, -self.major_len, "tick"));
                    g = g.add(text("tick-label", x, top - 10.0, "middle", &m.label));
                }
            }
            Side::Left => {
                for &px in &plan.minor {
                    g = g.add(Self::v_tick(left, l.y_to_svg(px), -self.minor_len, "tick minor"));
                }
                for m in &plan.major {
                    let y = l.y_to_svg(m.pixel);
                    g = g.add(Self::v_tick(left, y, -self.major_len, "tick"));
                    g = g.add(text("tick-label", left - 10.0, y + 4.0, "end", &m.label));
                }
            }
            Side::Right => {
                for &px in &plan.minor {
                    g = g.add(Self::v_tick(right, l.y_to_svg(px), self.minor_len, "tick minor"));
                }
                for m in &plan.major {
                    let y = l.y_to_svg(m.pixel);
                    g = g.add(Self::v_tick(right, y, self.major_len, "tick"));
                    g = g.add(text("tick-label", right + 10.0, y + 4.0, "start", &m.label));
                }
            }
        }
        g
    }
}

impl Layer for FrameLayer {
    fn render(&self, context: &FrameContext<'_>) -> Result<Group> {
        let mut g = group_with_class("frame");
        let l = &context.layout;

        // Border rectangle
        g = g.add(
            Rectangle::new()
                .set("x", l.plot_x)
                .set("y", l.plot_y)
                .set("width", l.plot_w)
                .set("height", l.plot_h)
                .set("fill", "none")
                .set("class", "border"),
        );

        for side in Side::ALL {
            let plan = context.plan(side)?;
            g = self.draw_side(g, context, &plan);
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_context;

    #[test]
    fn renders_border_ticks_and_labels() {
        let context = make_context(|_| {});
        let g = FrameLayer::new().render(&context).unwrap();
        let svg_text = g.to_string();

        assert!(svg_text.contains("class=\"border\""));
        assert!(svg_text.contains("class=\"tick\""));
        assert!(svg_text.contains("class=\"tick minor\""));
        assert!(svg_text.contains("class=\"tick-label\""));
        // both anchor styles appear (horizontal and vertical edges)
        assert!(svg_text.contains("text-anchor=\"middle\""));
        assert!(svg_text.contains("text-anchor=\"end\""));
    }
}
