use crate::error::{Error, Result};
use crate::labels::{numeric_labels, sexagesimal_labels};
use crate::sexagesimal::Sexagesimal;
use crate::steps::{self, StepChoice};
use crate::ticks::locate_ticks;
use crate::types::{CoordKind, EQPoint, LabelUnit, Side};
use crate::wcs::{angular_distance, EdgeSamples};

/// A labeled major tickmark.
#[derive(Debug, Clone)]
pub struct MajorTick {
    pub pixel: f64,
    /// Axis coordinate at the tick, in degrees (an offset from the
    /// reference position for offset units).
    pub value_deg: f64,
    pub label: String,
}

/// Tick plan for one edge: labeled major ticks and unlabeled minor tick
/// pixel positions, both in ascending pixel order.
#[derive(Debug, Clone)]
pub struct EdgePlan {
    pub side: Side,
    pub step: StepChoice,
    pub major: Vec<MajorTick>,
    pub minor: Vec<f64>,
}

/// Signed angular offset of each sample from the reference value, measured
/// along the axis only (the cross coordinate is held at the sample's own
/// value).
fn axis_offsets(samples: &EdgeSamples, side: Side, reference: EQPoint) -> Vec<f64> {
    let n = samples.ra.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let here = EQPoint {
            ra_deg: samples.ra[i],
            dec_deg: samples.dec[i],
        };
        let (anchor, delta) = if side.is_horizontal() {
            (
                EQPoint {
                    ra_deg: reference.ra_deg,
                    dec_deg: samples.dec[i],
                },
                samples.ra[i] - reference.ra_deg,
            )
        } else {
            (
                EQPoint {
                    ra_deg: samples.ra[i],
                    dec_deg: reference.dec_deg,
                },
                samples.dec[i] - reference.dec_deg,
            )
        };
        let dist = angular_distance(here, anchor);
        out.push(if delta < 0.0 { -dist } else { dist });
    }
    out
}

/// Plan tickmarks for one edge. The samples come either from a built-in
/// mapping or from an externally supplied coordinate table; either way they
/// must vary strictly monotonically along the edge.
pub fn plan_edge(
    samples: &EdgeSamples,
    side: Side,
    unit: LabelUnit,
    reference: EQPoint,
    epsilon: f64,
) -> Result<EdgePlan> {
    let kind = if side.is_horizontal() {
        CoordKind::Ra
    } else {
        CoordKind::Dec
    };

    if samples.pixels.len() < 2 {
        return Err(Error::TooFewSamples(samples.pixels.len()));
    }

    let coords: Vec<f64> = if unit.is_offset() {
        axis_offsets(samples, side, reference)
    } else if kind == CoordKind::Ra {
        samples.ra.clone()
    } else {
        samples.dec.clone()
    };

    let range = if kind == CoordKind::Dec {
        (-90.0, 90.0)
    } else if unit.is_offset() {
        (-180.0, 180.0)
    } else {
        (0.0, 360.0)
    };

    let span = (coords[coords.len() - 1] - coords[0]).abs();
    let step = match unit {
        LabelUnit::Hms if kind == CoordKind::Ra => steps::ra_step(span),
        LabelUnit::Hms => steps::dec_step(span),
        LabelUnit::Deg => steps::degree_step(span),
        // offsets use the arcsecond table on degree-valued offsets
        _ => steps::dec_step(span),
    };

    let minor = locate_ticks(&samples.pixels, &coords, step.minor_deg, range)?;
    let major = locate_ticks(&samples.pixels, &coords, step.major_deg, range)?;

    let values_deg: Vec<f64> = major.iter().map(|t| t.value).collect();
    let labels = match unit {
        LabelUnit::Hms => {
            // sub-second label steps get one decimal on the seconds field
            let precision = match kind {
                CoordKind::Ra if step.major_deg < 1.0 / 240.0 => 1,
                CoordKind::Dec if step.major_deg < 1.0 / 3600.0 => 1,
                _ => 0,
            };
            let values: Vec<Sexagesimal> = values_deg
                .iter()
                .map(|&v| Sexagesimal::from_degrees(v, kind, precision))
                .collect();
            sexagesimal_labels(&values, step.major_deg, kind, epsilon)
        }
        LabelUnit::Deg | LabelUnit::DegOffset => {
            numeric_labels(&values_deg, step.major_deg, 1.0, "\u{b0}")
        }
        LabelUnit::ArcminOffset => numeric_labels(&values_deg, step.major_deg, 60.0, "\u{2032}"),
        LabelUnit::ArcsecOffset => numeric_labels(&values_deg, step.major_deg, 3600.0, "\u{2033}"),
    };

    let major = major
        .iter()
        .zip(labels)
        .map(|(t, label)| MajorTick {
            pixel: t.pixel,
            value_deg: t.value,
            label,
        })
        .collect();

    Ok(EdgePlan {
        side,
        step,
        major,
        minor: minor.iter().map(|t| t.pixel).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    /// Synthetic edge: `coords` at evenly spaced pixels starting from 1.
    fn edge(kind: CoordKind, start_deg: f64, end_deg: f64, n: usize) -> EdgeSamples {
        let mut samples = EdgeSamples::default();
        for i in 0..n {
            let t = i as f64 / (n - 1) as f64;
            let value = start_deg + t * (end_deg - start_deg);
            samples.pixels.push(1.0 + i as f64);
            match kind {
                CoordKind::Ra => {
                    samples.ra.push(value);
                    samples.dec.push(0.0);
                }
                CoordKind::Dec => {
                    samples.ra.push(0.0);
                    samples.dec.push(value);
                }
            }
        }
        samples
    }

    const ORIGIN: EQPoint = EQPoint {
        ra_deg: 0.0,
        dec_deg: 0.0,
    };

    #[test]
    fn dec_edge_gets_labeled_arcminute_ticks() {
        // 10' of declination over 101 pixels: 600"/6=100 → nearest label
        // step is 60" (1')
        let samples = edge(CoordKind::Dec, 10.0, 10.0 + 10.0 / 60.0, 101);
        let plan = plan_edge(&samples, Side::Left, LabelUnit::Hms, ORIGIN, 1e-7).unwrap();

        assert!(approx(plan.step.major_deg, 60.0 / 3600.0, 1e-12));
        let labels: Vec<&str> = plan.major.iter().map(|t| t.label.as_str()).collect();
        // whole-degree tick spells degrees, the next tick anchors the axis,
        // then minutes alone
        assert_eq!(
            labels,
            vec![
                "10\u{b0}00\u{2032}",
                "10\u{b0}01\u{2032}",
                "02\u{2032}",
                "03\u{2032}",
                "04\u{2032}",
                "05\u{2032}",
                "06\u{2032}",
                "07\u{2032}",
                "08\u{2032}",
                "09\u{2032}",
                "10\u{2032}"
            ]
        );

        // ticks land on whole arcminutes, linearly spaced in pixels
        assert!(approx(plan.major[0].pixel, 1.0, 1e-6));
        assert!(approx(plan.major[1].pixel, 11.0, 1e-6));
        assert!(approx(plan.major[10].pixel, 101.0, 1e-6));
    }

    #[test]
    fn minor_ticks_are_denser_than_major() {
        let samples = edge(CoordKind::Dec, -1.0, 1.0, 201);
        let plan = plan_edge(&samples, Side::Right, LabelUnit::Hms, ORIGIN, 1e-7).unwrap();
        assert!(plan.minor.len() > plan.major.len());
        // every major pixel position also appears among the minors
        for m in &plan.major {
            assert!(
                plan.minor.iter().any(|&p| approx(p, m.pixel, 1e-6)),
                "major tick at {} missing from minors",
                m.pixel
            );
        }
    }

    #[test]
    fn ra_edge_descending_on_sky_labels_in_pixel_order() {
        // RA decreasing with pixel: 5h10m down to 4h50m
        let samples = edge(
            CoordKind::Ra,
            (5.0 + 10.0 / 60.0) * 15.0,
            (4.0 + 50.0 / 60.0) * 15.0,
            101,
        );
        let plan = plan_edge(&samples, Side::Bottom, LabelUnit::Hms, ORIGIN, 1e-7).unwrap();

        // 20 minutes of RA → 5-minute label step
        assert!(approx(plan.step.major_deg, 300.0 / 240.0, 1e-12));
        let labels: Vec<&str> = plan.major.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["5h10m", "05m", "5h00m", "55m", "50m"]);

        // pixel order ascending even though RA runs backwards
        for pair in plan.major.windows(2) {
            assert!(pair[0].pixel < pair[1].pixel);
            assert!(pair[0].value_deg > pair[1].value_deg);
        }
    }

    #[test]
    fn ra_seconds_level_axis_spells_the_first_label_fully() {
        // 40 seconds of RA: 40/6 ≈ 6.7 → 5-second label step
        let start = (12.0 + 30.0 / 60.0 + 10.0 / 3600.0) * 15.0;
        let end = (12.0 + 30.0 / 60.0 + 50.0 / 3600.0) * 15.0;
        let samples = edge(CoordKind::Ra, end, start, 201);
        let plan = plan_edge(&samples, Side::Top, LabelUnit::Hms, ORIGIN, 1e-7).unwrap();

        assert!(approx(plan.step.major_deg, 5.0 / 240.0, 1e-12));
        let labels: Vec<&str> = plan.major.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["12h30m50s", "45s", "40s", "35s", "30s", "25s", "20s", "15s", "10s"]
        );
    }

    #[test]
    fn arcsecond_offsets_label_from_the_reference() {
        // Dec edge through the reference: offsets -60"..+60"
        let samples = edge(CoordKind::Dec, -60.0 / 3600.0, 60.0 / 3600.0, 121);
        let plan = plan_edge(
            &samples,
            Side::Left,
            LabelUnit::ArcsecOffset,
            ORIGIN,
            1e-7,
        )
        .unwrap();

        // 120"/6 = 20" label step
        assert!(approx(plan.step.major_deg, 20.0 / 3600.0, 1e-12));
        let labels: Vec<&str> = plan.major.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "-60\u{2033}",
                "-40\u{2033}",
                "-20\u{2033}",
                "0\u{2033}",
                "20\u{2033}",
                "40\u{2033}",
                "60\u{2033}"
            ]
        );

        // the zero offset sits at the middle pixel
        let zero = &plan.major[3];
        assert!(approx(zero.pixel, 61.0, 1e-6));
    }

    #[test]
    fn degree_unit_labels_decimal_degrees() {
        let samples = edge(CoordKind::Dec, -2.0, 2.0, 101);
        let plan = plan_edge(&samples, Side::Left, LabelUnit::Deg, ORIGIN, 1e-7).unwrap();

        // 4° span → whole-degree labels
        assert!(approx(plan.step.major_deg, 1.0, 1e-12));
        let labels: Vec<&str> = plan.major.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "-2\u{b0}",
                "-1\u{b0}",
                "0\u{b0}",
                "1\u{b0}",
                "2\u{b0}"
            ]
        );
    }

    #[test]
    fn non_monotonic_edge_is_fatal() {
        let mut samples = edge(CoordKind::Dec, 0.0, 1.0, 11);
        samples.dec[5] = -5.0;
        assert!(plan_edge(&samples, Side::Left, LabelUnit::Hms, ORIGIN, 1e-7).is_err());
    }
}
