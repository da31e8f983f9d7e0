//! Axis label text. Dense sexagesimal labels elide leading fields that
//! repeat from tick to tick; the full value is spelled out once per axis.

use crate::sexagesimal::Sexagesimal;
use crate::types::CoordKind;

/// Labels for major ticks, in axis order (ascending pixel position).
///
/// `major_deg` is the increment between labeled ticks. The elision rules
/// work in the unit being read out: hours for RA, degrees for Dec.
///
/// - whole-unit steps label the whole field only ("5h", "-30°")
/// - minute-level steps label whole:minute on whole-unit ticks and on the
///   first tick of the axis, minutes alone afterwards
/// - second-level steps spell out all three fields on the first tick and on
///   whole-unit ticks, then minute:second on whole minutes, seconds alone
///   otherwise
pub fn sexagesimal_labels(
    values: &[Sexagesimal],
    major_deg: f64,
    kind: CoordKind,
    epsilon: f64,
) -> Vec<String> {
    let step = match kind {
        CoordKind::Ra => major_deg / 15.0,
        CoordKind::Dec => major_deg,
    };
    let (unit_whole, unit_min, unit_sec) = match kind {
        CoordKind::Ra => ("h", "m", "s"),
        CoordKind::Dec => ("\u{b0}", "\u{2032}", "\u{2033}"),
    };

    let mut first = true; // cleared after the first full label on the axis
    let mut out = Vec::with_capacity(values.len());
    for v in values {
        let sign = if v.negative { "-" } else { "" };
        let whole = format!("{sign}{}{unit_whole}", v.whole);
        let minute = format!("{:02}{unit_min}", v.minutes);
        let second = format!("{}{unit_sec}", v.seconds_text());
        let sec_zero = v.seconds.abs() <= epsilon;

        let label = if step >= 1.0 {
            whole
        } else if step >= 1.0 / 60.0 {
            if v.minutes == 0 {
                format!("{whole}{minute}")
            } else if first {
                first = false;
                format!("{whole}{minute}")
            } else {
                minute
            }
        } else if first {
            first = false;
            format!("{whole}{minute}{second}")
        } else if v.minutes == 0 && sec_zero {
            format!("{whole}{minute}{second}")
        } else if sec_zero {
            format!("{minute}{second}")
        } else {
            second
        };
        out.push(label);
    }
    out
}

/// Numeric labels for decimal-degree and offset axes. `values` are in
/// degrees; `factor` scales to the display unit and `suffix` names it.
/// The rounding precision follows the label step in display units.
pub fn numeric_labels(values: &[f64], major_deg: f64, factor: f64, suffix: &str) -> Vec<String> {
    let scaled_step = factor * major_deg;
    let digits: i32 = if scaled_step > 1.0 {
        0
    } else if scaled_step > 0.01 {
        1
    } else {
        2
    };
    let scale = 10f64.powi(digits);

    values
        .iter()
        .map(|&v| {
            let rounded = (factor * v * scale).round() / scale;
            // avoid a "-0" label
            let rounded = if rounded == 0.0 { 0.0 } else { rounded };
            format!("{rounded}{suffix}")
        })
        .collect()
}
