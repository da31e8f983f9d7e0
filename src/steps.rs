//! Nice step sizes for axis labeling. The tables come in the units the
//! labels are read in (hour-seconds for RA, arcseconds for Dec) so the
//! entries stay round numbers; the selectors return degrees.

/// Increments between minor ticks and between labeled (major) ticks, in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepChoice {
    pub minor_deg: f64,
    pub major_deg: f64,
}

// label steps in arcseconds
const DEC_LABEL: [f64; 15] = [
    1.0, 5.0, 10.0, 15.0, 20.0, 30.0, 60.0, 300.0, 600.0, 900.0, 1200.0, 1800.0, 3600.0, 18000.0,
    36000.0,
];
const DEC_STEP: [f64; 15] = [
    0.5, 1.0, 5.0, 5.0, 5.0, 10.0, 20.0, 60.0, 300.0, 300.0, 300.0, 600.0, 1200.0, 3600.0, 18000.0,
];

// label steps in hour-seconds (1 hour-second = 1/240 degree)
const RA_LABEL: [f64; 16] = [
    1.0, 2.0, 5.0, 10.0, 15.0, 20.0, 30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1200.0, 1800.0,
    3600.0, 18000.0,
];
const RA_STEP: [f64; 16] = [
    0.5, 0.5, 1.0, 2.0, 5.0, 5.0, 5.0, 20.0, 30.0, 60.0, 300.0, 300.0, 300.0, 600.0, 1200.0,
    3600.0,
];

// decimal-degree labeling
const DEG_STEP: [f64; 5] = [0.5, 0.10, 0.05, 0.05, 0.01];
const DEG_LABEL: [f64; 5] = [1.0, 0.50, 0.25, 0.10, 0.05];

const ARCSEC_PER_DEG: f64 = 3600.0;
const HSEC_PER_DEG: f64 = 240.0;

/// Index of the label step closest to span/6 (aim for about 6 labels).
/// Ties go to the earlier (finer) entry.
fn nearest(span: f64, labels: &[f64]) -> usize {
    let guess = span / 6.0;
    let mut best = 0;
    for (i, label) in labels.iter().enumerate() {
        if (guess - label).abs() < (guess - labels[best]).abs() {
            best = i;
        }
    }
    best
}

/// Step choice for a declination span (also used for angular offsets).
pub fn dec_step(span_deg: f64) -> StepChoice {
    let idx = nearest(span_deg.abs() * ARCSEC_PER_DEG, &DEC_LABEL);
    StepChoice {
        minor_deg: DEC_STEP[idx] / ARCSEC_PER_DEG,
        major_deg: DEC_LABEL[idx] / ARCSEC_PER_DEG,
    }
}

/// Step choice for a right-ascension span.
pub fn ra_step(span_deg: f64) -> StepChoice {
    let idx = nearest(span_deg.abs() * HSEC_PER_DEG, &RA_LABEL);
    StepChoice {
        minor_deg: RA_STEP[idx] / HSEC_PER_DEG,
        major_deg: RA_LABEL[idx] / HSEC_PER_DEG,
    }
}

/// Step choice for decimal-degree labeling: the coarsest entry that still
/// yields at least 3 labels, falling back to the finest.
pub fn degree_step(span_deg: f64) -> StepChoice {
    let span = span_deg.abs();
    let idx = DEG_LABEL
        .iter()
        .position(|label| span / label >= 3.0)
        .unwrap_or(DEG_LABEL.len() - 1);
    StepChoice {
        minor_deg: DEG_STEP[idx],
        major_deg: DEG_LABEL[idx],
    }
}
