use crate::error::{Error, Result};

/// One graduation mark: pixel position and coordinate value in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub pixel: f64,
    pub value: f64,
}

/// Linear interpolation over ascending sample positions. `x` must lie
/// within the sampled range.
fn interp(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let i = xs.partition_point(|&v| v < x).clamp(1, xs.len() - 1);
    let (x0, x1) = (xs[i - 1], xs[i]);
    let (y0, y1) = (ys[i - 1], ys[i]);
    y0 + (x - x0) / (x1 - x0) * (y1 - y0)
}

/// Find every multiple of `step` (anchored at `range.0`) that the sampled
/// coordinates cover, and interpolate each to a pixel position.
///
/// `coords` must be strictly monotonic; a descending edge is normalized by
/// reversal. Non-monotonic input means the caller handed us a projection
/// this planner does not support, and is a fatal error.
pub fn locate_ticks(
    pixels: &[f64],
    coords: &[f64],
    step: f64,
    range: (f64, f64),
) -> Result<Vec<Tick>> {
    if pixels.len() != coords.len() {
        return Err(Error::LengthMismatch {
            pixels: pixels.len(),
            coords: coords.len(),
        });
    }
    if coords.len() < 2 {
        return Err(Error::TooFewSamples(coords.len()));
    }

    let increasing = coords.windows(2).all(|w| w[1] > w[0]);
    let decreasing = coords.windows(2).all(|w| w[1] < w[0]);
    if !increasing && !decreasing {
        return Err(Error::NonMonotonic);
    }

    let (pixels, coords): (Vec<f64>, Vec<f64>) = if increasing {
        (pixels.to_vec(), coords.to_vec())
    } else {
        (
            pixels.iter().rev().copied().collect(),
            coords.iter().rev().copied().collect(),
        )
    };

    let minval = coords[0];
    let maxval = *coords.last().unwrap_or(&minval);

    // keep ticks that land on the span boundary despite accumulated
    // floating-point error in the multiples
    let tol = step * 1e-6;

    let mut ticks = Vec::new();
    let count = ((range.1 - range.0) / step).floor() as i64;
    for k in 0..=count {
        let value = range.0 + k as f64 * step;
        if value >= minval - tol && value <= maxval + tol {
            ticks.push(Tick {
                pixel: interp(value, &coords, &pixels),
                value,
            });
        }
    }

    ticks.sort_by(|a, b| a.pixel.total_cmp(&b.pixel));
    Ok(ticks)
}
