use std::fmt;

use crate::error::{Error, Result};
use crate::types::{hours_to_degrees, CoordKind};

/// A normalized sexagesimal angle: sign, whole hours or degrees, minutes,
/// seconds, with 0 <= minutes < 60 and 0 <= seconds < 60. Rounding happens
/// at construction, so carries have already propagated by the time the
/// fields are read.
#[derive(Debug, Clone, PartialEq)]
pub struct Sexagesimal {
    pub negative: bool,
    pub whole: u32,
    pub minutes: u32,
    pub seconds: f64,
    precision: u8,
}

impl Sexagesimal {
    /// Split a decimal-degree value. RA values are converted to hours first.
    pub fn from_degrees(value: f64, kind: CoordKind, precision: u8) -> Self {
        // is_sign_negative also catches -0.0 degrees, e.g. -0:30:00
        let negative = value.is_sign_negative();
        let mut magnitude = value.abs();
        if kind == CoordKind::Ra {
            magnitude /= 15.0;
        }
        let whole = magnitude.trunc();
        let rem = (magnitude - whole) * 60.0;
        let minutes = rem.trunc();
        let seconds = (rem - minutes) * 60.0;
        Self::normalize(negative, whole as u32, minutes as u32, seconds, precision)
    }

    /// Parse a colon-separated value: one field is taken as decimal degrees,
    /// two as hours/degrees and minutes (seconds padded with 0.0), three as
    /// a full sexagesimal triple. The sign may appear on the leading field
    /// only.
    pub fn parse(text: &str, kind: CoordKind, precision: u8) -> Result<Self> {
        let fields = text
            .split(':')
            .map(|f| f.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|_| Error::BadSexagesimal(text.to_owned()))?;

        match fields.len() {
            1 => Ok(Self::from_degrees(fields[0], kind, precision)),
            2 | 3 => {
                let seconds = fields.get(2).copied().unwrap_or(0.0);
                if fields[1] < 0.0 || seconds < 0.0 {
                    return Err(Error::BadSexagesimal(text.to_owned()));
                }
                Ok(Self::normalize(
                    fields[0].is_sign_negative(),
                    fields[0].abs() as u32,
                    fields[1] as u32,
                    seconds,
                    precision,
                ))
            }
            _ => Err(Error::BadSexagesimal(text.to_owned())),
        }
    }

    fn normalize(
        negative: bool,
        mut whole: u32,
        mut minutes: u32,
        seconds: f64,
        precision: u8,
    ) -> Self {
        let scale = 10f64.powi(precision as i32);
        let mut seconds = (seconds * scale).round() / scale;
        while seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        while minutes >= 60 {
            minutes -= 60;
            whole += 1;
        }
        Self {
            negative,
            whole,
            minutes,
            seconds,
            precision,
        }
    }

    /// Back to decimal degrees (hours * 15 for RA).
    pub fn to_degrees(&self, kind: CoordKind) -> f64 {
        let mut magnitude = self.whole as f64 + (self.minutes as f64 * 60.0 + self.seconds) / 3600.0;
        if kind == CoordKind::Ra {
            magnitude = hours_to_degrees(magnitude);
        }
        if self.negative { -magnitude } else { magnitude }
    }

    /// Zero-padded seconds field: "07" at precision 0, "07.5" at precision 1.
    pub fn seconds_text(&self) -> String {
        if self.precision == 0 {
            format!("{:02}", self.seconds.round() as u32)
        } else {
            let p = self.precision as usize;
            format!("{:0w$.p$}", self.seconds, w = p + 3, p = p)
        }
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}:{:02}:{}",
            self.whole,
            self.minutes,
            self.seconds_text()
        )
    }
}
