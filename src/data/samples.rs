use anyhow::Result;
use csv::{Reader, ReaderBuilder};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;

use crate::error::Error;
use crate::types::Side;
use crate::wcs::EdgeSamples;

#[derive(Debug, Deserialize)]
struct SampleRow {
    side: String,
    pixel: f64,
    ra_deg: f64,
    dec_deg: f64,
}

/// Externally supplied pixel→sky samples, one table per edge. Stands in
/// for the built-in mapping when the image's world coordinates come from
/// somewhere we cannot evaluate ourselves.
#[derive(Debug, Default)]
pub struct EdgeTables {
    bottom: Option<EdgeSamples>,
    top: Option<EdgeSamples>,
    left: Option<EdgeSamples>,
    right: Option<EdgeSamples>,
}

impl EdgeTables {
    pub fn get(&self, side: Side) -> Option<&EdgeSamples> {
        match side {
            Side::Bottom => self.bottom.as_ref(),
            Side::Top => self.top.as_ref(),
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    pub fn insert(&mut self, side: Side, samples: EdgeSamples) {
        *self.slot(side) = Some(samples);
    }

    fn slot(&mut self, side: Side) -> &mut Option<EdgeSamples> {
        match side {
            Side::Bottom => &mut self.bottom,
            Side::Top => &mut self.top,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

fn parse_samples_from_reader<R: std::io::Read>(mut rdr: Reader<R>) -> Result<EdgeTables> {
    let mut tables = EdgeTables::default();
    for rec in rdr.deserialize() {
        let row: SampleRow = rec?;
        let side =
            Side::from_str(&row.side).ok_or_else(|| Error::BadSide(row.side.clone()))?;
        let samples = tables.slot(side).get_or_insert_with(EdgeSamples::default);
        samples.pixels.push(row.pixel);
        samples.ra.push(row.ra_deg);
        samples.dec.push(row.dec_deg);
    }
    Ok(tables)
}

pub fn load_samples(path: &str) -> Result<EdgeTables> {
    if path.ends_with(".gz") {
        let gz = GzDecoder::new(File::open(path)?);
        let rdr = ReaderBuilder::new().from_reader(gz);
        parse_samples_from_reader(rdr)
    } else {
        let rdr = ReaderBuilder::new().from_path(path)?;
        parse_samples_from_reader(rdr)
    }
}
