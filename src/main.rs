mod chart;
mod config;
mod context;
mod data;
mod error;
mod labels;
mod layers;
mod layout;
mod planner;
mod sexagesimal;
mod steps;
mod ticks;
mod types;
mod wcs;

use crate::chart::Chart;
use crate::config::{FrameConfig, Margin, PixelLimits};
use crate::data::{load_samples, write_plan};
use crate::sexagesimal::Sexagesimal;
use crate::types::{CoordKind, EQPoint, LabelUnit, Point, Projection};
use crate::wcs::build_mapping;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wcsframe")]
#[command(about = "World-coordinate axis frames for astronomical images", version)]
struct Args {
    /// Reference RA either as hour:minute:second (e.g. "5:35:17.3") or decimal degrees ("83.821")
    #[arg(long = "ra")]
    ra: String,

    /// Reference Dec as degree:minute:second (e.g. "-5:23:28") or decimal degrees ("-5.391")
    #[arg(long = "dec")]
    dec: String,

    /// Pixel scale in arcseconds per pixel
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Rotation of the pixel grid on the sky, in degrees
    #[arg(long, default_value_t = 0.0)]
    rot: f64,

    /// Built-in sky mapping to use, either tan or linear
    #[arg(long, default_value = "tan")]
    projection: String,

    /// Image width in pixels (NAXIS1)
    #[arg(long, default_value_t = 512)]
    naxis1: u32,

    /// Image height in pixels (NAXIS2)
    #[arg(long, default_value_t = 512)]
    naxis2: u32,

    /// Pixel window as xmin,xmax,ymin,ymax (one-based, defaults to the full image)
    #[arg(long)]
    limits: Option<String>,

    /// Reference pixel as x,y (defaults to the image center)
    #[arg(long)]
    crpix: Option<String>,

    /// Tick label unit: hms, deg, or offsets from the reference as so/mo/do
    #[arg(long, default_value = "hms")]
    unit: String,

    /// Output SVG path
    #[arg(short = 'o', long = "out")]
    out: String,

    /// Optional CSS override file path; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,

    /// Output image width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Tolerance for "lands on a whole field" label tests
    #[arg(long, default_value_t = 1e-7)]
    label_epsilon: f64,

    /// Optional CSV (or .csv.gz) of side,pixel,ra_deg,dec_deg samples
    /// replacing the built-in mapping along the edges
    #[arg(long)]
    wcs_table: Option<String>,

    /// Optional CSV path for the computed tick plan
    #[arg(long)]
    ticks_out: Option<String>,
}

fn parse_ra_deg(s: &str) -> Result<f64> {
    if s.contains(':') {
        let hms = Sexagesimal::parse(s, CoordKind::Ra, 4).with_context(|| format!("bad RA {s}"))?;
        Ok(hms.to_degrees(CoordKind::Ra).rem_euclid(360.0))
    } else {
        let deg: f64 = s.parse().context("RA must be HMS or degrees")?;
        Ok(deg.rem_euclid(360.0))
    }
}

fn parse_dec_deg(s: &str) -> Result<f64> {
    if s.contains(':') {
        let dms =
            Sexagesimal::parse(s, CoordKind::Dec, 4).with_context(|| format!("bad Dec {s}"))?;
        Ok(dms.to_degrees(CoordKind::Dec))
    } else {
        let deg: f64 = s.parse().context("Dec must be DMS or degrees")?;
        Ok(deg)
    }
}

fn parse_limits(s: &str) -> Result<PixelLimits> {
    let parts: Vec<u32> = s
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("bad limits '{s}'"))?;
    if parts.len() != 4 {
        return Err(anyhow!("limits need xmin,xmax,ymin,ymax, got '{s}'"));
    }
    let limits = PixelLimits {
        xmin: parts[0],
        xmax: parts[1],
        ymin: parts[2],
        ymax: parts[3],
    };
    if limits.xmin >= limits.xmax || limits.ymin >= limits.ymax {
        return Err(anyhow!("limits are empty or inverted: '{s}'"));
    }
    Ok(limits)
}

fn parse_crpix(s: &str) -> Result<Point> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("bad crpix '{s}'"))?;
    if parts.len() != 2 {
        return Err(anyhow!("crpix needs x,y, got '{s}'"));
    }
    Ok(Point {
        x: parts[0],
        y: parts[1],
    })
}

fn parse_unit(s: &str) -> Result<LabelUnit> {
    LabelUnit::from_str(s).ok_or_else(|| anyhow!("invalid unit '{s}'. Use: hms | deg | so | mo | do"))
}

fn parse_projection(s: &str) -> Result<Projection> {
    Projection::from_str(&s.to_lowercase())
        .ok_or_else(|| anyhow!("invalid projection '{s}'. Use: tan | linear"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let ra_deg = parse_ra_deg(&args.ra)?;
    let dec_deg = parse_dec_deg(&args.dec)?;
    let center = EQPoint { ra_deg, dec_deg };
    let projection = parse_projection(&args.projection)?;
    let unit = parse_unit(&args.unit)?;

    let limits = match args.limits.as_deref() {
        Some(s) => parse_limits(s)?,
        None => PixelLimits::full(args.naxis1, args.naxis2),
    };
    let crpix = args.crpix.as_deref().map(parse_crpix).transpose()?;

    let cfg = FrameConfig {
        center,
        scale_arcsec: args.scale,
        rot_deg: args.rot,
        projection,
        naxis1: args.naxis1,
        naxis2: args.naxis2,
        limits,
        unit,
        width: args.width,
        height: args.height,
        margin: Margin::uniform(48),
        label_epsilon: args.label_epsilon,
    };

    let wcs = build_mapping(&cfg, crpix);

    let tables = args
        .wcs_table
        .as_deref()
        .map(load_samples)
        .transpose()
        .with_context(|| format!("reading {:?}", args.wcs_table))?;

    let chart = Chart::new(cfg, wcs.as_ref(), tables.as_ref(), args.css);
    chart
        .to_file(&args.out)
        .with_context(|| format!("writing {}", args.out))?;

    if let Some(path) = &args.ticks_out {
        write_plan(&chart.context, path).with_context(|| format!("writing {path}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod test_utils;
