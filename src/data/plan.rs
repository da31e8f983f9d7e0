use anyhow::Result;
use csv::Writer;
use serde::Serialize;

use crate::context::FrameContext;
use crate::types::Side;

#[derive(Debug, Serialize)]
struct PlanRow {
    side: String,
    kind: &'static str,
    pixel: f64,
    value_deg: Option<f64>,
    label: Option<String>,
}

fn write_plan_to<W: std::io::Write>(
    context: &FrameContext<'_>,
    mut wtr: Writer<W>,
) -> Result<()> {
    for side in Side::ALL {
        let plan = context.plan(side)?;
        for t in &plan.major {
            wtr.serialize(PlanRow {
                side: side.to_string(),
                kind: "major",
                pixel: t.pixel,
                value_deg: Some(t.value_deg),
                label: Some(t.label.clone()),
            })?;
        }
        for &pixel in &plan.minor {
            wtr.serialize(PlanRow {
                side: side.to_string(),
                kind: "minor",
                pixel,
                value_deg: None,
                label: None,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Dump the computed tick plan for all four edges as CSV, majors (with
/// values and labels) before minors for each side.
pub fn write_plan(context: &FrameContext<'_>, path: &str) -> Result<()> {
    write_plan_to(context, Writer::from_path(path)?)
}
