use crate::config::FrameConfig;
use crate::data::EdgeTables;
use crate::error::{Error, Result};
use crate::layout::FrameLayout;
use crate::planner::{plan_edge, EdgePlan};
use crate::types::Side;
use crate::wcs::{sample_edge, EdgeSamples, SkyMapping};

pub struct FrameContext<'a> {
    pub cfg: FrameConfig,
    pub layout: FrameLayout,
    pub wcs: &'a dyn SkyMapping,
    pub tables: Option<&'a EdgeTables>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        cfg: FrameConfig,
        wcs: &'a dyn SkyMapping,
        tables: Option<&'a EdgeTables>,
    ) -> Self {
        let layout = FrameLayout::from(&cfg);
        Self {
            cfg,
            layout,
            wcs,
            tables,
        }
    }

    /// Sky samples along one edge: taken from the supplied coordinate table
    /// when one was given, otherwise sampled from the mapping.
    pub fn edge_samples(&self, side: Side) -> Result<EdgeSamples> {
        match self.tables {
            Some(tables) => tables
                .get(side)
                .cloned()
                .ok_or(Error::MissingEdge(side)),
            None => Ok(sample_edge(self.wcs, self.cfg.limits, side)),
        }
    }

    pub fn plan(&self, side: Side) -> Result<EdgePlan> {
        let samples = self.edge_samples(side)?;
        plan_edge(
            &samples,
            side,
            self.cfg.unit,
            self.wcs.reference(),
            self.cfg.label_epsilon,
        )
    }

    /// Graticule lines need the full 2D mapping; an edge table alone cannot
    /// provide one.
    pub fn can_trace_grid(&self) -> bool {
        self.tables.is_none()
    }
}
