use crate::config::FrameConfig;
use crate::context::FrameContext;
use crate::data::EdgeTables;
use crate::error::Result;
use crate::layers::{FrameLayer, GridLayer, Layer};
use crate::wcs::SkyMapping;
use std::fs;
use svg::node::element::{ClipPath, Definitions, Group, Rectangle, Style};
use svg::Document;

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/frame.css"));

pub struct Chart<'a> {
    pub context: FrameContext<'a>,
    css_path: Option<String>,
}

impl<'a> Chart<'a> {
    pub fn new(
        cfg: FrameConfig,
        wcs: &'a dyn SkyMapping,
        tables: Option<&'a EdgeTables>,
        css_path: Option<String>,
    ) -> Self {
        Self {
            context: FrameContext::new(cfg, wcs, tables),
            css_path,
        }
    }

    fn load_css_text(&self) -> String {
        if let Some(path) = &self.css_path {
            if let Ok(text) = fs::read_to_string(path) {
                return text;
            }
        }
        // Embedded fallback
        DEFAULT_CSS.to_owned()
    }

    pub fn draw_document(&self) -> Result<Document> {
        let w = self.context.cfg.width;
        let h = self.context.cfg.height;
        let l = &self.context.layout;

        // Layer stack, back to front
        let clipped_layers: Vec<Box<dyn Layer>> = vec![Box::new(GridLayer::new())];
        let unclipped_layers: Vec<Box<dyn Layer>> = vec![Box::new(FrameLayer::new())];

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", w)
            .set("height", h)
            .set("class", "wcsframe");

        let css = self.load_css_text();
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }

        let clip_rect = Rectangle::new()
            .set("x", l.plot_x)
            .set("y", l.plot_y)
            .set("width", l.plot_w)
            .set("height", l.plot_h);
        let clip = ClipPath::new().set("id", "clip-frame").add(clip_rect);
        let defs = Definitions::new().add(clip);
        doc = doc.add(defs);

        // Graticule stays inside the border
        let mut clipped = Group::new().set("clip-path", "url(#clip-frame)");
        for layer in clipped_layers {
            clipped = clipped.add(layer.render(&self.context)?);
        }
        doc = doc.add(clipped);

        // Border, ticks and labels extend outside it
        for layer in unclipped_layers {
            doc = doc.add(layer.render(&self.context)?);
        }

        Ok(doc)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let doc = self.draw_document()?;
        svg::save(path, &doc)?;
        Ok(())
    }
}
