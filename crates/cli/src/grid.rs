use anyhow::Context;
use hexgrid::{render::GridView, Hex, Layout, LayoutConfig};
use serde::{Deserialize, Serialize};

/// Everything needed to build a grid, as loaded from a config file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Extra CSS class(es) for the group that holds every shape
    pub class_name: Option<String>,
    pub layout: LayoutConfig,
    pub hexes: Vec<HexConfig>,
}

/// One hex in the grid, plus its optional styling
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexConfig {
    pub q: f64,
    pub r: f64,
    pub s: f64,
    pub fill: Option<String>,
    pub class_name: Option<String>,
    pub cell_style: Option<String>,
}

impl GridConfig {
    /// Validate the layout and every hex, then place all the hexes into a
    /// new grid
    pub fn build(&self) -> anyhow::Result<GridView> {
        let layout =
            Layout::from_config(self.layout).context("invalid layout config")?;
        let mut grid = GridView::new(layout);
        if let Some(class_name) = &self.class_name {
            grid = grid.with_class_name(class_name.as_str());
        }

        for (i, entry) in self.hexes.iter().enumerate() {
            let hex = Hex::new(entry.q, entry.r, entry.s)
                .with_context(|| format!("invalid hex at index {}", i))?;
            let shape = grid.add_hex(hex);
            shape.fill = entry.fill.clone();
            shape.class_name = entry.class_name.clone();
            shape.cell_style = entry.cell_style.clone();
        }

        Ok(grid)
    }
}
