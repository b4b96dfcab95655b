//! Command handlers for the terminal interface
//!
//! Each handler calls one itinerary operation and renders its markdown
//! output. Errors are returned untouched so `main` can report them with the
//! chain of causes intact.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use tripline_core::{
    map_html,
    params::{AddPlace, DayQuery, MovePlace, PlaceRef},
    CreateResult, Itinerary, MapResult, UpdateResult,
};

use crate::renderer::TerminalRenderer;

pub struct Cli {
    itinerary: Itinerary,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(itinerary: Itinerary, renderer: TerminalRenderer) -> Self {
        Self {
            itinerary,
            renderer,
        }
    }

    pub async fn list_places(&self, params: &DayQuery) -> Result<()> {
        let plan = self.itinerary.list_places(params).await?;
        self.renderer.render(&plan.to_string())
    }

    pub async fn add_place(&self, params: &AddPlace) -> Result<()> {
        let place = self.itinerary.add_place(params).await?;
        info!("Added place {} to day {}", place.id, place.day);
        self.renderer.render(&CreateResult::new(place).to_string())
    }

    pub async fn delete_place(&self, params: &PlaceRef) -> Result<()> {
        let result = self.itinerary.remove_place(params).await?;
        self.renderer.render(&result.to_string())
    }

    pub async fn move_place(&self, params: &MovePlace) -> Result<()> {
        let plan = self.itinerary.move_place(params).await?;
        let change = format!(
            "Move place {} {}",
            params.id.trim(),
            params.direction.trim().to_lowercase()
        );
        self.renderer
            .render(&UpdateResult::with_changes(plan, vec![change]).to_string())
    }

    pub async fn show_route(&self, params: &DayQuery) -> Result<()> {
        let map = self.itinerary.route_map(params).await?;
        self.renderer.render(&format!("# Day {}\n\n{map}", params.day))
    }

    pub async fn write_map(&self, params: &DayQuery, output: &Path) -> Result<()> {
        let day = params.validate()?;
        let map = self.itinerary.route_map(params).await?;
        let html = map_html::render(day, &map)?;

        debug!("Writing {} bytes to {}", html.len(), output.display());
        std::fs::write(output, html)
            .with_context(|| format!("Failed to write map to {}", output.display()))?;

        let result = MapResult {
            day,
            stops: map.markers.len(),
            path: output.to_path_buf(),
        };
        self.renderer.render(&result.to_string())
    }

    pub async fn show_overview(&self) -> Result<()> {
        let overview = self.itinerary.overview().await?;
        self.renderer.render(&overview.to_string())
    }
}
