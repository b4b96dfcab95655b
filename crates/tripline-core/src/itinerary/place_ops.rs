//! Place operations for the Itinerary.

use log::{debug, info, warn};

use super::Itinerary;
use crate::{
    display::{DeleteResult, TripOverview},
    error::Result,
    models::{Day, DayPlan, DaySummary, Place, RouteMap},
    ordering,
    params::{AddPlace, DayQuery, MovePlace, PlaceRef},
    route,
};

impl Itinerary {
    /// Fresh read of a day, sorted by order.
    async fn fetch(&self, day: Day) -> Result<DayPlan> {
        let mut places = self.run(move |store| store.list(day)).await?;
        ordering::sort_by_order(&mut places);
        debug!("Day {} has {} places", day.get(), places.len());

        if !ordering::is_contiguous(&places) {
            warn!(
                "Day {} orders are not contiguous: {:?}",
                day.get(),
                places.iter().map(|p| p.order).collect::<Vec<_>>()
            );
        }

        Ok(DayPlan::new(day, places))
    }

    /// Lists the places of a day in ascending order.
    pub async fn list_places(&self, params: &DayQuery) -> Result<DayPlan> {
        let day = params.validate()?;
        self.fetch(day).await
    }

    /// Appends a place to the end of a day.
    pub async fn add_place(&self, params: &AddPlace) -> Result<Place> {
        let (day, draft) = params.validate()?;

        let place = self.run(move |store| store.add(day, &draft)).await?;
        info!(
            "Added place {} '{}' to day {} at position {}",
            place.id.as_str(),
            place.name,
            day.get(),
            place.order
        );
        Ok(place)
    }

    /// Removes a place and returns the renumbered day.
    ///
    /// An id that is not on the day leaves the day untouched and comes back
    /// with `removed` unset.
    pub async fn remove_place(&self, params: &PlaceRef) -> Result<DeleteResult<DayPlan>> {
        let (day, id) = params.validate()?;

        let removed = {
            let id = id.clone();
            self.run(move |store| store.delete(day, &id)).await?
        };

        if removed {
            info!("Removed place {} from day {}", id.as_str(), day.get());
        } else {
            warn!(
                "Place {} is not on day {}; nothing removed",
                id.as_str(),
                day.get()
            );
        }

        let plan = self.fetch(day).await?;
        Ok(DeleteResult::new(id, removed, plan))
    }

    /// Moves a place one slot and returns the renumbered day.
    ///
    /// Moving the first place up, the last place down or an unknown id is a
    /// no-op.
    pub async fn move_place(&self, params: &MovePlace) -> Result<DayPlan> {
        let (day, id, direction) = params.validate()?;

        let moved = {
            let id = id.clone();
            self.run(move |store| store.move_place(day, &id, direction))
                .await?
        };

        let plan = self.fetch(day).await?;

        if moved {
            info!(
                "Moved place {} {} on day {}",
                id.as_str(),
                direction.as_str(),
                day.get()
            );
        } else if plan.contains(&id) {
            debug!(
                "Place {} is already at the {} boundary of day {}",
                id.as_str(),
                direction.as_str(),
                day.get()
            );
        } else {
            warn!(
                "Place {} is not on day {}; nothing moved",
                id.as_str(),
                day.get()
            );
        }

        Ok(plan)
    }

    /// Composes the map description for a day.
    pub async fn route_map(&self, params: &DayQuery) -> Result<RouteMap> {
        let plan = self.list_places(params).await?;
        Ok(route::compose(&plan.places))
    }

    /// Place counts for every day of the trip.
    pub async fn overview(&self) -> Result<TripOverview> {
        let mut days = Vec::new();
        for day in Day::all() {
            let plan = self.fetch(day).await?;
            days.push(DaySummary {
                day,
                places: plan.len(),
            });
        }
        Ok(TripOverview(days))
    }
}
