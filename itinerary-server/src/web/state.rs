//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::ViewCache;
use crate::domain::Itinerary;
use crate::loader::IconMap;
use crate::schedule::Durations;

/// Shared application state.
///
/// Holds the pristine itinerary as validated at startup. Handlers clone it
/// before running propagation, so every recomputation starts from a clean
/// structure and anchors can be changed freely between requests.
#[derive(Clone)]
pub struct AppState {
    /// The validated itinerary, untouched by any propagation run.
    pub itinerary: Arc<Itinerary>,

    /// Duration offsets for schedule propagation.
    pub durations: Arc<Durations>,

    /// Stop-type icon references, passed through to the frontend.
    pub icons: Arc<IconMap>,

    /// Computed views keyed by anchor.
    pub cache: ViewCache,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        itinerary: Itinerary,
        durations: Durations,
        icons: IconMap,
        cache: ViewCache,
    ) -> Self {
        Self {
            itinerary: Arc::new(itinerary),
            durations: Arc::new(durations),
            icons: Arc::new(icons),
            cache,
        }
    }
}
