// Pfoteneis services
// Services provide core functionality: icon resolution, location data sources, search.

pub mod icon_registry;
pub mod location_source;
pub mod search;
