//! Search helpers for the location directory.
//!
//! Pure functions over in-memory location records: free-text filtering and
//! city autocomplete suggestions.

use crate::types::location::{CitySuggestion, Location};

/// Filters locations by a free-text term.
///
/// An empty term matches everything. Otherwise the term matches
/// case-insensitively against name, address, any brand, or any flavor name.
pub fn filter_locations<'a>(locations: &'a [Location], term: &str) -> Vec<&'a Location> {
    if term.is_empty() {
        return locations.iter().collect();
    }
    let term = term.to_lowercase();
    locations
        .iter()
        .filter(|loc| {
            loc.name.to_lowercase().contains(&term)
                || loc.address.to_lowercase().contains(&term)
                || loc.brands.iter().any(|b| b.to_lowercase().contains(&term))
                || loc.flavors.iter().any(|f| f.name.to_lowercase().contains(&term))
        })
        .collect()
}

/// Extracts the city name from an address (simple heuristic).
///
/// Takes the last comma-separated part and strips a leading 5-digit postal
/// code. Returns `None` for addresses without a comma, or when nothing
/// remains after stripping.
pub fn extract_city_name(address: &str) -> Option<String> {
    let parts: Vec<&str> = address.split(',').collect();
    if parts.len() < 2 {
        return None;
    }
    let last = parts.last()?.trim();
    let city = if last.len() >= 5 && last.chars().take(5).all(|c| c.is_ascii_digit()) {
        last[5..].trim_start()
    } else {
        last
    };
    if city.is_empty() {
        None
    } else {
        Some(city.to_string())
    }
}

/// Builds the unique city suggestion list from a location set.
///
/// The first location seen for a city contributes the coordinates; the list
/// is sorted by city name.
pub fn city_suggestions(locations: &[Location]) -> Vec<CitySuggestion> {
    let mut cities: Vec<CitySuggestion> = Vec::new();
    for loc in locations {
        if let Some(name) = extract_city_name(&loc.address) {
            if !cities.iter().any(|c| c.name == name) {
                cities.push(CitySuggestion {
                    name,
                    coordinates: loc.coordinates,
                });
            }
        }
    }
    cities.sort_by(|a, b| a.name.cmp(&b.name));
    cities
}

/// Filters suggestions whose name starts with the term, case-insensitively.
/// An empty term matches nothing.
pub fn matching_cities<'a>(
    suggestions: &'a [CitySuggestion],
    term: &str,
) -> Vec<&'a CitySuggestion> {
    if term.is_empty() {
        return Vec::new();
    }
    let term = term.to_lowercase();
    suggestions
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&term))
        .collect()
}
