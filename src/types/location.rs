//! Location and flavor records, in persisted (raw) and in-memory form.
//!
//! `RawLocation`/`RawFlavor` are the serde-facing shapes used by the durable
//! slot and the remote data set (icons encoded as name strings).
//! `Location`/`Flavor` are the render-ready shapes with resolved icon
//! handles; they are never handed to the storage primitive directly.

use serde::{Deserialize, Serialize};

use crate::services::icon_registry::{IconRegistry, IconRegistryTrait, UNRESOLVED_ICON_NAME};
use crate::types::icon::IconHandle;

/// Geographic position of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A city autocomplete suggestion derived from location addresses.
#[derive(Debug, Clone, PartialEq)]
pub struct CitySuggestion {
    pub name: String,
    pub coordinates: Coordinates,
}

/// Icon field of a persisted flavor.
///
/// The current encoding is the icon name string. Older records serialized
/// the resolved in-memory form instead, which left either no icon field at
/// all or a non-string JSON value; both are accepted on load and rehydrated
/// through the registry's flavor-name table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawIcon {
    Name(String),
    Legacy(serde_json::Value),
}

/// One product as persisted or fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFlavor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<RawIcon>,
    #[serde(rename = "iconColor", default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
}

/// One venue as persisted or fetched from the remote data set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub brands: Vec<String>,
    pub flavors: Vec<RawFlavor>,
    pub description: String,
    pub image: String,
    #[serde(rename = "dataAiHint", default, skip_serializing_if = "Option::is_none")]
    pub data_ai_hint: Option<String>,
    #[serde(rename = "openingHours")]
    pub opening_hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// One product in render-ready form.
#[derive(Debug, Clone, PartialEq)]
pub struct Flavor {
    pub name: String,
    /// Always resolved: a registered glyph or the registry default.
    pub icon: IconHandle,
    pub icon_color: Option<String>,
}

/// One venue in render-ready form.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub brands: Vec<String>,
    pub flavors: Vec<Flavor>,
    pub description: String,
    pub image: String,
    pub data_ai_hint: Option<String>,
    pub opening_hours: String,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl RawFlavor {
    /// Resolves the persisted icon encoding into a render-ready handle.
    pub fn rehydrate(self, icons: &IconRegistry) -> Flavor {
        let icon = match &self.icon {
            Some(RawIcon::Name(name)) => icons.resolve(name),
            // Older records stored the resolved form, so the icon survives
            // only through the flavor-name table.
            Some(RawIcon::Legacy(_)) | None => icons
                .legacy_flavor_icon(&self.name)
                .unwrap_or_else(|| icons.default_icon()),
        };
        Flavor {
            name: self.name,
            icon,
            icon_color: self.icon_color,
        }
    }
}

impl Flavor {
    /// Converts back to the persisted encoding.
    ///
    /// Handles without a registry entry are written as the
    /// [`UNRESOLVED_ICON_NAME`] token rather than omitted, so a later load
    /// does not silently pick a different icon than intended.
    pub fn to_raw(&self, icons: &IconRegistry) -> RawFlavor {
        let name = icons
            .reverse_lookup(self.icon)
            .unwrap_or(UNRESOLVED_ICON_NAME);
        RawFlavor {
            name: self.name.clone(),
            icon: Some(RawIcon::Name(name.to_string())),
            icon_color: self.icon_color.clone(),
        }
    }
}

impl RawLocation {
    /// Resolves all flavor icons, producing the render-ready record.
    pub fn rehydrate(self, icons: &IconRegistry) -> Location {
        Location {
            id: self.id,
            name: self.name,
            address: self.address,
            coordinates: self.coordinates,
            brands: self.brands,
            flavors: self
                .flavors
                .into_iter()
                .map(|flavor| flavor.rehydrate(icons))
                .collect(),
            description: self.description,
            image: self.image,
            data_ai_hint: self.data_ai_hint,
            opening_hours: self.opening_hours,
            phone: self.phone,
            website: self.website,
        }
    }
}

impl Location {
    /// Converts back to the persisted encoding with string icon names.
    pub fn to_raw(&self, icons: &IconRegistry) -> RawLocation {
        RawLocation {
            id: self.id.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            coordinates: self.coordinates,
            brands: self.brands.clone(),
            flavors: self
                .flavors
                .iter()
                .map(|flavor| flavor.to_raw(icons))
                .collect(),
            description: self.description.clone(),
            image: self.image.clone(),
            data_ai_hint: self.data_ai_hint.clone(),
            opening_hours: self.opening_hours.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
        }
    }
}
