//! Unit tests for the LocationRecord serializer/deserializer pair.
//!
//! The persisted shape is the only thing that ever reaches the storage
//! primitive; these tests pin its exact JSON field names and the explicit
//! conversions between the raw and render-ready forms.

use pfoteneis::services::icon_registry::{IconRegistry, IconRegistryTrait, UNRESOLVED_ICON_NAME};
use pfoteneis::types::location::{Coordinates, Flavor, Location, RawFlavor, RawIcon, RawLocation};

fn full_location(icons: &IconRegistry) -> Location {
    Location {
        id: "loc-1".to_string(),
        name: "Eiscafé Luna".to_string(),
        address: "Hauptstraße 1, 10115 Berlin".to_string(),
        coordinates: Coordinates {
            lat: 52.5323,
            lng: 13.3846,
        },
        brands: vec!["Hundeeis GmbH".to_string()],
        flavors: vec![Flavor {
            name: "Lachs".to_string(),
            icon: icons.resolve("Fish"),
            icon_color: Some("text-orange-500".to_string()),
        }],
        description: "Eisdiele mit Hundeterrasse".to_string(),
        image: "https://example.com/shop.jpg".to_string(),
        data_ai_hint: Some("ice cream shop".to_string()),
        opening_hours: "10:00–18:00".to_string(),
        phone: Some("+49 30 1234567".to_string()),
        website: Some("https://example.com".to_string()),
    }
}

#[test]
fn test_serialized_document_uses_wire_field_names() {
    let icons = IconRegistry::new();
    let raw = full_location(&icons).to_raw(&icons);
    let value = serde_json::to_value(&raw).unwrap();

    assert_eq!(value["id"], "loc-1");
    assert_eq!(value["coordinates"]["lat"], 52.5323);
    assert_eq!(value["openingHours"], "10:00–18:00");
    assert_eq!(value["dataAiHint"], "ice cream shop");
    assert_eq!(value["flavors"][0]["icon"], "Fish");
    assert_eq!(value["flavors"][0]["iconColor"], "text-orange-500");
}

#[test]
fn test_absent_optionals_are_omitted() {
    let icons = IconRegistry::new();
    let mut location = full_location(&icons);
    location.data_ai_hint = None;
    location.phone = None;
    location.website = None;
    location.flavors[0].icon_color = None;

    let value = serde_json::to_value(location.to_raw(&icons)).unwrap();
    let keys = value.as_object().unwrap();
    assert!(!keys.contains_key("dataAiHint"));
    assert!(!keys.contains_key("phone"));
    assert!(!keys.contains_key("website"));
    assert!(!value["flavors"][0]
        .as_object()
        .unwrap()
        .contains_key("iconColor"));
}

#[test]
fn test_wire_document_parses_and_rehydrates() {
    let icons = IconRegistry::new();
    let payload = r#"{
        "id": "loc-2",
        "name": "Gelato Mio",
        "address": "Marktplatz 3, 80331 München",
        "coordinates": {"lat": 48.1372, "lng": 11.5755},
        "brands": ["PfotenFroh"],
        "flavors": [{"name": "Vanille (hundesicher)", "icon": "IceCream"}],
        "description": "Gelateria",
        "image": "https://example.com/mio.jpg",
        "openingHours": "11:00–18:00"
    }"#;

    let raw: RawLocation = serde_json::from_str(payload).unwrap();
    let location = raw.rehydrate(&icons);

    assert_eq!(location.id, "loc-2");
    assert_eq!(location.phone, None);
    assert_eq!(location.flavors[0].icon, icons.resolve("IceCream"));
}

#[test]
fn test_registered_icon_serializes_as_its_name() {
    let icons = IconRegistry::new();
    let flavor = Flavor {
        name: "Lachs".to_string(),
        icon: icons.resolve("Fish"),
        icon_color: None,
    };

    let raw = flavor.to_raw(&icons);
    match raw.icon {
        Some(RawIcon::Name(name)) => assert_eq!(name, "Fish"),
        other => panic!("expected icon name, got {:?}", other),
    }
}

#[test]
fn test_unregistered_handle_serializes_as_placeholder_token() {
    let icons = IconRegistry::new();
    let flavor = Flavor {
        name: "Geheim".to_string(),
        icon: icons.default_icon(),
        icon_color: None,
    };

    let raw = flavor.to_raw(&icons);
    match raw.icon {
        Some(RawIcon::Name(name)) => assert_eq!(name, UNRESOLVED_ICON_NAME),
        other => panic!("expected placeholder token, got {:?}", other),
    }
}

#[test]
fn test_legacy_icon_value_rehydrates_via_flavor_name() {
    let icons = IconRegistry::new();
    let raw = RawFlavor {
        name: "Lachs".to_string(),
        icon: Some(RawIcon::Legacy(serde_json::json!({"render": true}))),
        icon_color: None,
    };
    assert_eq!(raw.rehydrate(&icons).icon, icons.resolve("Fish"));

    let raw = RawFlavor {
        name: "Unbekannt".to_string(),
        icon: None,
        icon_color: None,
    };
    assert_eq!(raw.rehydrate(&icons).icon, icons.default_icon());
}
