//! Pfoteneis — application core for "Eis für Pfoten".
//!
//! Entry point: runs a console demo exercising every component.

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Pfoteneis v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║     Dog-friendly ice cream directory core                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_icon_registry();
    demo_location_codec();
    demo_search();
    demo_bookmarks();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

/// Builds a small raw listing like the one served by the remote data set.
fn sample_listing() -> Vec<pfoteneis::types::location::RawLocation> {
    use pfoteneis::types::location::{Coordinates, RawFlavor, RawIcon, RawLocation};

    vec![
        RawLocation {
            id: "berlin-luna".to_string(),
            name: "Eiscafé Luna".to_string(),
            address: "Hauptstraße 1, 10115 Berlin".to_string(),
            coordinates: Coordinates { lat: 52.5323, lng: 13.3846 },
            brands: vec!["Hundeeis GmbH".to_string()],
            flavors: vec![
                RawFlavor {
                    name: "Lachs".to_string(),
                    icon: Some(RawIcon::Name("Fish".to_string())),
                    icon_color: Some("text-orange-500".to_string()),
                },
                RawFlavor {
                    name: "Leberwurst".to_string(),
                    icon: Some(RawIcon::Name("Drumstick".to_string())),
                    icon_color: None,
                },
            ],
            description: "Eisdiele mit schattiger Hundeterrasse.".to_string(),
            image: "https://example.com/luna.jpg".to_string(),
            data_ai_hint: Some("ice cream shop".to_string()),
            opening_hours: "Mo–So 10:00–19:00".to_string(),
            phone: Some("+49 30 1234567".to_string()),
            website: Some("https://eiscafe-luna.example".to_string()),
        },
        RawLocation {
            id: "muenchen-mio".to_string(),
            name: "Gelato Mio".to_string(),
            address: "Marktplatz 3, 80331 München".to_string(),
            coordinates: Coordinates { lat: 48.1372, lng: 11.5755 },
            brands: vec!["PfotenFroh".to_string()],
            flavors: vec![RawFlavor {
                name: "Vanille (hundesicher)".to_string(),
                icon: Some(RawIcon::Name("IceCream".to_string())),
                icon_color: None,
            }],
            description: "Gelateria mit eigener Hundeeis-Theke.".to_string(),
            image: "https://example.com/mio.jpg".to_string(),
            data_ai_hint: None,
            opening_hours: "Di–So 11:00–18:00".to_string(),
            phone: None,
            website: None,
        },
    ]
}

fn demo_icon_registry() {
    use pfoteneis::services::icon_registry::{IconRegistry, IconRegistryTrait};
    section("Icon Registry");

    let icons = IconRegistry::new();
    for name in ["Fish", "Drumstick", "PawPrint", "Bone"] {
        println!("  {} -> {}", name, icons.resolve(name).symbol());
    }

    let unknown = icons.resolve("NoSuchIcon");
    println!("  NoSuchIcon -> {} (default)", unknown.symbol());
    println!("  reverse(Fish handle) = {:?}", icons.reverse_lookup(icons.resolve("Fish")));
    println!("  reverse(default handle) = {:?}", icons.reverse_lookup(icons.default_icon()));
    println!("  ✓ IconRegistry OK");
    println!();
}

fn demo_location_codec() {
    use pfoteneis::services::icon_registry::IconRegistry;
    use pfoteneis::services::location_source::{rehydrate_all, LocationSource, StaticLocationSource};
    section("Location Source + Codec");

    let icons = IconRegistry::new();
    let source = StaticLocationSource::new(sample_listing());
    let raw = source.fetch_locations().unwrap();
    println!("  Fetched {} raw location(s)", raw.len());

    let locations = rehydrate_all(raw, &icons);
    for loc in &locations {
        let flavors: Vec<String> = loc
            .flavors
            .iter()
            .map(|f| format!("{} {}", f.icon.symbol(), f.name))
            .collect();
        println!("  {} — {}", loc.name, flavors.join(", "));
    }

    let round_trip = locations[0].to_raw(&icons);
    println!("  Serialized back: {} flavor(s), icons as names", round_trip.flavors.len());
    println!("  ✓ Location codec OK");
    println!();
}

fn demo_search() {
    use pfoteneis::services::icon_registry::IconRegistry;
    use pfoteneis::services::location_source::rehydrate_all;
    use pfoteneis::services::search;
    section("Search");

    let icons = IconRegistry::new();
    let locations = rehydrate_all(sample_listing(), &icons);

    let hits = search::filter_locations(&locations, "lachs");
    println!("  Filter 'lachs': {} hit(s)", hits.len());

    let cities = search::city_suggestions(&locations);
    let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
    println!("  Cities: {:?}", names);

    let matches = search::matching_cities(&cities, "mü");
    println!("  Suggestions for 'mü': {} match(es)", matches.len());
    println!("  ✓ Search OK");
    println!();
}

fn demo_bookmarks() {
    use std::sync::Arc;
    use pfoteneis::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
    use pfoteneis::services::icon_registry::IconRegistry;
    use pfoteneis::services::location_source::rehydrate_all;
    use pfoteneis::storage::slot::FileSlot;
    section("Bookmark Store");

    let icons = Arc::new(IconRegistry::new());
    let locations = rehydrate_all(sample_listing(), &icons);

    let slot_path = "demo_bookmarks.json";
    let mut store = BookmarkStore::new(Box::new(FileSlot::new(slot_path)), icons.clone());
    store.load();

    store.add(locations[0].clone());
    store.add(locations[1].clone());
    store.add(locations[0].clone()); // duplicate, no-op
    println!("  Added 2 bookmarks (plus 1 duplicate no-op), count = {}", store.list().len());
    println!("  is_bookmarked(berlin-luna) = {}", store.is_bookmarked("berlin-luna"));

    // A second store over the same slot sees the persisted set
    let mut reloaded = BookmarkStore::new(Box::new(FileSlot::new(slot_path)), icons);
    let entries = reloaded.load();
    println!("  Reloaded from disk: {} bookmark(s)", entries.len());
    println!(
        "  First flavor after reload: {} {}",
        entries[0].flavors[0].icon.symbol(),
        entries[0].flavors[0].name
    );

    reloaded.remove("muenchen-mio");
    println!("  Removed 1, remaining = {}", reloaded.list().len());

    let _ = std::fs::remove_file(slot_path);
    println!("  ✓ BookmarkStore OK");
    println!();
}

fn demo_app_core() {
    use pfoteneis::app::App;
    use pfoteneis::managers::bookmark_store::BookmarkStoreTrait;
    section("App Core (full lifecycle)");

    let slot_path = "demo_app_bookmarks.json".to_string();
    let mut app = App::new(Some(slot_path.clone()));
    app.startup();
    println!("  Startup sequence: registry → store → load");
    println!("  Bookmarks after startup: {}", app.bookmarks.list().len());

    #[cfg(feature = "network")]
    println!("  Remote listing source: {}", app.locations.url());

    let _ = std::fs::remove_file(slot_path);
    println!("  ✓ App Core OK");
}
