//! Icon registry — resolves icon names to renderable handles.
//!
//! The registry owns the static glyph set and the two lookup directions the
//! bookmark codec needs: name → handle (never fails, falls back to the
//! default) and handle → name (may miss). It also carries the flavor-name
//! table used by the older persisted encoding.

use std::collections::HashMap;

use crate::types::icon::{IconGlyph, IconHandle};

// Built-in glyph set, one per registered icon name.
static DRUMSTICK: IconGlyph = IconGlyph::new("🍗");
static BANANA: IconGlyph = IconGlyph::new("🍌");
static FISH: IconGlyph = IconGlyph::new("🐟");
static BEEF: IconGlyph = IconGlyph::new("🥩");
static CARROT: IconGlyph = IconGlyph::new("🥕");
static GRAPE: IconGlyph = IconGlyph::new("🍇");
static BIRD: IconGlyph = IconGlyph::new("🐦");
static MILK: IconGlyph = IconGlyph::new("🥛");
static ICE_CREAM: IconGlyph = IconGlyph::new("🍨");
static LEAF: IconGlyph = IconGlyph::new("🍃");
static UTENSILS: IconGlyph = IconGlyph::new("🍴");
static PAW_PRINT: IconGlyph = IconGlyph::new("🐾");
static BONE: IconGlyph = IconGlyph::new("🦴");
static APPLE: IconGlyph = IconGlyph::new("🍎");

/// Fallback glyph for unknown icon names. Not bound to a name in the
/// registry table, so a defaulted flavor does not reverse-look-up as some
/// other icon.
static DEFAULT_ICON: IconGlyph = IconGlyph::new("🍦");

/// Visibly-broken marker backing [`UnresolvedIconPolicy::UnknownMarker`].
static UNKNOWN_MARKER: IconGlyph = IconGlyph::new("❓");

/// Token written in place of an icon name when the reverse lookup fails
/// during serialization.
pub const UNRESOLVED_ICON_NAME: &str = "__unresolved__";

/// How [`UNRESOLVED_ICON_NAME`] decodes on a later load.
///
/// The persisted data cannot distinguish a flavor that legitimately carried
/// the default icon from one whose handle had no registry entry at save
/// time. `DefaultIcon` treats the token like any unknown name;
/// `UnknownMarker` surfaces it as a visibly distinct glyph.
pub const UNRESOLVED_ICON_POLICY: UnresolvedIconPolicy = UnresolvedIconPolicy::DefaultIcon;

/// Decode behavior for the unresolved-icon token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedIconPolicy {
    /// The token resolves to the registry default, like any unknown name.
    DefaultIcon,
    /// The token resolves to a visibly "unknown" marker glyph.
    UnknownMarker,
}

/// Trait defining the icon registry interface.
pub trait IconRegistryTrait {
    fn resolve(&self, name: &str) -> IconHandle;
    fn reverse_lookup(&self, handle: IconHandle) -> Option<&'static str>;
    fn legacy_flavor_icon(&self, flavor_name: &str) -> Option<IconHandle>;
    fn default_icon(&self) -> IconHandle;
    fn unknown_marker(&self) -> IconHandle;
}

/// Icon registry backed by the built-in static glyph set.
pub struct IconRegistry {
    by_name: HashMap<&'static str, IconHandle>,
    by_flavor_name: HashMap<&'static str, IconHandle>,
}

impl IconRegistry {
    /// Creates a registry with the built-in icon set.
    pub fn new() -> Self {
        let by_name = HashMap::from([
            ("Drumstick", IconHandle::new(&DRUMSTICK)),
            ("Banana", IconHandle::new(&BANANA)),
            ("Fish", IconHandle::new(&FISH)),
            ("Beef", IconHandle::new(&BEEF)),
            ("Carrot", IconHandle::new(&CARROT)),
            ("Grape", IconHandle::new(&GRAPE)),
            ("Bird", IconHandle::new(&BIRD)),
            ("Milk", IconHandle::new(&MILK)),
            ("IceCream", IconHandle::new(&ICE_CREAM)),
            ("Leaf", IconHandle::new(&LEAF)),
            ("Utensils", IconHandle::new(&UTENSILS)),
            ("PawPrint", IconHandle::new(&PAW_PRINT)),
            ("Bone", IconHandle::new(&BONE)),
            ("Apple", IconHandle::new(&APPLE)),
        ]);

        // Flavor-name table from the older persisted encoding, which keyed
        // icons by flavor name instead of icon name.
        let by_flavor_name = HashMap::from([
            ("Leberwurst", IconHandle::new(&DRUMSTICK)),
            ("Banane-Erdnuss", IconHandle::new(&BANANA)),
            ("Lachs", IconHandle::new(&FISH)),
            ("Rindfleisch", IconHandle::new(&BEEF)),
            ("Karotte-Apfel", IconHandle::new(&CARROT)),
            ("Joghurt-Beere", IconHandle::new(&GRAPE)),
            ("Hühnchen", IconHandle::new(&BIRD)),
            ("Erdbeer-Joghurt", IconHandle::new(&MILK)),
            ("Vanille (hundesicher)", IconHandle::new(&ICE_CREAM)),
            ("Thunfisch", IconHandle::new(&FISH)),
            ("Kokos-Ananas (Xylit-frei)", IconHandle::new(&LEAF)),
            ("Lebertran-Boost", IconHandle::new(&UTENSILS)),
        ]);

        Self {
            by_name,
            by_flavor_name,
        }
    }

    /// Like [`resolve`](IconRegistryTrait::resolve), with an explicit decode
    /// policy for the unresolved-icon token.
    pub fn resolve_with_policy(&self, name: &str, policy: UnresolvedIconPolicy) -> IconHandle {
        if name == UNRESOLVED_ICON_NAME {
            return match policy {
                UnresolvedIconPolicy::DefaultIcon => self.default_icon(),
                UnresolvedIconPolicy::UnknownMarker => self.unknown_marker(),
            };
        }
        self.by_name
            .get(name)
            .copied()
            .unwrap_or_else(|| self.default_icon())
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRegistryTrait for IconRegistry {
    /// Resolves an icon name. Unknown names fall back to the default handle.
    fn resolve(&self, name: &str) -> IconHandle {
        self.resolve_with_policy(name, UNRESOLVED_ICON_POLICY)
    }

    /// Finds the canonical name for a handle, if it has one.
    fn reverse_lookup(&self, handle: IconHandle) -> Option<&'static str> {
        self.by_name
            .iter()
            .find(|(_, candidate)| **candidate == handle)
            .map(|(name, _)| *name)
    }

    /// Looks up a flavor name in the legacy table.
    fn legacy_flavor_icon(&self, flavor_name: &str) -> Option<IconHandle> {
        self.by_flavor_name.get(flavor_name).copied()
    }

    /// The fallback handle assigned to unknown icon names.
    fn default_icon(&self) -> IconHandle {
        IconHandle::new(&DEFAULT_ICON)
    }

    /// The marker handle backing [`UnresolvedIconPolicy::UnknownMarker`].
    fn unknown_marker(&self) -> IconHandle {
        IconHandle::new(&UNKNOWN_MARKER)
    }
}
