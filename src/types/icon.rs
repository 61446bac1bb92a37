use std::fmt;

/// A renderable glyph backing an icon handle.
///
/// Glyphs are only ever constructed as `static` items by the icon registry.
pub struct IconGlyph {
    symbol: &'static str,
}

impl IconGlyph {
    /// Creates a glyph with the given display symbol.
    pub const fn new(symbol: &'static str) -> Self {
        Self { symbol }
    }
}

/// Opaque handle to a renderable glyph.
///
/// Handles are cheap to copy and compared by identity: two handles are equal
/// exactly when they reference the same registered glyph. A handle has no
/// serialized representation; persistence goes through the icon name instead.
#[derive(Clone, Copy)]
pub struct IconHandle(&'static IconGlyph);

impl IconHandle {
    /// Wraps a static glyph. Only the icon registry creates handles.
    pub(crate) const fn new(glyph: &'static IconGlyph) -> Self {
        Self(glyph)
    }

    /// Returns the display symbol of the underlying glyph.
    pub fn symbol(&self) -> &'static str {
        self.0.symbol
    }
}

impl PartialEq for IconHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for IconHandle {}

impl fmt::Debug for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IconHandle").field(&self.0.symbol).finish()
    }
}
