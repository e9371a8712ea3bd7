//! Presentation bounds for the engine's data products.

use binomia_integers::MAX_ORDER;

/// Bounds used when preparing data for presentation layers.
///
/// The core operations take no configuration. These limits only shape the
/// triangle view and the coefficient surface, and give callers one place
/// to clamp user input before expanding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EngineLimits {
    /// Deepest row the triangle view shows.
    pub triangle_display_cap: usize,
    /// Grid order of the coefficient surface.
    pub surface_order: usize,
    /// Deepest row that gets a coefficient label on the surface.
    pub label_order: usize,
    /// Largest order accepted from user input.
    pub max_order: i64,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            triangle_display_cap: 10,
            surface_order: 12,
            label_order: 8,
            max_order: MAX_ORDER,
        }
    }
}

impl EngineLimits {
    /// Clamps a requested order into `0..=max_order`, never above
    /// [`MAX_ORDER`].
    #[must_use]
    pub fn clamp_order(&self, n: i64) -> i64 {
        n.max(0).min(self.max_order.clamp(0, MAX_ORDER))
    }
}
