/// Card colors for known template categories, keyed by category slug.
const CATEGORY_COLORS: &[(&str, &str)] = &[
  ("compliance", "#2563eb"),
  ("finance", "#059669"),
  ("it-security", "#dc2626"),
  ("operations", "#d97706"),
  ("quality", "#7c3aed"),
];

/// Neutral color for categories without a dedicated entry.
pub const DEFAULT_CATEGORY_COLOR: &str = "#64748b";

/// Look up the display color for a category slug.
pub fn category_color(category: &str) -> &'static str {
  CATEGORY_COLORS
    .iter()
    .find(|(slug, _)| *slug == category)
    .map(|(_, color)| *color)
    .unwrap_or(DEFAULT_CATEGORY_COLOR)
}
