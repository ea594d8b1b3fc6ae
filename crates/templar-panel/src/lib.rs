//! Templar Panel
//!
//! Client-side state for the assistant panel: whether it is open, and which
//! page referred the user into it. The state struct is owned by the
//! embedding shell and mutated from a single UI thread; it is not a global.
//!
//! Also here: the category color table used when rendering template cards.

mod state;
mod theme;

pub use state::PanelState;
pub use theme::{category_color, DEFAULT_CATEGORY_COLOR};
