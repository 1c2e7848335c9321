//! State management modules for the CliffVibe app.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (preference, OS theme, palettes)
//! - Router state (current page)
//! - Map page state (map view and its two-phase mount)

mod theme_state;
mod router_state;
mod map_state;

pub use theme_state::ThemeState;
pub use router_state::{Route, RouterState};
pub use map_state::{MapPageState, MAP_SURFACE_ID};
