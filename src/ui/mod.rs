//! UI panel rendering subsystem
//!
//! - Navbar (brand and page links, hidden on the login page)
//! - Home page (hero, call to action, theme toggle)
//! - Map page (full-page map)
//! - Login page (placeholder)
//! - Theme toggle button
//! - Panel manager (page orchestration and layout)

pub mod navbar;
pub mod home_page;
pub mod map_page;
pub mod login_page;
pub mod theme_toggle;
pub mod panel_manager;
