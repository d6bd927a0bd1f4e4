//! ML engineer portfolio - a single-page Dioxus web app.
//!
//! The page is static content (projects, skills, work history) plus a small
//! amount of navigation state: which section is active, whether the mobile
//! menu is open, and whether the viewport has been scrolled. All state lives
//! in [`hooks::use_nav_state::NavState`] and is mutated only through its
//! named transition functions.

pub mod components;
pub mod content;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod types;
