pub mod use_nav_state;
pub mod use_scroll_listener;

pub use use_nav_state::{use_nav, Nav, NavState, SCROLL_THRESHOLD};
pub use use_scroll_listener::use_scroll_listener;
