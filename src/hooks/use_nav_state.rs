use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::types::SectionId;

/// Vertical offset (CSS pixels) beyond which the navbar switches to its
/// scrolled style. Strictly exceeded: an offset of exactly 50 does not count.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// The whole of the page's mutable UI state. Mutated only through the named
/// transition functions below; everything else reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub active_section: SectionId,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            active_section: SectionId::Home,
            menu_open: false,
            scrolled: false,
        }
    }

    /// A navigation entry was clicked. `anchor_found` reports whether the
    /// target section exists in the document; when it does not, the click is
    /// ignored entirely.
    pub fn section_selected(&mut self, section: SectionId, anchor_found: bool) {
        if !anchor_found {
            return;
        }
        self.active_section = section;
        self.menu_open = false;
    }

    /// Flip the mobile menu. Never touches the active section or scroll flag.
    pub fn menu_toggled(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Record the latest viewport scroll offset.
    pub fn scroll_recorded(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD;
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle shared with components through context. Wraps the state record in
/// a signal and pairs each transition with its browser side effect.
#[derive(Clone, Copy)]
pub struct Nav {
    state: Signal<NavState>,
}

pub fn use_nav() -> Nav {
    let state = use_signal(NavState::new);
    Nav { state }
}

impl Nav {
    pub fn active_section(&self) -> SectionId {
        self.state.read().active_section
    }

    pub fn menu_open(&self) -> bool {
        self.state.read().menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.state.read().scrolled
    }

    /// Smooth-scroll to `section` and mark it active. A missing anchor
    /// leaves both the viewport and the state untouched.
    pub fn scroll_to(&mut self, section: SectionId) {
        let anchor_found = dom::scroll_to_anchor(section.anchor_id());
        self.state.write().section_selected(section, anchor_found);
    }

    pub fn toggle_menu(&mut self) {
        self.state.write().menu_toggled();
    }

    pub fn record_scroll(&mut self, offset: f64) {
        self.state.write().scroll_recorded(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert_eq!(state.active_section, SectionId::Home);
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_every_section_activates() {
        for section in SectionId::ALL {
            let mut state = NavState::new();
            state.section_selected(section, true);
            assert_eq!(state.active_section, section);
        }
    }

    #[test]
    fn test_selection_closes_menu() {
        let mut state = NavState::new();
        state.menu_toggled();
        assert!(state.menu_open);

        state.section_selected(SectionId::Projects, true);
        assert!(!state.menu_open);

        // Already-closed menu stays closed.
        state.section_selected(SectionId::Contact, true);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_missing_anchor_is_a_no_op() {
        let mut state = NavState::new();
        state.menu_toggled();

        state.section_selected(SectionId::Contact, false);
        assert_eq!(state.active_section, SectionId::Home);
        assert!(state.menu_open, "ignored click must not close the menu");
    }

    #[test]
    fn test_menu_toggle_round_trips() {
        let mut state = NavState::new();
        state.menu_toggled();
        state.menu_toggled();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        let mut state = NavState::new();
        for (offset, expected) in [(0.0, false), (49.0, false), (50.0, false), (51.0, true)] {
            state.scroll_recorded(offset);
            assert_eq!(state.scrolled, expected, "offset {offset}");
        }
    }

    #[test]
    fn test_scroll_flag_tracks_latest_offset_only() {
        let mut state = NavState::new();
        state.scroll_recorded(400.0);
        assert!(state.scrolled);
        state.scroll_recorded(0.0);
        assert!(!state.scrolled);
    }
}
