//! UI Sections
//!
//! The fixed set of top-level view panels. Exactly one section is active at a
//! time; which one is the only piece of cross-feature UI state.

/// Top-level view panels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Restaurants,
    Search,
    Reviews,
    Register,
}

impl Section {
    /// Display order of the navigation controls
    pub const ALL: [Section; 4] = [
        Section::Restaurants,
        Section::Search,
        Section::Reviews,
        Section::Register,
    ];

    /// Label shown on the nav control
    pub fn label(self) -> &'static str {
        match self {
            Section::Restaurants => "Restaurants",
            Section::Search => "Search & Filter",
            Section::Reviews => "Add Review",
            Section::Register => "Register",
        }
    }

    /// Element id of the section panel
    pub fn dom_id(self) -> &'static str {
        match self {
            Section::Restaurants => "restaurants",
            Section::Search => "search",
            Section::Reviews => "reviews",
            Section::Register => "register",
        }
    }
}

/// Class string for a section panel given the currently active section
pub fn panel_class(active: Section, panel: Section) -> &'static str {
    if active == panel {
        "section active"
    } else {
        "section"
    }
}

/// Class string for a nav control given the currently active section
pub fn nav_class(active: Section, control: Section) -> &'static str {
    if active == control {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_are_unique() {
        for a in Section::ALL {
            for b in Section::ALL {
                if a != b {
                    assert_ne!(a.dom_id(), b.dom_id());
                }
            }
        }
    }

    #[test]
    fn exactly_one_panel_active_after_transition() {
        // Restaurants is active, then Search is activated
        let active = Section::Search;
        let active_panels: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|&panel| panel_class(active, panel) == "section active")
            .collect();
        assert_eq!(active_panels, vec![Section::Search]);
    }

    #[test]
    fn nav_control_tracks_active_section() {
        let active = Section::Register;
        for control in Section::ALL {
            let expected = if control == active {
                "nav-btn active"
            } else {
                "nav-btn"
            };
            assert_eq!(nav_class(active, control), expected);
        }
    }
}
