//! crates/alumni_connect_core/src/dispatch.rs
//!
//! Maps the current view to the one panel that should be mounted for it.
//! The mapping is an exhaustive match, so totality over the view registry
//! is checked at compile time; the slug-level fallback to the overview
//! panel only covers values arriving from outside the closed set.

use crate::domain::View;
use serde::Serialize;

/// Identifier of a presentational panel. Panels are pure functions of
/// (data, session); this enum only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Hero,
    Overview,
    Directory,
    Events,
    Gallery,
    Stories,
    Assistant,
    Membership,
    Donate,
    Volunteer,
    Profile,
    About,
    Admin,
}

/// Returns the panel to mount for `view`. Pure and total.
pub fn panel_for(view: View) -> PanelId {
    match view {
        View::Landing => PanelId::Hero,
        View::DashboardHome => PanelId::Overview,
        View::Directory => PanelId::Directory,
        View::Events => PanelId::Events,
        View::Gallery => PanelId::Gallery,
        View::Stories => PanelId::Stories,
        View::Assistant => PanelId::Assistant,
        View::Membership => PanelId::Membership,
        View::Donate => PanelId::Donate,
        View::Volunteer => PanelId::Volunteer,
        View::Profile => PanelId::Profile,
        View::About => PanelId::About,
        View::Admin => PanelId::Admin,
    }
}

/// Resolves a wire slug straight to a panel, falling back to the overview
/// panel for anything outside the registry.
pub fn panel_for_slug(slug: &str) -> PanelId {
    View::from_slug(slug).map_or(PanelId::Overview, panel_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_view_has_a_panel() {
        for view in View::ALL {
            // The match in panel_for is exhaustive; this guards the
            // registry table itself against a member missing from ALL.
            let panel = panel_for(*view);
            assert_eq!(panel_for_slug(view.slug()), panel);
        }
    }

    #[test]
    fn distinct_views_map_to_distinct_panels() {
        let mut seen = std::collections::HashSet::new();
        for view in View::ALL {
            assert!(seen.insert(panel_for(*view)), "duplicate panel for {view:?}");
        }
    }

    #[test]
    fn unknown_slugs_fall_back_to_the_overview_panel() {
        assert_eq!(panel_for_slug("trophy_room"), PanelId::Overview);
        assert_eq!(panel_for_slug(""), PanelId::Overview);
    }

    #[test]
    fn slugs_round_trip_through_the_registry() {
        for view in View::ALL {
            assert_eq!(View::from_slug(view.slug()), Some(*view));
        }
        assert_eq!(View::from_slug("admin_login"), None);
    }
}
