//! services/api/src/web/panels.rs
//!
//! Builds the serializable view-model payload for each panel. Every builder
//! is a pure function of (content store, session); panels hold no state of
//! their own.

use crate::web::state::AppState;
use alumni_connect_core::dispatch::{panel_for, PanelId};
use alumni_connect_core::domain::{
    AlumniProfile, DonationCause, EventItem, GalleryItem, MembershipTier, Profile, Session, Story,
    View, VolunteerRole,
};
use alumni_connect_core::ports::PortResult;
use serde::Serialize;

/// The payload mounted for one panel, tagged with the panel identifier.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum PanelPayload {
    Hero {
        headline: String,
        tagline: String,
        member_count: usize,
    },
    Overview {
        welcome: String,
        member_count: usize,
        upcoming_events: Vec<EventItem>,
        latest_stories: Vec<Story>,
    },
    Directory {
        alumni: Vec<AlumniProfile>,
    },
    Events {
        events: Vec<EventItem>,
    },
    Gallery {
        items: Vec<GalleryItem>,
    },
    Stories {
        stories: Vec<Story>,
    },
    Assistant {
        intro: String,
        offline: bool,
    },
    Membership {
        tiers: Vec<MembershipTier>,
    },
    Donate {
        causes: Vec<DonationCause>,
    },
    Volunteer {
        roles: Vec<VolunteerRole>,
    },
    Profile {
        profile: Profile,
    },
    About {
        mission: String,
        founded_year: i32,
        chapters: Vec<String>,
    },
    Admin {
        member_count: usize,
        event_count: usize,
        story_count: usize,
        pending_connects: usize,
    },
}

/// Assembles the payload for the panel that `view` dispatches to.
pub async fn build_panel(
    state: &AppState,
    session: &Session,
    view: View,
) -> PortResult<PanelPayload> {
    build_for_panel(state, session, panel_for(view)).await
}

/// Assembles the payload for a panel directly, used by the REST surface
/// after slug resolution (which already applied the overview fallback).
pub async fn build_for_panel(
    state: &AppState,
    session: &Session,
    panel: PanelId,
) -> PortResult<PanelPayload> {
    let content = &state.content;
    let payload = match panel {
        PanelId::Hero => PanelPayload::Hero {
            headline: "Welcome back to Greenfield High".to_string(),
            tagline: "Reconnect with classmates, relive memories, give back.".to_string(),
            member_count: content.list_alumni().await?.len(),
        },
        PanelId::Overview => {
            let events = content.list_events().await?;
            let stories = content.list_stories().await?;
            PanelPayload::Overview {
                welcome: format!("Welcome back, {}!", session.current_user.name),
                member_count: content.list_alumni().await?.len(),
                upcoming_events: events.into_iter().take(3).collect(),
                latest_stories: stories.into_iter().take(2).collect(),
            }
        }
        PanelId::Directory => PanelPayload::Directory {
            alumni: content.list_alumni().await?,
        },
        PanelId::Events => PanelPayload::Events {
            events: content.list_events().await?,
        },
        PanelId::Gallery => PanelPayload::Gallery {
            items: content.list_gallery().await?,
        },
        PanelId::Stories => PanelPayload::Stories {
            stories: content.list_stories().await?,
        },
        PanelId::Assistant => PanelPayload::Assistant {
            intro: "Pick a classmate and I'll help you draft a message to reconnect."
                .to_string(),
            offline: state.config.openai_api_key.is_none(),
        },
        PanelId::Membership => PanelPayload::Membership {
            tiers: content.membership_tiers().await?,
        },
        PanelId::Donate => PanelPayload::Donate {
            causes: content.donation_causes().await?,
        },
        PanelId::Volunteer => PanelPayload::Volunteer {
            roles: content.volunteer_roles().await?,
        },
        PanelId::Profile => PanelPayload::Profile {
            profile: session.current_user.clone(),
        },
        PanelId::About => PanelPayload::About {
            mission: "Keeping the Greenfield High family connected across batches and borders."
                .to_string(),
            founded_year: 1962,
            chapters: vec![
                "Mumbai".to_string(),
                "Bengaluru".to_string(),
                "Singapore".to_string(),
                "Toronto".to_string(),
            ],
        },
        PanelId::Admin => {
            let alumni = content.list_alumni().await?;
            PanelPayload::Admin {
                member_count: alumni.len(),
                event_count: content.list_events().await?.len(),
                story_count: content.list_stories().await?.len(),
                pending_connects: alumni.iter().filter(|a| !a.connected).count(),
            }
        }
    };
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{DisabledDraftAdapter, InMemoryContentStore};
    use crate::config::Config;
    use std::sync::Arc;
    use tracing::Level;

    fn test_state(api_key: Option<&str>) -> AppState {
        AppState {
            content: Arc::new(InMemoryContentStore::seeded()),
            drafts: Arc::new(DisabledDraftAdapter::new("offline".to_string())),
            config: Arc::new(Config {
                bind_address: "127.0.0.1:0".parse().unwrap(),
                log_level: Level::INFO,
                openai_api_key: api_key.map(str::to_string),
                draft_model: "gpt-4o-mini".to_string(),
                offline_message: "offline".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn every_view_builds_a_panel_payload() {
        let state = test_state(None);
        let session = Session::guest();
        for view in View::ALL {
            build_panel(&state, &session, *view)
                .await
                .unwrap_or_else(|e| panic!("no payload for {view:?}: {e}"));
        }
    }

    #[tokio::test]
    async fn overview_greets_the_current_user() {
        let state = test_state(None);
        let mut session = Session::guest();
        session.current_user.name = "Priya".to_string();
        let payload = build_panel(&state, &session, View::DashboardHome)
            .await
            .unwrap();
        match payload {
            PanelPayload::Overview {
                welcome,
                upcoming_events,
                latest_stories,
                ..
            } => {
                assert!(welcome.contains("Priya"));
                assert!(upcoming_events.len() <= 3);
                assert!(latest_stories.len() <= 2);
            }
            other => panic!("expected overview payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn assistant_panel_reports_offline_without_a_credential() {
        let state = test_state(None);
        let session = Session::guest();
        match build_panel(&state, &session, View::Assistant).await.unwrap() {
            PanelPayload::Assistant { offline, .. } => assert!(offline),
            other => panic!("expected assistant payload, got {other:?}"),
        }

        let state = test_state(Some("sk-test"));
        match build_panel(&state, &session, View::Assistant).await.unwrap() {
            PanelPayload::Assistant { offline, .. } => assert!(!offline),
            other => panic!("expected assistant payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn a_logged_out_guest_navigating_to_the_directory_mounts_it() {
        use alumni_connect_core::domain::NavTarget;
        use alumni_connect_core::navigation::Navigator;

        let state = test_state(None);
        let mut nav = Navigator::new();
        nav.navigate(NavTarget::View(View::Directory));

        let session = nav.session();
        assert!(session.logged_in);
        assert!(!session.admin);

        let payload = build_panel(&state, session, session.current_view)
            .await
            .unwrap();
        match payload {
            PanelPayload::Directory { alumni } => assert!(!alumni.is_empty()),
            other => panic!("expected directory payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn admin_panel_counts_the_seeded_content() {
        let state = test_state(None);
        match build_panel(&state, &Session::guest(), View::Admin)
            .await
            .unwrap()
        {
            PanelPayload::Admin {
                member_count,
                event_count,
                story_count,
                ..
            } => {
                assert!(member_count > 0);
                assert!(event_count > 0);
                assert!(story_count > 0);
            }
            other => panic!("expected admin payload, got {other:?}"),
        }
    }
}
