//! crates/alumni_connect_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format
//! beyond the serde derives the wire payloads need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// View Registry
//=========================================================================================

/// Every screen the application can display. The set is closed and known at
/// build time; exactly one view is current per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Landing,
    DashboardHome,
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

impl View {
    /// All views, for registry iteration and totality checks.
    pub const ALL: &'static [View] = &[
        View::Landing,
        View::DashboardHome,
        View::Directory,
        View::Events,
        View::Gallery,
        View::Stories,
        View::Assistant,
        View::Membership,
        View::Donate,
        View::Volunteer,
        View::Profile,
        View::About,
        View::Admin,
    ];

    /// The stable wire identifier for this view.
    pub fn slug(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::DashboardHome => "dashboard_home",
            View::Directory => "directory",
            View::Events => "events",
            View::Gallery => "gallery",
            View::Stories => "stories",
            View::Assistant => "assistant",
            View::Membership => "membership",
            View::Donate => "donate",
            View::Volunteer => "volunteer",
            View::Profile => "profile",
            View::About => "about",
            View::Admin => "admin",
        }
    }

    /// Resolves a wire slug back to a view. Unknown slugs return `None`;
    /// the caller decides the fallback (the dispatcher documents it).
    pub fn from_slug(slug: &str) -> Option<View> {
        View::ALL.iter().copied().find(|v| v.slug() == slug)
    }

    /// The human-readable name shown in navigation chrome.
    pub fn label(&self) -> &'static str {
        match self {
            View::Landing => "Welcome",
            View::DashboardHome => "Home",
            View::Directory => "Directory",
            View::Events => "Events",
            View::Gallery => "Gallery",
            View::Stories => "Stories",
            View::Assistant => "AI Assistant",
            View::Membership => "Membership",
            View::Donate => "Donate",
            View::Volunteer => "Volunteer",
            View::Profile => "My Profile",
            View::About => "About",
            View::Admin => "Admin",
        }
    }
}

/// A navigation request: either a view to mount, or the distinguished
/// admin-login action, which is not itself a mountable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    AdminLogin,
    View(View),
}

impl NavTarget {
    pub const ADMIN_LOGIN_SLUG: &'static str = "admin_login";

    /// Resolves a wire slug. Unknown slugs return `None`.
    pub fn from_slug(slug: &str) -> Option<NavTarget> {
        if slug == Self::ADMIN_LOGIN_SLUG {
            Some(NavTarget::AdminLogin)
        } else {
            View::from_slug(slug).map(NavTarget::View)
        }
    }
}

//=========================================================================================
// Session and Profile
//=========================================================================================

/// The transient login/role/view state of one connected client.
/// Invariant: `admin` implies `logged_in`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub logged_in: bool,
    pub admin: bool,
    pub current_view: View,
    pub current_user: Profile,
}

impl Session {
    /// The logged-out default every connection starts from and `logout`
    /// resets to.
    pub fn guest() -> Self {
        Self {
            logged_in: false,
            admin: false,
            current_view: View::Landing,
            current_user: Profile::guest(),
        }
    }
}

/// The profile owned by a session. Replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub batch_year: i32,
    pub location: String,
    pub profession: String,
    pub avatar_url: String,
}

impl Profile {
    /// Placeholder profile for a session that has not set one.
    pub fn guest() -> Self {
        Self {
            id: Uuid::nil(),
            name: "Guest".to_string(),
            batch_year: 2000,
            location: String::new(),
            profession: String::new(),
            avatar_url: String::new(),
        }
    }
}

//=========================================================================================
// Community Content
//=========================================================================================

/// A directory entry for a fellow alum. `connected` tracks the simulated
/// connect-request state for the current process only.
#[derive(Debug, Clone, Serialize)]
pub struct AlumniProfile {
    pub id: Uuid,
    pub name: String,
    pub batch_year: i32,
    pub location: String,
    pub profession: String,
    pub avatar_url: String,
    pub connected: bool,
}

/// An association event shown on the events panel.
#[derive(Debug, Clone, Serialize)]
pub struct EventItem {
    pub id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub description: String,
    pub rsvp_count: u32,
}

/// One photo in the memories gallery.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub image_url: String,
}

/// A member-submitted story with its simulated engagement counters.
#[derive(Debug, Clone, Serialize)]
pub struct Story {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub body: String,
    pub likes: u32,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
}

/// A membership tier row for the membership panel.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipTier {
    pub name: String,
    pub annual_fee: u32,
    pub perks: Vec<String>,
}

/// A fundraising cause row for the donation panel.
#[derive(Debug, Clone, Serialize)]
pub struct DonationCause {
    pub name: String,
    pub description: String,
    pub goal: u32,
    pub raised: u32,
}

/// A volunteer opening row for the volunteer panel.
#[derive(Debug, Clone, Serialize)]
pub struct VolunteerRole {
    pub title: String,
    pub commitment: String,
    pub description: String,
}
