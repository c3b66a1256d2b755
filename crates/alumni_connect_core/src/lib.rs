pub mod dispatch;
pub mod domain;
pub mod navigation;
pub mod ports;

pub use dispatch::{panel_for, panel_for_slug, PanelId};
pub use domain::{
    AlumniProfile, Comment, DonationCause, EventItem, GalleryItem, MembershipTier, NavTarget,
    Profile, Session, Story, View, VolunteerRole,
};
pub use navigation::{Navigator, ProfileError};
pub use ports::{ContentStore, MessageDraftService, PortError, PortResult};
