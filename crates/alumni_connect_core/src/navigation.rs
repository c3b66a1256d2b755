//! crates/alumni_connect_core/src/navigation.rs
//!
//! The navigation controller: a single owned mutator over the session that
//! every entry point (login, admin login, logout, navigate, profile update)
//! goes through. Pure and synchronous; no I/O.

use crate::domain::{NavTarget, Profile, Session, View};

/// Batch years accepted by profile validation.
const BATCH_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// Error surfaced when a profile update fails validation. The session is
/// left untouched in that case.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile name must not be empty")]
    EmptyName,
    #[error("Batch year {0} is out of range")]
    BatchYearOutOfRange(i32),
}

/// Owns the session state for one connected client and exposes the only
/// operations allowed to mutate it.
#[derive(Debug, Clone)]
pub struct Navigator {
    session: Session,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts from the logged-out guest default on the landing view.
    pub fn new() -> Self {
        Self {
            session: Session::guest(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Moves the session to `target`.
    ///
    /// The distinguished admin-login target performs the full admin
    /// transition regardless of prior state. Any other navigation while
    /// logged out silently logs the session in as a guest first; there is
    /// no credential check anywhere in this flow.
    pub fn navigate(&mut self, target: NavTarget) {
        match target {
            NavTarget::AdminLogin => self.admin_login(),
            NavTarget::View(view) => {
                if !self.session.logged_in {
                    self.session.logged_in = true;
                    self.session.admin = false;
                }
                self.session.current_view = view;
            }
        }
    }

    /// Member login: lands on the dashboard home view.
    pub fn login(&mut self) {
        self.session.logged_in = true;
        self.session.admin = false;
        self.session.current_view = View::DashboardHome;
    }

    /// Admin login: lands on the admin view.
    pub fn admin_login(&mut self) {
        self.session.logged_in = true;
        self.session.admin = true;
        self.session.current_view = View::Admin;
    }

    /// Resets the session to the logged-out default on the landing view.
    /// The profile is reset along with the rest of the session.
    pub fn logout(&mut self) {
        self.session = Session::guest();
    }

    /// Replaces the current profile wholesale after validation. On a
    /// validation failure the session is unchanged and the error is
    /// returned to the caller.
    pub fn update_profile(&mut self, profile: Profile) -> Result<(), ProfileError> {
        validate_profile(&profile)?;
        self.session.current_user = profile;
        Ok(())
    }
}

fn validate_profile(profile: &Profile) -> Result<(), ProfileError> {
    if profile.name.trim().is_empty() {
        return Err(ProfileError::EmptyName);
    }
    if !BATCH_YEAR_RANGE.contains(&profile.batch_year) {
        return Err(ProfileError::BatchYearOutOfRange(profile.batch_year));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: "Priya Sharma".to_string(),
            batch_year: 2012,
            location: "Bengaluru".to_string(),
            profession: "Architect".to_string(),
            avatar_url: "https://example.org/avatars/priya.png".to_string(),
        }
    }

    #[test]
    fn starts_as_logged_out_guest_on_landing() {
        let nav = Navigator::new();
        let session = nav.session();
        assert!(!session.logged_in);
        assert!(!session.admin);
        assert_eq!(session.current_view, View::Landing);
    }

    #[test]
    fn navigate_while_logged_out_performs_implicit_guest_login() {
        let mut nav = Navigator::new();
        nav.navigate(NavTarget::View(View::Directory));
        let session = nav.session();
        assert!(session.logged_in);
        assert!(!session.admin);
        assert_eq!(session.current_view, View::Directory);
    }

    #[test]
    fn navigate_while_logged_in_only_changes_the_view() {
        let mut nav = Navigator::new();
        nav.login();
        nav.navigate(NavTarget::View(View::Gallery));
        let session = nav.session();
        assert!(session.logged_in);
        assert!(!session.admin);
        assert_eq!(session.current_view, View::Gallery);
    }

    #[test]
    fn admin_login_target_overrides_any_prior_state() {
        for setup in [
            Navigator::new(),
            {
                let mut nav = Navigator::new();
                nav.login();
                nav
            },
            {
                let mut nav = Navigator::new();
                nav.navigate(NavTarget::View(View::Stories));
                nav
            },
        ] {
            let mut nav = setup;
            nav.navigate(NavTarget::AdminLogin);
            let session = nav.session();
            assert!(session.logged_in);
            assert!(session.admin);
            assert_eq!(session.current_view, View::Admin);
        }
    }

    #[test]
    fn login_lands_on_dashboard_home() {
        let mut nav = Navigator::new();
        nav.login();
        assert_eq!(nav.session().current_view, View::DashboardHome);
        assert!(nav.session().logged_in);
        assert!(!nav.session().admin);
    }

    #[test]
    fn logout_always_resets_to_the_guest_default() {
        let mut nav = Navigator::new();
        nav.admin_login();
        nav.update_profile(sample_profile()).unwrap();
        nav.logout();
        assert_eq!(*nav.session(), Session::guest());
    }

    #[test]
    fn admin_implies_logged_in_across_all_operations() {
        let mut nav = Navigator::new();
        let ops: Vec<Box<dyn Fn(&mut Navigator)>> = vec![
            Box::new(|n| n.login()),
            Box::new(|n| n.admin_login()),
            Box::new(|n| n.navigate(NavTarget::View(View::Donate))),
            Box::new(|n| n.navigate(NavTarget::AdminLogin)),
            Box::new(|n| n.logout()),
        ];
        for op in ops {
            op(&mut nav);
            let session = nav.session();
            assert!(!session.admin || session.logged_in);
        }
    }

    #[test]
    fn update_profile_replaces_the_current_user() {
        let mut nav = Navigator::new();
        nav.login();
        let profile = sample_profile();
        nav.update_profile(profile.clone()).unwrap();
        assert_eq!(nav.session().current_user, profile);
    }

    #[test]
    fn update_profile_rejects_empty_names_without_mutating() {
        let mut nav = Navigator::new();
        nav.login();
        let before = nav.session().clone();
        let mut profile = sample_profile();
        profile.name = "   ".to_string();
        assert_eq!(nav.update_profile(profile), Err(ProfileError::EmptyName));
        assert_eq!(*nav.session(), before);
    }

    #[test]
    fn update_profile_rejects_out_of_range_batch_years() {
        let mut nav = Navigator::new();
        let mut profile = sample_profile();
        profile.batch_year = 1776;
        assert_eq!(
            nav.update_profile(profile),
            Err(ProfileError::BatchYearOutOfRange(1776))
        );
    }
}
