//! services/api/src/adapters/store.rs
//!
//! This module contains the content store adapter, the concrete implementation
//! of the `ContentStore` port from the `core` crate. All content is transient,
//! seeded at startup, and lives for exactly one process run.

use alumni_connect_core::domain::{
    AlumniProfile, Comment, DonationCause, EventItem, GalleryItem, MembershipTier, Story,
    VolunteerRole,
};
use alumni_connect_core::ports::{ContentStore, PortError, PortResult};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An in-memory adapter that implements the `ContentStore` port.
pub struct InMemoryContentStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    alumni: Vec<AlumniProfile>,
    events: Vec<EventItem>,
    gallery: Vec<GalleryItem>,
    stories: Vec<Story>,
    tiers: Vec<MembershipTier>,
    causes: Vec<DonationCause>,
    roles: Vec<VolunteerRole>,
}

impl InMemoryContentStore {
    /// Creates a store populated with the association's seed content.
    pub fn seeded() -> Self {
        Self {
            inner: RwLock::new(StoreInner::seed()),
        }
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::seeded()
    }
}

//=========================================================================================
// `ContentStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn list_alumni(&self) -> PortResult<Vec<AlumniProfile>> {
        Ok(self.inner.read().await.alumni.clone())
    }

    async fn get_alumni(&self, alumni_id: Uuid) -> PortResult<AlumniProfile> {
        self.inner
            .read()
            .await
            .alumni
            .iter()
            .find(|a| a.id == alumni_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("alumni {alumni_id}")))
    }

    async fn request_connection(&self, alumni_id: Uuid) -> PortResult<AlumniProfile> {
        let mut inner = self.inner.write().await;
        let alum = inner
            .alumni
            .iter_mut()
            .find(|a| a.id == alumni_id)
            .ok_or_else(|| PortError::NotFound(format!("alumni {alumni_id}")))?;
        alum.connected = true;
        Ok(alum.clone())
    }

    async fn list_events(&self) -> PortResult<Vec<EventItem>> {
        Ok(self.inner.read().await.events.clone())
    }

    async fn list_gallery(&self) -> PortResult<Vec<GalleryItem>> {
        Ok(self.inner.read().await.gallery.clone())
    }

    async fn list_stories(&self) -> PortResult<Vec<Story>> {
        Ok(self.inner.read().await.stories.clone())
    }

    async fn like_story(&self, story_id: Uuid) -> PortResult<Story> {
        let mut inner = self.inner.write().await;
        let story = inner
            .stories
            .iter_mut()
            .find(|s| s.id == story_id)
            .ok_or_else(|| PortError::NotFound(format!("story {story_id}")))?;
        story.likes += 1;
        Ok(story.clone())
    }

    async fn comment_on_story(
        &self,
        story_id: Uuid,
        author: &str,
        text: &str,
    ) -> PortResult<Story> {
        let mut inner = self.inner.write().await;
        let story = inner
            .stories
            .iter_mut()
            .find(|s| s.id == story_id)
            .ok_or_else(|| PortError::NotFound(format!("story {story_id}")))?;
        story.comments.push(Comment {
            author: author.to_string(),
            text: text.to_string(),
        });
        Ok(story.clone())
    }

    async fn membership_tiers(&self) -> PortResult<Vec<MembershipTier>> {
        Ok(self.inner.read().await.tiers.clone())
    }

    async fn donation_causes(&self) -> PortResult<Vec<DonationCause>> {
        Ok(self.inner.read().await.causes.clone())
    }

    async fn volunteer_roles(&self) -> PortResult<Vec<VolunteerRole>> {
        Ok(self.inner.read().await.roles.clone())
    }
}

//=========================================================================================
// Seed Content
//=========================================================================================

impl StoreInner {
    fn seed() -> Self {
        let alumni = vec![
            AlumniProfile {
                id: Uuid::new_v4(),
                name: "Ananya Iyer".to_string(),
                batch_year: 2008,
                location: "Mumbai".to_string(),
                profession: "Pediatrician".to_string(),
                avatar_url: "/avatars/ananya.png".to_string(),
                connected: false,
            },
            AlumniProfile {
                id: Uuid::new_v4(),
                name: "Rahul Menon".to_string(),
                batch_year: 2011,
                location: "Singapore".to_string(),
                profession: "Product Manager".to_string(),
                avatar_url: "/avatars/rahul.png".to_string(),
                connected: false,
            },
            AlumniProfile {
                id: Uuid::new_v4(),
                name: "Sofia D'Souza".to_string(),
                batch_year: 2015,
                location: "Toronto".to_string(),
                profession: "Civil Engineer".to_string(),
                avatar_url: "/avatars/sofia.png".to_string(),
                connected: false,
            },
            AlumniProfile {
                id: Uuid::new_v4(),
                name: "Vikram Bhat".to_string(),
                batch_year: 1999,
                location: "Bengaluru".to_string(),
                profession: "Restaurateur".to_string(),
                avatar_url: "/avatars/vikram.png".to_string(),
                connected: true,
            },
        ];

        let events = vec![
            EventItem {
                id: Uuid::new_v4(),
                title: "Silver Jubilee Reunion".to_string(),
                date: Utc.with_ymd_and_hms(2026, 12, 19, 10, 0, 0).unwrap(),
                location: "Main School Auditorium".to_string(),
                description: "A full-day reunion for all batches with campus tours and a gala dinner."
                    .to_string(),
                rsvp_count: 182,
            },
            EventItem {
                id: Uuid::new_v4(),
                title: "Career Mentorship Evening".to_string(),
                date: Utc.with_ymd_and_hms(2026, 9, 12, 17, 30, 0).unwrap(),
                location: "Online".to_string(),
                description: "Senior alumni host small-group mentoring circles for recent graduates."
                    .to_string(),
                rsvp_count: 64,
            },
            EventItem {
                id: Uuid::new_v4(),
                title: "Annual Charity Cricket Match".to_string(),
                date: Utc.with_ymd_and_hms(2026, 11, 1, 8, 0, 0).unwrap(),
                location: "School Grounds".to_string(),
                description: "Alumni XI vs Staff XI. Proceeds go to the scholarship fund.".to_string(),
                rsvp_count: 97,
            },
        ];

        let gallery = vec![
            GalleryItem {
                id: Uuid::new_v4(),
                title: "Graduation Day".to_string(),
                year: 2008,
                image_url: "/gallery/graduation-2008.jpg".to_string(),
            },
            GalleryItem {
                id: Uuid::new_v4(),
                title: "Sports Day Finals".to_string(),
                year: 2012,
                image_url: "/gallery/sports-2012.jpg".to_string(),
            },
            GalleryItem {
                id: Uuid::new_v4(),
                title: "Science Fair Winners".to_string(),
                year: 2015,
                image_url: "/gallery/science-fair-2015.jpg".to_string(),
            },
            GalleryItem {
                id: Uuid::new_v4(),
                title: "Old Library Wing".to_string(),
                year: 1998,
                image_url: "/gallery/library-1998.jpg".to_string(),
            },
        ];

        let stories = vec![
            Story {
                id: Uuid::new_v4(),
                author: "Ananya Iyer".to_string(),
                title: "From the Biology Lab to the Children's Ward".to_string(),
                body: "Mrs. Fernandes' biology classes are the reason I picked medicine. \
                       Twenty years later I still hear her voice when I explain a diagnosis."
                    .to_string(),
                likes: 42,
                comments: vec![Comment {
                    author: "Rahul Menon".to_string(),
                    text: "She failed my frog diagram twice. Fair, honestly.".to_string(),
                }],
            },
            Story {
                id: Uuid::new_v4(),
                author: "Vikram Bhat".to_string(),
                title: "The Canteen Dosa, Recreated".to_string(),
                body: "I spent three months reverse-engineering the canteen dosa chutney for my \
                       restaurant's menu. It is now our best seller."
                    .to_string(),
                likes: 128,
                comments: vec![],
            },
        ];

        let tiers = vec![
            MembershipTier {
                name: "Annual".to_string(),
                annual_fee: 1000,
                perks: vec![
                    "Directory access".to_string(),
                    "Event invitations".to_string(),
                ],
            },
            MembershipTier {
                name: "Lifetime".to_string(),
                annual_fee: 10000,
                perks: vec![
                    "Directory access".to_string(),
                    "Event invitations".to_string(),
                    "Reunion priority seating".to_string(),
                    "Newsletter byline eligibility".to_string(),
                ],
            },
        ];

        let causes = vec![
            DonationCause {
                name: "Scholarship Fund".to_string(),
                description: "Full tuition support for ten students from low-income families each year."
                    .to_string(),
                goal: 500_000,
                raised: 312_450,
            },
            DonationCause {
                name: "Library Modernization".to_string(),
                description: "Digital catalogue, new reading rooms, and a thousand new titles."
                    .to_string(),
                goal: 250_000,
                raised: 98_200,
            },
        ];

        let roles = vec![
            VolunteerRole {
                title: "Reunion Committee".to_string(),
                commitment: "4 hours/week until December".to_string(),
                description: "Help plan logistics, sponsorships, and the gala program.".to_string(),
            },
            VolunteerRole {
                title: "Mentorship Program".to_string(),
                commitment: "2 hours/month".to_string(),
                description: "Guide a recent graduate through their first career steps.".to_string(),
            },
        ];

        Self {
            alumni,
            events,
            gallery,
            stories,
            tiers,
            causes,
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_request_is_idempotent_and_local() {
        let store = InMemoryContentStore::seeded();
        let first = store.list_alumni().await.unwrap().remove(0);
        assert!(!first.connected);

        let updated = store.request_connection(first.id).await.unwrap();
        assert!(updated.connected);
        let again = store.request_connection(first.id).await.unwrap();
        assert!(again.connected);
    }

    #[tokio::test]
    async fn liking_a_story_increments_its_counter() {
        let store = InMemoryContentStore::seeded();
        let story = store.list_stories().await.unwrap().remove(0);
        let before = story.likes;

        let updated = store.like_story(story.id).await.unwrap();
        assert_eq!(updated.likes, before + 1);
    }

    #[tokio::test]
    async fn commenting_appends_to_the_story() {
        let store = InMemoryContentStore::seeded();
        let story = store.list_stories().await.unwrap().remove(0);
        let before = story.comments.len();

        let updated = store
            .comment_on_story(story.id, "Guest", "Lovely read!")
            .await
            .unwrap();
        assert_eq!(updated.comments.len(), before + 1);
        assert_eq!(updated.comments.last().unwrap().text, "Lovely read!");
    }

    #[tokio::test]
    async fn unknown_ids_surface_not_found() {
        let store = InMemoryContentStore::seeded();
        let missing = Uuid::new_v4();
        assert!(matches!(
            store.get_alumni(missing).await,
            Err(PortError::NotFound(_))
        ));
        assert!(matches!(
            store.like_story(missing).await,
            Err(PortError::NotFound(_))
        ));
    }
}
