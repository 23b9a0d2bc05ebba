use serde::Serialize;
use time::Date;

use crate::db::{Db, ProfileDb};
use crate::environment::Stores;
use crate::log::{error, Logger};
use crate::records::{
    Achievement, Collaborator, Education, Experience, GalleryItem, NewsItem, Person, Profile,
    Publication, Resource, TalkEvent,
};

/// Everything the public page renders, fetched in one pass. Each
/// collection is in store order.
#[derive(Clone, Debug, Serialize)]
pub struct PortfolioView {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
    pub collaborators: Vec<Collaborator>,
    pub gallery: Vec<GalleryItem>,
    pub publications: Vec<Publication>,
    pub talks: Vec<TalkEvent>,
    pub news: Vec<NewsItem>,
    pub people: Vec<Person>,
}

impl PortfolioView {
    /// The names of the sections that have content, in display order.
    /// Empty sections are left out entirely.
    pub fn sections(&self) -> Vec<&'static str> {
        let mut sections = vec![];

        if !self.experience.is_empty() {
            sections.push(Experience::RESOURCE);
        }
        if !self.education.is_empty() {
            sections.push(Education::RESOURCE);
        }
        if !self.achievements.is_empty() {
            sections.push(Achievement::RESOURCE);
        }
        if !self.collaborators.is_empty() {
            sections.push(Collaborator::RESOURCE);
        }
        if !self.gallery.is_empty() {
            sections.push(GalleryItem::RESOURCE);
        }
        if !self.publications.is_empty() {
            sections.push(Publication::RESOURCE);
        }
        if !self.talks.is_empty() {
            sections.push(TalkEvent::RESOURCE);
        }
        if !self.news.is_empty() {
            sections.push(NewsItem::RESOURCE);
        }
        if !self.people.is_empty() {
            sections.push(Person::RESOURCE);
        }

        sections
    }
}

/// The public page's state. The whole page is gated on the profile:
/// without one there is nothing to show.
pub enum Portfolio {
    NotConfigured,
    Ready(PortfolioView),
}

impl Portfolio {
    /// Fetches the profile and, when one exists, every section in
    /// parallel. A section whose fetch fails comes back empty; the
    /// failure is logged and the rest of the page is unaffected.
    pub async fn load(logger: &Logger, stores: &Stores) -> Self {
        let profile = match stores.profile.get().await {
            Ok(Some(profile)) => profile,
            Ok(None) => return Portfolio::NotConfigured,
            Err(e) => {
                error!(logger, "failed to load the profile"; "error" => format!("{:?}", e));
                return Portfolio::NotConfigured;
            }
        };

        let (
            experience,
            education,
            achievements,
            collaborators,
            gallery,
            publications,
            talks,
            news,
            people,
        ) = futures::join!(
            list_or_empty(logger, stores.experience.as_ref()),
            list_or_empty(logger, stores.education.as_ref()),
            list_or_empty(logger, stores.achievements.as_ref()),
            list_or_empty(logger, stores.collaborators.as_ref()),
            list_or_empty(logger, stores.gallery.as_ref()),
            list_or_empty(logger, stores.publications.as_ref()),
            list_or_empty(logger, stores.talks.as_ref()),
            list_or_empty(logger, stores.news.as_ref()),
            list_or_empty(logger, stores.people.as_ref()),
        );

        Portfolio::Ready(PortfolioView {
            profile,
            experience,
            education,
            achievements,
            collaborators,
            gallery,
            publications,
            talks,
            news,
            people,
        })
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Portfolio::Ready(_))
    }
}

async fn list_or_empty<R: Resource>(logger: &Logger, db: &dyn Db<R>) -> Vec<R> {
    match db.list().await {
        Ok(rows) => rows,
        Err(e) => {
            error!(
                logger,
                "failed to load a portfolio section";
                "resource" => R::RESOURCE,
                "error" => format!("{:?}", e)
            );

            vec![]
        }
    }
}

/// Renders a tenure as "start - end", with "Present" standing in for a
/// missing end date.
pub fn format_tenure(start: &Date, end: Option<&Date>) -> String {
    let end = match end {
        Some(end) => end.format("%Y-%m-%d"),
        None => "Present".to_owned(),
    };

    format!("{} - {}", start.format("%Y-%m-%d"), end)
}
