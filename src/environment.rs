use std::sync::Arc;

use crate::db::{Db, ProfileDb};
use crate::log::Logger;
use crate::notify::{Confirm, Notify};
use crate::records::{
    Achievement, Collaborator, Education, Experience, GalleryItem, NewsItem, Person, Profile,
    Publication, TalkEvent,
};
use crate::store::ObjectStore;

/// One handle per resource of the backing store. Usually every handle
/// points at the same store, but tests swap individual ones out.
#[derive(Clone)]
pub struct Stores {
    pub profile: Arc<dyn ProfileDb>,
    pub experience: Arc<dyn Db<Experience>>,
    pub education: Arc<dyn Db<Education>>,
    pub achievements: Arc<dyn Db<Achievement>>,
    pub collaborators: Arc<dyn Db<Collaborator>>,
    pub gallery: Arc<dyn Db<GalleryItem>>,
    pub publications: Arc<dyn Db<Publication>>,
    pub talks: Arc<dyn Db<TalkEvent>>,
    pub news: Arc<dyn Db<NewsItem>>,
    pub people: Arc<dyn Db<Person>>,
}

impl Stores {
    /// Points every resource at one store.
    pub fn shared<D>(db: Arc<D>) -> Self
    where
        D: Db<Experience>
            + Db<Education>
            + Db<Achievement>
            + Db<Collaborator>
            + Db<GalleryItem>
            + Db<Publication>
            + Db<TalkEvent>
            + Db<NewsItem>
            + Db<Person>
            + ProfileDb
            + 'static,
    {
        Stores {
            profile: db.clone(),
            experience: db.clone(),
            education: db.clone(),
            achievements: db.clone(),
            collaborators: db.clone(),
            gallery: db.clone(),
            publications: db.clone(),
            talks: db.clone(),
            news: db.clone(),
            people: db,
        }
    }
}

/// Everything the admin dashboard and the public page are composed
/// from.
#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub stores: Stores,
    pub objects: Arc<dyn ObjectStore>,
    pub notifier: Arc<dyn Notify>,
    pub confirm: Arc<dyn Confirm>,
}

impl Environment {
    pub fn new(
        logger: Arc<Logger>,
        stores: Stores,
        objects: Arc<dyn ObjectStore>,
        notifier: Arc<dyn Notify>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Environment {
            logger,
            stores,
            objects,
            notifier,
            confirm,
        }
    }
}
