use crate::environment::Environment;
use crate::log::o;
use crate::manager::{ProfileManager, ResourceManager};
use crate::records::{
    Achievement, Collaborator, Education, Experience, GalleryItem, NewsItem, Person, Publication,
    Resource, TalkEvent,
};
use crate::session::{Session, User};

/// The dashboard's tabs, in display order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tab {
    Profile,
    Experience,
    Education,
    Achievements,
    Collaborators,
    Gallery,
    Publications,
    Talks,
    News,
    People,
}

impl Tab {
    pub const ALL: [Tab; 10] = [
        Tab::Profile,
        Tab::Experience,
        Tab::Education,
        Tab::Achievements,
        Tab::Collaborators,
        Tab::Gallery,
        Tab::Publications,
        Tab::Talks,
        Tab::News,
        Tab::People,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Experience => "Experience",
            Tab::Education => "Education",
            Tab::Achievements => "Achievements",
            Tab::Collaborators => "Collaborators",
            Tab::Gallery => "Gallery",
            Tab::Publications => "Publications",
            Tab::Talks => "Talks",
            Tab::News => "News",
            Tab::People => "People",
        }
    }
}

/// The outcome of the dashboard's session gate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Access {
    /// The session is still resolving; nothing is rendered yet.
    Loading,

    /// No operator is signed in.
    RedirectToLogin,

    Admitted(User),
}

/// Gates the dashboard on the session. A resolving session admits
/// nobody yet; a resolved one without a user redirects to the login
/// page.
pub fn access(session: &dyn Session) -> Access {
    if session.loading() {
        return Access::Loading;
    }

    match session.current_user() {
        Some(user) => Access::Admitted(user),
        None => Access::RedirectToLogin,
    }
}

/// The admin dashboard: one manager per resource plus the profile
/// form, with one tab active at a time. Only the active tab's data is
/// fetched.
pub struct AdminDashboard {
    pub profile: ProfileManager,
    pub experience: ResourceManager<Experience>,
    pub education: ResourceManager<Education>,
    pub achievements: ResourceManager<Achievement>,
    pub collaborators: ResourceManager<Collaborator>,
    pub gallery: ResourceManager<GalleryItem>,
    pub publications: ResourceManager<Publication>,
    pub talks: ResourceManager<TalkEvent>,
    pub news: ResourceManager<NewsItem>,
    pub people: ResourceManager<Person>,
    active: Tab,
}

impl AdminDashboard {
    pub fn new(env: &Environment) -> Self {
        fn manager<R: Resource>(env: &Environment, db: std::sync::Arc<dyn crate::db::Db<R>>) -> ResourceManager<R> {
            ResourceManager::new(
                env.logger.new(o!("manager" => R::RESOURCE)),
                db,
                env.notifier.clone(),
                env.confirm.clone(),
            )
        }

        let stores = &env.stores;

        AdminDashboard {
            profile: ProfileManager::new(
                env.logger.new(o!("manager" => "professor_profile")),
                stores.profile.clone(),
                env.notifier.clone(),
            )
            .with_object_store(env.objects.clone()),
            experience: manager(env, stores.experience.clone()),
            education: manager(env, stores.education.clone()),
            achievements: manager(env, stores.achievements.clone()),
            collaborators: manager(env, stores.collaborators.clone()),
            gallery: manager(env, stores.gallery.clone())
                .with_object_store(env.objects.clone()),
            publications: manager(env, stores.publications.clone()),
            talks: manager(env, stores.talks.clone()),
            news: manager(env, stores.news.clone()),
            people: manager(env, stores.people.clone()).with_object_store(env.objects.clone()),
            active: Tab::Profile,
        }
    }

    /// Builds the dashboard and loads the initial tab.
    pub async fn open(env: &Environment) -> Self {
        let mut dashboard = Self::new(env);
        dashboard.select(Tab::Profile).await;
        dashboard
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switches tabs and fetches that tab's data. The other tabs are
    /// left as they are.
    pub async fn select(&mut self, tab: Tab) {
        self.active = tab;

        match tab {
            Tab::Profile => self.profile.refresh().await,
            Tab::Experience => self.experience.refresh().await,
            Tab::Education => self.education.refresh().await,
            Tab::Achievements => self.achievements.refresh().await,
            Tab::Collaborators => self.collaborators.refresh().await,
            Tab::Gallery => self.gallery.refresh().await,
            Tab::Publications => self.publications.refresh().await,
            Tab::Talks => self.talks.refresh().await,
            Tab::News => self.news.refresh().await,
            Tab::People => self.people.refresh().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::BoxFuture;
    use futures::FutureExt;
    use once_cell::sync::Lazy;
    use slog::{o, Discard, Logger};

    use crate::db::memory::MemoryDb;
    use crate::db::Db;
    use crate::environment::{Environment, Stores};
    use crate::errors::StoreError;
    use crate::notify::{AutoConfirm, MemoryNotifier};
    use crate::records::{
        Achievement, Collaborator, Education, Experience, GalleryItem, NewsItem, NewsItemFields,
        Person, Profile, Publication, TalkEvent,
    };
    use crate::store::mock::MockStore;

    use super::*;

    static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::root(Discard, o!()));

    struct FakeSession {
        loading: bool,
        user: Option<User>,
    }

    impl Session for FakeSession {
        fn loading(&self) -> bool {
            self.loading
        }

        fn current_user(&self) -> Option<User> {
            self.user.clone()
        }

        fn sign_out(&self) -> BoxFuture<Result<(), StoreError>> {
            async { Ok(()) }.boxed()
        }
    }

    fn memory_environment() -> (Environment, Arc<MemoryDb<NewsItem>>) {
        let news = Arc::new(MemoryDb::<NewsItem>::new());

        let stores = Stores {
            profile: Arc::new(MemoryDb::<Profile>::new()),
            experience: Arc::new(MemoryDb::<Experience>::new()),
            education: Arc::new(MemoryDb::<Education>::new()),
            achievements: Arc::new(MemoryDb::<Achievement>::new()),
            collaborators: Arc::new(MemoryDb::<Collaborator>::new()),
            gallery: Arc::new(MemoryDb::<GalleryItem>::new()),
            publications: Arc::new(MemoryDb::<Publication>::new()),
            talks: Arc::new(MemoryDb::<TalkEvent>::new()),
            news: news.clone(),
            people: Arc::new(MemoryDb::<Person>::new()),
        };

        let env = Environment::new(
            Arc::new(LOGGER.clone()),
            stores,
            Arc::new(MockStore::new()),
            Arc::new(MemoryNotifier::new()),
            Arc::new(AutoConfirm),
        );

        (env, news)
    }

    #[test]
    fn a_resolving_session_admits_nobody() {
        let session = FakeSession {
            loading: true,
            user: None,
        };

        assert_eq!(access(&session), Access::Loading);
    }

    #[test]
    fn a_session_without_a_user_redirects_to_login() {
        let session = FakeSession {
            loading: false,
            user: None,
        };

        assert_eq!(access(&session), Access::RedirectToLogin);
    }

    #[test]
    fn a_signed_in_operator_is_admitted() {
        let session = FakeSession {
            loading: false,
            user: Some(User {
                email: "prof@example.edu".to_owned(),
            }),
        };

        assert_eq!(
            access(&session),
            Access::Admitted(User {
                email: "prof@example.edu".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn opening_the_dashboard_lands_on_the_profile_tab() {
        let (env, _) = memory_environment();

        let dashboard = AdminDashboard::open(&env).await;

        assert_eq!(dashboard.active(), Tab::Profile);
    }

    #[tokio::test]
    async fn selecting_a_tab_fetches_only_that_tab() {
        let (env, news) = memory_environment();

        Db::insert(
            news.as_ref(),
            NewsItemFields {
                text: "Seeded".to_owned(),
                ..NewsItemFields::default()
            },
        )
        .await
        .unwrap();

        let mut dashboard = AdminDashboard::open(&env).await;
        assert!(dashboard.news.items().is_empty());

        dashboard.select(Tab::News).await;

        assert_eq!(dashboard.active(), Tab::News);
        assert_eq!(dashboard.news.items().len(), 1);
        assert!(dashboard.experience.items().is_empty());
    }

    #[test]
    fn tabs_are_in_display_order() {
        let labels: Vec<_> = Tab::ALL.iter().map(|tab| tab.label()).collect();

        assert_eq!(
            labels,
            vec![
                "Profile",
                "Experience",
                "Education",
                "Achievements",
                "Collaborators",
                "Gallery",
                "Publications",
                "Talks",
                "News",
                "People",
            ]
        );
    }
}
