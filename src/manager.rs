use std::str::FromStr;
use std::sync::Arc;

use mime::Mime;
use url::Url;
use uuid::Uuid;

use crate::db::{Db, ProfileDb};
use crate::log::{error, Logger};
use crate::notify::{Confirm, Notification, Notify};
use crate::records::{ImageResource, ProfileFields, Resource};
use crate::store::ObjectStore;

/// The largest image accepted for upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A file the operator picked for upload.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// The admin-side state machine for one resource collection: the
/// listing, the form, and the submit/edit/delete operations the
/// dashboard exposes.
///
/// Writes are confirm-then-refresh. The listing is only ever replaced
/// by what the store returns; no operation patches it locally.
pub struct ResourceManager<R: Resource> {
    logger: Logger,
    db: Arc<dyn Db<R>>,
    notifier: Arc<dyn Notify>,
    confirm: Arc<dyn Confirm>,
    objects: Option<Arc<dyn ObjectStore>>,
    items: Vec<R>,
    form: R::Fields,
    editing: Option<Uuid>,
    busy: bool,
    uploading: bool,
}

impl<R: Resource> ResourceManager<R> {
    pub fn new(
        logger: Logger,
        db: Arc<dyn Db<R>>,
        notifier: Arc<dyn Notify>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        ResourceManager {
            logger,
            db,
            notifier,
            confirm,
            objects: None,
            items: vec![],
            form: R::Fields::default(),
            editing: None,
            busy: false,
            uploading: false,
        }
    }

    pub fn with_object_store(mut self, objects: Arc<dyn ObjectStore>) -> Self {
        self.objects = Some(objects);
        self
    }

    /// The rows as last fetched, in store order.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn form(&self) -> &R::Fields {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut R::Fields {
        &mut self.form
    }

    /// The id of the row being edited, if the form was loaded from one.
    pub fn editing(&self) -> Option<&Uuid> {
        self.editing.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Replaces the listing with the store's current contents. A failed
    /// fetch is logged and the stale listing is kept.
    pub async fn refresh(&mut self) {
        match self.db.list().await {
            Ok(items) => self.items = items,
            Err(e) => {
                error!(self.logger, "failed to refresh listing"; "error" => format!("{:?}", e));
            }
        }
    }

    /// Persists the form, as an update when a row is being edited and
    /// an insert otherwise. Re-entrant calls while a submit is in
    /// flight are ignored. On success the form is cleared and the
    /// listing refreshed; on failure the form and edit state survive
    /// so the operator can retry.
    pub async fn submit(&mut self) {
        if self.busy {
            return;
        }

        self.busy = true;

        let verb = if self.editing.is_some() {
            "updated"
        } else {
            "added"
        };

        let result = match self.editing {
            Some(id) => self.db.update(&id, self.form.clone()).await,
            None => self.db.insert(self.form.clone()).await,
        };

        match result {
            Ok(()) => {
                self.notifier.push(Notification::success(format!(
                    "{} {} successfully.",
                    R::NOUN,
                    verb
                )));

                self.editing = None;
                self.form = R::Fields::default();

                self.refresh().await;
            }
            Err(e) => {
                self.notifier.push(Notification::error(e.to_string()));
            }
        }

        self.busy = false;
    }

    /// Loads a copy of the row's fields into the form. Later edits to
    /// the form do not touch the listing until submitted.
    pub fn edit(&mut self, item: &R) {
        self.form = item.fields().clone();
        self.editing = Some(*item.id());
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = R::Fields::default();
    }

    /// Deletes a row after the operator confirms. Declining leaves the
    /// store untouched. A failed delete is reported without refreshing;
    /// a successful one is reported and the listing refreshed.
    pub async fn delete(&mut self, id: &Uuid) {
        let prompt = format!(
            "Are you sure you want to delete this {}?",
            R::NOUN.to_lowercase()
        );

        if !self.confirm.confirm(&prompt) {
            return;
        }

        match self.db.delete(id).await {
            Ok(()) => {
                self.notifier
                    .push(Notification::success(format!("{} deleted successfully.", R::NOUN)));

                self.refresh().await;
            }
            Err(e) => {
                self.notifier.push(Notification::error(e.to_string()));
            }
        }
    }
}

impl<R: ImageResource> ResourceManager<R> {
    /// Uploads an image and writes its public URL into the form. The
    /// row is only persisted by a later submit. Re-entrant calls while
    /// an upload is in flight are ignored.
    pub async fn attach_image(&mut self, upload: ImageUpload) {
        if self.uploading {
            return;
        }

        let objects = match &self.objects {
            Some(objects) => objects.clone(),
            None => {
                error!(self.logger, "no object store configured for image upload");
                return;
            }
        };

        self.uploading = true;

        if let Some(url) =
            upload_image(&self.logger, objects.as_ref(), self.notifier.as_ref(), upload).await
        {
            R::set_image_url(&mut self.form, &url);
        }

        self.uploading = false;
    }
}

/// The admin-side state for the profile singleton. There is no listing
/// and no delete; the submit inserts the row the first time and
/// updates it afterwards, based on what the last refresh observed.
pub struct ProfileManager {
    logger: Logger,
    db: Arc<dyn ProfileDb>,
    notifier: Arc<dyn Notify>,
    objects: Option<Arc<dyn ObjectStore>>,
    form: ProfileFields,
    id: Option<Uuid>,
    busy: bool,
    uploading: bool,
}

impl ProfileManager {
    pub fn new(logger: Logger, db: Arc<dyn ProfileDb>, notifier: Arc<dyn Notify>) -> Self {
        ProfileManager {
            logger,
            db,
            notifier,
            objects: None,
            form: ProfileFields::default(),
            id: None,
            busy: false,
            uploading: false,
        }
    }

    pub fn with_object_store(mut self, objects: Arc<dyn ObjectStore>) -> Self {
        self.objects = Some(objects);
        self
    }

    pub fn form(&self) -> &ProfileFields {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileFields {
        &mut self.form
    }

    /// The profile row's id as last observed, if one exists.
    pub fn id(&self) -> Option<&Uuid> {
        self.id.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Loads the profile into the form. When no row exists yet the form
    /// keeps its current contents; a failed fetch is logged and changes
    /// nothing.
    pub async fn refresh(&mut self) {
        match self.db.get().await {
            Ok(Some(profile)) => {
                self.id = Some(*profile.id());
                self.form = profile.fields().clone();
            }
            Ok(None) => {
                self.id = None;
            }
            Err(e) => {
                error!(self.logger, "failed to refresh profile"; "error" => format!("{:?}", e));
            }
        }
    }

    /// Persists the form, inserting when no row was observed and
    /// updating otherwise. Re-entrant calls while a submit is in
    /// flight are ignored.
    pub async fn submit(&mut self) {
        if self.busy {
            return;
        }

        self.busy = true;

        let result = match self.id {
            Some(id) => self.db.update(&id, self.form.clone()).await,
            None => self.db.insert(self.form.clone()).await,
        };

        match result {
            Ok(()) => {
                self.notifier
                    .push(Notification::success("Profile updated successfully."));

                self.refresh().await;
            }
            Err(e) => {
                self.notifier.push(Notification::error(e.to_string()));
            }
        }

        self.busy = false;
    }

    /// Adds a research interest to the form. Returns whether the list
    /// changed.
    pub fn add_research_interest(&mut self, raw: &str) -> bool {
        self.form.add_interest(raw)
    }

    /// Removes the research interest at the given position.
    pub fn remove_research_interest(&mut self, index: usize) {
        self.form.remove_interest(index);
    }

    /// Uploads a profile image and writes its public URL into the form.
    pub async fn attach_image(&mut self, upload: ImageUpload) {
        if self.uploading {
            return;
        }

        let objects = match &self.objects {
            Some(objects) => objects.clone(),
            None => {
                error!(self.logger, "no object store configured for image upload");
                return;
            }
        };

        self.uploading = true;

        if let Some(url) =
            upload_image(&self.logger, objects.as_ref(), self.notifier.as_ref(), upload).await
        {
            self.form.profile_image_url = url.as_str().to_owned();
        }

        self.uploading = false;
    }
}

/// Validates and uploads one image, reporting the outcome through the
/// notifier. Returns the public URL on success. Validation happens
/// before the store is contacted.
async fn upload_image(
    logger: &Logger,
    objects: &dyn ObjectStore,
    notifier: &dyn Notify,
    upload: ImageUpload,
) -> Option<Url> {
    let mime = match Mime::from_str(&upload.content_type) {
        Ok(mime) if mime.type_() == mime::IMAGE => mime,
        _ => {
            notifier.push(Notification::error("Only image files can be uploaded."));
            return None;
        }
    };

    if upload.content.len() > MAX_IMAGE_BYTES {
        notifier.push(Notification::error("Images must be 5 MB or smaller."));
        return None;
    }

    let key = object_key(&upload.file_name, &mime);

    if let Err(e) = objects.save(&key, upload.content_type, upload.content).await {
        error!(logger, "failed to upload image"; "key" => &key, "error" => format!("{:?}", e));
        notifier.push(Notification::error(e.to_string()));
        return None;
    }

    match objects.public_url(&key) {
        Ok(url) => {
            notifier.push(Notification::success("Image uploaded successfully."));
            Some(url)
        }
        Err(e) => {
            error!(logger, "failed to build object URL"; "key" => &key, "error" => format!("{:?}", e));
            notifier.push(Notification::error(e.to_string()));
            None
        }
    }
}

/// A fresh object key for an upload: a random name with the original
/// file's extension, falling back to the MIME subtype when the name
/// has none.
fn object_key(file_name: &str, mime: &Mime) -> String {
    let extension = match file_name.rsplit('.').next() {
        Some(extension) if extension.len() < file_name.len() && !extension.is_empty() => extension,
        _ => mime.subtype().as_str(),
    };

    format!("{}.{}", Uuid::new_v4(), extension)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use once_cell::sync::Lazy;
    use slog::{o, Discard, Logger};

    use crate::db::memory::MemoryDb;
    use crate::notify::{AutoConfirm, Confirm, MemoryNotifier, Severity};
    use crate::records::{GalleryItem, NewsItem, NewsItemFields, Profile, Resource};
    use crate::store::mock::MockStore;

    use super::*;

    static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::root(Discard, o!()));

    struct DeclineConfirm;

    impl Confirm for DeclineConfirm {
        fn confirm(&self, _prompt: &str) -> bool {
            false
        }
    }

    fn news_manager(
        db: Arc<MemoryDb<NewsItem>>,
        notifier: Arc<MemoryNotifier>,
        confirm: Arc<dyn Confirm>,
    ) -> ResourceManager<NewsItem> {
        ResourceManager::new(LOGGER.clone(), db, notifier, confirm)
    }

    fn gallery_manager(
        notifier: Arc<MemoryNotifier>,
        store: Arc<MockStore>,
    ) -> ResourceManager<GalleryItem> {
        ResourceManager::new(
            LOGGER.clone(),
            Arc::new(MemoryDb::<GalleryItem>::new()),
            notifier,
            Arc::new(AutoConfirm),
        )
        .with_object_store(store)
    }

    fn png(content: Vec<u8>) -> ImageUpload {
        ImageUpload {
            file_name: "photo.png".to_owned(),
            content_type: "image/png".to_owned(),
            content,
        }
    }

    #[tokio::test]
    async fn submitting_a_new_item_notifies_clears_the_form_and_refreshes() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db, notifier.clone(), Arc::new(AutoConfirm));

        manager.form_mut().text = "New grant awarded".to_owned();
        manager.submit().await;

        let notification = notifier.last().unwrap();
        assert_eq!(notification.severity, Severity::Success);
        assert_eq!(notification.message, "News/Event added successfully.");

        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.form().text, "");
        assert_eq!(manager.editing(), None);
    }

    #[tokio::test]
    async fn a_failed_submit_keeps_the_form_and_edit_state() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db.clone(), notifier.clone(), Arc::new(AutoConfirm));

        db.fail_with("permission denied");

        manager.form_mut().text = "Draft".to_owned();
        manager.submit().await;

        let notification = notifier.last().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, "permission denied");

        assert_eq!(manager.form().text, "Draft");
        assert!(manager.items().is_empty());
        assert!(!manager.is_busy());
    }

    #[tokio::test]
    async fn submits_are_ignored_while_one_is_in_flight() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db.clone(), notifier.clone(), Arc::new(AutoConfirm));

        manager.busy = true;
        manager.form_mut().text = "Queued".to_owned();
        manager.submit().await;

        assert_eq!(db.write_count(), 0);
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn editing_then_submitting_updates_the_row() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db.clone(), notifier.clone(), Arc::new(AutoConfirm));

        manager.form_mut().text = "Frist post".to_owned();
        manager.submit().await;

        let item = manager.items()[0].clone();
        manager.edit(&item);
        assert_eq!(manager.editing(), Some(item.id()));
        assert_eq!(manager.form().text, "Frist post");

        manager.form_mut().text = "First post".to_owned();
        manager.submit().await;

        assert_eq!(
            notifier.last().unwrap().message,
            "News/Event updated successfully."
        );
        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.items()[0].fields().text, "First post");
        assert_eq!(manager.editing(), None);
    }

    #[tokio::test]
    async fn updating_one_row_leaves_the_others_untouched() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db, notifier, Arc::new(AutoConfirm));

        for text in &["alpha", "beta", "gamma"] {
            manager.form_mut().text = (*text).to_owned();
            manager.submit().await;
        }

        let target = manager
            .items()
            .iter()
            .find(|item| item.fields().text == "beta")
            .unwrap()
            .clone();
        let others: Vec<_> = manager
            .items()
            .iter()
            .filter(|item| item.id() != target.id())
            .cloned()
            .collect();
        assert_eq!(others.len(), 2);

        manager.edit(&target);
        manager.form_mut().text = "beta, revised".to_owned();
        manager.submit().await;

        assert_eq!(manager.items().len(), 3);
        assert!(manager
            .items()
            .iter()
            .any(|item| item.fields().text == "beta, revised"));

        for other in &others {
            let after = manager
                .items()
                .iter()
                .find(|item| item.id() == other.id())
                .unwrap();

            assert_eq!(after.fields(), other.fields());
        }
    }

    #[tokio::test]
    async fn deleting_one_row_removes_only_that_row() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db, notifier, Arc::new(AutoConfirm));

        for text in &["alpha", "beta", "gamma"] {
            manager.form_mut().text = (*text).to_owned();
            manager.submit().await;
        }

        let id = *manager
            .items()
            .iter()
            .find(|item| item.fields().text == "beta")
            .unwrap()
            .id();

        manager.delete(&id).await;

        let texts: Vec<_> = manager
            .items()
            .iter()
            .map(|item| item.fields().text.as_str())
            .collect();

        assert_eq!(texts.len(), 2);
        assert!(texts.contains(&"alpha"));
        assert!(texts.contains(&"gamma"));
        assert!(!texts.contains(&"beta"));
    }

    #[tokio::test]
    async fn cancelling_an_edit_resets_the_form() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db, notifier, Arc::new(AutoConfirm));

        manager.form_mut().text = "Old".to_owned();
        manager.submit().await;

        let item = manager.items()[0].clone();
        manager.edit(&item);
        manager.cancel_edit();

        assert_eq!(manager.editing(), None);
        assert_eq!(manager.form(), &NewsItemFields::default());
    }

    #[tokio::test]
    async fn a_declined_delete_leaves_the_store_untouched() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db.clone(), notifier.clone(), Arc::new(AutoConfirm));

        manager.form_mut().text = "Keep me".to_owned();
        manager.submit().await;

        let id = *manager.items()[0].id();
        let writes_before = db.write_count();
        notifier.take();

        let mut manager = news_manager(db.clone(), notifier.clone(), Arc::new(DeclineConfirm));
        manager.refresh().await;
        manager.delete(&id).await;

        assert_eq!(db.write_count(), writes_before);
        assert!(notifier.is_empty());
        assert_eq!(manager.items().len(), 1);
    }

    #[tokio::test]
    async fn a_confirmed_delete_notifies_and_refreshes() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db, notifier.clone(), Arc::new(AutoConfirm));

        manager.form_mut().text = "Ephemeral".to_owned();
        manager.submit().await;

        let id = *manager.items()[0].id();
        manager.delete(&id).await;

        assert_eq!(
            notifier.last().unwrap().message,
            "News/Event deleted successfully."
        );
        assert!(manager.items().is_empty());
    }

    #[tokio::test]
    async fn a_failed_delete_notifies_without_refreshing() {
        let db = Arc::new(MemoryDb::<NewsItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = news_manager(db.clone(), notifier.clone(), Arc::new(AutoConfirm));

        manager.form_mut().text = "Sticky".to_owned();
        manager.submit().await;

        db.fail_with("row is locked");
        let id = *manager.items()[0].id();
        manager.delete(&id).await;

        let notification = notifier.last().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, "row is locked");
        assert_eq!(manager.items().len(), 1);
    }

    #[tokio::test]
    async fn non_image_uploads_are_rejected_before_the_store_is_contacted() {
        let notifier = Arc::new(MemoryNotifier::new());
        let store = Arc::new(MockStore::new());
        let mut manager = gallery_manager(notifier.clone(), store.clone());

        manager
            .attach_image(ImageUpload {
                file_name: "resume.pdf".to_owned(),
                content_type: "application/pdf".to_owned(),
                content: vec![1, 2, 3],
            })
            .await;

        assert_eq!(
            notifier.last().unwrap().message,
            "Only image files can be uploaded."
        );
        assert_eq!(store.saved_count(), 0);
        assert_eq!(manager.form().image_url, "");
    }

    #[tokio::test]
    async fn oversized_uploads_are_rejected_before_the_store_is_contacted() {
        let notifier = Arc::new(MemoryNotifier::new());
        let store = Arc::new(MockStore::new());
        let mut manager = gallery_manager(notifier.clone(), store.clone());

        manager.attach_image(png(vec![0; MAX_IMAGE_BYTES + 1])).await;

        assert_eq!(
            notifier.last().unwrap().message,
            "Images must be 5 MB or smaller."
        );
        assert_eq!(store.saved_count(), 0);
    }

    #[tokio::test]
    async fn an_image_at_the_size_limit_is_accepted() {
        let notifier = Arc::new(MemoryNotifier::new());
        let store = Arc::new(MockStore::new());
        let mut manager = gallery_manager(notifier.clone(), store.clone());

        manager.attach_image(png(vec![0; MAX_IMAGE_BYTES])).await;

        assert_eq!(notifier.last().unwrap().severity, Severity::Success);
        assert_eq!(store.saved_count(), 1);
    }

    #[tokio::test]
    async fn a_successful_upload_writes_the_url_into_the_form_only() {
        let db = Arc::new(MemoryDb::<GalleryItem>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let store = Arc::new(MockStore::new());
        let mut manager = ResourceManager::new(
            LOGGER.clone(),
            db.clone(),
            notifier.clone(),
            Arc::new(AutoConfirm),
        )
        .with_object_store(store.clone());

        manager.attach_image(png(vec![137, 80, 78, 71])).await;

        assert_eq!(
            notifier.last().unwrap().message,
            "Image uploaded successfully."
        );

        let url = manager.form().image_url.clone();
        assert!(url.starts_with("https://objects.test/"));
        assert!(url.ends_with(".png"));

        // nothing is persisted until the form is submitted
        assert_eq!(db.write_count(), 0);
        assert!(manager.items().is_empty());

        let keys = store.keys();
        assert_eq!(keys.len(), 1);
        let (content_type, content) = store.saved(&keys[0]).unwrap();
        assert_eq!(content_type, "image/png");
        assert_eq!(content, vec![137, 80, 78, 71]);
    }

    #[tokio::test]
    async fn a_failed_upload_reports_the_store_error() {
        let notifier = Arc::new(MemoryNotifier::new());
        let store = Arc::new(MockStore::new());
        store.fail_with("bucket unavailable");

        let mut manager = gallery_manager(notifier.clone(), store);

        manager.attach_image(png(vec![1])).await;

        let notification = notifier.last().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, "bucket unavailable");
        assert_eq!(manager.form().image_url, "");
    }

    #[test]
    fn object_keys_carry_the_file_extension() {
        let mime = Mime::from_str("image/png").unwrap();

        let key = object_key("holiday.photo.JPG", &mime);
        assert!(key.ends_with(".JPG"));

        let key = object_key("no-extension", &mime);
        assert!(key.ends_with(".png"));
    }

    #[tokio::test]
    async fn profile_submit_inserts_then_updates() {
        let db = Arc::new(MemoryDb::<Profile>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = ProfileManager::new(LOGGER.clone(), db.clone(), notifier.clone());

        manager.refresh().await;
        assert_eq!(manager.id(), None);

        manager.form_mut().name = "Dr. Ada Byron".to_owned();
        manager.submit().await;

        assert_eq!(
            notifier.last().unwrap().message,
            "Profile updated successfully."
        );
        assert!(manager.id().is_some());
        assert_eq!(db.rows().len(), 1);

        let first_id = *manager.id().unwrap();

        manager.form_mut().title = "Professor of Mathematics".to_owned();
        manager.submit().await;

        // still a single row, updated in place
        assert_eq!(db.rows().len(), 1);
        assert_eq!(manager.id(), Some(&first_id));
        assert_eq!(manager.form().title, "Professor of Mathematics");
    }

    #[tokio::test]
    async fn profile_refresh_failure_keeps_the_form() {
        let db = Arc::new(MemoryDb::<Profile>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = ProfileManager::new(LOGGER.clone(), db.clone(), notifier);

        manager.form_mut().name = "Unsaved".to_owned();
        db.fail_with("timeout");
        manager.refresh().await;

        assert_eq!(manager.form().name, "Unsaved");
    }

    #[tokio::test]
    async fn research_interests_go_through_the_profile_form() {
        let db = Arc::new(MemoryDb::<Profile>::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager = ProfileManager::new(LOGGER.clone(), db, notifier);

        assert!(manager.add_research_interest(" robotics "));
        assert!(!manager.add_research_interest("robotics"));
        assert!(manager.add_research_interest("control theory"));

        manager.remove_research_interest(0);

        assert_eq!(manager.form().research_interests, vec!["control theory"]);
    }

    #[tokio::test]
    async fn uploads_are_ignored_while_one_is_in_flight() {
        let notifier = Arc::new(MemoryNotifier::new());
        let store = Arc::new(MockStore::new());
        let mut manager = gallery_manager(notifier.clone(), store.clone());

        manager.uploading = true;
        manager.attach_image(png(vec![1])).await;

        assert_eq!(store.saved_count(), 0);
        assert!(notifier.is_empty());
    }
}
