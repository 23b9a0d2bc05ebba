use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::normalization::normalize_interest;

/// The store-managed timestamps carried by every row.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Times {
    /// The date and time the row was created.
    pub created_at: OffsetDateTime,

    /// The date and time the row was last modified.
    pub updated_at: OffsetDateTime,
}

impl Times {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();

        Times {
            created_at: now,
            updated_at: now,
        }
    }
}

/// Today's date, used for the blank state of date-defaulted form fields.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// One entity type managed by the admin dashboard and displayed on the
/// public portfolio page.
///
/// A row is the identifier the store assigned on creation, the
/// store-managed timestamps, and the editable fields the admin form
/// mirrors. `Fields::default()` is the form's blank state.
pub trait Resource: Clone + Send + Sync + 'static {
    /// The editable columns of a row, as held by the admin form.
    type Fields: Clone + Default + PartialEq + Send + Sync + 'static;

    /// The logical resource (table) name in the backing store.
    const RESOURCE: &'static str;

    /// The noun used in operator-facing notifications.
    const NOUN: &'static str;

    fn new(id: Uuid, times: Times, fields: Self::Fields) -> Self;

    fn id(&self) -> &Uuid;

    fn times(&self) -> &Times;

    fn fields(&self) -> &Self::Fields;

    /// The ordering the store applies when listing the collection.
    /// Clients never re-sort.
    fn cmp_order(a: &Self, b: &Self) -> Ordering;
}

/// Resources whose form carries an uploaded image reference.
pub trait ImageResource: Resource {
    fn set_image_url(fields: &mut Self::Fields, url: &url::Url);
}

/// The professor profile. At most one row exists system-wide; it gates
/// the entire public page.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Profile {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: ProfileFields,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProfileFields {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub office_location: String,
    pub profile_image_url: String,
    pub research_interests: Vec<String>,
}

impl ProfileFields {
    /// Adds a research interest after normalization. Blank input and
    /// exact (case-sensitive) duplicates are no-ops. Returns whether
    /// the list changed.
    pub fn add_interest(&mut self, raw: &str) -> bool {
        let interest = normalize_interest(raw);

        if interest.is_empty() || self.research_interests.contains(&interest) {
            return false;
        }

        self.research_interests.push(interest);

        true
    }

    /// Removes the interest at `index`, preserving the order of the
    /// rest. Out-of-range indexes are ignored.
    pub fn remove_interest(&mut self, index: usize) {
        if index < self.research_interests.len() {
            self.research_interests.remove(index);
        }
    }
}

impl Resource for Profile {
    type Fields = ProfileFields;

    const RESOURCE: &'static str = "professor_profile";
    const NOUN: &'static str = "Profile";

    fn new(id: Uuid, times: Times, fields: ProfileFields) -> Self {
        Profile { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &ProfileFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.times.created_at.cmp(&a.times.created_at)
    }
}

/// A single entry in the professional experience timeline.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Experience {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: ExperienceFields,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExperienceFields {
    pub role: String,
    pub place: String,
    pub start_date: Date,

    /// Absent while the position is still held; the public page then
    /// renders "Present".
    pub end_date: Option<Date>,
}

impl Default for ExperienceFields {
    fn default() -> Self {
        ExperienceFields {
            role: String::new(),
            place: String::new(),
            start_date: today(),
            end_date: None,
        }
    }
}

impl Resource for Experience {
    type Fields = ExperienceFields;

    const RESOURCE: &'static str = "experience";
    const NOUN: &'static str = "Experience";

    fn new(id: Uuid, times: Times, fields: ExperienceFields) -> Self {
        Experience { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &ExperienceFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.fields.start_date.cmp(&a.fields.start_date)
    }
}

/// A degree.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Education {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: EducationFields,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EducationFields {
    pub degree: String,
    pub place: String,
    pub year: i32,
    pub speciality: String,
}

impl Default for EducationFields {
    fn default() -> Self {
        EducationFields {
            degree: String::new(),
            place: String::new(),
            year: today().year(),
            speciality: String::new(),
        }
    }
}

impl Resource for Education {
    type Fields = EducationFields;

    const RESOURCE: &'static str = "education";
    const NOUN: &'static str = "Education";

    fn new(id: Uuid, times: Times, fields: EducationFields) -> Self {
        Education { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &EducationFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.fields.year.cmp(&a.fields.year)
    }
}

/// An award, honor, or position of distinction.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Achievement {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: AchievementFields,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AchievementFields {
    pub position: String,
    pub organization: String,
    pub date: Date,
}

impl Default for AchievementFields {
    fn default() -> Self {
        AchievementFields {
            position: String::new(),
            organization: String::new(),
            date: today(),
        }
    }
}

impl Resource for Achievement {
    type Fields = AchievementFields;

    const RESOURCE: &'static str = "achievements";
    const NOUN: &'static str = "Achievement";

    fn new(id: Uuid, times: Times, fields: AchievementFields) -> Self {
        Achievement { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &AchievementFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.fields.date.cmp(&a.fields.date)
    }
}

/// A research collaborator.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Collaborator {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: CollaboratorFields,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CollaboratorFields {
    pub name: String,
    pub designation: String,
    pub institute: String,
}

impl Resource for Collaborator {
    type Fields = CollaboratorFields;

    const RESOURCE: &'static str = "collaborators";
    const NOUN: &'static str = "Collaborator";

    fn new(id: Uuid, times: Times, fields: CollaboratorFields) -> Self {
        Collaborator { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &CollaboratorFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        a.fields.name.cmp(&b.fields.name)
    }
}

/// A photo in the gallery.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GalleryItem {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: GalleryItemFields,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GalleryItemFields {
    pub image_url: String,
    pub caption: String,
}

impl Resource for GalleryItem {
    type Fields = GalleryItemFields;

    const RESOURCE: &'static str = "gallery";
    const NOUN: &'static str = "Gallery item";

    fn new(id: Uuid, times: Times, fields: GalleryItemFields) -> Self {
        GalleryItem { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &GalleryItemFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.times.created_at.cmp(&a.times.created_at)
    }
}

impl ImageResource for GalleryItem {
    fn set_image_url(fields: &mut GalleryItemFields, url: &url::Url) {
        fields.image_url = url.as_str().to_owned();
    }
}

/// A published work.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Publication {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: PublicationFields,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PublicationFields {
    pub title: String,
    pub authors: String,
    pub publication_date: Date,
    pub source: String,
    pub publisher: String,
    pub description: String,

    /// A blank citation count coerces to zero, never to an invalid state.
    #[serde(default)]
    pub total_citations: i32,
}

impl Default for PublicationFields {
    fn default() -> Self {
        PublicationFields {
            title: String::new(),
            authors: String::new(),
            publication_date: today(),
            source: String::new(),
            publisher: String::new(),
            description: String::new(),
            total_citations: 0,
        }
    }
}

impl Resource for Publication {
    type Fields = PublicationFields;

    const RESOURCE: &'static str = "publications";
    const NOUN: &'static str = "Publication";

    fn new(id: Uuid, times: Times, fields: PublicationFields) -> Self {
        Publication { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &PublicationFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.fields.publication_date.cmp(&a.fields.publication_date)
    }
}

/// A talk given or an event attended.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TalkEvent {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: TalkEventFields,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TalkEventFields {
    pub event: String,
    pub date: Date,
    pub description: String,
    pub organizer: String,
}

impl Default for TalkEventFields {
    fn default() -> Self {
        TalkEventFields {
            event: String::new(),
            date: today(),
            description: String::new(),
            organizer: String::new(),
        }
    }
}

impl Resource for TalkEvent {
    type Fields = TalkEventFields;

    const RESOURCE: &'static str = "talks_events";
    const NOUN: &'static str = "Talk/Event";

    fn new(id: Uuid, times: Times, fields: TalkEventFields) -> Self {
        TalkEvent { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &TalkEventFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.fields.date.cmp(&a.fields.date)
    }
}

/// A dated news blurb.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NewsItem {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: NewsItemFields,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NewsItemFields {
    pub text: String,
    pub date: Date,
}

impl Default for NewsItemFields {
    fn default() -> Self {
        NewsItemFields {
            text: String::new(),
            date: today(),
        }
    }
}

impl Resource for NewsItem {
    type Fields = NewsItemFields;

    const RESOURCE: &'static str = "news_events";
    const NOUN: &'static str = "News/Event";

    fn new(id: Uuid, times: Times, fields: NewsItemFields) -> Self {
        NewsItem { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &NewsItemFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.fields.date.cmp(&a.fields.date)
    }
}

/// A lab member, past or present.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Person {
    id: Uuid,

    #[serde(flatten)]
    times: Times,

    #[serde(flatten)]
    fields: PersonFields,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PersonFields {
    pub name: String,
    pub role: String,
    pub status: PersonStatus,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub profile_image_url: String,
}

impl Default for PersonFields {
    fn default() -> Self {
        PersonFields {
            name: String::new(),
            role: String::new(),
            status: PersonStatus::Current,
            start_date: today(),
            end_date: None,
            profile_image_url: String::new(),
        }
    }
}

impl Resource for Person {
    type Fields = PersonFields;

    const RESOURCE: &'static str = "people";
    const NOUN: &'static str = "Person";

    fn new(id: Uuid, times: Times, fields: PersonFields) -> Self {
        Person { id, times, fields }
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn times(&self) -> &Times {
        &self.times
    }

    fn fields(&self) -> &PersonFields {
        &self.fields
    }

    fn cmp_order(a: &Self, b: &Self) -> Ordering {
        b.fields.start_date.cmp(&a.fields.start_date)
    }
}

impl ImageResource for Person {
    fn set_image_url(fields: &mut PersonFields, url: &url::Url) {
        fields.profile_image_url = url.as_str().to_owned();
    }
}

/// A person's standing in the group.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonStatus {
    Current,
    Former,
    Visiting,
    Emeritus,
}

impl PersonStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonStatus::Current => "current",
            PersonStatus::Former => "former",
            PersonStatus::Visiting => "visiting",
            PersonStatus::Emeritus => "emeritus",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "current" => Some(PersonStatus::Current),
            "former" => Some(PersonStatus::Former),
            "visiting" => Some(PersonStatus::Visiting),
            "emeritus" => Some(PersonStatus::Emeritus),
            _ => None,
        }
    }
}

impl Default for PersonStatus {
    fn default() -> Self {
        PersonStatus::Current
    }
}
