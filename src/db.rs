use futures::future::BoxFuture;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::records::{Profile, ProfileFields, Resource};

/// One logical resource (table) of the backing data store.
///
/// Every admin manager talks to exactly one of these; the portfolio
/// page reads the same resources. Implementations return rows already
/// ordered by the resource's designated key, so callers never re-sort.
pub trait Db<R: Resource>: Send + Sync {
    fn list(&self) -> BoxFuture<Result<Vec<R>, StoreError>>;

    fn insert(&self, fields: R::Fields) -> BoxFuture<Result<(), StoreError>>;

    /// Overwrites all editable fields of the targeted row. Updating a
    /// row that no longer exists is whatever the store makes of it;
    /// no reconciliation happens at this layer.
    fn update(&self, id: &Uuid, fields: R::Fields) -> BoxFuture<Result<(), StoreError>>;

    fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>>;
}

/// The profile singleton has its own contract: zero-or-one row and no
/// delete.
pub trait ProfileDb: Send + Sync {
    fn get(&self) -> BoxFuture<Result<Option<Profile>, StoreError>>;

    fn insert(&self, fields: ProfileFields) -> BoxFuture<Result<(), StoreError>>;

    fn update(&self, id: &Uuid, fields: ProfileFields) -> BoxFuture<Result<(), StoreError>>;
}

pub mod memory;

pub use self::postgres::*;

mod postgres {
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use sqlx::postgres::{PgPool, PgRow};
    use sqlx::Row;
    use uuid::Uuid;

    use crate::errors::StoreError;
    use crate::records::{
        Achievement, AchievementFields, Collaborator, CollaboratorFields, Education,
        EducationFields, Experience, ExperienceFields, GalleryItem, GalleryItemFields, NewsItem,
        NewsItemFields, Person, PersonFields, PersonStatus, Profile, ProfileFields, Publication,
        PublicationFields, Resource, TalkEvent, TalkEventFields, Times,
    };

    /// The hosted Postgres database behind all ten resources. See
    /// `sql/schema.sql` for the table definitions.
    pub struct PgDb {
        pool: PgPool,
    }

    impl PgDb {
        pub fn new(pool: PgPool) -> Self {
            PgDb { pool }
        }
    }

    // these can be simplified once async functions in traits are stabilized

    impl super::ProfileDb for PgDb {
        fn get(&self) -> BoxFuture<Result<Option<Profile>, StoreError>> {
            async move {
                let profile = sqlx::query(
                    "SELECT id, created_at, updated_at, name, title, bio, email, phone, \
                     office_location, profile_image_url, research_interests \
                     FROM professor_profile LIMIT 1",
                )
                .try_map(|row: PgRow| {
                    let fields = ProfileFields {
                        name: try_get(&row, "name")?,
                        title: try_get(&row, "title")?,
                        bio: try_get(&row, "bio")?,
                        email: text_or_empty(&row, "email")?,
                        phone: text_or_empty(&row, "phone")?,
                        office_location: text_or_empty(&row, "office_location")?,
                        profile_image_url: text_or_empty(&row, "profile_image_url")?,
                        research_interests: try_get::<Option<Vec<String>>>(
                            &row,
                            "research_interests",
                        )?
                        .unwrap_or_default(),
                    };

                    Ok(Profile::new(try_get(&row, "id")?, times(&row)?, fields))
                })
                .fetch_optional(&self.pool)
                .await?;

                Ok(profile)
            }
            .boxed()
        }

        fn insert(&self, fields: ProfileFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query(
                    "INSERT INTO professor_profile \
                     (name, title, bio, email, phone, office_location, profile_image_url, \
                     research_interests) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
                )
                .bind(&fields.name)
                .bind(&fields.title)
                .bind(&fields.bio)
                .bind(opt(&fields.email))
                .bind(opt(&fields.phone))
                .bind(opt(&fields.office_location))
                .bind(opt(&fields.profile_image_url))
                .bind(&fields.research_interests)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(&self, id: &Uuid, fields: ProfileFields) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE professor_profile SET name = $2, title = $3, bio = $4, email = $5, \
                     phone = $6, office_location = $7, profile_image_url = $8, \
                     research_interests = $9, updated_at = now() WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.name)
                .bind(&fields.title)
                .bind(&fields.bio)
                .bind(opt(&fields.email))
                .bind(opt(&fields.phone))
                .bind(opt(&fields.office_location))
                .bind(opt(&fields.profile_image_url))
                .bind(&fields.research_interests)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }
    }

    impl super::Db<Experience> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<Experience>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, role, place, start_date, end_date \
                     FROM experience ORDER BY start_date DESC",
                )
                .try_map(|row: PgRow| {
                    let fields = ExperienceFields {
                        role: try_get(&row, "role")?,
                        place: try_get(&row, "place")?,
                        start_date: try_get(&row, "start_date")?,
                        end_date: try_get(&row, "end_date")?,
                    };

                    Ok(Experience::new(try_get(&row, "id")?, times(&row)?, fields))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: ExperienceFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query(
                    "INSERT INTO experience (role, place, start_date, end_date) \
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(&fields.role)
                .bind(&fields.place)
                .bind(fields.start_date)
                .bind(fields.end_date)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(&self, id: &Uuid, fields: ExperienceFields) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE experience SET role = $2, place = $3, start_date = $4, \
                     end_date = $5, updated_at = now() WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.role)
                .bind(&fields.place)
                .bind(fields.start_date)
                .bind(fields.end_date)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM experience WHERE id = $1", id)
        }
    }

    impl super::Db<Education> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<Education>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, degree, place, year, speciality \
                     FROM education ORDER BY year DESC",
                )
                .try_map(|row: PgRow| {
                    let fields = EducationFields {
                        degree: try_get(&row, "degree")?,
                        place: try_get(&row, "place")?,
                        year: try_get(&row, "year")?,
                        speciality: text_or_empty(&row, "speciality")?,
                    };

                    Ok(Education::new(try_get(&row, "id")?, times(&row)?, fields))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: EducationFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query(
                    "INSERT INTO education (degree, place, year, speciality) \
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(&fields.degree)
                .bind(&fields.place)
                .bind(fields.year)
                .bind(opt(&fields.speciality))
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(&self, id: &Uuid, fields: EducationFields) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE education SET degree = $2, place = $3, year = $4, \
                     speciality = $5, updated_at = now() WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.degree)
                .bind(&fields.place)
                .bind(fields.year)
                .bind(opt(&fields.speciality))
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM education WHERE id = $1", id)
        }
    }

    impl super::Db<Achievement> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<Achievement>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, position, organization, date \
                     FROM achievements ORDER BY date DESC",
                )
                .try_map(|row: PgRow| {
                    let fields = AchievementFields {
                        position: try_get(&row, "position")?,
                        organization: try_get(&row, "organization")?,
                        date: try_get(&row, "date")?,
                    };

                    Ok(Achievement::new(
                        try_get(&row, "id")?,
                        times(&row)?,
                        fields,
                    ))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: AchievementFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query(
                    "INSERT INTO achievements (position, organization, date) VALUES ($1, $2, $3)",
                )
                .bind(&fields.position)
                .bind(&fields.organization)
                .bind(fields.date)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(
            &self,
            id: &Uuid,
            fields: AchievementFields,
        ) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE achievements SET position = $2, organization = $3, date = $4, \
                     updated_at = now() WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.position)
                .bind(&fields.organization)
                .bind(fields.date)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM achievements WHERE id = $1", id)
        }
    }

    impl super::Db<Collaborator> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<Collaborator>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, name, designation, institute \
                     FROM collaborators ORDER BY name",
                )
                .try_map(|row: PgRow| {
                    let fields = CollaboratorFields {
                        name: try_get(&row, "name")?,
                        designation: try_get(&row, "designation")?,
                        institute: try_get(&row, "institute")?,
                    };

                    Ok(Collaborator::new(
                        try_get(&row, "id")?,
                        times(&row)?,
                        fields,
                    ))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: CollaboratorFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query(
                    "INSERT INTO collaborators (name, designation, institute) VALUES ($1, $2, $3)",
                )
                .bind(&fields.name)
                .bind(&fields.designation)
                .bind(&fields.institute)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(
            &self,
            id: &Uuid,
            fields: CollaboratorFields,
        ) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE collaborators SET name = $2, designation = $3, institute = $4, \
                     updated_at = now() WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.name)
                .bind(&fields.designation)
                .bind(&fields.institute)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM collaborators WHERE id = $1", id)
        }
    }

    impl super::Db<GalleryItem> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<GalleryItem>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, image_url, caption \
                     FROM gallery ORDER BY created_at DESC",
                )
                .try_map(|row: PgRow| {
                    let fields = GalleryItemFields {
                        image_url: try_get(&row, "image_url")?,
                        caption: text_or_empty(&row, "caption")?,
                    };

                    Ok(GalleryItem::new(
                        try_get(&row, "id")?,
                        times(&row)?,
                        fields,
                    ))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: GalleryItemFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query("INSERT INTO gallery (image_url, caption) VALUES ($1, $2)")
                    .bind(&fields.image_url)
                    .bind(opt(&fields.caption))
                    .execute(&self.pool)
                    .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(
            &self,
            id: &Uuid,
            fields: GalleryItemFields,
        ) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE gallery SET image_url = $2, caption = $3, updated_at = now() \
                     WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.image_url)
                .bind(opt(&fields.caption))
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM gallery WHERE id = $1", id)
        }
    }

    impl super::Db<Publication> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<Publication>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, title, authors, publication_date, \
                     source, publisher, description, total_citations \
                     FROM publications ORDER BY publication_date DESC",
                )
                .try_map(|row: PgRow| {
                    let fields = PublicationFields {
                        title: try_get(&row, "title")?,
                        authors: try_get(&row, "authors")?,
                        publication_date: try_get(&row, "publication_date")?,
                        source: text_or_empty(&row, "source")?,
                        publisher: text_or_empty(&row, "publisher")?,
                        description: text_or_empty(&row, "description")?,
                        total_citations: try_get::<Option<i32>>(&row, "total_citations")?
                            .unwrap_or(0),
                    };

                    Ok(Publication::new(
                        try_get(&row, "id")?,
                        times(&row)?,
                        fields,
                    ))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: PublicationFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query(
                    "INSERT INTO publications \
                     (title, authors, publication_date, source, publisher, description, \
                     total_citations) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7)",
                )
                .bind(&fields.title)
                .bind(&fields.authors)
                .bind(fields.publication_date)
                .bind(opt(&fields.source))
                .bind(opt(&fields.publisher))
                .bind(opt(&fields.description))
                .bind(fields.total_citations)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(
            &self,
            id: &Uuid,
            fields: PublicationFields,
        ) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE publications SET title = $2, authors = $3, publication_date = $4, \
                     source = $5, publisher = $6, description = $7, total_citations = $8, \
                     updated_at = now() WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.title)
                .bind(&fields.authors)
                .bind(fields.publication_date)
                .bind(opt(&fields.source))
                .bind(opt(&fields.publisher))
                .bind(opt(&fields.description))
                .bind(fields.total_citations)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM publications WHERE id = $1", id)
        }
    }

    impl super::Db<TalkEvent> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<TalkEvent>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, event, date, description, organizer \
                     FROM talks_events ORDER BY date DESC",
                )
                .try_map(|row: PgRow| {
                    let fields = TalkEventFields {
                        event: try_get(&row, "event")?,
                        date: try_get(&row, "date")?,
                        description: text_or_empty(&row, "description")?,
                        organizer: text_or_empty(&row, "organizer")?,
                    };

                    Ok(TalkEvent::new(try_get(&row, "id")?, times(&row)?, fields))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: TalkEventFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query(
                    "INSERT INTO talks_events (event, date, description, organizer) \
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(&fields.event)
                .bind(fields.date)
                .bind(opt(&fields.description))
                .bind(opt(&fields.organizer))
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(&self, id: &Uuid, fields: TalkEventFields) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE talks_events SET event = $2, date = $3, description = $4, \
                     organizer = $5, updated_at = now() WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.event)
                .bind(fields.date)
                .bind(opt(&fields.description))
                .bind(opt(&fields.organizer))
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM talks_events WHERE id = $1", id)
        }
    }

    impl super::Db<NewsItem> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<NewsItem>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, text, date \
                     FROM news_events ORDER BY date DESC",
                )
                .try_map(|row: PgRow| {
                    let fields = NewsItemFields {
                        text: try_get(&row, "text")?,
                        date: try_get(&row, "date")?,
                    };

                    Ok(NewsItem::new(try_get(&row, "id")?, times(&row)?, fields))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: NewsItemFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query("INSERT INTO news_events (text, date) VALUES ($1, $2)")
                    .bind(&fields.text)
                    .bind(fields.date)
                    .execute(&self.pool)
                    .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(&self, id: &Uuid, fields: NewsItemFields) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE news_events SET text = $2, date = $3, updated_at = now() \
                     WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.text)
                .bind(fields.date)
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM news_events WHERE id = $1", id)
        }
    }

    impl super::Db<Person> for PgDb {
        fn list(&self) -> BoxFuture<Result<Vec<Person>, StoreError>> {
            async move {
                let rows = sqlx::query(
                    "SELECT id, created_at, updated_at, name, role, status, start_date, \
                     end_date, profile_image_url \
                     FROM people ORDER BY start_date DESC",
                )
                .try_map(|row: PgRow| {
                    let status: String = try_get(&row, "status")?;
                    let status = PersonStatus::parse(&status).ok_or_else(|| {
                        sqlx::Error::Decode(Box::new(StoreError::new(format!(
                            "unknown person status: {}",
                            status
                        ))))
                    })?;

                    let fields = PersonFields {
                        name: try_get(&row, "name")?,
                        role: try_get(&row, "role")?,
                        status,
                        start_date: try_get(&row, "start_date")?,
                        end_date: try_get(&row, "end_date")?,
                        profile_image_url: text_or_empty(&row, "profile_image_url")?,
                    };

                    Ok(Person::new(try_get(&row, "id")?, times(&row)?, fields))
                })
                .fetch_all(&self.pool)
                .await?;

                Ok(rows)
            }
            .boxed()
        }

        fn insert(&self, fields: PersonFields) -> BoxFuture<Result<(), StoreError>> {
            async move {
                sqlx::query(
                    "INSERT INTO people \
                     (name, role, status, start_date, end_date, profile_image_url) \
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(&fields.name)
                .bind(&fields.role)
                .bind(fields.status.as_str())
                .bind(fields.start_date)
                .bind(fields.end_date)
                .bind(opt(&fields.profile_image_url))
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn update(&self, id: &Uuid, fields: PersonFields) -> BoxFuture<Result<(), StoreError>> {
            let id = *id;

            async move {
                sqlx::query(
                    "UPDATE people SET name = $2, role = $3, status = $4, start_date = $5, \
                     end_date = $6, profile_image_url = $7, updated_at = now() WHERE id = $1",
                )
                .bind(id)
                .bind(&fields.name)
                .bind(&fields.role)
                .bind(fields.status.as_str())
                .bind(fields.start_date)
                .bind(fields.end_date)
                .bind(opt(&fields.profile_image_url))
                .execute(&self.pool)
                .await?;

                Ok(())
            }
            .boxed()
        }

        fn delete(&self, id: &Uuid) -> BoxFuture<Result<(), StoreError>> {
            delete_by_id(self, "DELETE FROM people WHERE id = $1", id)
        }
    }

    fn delete_by_id<'a>(
        db: &'a PgDb,
        query: &'static str,
        id: &Uuid,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        let id = *id;

        async move {
            sqlx::query(query).bind(id).execute(&db.pool).await?;

            Ok(())
        }
        .boxed()
    }

    fn times(row: &PgRow) -> Result<Times, sqlx::Error> {
        Ok(Times {
            created_at: try_get(&row, "created_at")?,
            updated_at: try_get(&row, "updated_at")?,
        })
    }

    fn try_get<'a, T: sqlx::Type<sqlx::Postgres> + sqlx::decode::Decode<'a, sqlx::Postgres>>(
        row: &'a PgRow,
        column: &str,
    ) -> Result<T, sqlx::Error> {
        row.try_get(column)
    }

    /// Optional text columns come back as NULL but the form state keeps
    /// them as empty strings.
    fn text_or_empty(row: &PgRow, column: &str) -> Result<String, sqlx::Error> {
        Ok(try_get::<Option<String>>(row, column)?.unwrap_or_default())
    }

    /// Empty optional text is persisted as NULL rather than "".
    fn opt(text: &str) -> Option<&str> {
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
