use std::collections::HashSet;

use shaper_model::{
    Author, AuthorDto, AuthorForCreation, AuthorID, Course, CourseForCreation, CourseForUpdate,
    CourseID,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::parameters::{AuthorsResourceParameters, PageLimits};
use super::seed::demo_authors;
use crate::error::{QueryError, Result};
use crate::mapping::MappingRegistry;
use crate::paging::PagedList;
use crate::sorting::{OrderingExpr, OrderingTerm, sort_by_ordering, translate_order_by};

/// In-memory course library.
///
/// Reads run the listing pipeline: validate the sort clause against the
/// `AuthorDto -> Author` mapping, filter, translate and apply the ordering,
/// then cut the requested page. Field selection is left to the caller.
#[derive(Debug)]
pub struct CourseLibrary {
    authors: RwLock<Vec<Author>>,
    registry: &'static MappingRegistry,
    limits: PageLimits,
}

impl CourseLibrary {
    pub fn new(registry: &'static MappingRegistry) -> Self {
        Self::with_authors(registry, Vec::new())
    }

    pub fn with_authors(registry: &'static MappingRegistry, authors: Vec<Author>) -> Self {
        Self {
            authors: RwLock::new(authors),
            registry,
            limits: PageLimits::default(),
        }
    }

    /// Library preloaded with the demo catalog.
    pub fn seeded(registry: &'static MappingRegistry) -> Self {
        let authors = demo_authors();
        info!(authors = authors.len(), "seeded course library");
        Self::with_authors(registry, authors)
    }

    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    pub fn registry(&self) -> &'static MappingRegistry {
        self.registry
    }

    /// One page of authors matching `params`, ordered by `params.order_by`.
    pub async fn get_authors(
        &self,
        params: &AuthorsResourceParameters,
    ) -> Result<PagedList<Author>> {
        if !self
            .registry
            .valid_mapping_exists_for::<AuthorDto, Author>(&params.order_by)?
        {
            warn!(order_by = %params.order_by, "rejected sort clause");
            return Err(QueryError::InvalidSortRequest {
                order_by: params.order_by.clone(),
            });
        }
        let request = params.page_request(self.limits)?;
        let table = self.registry.lookup::<AuthorDto, Author>()?;
        let ordering = translate_order_by(&params.order_by, table)?;

        let matching: Vec<Author> = {
            let authors = self.authors.read().await;
            authors
                .iter()
                .filter(|author| matches_filters(author, params))
                .cloned()
                .collect()
        };
        debug!(matching = matching.len(), ordering = %ordering, "filtered authors");

        let ordered = sort_by_ordering(matching, &ordering)?;
        Ok(PagedList::create(ordered, request))
    }

    /// Every author in store order.
    pub async fn get_all_authors(&self) -> Vec<Author> {
        self.authors.read().await.clone()
    }

    pub async fn get_author(&self, author_id: AuthorID) -> Result<Author> {
        self.authors
            .read()
            .await
            .iter()
            .find(|author| author.id == author_id)
            .cloned()
            .ok_or_else(|| author_not_found(author_id))
    }

    /// Authors with the given ids, ordered by first then last name.
    ///
    /// Fails with [`QueryError::NotFound`] unless every distinct id exists.
    pub async fn get_authors_by_ids(&self, ids: &[AuthorID]) -> Result<Vec<Author>> {
        let wanted: HashSet<AuthorID> = ids.iter().copied().collect();
        let found: Vec<Author> = {
            let authors = self.authors.read().await;
            authors
                .iter()
                .filter(|author| wanted.contains(&author.id))
                .cloned()
                .collect()
        };

        if found.len() != wanted.len() {
            let missing = wanted
                .iter()
                .filter(|id| found.iter().all(|author| author.id != **id))
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(QueryError::NotFound(format!("authors {missing}")));
        }

        let ordering = OrderingExpr::new(vec![
            OrderingTerm::ascending("FirstName"),
            OrderingTerm::ascending("LastName"),
        ]);
        sort_by_ordering(found, &ordering)
    }

    pub async fn author_exists(&self, author_id: AuthorID) -> bool {
        self.authors
            .read()
            .await
            .iter()
            .any(|author| author.id == author_id)
    }

    /// Stores a new author and its courses under fresh ids.
    pub async fn add_author(&self, author: AuthorForCreation) -> Author {
        let mut author = author.into_author();
        author.id = AuthorID::new();
        for course in &mut author.courses {
            course.id = CourseID::new();
            course.author_id = author.id;
        }

        info!(author_id = %author.id, courses = author.courses.len(), "added author");
        self.authors.write().await.push(author.clone());
        author
    }

    /// Stores several authors at once, in the given order.
    pub async fn add_authors(&self, authors: Vec<AuthorForCreation>) -> Vec<Author> {
        let mut created = Vec::with_capacity(authors.len());
        for author in authors {
            created.push(self.add_author(author).await);
        }
        created
    }

    pub async fn delete_author(&self, author_id: AuthorID) -> Result<()> {
        let mut authors = self.authors.write().await;
        let position = authors
            .iter()
            .position(|author| author.id == author_id)
            .ok_or_else(|| author_not_found(author_id))?;
        authors.remove(position);
        info!(%author_id, "deleted author");
        Ok(())
    }

    /// Courses of one author, ordered by title.
    pub async fn get_courses(&self, author_id: AuthorID) -> Result<Vec<Course>> {
        let courses = self.get_author(author_id).await?.courses;
        let ordering = OrderingExpr::new(vec![OrderingTerm::ascending("Title")]);
        sort_by_ordering(courses, &ordering)
    }

    pub async fn get_course(&self, author_id: AuthorID, course_id: CourseID) -> Result<Course> {
        self.get_author(author_id)
            .await?
            .courses
            .into_iter()
            .find(|course| course.id == course_id)
            .ok_or_else(|| course_not_found(author_id, course_id))
    }

    pub async fn add_course(
        &self,
        author_id: AuthorID,
        course: CourseForCreation,
    ) -> Result<Course> {
        let mut authors = self.authors.write().await;
        let author = authors
            .iter_mut()
            .find(|author| author.id == author_id)
            .ok_or_else(|| author_not_found(author_id))?;

        let mut course = course.into_course(author_id);
        course.id = CourseID::new();
        author.courses.push(course.clone());
        info!(%author_id, course_id = %course.id, "added course");
        Ok(course)
    }

    pub async fn update_course(
        &self,
        author_id: AuthorID,
        course_id: CourseID,
        update: CourseForUpdate,
    ) -> Result<Course> {
        let mut authors = self.authors.write().await;
        let course = authors
            .iter_mut()
            .find(|author| author.id == author_id)
            .ok_or_else(|| author_not_found(author_id))?
            .courses
            .iter_mut()
            .find(|course| course.id == course_id)
            .ok_or_else(|| course_not_found(author_id, course_id))?;

        update.apply_to(course);
        debug!(%author_id, %course_id, "updated course");
        Ok(course.clone())
    }

    pub async fn delete_course(&self, author_id: AuthorID, course_id: CourseID) -> Result<()> {
        let mut authors = self.authors.write().await;
        let courses = &mut authors
            .iter_mut()
            .find(|author| author.id == author_id)
            .ok_or_else(|| author_not_found(author_id))?
            .courses;
        let position = courses
            .iter()
            .position(|course| course.id == course_id)
            .ok_or_else(|| course_not_found(author_id, course_id))?;
        courses.remove(position);
        info!(%author_id, %course_id, "deleted course");
        Ok(())
    }
}

/// Main category equality ignores case; the search text must appear
/// verbatim in the main category or either name.
fn matches_filters(author: &Author, params: &AuthorsResourceParameters) -> bool {
    if let Some(category) = params.main_category_filter()
        && author.main_category.to_lowercase() != category.to_lowercase()
    {
        return false;
    }

    if let Some(search) = params.search_filter() {
        return author.main_category.contains(search)
            || author.first_name.contains(search)
            || author.last_name.contains(search);
    }

    true
}

fn author_not_found(author_id: AuthorID) -> QueryError {
    QueryError::NotFound(format!("author {author_id}"))
}

fn course_not_found(author_id: AuthorID, course_id: CourseID) -> QueryError {
    QueryError::NotFound(format!("course {course_id} of author {author_id}"))
}
