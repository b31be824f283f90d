use crate::model;
use async_graphql::{ComplexObject, Context, SimpleObject};

use super::schema::library;

/// A GraphQL list whose entries may each be null, as in `[Book]`.
pub type NullableList<T> = Option<Vec<Option<T>>>;

pub(crate) fn nullable_list<M, T>(items: impl IntoIterator<Item = M>) -> NullableList<T>
where
    M: Into<T>,
{
    Some(items.into_iter().map(|item| Some(item.into())).collect())
}

/// This represents a book
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author this book references through `authorId`
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Author> {
        let library = library(ctx)?.lock().await;
        library
            .author(self.author_id)
            .cloned()
            .map(Author::from)
            .ok_or_else(|| crate::error::BooklistError::AuthorNotFound(self.author_id).into())
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

impl From<&model::Book> for Book {
    fn from(b: &model::Book) -> Self {
        b.clone().into()
    }
}

/// This represents an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Every book whose `authorId` is this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<NullableList<Book>> {
        let library = library(ctx)?.lock().await;
        Ok(nullable_list(library.books_by_author(self.id)))
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

impl From<&model::Author> for Author {
    fn from(a: &model::Author) -> Self {
        a.clone().into()
    }
}
