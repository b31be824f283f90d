use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::SharedLibrary;

use super::types::*;

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(library: SharedLibrary) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(crate) fn library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedLibrary> {
    ctx.data::<SharedLibrary>()
}

/// Root query
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A single book
    async fn book(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let library = library(ctx)?.lock().await;
        Ok(library.book(id).map(Book::from))
    }

    /// A single author
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let library = library(ctx)?.lock().await;
        Ok(library.author(id).map(Author::from))
    }

    /// List of ALL books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<NullableList<Book>> {
        let library = library(ctx)?.lock().await;
        Ok(nullable_list(library.books()))
    }

    /// List of ALL authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<NullableList<Author>> {
        let library = library(ctx)?.lock().await;
        Ok(nullable_list(library.authors()))
    }
}

/// Root mutation
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add book to book list
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Option<Book>> {
        let mut library = library(ctx)?.lock().await;
        let book = library.add_book(name, author_id);
        tracing::info!(id = book.id, author_id, "Added book");
        Ok(Some(book.into()))
    }

    /// Delete book from book list
    async fn delete_book(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<NullableList<Book>> {
        let mut library = library(ctx)?.lock().await;
        let remaining = library.delete_book(id);
        tracing::info!(id, remaining = remaining.len(), "Deleted book");
        Ok(nullable_list(remaining))
    }

    /// Add author to author list
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<Author>> {
        let mut library = library(ctx)?.lock().await;
        let author = library.add_author(name);
        tracing::info!(id = author.id, "Added author");
        Ok(Some(author.into()))
    }

    /// Delete author from author list
    async fn delete_author(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<NullableList<Author>> {
        let mut library = library(ctx)?.lock().await;
        let remaining = library.delete_author(id);
        tracing::info!(id, remaining = remaining.len(), "Deleted author");
        Ok(nullable_list(remaining))
    }
}
