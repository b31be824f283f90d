use crate::model::{Author, Book};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Library shared between concurrent requests.
///
/// A single lock covers both collections and their id counters, so an
/// add or delete runs its read-then-write sequence without interleaving.
pub type SharedLibrary = Arc<Mutex<Library>>;

/// Hands out increasing ids for one collection.
///
/// Ids never come from the collection length, so deleting records can't
/// cause a later insert to reuse an id that is still present.
#[derive(Debug, Clone, Copy)]
struct IdCounter {
    next: i32,
}

impl IdCounter {
    fn after<'a>(ids: impl Iterator<Item = &'a i32>) -> Self {
        let next = ids.copied().max().map_or(1, |max| max + 1);
        Self { next }
    }

    fn next_id(&mut self) -> i32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// In-memory books and authors, kept in insertion order.
#[derive(Debug, Clone)]
pub struct Library {
    books: Vec<Book>,
    authors: Vec<Author>,
    book_ids: IdCounter,
    author_ids: IdCounter,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Library pre-populated with the bundled sample data.
    pub fn seeded() -> Self {
        Self::from_parts(super::seed::authors(), super::seed::books())
    }

    pub fn from_parts(authors: Vec<Author>, books: Vec<Book>) -> Self {
        let book_ids = IdCounter::after(books.iter().map(|b| &b.id));
        let author_ids = IdCounter::after(authors.iter().map(|a| &a.id));
        Self {
            books,
            authors,
            book_ids,
            author_ids,
        }
    }

    pub fn into_shared(self) -> SharedLibrary {
        Arc::new(Mutex::new(self))
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn book(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn author(&self, id: i32) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.is_by(author_id))
            .cloned()
            .collect()
    }

    pub fn add_book(&mut self, name: String, author_id: i32) -> Book {
        let book = Book::new(self.book_ids.next_id(), name, author_id);
        self.books.push(book.clone());
        tracing::debug!(id = book.id, author_id, "book added");
        book
    }

    /// Remove every book with `id` and return what is left.
    pub fn delete_book(&mut self, id: i32) -> &[Book] {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        tracing::debug!(id, removed = before - self.books.len(), "book delete");
        &self.books
    }

    pub fn add_author(&mut self, name: String) -> Author {
        let author = Author::new(self.author_ids.next_id(), name);
        self.authors.push(author.clone());
        tracing::debug!(id = author.id, "author added");
        author
    }

    /// Remove every author with `id` and return what is left. Books written
    /// by that author keep their `author_id`.
    pub fn delete_author(&mut self, id: i32) -> &[Author] {
        let before = self.authors.len();
        self.authors.retain(|a| a.id != id);
        tracing::debug!(id, removed = before - self.authors.len(), "author delete");
        &self.authors
    }
}
