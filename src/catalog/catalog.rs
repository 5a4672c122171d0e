use super::Book;
use std::collections::HashMap;

/// In-memory book catalog, keyed by unique numeric identifier.
///
/// Built once at startup by [`super::load_catalog`], read-only afterwards.
/// Iteration order is the load order of the source file.
#[derive(Debug)]
pub struct Catalog {
    books: Vec<Book>,
    by_id: HashMap<i64, usize>,
}

impl Catalog {
    /// Build a catalog from loaded records. Identifiers must be unique,
    /// the loader enforces this before constructing.
    pub(crate) fn new(books: Vec<Book>) -> Catalog {
        let by_id = books
            .iter()
            .enumerate()
            .map(|(position, book)| (book.id, position))
            .collect();
        Catalog { books, by_id }
    }

    pub fn get(&self, id: i64) -> Option<&Book> {
        self.by_id.get(&id).map(|&position| &self.books[position])
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Sorted unique category labels across the catalog. Records without
    /// a category do not contribute a label.
    pub fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .books
            .iter()
            .filter_map(|book| book.category.clone())
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }
}
