//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use library_manager::application::service::LibraryService;
use library_manager::domain::model::book::{AddBookRequest, Book};
use library_manager::domain::model::catalog::Catalog;
use library_manager::domain::repository::CatalogRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error: {0}")]
pub struct InMemoryError(String);

/// ファイルI/O不要のインメモリリポジトリ。JSON文字列で保持する。
pub struct InMemoryRepo {
    store: RefCell<Option<String>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            store: RefCell::new(None),
            saves: Cell::new(0),
            fail_saves: Cell::new(false),
        }
    }

    /// 任意の文字列を保存済みデータとして置く（壊れたJSONも可）。
    pub fn with_raw(content: &str) -> Self {
        let repo = Self::new();
        *repo.store.borrow_mut() = Some(content.to_string());
        repo
    }

    pub fn with_catalog(catalog: &Catalog) -> Self {
        Self::with_raw(&serde_json::to_string(catalog).unwrap())
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// 保存済みの内容を読み直す。
    pub fn stored(&self) -> Option<Catalog> {
        self.store
            .borrow()
            .as_ref()
            .map(|json| serde_json::from_str(json).unwrap())
    }
}

impl CatalogRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Option<Catalog>, Self::Error> {
        match self.store.borrow().as_ref() {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|e| InMemoryError(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, catalog: &Catalog) -> Result<(), Self::Error> {
        if self.fail_saves.get() {
            return Err(InMemoryError("disk full".into()));
        }
        let json = serde_json::to_string(catalog).unwrap();
        *self.store.borrow_mut() = Some(json);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn dune() -> Book {
    Book::new("Dune", "Herbert", 1965, "Sci-Fi", true)
}

pub fn hobbit() -> Book {
    Book::new("Hobbit", "Tolkien", 1937, "Fantasy", false)
}

pub fn request(title: &str, author: &str, year: &str, genre: &str, read: &str) -> AddBookRequest {
    AddBookRequest {
        title: title.into(),
        author: author.into(),
        year: year.into(),
        genre: genre.into(),
        read: read.into(),
    }
}

/// InMemoryRepoにCatalogを保存してLibraryServiceを開く。
pub fn service_with(books: Vec<Book>) -> LibraryService<InMemoryRepo> {
    LibraryService::open(InMemoryRepo::with_catalog(&Catalog::from(books)))
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
