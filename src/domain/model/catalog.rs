use serde::{Deserialize, Serialize};

use super::book::Book;

/// 検索対象のフィールド。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFields {
    Title,
    Author,
    /// タイトルまたは著者のどちらかに一致すればヒット
    Both,
}

impl SearchFields {
    fn matches(self, book: &Book, keyword: &str) -> bool {
        let title = || book.title().to_lowercase().contains(keyword);
        let author = || book.author().to_lowercase().contains(keyword);
        match self {
            Self::Title => title(),
            Self::Author => author(),
            Self::Both => title() || author(),
        }
    }
}

/// 統計結果。空のCatalogではゼロ除算せず `Empty` を返す。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statistics {
    Empty,
    Summary {
        total: usize,
        read: usize,
        /// 既読率（0.0〜100.0）。表示時に小数第2位まで丸める。
        percent_read: f64,
    },
}

/// Catalog — 本のレコードを挿入順に保持する集約ルート。
/// JSON上はレコードの配列そのもの。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 末尾に追加する。重複チェックはしない。
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// 指定位置に挿入する。位置が末尾を超える場合は末尾に追加する。
    pub fn insert(&mut self, index: usize, book: Book) {
        let pos = index.min(self.books.len());
        self.books.insert(pos, book);
    }

    /// 末尾の1冊を取り除く。
    pub fn pop(&mut self) -> Option<Book> {
        self.books.pop()
    }

    /// タイトルが一致する最初の1冊だけを削除し、元の位置とともに返す。
    pub fn remove_first_by_title(&mut self, title: &str) -> Option<(usize, Book)> {
        let pos = self.books.iter().position(|b| b.title_matches(title))?;
        Some((pos, self.books.remove(pos)))
    }

    /// キーワードの部分一致検索（大文字小文字を区別しない）。挿入順を保つ。
    pub fn search(&self, keyword: &str, fields: SearchFields) -> Vec<&Book> {
        let keyword = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|b| fields.matches(b, &keyword))
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        let total = self.books.len();
        if total == 0 {
            return Statistics::Empty;
        }
        let read = self.books.iter().filter(|b| b.is_read()).count();
        Statistics::Summary {
            total,
            read,
            percent_read: read as f64 / total as f64 * 100.0,
        }
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}
