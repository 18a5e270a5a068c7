use tracing::{debug, info, warn};

use crate::domain::model::book::{AddBookRequest, Book};
use crate::domain::model::catalog::{Catalog, SearchFields, Statistics};
use crate::domain::repository::CatalogRepository;

use super::error::AppError;

/// 蔵書Catalogに対するユースケース。
/// 起動時に1度だけloadし、以後はメモリ上のCatalogを操作する。
/// 変更系の操作は成功するたびに save する。save に失敗した変更はメモリ上でも取り消す。
pub struct LibraryService<R: CatalogRepository> {
    repo: R,
    catalog: Catalog,
}

impl<R: CatalogRepository> LibraryService<R> {
    /// Repositoryから読み込んでServiceを作る。読み込みに失敗しても空で始まる。
    pub fn open(repo: R) -> Self {
        let mut svc = Self {
            repo,
            catalog: Catalog::new(),
        };
        svc.load();
        svc
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// 保存済みのCatalogで置き換える。
    /// ファイルが無い・壊れている場合は空のCatalogになり、エラーは返さない。
    pub fn load(&mut self) {
        self.catalog = match self.repo.load() {
            Ok(Some(catalog)) => catalog,
            Ok(None) => {
                debug!("No saved catalog, starting empty");
                Catalog::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load catalog, starting empty");
                Catalog::new()
            }
        };
    }

    /// Catalog全体を上書き保存する。
    pub fn save(&self) -> Result<(), AppError> {
        self.repo
            .save(&self.catalog)
            .map_err(|e| AppError::Storage(Box::new(e)))
    }

    /// 本を末尾に追加して保存する。出版年が数値でなければ何も変更しない。
    pub fn add(&mut self, req: AddBookRequest) -> Result<Book, AppError> {
        let book = Book::try_from(req)?;
        self.catalog.push(book.clone());
        if let Err(e) = self.save() {
            self.catalog.pop();
            return Err(e);
        }
        info!(title = %book.title(), count = self.catalog.len(), "Added book");
        Ok(book)
    }

    /// タイトルが一致する最初の1冊を削除して保存する。
    /// 見つからなければ `None`（変更も保存もしない）。
    pub fn remove(&mut self, title: &str) -> Result<Option<Book>, AppError> {
        let Some((pos, removed)) = self.catalog.remove_first_by_title(title) else {
            debug!(title, "No book to remove");
            return Ok(None);
        };
        if let Err(e) = self.save() {
            self.catalog.insert(pos, removed);
            return Err(e);
        }
        info!(title = %removed.title(), count = self.catalog.len(), "Removed book");
        Ok(Some(removed))
    }

    pub fn search(&self, keyword: &str, fields: SearchFields) -> Vec<&Book> {
        self.catalog.search(keyword, fields)
    }

    pub fn list_all(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn statistics(&self) -> Statistics {
        self.catalog.statistics()
    }
}
