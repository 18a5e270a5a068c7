use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// 本の追加リクエスト。入力されたままの文字列を保持し、
/// `Book::try_from` で型付きのレコードに変換する。
#[derive(Debug, Clone)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    /// yes/no の回答
    pub read: String,
}

/// Catalogに格納される1冊分のレコード。
/// JSON上は `title`, `author`, `year`, `genre`, `read` の5フィールドのみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    year: i64,
    genre: String,
    read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    /// タイトルの完全一致（大文字小文字を区別しない）
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl TryFrom<AddBookRequest> for Book {
    type Error = DomainError;

    fn try_from(req: AddBookRequest) -> Result<Self, Self::Error> {
        let year = parse_year(&req.year)?;
        Ok(Self {
            title: req.title,
            author: req.author,
            year,
            genre: req.genre,
            read: parse_read_flag(&req.read),
        })
    }
}

/// 出版年をパースする。範囲チェックはしない。
pub fn parse_year(input: &str) -> Result<i64, DomainError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| DomainError::InvalidYear {
            input: input.to_string(),
            source,
        })
}

/// "yes" のときだけ既読。それ以外の回答はすべて未読扱い。
pub fn parse_read_flag(input: &str) -> bool {
    input.trim().to_lowercase() == "yes"
}
