//! Textual rendering of books and statistics for the menu.

use crate::domain::model::book::Book;
use crate::domain::model::catalog::Statistics;

/// `1. Dune by Frank Herbert (1965) - Sci-Fi - Read`
pub fn book_line(number: usize, book: &Book) -> String {
    let status = if book.is_read() { "Read" } else { "Unread" };
    format!(
        "{number}. {} by {} ({}) - {} - {status}",
        book.title(),
        book.author(),
        book.year(),
        book.genre(),
    )
}

/// 1始まりの番号付きリスト。行末の改行は付けない。
pub fn book_list<'a>(books: impl IntoIterator<Item = &'a Book>) -> String {
    books
        .into_iter()
        .enumerate()
        .map(|(i, book)| book_line(i + 1, book))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn statistics(stats: &Statistics) -> String {
    match stats {
        Statistics::Empty => "No books in the library.".to_string(),
        Statistics::Summary {
            total,
            percent_read,
            ..
        } => format!("Total books: {total}\nPercentage read: {percent_read:.2}%"),
    }
}
