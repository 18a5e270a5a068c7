//! Interactive menu for the library manager
//!
//! line-oriented input (BufRead) <-> application::LibraryService
//!
//! 6 choices: add, remove, search, display all, statistics, exit

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::warn;

use crate::application::service::LibraryService;
use crate::domain::model::book::AddBookRequest;
use crate::domain::model::catalog::SearchFields;
use crate::domain::repository::CatalogRepository;

use super::render;

const MENU: &str = "\
Menu
Welcome to your Personal Library Manager!
1. Add a book
2. Remove a book
3. Search for a book
4. Display all books
5. Display statistics
6. Exit
Enter your choice: ";

const SEARCH_BY: &str = "Search by:\n1. Title\n2. Author\nEnter your choice: ";

// =============================================================================
// Public entry point
// =============================================================================

/// メニューループを実行する。Exit選択か入力終端で最終保存して終了する。
pub fn run<R, I, O>(svc: &mut LibraryService<R>, input: I, output: O) -> anyhow::Result<()>
where
    R: CatalogRepository,
    I: BufRead,
    O: Write,
{
    let mut session = Session { svc, input, output };
    session.run()
}

/// メニューの選択肢。前後の空白は無視する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    DisplayAll,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::Search),
            "4" => Some(Self::DisplayAll),
            "5" => Some(Self::Statistics),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// 検索対象の選択。1/2 以外はタイトル・著者の両方を検索する。
pub fn parse_search_fields(input: &str) -> SearchFields {
    match input.trim() {
        "1" => SearchFields::Title,
        "2" => SearchFields::Author,
        _ => SearchFields::Both,
    }
}

// =============================================================================
// Session
// =============================================================================

enum Flow {
    Continue,
    /// 入力が途中で尽きた
    Exit,
}

struct Session<'a, R: CatalogRepository, I, O> {
    svc: &'a mut LibraryService<R>,
    input: I,
    output: O,
}

impl<R, I, O> Session<'_, R, I, O>
where
    R: CatalogRepository,
    I: BufRead,
    O: Write,
{
    fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                break;
            };
            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add_book()?,
                Some(MenuChoice::Remove) => self.remove_book()?,
                Some(MenuChoice::Search) => self.search_books()?,
                Some(MenuChoice::DisplayAll) => self.display_books()?,
                Some(MenuChoice::Statistics) => self.display_statistics()?,
                Some(MenuChoice::Exit) => break,
                None => {
                    writeln!(self.output, "Invalid choice, please try again!\n")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        self.svc.save().context("failed to save library on exit")?;
        writeln!(self.output, "Library saved to file. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_book(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter the book title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter the author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt("Enter the publication year: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(genre) = self.prompt("Enter the genre: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(read) = self.prompt("Have you read this book? (yes/no): ")? else {
            return Ok(Flow::Exit);
        };

        let req = AddBookRequest {
            title,
            author,
            year,
            genre,
            read,
        };
        match self.svc.add(req) {
            Ok(_) => writeln!(self.output, "Book added successfully!\n")?,
            Err(e) => {
                warn!(error = %e, "Add book failed");
                writeln!(self.output, "Error: {e}\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("Enter the title of the book to remove: ")? else {
            return Ok(Flow::Exit);
        };
        match self.svc.remove(&title) {
            Ok(Some(_)) => writeln!(self.output, "Book removed successfully!\n")?,
            Ok(None) => writeln!(self.output, "Book not found!\n")?,
            Err(e) => {
                warn!(error = %e, "Remove book failed");
                writeln!(self.output, "Error: {e}\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> io::Result<Flow> {
        let Some(by) = self.prompt(SEARCH_BY)? else {
            return Ok(Flow::Exit);
        };
        let Some(keyword) = self.prompt("Enter search keyword: ")? else {
            return Ok(Flow::Exit);
        };

        let hits = self.svc.search(&keyword, parse_search_fields(&by));
        let text = if hits.is_empty() {
            "No matching books found.".to_string()
        } else {
            format!("Matching Books:\n{}", render::book_list(hits))
        };
        writeln!(self.output, "{text}\n")?;
        Ok(Flow::Continue)
    }

    fn display_books(&mut self) -> io::Result<Flow> {
        let books = self.svc.list_all();
        let text = if books.is_empty() {
            "Your library is empty!".to_string()
        } else {
            format!("Your Library:\n{}", render::book_list(books))
        };
        writeln!(self.output, "{text}\n")?;
        Ok(Flow::Continue)
    }

    fn display_statistics(&mut self) -> io::Result<Flow> {
        let text = render::statistics(&self.svc.statistics());
        writeln!(self.output, "{text}\n")?;
        Ok(Flow::Continue)
    }

    /// プロンプトを表示して1行読む。入力終端なら `None`。末尾の改行は取り除く。
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
