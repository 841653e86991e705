//! Interactive numbered menu.

use std::io::{self, BufRead, Write};

use crate::inventory::Inventory;

use super::commands::{report_mutation, write_lines};

/// Menu session over arbitrary input and output streams.
///
/// Reads one answer per line. End of input ends the session as if `6` had
/// been chosen, minus the farewell.
pub struct Menu<'a, R, W> {
    inventory: &'a mut Inventory,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Binds a session to `inventory`.
    pub fn new(inventory: &'a mut Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n------ Library Menu ------")?;
            writeln!(self.output, "1. Add Book")?;
            writeln!(self.output, "2. Issue Book")?;
            writeln!(self.output, "3. Return Book")?;
            writeln!(self.output, "4. View All Books")?;
            writeln!(self.output, "5. Search Book")?;
            writeln!(self.output, "6. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.add_book()?,
                "2" => self.issue_book()?,
                "3" => self.return_book()?,
                "4" => self.display_all()?,
                "5" => self.search()?,
                "6" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
        self.output.flush()
    }

    fn add_book(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter author: ")? else {
            return Ok(());
        };
        let Some(isbn) = self.prompt("Enter ISBN: ")? else {
            return Ok(());
        };
        let result = self.inventory.add_book(title, author, isbn);
        report_mutation(&mut self.output, result, "Book added successfully.")
    }

    fn issue_book(&mut self) -> io::Result<()> {
        let Some(isbn) = self.prompt("Enter ISBN to issue: ")? else {
            return Ok(());
        };
        let result = self.inventory.issue(&isbn);
        report_mutation(&mut self.output, result, "Book issued.")
    }

    fn return_book(&mut self) -> io::Result<()> {
        let Some(isbn) = self.prompt("Enter ISBN to return: ")? else {
            return Ok(());
        };
        let result = self.inventory.return_book(&isbn);
        report_mutation(&mut self.output, result, "Book returned.")
    }

    fn display_all(&mut self) -> io::Result<()> {
        let books: Vec<_> = self.inventory.list_all().iter().collect();
        if books.is_empty() {
            writeln!(self.output, "No books in library.")
        } else {
            write_lines(&mut self.output, &books)
        }
    }

    fn search(&mut self) -> io::Result<()> {
        writeln!(self.output, "1. Search by Title")?;
        writeln!(self.output, "2. Search by ISBN")?;
        let Some(choice) = self.prompt("Enter choice: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(title) = self.prompt("Enter title: ")? else {
                    return Ok(());
                };
                let results = self.inventory.search_by_title(&title);
                if results.is_empty() {
                    writeln!(self.output, "No books found.")
                } else {
                    write_lines(&mut self.output, &results)
                }
            }
            "2" => {
                let Some(isbn) = self.prompt("Enter ISBN: ")? else {
                    return Ok(());
                };
                match self.inventory.find_by_isbn(&isbn) {
                    Some(book) => writeln!(self.output, "{book}"),
                    None => writeln!(self.output, "Book not found."),
                }
            }
            _ => writeln!(self.output, "Invalid choice."),
        }
    }

    /// Writes `label` and reads one line without its terminator.
    ///
    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }
}
