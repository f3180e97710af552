//! Per-entity sub-menus
//!
//! Each view loops on its own menu until `0` or end of input, then hands
//! control back to the main menu.

pub mod career;
pub mod course;
pub mod professor;
pub mod professor_event;
pub mod term;

pub use career::career_menu;
pub use course::course_menu;
pub use professor::professor_menu;
pub use professor_event::professor_event_menu;
pub use term::term_menu;

use std::io::{self, BufRead, Write};

use crate::Console;

pub(crate) const CRUD_OPTIONS: [&str; 6] = [
    "1. Get All",
    "2. Get by ID",
    "3. Insert",
    "4. Update by ID",
    "5. Delete by ID",
    "0. Return",
];

/// Prompt for an integer id; prints `Invalid ID` and yields `None` when it doesn't parse
pub(crate) fn read_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> io::Result<Option<i64>> {
    let Some(raw) = console.read_line(prompt)? else {
        return Ok(None);
    };

    match raw.trim().parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            console.println("Invalid ID")?;
            Ok(None)
        }
    }
}

/// Required text: sent as typed, even when empty, so the server validates it.
/// `None` at end of input.
pub(crate) fn read_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> io::Result<Option<String>> {
    Ok(console.read_line(prompt)?.map(|s| s.trim().to_string()))
}

/// Optional text: outer `None` at end of input, inner `None` when left blank
pub(crate) fn read_optional_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> io::Result<Option<Option<String>>> {
    Ok(read_text(console, prompt)?.map(|s| Some(s).filter(|s| !s.is_empty())))
}

/// Optional id: inner `None` when left blank; outer `None` at end of input or
/// when the answer is not a number (after printing `Invalid ID`)
pub(crate) fn read_optional_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> io::Result<Option<Option<i64>>> {
    let Some(answer) = read_optional_text(console, prompt)? else {
        return Ok(None);
    };
    let Some(raw) = answer else {
        return Ok(Some(None));
    };

    match raw.parse::<i64>() {
        Ok(id) => Ok(Some(Some(id))),
        Err(_) => {
            console.println("Invalid ID")?;
            Ok(None)
        }
    }
}
