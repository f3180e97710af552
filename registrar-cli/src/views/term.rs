//! Term menu

use std::io::{self, BufRead, Write};

use registrar_common::{Term, TermInput};

use super::{read_id, read_optional_text, read_text, CRUD_OPTIONS};
use crate::console::INVALID_CHOICE;
use crate::{ApiClient, Console};

pub async fn term_menu<R: BufRead, W: Write>(
    client: &ApiClient,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = console.choose("Term Menu", &CRUD_OPTIONS)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let result = client.get::<Vec<Term>>("/terms").await;
                console.report("All Terms:", "Error fetching terms:", result)?;
            }
            "2" => {
                let Some(id) = read_id(console, "Enter Term ID: ")? else {
                    continue;
                };
                let result = client.get::<Term>(&format!("/terms/{}", id)).await;
                console.report("Term:", "Error fetching term:", result)?;
            }
            "3" => {
                let Some(input) = read_term(console)? else {
                    continue;
                };
                let result = client.post::<_, Term>("/terms", &input).await;
                console.report("Inserted Term:", "Error inserting term:", result)?;
            }
            "4" => {
                let Some(id) = read_id(console, "Enter Term ID to update: ")? else {
                    continue;
                };
                let Some(input) = read_term(console)? else {
                    continue;
                };
                let result = client.put::<_, Term>(&format!("/terms/{}", id), &input).await;
                console.report("Updated Term:", "Error updating term:", result)?;
            }
            "5" => {
                let Some(id) = read_id(console, "Enter Term ID to delete: ")? else {
                    continue;
                };
                match client.delete(&format!("/terms/{}", id)).await {
                    Ok(()) => console.println(format!("Term {} deleted.", id))?,
                    Err(e) => console.print_error("Error deleting term:", &e)?,
                }
            }
            "0" => return Ok(()),
            _ => console.println(INVALID_CHOICE)?,
        }
    }
}

/// `None` at end of input
fn read_term<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<TermInput>> {
    let Some(title) = read_text(console, "Title: ")? else {
        return Ok(None);
    };
    let Some(description) = read_optional_text(console, "Description: ")? else {
        return Ok(None);
    };
    let Some(start_date) = read_optional_text(console, "Start Date (YYYY-MM-DD): ")? else {
        return Ok(None);
    };
    let Some(end_date) = read_optional_text(console, "End Date (YYYY-MM-DD): ")? else {
        return Ok(None);
    };

    Ok(Some(TermInput {
        title: Some(title),
        description,
        start_date,
        end_date,
    }))
}
