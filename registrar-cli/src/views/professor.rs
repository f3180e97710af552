//! Professor menu

use std::io::{self, BufRead, Write};

use registrar_common::{Professor, ProfessorInput};

use super::{read_id, read_optional_text, read_text, CRUD_OPTIONS};
use crate::console::INVALID_CHOICE;
use crate::{ApiClient, Console};

pub async fn professor_menu<R: BufRead, W: Write>(
    client: &ApiClient,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = console.choose("Professor Menu", &CRUD_OPTIONS)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let result = client.get::<Vec<Professor>>("/professors").await;
                console.report("All Professors:", "Error fetching professors:", result)?;
            }
            "2" => {
                let Some(id) = read_id(console, "Enter Professor ID: ")? else {
                    continue;
                };
                let result = client.get::<Professor>(&format!("/professors/{}", id)).await;
                console.report("Professor:", "Error fetching professor:", result)?;
            }
            "3" => {
                let Some(input) = read_professor(console)? else {
                    continue;
                };
                let result = client.post::<_, Professor>("/professors", &input).await;
                console.report("Inserted Professor:", "Error inserting professor:", result)?;
            }
            "4" => {
                let Some(id) = read_id(console, "Enter Professor ID to update: ")? else {
                    continue;
                };
                let Some(input) = read_professor(console)? else {
                    continue;
                };
                let result = client
                    .put::<_, Professor>(&format!("/professors/{}", id), &input)
                    .await;
                console.report("Updated Professor:", "Error updating professor:", result)?;
            }
            "5" => {
                let Some(id) = read_id(console, "Enter Professor ID to delete: ")? else {
                    continue;
                };
                match client.delete(&format!("/professors/{}", id)).await {
                    Ok(()) => console.println(format!("Professor {} deleted.", id))?,
                    Err(e) => console.print_error("Error deleting professor:", &e)?,
                }
            }
            "0" => return Ok(()),
            _ => console.println(INVALID_CHOICE)?,
        }
    }
}

fn read_professor<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<ProfessorInput>> {
    let Some(first_name) = read_text(console, "First Name: ")? else {
        return Ok(None);
    };
    let Some(last_name) = read_optional_text(console, "Last Name: ")? else {
        return Ok(None);
    };

    Ok(Some(ProfessorInput {
        first_name: Some(first_name),
        last_name,
    }))
}
