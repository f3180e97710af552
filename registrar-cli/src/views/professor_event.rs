//! Professor event menu
//!
//! Every operation is scoped to a professor, so the professor id is asked
//! first.

use std::io::{self, BufRead, Write};

use registrar_common::{ProfessorEvent, ProfessorEventInput};

use super::{read_id, read_optional_text, read_text, CRUD_OPTIONS};
use crate::console::INVALID_CHOICE;
use crate::{ApiClient, Console};

pub async fn professor_event_menu<R: BufRead, W: Write>(
    client: &ApiClient,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = console.choose("Professor Event Menu", &CRUD_OPTIONS)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(professor_id) = read_id(console, "Enter Professor ID: ")? else {
                    continue;
                };
                let result = client
                    .get::<Vec<ProfessorEvent>>(&format!("/events/{}", professor_id))
                    .await;
                console.report(
                    "All Professor Events:",
                    "Error fetching professor events:",
                    result,
                )?;
            }
            "2" => {
                let Some((professor_id, event_id)) = read_event_key(console)? else {
                    continue;
                };
                let result = client
                    .get::<ProfessorEvent>(&format!("/events/{}/{}", professor_id, event_id))
                    .await;
                console.report("Professor Event:", "Error fetching professor event:", result)?;
            }
            "3" => {
                let Some(professor_id) = read_id(console, "Enter Professor ID: ")? else {
                    continue;
                };
                let Some(input) = read_event(console)? else {
                    continue;
                };
                let result = client
                    .post::<_, ProfessorEvent>(&format!("/events/{}", professor_id), &input)
                    .await;
                console.report(
                    "Inserted Professor Event:",
                    "Error inserting professor event:",
                    result,
                )?;
            }
            "4" => {
                let Some((professor_id, event_id)) = read_event_key(console)? else {
                    continue;
                };
                let Some(input) = read_event(console)? else {
                    continue;
                };
                let result = client
                    .put::<_, ProfessorEvent>(
                        &format!("/events/{}/{}", professor_id, event_id),
                        &input,
                    )
                    .await;
                console.report(
                    "Updated Professor Event:",
                    "Error updating professor event:",
                    result,
                )?;
            }
            "5" => {
                let Some((professor_id, event_id)) = read_event_key(console)? else {
                    continue;
                };
                match client
                    .delete(&format!("/events/{}/{}", professor_id, event_id))
                    .await
                {
                    Ok(()) => console.println(format!("Professor Event {} deleted.", event_id))?,
                    Err(e) => console.print_error("Error deleting professor event:", &e)?,
                }
            }
            "0" => return Ok(()),
            _ => console.println(INVALID_CHOICE)?,
        }
    }
}

fn read_event_key<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<(i64, i64)>> {
    let Some(professor_id) = read_id(console, "Enter Professor ID: ")? else {
        return Ok(None);
    };
    let Some(event_id) = read_id(console, "Enter Event ID: ")? else {
        return Ok(None);
    };
    Ok(Some((professor_id, event_id)))
}

/// `None` at end of input
fn read_event<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<ProfessorEventInput>> {
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

    Ok(Some(ProfessorEventInput {
        title: Some(title),
        description,
        start_date,
        end_date,
    }))
}
