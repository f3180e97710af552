//! Course menu

use std::io::{self, BufRead, Write};

use registrar_common::{Course, CourseInput};

use super::{read_id, read_optional_id, read_optional_text, read_text, CRUD_OPTIONS};
use crate::console::INVALID_CHOICE;
use crate::{ApiClient, Console};

pub async fn course_menu<R: BufRead, W: Write>(
    client: &ApiClient,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = console.choose("Course Menu", &CRUD_OPTIONS)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let result = client.get::<Vec<Course>>("/courses").await;
                console.report("All Courses:", "Error fetching courses:", result)?;
            }
            "2" => {
                let Some(id) = read_id(console, "Enter Course ID: ")? else {
                    continue;
                };
                let result = client.get::<Course>(&format!("/courses/{}", id)).await;
                console.report("Course:", "Error fetching course:", result)?;
            }
            "3" => {
                let Some(input) = read_course(console)? else {
                    continue;
                };
                let result = client.post::<_, Course>("/courses", &input).await;
                console.report("Inserted Course:", "Error inserting course:", result)?;
            }
            "4" => {
                let Some(id) = read_id(console, "Enter Course ID to update: ")? else {
                    continue;
                };
                let Some(input) = read_course(console)? else {
                    continue;
                };
                let result = client
                    .put::<_, Course>(&format!("/courses/{}", id), &input)
                    .await;
                console.report("Updated Course:", "Error updating course:", result)?;
            }
            "5" => {
                let Some(id) = read_id(console, "Enter Course ID to delete: ")? else {
                    continue;
                };
                match client.delete(&format!("/courses/{}", id)).await {
                    Ok(()) => console.println(format!("Course {} deleted.", id))?,
                    Err(e) => console.print_error("Error deleting course:", &e)?,
                }
            }
            "0" => return Ok(()),
            _ => console.println(INVALID_CHOICE)?,
        }
    }
}

/// `None` at end of input or when the career id was not a number
fn read_course<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<CourseInput>> {
    let Some(name) = read_text(console, "Name: ")? else {
        return Ok(None);
    };
    let Some(description) = read_optional_text(console, "Description: ")? else {
        return Ok(None);
    };
    let Some(career_id) = read_optional_id(console, "Career ID (blank for none): ")? else {
        return Ok(None);
    };

    Ok(Some(CourseInput {
        name: Some(name),
        description,
        career_id,
    }))
}
