//! Career menu

use std::io::{self, BufRead, Write};

use registrar_common::{Career, CareerInput, Course};

use super::{read_id, read_optional_text, read_text};
use crate::console::INVALID_CHOICE;
use crate::{ApiClient, Console};

const OPTIONS: [&str; 7] = [
    "1. Get All",
    "2. Get by ID",
    "3. Insert",
    "4. Update by ID",
    "5. Delete by ID",
    "6. Get Courses by Career",
    "0. Return",
];

pub async fn career_menu<R: BufRead, W: Write>(
    client: &ApiClient,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = console.choose("Career Menu", &OPTIONS)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let result = client.get::<Vec<Career>>("/careers").await;
                console.report("All Careers:", "Error fetching careers:", result)?;
            }
            "2" => {
                let Some(id) = read_id(console, "Enter Career ID: ")? else {
                    continue;
                };
                let result = client.get::<Career>(&format!("/careers/{}", id)).await;
                console.report("Career:", "Error fetching career:", result)?;
            }
            "3" => {
                let Some(input) = read_career(console)? else {
                    continue;
                };
                let result = client.post::<_, Career>("/careers", &input).await;
                console.report("Inserted Career:", "Error inserting career:", result)?;
            }
            "4" => {
                let Some(id) = read_id(console, "Enter Career ID to update: ")? else {
                    continue;
                };
                let Some(input) = read_career(console)? else {
                    continue;
                };
                let result = client
                    .put::<_, Career>(&format!("/careers/{}", id), &input)
                    .await;
                console.report("Updated Career:", "Error updating career:", result)?;
            }
            "5" => {
                let Some(id) = read_id(console, "Enter Career ID to delete: ")? else {
                    continue;
                };
                match client.delete(&format!("/careers/{}", id)).await {
                    Ok(()) => console.println(format!("Career {} deleted.", id))?,
                    Err(e) => console.print_error("Error deleting career:", &e)?,
                }
            }
            "6" => {
                let Some(id) = read_id(console, "Enter Career ID: ")? else {
                    continue;
                };
                let result = client
                    .get::<Vec<Course>>(&format!("/careers/{}/courses", id))
                    .await;
                console.report(
                    &format!("Courses for Career {}:", id),
                    "Error fetching courses by career:",
                    result,
                )?;
            }
            "0" => return Ok(()),
            _ => console.println(INVALID_CHOICE)?,
        }
    }
}

/// `None` at end of input; nothing is sent then
fn read_career<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<CareerInput>> {
    let Some(name) = read_text(console, "Name: ")? else {
        return Ok(None);
    };
    let Some(description) = read_optional_text(console, "Description: ")? else {
        return Ok(None);
    };

    Ok(Some(CareerInput {
        name: Some(name),
        description,
    }))
}
