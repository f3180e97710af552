//! Main menu

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::console::INVALID_CHOICE;
use crate::views::{career_menu, course_menu, professor_event_menu, professor_menu, term_menu};
use crate::{ApiClient, Console};

const OPTIONS: [&str; 6] = [
    "1. Career",
    "2. Course",
    "3. Professor",
    "4. Professor Event",
    "5. Term",
    "0. Exit",
];

/// Run the menu loop until `0` or end of input
pub async fn run_main_menu<R: BufRead, W: Write>(
    client: &ApiClient,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        let Some(choice) = console.choose("Main Menu", &OPTIONS)? else {
            debug!("End of input");
            break;
        };

        match choice.as_str() {
            "1" => career_menu(client, console).await?,
            "2" => course_menu(client, console).await?,
            "3" => professor_menu(client, console).await?,
            "4" => professor_event_menu(client, console).await?,
            "5" => term_menu(client, console).await?,
            "0" => break,
            _ => console.println(INVALID_CHOICE)?,
        }
    }

    console.println("Goodbye!")
}
