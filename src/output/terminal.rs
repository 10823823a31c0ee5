//! Terminal renderer: one block per matching user, then a summary line.
//!
//! Status lines carry a colored icon. Record fields are left uncolored so
//! `Name: N/A` is printed literally.

use colored::Colorize;

use crate::fetch::FetchError;
use crate::models::UserRecord;

/// Rule printed under the request preamble.
const RULE: &str = "--------------------------------------------------";

/// Separator printed after each user block.
const SEPARATOR: &str = "------------------------";

/// Renders the pieces of a report.
pub struct TerminalReport;

impl TerminalReport {
    /// Target and constraint, printed before the request is sent.
    pub fn preamble(&self, url: &str, prefix: &str) -> String {
        format!(
            "--- Client: Initiating GET request to {url} ---\n\
             --- Constraint: Filtering for cities starting with '{prefix}' ---\n\
             {RULE}\n"
        )
    }

    /// One matching user, numbered from 1.
    pub fn user_block(&self, index: usize, user: &UserRecord) -> String {
        format!(
            "{}\nName: {}\nUsername: {}\nEmail: {}\nCity: {}\n{SEPARATOR}\n",
            format!("User {index}:").bold(),
            user.name(),
            user.username(),
            user.email(),
            user.city(),
        )
    }

    /// Closing line after all records were considered.
    pub fn summary(&self, displayed: usize, prefix: &str) -> String {
        if displayed == 0 {
            format!(
                "\n{}\n",
                format!("Result: Zero records matched the city filter '{prefix}'.").yellow()
            )
        } else {
            format!(
                "\n{}\n",
                format!("Result: Successfully processed and displayed {displayed} user records.")
                    .green()
            )
        }
    }

    /// The request succeeded but carried no records.
    pub fn empty(&self) -> String {
        format!(
            "{} {}\n",
            "✔".green().bold(),
            "Success, but the API returned an empty list of user records.".green()
        )
    }

    /// The fetch failed; nothing else is printed after this.
    pub fn failure(&self, err: &FetchError) -> String {
        let message = match err {
            FetchError::HttpStatus(code) => {
                format!("ERROR: Received HTTP Status Error: {code}. Request failed.")
            }
            FetchError::Network(detail) => {
                format!("ERROR: Network or Connection Failure. Details: {detail}")
            }
            FetchError::MalformedBody(detail) => {
                format!("ERROR: Malformed response body. Details: {detail}")
            }
        };
        format!("{} {}\n", "✖".red().bold(), message.red())
    }
}
