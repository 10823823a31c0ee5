//! The fetch → filter → report procedure.

use std::io::{self, Write};

use tracing::debug;

use crate::fetch::{FetchError, UserSource};
use crate::filter::CityFilter;
use crate::output::TerminalReport;

/// What a run ended with.
#[derive(Debug)]
pub enum RunOutcome {
    /// Records were received and filtered. `displayed` may be zero.
    Reported { received: usize, displayed: usize },
    /// The request succeeded with an empty list.
    Empty,
    /// The request failed; the failure has been printed.
    Failed(FetchError),
}

impl RunOutcome {
    /// Whether the fetch failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failed(_))
    }
}

/// Fetch every record from `source`, print those `filter` accepts, and
/// finish with a summary.
///
/// Fetch failures are printed and returned as [`RunOutcome::Failed`], never
/// as `Err`; the only error is failing to write to `out`.
pub async fn run<S, W>(source: &S, filter: &CityFilter, out: &mut W) -> io::Result<RunOutcome>
where
    S: UserSource + ?Sized,
    W: Write,
{
    let report = TerminalReport;

    write!(out, "{}", report.preamble(source.describe(), filter.prefix()))?;
    out.flush()?;

    let users = match source.fetch_users().await {
        Ok(users) => users,
        Err(err) => {
            write!(out, "{}", report.failure(&err))?;
            return Ok(RunOutcome::Failed(err));
        }
    };

    if users.is_empty() {
        write!(out, "{}", report.empty())?;
        return Ok(RunOutcome::Empty);
    }

    let mut displayed = 0;
    for user in filter.apply(&users) {
        displayed += 1;
        write!(out, "{}", report.user_block(displayed, user))?;
    }

    debug!(received = users.len(), displayed, prefix = filter.prefix(), "filter applied");
    write!(out, "{}", report.summary(displayed, filter.prefix()))?;

    Ok(RunOutcome::Reported {
        received: users.len(),
        displayed,
    })
}
