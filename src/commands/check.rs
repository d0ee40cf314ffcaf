use anyhow::Result;
use tracing::{info, warn};

use crate::cli::CheckArgs;
use crate::formatter::Formatter;
use crate::util::{read_input, write_json_stdout, write_text_stdout};

pub fn run(args: CheckArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let outcome = Formatter::new()?.check(&text);

    for warning in &outcome.warnings {
        warn!(line = %warning.line, "check url for appended number");
    }
    info!(
        lines = outcome.line_count,
        flagged = outcome.warnings.len(),
        "url check completed"
    );

    if args.json {
        return write_json_stdout(&outcome);
    }

    let flagged = outcome
        .warnings
        .iter()
        .map(|warning| warning.line.as_str())
        .collect::<Vec<&str>>()
        .join("\n");
    write_text_stdout(&flagged)
}
