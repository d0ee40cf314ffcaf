use anyhow::Result;
use tracing::{info, warn};

use crate::cli::FormatArgs;
use crate::formatter::Formatter;
use crate::model::{FormatOutcome, FormatRunReport, PlacementOptions, WarningKind};
use crate::util::{
    now_utc_string, read_input, sha256_hex, write_json_pretty, write_json_stdout,
    write_text_file, write_text_stdout,
};

const REPORT_MANIFEST_VERSION: u32 = 1;

pub fn run(args: FormatArgs) -> Result<()> {
    let raw = read_input(args.input.as_deref())?;
    let options = PlacementOptions {
        start_index: args.start_index,
        force_renumber: args.force_renumber,
        placement_mode: args.placement_mode,
    };

    let formatter = Formatter::new()?;
    let outcome = formatter.process(&raw, &options);

    info!(
        parts = outcome.segment_count,
        start_index = options.start_index,
        strategy = outcome.strategy.as_str(),
        placement_mode = options.placement_mode.as_str(),
        force_renumber = options.force_renumber,
        "detected parts"
    );

    for warning in &outcome.warnings {
        match warning.kind {
            WarningKind::EmptyInput => warn!("{warning}"),
            WarningKind::SuspectUrl => warn!(line = %warning.line, "check url for appended number"),
        }
    }

    if let Some(path) = &args.output {
        write_text_file(path, &outcome.formatted_text)?;
        info!(
            path = %path.display(),
            bytes = outcome.formatted_text.len(),
            "wrote formatted prompts"
        );
    }

    if let Some(path) = &args.report_path {
        let report = build_report(&args, &raw, &options, &outcome);
        write_json_pretty(path, &report)?;
        info!(path = %path.display(), "wrote format run report");
    }

    if args.json {
        write_json_stdout(&outcome)
    } else {
        write_text_stdout(&outcome.formatted_text)
    }
}

fn build_report(
    args: &FormatArgs,
    raw: &str,
    options: &PlacementOptions,
    outcome: &FormatOutcome,
) -> FormatRunReport {
    let preserved_number_count = if options.force_renumber {
        0
    } else {
        outcome
            .segments
            .iter()
            .filter(|segment| segment.existing_number.is_some())
            .count()
    };

    FormatRunReport {
        manifest_version: REPORT_MANIFEST_VERSION,
        generated_at: now_utc_string(),
        input_path: args.input.as_ref().map(|path| path.display().to_string()),
        input_sha256: sha256_hex(raw.as_bytes()),
        output_path: args.output.as_ref().map(|path| path.display().to_string()),
        output_sha256: sha256_hex(outcome.formatted_text.as_bytes()),
        options: *options,
        strategy: outcome.strategy,
        segment_count: outcome.segment_count,
        preserved_number_count,
        url_segment_count: outcome
            .segments
            .iter()
            .filter(|segment| segment.url.is_some())
            .count(),
        warnings: outcome.warnings.iter().map(ToString::to_string).collect(),
    }
}
