use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementMode {
    #[default]
    NewlineAfterUrl,
    AppendToUrlEnd,
}

impl PlacementMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewlineAfterUrl => "newline-after-url",
            Self::AppendToUrlEnd => "append-to-url-end",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlacementOptions {
    pub start_index: u64,
    pub force_renumber: bool,
    pub placement_mode: PlacementMode,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            start_index: 1,
            force_renumber: false,
            placement_mode: PlacementMode::NewlineAfterUrl,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStrategy {
    Markers,
    BlankLineBlocks,
    Lines,
    Empty,
}

impl SegmentStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markers => "markers",
            Self::BlankLineBlocks => "blank_line_blocks",
            Self::Lines => "lines",
            Self::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub ordinal: usize,
    pub marker_number: Option<u64>,
    pub text: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedSegment {
    pub ordinal: usize,
    pub assigned_number: u64,
    pub existing_number: Option<u64>,
    pub marker_number: Option<u64>,
    pub url: Option<String>,
    pub formatted_text: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    EmptyInput,
    SuspectUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub line: String,
}

pub const EMPTY_INPUT_ADVISORY: &str =
    "No input found. Paste your prompt list or load the example.";

impl Warning {
    pub fn empty_input() -> Self {
        Self {
            kind: WarningKind::EmptyInput,
            line: EMPTY_INPUT_ADVISORY.to_string(),
        }
    }

    pub fn suspect_url(line: &str) -> Self {
        Self {
            kind: WarningKind::SuspectUrl,
            line: line.to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::EmptyInput => f.write_str(&self.line),
            WarningKind::SuspectUrl => write!(
                f,
                "URL appears to have a number appended to its query string: {}",
                self.line
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatOutcome {
    pub strategy: SegmentStrategy,
    pub formatted_text: String,
    pub segment_count: usize,
    pub segments: Vec<ProcessedSegment>,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub line_count: usize,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormatRunReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub input_path: Option<String>,
    pub input_sha256: String,
    pub output_path: Option<String>,
    pub output_sha256: String,
    pub options: PlacementOptions,
    pub strategy: SegmentStrategy,
    pub segment_count: usize,
    pub preserved_number_count: usize,
    pub url_segment_count: usize,
    pub warnings: Vec<String>,
}
