mod insert;
mod numbering;
mod segment;
mod validate;

use anyhow::Result;
use tracing::debug;

use crate::model::{
    CheckOutcome, FormatOutcome, PlacementOptions, ProcessedSegment, SegmentStrategy, Warning,
};

pub(crate) use insert::Inserter;
pub(crate) use numbering::NumberingResolver;
pub(crate) use segment::Segmenter;
pub(crate) use validate::Validator;

const SEGMENT_SEPARATOR: &str = "\n\n";

#[derive(Debug)]
pub struct Formatter {
    segmenter: Segmenter,
    resolver: NumberingResolver,
    inserter: Inserter,
    validator: Validator,
}

impl Formatter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            resolver: NumberingResolver::new()?,
            inserter: Inserter::new()?,
            validator: Validator::new()?,
        })
    }

    pub fn process(&self, raw: &str, options: &PlacementOptions) -> FormatOutcome {
        let segments = self.segmenter.segments(raw);
        let strategy = segments.strategy();
        let resolved = self.resolver.resolve(segments, options);

        debug!(
            strategy = strategy.as_str(),
            segments = resolved.len(),
            "segmented input"
        );

        if resolved.is_empty() {
            return FormatOutcome {
                strategy: SegmentStrategy::Empty,
                formatted_text: String::new(),
                segment_count: 0,
                segments: Vec::new(),
                warnings: vec![Warning::empty_input()],
            };
        }

        let segments = resolved
            .into_iter()
            .map(|resolved| {
                let insertion = self.inserter.insert(
                    resolved.residual,
                    resolved.assigned_number,
                    options.placement_mode,
                );

                ProcessedSegment {
                    ordinal: resolved.segment.ordinal,
                    assigned_number: resolved.assigned_number,
                    existing_number: resolved.existing_number,
                    marker_number: resolved.segment.marker_number,
                    url: insertion.url.map(ToOwned::to_owned),
                    formatted_text: insertion.text,
                }
            })
            .collect::<Vec<ProcessedSegment>>();

        let formatted_text = segments
            .iter()
            .map(|segment| segment.formatted_text.as_str())
            .collect::<Vec<&str>>()
            .join(SEGMENT_SEPARATOR);
        let warnings = self.validator.validate(&formatted_text);

        FormatOutcome {
            strategy,
            formatted_text,
            segment_count: segments.len(),
            segments,
            warnings,
        }
    }

    pub fn check(&self, text: &str) -> CheckOutcome {
        CheckOutcome {
            line_count: text.lines().count(),
            warnings: self.validator.validate(text),
        }
    }
}
