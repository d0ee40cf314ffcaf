use anyhow::{Context, Result};
use regex::{CaptureMatches, Captures, Regex, Split};

use crate::model::{Segment, SegmentStrategy};

#[derive(Debug)]
pub struct Segmenter {
    first_marker: Regex,
    line_marker: Regex,
    blank_run: Regex,
}

impl Segmenter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            first_marker: Regex::new(r"(?i)Part\s*(\d+)\s*:")
                .context("failed to compile part marker regex")?,
            line_marker: Regex::new(r"(?i)\nPart\s*(\d+)\s*:")
                .context("failed to compile line-start part marker regex")?,
            blank_run: Regex::new(r"\r?\n(?:[ \t]*\r?\n)+")
                .context("failed to compile blank-line separator regex")?,
        })
    }

    pub fn strategy_for(&self, raw: &str) -> SegmentStrategy {
        if raw.trim().is_empty() {
            return SegmentStrategy::Empty;
        }

        if self.first_marker.is_match(raw) {
            return SegmentStrategy::Markers;
        }

        // A single block is no better than the line fallback.
        let has_two_blocks = self
            .blank_run
            .split(raw)
            .filter(|chunk| !chunk.trim().is_empty())
            .nth(1)
            .is_some();

        if has_two_blocks {
            SegmentStrategy::BlankLineBlocks
        } else {
            SegmentStrategy::Lines
        }
    }

    pub fn segments<'s, 'h>(&'s self, raw: &'h str) -> Segments<'s, 'h> {
        let strategy = self.strategy_for(raw);

        let pieces = match strategy {
            SegmentStrategy::Empty => Pieces::Done,
            SegmentStrategy::Markers => match self.first_marker.captures(raw) {
                Some(first) => {
                    let base = first.get(0).map(|m| m.end()).unwrap_or(raw.len());
                    Pieces::Markers(MarkerPieces {
                        haystack: raw,
                        base,
                        pending: Some((base, marker_number(&first))),
                        boundaries: self.line_marker.captures_iter(&raw[base..]),
                    })
                }
                None => Pieces::Done,
            },
            SegmentStrategy::BlankLineBlocks => Pieces::Blocks(self.blank_run.split(raw)),
            SegmentStrategy::Lines => Pieces::Lines(raw.lines()),
        };

        Segments {
            strategy,
            pieces,
            emitted: 0,
        }
    }
}

#[derive(Debug)]
pub struct Segments<'s, 'h> {
    strategy: SegmentStrategy,
    pieces: Pieces<'s, 'h>,
    emitted: usize,
}

impl Segments<'_, '_> {
    pub fn strategy(&self) -> SegmentStrategy {
        self.strategy
    }
}

impl<'h> Iterator for Segments<'_, 'h> {
    type Item = Segment<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        let (marker_number, text) = match &mut self.pieces {
            Pieces::Markers(markers) => markers.next()?,
            Pieces::Blocks(blocks) => (None, next_non_empty(blocks)?),
            Pieces::Lines(lines) => (None, next_non_empty(lines)?),
            Pieces::Done => return None,
        };

        self.emitted += 1;
        Some(Segment {
            ordinal: self.emitted,
            marker_number,
            text,
        })
    }
}

#[derive(Debug)]
enum Pieces<'s, 'h> {
    Markers(MarkerPieces<'s, 'h>),
    Blocks(Split<'s, 'h>),
    Lines(std::str::Lines<'h>),
    Done,
}

// After the first marker, only markers that open a line end a segment.
#[derive(Debug)]
struct MarkerPieces<'s, 'h> {
    haystack: &'h str,
    base: usize,
    pending: Option<(usize, Option<u64>)>,
    boundaries: CaptureMatches<'s, 'h>,
}

impl<'h> Iterator for MarkerPieces<'_, 'h> {
    type Item = (Option<u64>, &'h str);

    fn next(&mut self) -> Option<Self::Item> {
        let (start, number) = self.pending.take()?;

        let end = match self.boundaries.next() {
            Some(captures) => {
                let whole = captures.get(0)?;
                self.pending = Some((self.base + whole.end(), marker_number(&captures)));
                self.base + whole.start()
            }
            None => self.haystack.len(),
        };

        Some((number, self.haystack[start..end].trim()))
    }
}

fn marker_number(captures: &Captures<'_>) -> Option<u64> {
    captures
        .get(1)
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}

fn next_non_empty<'h>(chunks: &mut impl Iterator<Item = &'h str>) -> Option<&'h str> {
    chunks.map(str::trim).find(|chunk| !chunk.is_empty())
}
