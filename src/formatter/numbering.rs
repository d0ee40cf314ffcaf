use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{PlacementOptions, Segment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSegment<'h> {
    pub segment: Segment<'h>,
    pub existing_number: Option<u64>,
    pub assigned_number: u64,
    pub residual: &'h str,
}

#[derive(Debug)]
pub struct NumberingResolver {
    leading_number: Regex,
}

impl NumberingResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            leading_number: Regex::new(r"^(\d+)\s*")
                .context("failed to compile leading number regex")?,
        })
    }

    pub fn resolve<'h>(
        &self,
        segments: impl IntoIterator<Item = Segment<'h>>,
        options: &PlacementOptions,
    ) -> Vec<ResolvedSegment<'h>> {
        let mut counter = options.start_index.max(1);

        segments
            .into_iter()
            .map(|segment| {
                let (existing_number, residual) = self.split_leading_number(segment.text);

                let assigned_number = match existing_number {
                    // Preserved numbers leave the counter alone; collisions are not checked.
                    Some(number) if !options.force_renumber => number,
                    _ => {
                        let next = counter;
                        counter = counter.saturating_add(1);
                        next
                    }
                };

                ResolvedSegment {
                    segment,
                    existing_number,
                    assigned_number,
                    residual,
                }
            })
            .collect()
    }

    pub fn split_leading_number<'h>(&self, text: &'h str) -> (Option<u64>, &'h str) {
        let text = text.trim();

        let Some(captures) = self.leading_number.captures(text) else {
            return (None, text);
        };

        let (Some(whole), Some(digits)) = (captures.get(0), captures.get(1)) else {
            return (None, text);
        };

        match digits.as_str().parse::<u64>() {
            Ok(number) => (Some(number), &text[whole.end()..]),
            Err(_) => (None, text),
        }
    }
}
