use anyhow::{Context, Result};
use regex::Regex;

use crate::model::PlacementMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion<'h> {
    pub text: String,
    pub url: Option<&'h str>,
}

#[derive(Debug)]
pub struct Inserter {
    url: Regex,
}

impl Inserter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            url: Regex::new(r"https?://\S+").context("failed to compile url regex")?,
        })
    }

    pub fn insert<'h>(&self, residual: &'h str, number: u64, mode: PlacementMode) -> Insertion<'h> {
        let Some(found) = self.url.find(residual) else {
            return Insertion {
                text: format!("{number}{residual}"),
                url: None,
            };
        };

        let prefix = &residual[..found.start()];
        let url = found.as_str();
        let suffix = residual[found.end()..].trim_start();

        let text = match mode {
            PlacementMode::NewlineAfterUrl => format!("{prefix}{url}\n{number}{suffix}"),
            PlacementMode::AppendToUrlEnd => format!("{prefix}{url}{number}{suffix}"),
        };

        Insertion {
            text,
            url: Some(url),
        }
    }
}
