use anyhow::{Context, Result};
use regex::Regex;

use crate::model::Warning;

#[derive(Debug)]
pub struct Validator {
    appended_digits: Regex,
}

impl Validator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            appended_digits: Regex::new(r"\?\S*\d{1,3}$")
                .context("failed to compile appended-digits regex")?,
        })
    }

    pub fn validate(&self, output: &str) -> Vec<Warning> {
        output
            .lines()
            .map(str::trim)
            .filter(|line| self.is_suspect(line))
            .map(Warning::suspect_url)
            .collect()
    }

    fn is_suspect(&self, line: &str) -> bool {
        line.starts_with("http") && self.appended_digits.is_match(line)
    }
}
