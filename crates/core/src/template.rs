//! `{{formatter}}` placeholder templates
//!
//! A template is scanned once: literal text is kept as-is and every
//! `{{identifier}}` is replaced by whatever the resolver returns for that
//! identifier. Resolved text is inserted verbatim and never re-scanned.

use crate::errors::FakerResult;
use regex::Regex;
use std::sync::OnceLock;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{\{\s?(\w+)\s?\}\}").expect("placeholder pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    Literal(&'t str),
    Placeholder(&'t str),
}

/// A parsed template borrowing from its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'t> {
    source: &'t str,
    segments: Vec<Segment<'t>>,
}

impl<'t> Template<'t> {
    pub fn parse(source: &'t str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for captures in placeholder_regex().captures_iter(source) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(&source[last..whole.start()]));
            }
            segments.push(Segment::Placeholder(name.as_str()));
            last = whole.end();
        }

        if last < source.len() {
            segments.push(Segment::Literal(&source[last..]));
        }

        Self { source, segments }
    }

    pub fn source(&self) -> &'t str {
        self.source
    }

    pub fn segments(&self) -> &[Segment<'t>] {
        &self.segments
    }

    /// Identifiers referenced by the template, in order of appearance
    pub fn placeholders(&self) -> Vec<&'t str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(*name),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Placeholder(_)))
    }

    /// Substitute every placeholder with `resolve(identifier)`
    ///
    /// Stops at the first resolver error.
    pub fn render<F>(&self, mut resolve: F) -> FakerResult<String>
    where
        F: FnMut(&str) -> FakerResult<String>,
    {
        let mut output = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => output.push_str(&resolve(name)?),
            }
        }
        Ok(output)
    }
}

/// Parse and render `template` in one call
pub fn evaluate<F>(template: &str, resolve: F) -> FakerResult<String>
where
    F: FnMut(&str) -> FakerResult<String>,
{
    Template::parse(template).render(resolve)
}
