// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line template for task log files.
//!
//! Placeholders are written `{name}`; `{{` and `}}` are literal braces.
//! Known names: `timestamp`, `level`, `target`, `file`, `line`, `message`.
//! The logging-module spellings `asctime`, `levelname`, `name`,
//! `filename` and `lineno` are accepted as aliases. Anything else is
//! kept verbatim.

use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Timestamp,
    Level,
    Target,
    File,
    Line,
    Message,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "timestamp" | "asctime" => Some(Field::Timestamp),
            "level" | "levelname" => Some(Field::Level),
            "target" | "name" => Some(Field::Target),
            "file" | "filename" => Some(Field::File),
            "line" | "lineno" => Some(Field::Line),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed line template, usable as a `fmt` layer event formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTemplate {
    segments: Vec<Segment>,
}

impl LogTemplate {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    match Field::from_name(name.trim()).filter(|_| closed) {
                        Some(field) => {
                            if !literal.is_empty() {
                                segments.push(Segment::Literal(std::mem::take(&mut literal)));
                            }
                            segments.push(Segment::Field(field));
                        }
                        None => {
                            literal.push('{');
                            literal.push_str(&name);
                            if closed {
                                literal.push('}');
                            }
                        }
                    }
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }
}

impl<S, N> FormatEvent<S, N> for LogTemplate
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => writer.write_str(text)?,
                Segment::Field(Field::Timestamp) => write!(
                    writer,
                    "{}",
                    chrono::Local::now().format(TIMESTAMP_FORMAT)
                )?,
                Segment::Field(Field::Level) => write!(writer, "{}", metadata.level())?,
                Segment::Field(Field::Target) => writer.write_str(metadata.target())?,
                Segment::Field(Field::File) => {
                    writer.write_str(metadata.file().unwrap_or("<unknown>"))?
                }
                Segment::Field(Field::Line) => match metadata.line() {
                    Some(line) => write!(writer, "{line}")?,
                    None => writer.write_str("0")?,
                },
                Segment::Field(Field::Message) => {
                    ctx.field_format().format_fields(writer.by_ref(), event)?
                }
            }
        }
        writeln!(writer)
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
