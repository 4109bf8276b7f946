//! Turns a [`PoemResult`] into the named result views.
//!
//! Only the heuristic view shows full per-line detail. The comparison view
//! repeats the same meter in every tool column, so identical input always
//! yields identical meters across views.

use crate::core::summary::{summarize, MeterSummary};
use crate::domain::model::PoemResult;
use crate::utils::error::{Result, ScanError};
use serde::Serialize;
use std::fmt::Write as _;

pub const NO_RESULTS: &str = "No results returned from the scansion service.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum View {
    /// Line text, meter and annotated rendering.
    #[cfg_attr(feature = "cli", value(name = "prosodic"))]
    Heuristic,
    PoetryTools,
    #[cfg_attr(feature = "cli", value(name = "zeuscansion"))]
    ZeuScansion,
    Comparison,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Heuristic,
        View::PoetryTools,
        View::ZeuScansion,
        View::Comparison,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Heuristic => "Prosodic",
            View::PoetryTools => "Poetry-Tools",
            View::ZeuScansion => "ZeuScansion",
            View::Comparison => "Comparison",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub view: View,
    pub body: String,
}

#[derive(Serialize)]
struct LineView<'a> {
    text: &'a str,
    meter: &'a str,
    parse_txt: &'a str,
    summary: MeterSummary,
}

#[derive(Serialize)]
struct HeuristicView<'a> {
    title: Option<&'a str>,
    author: Option<&'a str>,
    lines: Vec<LineView<'a>>,
}

#[derive(Serialize)]
struct PlaceholderView<'a> {
    title: Option<&'a str>,
    author: Option<&'a str>,
    note: String,
}

#[derive(Serialize)]
struct ComparisonRow<'a> {
    line: &'a str,
    prosodic: &'a str,
    poetry_tools: &'a str,
    zeuscansion: &'a str,
}

#[derive(Serialize)]
struct ComparisonView<'a> {
    title: Option<&'a str>,
    author: Option<&'a str>,
    rows: Vec<ComparisonRow<'a>>,
}

pub fn present(result: &PoemResult, views: &[View], format: OutputFormat) -> Result<Vec<Rendering>> {
    let views = if views.is_empty() { &View::ALL[..] } else { views };

    views
        .iter()
        .map(|&view| -> Result<Rendering> {
            let body = match format {
                OutputFormat::Text => render_text(result, view),
                OutputFormat::Json => render_json(result, view)?,
                OutputFormat::Csv => render_csv(result, view)?,
            };
            Ok(Rendering { view, body })
        })
        .collect()
}

pub fn present_error(err: &ScanError) -> String {
    format!(
        "❌ {}\n💡 {}",
        err.user_friendly_message(),
        err.recovery_suggestion()
    )
}

fn placeholder_note(view: View) -> String {
    format!(
        "{} analysis would appear here with similar scansion results.",
        view.label()
    )
}

fn heading(result: &PoemResult) -> String {
    let mut out = String::new();
    if let Some(title) = &result.title {
        let _ = writeln!(out, "{}", title);
        if let Some(author) = &result.author {
            let _ = writeln!(out, "by {}", author);
        }
        out.push('\n');
    }
    out
}

fn render_text(result: &PoemResult, view: View) -> String {
    let mut out = heading(result);

    match view {
        View::Heuristic => {
            if result.parses.is_empty() {
                out.push_str(NO_RESULTS);
                out.push('\n');
            }
            for parse in &result.parses {
                let summary = summarize(&parse.meter);
                let _ = writeln!(out, "{}", parse.text);
                let _ = writeln!(out, "  Meter: {} ({})", parse.meter, summary.name);
                let _ = writeln!(out, "  {}", parse.parse_txt);
            }
        }
        View::PoetryTools | View::ZeuScansion => {
            let _ = writeln!(out, "{}", placeholder_note(view));
        }
        View::Comparison => {
            let rows: Vec<[&str; 4]> = result
                .parses
                .iter()
                .map(|p| [p.text.as_str(), p.meter.as_str(), p.meter.as_str(), p.meter.as_str()])
                .collect();
            let header = ["Line", "Prosodic", "Poetry-Tools", "ZeuScansion"];

            let mut widths = header.map(str::len);
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            let _ = writeln!(out, "Meter Pattern Comparison");
            for row in std::iter::once(&header).chain(rows.iter()) {
                let cells: Vec<String> = row
                    .iter()
                    .zip(widths)
                    .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                    .collect();
                let _ = writeln!(out, "{}", cells.join(" | ").trim_end());
            }
        }
    }

    out
}

fn render_json(result: &PoemResult, view: View) -> Result<String> {
    let title = result.title.as_deref();
    let author = result.author.as_deref();

    let json = match view {
        View::Heuristic => serde_json::to_string_pretty(&HeuristicView {
            title,
            author,
            lines: result
                .parses
                .iter()
                .map(|p| LineView {
                    text: &p.text,
                    meter: &p.meter,
                    parse_txt: &p.parse_txt,
                    summary: summarize(&p.meter),
                })
                .collect(),
        })?,
        View::PoetryTools | View::ZeuScansion => serde_json::to_string_pretty(&PlaceholderView {
            title,
            author,
            note: placeholder_note(view),
        })?,
        View::Comparison => serde_json::to_string_pretty(&ComparisonView {
            title,
            author,
            rows: comparison_rows(result),
        })?,
    };

    Ok(json)
}

fn comparison_rows(result: &PoemResult) -> Vec<ComparisonRow<'_>> {
    result
        .parses
        .iter()
        .map(|p| ComparisonRow {
            line: &p.text,
            prosodic: &p.meter,
            poetry_tools: &p.meter,
            zeuscansion: &p.meter,
        })
        .collect()
}

fn render_csv(result: &PoemResult, view: View) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match view {
        View::Heuristic => {
            writer.write_record(["text", "meter", "parse_txt", "summary"])?;
            for parse in &result.parses {
                let summary = summarize(&parse.meter);
                writer.write_record([
                    parse.text.as_str(),
                    parse.meter.as_str(),
                    parse.parse_txt.as_str(),
                    summary.name.as_str(),
                ])?;
            }
        }
        View::PoetryTools | View::ZeuScansion => {
            writer.write_record(["title", "author", "note"])?;
            writer.write_record([
                result.title.as_deref().unwrap_or(""),
                result.author.as_deref().unwrap_or(""),
                placeholder_note(view).as_str(),
            ])?;
        }
        View::Comparison => {
            writer.write_record(["Line", "Prosodic", "Poetry-Tools", "ZeuScansion"])?;
            for row in comparison_rows(result) {
                writer.write_record([row.line, row.prosodic, row.poetry_tools, row.zeuscansion])?;
            }
        }
    }

    let bytes = writer.into_inner().map_err(|e| ScanError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
