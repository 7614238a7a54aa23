//! Paged document
//!
//! Holds the text being viewed and the sections used for dock navigation.
//! Sections are markdown ATX headings; headings inside fenced code blocks
//! are ignored.

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::error::GlideError;

const TAB_WIDTH: usize = 4;

/// A navigable heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    /// Zero-based line index of the heading
    pub line: usize,
    /// Heading depth, 1 for `#`
    pub level: u8,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<String>,
    sections: Vec<Section>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(expand_tabs).collect();
        let sections = parse_sections(&lines);

        #[cfg(debug_assertions)]
        log::debug!(
            "Document loaded: {} lines, {} sections",
            lines.len(),
            sections.len()
        );

        Self { lines, sections }
    }

    /// Load a file, replacing invalid UTF-8
    pub fn load_file(path: &Path) -> Result<Self, GlideError> {
        let bytes = fs::read(path)?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    /// Load piped stdin; refuses an interactive terminal
    pub fn load_stdin() -> Result<Self, GlideError> {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(GlideError::NoInput);
        }
        let mut bytes = Vec::new();
        stdin.read_to_end(&mut bytes)?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut expanded = String::with_capacity(line.len() + TAB_WIDTH);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let spaces = TAB_WIDTH - column % TAB_WIDTH;
            expanded.extend(std::iter::repeat_n(' ', spaces));
            column += spaces;
        } else {
            expanded.push(ch);
            column += 1;
        }
    }
    expanded
}

fn parse_sections(lines: &[String]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut in_fence = false;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some((level, title)) = parse_heading(line) {
            sections.push(Section {
                title,
                line: index,
                level,
            });
        }
    }

    sections
}

/// `# Title` through `###### Title`, at most three leading spaces
fn parse_heading(line: &str) -> Option<(u8, String)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }

    let rest = &line[indent..];
    let level = rest.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let after = &rest[level..];
    if !after.is_empty() && !after.starts_with(' ') {
        return None;
    }

    let title = after.trim().trim_end_matches('#').trim_end().to_string();
    if title.is_empty() {
        return None;
    }

    Some((level as u8, title))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
