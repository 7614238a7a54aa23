//! Section dock
//!
//! Jump navigation between document sections. Jumps land `section_offset`
//! rows above the heading so it is not flush against the top border.

use crate::document::Section;

#[derive(Debug, Clone)]
pub struct SectionDock {
    sections: Vec<Section>,
    section_offset: usize,
}

impl SectionDock {
    pub fn new(sections: Vec<Section>, section_offset: usize) -> Self {
        Self {
            sections,
            section_offset,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Offset that brings section `index` into view
    pub fn jump_target(&self, index: usize) -> Option<usize> {
        self.sections
            .get(index)
            .map(|section| section.line.saturating_sub(self.section_offset))
    }

    /// Index of the section the view at `top_line` is in
    pub fn current_index(&self, top_line: usize) -> Option<usize> {
        let probe = top_line + self.section_offset;
        self.sections
            .iter()
            .rposition(|section| section.line <= probe)
    }

    /// Section after `current`, or the first one when there is no current
    pub fn next_index(&self, current: Option<usize>) -> Option<usize> {
        let next = match current {
            Some(index) => index + 1,
            None => 0,
        };
        (next < self.sections.len()).then_some(next)
    }

    pub fn previous_index(&self, top_line: usize) -> Option<usize> {
        let current = self.current_index(top_line)?;
        let section = &self.sections[current];
        // Inside a section, go back to its heading first
        if section.line.saturating_sub(self.section_offset) < top_line {
            Some(current)
        } else {
            current.checked_sub(1)
        }
    }
}
