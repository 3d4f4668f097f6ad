//! Ordered content sections of a careers page.

use careerhub_core::AppError;
use careerhub_entity::company::{Section, SectionKind};

/// The sections of one company, kept in display position order.
///
/// Every structural change (move, add, remove) leaves `order` values
/// contiguous and 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    /// Wrap stored sections, arranged by their `order` values.
    pub fn new(mut sections: Vec<Section>) -> Self {
        sections.sort_by_key(|s| s.order);
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    pub fn into_vec(self) -> Vec<Section> {
        self.sections
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Move the section at `from` to position `to`, then renumber all of them.
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<(), AppError> {
        let len = self.sections.len();
        if from >= len || to >= len {
            return Err(AppError::validation(format!(
                "Section position out of range: {from} -> {to} (have {len})"
            )));
        }
        if from == to {
            return Err(AppError::validation("Section is already at that position"));
        }

        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        self.renumber();
        Ok(())
    }

    /// Append a new section of `kind` with its default title.
    pub fn add(&mut self, kind: SectionKind) -> Result<&Section, AppError> {
        if self.sections.iter().any(|s| s.kind == kind) {
            return Err(AppError::conflict(format!(
                "A {kind} section already exists"
            )));
        }
        let order = self.sections.len() as u32 + 1;
        self.sections.push(Section::new(kind, order));
        Ok(&self.sections[self.sections.len() - 1])
    }

    /// Remove the section at `index`; the rest are renumbered.
    pub fn remove(&mut self, index: usize) -> Result<Section, AppError> {
        if index >= self.sections.len() {
            return Err(AppError::not_found(format!("No section at position {index}")));
        }
        let removed = self.sections.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Replace the title and content of the section at `index`.
    pub fn update(
        &mut self,
        index: usize,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), AppError> {
        let section = self
            .sections
            .get_mut(index)
            .ok_or_else(|| AppError::not_found(format!("No section at position {index}")))?;
        section.title = title.into();
        section.content = content.into();
        Ok(())
    }

    /// Sections ordered by their `order` field.
    pub fn sorted_for_display(&self) -> Vec<&Section> {
        let mut sorted: Vec<&Section> = self.sections.iter().collect();
        sorted.sort_by_key(|s| s.order);
        sorted
    }

    fn renumber(&mut self) {
        for (i, section) in self.sections.iter_mut().enumerate() {
            section.order = i as u32 + 1;
        }
    }
}

impl From<Vec<Section>> for SectionList {
    fn from(sections: Vec<Section>) -> Self {
        Self::new(sections)
    }
}
