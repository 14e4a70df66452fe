//! Result page state. Section visibility is derived from `selected` instead
//! of toggling nodes by tag: a section is shown iff its id is the selected one.

use crate::features::{
    api_types::ApiOutcome,
    result::types::{ExamResult, ResultSection, SectionId},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultView {
    pub exam: Option<ExamResult>,
    pub selected: Option<SectionId>,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the payload of an accepted response. Anything else leaves the
    /// page as it was.
    pub fn apply(&mut self, outcome: ApiOutcome<ExamResult>) {
        if let ApiOutcome::Success(exam) = outcome {
            self.exam = Some(exam);
        }
    }

    pub fn has_data(&self) -> bool {
        self.exam.is_some()
    }

    /// Reveals every section tagged `id` and hides all others.
    pub fn select_section(&mut self, id: SectionId) {
        self.selected = Some(id);
    }

    pub fn is_section_visible(&self, id: &SectionId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn sections(&self) -> Vec<ResultSection> {
        self.exam.as_ref().map(ExamResult::sections).unwrap_or_default()
    }

    pub fn summary(&self) -> Vec<(String, String)> {
        self.exam.as_ref().map(ExamResult::summary).unwrap_or_default()
    }

    /// Distinct section ids in display order, one toggle button each.
    pub fn toggles(&self) -> Vec<(SectionId, String)> {
        let mut toggles: Vec<(SectionId, String)> = Vec::new();
        for section in self.sections() {
            if !toggles.iter().any(|(id, _)| *id == section.id) {
                toggles.push((section.id, section.title));
            }
        }
        toggles
    }
}
