use uuid::Uuid;
use validator::Validate;

use crate::builder::{BuilderError, SectionUpdate};
use crate::models::resume::{
    Achievement, Certification, Education, Experience, Language, PersonalInfo, Project, Skills,
    Volunteer,
};

/// Which entry, if any, the form's edit buffer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Idle,
    Adding,
    Editing(usize),
}

/// A list entry managed by a `SectionForm`.
pub trait SectionEntry: Validate + Clone + Default {
    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
    /// Wraps a complete list as the update reported to the aggregate.
    fn report(entries: Vec<Self>) -> SectionUpdate;
}

macro_rules! section_entry {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl SectionEntry for $ty {
                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn set_id(&mut self, id: String) {
                    self.id = Some(id);
                }

                fn report(entries: Vec<Self>) -> SectionUpdate {
                    SectionUpdate::$variant(entries)
                }
            }
        )*
    };
}

section_entry! {
    Experience => Experience,
    Education => Education,
    Project => Projects,
    Certification => Certifications,
    Achievement => Achievements,
    Language => Languages,
    Volunteer => Volunteer,
}

fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Add/edit/delete state for one repeated section.
///
/// Holds at most one entry in the edit buffer. Ids are assigned when an entry
/// is first added and survive every later edit.
#[derive(Debug, Clone)]
pub struct SectionForm<T> {
    entries: Vec<T>,
    mode: EditMode,
    draft: T,
}

impl<T: SectionEntry> Default for SectionForm<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: SectionEntry> SectionForm<T> {
    /// Entries arriving without an id (e.g. from an older save) get one here.
    pub fn new(mut entries: Vec<T>) -> Self {
        for entry in entries.iter_mut().filter(|e| e.id().is_none()) {
            entry.set_id(new_entry_id());
        }
        Self {
            entries,
            mode: EditMode::Idle,
            draft: T::default(),
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// The whole list, ready to hand to `ResumeBuilder::apply`.
    pub fn report(&self) -> SectionUpdate {
        T::report(self.entries.clone())
    }

    /// Opens an empty buffer for a new entry.
    pub fn begin_add(&mut self) {
        self.mode = EditMode::Adding;
        self.draft = T::default();
    }

    /// Loads the entry at `position` into the buffer.
    pub fn edit(&mut self, position: usize) -> Result<&T, BuilderError> {
        let entry = self.entry_at(position)?.clone();
        self.draft = entry;
        self.mode = EditMode::Editing(position);
        Ok(&self.draft)
    }

    /// Validates `entry`, then replaces the edited entry (keeping its id) or
    /// appends it with a fresh id. The buffer is cleared on success; on a
    /// validation failure list, mode and buffer are left untouched.
    pub fn submit(&mut self, mut entry: T) -> Result<&[T], BuilderError> {
        entry.validate()?;

        match self.mode {
            EditMode::Editing(position) => {
                let id = self
                    .entry_at(position)?
                    .id()
                    .map(str::to_string)
                    .unwrap_or_else(new_entry_id);
                entry.set_id(id);
                self.entries[position] = entry;
            }
            EditMode::Idle | EditMode::Adding => {
                entry.set_id(new_entry_id());
                self.entries.push(entry);
            }
        }

        self.clear();
        Ok(&self.entries)
    }

    /// Submits the current buffer contents.
    pub fn submit_draft(&mut self) -> Result<&[T], BuilderError> {
        let entry = self.draft.clone();
        self.submit(entry)
    }

    /// Removes the entry at `position`, keeping the edit slot aligned.
    pub fn delete(&mut self, position: usize) -> Result<&[T], BuilderError> {
        self.entry_at(position)?;
        self.entries.remove(position);

        if let EditMode::Editing(editing) = self.mode {
            if editing == position {
                self.clear();
            } else if position < editing {
                self.mode = EditMode::Editing(editing - 1);
            }
        }

        Ok(&self.entries)
    }

    /// Drops the buffer without touching the list.
    pub fn cancel(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.mode = EditMode::Idle;
        self.draft = T::default();
    }

    fn entry_at(&self, position: usize) -> Result<&T, BuilderError> {
        self.entries.get(position).ok_or(BuilderError::OutOfRange {
            position,
            len: self.entries.len(),
        })
    }
}

/// Single-record sections (personal info, skills).
pub trait RecordSection: Validate + Clone {
    fn report(self) -> SectionUpdate;
}

impl RecordSection for PersonalInfo {
    fn report(self) -> SectionUpdate {
        SectionUpdate::PersonalInfo(self)
    }
}

impl RecordSection for Skills {
    fn report(self) -> SectionUpdate {
        SectionUpdate::Skills(self)
    }
}

/// Form over a single record. Field edits are reported live without
/// validation so the preview follows typing; `submit` enforces the schema.
#[derive(Debug, Clone, Default)]
pub struct RecordForm<T> {
    value: T,
}

impl<T: RecordSection> RecordForm<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Live edit: replaces the record and reports it as-is.
    pub fn update(&mut self, value: T) -> SectionUpdate {
        self.value = value;
        self.value.clone().report()
    }

    pub fn submit(&mut self, value: T) -> Result<SectionUpdate, BuilderError> {
        value.validate()?;
        self.value = value;
        Ok(self.value.clone().report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::{experience, personal_info};
    use std::collections::HashSet;

    fn language(name: &str) -> Language {
        Language {
            id: None,
            name: name.to_string(),
            proficiency: "Native".to_string(),
        }
    }

    fn form_with(names: &[&str]) -> SectionForm<Language> {
        let mut form = SectionForm::default();
        for name in names {
            form.submit(language(name)).unwrap();
        }
        form
    }

    fn names(form: &SectionForm<Language>) -> Vec<&str> {
        form.entries().iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_submit_appends_with_fresh_id() {
        let form = form_with(&["French", "German"]);
        let ids: Vec<_> = form.entries().iter().map(|l| l.id().unwrap()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert!(Uuid::parse_str(ids[0]).is_ok());
        assert_eq!(form.mode(), EditMode::Idle);
    }

    #[test]
    fn test_submit_ignores_caller_supplied_id_when_adding() {
        let mut form = form_with(&["French"]);
        let existing = form.entries()[0].id.clone();
        let mut dup = language("German");
        dup.id = existing.clone();
        form.submit(dup).unwrap();
        assert_ne!(form.entries()[1].id, existing);
    }

    #[test]
    fn test_edit_preserves_id_and_order() {
        let mut form = form_with(&["French", "German", "Italian"]);
        let before: Vec<_> = form.entries().iter().map(|l| l.id.clone()).collect();

        let loaded = form.edit(1).unwrap().clone();
        assert_eq!(loaded.name, "German");
        assert_eq!(form.mode(), EditMode::Editing(1));

        let mut changed = loaded;
        changed.id = Some("forged".to_string());
        changed.proficiency = "Fluent".to_string();
        form.submit(changed).unwrap();

        let after: Vec<_> = form.entries().iter().map(|l| l.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(names(&form), vec!["French", "German", "Italian"]);
        assert_eq!(form.entries()[1].proficiency, "Fluent");
        assert_eq!(form.entries()[0].proficiency, "Native");
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(form.draft(), &Language::default());
    }

    #[test]
    fn test_delete_edited_entry_clears_buffer() {
        let mut form = form_with(&["French", "German"]);
        form.edit(1).unwrap();
        form.delete(1).unwrap();
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(form.draft(), &Language::default());
        assert_eq!(names(&form), vec!["French"]);
    }

    #[test]
    fn test_delete_before_edited_entry_shifts_position() {
        let mut form = form_with(&["French", "German", "Italian"]);
        form.edit(2).unwrap();
        form.delete(0).unwrap();
        assert_eq!(form.mode(), EditMode::Editing(1));

        let mut draft = form.draft().clone();
        draft.proficiency = "Basic".to_string();
        form.submit(draft).unwrap();
        assert_eq!(names(&form), vec!["German", "Italian"]);
        assert_eq!(form.entries()[1].proficiency, "Basic");
        assert_eq!(form.entries()[0].proficiency, "Native");
    }

    #[test]
    fn test_delete_after_edited_entry_keeps_position() {
        let mut form = form_with(&["French", "German", "Italian"]);
        form.edit(0).unwrap();
        form.delete(2).unwrap();
        assert_eq!(form.mode(), EditMode::Editing(0));
    }

    #[test]
    fn test_cancel_leaves_list_alone() {
        let mut form = form_with(&["French"]);
        form.edit(0).unwrap();
        form.draft_mut().name = "Changed".to_string();
        form.cancel();
        assert_eq!(form.mode(), EditMode::Idle);
        assert_eq!(names(&form), vec!["French"]);
    }

    #[test]
    fn test_invalid_submit_reports_fields_and_keeps_state() {
        let mut form = form_with(&["French"]);
        form.edit(0).unwrap();
        let mut bad = form.draft().clone();
        bad.proficiency.clear();

        let err = form.submit(bad).unwrap_err();
        match err {
            BuilderError::Invalid(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "proficiency");
                assert_eq!(fields[0].message, "Proficiency level is required");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(form.mode(), EditMode::Editing(0));
        assert_eq!(form.entries()[0].proficiency, "Native");
    }

    #[test]
    fn test_out_of_range_positions_are_rejected() {
        let mut form = form_with(&["French"]);
        assert!(matches!(
            form.edit(3),
            Err(BuilderError::OutOfRange { position: 3, len: 1 })
        ));
        assert!(matches!(
            form.delete(1),
            Err(BuilderError::OutOfRange { position: 1, len: 1 })
        ));
        assert_eq!(form.entries().len(), 1);
    }

    #[test]
    fn test_begin_add_then_submit_draft() {
        let mut form: SectionForm<Experience> = SectionForm::default();
        form.begin_add();
        assert_eq!(form.mode(), EditMode::Adding);
        *form.draft_mut() = experience("Acme");
        form.draft_mut().set_current_position(true);
        form.submit_draft().unwrap();
        assert_eq!(form.entries().len(), 1);
        assert!(form.entries()[0].is_current());
        assert_eq!(form.mode(), EditMode::Idle);
    }

    #[test]
    fn test_new_assigns_missing_ids_only() {
        let mut keep = language("French");
        keep.id = Some("kept".to_string());
        let form = SectionForm::new(vec![keep, language("German")]);
        assert_eq!(form.entries()[0].id.as_deref(), Some("kept"));
        assert!(form.entries()[1].id.is_some());
    }

    #[test]
    fn test_report_wraps_whole_list() {
        let form = form_with(&["French", "German"]);
        match form.report() {
            SectionUpdate::Languages(list) => assert_eq!(list.len(), 2),
            other => panic!("unexpected update: {other:?}"),
        }
    }

    /// Drives a long deterministic mix of operations and checks after each
    /// step that ids stay unique and never change once assigned.
    #[test]
    fn test_ids_unique_and_stable_across_operation_sequences() {
        let mut form: SectionForm<Language> = SectionForm::default();
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next = move |bound: usize| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed % bound.max(1) as u64) as usize
        };
        for step in 0..2_000 {
            let len = form.entries().len();
            match next(5) {
                0 | 1 => {
                    form.submit(language(&format!("lang-{step}"))).unwrap();
                }
                2 if len > 0 => {
                    let position = next(len);
                    let id = form.entries()[position].id.clone();
                    let mut draft = form.edit(position).unwrap().clone();
                    draft.name = format!("edited-{step}");
                    form.submit(draft).unwrap();
                    assert_eq!(form.entries()[position].id, id);
                }
                3 if len > 0 => {
                    let position = next(len);
                    form.delete(position).unwrap();
                }
                _ if len > 0 => {
                    form.edit(next(len)).unwrap();
                    if next(2) == 0 {
                        form.delete(next(len)).unwrap();
                    } else {
                        form.cancel();
                    }
                }
                _ => {}
            }

            if let EditMode::Editing(position) = form.mode() {
                assert!(position < form.entries().len());
                assert_eq!(form.draft().id, form.entries()[position].id);
            }

            let mut seen = HashSet::new();
            for entry in form.entries() {
                let id = entry.id.as_deref().expect("every entry has an id");
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
    }

    #[test]
    fn test_record_form_live_update_and_validated_submit() {
        let mut form = RecordForm::new(PersonalInfo::default());
        match form.update(PersonalInfo {
            first_name: "Ada".to_string(),
            ..Default::default()
        }) {
            SectionUpdate::PersonalInfo(info) => assert_eq!(info.first_name, "Ada"),
            other => panic!("unexpected update: {other:?}"),
        }

        let err = form.submit(form.value().clone()).unwrap_err();
        assert!(matches!(err, BuilderError::Invalid(ref f) if !f.is_empty()));

        assert!(form.submit(personal_info()).is_ok());
        assert_eq!(form.value().last_name, "Lovelace");
    }
}
