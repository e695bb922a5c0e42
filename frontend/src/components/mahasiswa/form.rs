//! The "add student" form: current values plus the rules that gate submit.

use common::model::program::Program;
use common::model::student::NewStudent;

/// Text inputs of the form. The program is a selection, see
/// `StudentForm::select_program`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Npm,
    Nama,
    JenisKelamin,
    AsalSekolah,
}

/// A validation rule; returns a message when the values are rejected.
pub type FieldRule = fn(&NewStudent) -> Option<String>;

/// Rules attached to the add-student form. None: every combination of
/// values is sent to the server.
pub const FORM_RULES: &[FieldRule] = &[];

#[derive(Clone, Default)]
pub struct StudentForm {
    values: NewStudent,
    rules: Vec<FieldRule>,
}

impl StudentForm {
    pub fn with_rules(rules: Vec<FieldRule>) -> Self {
        Self {
            values: NewStudent::default(),
            rules,
        }
    }

    pub fn values(&self) -> &NewStudent {
        &self.values
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Npm => self.values.npm = value,
            Field::Nama => self.values.nama = value,
            Field::JenisKelamin => self.values.jenis_kelamin = value,
            Field::AsalSekolah => self.values.asal_sekolah = value,
        }
    }

    /// Selects the program whose id renders as `value`; an empty or unknown
    /// value clears the selection.
    pub fn select_program(&mut self, value: &str, programs: &[Program]) {
        self.values.prodi_id = programs
            .iter()
            .find(|p| p.id.to_string() == value)
            .map(|p| p.id.clone());
    }

    /// Messages of every failing rule.
    pub fn errors(&self) -> Vec<String> {
        self.rules.iter().filter_map(|rule| rule(&self.values)).collect()
    }

    pub fn is_valid(&self) -> bool {
        self.rules.iter().all(|rule| rule(&self.values).is_none())
    }

    pub fn reset(&mut self) {
        self.values = NewStudent::default();
    }
}
