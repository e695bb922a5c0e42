//! Display helpers for the roster table.

use common::model::program::Program;
use common::model::student::{ProgramRef, Student};

/// Name of the student's program.
///
/// Uses the populated program when the server embedded it, otherwise looks
/// the key up in the loaded programs and falls back to the raw key.
pub fn program_label(student: &Student, programs: &[Program]) -> String {
    match &student.prodi_id {
        Some(ProgramRef::Populated(program)) => program.nama.clone(),
        Some(ProgramRef::Id(id)) => programs
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.nama.clone())
            .unwrap_or_else(|| id.to_string()),
        None => "-".to_string(),
    }
}

pub fn gender_label(code: Option<&str>) -> String {
    match code.map(str::trim) {
        Some("L") => "Laki-laki".to_string(),
        Some("P") => "Perempuan".to_string(),
        Some(other) if !other.is_empty() => other.to_string(),
        _ => "-".to_string(),
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
