use common::model::program::Program;
use common::model::student::Student;
use serde_json::Value;

use super::form::Field;
use crate::api::ApiError;

#[derive(Clone)]
pub enum Msg {
    StudentsLoaded {
        seq: u64,
        result: Result<Vec<Student>, ApiError>,
    },
    ProgramsLoaded(Result<Vec<Program>, ApiError>),
    SetField(Field, String),
    SelectProgram(String),
    Submit,
    Submitted(Result<Value, ApiError>),
    SetPage(usize),
    ModalShown,
    ModalHidden,
}
