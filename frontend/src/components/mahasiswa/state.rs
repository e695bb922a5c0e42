//! Component state and the pure transitions of the roster screen.
//!
//! Every transition mutates the state and returns the `Effect`s the Yew glue
//! in `update.rs` has to carry out (HTTP requests, hiding the modal). Nothing
//! in here touches the network or the DOM, which keeps the request/response
//! bookkeeping testable outside a browser.

use gloo_events::EventListener;
use yew::NodeRef;

use common::config::ClientConfig;
use common::model::program::Program;
use common::model::student::{NewStudent, Student};

use super::form::{Field, StudentForm, FORM_RULES};
use super::loading::{LoadTracker, Source};
use crate::api::ApiError;
use crate::components::pagination::pager::Pager;
use crate::modal::phase::ModalPhase;

/// Side effects requested by a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// GET the student list; the response must come back tagged with `seq`.
    FetchStudents { seq: u64 },
    FetchPrograms,
    /// POST the form values.
    CreateStudent(NewStudent),
    HideModal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// State of the `MahasiswaComponent`.
///
/// Fields are `pub` because `view` and `update` read them directly.
pub struct MahasiswaComponent {
    /// Students as last received from the list endpoint.
    pub mahasiswa: Vec<Student>,

    /// Programs offered in the form's selection control.
    pub prodi: Vec<Program>,

    /// Initial loading indicator.
    pub loading: LoadTracker,

    pub submit_phase: SubmitPhase,

    pub form: StudentForm,

    /// Bumped whenever the form is reset so the view rebuilds its inputs;
    /// a `<select>` the user touched ignores later `selected` changes.
    pub form_generation: u64,

    /// Page shown from `mahasiswa`.
    pub pager: Pager,

    pub modal: ModalPhase,

    /// Reference to the modal's root element.
    pub modal_ref: NodeRef,

    /// Widget event listeners attached to the modal element; dropping them
    /// detaches the handlers.
    pub modal_listeners: Vec<EventListener>,

    /// Guard so the initial loads run once per mount.
    pub loaded: bool,

    /// Sequence number of the latest student list request.
    pub students_seq: u64,
}

impl MahasiswaComponent {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            mahasiswa: Vec::new(),
            prodi: Vec::new(),
            loading: LoadTracker::new(config.loading_mode),
            submit_phase: SubmitPhase::Idle,
            form: StudentForm::with_rules(FORM_RULES.to_vec()),
            form_generation: 0,
            pager: Pager::new(config.items_per_page),
            modal: ModalPhase::default(),
            modal_ref: NodeRef::default(),
            modal_listeners: Vec::new(),
            loaded: false,
            students_seq: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_phase == SubmitPhase::Submitting
    }

    /// Starts both initial loads. Subsequent calls do nothing.
    pub fn initialize(&mut self) -> Vec<Effect> {
        if self.loaded {
            return Vec::new();
        }
        self.loaded = true;
        vec![self.load_students(), Effect::FetchPrograms]
    }

    /// Issues a new student list request, superseding any request in flight.
    pub fn load_students(&mut self) -> Effect {
        self.students_seq += 1;
        Effect::FetchStudents {
            seq: self.students_seq,
        }
    }

    /// Applies a student list response. Returns whether the view changed.
    ///
    /// Responses to superseded requests are dropped. A failure keeps the
    /// previous list; either way the source counts as reported.
    pub fn students_loaded(&mut self, seq: u64, result: Result<Vec<Student>, ApiError>) -> bool {
        if seq != self.students_seq {
            return false;
        }
        if let Ok(students) = result {
            self.mahasiswa = students;
            self.pager.clamp(self.mahasiswa.len());
        }
        self.loading.complete(Source::Students);
        true
    }

    pub fn programs_loaded(&mut self, result: Result<Vec<Program>, ApiError>) -> bool {
        if let Ok(programs) = result {
            self.prodi = programs;
        }
        self.loading.complete(Source::Programs);
        true
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set_field(field, value);
    }

    pub fn select_program(&mut self, value: &str) {
        self.form.select_program(value, &self.prodi);
    }

    /// Submits the form unless a submission is already in flight or a rule
    /// rejects the values.
    pub fn submit(&mut self) -> Vec<Effect> {
        if self.is_submitting() || !self.form.is_valid() {
            return Vec::new();
        }
        self.submit_phase = SubmitPhase::Submitting;
        vec![Effect::CreateStudent(self.form.values().clone())]
    }

    /// Applies the outcome of the create request.
    ///
    /// On success the list is refetched, the form cleared and the modal
    /// asked to close. On failure the form keeps its values so the user can
    /// correct them, and the modal stays open.
    pub fn submit_finished<T>(&mut self, result: Result<T, ApiError>) -> Vec<Effect> {
        if !self.is_submitting() {
            return Vec::new();
        }
        self.submit_phase = SubmitPhase::Idle;
        if result.is_err() {
            return Vec::new();
        }

        let mut effects = vec![self.load_students()];
        self.form.reset();
        self.form_generation += 1;
        if self.modal.request_close() {
            effects.push(Effect::HideModal);
        }
        effects
    }

    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page, self.mahasiswa.len());
    }

    /// Students on the current page.
    pub fn visible_students(&self) -> &[Student] {
        self.pager.slice(&self.mahasiswa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::LoadingMode;
    use common::model::record_id::RecordId;
    use serde_json::json;

    fn students(n: usize) -> Vec<Student> {
        (1..=n)
            .map(|i| {
                serde_json::from_value(json!({
                    "id": i,
                    "npm": format!("22010{:02}", i),
                    "nama": format!("Mahasiswa {}", i),
                }))
                .unwrap()
            })
            .collect()
    }

    fn programs() -> Vec<Program> {
        serde_json::from_value(json!([
            {"id": 1, "nama": "Informatika"},
            {"id": 2, "nama": "Sistem Informasi"}
        ]))
        .unwrap()
    }

    fn failure() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "Internal Server Error".into(),
        }
    }

    fn component(mode: LoadingMode) -> MahasiswaComponent {
        MahasiswaComponent::new(&ClientConfig {
            loading_mode: mode,
            ..ClientConfig::default()
        })
    }

    fn fill_form(c: &mut MahasiswaComponent) {
        c.set_field(Field::Npm, "123".into());
        c.set_field(Field::Nama, "Ana".into());
        c.select_program("2");
        c.set_field(Field::JenisKelamin, "F".into());
        c.set_field(Field::AsalSekolah, "SMA1".into());
    }

    /// Component after a completed initial load with five students.
    fn loaded_component() -> MahasiswaComponent {
        let mut c = component(LoadingMode::AllSources);
        c.initialize();
        c.students_loaded(1, Ok(students(5)));
        c.programs_loaded(Ok(programs()));
        c
    }

    #[test]
    fn initialize_requests_each_source_once() {
        let mut c = component(LoadingMode::AllSources);
        assert!(c.is_loading());
        assert_eq!(
            c.initialize(),
            vec![Effect::FetchStudents { seq: 1 }, Effect::FetchPrograms]
        );
        assert!(c.initialize().is_empty());
    }

    #[test]
    fn students_response_replaces_list() {
        let mut c = component(LoadingMode::AllSources);
        c.initialize();
        assert!(c.students_loaded(1, Ok(students(7))));
        assert_eq!(c.mahasiswa.len(), 7);
        // programs still pending
        assert!(c.is_loading());

        c.programs_loaded(Ok(programs()));
        assert!(!c.is_loading());
    }

    #[test]
    fn first_response_mode_clears_on_either_source() {
        let mut c = component(LoadingMode::FirstResponse);
        c.initialize();
        c.students_loaded(1, Ok(students(3)));
        assert_eq!(c.mahasiswa.len(), 3);
        assert!(!c.is_loading());
    }

    #[test]
    fn failed_programs_keep_previous_value() {
        let mut c = component(LoadingMode::AllSources);
        c.initialize();
        c.programs_loaded(Err(failure()));
        assert!(c.prodi.is_empty());
        c.students_loaded(1, Ok(students(2)));
        assert!(!c.is_loading());

        let mut c = component(LoadingMode::FirstResponse);
        c.initialize();
        c.programs_loaded(Err(failure()));
        assert!(c.prodi.is_empty());
        assert!(!c.is_loading());
    }

    #[test]
    fn failed_students_keep_previous_list() {
        let mut c = loaded_component();
        let effect = c.load_students();
        assert_eq!(effect, Effect::FetchStudents { seq: 2 });
        c.students_loaded(2, Err(failure()));
        assert_eq!(c.mahasiswa.len(), 5);
    }

    #[test]
    fn stale_student_response_is_dropped() {
        let mut c = loaded_component();
        c.load_students(); // seq 2
        c.load_students(); // seq 3

        assert!(c.students_loaded(3, Ok(students(9))));
        assert!(!c.students_loaded(2, Ok(students(1))));
        assert_eq!(c.mahasiswa.len(), 9);
    }

    #[test]
    fn submit_posts_form_values_once() {
        let mut c = loaded_component();
        fill_form(&mut c);

        let effects = c.submit();
        assert_eq!(
            effects,
            vec![Effect::CreateStudent(NewStudent {
                npm: "123".into(),
                nama: "Ana".into(),
                prodi_id: Some(RecordId::Number(2)),
                jenis_kelamin: "F".into(),
                asal_sekolah: "SMA1".into(),
            })]
        );
        match &effects[0] {
            Effect::CreateStudent(payload) => assert_eq!(
                serde_json::to_value(payload).unwrap(),
                json!({"npm":"123","nama":"Ana","prodi_id":2,"jenis_kelamin":"F","asal_sekolah":"SMA1"})
            ),
            other => panic!("unexpected effect {:?}", other),
        }
        assert!(c.is_submitting());

        // double submit while in flight
        assert!(c.submit().is_empty());
    }

    #[test]
    fn successful_submit_refetches_resets_and_closes() {
        let mut c = loaded_component();
        c.modal.shown();
        fill_form(&mut c);
        c.submit();

        let effects = c.submit_finished(Ok(json!({"id": 6})));
        assert_eq!(
            effects,
            vec![Effect::FetchStudents { seq: 2 }, Effect::HideModal]
        );
        assert_eq!(c.form.values(), &NewStudent::default());
        assert_eq!(c.form_generation, 1);
        assert!(!c.is_submitting());
        assert_eq!(c.modal, ModalPhase::Closing);

        // the refetch does not bring the initial spinner back
        assert!(!c.is_loading());

        assert!(c.modal.hidden());
    }

    #[test]
    fn failed_submit_keeps_form_and_modal() {
        let mut c = loaded_component();
        c.modal.shown();
        fill_form(&mut c);
        let submitted = c.form.values().clone();
        c.submit();

        let effects = c.submit_finished::<()>(Err(failure()));
        assert!(effects.is_empty());
        assert_eq!(c.form.values(), &submitted);
        assert_eq!(c.form_generation, 0);
        assert!(!c.is_submitting());
        assert_eq!(c.modal, ModalPhase::Open);
    }

    #[test]
    fn success_after_user_dismissed_modal_skips_hide() {
        let mut c = loaded_component();
        c.modal.shown();
        fill_form(&mut c);
        c.submit();
        assert!(!c.modal.hidden());

        let effects = c.submit_finished(Ok(()));
        assert_eq!(effects, vec![Effect::FetchStudents { seq: 2 }]);
        assert_eq!(c.modal, ModalPhase::Closed);
        assert_eq!(c.form.values(), &NewStudent::default());
    }

    #[test]
    fn each_successful_submit_starts_a_fresh_form() {
        let mut c = loaded_component();
        for round in 1..=2 {
            c.modal.shown();
            fill_form(&mut c);
            c.submit();
            c.submit_finished(Ok(()));
            c.modal.hidden();
            assert_eq!(c.form_generation, round);
            assert_eq!(c.form.values().prodi_id, None);
            assert_eq!(c.form.values().jenis_kelamin, "");
        }
    }

    #[test]
    fn result_without_pending_submit_is_ignored() {
        let mut c = loaded_component();
        assert!(c.submit_finished(Ok(())).is_empty());
    }

    #[test]
    fn paging_only_changes_rendered_slice() {
        let mut c = component(LoadingMode::AllSources);
        c.initialize();
        c.students_loaded(1, Ok(students(12)));
        c.programs_loaded(Ok(programs()));

        c.set_page(3);
        assert_eq!(c.pager.current_page(), 3);
        assert_eq!(c.visible_students().len(), 2);
        assert_eq!(c.visible_students()[0].nama, "Mahasiswa 11");
        // no request bookkeeping moved
        assert_eq!(c.students_seq, 1);
    }

    #[test]
    fn shrinking_list_pulls_page_back_in_range() {
        let mut c = component(LoadingMode::AllSources);
        c.initialize();
        c.students_loaded(1, Ok(students(12)));
        c.set_page(3);

        let effect = c.load_students();
        assert_eq!(effect, Effect::FetchStudents { seq: 2 });
        c.students_loaded(2, Ok(students(4)));
        assert_eq!(c.pager.current_page(), 1);
    }
}
