//! Update function and effect runner for the roster component.
//!
//! `update` follows the Elm-style split used across the frontend: it feeds
//! the message to the pure transitions in `state.rs`, logs failures to the
//! browser console, and hands the returned effects to `run_effects`, which
//! spawns the HTTP calls and drives the modal widget.

use gloo_console as console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{Effect, MahasiswaComponent};
use crate::api;
use crate::modal::{self, HideOutcome};

/// Central update function for the component.
///
/// Returns `true` when the view has to re-render.
pub fn update(
    component: &mut MahasiswaComponent,
    ctx: &Context<MahasiswaComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::StudentsLoaded { seq, result } => {
            if let Err(err) = &result {
                console::error!("Error fetching mahasiswa data:", err.to_string());
            }
            component.students_loaded(seq, result)
        }
        Msg::ProgramsLoaded(result) => {
            if let Err(err) = &result {
                console::error!("Error fetching prodi data:", err.to_string());
            }
            component.programs_loaded(result)
        }
        Msg::SetField(field, value) => {
            component.set_field(field, value);
            true
        }
        Msg::SelectProgram(value) => {
            component.select_program(&value);
            true
        }
        Msg::Submit => {
            let effects = component.submit();
            let started = !effects.is_empty();
            run_effects(component, ctx, effects);
            started
        }
        Msg::Submitted(result) => {
            match &result {
                Ok(echo) => console::log!("Mahasiswa berhasil ditambahkan:", echo.to_string()),
                Err(err) => console::error!("Error menambahkan mahasiswa:", err.to_string()),
            }
            let effects = component.submit_finished(result);
            run_effects(component, ctx, effects);
            true
        }
        Msg::SetPage(page) => {
            component.set_page(page);
            true
        }
        Msg::ModalShown => {
            component.modal.shown();
            false
        }
        Msg::ModalHidden => {
            if component.modal.hidden() {
                modal::restore_body();
            }
            false
        }
    }
}

/// Carries out effects returned by the state transitions.
pub fn run_effects(
    component: &mut MahasiswaComponent,
    ctx: &Context<MahasiswaComponent>,
    effects: Vec<Effect>,
) {
    let config = &ctx.props().config;
    for effect in effects {
        match effect {
            Effect::FetchStudents { seq } => {
                let link = ctx.link().clone();
                let url = config.students_url.clone();
                spawn_local(async move {
                    let result = api::fetch_students(&url).await;
                    link.send_message(Msg::StudentsLoaded { seq, result });
                });
            }
            Effect::FetchPrograms => {
                let link = ctx.link().clone();
                let url = config.programs_url.clone();
                spawn_local(async move {
                    let result = api::fetch_programs(&url).await;
                    link.send_message(Msg::ProgramsLoaded(result));
                });
            }
            Effect::CreateStudent(payload) => {
                let link = ctx.link().clone();
                let url = config.students_url.clone();
                spawn_local(async move {
                    let result = api::create_student(&url, &payload).await;
                    link.send_message(Msg::Submitted(result));
                });
            }
            Effect::HideModal => match modal::hide(&config.modal_id) {
                HideOutcome::Missing => component.modal.abandon_close(),
                HideOutcome::Hiding => {}
                HideOutcome::HiddenDirectly => {
                    if component.modal.hidden() {
                        modal::restore_body();
                    }
                }
            },
        }
    }
}
