//! View rendering for the roster component.
//!
//! Three parts: a header with the button that opens the modal through
//! Bootstrap's data attributes, the paginated student table (or a spinner
//! while the initial load is pending), and the "add student" modal form.
//! User-facing text is in Indonesian.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::form::Field;
use super::helpers::{gender_label, or_dash, program_label};
use super::messages::Msg;
use super::state::MahasiswaComponent;
use crate::components::pagination::PaginationControls;

pub fn view(component: &MahasiswaComponent, ctx: &Context<MahasiswaComponent>) -> Html {
    let link = ctx.link();
    let modal_id = &ctx.props().config.modal_id;

    html! {
        <div class="container mt-4">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2 class="mb-0">{"Data Mahasiswa"}</h2>
                <button
                    type="button"
                    class="btn btn-primary"
                    data-bs-toggle="modal"
                    data-bs-target={format!("#{}", modal_id)}
                >
                    {"Tambah Mahasiswa"}
                </button>
            </div>

            {
                if component.is_loading() {
                    build_spinner()
                } else {
                    build_table(component, link)
                }
            }

            { build_modal(component, link, modal_id) }
        </div>
    }
}

fn build_spinner() -> Html {
    html! {
        <div class="d-flex justify-content-center my-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{"Memuat..."}</span>
            </div>
        </div>
    }
}

fn build_table(component: &MahasiswaComponent, link: &Scope<MahasiswaComponent>) -> Html {
    let offset = component.pager.offset();
    let rows = if component.mahasiswa.is_empty() {
        html! {
            <tr>
                <td colspan="6" class="text-center text-muted">{"Belum ada data mahasiswa."}</td>
            </tr>
        }
    } else {
        component
            .visible_students()
            .iter()
            .enumerate()
            .map(|(i, student)| {
                html! {
                    <tr key={student.id.to_string()}>
                        <td>{ offset + i + 1 }</td>
                        <td>{ student.npm.clone() }</td>
                        <td>{ student.nama.clone() }</td>
                        <td>{ program_label(student, &component.prodi) }</td>
                        <td>{ gender_label(student.jenis_kelamin.as_deref()) }</td>
                        <td>{ or_dash(student.asal_sekolah.as_deref()) }</td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <>
            <table class="table table-striped table-bordered">
                <thead class="table-dark">
                    <tr>
                        <th>{"No"}</th>
                        <th>{"NPM"}</th>
                        <th>{"Nama"}</th>
                        <th>{"Program Studi"}</th>
                        <th>{"Jenis Kelamin"}</th>
                        <th>{"Asal Sekolah"}</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
            <PaginationControls
                current_page={component.pager.current_page()}
                total_items={component.mahasiswa.len()}
                items_per_page={component.pager.items_per_page()}
                on_page_change={link.callback(Msg::SetPage)}
            />
        </>
    }
}

fn build_modal(
    component: &MahasiswaComponent,
    link: &Scope<MahasiswaComponent>,
    modal_id: &str,
) -> Html {
    let values = component.form.values();
    let label_id = format!("{}Label", modal_id);
    let submitting = component.is_submitting();

    html! {
        <div
            class="modal fade"
            id={modal_id.to_string()}
            ref={component.modal_ref.clone()}
            tabindex="-1"
            aria-labelledby={label_id.clone()}
            aria-hidden="true"
        >
            <div class="modal-dialog">
                <div class="modal-content">
                    <form
                        key={component.form_generation.to_string()}
                        onsubmit={link.callback(|e: SubmitEvent| {
                            e.prevent_default();
                            Msg::Submit
                        })}
                    >
                        <div class="modal-header">
                            <h5 class="modal-title" id={label_id}>{"Tambah Mahasiswa"}</h5>
                            <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Tutup"></button>
                        </div>
                        <div class="modal-body">
                            { for component.form.errors().into_iter().map(|error| html! {
                                <div class="alert alert-warning py-2">{ error }</div>
                            }) }
                            { text_input(link, Field::Npm, "NPM", &values.npm) }
                            { text_input(link, Field::Nama, "Nama", &values.nama) }
                            { build_program_select(component, link) }
                            { build_gender_select(link, &values.jenis_kelamin) }
                            { text_input(link, Field::AsalSekolah, "Asal Sekolah", &values.asal_sekolah) }
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" data-bs-dismiss="modal">{"Batal"}</button>
                            <button type="submit" class="btn btn-primary" disabled={submitting}>
                                { if submitting { "Menyimpan..." } else { "Simpan" } }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

fn text_input(link: &Scope<MahasiswaComponent>, field: Field, label: &str, value: &str) -> Html {
    let input_id = format!("mahasiswa-{:?}", field).to_lowercase();
    html! {
        <div class="mb-3">
            <label for={input_id.clone()} class="form-label">{ label }</label>
            <input
                id={input_id}
                type="text"
                class="form-control"
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        </div>
    }
}

fn build_program_select(component: &MahasiswaComponent, link: &Scope<MahasiswaComponent>) -> Html {
    let selected = component.form.values().prodi_id.as_ref();
    let options = component
        .prodi
        .iter()
        .map(|program| {
            let id = program.id.to_string();
            html! {
                <option key={id.clone()} value={id} selected={selected == Some(&program.id)}>
                    { program.nama.clone() }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <div class="mb-3">
            <label for="mahasiswa-prodi" class="form-label">{"Program Studi"}</label>
            <select
                id="mahasiswa-prodi"
                class="form-select"
                onchange={link.callback(|e: Event| {
                    Msg::SelectProgram(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value="" selected={selected.is_none()}>{"-- Pilih Program Studi --"}</option>
                { options }
            </select>
        </div>
    }
}

fn build_gender_select(link: &Scope<MahasiswaComponent>, current: &str) -> Html {
    html! {
        <div class="mb-3">
            <label for="mahasiswa-jenis-kelamin" class="form-label">{"Jenis Kelamin"}</label>
            <select
                id="mahasiswa-jenis-kelamin"
                class="form-select"
                onchange={link.callback(|e: Event| {
                    Msg::SetField(
                        Field::JenisKelamin,
                        e.target_unchecked_into::<HtmlSelectElement>().value(),
                    )
                })}
            >
                <option value="" selected={current.is_empty()}>{"-- Pilih --"}</option>
                <option value="L" selected={current == "L"}>{"Laki-laki"}</option>
                <option value="P" selected={current == "P"}>{"Perempuan"}</option>
            </select>
        </div>
    }
}
