//! Student roster ("data mahasiswa") screen.
//!
//! The `Component` impl only delegates: transitions live in `state`, side
//! effects in `update`, markup in `view`.
//!
//! On first render the component attaches listeners to the modal element
//! and starts the student and program loads.

use yew::prelude::*;

mod form;
mod helpers;
mod loading;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MahasiswaProps;
pub use state::MahasiswaComponent;

impl Component for MahasiswaComponent {
    type Message = Msg;
    type Properties = MahasiswaProps;

    fn create(ctx: &Context<Self>) -> Self {
        MahasiswaComponent::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            let link = ctx.link();
            self.modal_listeners = crate::modal::watch(
                &self.modal_ref,
                link.callback(|_| Msg::ModalShown),
                link.callback(|_| Msg::ModalHidden),
            );

            let effects = self.initialize();
            update::run_effects(self, ctx, effects);
        }
    }
}
