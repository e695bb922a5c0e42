//! Page-link bar rendered below paginated tables.

pub mod pager;

use pager::{PageLink, Pager};
use yew::prelude::*;

/// Most entries shown in the bar, gaps included.
const DEFAULT_MAX_SIZE: usize = 7;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    #[prop_or(DEFAULT_MAX_SIZE)]
    pub max_size: usize,
    /// Receives the 1-based page the user picked.
    pub on_page_change: Callback<usize>,
}

pub struct PaginationControls;

impl Component for PaginationControls {
    type Message = ();
    type Properties = PaginationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PaginationControls
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let mut pager = Pager::new(props.items_per_page);
        pager.set_page(props.current_page, props.total_items);

        let current = pager.current_page();
        let links = pager
            .links(props.total_items, props.max_size)
            .into_iter()
            .enumerate()
            .map(|(slot, link)| match link {
                PageLink::Gap => html! {
                    <li key={format!("gap-{}", slot)} class="page-item disabled">
                        <span class="page-link">{"…"}</span>
                    </li>
                },
                PageLink::Page(page) => html! {
                    <li key={format!("page-{}", page)} class={classes!("page-item", (page == current).then_some("active"))}>
                        <button type="button" class="page-link" onclick={page_callback(&props.on_page_change, page)}>
                            { page }
                        </button>
                    </li>
                },
            })
            .collect::<Html>();

        html! {
            <nav aria-label="Navigasi halaman">
                <ul class="pagination justify-content-center">
                    <li class={classes!("page-item", (!pager.has_previous()).then_some("disabled"))}>
                        <button
                            type="button"
                            class="page-link"
                            disabled={!pager.has_previous()}
                            onclick={page_callback(&props.on_page_change, current.saturating_sub(1))}
                        >
                            {"Sebelumnya"}
                        </button>
                    </li>
                    { links }
                    <li class={classes!("page-item", (!pager.has_next(props.total_items)).then_some("disabled"))}>
                        <button
                            type="button"
                            class="page-link"
                            disabled={!pager.has_next(props.total_items)}
                            onclick={page_callback(&props.on_page_change, current + 1)}
                        >
                            {"Berikutnya"}
                        </button>
                    </li>
                </ul>
            </nav>
        }
    }
}

fn page_callback(on_page_change: &Callback<usize>, page: usize) -> Callback<MouseEvent> {
    on_page_change.reform(move |_: MouseEvent| page)
}
