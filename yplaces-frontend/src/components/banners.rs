use leptos::*;

use yplaces_core::message::Banner;

use crate::dom::tr;

/// Inline messages of a form, newest first.
#[component]
pub fn Banners(
    #[prop(into)] banners: Signal<Vec<Banner>>,
    on_dismiss: Callback<usize>,
) -> impl IntoView {
    view! {
      <div class="messages">
        {move || {
            banners
                .get()
                .into_iter()
                .enumerate()
                .map(|(index, Banner { level, msg })| view! {
                  <div class=level.css_class()>
                    <button
                      type="button"
                      class="close"
                      aria-hidden="true"
                      on:click=move |_| on_dismiss.call(index)
                    >
                      "×"
                    </button>
                    { tr(msg) }
                  </div>
                })
                .collect_view()
        }}
      </div>
    }
}
