use leptos::*;

/// A dialog that is shown while `open` is `true`.
#[component]
pub fn Modal(
    id: &'static str,
    title: String,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
      <div
        id=id
        class="modal"
        role="dialog"
        style:display=move || if open.get() { "block" } else { "none" }
      >
        <div class="modal-dialog">
          <div class="modal-content">
            <div class="modal-header">
              <button
                type="button"
                class="close"
                aria-hidden="true"
                on:click=move |_| on_close.call(())
              >
                "×"
              </button>
              <h4 class="modal-title">{ title }</h4>
            </div>
            { children() }
          </div>
        </div>
      </div>
    }
}
