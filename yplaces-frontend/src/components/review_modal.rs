use leptos::*;

use yplaces_core::{flow, review::ReviewPanel};
use yplaces_frontend_api::PlaceApi;

use crate::{
    components::{Banners, Modal, StarRating},
    dom::{alert, gettext},
    state::SignalCell,
};

pub const REVIEW_MODAL_ID: &str = "addReview";

#[component]
pub fn ReviewModal(panel: RwSignal<ReviewPanel>, api: PlaceApi) -> impl IntoView {
    // -- signals -- //

    let is_open = Signal::derive(move || panel.with(ReviewPanel::is_open));
    let rating = Signal::derive(move || panel.with(|p| p.form.draft().rating.clone()));
    let comment = Signal::derive(move || panel.with(|p| p.form.draft().comment.clone()));
    let submitting = Signal::derive(move || panel.with(|p| p.form.is_submitting()));
    let banners = Signal::derive(move || panel.with(|p| p.form.banners().to_vec()));

    // -- actions -- //

    let submit = create_action(move |()| {
        let api = api.clone();
        async move {
            match flow::submit_review(&SignalCell(panel), &api).await {
                Ok(outcome) => {
                    if let Some(notice) = outcome.notice() {
                        alert(notice);
                    }
                }
                Err(rejection) => {
                    log::debug!("Review not submitted: {rejection}");
                }
            }
        }
    });

    // -- callbacks -- //

    let on_close = Callback::new(move |()| panel.update(ReviewPanel::close));
    let on_select_rating = Callback::new(move |value: String| {
        panel.update(|p| p.form.set_rating(value));
    });
    let on_dismiss = Callback::new(move |index| panel.update(|p| p.form.dismiss_banner(index)));

    view! {
      <Modal id=REVIEW_MODAL_ID title=gettext("Write a review") open=is_open on_close>
        <form on:submit=|ev| ev.prevent_default()>
          <div class="modal-body">
            <Banners banners on_dismiss />
            <StarRating value=rating disabled=submitting on_select=on_select_rating />
            <input type="hidden" id="rating" name="rating" prop:value=move || rating.get() />
            <textarea
              id="comment"
              name="comment"
              class="form-control"
              rows="5"
              placeholder=gettext("Comment")
              prop:value=move || comment.get()
              prop:disabled=move || submitting.get()
              on:input=move |ev| {
                  let value = event_target_value(&ev);
                  panel.update(|p| p.form.set_comment(value));
              }
            ></textarea>
          </div>
          <div class="modal-footer">
            <button type="button" class="btn btn-default" on:click=move |_| on_close.call(())>
              { gettext("Cancel") }
            </button>
            <button
              type="button"
              id="submit"
              class="btn btn-primary"
              prop:disabled=move || submitting.get()
              on:click=move |_| submit.dispatch(())
            >
              { gettext("Submit") }
            </button>
          </div>
        </form>
      </Modal>
    }
}
