use leptos::{ev, html, *};
use web_sys::{File, HtmlInputElement};

use yplaces_core::{
    flow,
    message::Msg,
    photo::{PhotoPanel, Selection, UploadOutcome, UploadRejection},
};
use yplaces_frontend_api::PlaceApi;

use crate::{
    components::Modal,
    dom::{alert, gettext, navigate, photo_form_data, read_as_data_url},
    state::SignalCell,
};

pub const PHOTO_MODAL_ID: &str = "addPhoto";

fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

#[component]
pub fn PhotoModal(panel: RwSignal<PhotoPanel>, api: PlaceApi) -> impl IntoView {
    let form_ref = create_node_ref::<html::Form>();
    let input_ref = create_node_ref::<html::Input>();

    // -- signals -- //

    let is_open = Signal::derive(move || panel.with(PhotoPanel::is_open));
    let uploading = Signal::derive(move || panel.with(|p| p.form.is_uploading()));
    let preview = Signal::derive(move || panel.with(|p| p.form.preview().map(ToOwned::to_owned)));

    // -- actions -- //

    let read_preview = create_action(move |(selection, file): &(Selection, File)| {
        let selection = *selection;
        let file = file.clone();
        async move {
            match read_as_data_url(&file).await {
                Ok(data_url) => {
                    let shown = panel.try_update(|p| p.form.show_preview(selection, data_url));
                    if shown != Some(true) {
                        log::debug!("Drop preview of a replaced picture");
                    }
                }
                Err(err) => {
                    log::warn!("Unable to preview picture: {err}");
                }
            }
        }
    });

    let upload = create_action(move |()| {
        let api = api.clone();
        async move {
            let (Some(form), Some(input)) = (form_ref.get_untracked(), input_ref.get_untracked())
            else {
                log::warn!("Photo form is not mounted");
                return;
            };
            let Some(file) = selected_file(&input) else {
                alert(Msg::SelectPicture);
                return;
            };
            let payload = match photo_form_data(&form, &file) {
                Ok(payload) => payload,
                Err(err) => {
                    log::error!("Unable to build photo form data: {err}");
                    alert(Msg::UnableToUploadPicture);
                    return;
                }
            };
            match flow::upload_photo(&SignalCell(panel), &api, payload).await {
                Ok(UploadOutcome {
                    notice,
                    navigate_to,
                }) => {
                    alert(notice);
                    if let Some(path) = navigate_to {
                        if let Err(err) = navigate(&path) {
                            log::error!("Unable to navigate to {path}: {err}");
                        }
                    }
                }
                Err(UploadRejection::NoFileSelected) => {
                    alert(Msg::SelectPicture);
                }
                Err(rejection) => {
                    log::debug!("Picture not uploaded: {rejection}");
                }
            }
        }
    });

    // -- callbacks -- //

    let on_change = move |_: ev::Event| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let Some(file) = selected_file(&input) else {
            panel.update(|p| p.form.clear_selection());
            return;
        };
        if let Some(selection) = panel.try_update(|p| p.form.select_file()) {
            read_preview.dispatch((selection, file));
        }
    };

    let on_close = Callback::new(move |()| {
        panel.update(PhotoPanel::close);
        if let Some(input) = input_ref.get_untracked() {
            if !uploading.get_untracked() {
                input.set_value("");
            }
        }
    });

    view! {
      <Modal id=PHOTO_MODAL_ID title=gettext("Add a photo") open=is_open on_close>
        <form node_ref=form_ref on:submit=|ev| ev.prevent_default()>
          <div class="modal-body">
            <input
              type="file"
              accept="image/*"
              node_ref=input_ref
              prop:disabled=move || uploading.get()
              on:change=on_change
            />
            {move || preview.get().map(|src| view! {
              <img class="img-responsive preview" src=src />
            })}
          </div>
          <div class="modal-footer">
            <button type="button" class="btn btn-default" on:click=move |_| on_close.call(())>
              { gettext("Cancel") }
            </button>
            <button
              type="button"
              class="btn btn-primary"
              prop:disabled=move || uploading.get()
              on:click=move |_| upload.dispatch(())
            >
              { gettext("Upload") }
            </button>
          </div>
        </form>
      </Modal>
    }
}
