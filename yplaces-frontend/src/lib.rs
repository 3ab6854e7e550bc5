use leptos::*;
use leptos_router::*;

use yplaces_boundary::PageAction;
use yplaces_core::{config::PageConfig, map::MapView, photo::PhotoPanel, review::ReviewPanel};
use yplaces_frontend_api::PlaceApi;

pub mod components;
pub mod dom;
mod state;

use components::*;

/// Mounts the place page with the configuration embedded by the server.
pub fn run() {
    match dom::load_page_config() {
        Ok(config) => {
            log::debug!("Show place '{}'", config.place.name);
            mount_to_body(move || view! { <App config /> });
        }
        Err(err) => {
            log::error!("Unable to load page configuration: {err}");
            mount_to_body(|| view! { <PageError /> });
        }
    }
}

#[component]
#[must_use]
pub fn App(config: PageConfig) -> impl IntoView {
    view! {
      <Router>
        <main>
          <PlacePage config />
        </main>
      </Router>
    }
}

#[component]
fn PlacePage(config: PageConfig) -> impl IntoView {
    // -- signals -- //

    let review_panel = RwSignal::new(config.review_panel());
    let photo_panel = RwSignal::new(config.photo_panel());

    // -- initial action -- //

    let query = use_query_map();
    let action =
        query.with_untracked(|q| config.initial_action(q.get("action").map(String::as_str)));
    match action {
        Some(PageAction::WriteReview) => review_panel.update(ReviewPanel::open),
        Some(PageAction::AddPhoto) => photo_panel.update(PhotoPanel::open),
        None => {}
    }

    // -- init API -- //

    let map_view = MapView::from(&config.place);
    let PageConfig {
        place,
        reviews_api_url,
        photos_api_url,
        csrf_token,
        ..
    } = config;
    let api = PlaceApi::new(reviews_api_url, photos_api_url, csrf_token);

    view! {
      <div class="place">
        <PlaceHeader place panel=review_panel />
        <div class="actions">
          <button
            type="button"
            class="btn btn-primary"
            on:click=move |_| review_panel.update(ReviewPanel::open)
          >
            { dom::gettext("Write a review") }
          </button>
          <button
            type="button"
            class="btn btn-default"
            on:click=move |_| photo_panel.update(PhotoPanel::open)
          >
            { dom::gettext("Add a photo") }
          </button>
        </div>
        <div class="left-container">
          <ReviewList panel=review_panel />
        </div>
        <div class="right-container">
          <PlaceMap map_view />
        </div>
        <ReviewModal panel=review_panel api=api.clone() />
        <PhotoModal panel=photo_panel api />
      </div>
    }
}

#[component]
fn PageError() -> impl IntoView {
    view! {
      <div class="alert alert-danger">
        { dom::gettext("Unable to load this page") }
      </div>
    }
}
