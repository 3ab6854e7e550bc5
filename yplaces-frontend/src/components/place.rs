use leptos::*;

use yplaces_boundary::Place;
use yplaces_core::{place::address_line, review::ReviewPanel};

use crate::dom::gettext;

#[component]
pub fn PlaceHeader(place: Place, panel: RwSignal<ReviewPanel>) -> impl IntoView {
    let address = address_line(&place);
    let average_width = move || panel.with(|p| p.reviews.average_width()).to_string();
    let review_count = move || panel.with(|p| p.reviews.rating().reviews);

    view! {
      <div class="place-header">
        <h1>{ place.name }</h1>
        { address.map(|address| view! { <p class="address">{ address }</p> }) }
        <div class="rating">
          <div class="star-rating">
            <div style:width=average_width></div>
          </div>
          <span class="review-count">{ review_count } " " { gettext("reviews") }</span>
        </div>
      </div>
    }
}
