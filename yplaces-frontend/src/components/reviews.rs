use leptos::*;

use yplaces_core::review::{ReviewEntry, ReviewPanel};

/// Reviews of the place, newest first.
///
/// The list stays hidden until there is at least one review.
#[component]
pub fn ReviewList(panel: RwSignal<ReviewPanel>) -> impl IntoView {
    let entries = Signal::derive(move || panel.with(|p| p.reviews.entries().to_vec()));
    let visible = Signal::derive(move || panel.with(|p| p.reviews.is_visible()));

    view! {
      <div class="reviews">
        <ul style:display=move || if visible.get() { "block" } else { "none" }>
          <For
            each=move || entries.get()
            key=|entry| entry.key
            let:entry
          >
            <ReviewListItem entry />
          </For>
        </ul>
      </div>
    }
}

#[component]
fn ReviewListItem(entry: ReviewEntry) -> impl IntoView {
    let ReviewEntry {
        avatar_url,
        stars,
        comment,
        author,
        date,
        ..
    } = entry;

    view! {
      <li>
        <div class="avatar">
          <img src=avatar_url class="img-rounded" />
        </div>
        <div class="comment">
          <div class="star-rating-sm">
            <div style:width=stars.to_string()></div>
          </div>
          <div class="message">
            { comment }
            <br />
            <span>{ author } " // " { date }</span>
          </div>
        </div>
        <div class="clear"></div>
      </li>
    }
}
