use leptos::*;

use yplaces_core::rating::{RatingValue, MAX_RATING, MIN_RATING};

const ACTIVE_CLASS: &str = "star-rating-dynamic-active";

/// Clickable stars.
///
/// Hovering previews a rating, leaving the widget shows the selected one again.
#[component]
pub fn StarRating(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<u8>);

    let selected = move || {
        value.with(|v| {
            v.parse::<RatingValue>()
                .map(RatingValue::value)
                .unwrap_or_default()
        })
    };
    let shown = move || hovered.get().unwrap_or_else(selected);

    // Stars are laid out right to left.
    let stars = (MIN_RATING..=MAX_RATING)
        .rev()
        .map(|star| {
            view! {
              <span
                data-value=star.to_string()
                class=move || if star <= shown() { ACTIVE_CLASS } else { "" }
                on:mouseenter=move |_| hovered.set(Some(star))
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        on_select.call(star.to_string());
                    }
                }
              >
                "☆"
              </span>
            }
        })
        .collect_view();

    view! {
      <div class="star-rating-dynamic" on:mouseleave=move |_| hovered.set(None)>
        { stars }
      </div>
    }
}
