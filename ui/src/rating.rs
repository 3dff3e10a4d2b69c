//! 1-10 star rating control.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

/// Interactive star row. `value` stars are filled; clicking star `i`
/// reports a rating of `i`. Disabled while the viewer cannot rate.
#[component]
pub fn RatingStars(
    value: u8,
    #[props(default = false)] disabled: bool,
    on_rate: EventHandler<u8>,
) -> Element {
    rsx! {
        div {
            class: "rating-stars",
            for position in 1..=10u8 {
                button {
                    key: "{position}",
                    r#type: "button",
                    class: if position <= value { "star filled" } else { "star" },
                    disabled: disabled,
                    onclick: move |_| on_rate.call(position),
                    Icon {
                        icon: FaStar,
                        width: 16,
                        height: 16,
                    }
                }
            }
        }
    }
}
