//! Glass Trigger Component

use leptos::prelude::*;

use crate::context::use_mansion;
use crate::mansion::glass_class;
use crate::models::Direction;

/// One of the two clickable glasses
#[component]
pub fn GlassTrigger(direction: Direction, #[prop(into)] label: String) -> impl IntoView {
    let mansion = use_mansion();

    let class = move || {
        let highlighted = mansion.debug && mansion.correct_direction.get() == Some(direction);
        glass_class(direction, mansion.interactive.get(), highlighted)
    };

    view! {
        <button
            class=class
            data-direction=direction.as_str()
            aria-disabled=move || (!mansion.interactive.get()).to_string()
            on:click=move |_| mansion.choose(direction)
        >
            <span class="glass-icon">"🥃"</span>
            <span class="glass-label">{label}</span>
        </button>
    }
}
