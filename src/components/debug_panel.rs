//! Debug Panel Component
//!
//! Turn count and anomaly flags, shown only with `?debug=1`.

use leptos::prelude::*;

use crate::context::use_mansion;
use crate::mansion::DebugInfo;

#[component]
pub fn DebugPanel() -> impl IntoView {
    let mansion = use_mansion();
    let field = move |pick: fn(&DebugInfo) -> String| {
        move || mansion.debug_info.with(|info| info.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <Show when=move || mansion.debug>
            <aside id="debug-panel" class="debug-panel">
                <p>"turn: " <span id="debug-turn">{field(|info| info.turn.clone())}</span></p>
                <p>"anomaly: " <span id="debug-anomaly">{field(|info| info.anomaly.to_string())}</span></p>
                <p>"type: " <span id="debug-type">{field(|info| info.anomaly_type.clone())}</span></p>
            </aside>
        </Show>
    }
}
