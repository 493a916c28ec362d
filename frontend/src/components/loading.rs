use yew::prelude::*;

#[function_component(LoadingIndicator)]
pub fn loading_indicator() -> Html {
    html! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="loading-dot"></span>
            <span class="loading-dot"></span>
            <span class="loading-dot"></span>
            <span class="visually-hidden">{"Loading…"}</span>
        </div>
    }
}
