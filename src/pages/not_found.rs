use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="home">
			<h1>"Not Found"</h1>
			<p>"There is no network at this address."</p>
		</div>
	}
}
