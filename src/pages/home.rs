use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page linking the two analysis instances.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="home">
			<h1>"Article-entity networks"</h1>
			<p>
				"Interactive networks connecting study articles to the biomarker "
				"entities extracted from them. Article nodes are the boxes, entity "
				"nodes are the discs. Drag nodes to reposition, scroll to zoom."
			</p>

			<ul class="network-list">
				<li>
					<A href="/pilot">"Pilot study network"</A>
					" - built on the fly from the pilot extraction records"
				</li>
				<li>
					<A href="/full">"Full study network"</A>
					" - loaded from the pre-built network file"
				</li>
			</ul>
		</div>
	}
}
