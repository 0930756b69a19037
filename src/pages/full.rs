use leptos::prelude::*;

use crate::components::entity_graph::EntityGraphCanvas;
use crate::data::{self, Graph, MalformedDataError};

/// Pre-built network file for the full study, shipped with the app.
const FULL_NETWORK: &str = include_str!("../../data/full_study.json");

fn full_network() -> Result<Graph, MalformedDataError> {
	data::load(FULL_NETWORK)
}

/// Full-study page: the pre-built article-entity network.
#[component]
pub fn FullStudy() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="load-error">
					<h1>"The full-study network could not be loaded"</h1>

					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
				</div>
			}
		}>
			{move || {
				full_network()
					.map(|graph| {
						view! {
							<div class="fullscreen-graph">
								<EntityGraphCanvas
									graph=Signal::derive(move || graph.clone())
									fullscreen=true
								/>
								<div class="graph-overlay">
									<h1>"Full study"</h1>
									<p class="subtitle">
										"Articles to extracted entities. Drag nodes to reposition. Scroll to zoom."
									</p>
								</div>
							</div>
						}
					})
			}}
		</ErrorBoundary>
	}
}
