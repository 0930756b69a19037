use leptos::prelude::*;

use crate::components::entity_graph::EntityGraphCanvas;
use crate::data::{self, EntityClass, Graph, MalformedDataError};

/// Extraction records produced by the pilot-study run, shipped with the app.
const PILOT_RECORDS: &str = include_str!("../../data/pilot_study.json");

fn pilot_network() -> Result<Graph, MalformedDataError> {
	let records = data::records_from_json(PILOT_RECORDS)?;
	data::build_network(&records, &EntityClass::ALL)
}

/// Pilot-study page: one network of articles and every extracted entity.
#[component]
pub fn PilotStudy() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="load-error">
					<h1>"The pilot-study network could not be loaded"</h1>

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
				pilot_network()
					.map(|graph| {
						view! {
							<div class="fullscreen-graph">
								<EntityGraphCanvas
									graph=Signal::derive(move || graph.clone())
									fullscreen=true
								/>
								<div class="graph-overlay">
									<h1>"Pilot study"</h1>
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
