//! The data files embedded in the app must stay loadable.

use entity_network_canvas::data::{self, Category, EntityClass};
use pretty_assertions::assert_eq;

const PILOT_RECORDS: &str = include_str!("../data/pilot_study.json");
const FULL_NETWORK: &str = include_str!("../data/full_study.json");

#[test]
fn pilot_records_build_a_valid_network() {
	let records = data::records_from_json(PILOT_RECORDS).unwrap();
	let graph = data::build_network(&records, &EntityClass::ALL).unwrap();

	assert_eq!(graph.validate(), Ok(()));
	assert!(!graph.nodes.is_empty());
	assert!(!graph.edges.is_empty());

	// The editorial has no extracted entities and must not appear.
	assert!(
		graph
			.nodes
			.iter()
			.all(|n| !n.label.contains("study design pitfalls"))
	);

	// Every article in the network connects to at least one entity.
	for node in graph.nodes.iter().filter(|n| n.category == Category::Article) {
		assert!(
			graph
				.edges
				.iter()
				.any(|e| e.source == node.id || e.target == node.id),
			"isolated article node {}",
			node.id
		);
	}
}

#[test]
fn pilot_records_share_entities_across_articles() {
	let records = data::records_from_json(PILOT_RECORDS).unwrap();
	let graph = data::build_network(&records, &EntityClass::ALL).unwrap();

	// CA-125 and HE4 are mentioned by two articles each but exist once.
	let ca125: Vec<_> = graph
		.nodes
		.iter()
		.filter(|n| n.id == "PROTEINS::CA-125")
		.collect();
	assert_eq!(ca125.len(), 1);
	let ca125_edges = graph
		.edges
		.iter()
		.filter(|e| e.target == "PROTEINS::CA-125")
		.count();
	assert_eq!(ca125_edges, 2);
}

#[test]
fn full_study_network_loads() {
	let graph = data::load(FULL_NETWORK).unwrap();

	assert_eq!(graph.validate(), Ok(()));
	assert!(graph.nodes.len() > 50);
	assert!(
		graph
			.nodes
			.iter()
			.any(|n| n.category == Category::Article)
	);
	assert!(
		graph
			.nodes
			.iter()
			.any(|n| n.category == Category::Entity)
	);
}
