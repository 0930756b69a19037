//! Loader for pre-built network files.
//!
//! A network file is a JSON object with `nodes` (id, optional label,
//! category string) and `edges` (source, target). Categories and edge
//! endpoints are validated before the graph reaches the viewer.

use serde::Deserialize;

use super::error::MalformedDataError;
use super::model::{Category, Edge, Graph, Node};

#[derive(Deserialize)]
struct RawNetwork {
	nodes: Vec<RawNode>,
	edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
	id: String,
	#[serde(default)]
	label: Option<String>,
	category: String,
}

#[derive(Deserialize)]
struct RawEdge {
	source: String,
	target: String,
}

/// Parses one static network source into a validated [`Graph`].
///
/// Pure transformation; the only failure mode is [`MalformedDataError`].
pub fn load(source: &str) -> Result<Graph, MalformedDataError> {
	let raw: RawNetwork =
		serde_json::from_str(source).map_err(|e| MalformedDataError::Unreadable(e.to_string()))?;

	let nodes = raw
		.nodes
		.into_iter()
		.map(|node| {
			let category =
				Category::parse(&node.category).ok_or_else(|| MalformedDataError::UnknownCategory {
					id: node.id.clone(),
					category: node.category.clone(),
				})?;
			Ok(Node {
				label: node.label.unwrap_or_else(|| node.id.clone()),
				id: node.id,
				category,
			})
		})
		.collect::<Result<Vec<_>, MalformedDataError>>()?;

	let edges = raw
		.edges
		.into_iter()
		.map(|edge| Edge {
			source: edge.source,
			target: edge.target,
		})
		.collect();

	let graph = Graph { nodes, edges };
	graph.validate()?;
	Ok(graph)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn loads_a_small_network() {
		let source = r#"{
			"nodes": [
				{"id": "ARTICLE::Pilot Review", "label": "Pilot Review", "category": "article"},
				{"id": "GENES::TP53", "label": "TP53", "category": "entity"}
			],
			"edges": [
				{"source": "ARTICLE::Pilot Review", "target": "GENES::TP53"}
			]
		}"#;

		let graph = load(source).unwrap();
		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.edges.len(), 1);
		assert_eq!(graph.nodes[0].category, Category::Article);
		assert_eq!(graph.nodes[1].category, Category::Entity);
		assert_eq!(graph.nodes[1].label, "TP53");
	}

	#[test]
	fn label_falls_back_to_id() {
		let source = r#"{
			"nodes": [{"id": "GENES::BRCA1", "category": "entity"}],
			"edges": []
		}"#;
		let graph = load(source).unwrap();
		assert_eq!(graph.nodes[0].label, "GENES::BRCA1");
	}

	#[test]
	fn unknown_category_is_malformed() {
		let source = r#"{
			"nodes": [{"id": "X", "category": "protein"}],
			"edges": []
		}"#;
		assert_eq!(
			load(source),
			Err(MalformedDataError::UnknownCategory {
				id: "X".into(),
				category: "protein".into(),
			})
		);
	}

	#[test]
	fn dangling_edge_is_malformed() {
		let source = r#"{
			"nodes": [{"id": "A", "category": "article"}],
			"edges": [{"source": "A", "target": "MISSING"}]
		}"#;
		assert!(matches!(
			load(source),
			Err(MalformedDataError::DanglingEdge { .. })
		));
	}

	#[test]
	fn garbage_input_is_malformed() {
		assert!(matches!(
			load("not json at all"),
			Err(MalformedDataError::Unreadable(_))
		));
	}
}
