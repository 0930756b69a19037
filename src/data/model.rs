use std::collections::HashSet;

use super::error::MalformedDataError;

/// What a node stands for in an article-entity network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	/// A source document from the study corpus. Drawn in the article color.
	Article,
	/// A biomedical entity extracted from one or more articles. Drawn in
	/// the entity color.
	Entity,
}

impl Category {
	/// Parses the category string used in network files.
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"article" => Some(Self::Article),
			"entity" => Some(Self::Entity),
			_ => None,
		}
	}
}

/// One graph node. Identity and category never change after load; only
/// the on-screen position (owned by the viewer) does.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Unique id within the graph.
	pub id: String,
	/// Display label drawn next to the node.
	pub label: String,
	/// Determines color and shape.
	pub category: Category,
}

/// An undirected article-entity connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Id of one endpoint.
	pub source: String,
	/// Id of the other endpoint.
	pub target: String,
}

/// The node/edge structure for one analysis instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	/// All nodes, unique by id.
	pub nodes: Vec<Node>,
	/// All edges; endpoints must resolve to entries in `nodes`.
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Checks the structural invariants: node ids are unique and every
	/// edge endpoint resolves to a loaded node.
	pub fn validate(&self) -> Result<(), MalformedDataError> {
		let mut ids = HashSet::with_capacity(self.nodes.len());
		for node in &self.nodes {
			if !ids.insert(node.id.as_str()) {
				return Err(MalformedDataError::DuplicateNode(node.id.clone()));
			}
		}
		for edge in &self.edges {
			for end in [&edge.source, &edge.target] {
				if !ids.contains(end.as_str()) {
					return Err(MalformedDataError::DanglingEdge {
						source: edge.source.clone(),
						target: edge.target.clone(),
						missing: end.clone(),
					});
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn node(id: &str, category: Category) -> Node {
		Node {
			id: id.into(),
			label: id.into(),
			category,
		}
	}

	fn edge(source: &str, target: &str) -> Edge {
		Edge {
			source: source.into(),
			target: target.into(),
		}
	}

	#[test]
	fn valid_graph_passes() {
		let graph = Graph {
			nodes: vec![node("A", Category::Article), node("E1", Category::Entity)],
			edges: vec![edge("A", "E1")],
		};
		assert_eq!(graph.validate(), Ok(()));
	}

	#[test]
	fn empty_graph_passes() {
		assert_eq!(Graph::default().validate(), Ok(()));
	}

	#[test]
	fn duplicate_node_id_is_rejected() {
		let graph = Graph {
			nodes: vec![node("A", Category::Article), node("A", Category::Entity)],
			edges: vec![],
		};
		assert_eq!(
			graph.validate(),
			Err(MalformedDataError::DuplicateNode("A".into()))
		);
	}

	#[test]
	fn dangling_edge_is_rejected() {
		let graph = Graph {
			nodes: vec![node("A", Category::Article)],
			edges: vec![edge("A", "GONE")],
		};
		assert_eq!(
			graph.validate(),
			Err(MalformedDataError::DanglingEdge {
				source: "A".into(),
				target: "GONE".into(),
				missing: "GONE".into(),
			})
		);
	}

	#[test]
	fn category_parsing_covers_exactly_two_values() {
		assert_eq!(Category::parse("article"), Some(Category::Article));
		assert_eq!(Category::parse("entity"), Some(Category::Entity));
		assert_eq!(Category::parse("Article"), None);
		assert_eq!(Category::parse("protein"), None);
		assert_eq!(Category::parse(""), None);
	}
}
