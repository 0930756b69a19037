//! Builds article-entity networks from raw extraction records.
//!
//! The upstream extraction pipeline emits one record per article with a
//! delimited cell per entity class. This module turns those records into
//! the same [`Graph`] shape the pre-built network files use.

use std::collections::HashSet;

use serde::Deserialize;

use super::error::MalformedDataError;
use super::model::{Category, Edge, Graph, Node};

/// The five entity classes the extraction pipeline reports per article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityClass {
	/// Functional molecules built from amino acids.
	Proteins,
	/// DNA sequences coding for proteins or RNAs.
	Genes,
	/// Chromosomes or specific DNA regions.
	Dna,
	/// Transcripts, mRNA and other RNA types.
	Rna,
	/// Methylation-influenced or methylation-marked RNA.
	MethRna,
}

impl EntityClass {
	/// Every class, in the order the extraction output lists them.
	pub const ALL: [Self; 5] = [
		Self::Proteins,
		Self::Genes,
		Self::Dna,
		Self::Rna,
		Self::MethRna,
	];

	/// Prefix used to namespace node ids, e.g. `GENES::TP53`.
	pub fn id_prefix(self) -> &'static str {
		match self {
			Self::Proteins => "PROTEINS",
			Self::Genes => "GENES",
			Self::Dna => "DNA",
			Self::Rna => "RNA",
			Self::MethRna => "METH-RNA",
		}
	}

	fn cell(self, record: &ExtractionRecord) -> &str {
		match self {
			Self::Proteins => &record.proteins,
			Self::Genes => &record.genes,
			Self::Dna => &record.dna,
			Self::Rna => &record.rna,
			Self::MethRna => &record.meth_rna,
		}
	}
}

/// One row of the upstream extraction output.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ExtractionRecord {
	/// Source file the article came from.
	#[serde(default)]
	pub file_name: String,
	/// Human-readable article title; becomes the article node label.
	pub article_name: String,
	/// Delimited protein mentions.
	#[serde(default)]
	pub proteins: String,
	/// Delimited gene mentions.
	#[serde(default)]
	pub genes: String,
	/// Delimited DNA mentions.
	#[serde(default)]
	pub dna: String,
	/// Delimited RNA mentions.
	#[serde(default)]
	pub rna: String,
	/// Delimited methylation-RNA mentions.
	#[serde(default)]
	pub meth_rna: String,
}

/// Parses a records file (JSON array of [`ExtractionRecord`]).
pub fn records_from_json(source: &str) -> Result<Vec<ExtractionRecord>, MalformedDataError> {
	serde_json::from_str(source).map_err(|e| MalformedDataError::Unreadable(e.to_string()))
}

/// Splits a delimited extraction cell into separate uppercase items.
///
/// Separators are comma, semicolon, pipe, newline and slash. Internal
/// whitespace collapses to single spaces, repeats keep their first
/// position only, and empty or `nan` cells yield nothing.
pub fn split_items(cell: &str) -> Vec<String> {
	let trimmed = cell.trim();
	if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
		return Vec::new();
	}

	let mut seen = HashSet::new();
	let mut items = Vec::new();
	for part in trimmed.split([',', ';', '|', '\n', '/']) {
		let normalized = part.split_whitespace().collect::<Vec<_>>().join(" ");
		if normalized.is_empty() {
			continue;
		}
		let upper = normalized.to_uppercase();
		if seen.insert(upper.clone()) {
			items.push(upper);
		}
	}
	items
}

/// Builds one undirected article-entity network covering `classes`.
///
/// An article node is added only once it connects to at least one
/// entity, so the canvas never shows isolated articles. Nodes and edges
/// repeated across records collapse to single occurrences.
pub fn build_network(
	records: &[ExtractionRecord],
	classes: &[EntityClass],
) -> Result<Graph, MalformedDataError> {
	let mut graph = Graph::default();
	let mut seen_nodes = HashSet::new();
	let mut seen_edges = HashSet::new();

	for record in records {
		let article = record.article_name.trim();
		if article.is_empty() {
			continue;
		}

		let items: Vec<(EntityClass, String)> = classes
			.iter()
			.flat_map(|&class| {
				split_items(class.cell(record))
					.into_iter()
					.map(move |item| (class, item))
			})
			.collect();
		if items.is_empty() {
			continue;
		}

		let article_id = format!("ARTICLE::{article}");
		if seen_nodes.insert(article_id.clone()) {
			graph.nodes.push(Node {
				id: article_id.clone(),
				label: article.to_string(),
				category: Category::Article,
			});
		}

		for (class, item) in items {
			let entity_id = format!("{}::{item}", class.id_prefix());
			if seen_nodes.insert(entity_id.clone()) {
				graph.nodes.push(Node {
					id: entity_id.clone(),
					label: item,
					category: Category::Entity,
				});
			}
			if seen_edges.insert((article_id.clone(), entity_id.clone())) {
				graph.edges.push(Edge {
					source: article_id.clone(),
					target: entity_id,
				});
			}
		}
	}

	graph.validate()?;
	Ok(graph)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn record(article: &str, genes: &str, proteins: &str) -> ExtractionRecord {
		ExtractionRecord {
			article_name: article.into(),
			genes: genes.into(),
			proteins: proteins.into(),
			..ExtractionRecord::default()
		}
	}

	#[test]
	fn split_handles_all_separators() {
		assert_eq!(
			split_items("TP53, BRCA1; KRAS|MYC/EGFR\nPTEN"),
			vec!["TP53", "BRCA1", "KRAS", "MYC", "EGFR", "PTEN"]
		);
	}

	#[test]
	fn split_normalizes_whitespace_and_case() {
		assert_eq!(
			split_items("  he4 ,  ca  125 "),
			vec!["HE4", "CA 125"]
		);
	}

	#[test]
	fn split_deduplicates_keeping_first_position() {
		assert_eq!(split_items("TP53, brca1, tp53, BRCA1"), vec!["TP53", "BRCA1"]);
	}

	#[test]
	fn split_treats_nan_and_empty_as_nothing() {
		assert_eq!(split_items(""), Vec::<String>::new());
		assert_eq!(split_items("   "), Vec::<String>::new());
		assert_eq!(split_items("nan"), Vec::<String>::new());
		assert_eq!(split_items("NaN"), Vec::<String>::new());
	}

	#[test]
	fn builder_skips_articles_with_no_entities() {
		let records = vec![
			record("Connected Study", "TP53", ""),
			record("Lonely Study", "", ""),
			record("", "BRCA1", ""),
		];
		let graph = build_network(&records, &[EntityClass::Genes]).unwrap();

		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["ARTICLE::Connected Study", "GENES::TP53"]);
		assert_eq!(graph.edges.len(), 1);
	}

	#[test]
	fn builder_deduplicates_shared_entities() {
		let records = vec![
			record("First", "TP53, BRCA1", ""),
			record("Second", "tp53", ""),
		];
		let graph = build_network(&records, &[EntityClass::Genes]).unwrap();

		let entities: Vec<&str> = graph
			.nodes
			.iter()
			.filter(|n| n.category == Category::Entity)
			.map(|n| n.label.as_str())
			.collect();
		assert_eq!(entities, vec!["TP53", "BRCA1"]);
		// Both articles connect to the single TP53 node.
		assert_eq!(graph.edges.len(), 3);
	}

	#[test]
	fn builder_namespaces_classes_separately() {
		let records = vec![record("Study", "MUC16", "MUC16")];
		let graph = build_network(&records, &EntityClass::ALL).unwrap();

		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(
			ids,
			vec!["ARTICLE::Study", "PROTEINS::MUC16", "GENES::MUC16"]
		);
	}

	#[test]
	fn built_networks_always_validate() {
		let records = vec![
			record("A", "TP53/KRAS", "HE4; HE4"),
			record("B", "nan", "CA 125 | HE4"),
		];
		let graph = build_network(&records, &EntityClass::ALL).unwrap();
		assert_eq!(graph.validate(), Ok(()));
	}

	#[test]
	fn records_parse_from_json() {
		let source = r#"[
			{"file_name": "a.pdf", "article_name": "A", "genes": "TP53"},
			{"article_name": "B", "meth_rna": "MALAT1"}
		]"#;
		let records = records_from_json(source).unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].genes, "TP53");
		assert_eq!(records[1].meth_rna, "MALAT1");
		assert_eq!(records[1].file_name, "");
	}
}
