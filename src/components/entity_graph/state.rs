use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::data::{Category, Graph};

pub const NODE_RADIUS: f64 = 6.0;
pub const HIT_RADIUS: f64 = 12.0;

/// Fallback category colors; the stylesheet overrides these when it
/// defines `--article-color` / `--entity-color`.
pub const ARTICLE_COLOR: &str = "lightblue";
pub const ENTITY_COLOR: &str = "lightgreen";

/// Per-node payload carried through the force simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub label: String,
	pub category: Category,
}

/// The colors nodes are drawn with, by category.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	pub article: String,
	pub entity: String,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			article: ARTICLE_COLOR.into(),
			entity: ENTITY_COLOR.into(),
		}
	}
}

/// Pan/zoom applied at draw time. Node coordinates never include it.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// Pointer interaction has exactly two states: idle, or dragging one node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pointer {
	/// No node is being dragged. Hovering in this state is inert.
	#[default]
	Idle,
	/// One node follows the pointer; `last_x`/`last_y` are the previous
	/// pointer position in screen space.
	Dragging {
		node: DefaultNodeIdx,
		last_x: f64,
		last_y: f64,
	},
}

/// All viewer-side state for one open canvas: the force-laid-out graph,
/// the viewport transform and the pointer machine.
pub struct EntityGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub pointer: Pointer,
	pub palette: Palette,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

impl EntityGraphState {
	/// Seeds the simulation from a validated graph. Nodes start on a ring
	/// around the world origin; the transform centers that origin in the
	/// viewport.
	pub fn new(data: &Graph, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = ((120.0 * angle.cos()) as f32, (120.0 * angle.sin()) as f32);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					category: node.category,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for edge in &data.edges {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&edge.source), id_to_idx.get(&edge.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pointer: Pointer::Idle,
			palette: Palette::default(),
			width,
			height,
			animation_running: true,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Pointer-down starts a drag only when it lands on a node; presses
	/// on the background leave the machine idle.
	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		if let Some(node) = self.node_at_position(sx, sy) {
			self.pointer = Pointer::Dragging {
				node,
				last_x: sx,
				last_y: sy,
			};
		}
	}

	/// While dragging, moves the grabbed node by the pointer delta; while
	/// idle this is inert (node hover highlights were removed).
	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if let Pointer::Dragging {
			node,
			last_x,
			last_y,
		} = self.pointer
		{
			let (dx, dy) = (
				(sx - last_x) / self.transform.k,
				(sy - last_y) / self.transform.k,
			);
			self.drag_by(node, dx, dy);
			self.pointer = Pointer::Dragging {
				node,
				last_x: sx,
				last_y: sy,
			};
		}
	}

	pub fn pointer_up(&mut self) {
		self.pointer = Pointer::Idle;
	}

	/// Clicking a node or edge shows nothing. The per-node summary panel
	/// was removed on purpose; this handler stays wired and inert so the
	/// old behavior cannot slip back in unnoticed.
	pub fn click(&mut self, _sx: f64, _sy: f64) {}

	/// Moves one node by a world-space delta. No other node moves, and
	/// the dragged node becomes a layout anchor so the simulation stops
	/// fighting the user.
	pub fn drag_by(&mut self, target: DefaultNodeIdx, dx: f64, dy: f64) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == target {
				node.data.x += dx as f32;
				node.data.y += dy as f32;
				node.data.is_anchor = true;
			}
		});
	}

	/// Zooms around the given screen point. Only the viewport transform
	/// changes; node positions are untouched. Wheel-up zooms in.
	pub fn wheel_zoom(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
