use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{EntityGraphState, NODE_RADIUS};
use crate::data::Category;

const BACKGROUND: &str = "#ffffff";
const EDGE_COLOR: &str = "#848484";
const LABEL_COLOR: &str = "#000000";

pub fn render(state: &EntityGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

/// Edges are plain connecting lines: no arrows, dashes or highlights.
fn draw_edges(state: &EntityGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(1.0 / state.transform.k);

	state.graph.visit_edges(|n1, n2, _| {
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

/// Articles draw as boxes and entities as discs, matching the study's
/// published network figures. Labels sit beside the shape.
fn draw_nodes(state: &EntityGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);

		match node.data.user_data.category {
			Category::Article => {
				let (hw, hh) = (NODE_RADIUS * 1.5, NODE_RADIUS);
				ctx.set_fill_style_str(&state.palette.article);
				ctx.fill_rect(x - hw, y - hh, hw * 2.0, hh * 2.0);
				ctx.set_stroke_style_str(EDGE_COLOR);
				ctx.set_line_width(1.0 / k);
				ctx.stroke_rect(x - hw, y - hh, hw * 2.0, hh * 2.0);
			}
			Category::Entity => {
				ctx.set_fill_style_str(&state.palette.entity);
				ctx.begin_path();
				let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
				ctx.fill();
			}
		}

		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(
			&node.data.user_data.label,
			x + NODE_RADIUS * 1.5 + 3.0,
			y + 3.0,
		);
	});
}
