use std::fmt;

/// Raised when a static network source fails structural validation.
///
/// This is the only error the data store produces; the viewer shows it
/// instead of rendering a partial graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedDataError {
	/// The source text could not be parsed at all.
	Unreadable(String),

	/// A node declares a category outside {article, entity}.
	UnknownCategory {
		/// Id of the offending node.
		id: String,
		/// The category string as it appeared in the source.
		category: String,
	},

	/// Two nodes share the same id.
	DuplicateNode(String),

	/// An edge endpoint does not name any loaded node.
	DanglingEdge {
		/// The edge's source id.
		source: String,
		/// The edge's target id.
		target: String,
		/// Whichever endpoint failed to resolve.
		missing: String,
	},
}

impl fmt::Display for MalformedDataError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unreadable(msg) => write!(f, "unreadable network data: {msg}"),
			Self::UnknownCategory { id, category } => {
				write!(f, "node `{id}` has unknown category `{category}`")
			}
			Self::DuplicateNode(id) => write!(f, "duplicate node id `{id}`"),
			Self::DanglingEdge {
				source,
				target,
				missing,
			} => write!(
				f,
				"edge `{source}` -> `{target}` references missing node `{missing}`"
			),
		}
	}
}

impl std::error::Error for MalformedDataError {}
