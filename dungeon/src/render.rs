//! Terminal output for a solved map.

use crossterm::style::Stylize;
use dungeon_paths::{Graph, GraphError, NodeId};

/// Paint `text` bold yellow with ANSI escapes.
pub fn colorize(text: &str) -> String {
    text.yellow().bold().to_string()
}

/// Render the map with `path` drawn on it, colouring the path marker
/// when `color` is set.
pub fn render(graph: &Graph, path: &[NodeId], color: bool) -> Result<String, GraphError> {
    if color {
        graph.render_with(path, |ch| colorize(ch.encode_utf8(&mut [0; 4])))
    } else {
        graph.render(path)
    }
}
