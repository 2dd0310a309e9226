use std::path::PathBuf;

use clap::Parser;
use dungeon_paths::{GraphError, Markers};

#[derive(Parser, Debug)]
#[command(
    name = "dungeon",
    version,
    about = "Find the shortest way from A to B through a dungeon map"
)]
pub struct Cli {
    /// Map file
    #[arg(default_value = "dungeon.txt")]
    pub map: PathBuf,

    /// Start marker
    #[arg(long, default_value = "A")]
    pub start: String,

    /// Goal marker
    #[arg(long, default_value = "B")]
    pub goal: String,

    /// Obstacle marker
    #[arg(long, default_value = "#")]
    pub obstacle: String,

    /// Empty-cell marker
    #[arg(long, default_value = " ")]
    pub empty: String,

    /// Marker drawn along the path
    #[arg(long, default_value = "*")]
    pub path: String,

    /// Draw the path without colour
    #[arg(long)]
    pub no_color: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn markers(&self) -> Result<Markers, GraphError> {
        Markers::try_new(
            &self.start,
            &self.goal,
            &self.obstacle,
            &self.empty,
            &self.path,
        )
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon_paths::Role;

    #[test]
    fn defaults_match_the_classic_map() {
        let cli = Cli::try_parse_from(["dungeon"]).unwrap();
        assert_eq!(cli.map, PathBuf::from("dungeon.txt"));
        assert_eq!(cli.markers().unwrap(), Markers::default());
        assert!(!cli.no_color);
        assert_eq!(cli.default_filter(), "warn");
    }

    #[test]
    fn custom_markers_and_flags() {
        let cli = Cli::try_parse_from([
            "dungeon", "cave.txt", "--start", "S", "--goal", "G", "--obstacle", "X", "--empty",
            ".", "--path", "o", "--no-color", "-v",
        ])
        .unwrap();
        assert_eq!(cli.map, PathBuf::from("cave.txt"));
        let m = cli.markers().unwrap();
        assert_eq!((m.start, m.goal, m.obstacle, m.empty, m.path), ('S', 'G', 'X', '.', 'o'));
        assert!(cli.no_color);
        assert_eq!(cli.default_filter(), "debug");
    }

    #[test]
    fn long_marker_is_rejected() {
        let cli = Cli::try_parse_from(["dungeon", "--obstacle", "##"]).unwrap();
        assert_eq!(
            cli.markers().unwrap_err(),
            GraphError::InvalidMarker {
                role: Role::Obstacle,
                value: "##".to_string()
            }
        );
    }
}
