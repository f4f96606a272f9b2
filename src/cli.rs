use clap::Parser;

/// Alcove: a personal portfolio for the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "alcove")]
#[command(version)]
#[command(about = "Browse content shelves, blog posts, and an about page from the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding the content JSON files (books.json, papers.json, ...).
    /// Falls back to the data built into the binary when omitted.
    #[arg(short = 'C', long, env = "ALCOVE_CONTENT_DIR", value_name = "DIR")]
    pub content_dir: Option<std::path::PathBuf>,

    /// Shelf to open on startup (book, paper, anime, blog, project, hobby)
    #[arg(short, long, value_name = "KIND")]
    pub shelf: Option<String>,

    /// Theme preset to use when no theme.toml exists (default, vibrant)
    #[arg(long)]
    pub theme: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<std::path::PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["alcove"]);
        assert!(cli.content_dir.is_none());
        assert!(cli.shelf.is_none());
        assert!(cli.theme.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_content_dir_flag() {
        let cli = Cli::parse_from(["alcove", "-C", "/tmp/content"]);
        assert_eq!(
            cli.content_dir,
            Some(std::path::PathBuf::from("/tmp/content"))
        );
    }

    #[test]
    fn test_shelf_flag() {
        let cli = Cli::parse_from(["alcove", "--shelf", "anime"]);
        assert_eq!(cli.shelf.as_deref(), Some("anime"));
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::parse_from(["alcove", "--theme", "vibrant"]);
        assert_eq!(cli.theme.as_deref(), Some("vibrant"));
    }
}
