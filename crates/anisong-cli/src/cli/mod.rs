use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `anisong` binary.
#[derive(Debug, Parser)]
#[command(name = "anisong", version, about = "Search an anime song catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return (overrides search.max_results_per_search)
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog database path (overrides catalog.path)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "anisong",
            "--format",
            "raw",
            "--limit",
            "10",
            "--verbose",
            "random",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Random(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["anisong", "random", "--quiet", "--db", "/tmp/songs.db"])
            .expect("cli should parse");

        assert!(cli.quiet);
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/songs.db"));
        assert_eq!(flags.format, OutputFormat::Json);
    }

    #[test]
    fn output_format_rejects_table() {
        let parsed = Cli::try_parse_from(["anisong", "--format", "table", "random"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn anime_command_takes_filters() {
        let cli = Cli::try_parse_from([
            "anisong",
            "anime",
            "madoka",
            "--partial",
            "--song-type",
            "opening,2",
            "--anime-genre",
            "Drama",
            "--ignore-duplicates",
            "--dedupe-policy",
            "name-artist",
        ])
        .expect("cli should parse");

        let Commands::Anime(args) = cli.command else {
            panic!("expected anime command");
        };
        assert_eq!(args.query, "madoka");
        assert!(args.partial);
        assert_eq!(args.filters.song_types, vec!["opening", "2"]);
        assert_eq!(args.filters.anime_genres, vec!["Drama"]);
        assert!(args.filters.ignore_duplicates);
        assert_eq!(args.filters.dedupe_policy.as_deref(), Some("name-artist"));
    }

    #[test]
    fn artist_id_command_takes_expansion_flags() {
        let cli = Cli::try_parse_from([
            "anisong",
            "artist-id",
            "10",
            "20",
            "--granularity",
            "full",
            "--max-other-artists",
            "1",
            "--role",
            "vocalist",
            "--role",
            "performer",
        ])
        .expect("cli should parse");

        let Commands::ArtistId(args) = cli.command else {
            panic!("expected artist-id command");
        };
        assert_eq!(args.artist_ids, vec![10, 20]);
        assert_eq!(args.expansion.granularity.as_deref(), Some("full"));
        assert_eq!(args.expansion.max_other_artists, Some(1));
        assert_eq!(args.expansion.roles, vec!["vocalist", "performer"]);
    }

    #[test]
    fn import_requires_both_dumps() {
        let parsed = Cli::try_parse_from(["anisong", "import", "--songs", "songs.json"]);
        assert!(parsed.is_err());
    }
}
