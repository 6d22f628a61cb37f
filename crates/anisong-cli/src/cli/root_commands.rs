use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Songs of anime whose name matches.
    Anime(AnimeArgs),
    /// Songs of the given ANN anime ids.
    #[command(name = "ann-id")]
    AnnId(AnnIdArgs),
    /// Songs whose name matches.
    Song(SongArgs),
    /// Songs credited to the given artist ids, expanded through group membership.
    #[command(name = "artist-id")]
    ArtistId(ArtistIdArgs),
    /// Songs credited to artists whose name matches.
    Artist(ArtistArgs),
    /// Run a global search read from a JSON file.
    Global(GlobalArgs),
    /// Random sample of songs.
    Random(RandomArgs),
    /// Load upstream JSON dumps into an empty catalog.
    Import(ImportArgs),
}

/// Song and anime attribute filters shared by every search command.
#[derive(Clone, Debug, Default, Args)]
#[allow(clippy::struct_field_names)]
pub struct FilterArgs {
    /// Drop later duplicates of the same recording.
    #[arg(long)]
    pub ignore_duplicates: bool,
    /// Fields compared when dropping duplicates: name-artist-type, name-artist, name.
    #[arg(long)]
    pub dedupe_policy: Option<String>,
    /// Song types to keep (opening, ending, insert or 1/2/3).
    #[arg(long = "song-type", value_delimiter = ',')]
    pub song_types: Vec<String>,
    /// Song categories to keep.
    #[arg(long = "song-category")]
    pub song_categories: Vec<String>,
    /// Lowest difficulty kept (inclusive). Songs without a difficulty always pass.
    #[arg(long)]
    pub difficulty_min: Option<f64>,
    /// Highest difficulty kept (inclusive).
    #[arg(long)]
    pub difficulty_max: Option<f64>,
    /// Anime types to keep.
    #[arg(long = "anime-type")]
    pub anime_types: Vec<String>,
    /// Anime seasons to keep, e.g. "Winter 2011".
    #[arg(long = "anime-season")]
    pub anime_seasons: Vec<String>,
    /// Anime genres to keep.
    #[arg(long = "anime-genre")]
    pub anime_genres: Vec<String>,
    /// Anime tags to keep.
    #[arg(long = "anime-tag")]
    pub anime_tags: Vec<String>,
}

/// Membership-graph expansion flags for artist commands.
#[derive(Clone, Debug, Default, Args)]
pub struct ExpansionArgs {
    /// How far to expand: artist, groups, members, full.
    #[arg(long)]
    pub granularity: Option<String>,
    /// Most other artists allowed in the matched credit role.
    #[arg(long)]
    pub max_other_artists: Option<u32>,
    /// Credit roles searched (defaults to vocalist, backing_vocalist, performer).
    #[arg(long = "role", value_delimiter = ',')]
    pub roles: Vec<String>,
    /// Search every credit role.
    #[arg(long, conflicts_with = "roles")]
    pub all_roles: bool,
}

/// Arguments for `anisong anime`.
#[derive(Clone, Debug, Args)]
pub struct AnimeArgs {
    pub query: String,
    /// Match on substring instead of the whole normalized name.
    #[arg(long)]
    pub partial: bool,
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for `anisong ann-id`.
#[derive(Clone, Debug, Args)]
pub struct AnnIdArgs {
    #[arg(required = true)]
    pub ann_ids: Vec<i64>,
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for `anisong song`.
#[derive(Clone, Debug, Args)]
pub struct SongArgs {
    pub query: String,
    #[arg(long)]
    pub partial: bool,
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for `anisong artist-id`.
#[derive(Clone, Debug, Args)]
pub struct ArtistIdArgs {
    #[arg(required = true)]
    pub artist_ids: Vec<i64>,
    #[command(flatten)]
    pub expansion: ExpansionArgs,
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for `anisong artist`.
#[derive(Clone, Debug, Args)]
pub struct ArtistArgs {
    pub query: String,
    #[arg(long)]
    pub partial: bool,
    #[command(flatten)]
    pub expansion: ExpansionArgs,
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for `anisong global`.
#[derive(Clone, Debug, Args)]
pub struct GlobalArgs {
    /// JSON file holding `searches` and `combination_logic`.
    pub file: PathBuf,
}

/// Arguments for `anisong random`.
#[derive(Clone, Debug, Args)]
pub struct RandomArgs {
    /// How many songs to sample (default 50).
    #[arg(long)]
    pub count: Option<u32>,
}

/// Arguments for `anisong import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Song database dump (animes keyed by ANN id).
    #[arg(long)]
    pub songs: PathBuf,
    /// Artist database dump (artists keyed by id).
    #[arg(long)]
    pub artists: PathBuf,
}
