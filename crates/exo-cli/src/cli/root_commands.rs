use clap::{Args, Subcommand, ValueEnum};
use exo_core::PlanetType;
use exo_core::catalog::{HABITABLE_THRESHOLD, SortKey};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Search the archive by planet name.
    Query(QueryArgs),
    /// List potentially habitable planets, best first.
    Habitable(HabitableArgs),
    /// A random selection of planets.
    Random(RandomArgs),
    /// Summary counts for a planet listing.
    Stats(StatsArgs),
    /// Score and classify hand-entered measurements.
    Score(ScoreArgs),
    /// Print the JSON Schema of a planet record.
    Schema,
}

/// Arguments for `exo query`.
#[derive(Clone, Debug, Args)]
pub struct QueryArgs {
    /// Case-insensitive name fragment (omit for all planets)
    pub term: Option<String>,
    /// Max planets to fetch from the archive
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
    /// Sort order for the listing
    #[arg(long, value_enum, default_value = "discovery")]
    pub sort: SortArg,
    /// Keep only names containing this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,
    /// Only planets discovered in this year
    #[arg(long)]
    pub year: Option<i32>,
    /// Only planets of these types (repeatable)
    #[arg(long = "type", value_enum)]
    pub types: Vec<TypeArg>,
}

/// Arguments for `exo habitable`.
#[derive(Clone, Debug, Args)]
pub struct HabitableArgs {
    /// Max planets to fetch before filtering [default: 1000]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
    /// Minimum habitability score
    #[arg(long, default_value_t = HABITABLE_THRESHOLD, value_parser = clap::value_parser!(u8).range(..=100))]
    pub min_score: u8,
}

/// Arguments for `exo random`.
#[derive(Clone, Debug, Args)]
pub struct RandomArgs {
    /// Number of planets to pick
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,
    /// Max planets to fetch before sampling [default: 500]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
}

/// Arguments for `exo stats`.
#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Case-insensitive name fragment (omit for all planets)
    pub term: Option<String>,
    /// Max planets to fetch from the archive
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
}

/// Arguments for `exo score`.
#[derive(Clone, Debug, Args)]
pub struct ScoreArgs {
    /// Equilibrium temperature in kelvin
    #[arg(long)]
    pub temperature: Option<f64>,
    /// Radius in Earth radii
    #[arg(long)]
    pub radius: Option<f64>,
    /// Mass in Earth masses
    #[arg(long)]
    pub mass: Option<f64>,
    /// Orbital semi-major axis in AU
    #[arg(long)]
    pub semi_major_axis: Option<f64>,
    /// Host star effective temperature in kelvin
    #[arg(long)]
    pub stellar_temp: Option<f64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    Discovery,
    Distance,
    Radius,
    Mass,
    Period,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Discovery => Self::Discovery,
            SortArg::Distance => Self::Distance,
            SortArg::Radius => Self::Radius,
            SortArg::Mass => Self::Mass,
            SortArg::Period => Self::Period,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TypeArg {
    Terrestrial,
    SuperEarth,
    MiniNeptune,
    NeptuneLike,
    GasGiant,
    Unknown,
}

impl From<TypeArg> for PlanetType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Terrestrial => Self::Terrestrial,
            TypeArg::SuperEarth => Self::SuperEarth,
            TypeArg::MiniNeptune => Self::MiniNeptune,
            TypeArg::NeptuneLike => Self::NeptuneLike,
            TypeArg::GasGiant => Self::GasGiant,
            TypeArg::Unknown => Self::Unknown,
        }
    }
}
