use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinerec::recommend::query::{clamp_count, Preferences, SearchQuery};
use cinerec::Command;

#[derive(Parser, Debug)]
#[command(name = "cinerec")]
#[command(about = "Movie catalog browser and recommendation search", long_about = None)]
struct Args {
    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Recommendation server base URL (overrides config file and environment)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Browse the movie catalog
    List {
        /// 1-based catalog page
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Movies per page
        #[arg(short, long)]
        limit: Option<u32>,
        /// Keep only titles containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Suggest movies similar to a known movie
    ById {
        movie_id: String,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Suggest movies matching free-text keywords
    ByKeyword {
        keywords: String,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Suggest movies from a preference profile
    ByPreference {
        /// Genres, comma separated (e.g. "Action,Comedy")
        #[arg(long)]
        genres: Option<String>,
        /// Actors, comma separated
        #[arg(long)]
        cast: Option<String>,
        /// Directors, comma separated
        #[arg(long)]
        directors: Option<String>,
        /// Screenwriters, comma separated
        #[arg(long)]
        writers: Option<String>,
        /// Languages, comma separated
        #[arg(long)]
        languages: Option<String>,
        /// Countries, comma separated
        #[arg(long)]
        countries: Option<String>,
        /// Earliest release date (YYYY-MM-DD)
        #[arg(long)]
        min_year: Option<chrono::NaiveDate>,
        /// Latest release date (YYYY-MM-DD)
        #[arg(long)]
        max_year: Option<chrono::NaiveDate>,
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct CommonArgs {
    /// Number of suggestions to request (below 1 coerces to 1)
    #[arg(short = 'n', long, default_value = "10")]
    count: String,

    /// 0-based page of results to display
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Copy the first suggestion's movie id to the terminal clipboard
    #[arg(long)]
    copy_first_id: bool,
}

fn to_command(cli: CliCommand) -> Command {
    match cli {
        CliCommand::List {
            page,
            limit,
            filter,
        } => Command::List {
            page,
            limit,
            filter,
        },
        CliCommand::ById { movie_id, common } => {
            recommend(SearchQuery::ById { movie_id }, common)
        }
        CliCommand::ByKeyword { keywords, common } => {
            recommend(SearchQuery::ByKeyword { keywords }, common)
        }
        CliCommand::ByPreference {
            genres,
            cast,
            directors,
            writers,
            languages,
            countries,
            min_year,
            max_year,
            common,
        } => recommend(
            SearchQuery::ByPreference(Preferences {
                genres,
                cast,
                directors,
                writers,
                languages,
                countries,
                min_year,
                max_year,
            }),
            common,
        ),
    }
}

fn recommend(query: SearchQuery, common: CommonArgs) -> Command {
    Command::Recommend {
        query,
        count: clamp_count(&common.count),
        page: common.page,
        copy_first_id: common.copy_first_id,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinerec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let command = to_command(args.command);

    if let Err(e) = cinerec::run(args.config.as_deref(), args.base_url.as_deref(), command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
