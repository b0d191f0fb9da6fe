use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use movie_store::{Movie, MovieStore};
use server::config::{DEFAULT_HOST, DEFAULT_PORT};
use server::ServerConfig;
use std::path::{Path, PathBuf};
use tracing::info;

/// In-memory movie GraphQL API
#[derive(Parser)]
#[command(name = "movie-graphql")]
#[command(about = "GraphQL API over an in-memory movie list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// JSON fixture to seed the store with instead of the built-in one
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,

    /// Show the movies the server would start with
    Seed {
        /// JSON fixture to read instead of the built-in one
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, seed } => handle_serve(host, port, seed.as_deref()).await?,
        Commands::Schema => handle_schema(),
        Commands::Seed { seed } => handle_seed(seed.as_deref())?,
    }

    Ok(())
}

fn load_store(seed: Option<&Path>) -> Result<MovieStore> {
    match seed {
        Some(path) => MovieStore::load_from_file(path)
            .with_context(|| format!("Failed to load seed fixture {}", path.display())),
        None => Ok(MovieStore::seeded()),
    }
}

/// Handle the 'serve' command
async fn handle_serve(host: String, port: u16, seed: Option<&Path>) -> Result<()> {
    let store = load_store(seed)?;
    let config = ServerConfig::new(host, port);

    println!(
        "{} Starting server on {}",
        "✓".green(),
        format!("http://{}/graphql", config.addr()).bold()
    );
    info!("Starting movie GraphQL server");

    server::serve(config, store).await
}

/// Handle the 'schema' command
fn handle_schema() {
    print!("{}", server::schema::sdl());
}

/// Handle the 'seed' command
fn handle_seed(seed: Option<&Path>) -> Result<()> {
    let store = load_store(seed)?;

    println!("{}", format!("Seed movies ({}):", store.len()).bold().blue());
    for movie in store.list_all() {
        print_movie(movie);
    }
    Ok(())
}

fn print_movie(movie: &Movie) {
    println!(
        "{} {} - {} ({})",
        format!("[{}]", movie.id).green(),
        movie.title,
        movie.director,
        movie.release_date
    );
}
