//! Marquee catalog commands
//!
//! Listing, detail and search views over a loaded catalog.

use anyhow::{bail, Result};
use clap::Subcommand;
use tracing::{info, warn};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use marquee_core::catalog::{not_found_message, MovieId, SearchResponse};
use marquee_core::{MovieCatalog, MovieRecord, SearchCriteria};

/// Exit code for a search request without any usable criteria
const EXIT_INVALID_REQUEST: i32 = 2;

#[derive(Subcommand, Debug)]
pub enum CatalogSubcommand {
    /// List every movie in the catalog
    List {
        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show detailed information about a movie
    Show {
        /// Movie ID
        #[clap(allow_hyphen_values = true)]
        id: MovieId,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Search movies by name, id or genre
    Search {
        /// Part of the title (case-insensitive)
        #[clap(long)]
        name: Option<String>,

        /// Exact movie ID; takes precedence over name and genre
        #[clap(long, allow_hyphen_values = true)]
        id: Option<MovieId>,

        /// Part of the genre (case-insensitive)
        #[clap(long)]
        genre: Option<String>,

        /// Output the full response as JSON
        #[clap(long)]
        json: bool,
    },
}

impl CatalogSubcommand {
    pub fn execute(self, catalog: &dyn MovieCatalog) -> Result<()> {
        match self {
            CatalogSubcommand::List { json } => execute_list(catalog, json),
            CatalogSubcommand::Show { id, json } => execute_show(catalog, id, json),
            CatalogSubcommand::Search {
                name,
                id,
                genre,
                json,
            } => execute_search(catalog, SearchCriteria { name, id, genre }, json),
        }
    }
}

/// Table row for movie listings
#[derive(Tabled)]
struct MovieRow {
    #[tabled(rename = "ID")]
    id: MovieId,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Director")]
    director: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

impl From<&MovieRecord> for MovieRow {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            id: movie.id(),
            title: movie.title().to_string(),
            director: movie.director().to_string(),
            year: movie.year(),
            genre: movie.genre().to_string(),
            rating: format!("{:.1}", movie.rating()),
        }
    }
}

fn render_table<'a>(movies: impl IntoIterator<Item = &'a MovieRecord>) -> String {
    let rows: Vec<MovieRow> = movies.into_iter().map(MovieRow::from).collect();
    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn execute_list(catalog: &dyn MovieCatalog, json_output: bool) -> Result<()> {
    let movies = catalog.list_all();

    if json_output {
        println!("{}", serde_json::to_string_pretty(movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    println!("{} movie(s):\n", movies.len());
    println!("{}", render_table(movies));
    Ok(())
}

fn execute_show(catalog: &dyn MovieCatalog, id: MovieId, json_output: bool) -> Result<()> {
    info!("Fetching details for movie ID: {}", id);

    let Some(movie) = catalog.get_by_id(Some(id)) else {
        warn!("Movie with ID {} not found", id);
        bail!(not_found_message(id));
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(movie)?);
        return Ok(());
    }

    println!();
    println!("Movie:    {}", movie.title());
    println!("ID:       {}", movie.id());
    println!("Director: {}", movie.director());
    println!("Year:     {}", movie.year());
    println!("Genres:   {}", movie.genres().join(", "));
    println!("Duration: {} min", movie.duration_minutes());
    println!("Rating:   {:.1}", movie.rating());

    if !movie.description().is_empty() {
        println!();
        println!("Description:");
        for line in movie.description().lines() {
            println!("  {line}");
        }
    }

    Ok(())
}

fn execute_search(
    catalog: &dyn MovieCatalog,
    criteria: SearchCriteria,
    json_output: bool,
) -> Result<()> {
    info!(
        "Search request received - name: {:?}, id: {:?}, genre: {:?}",
        criteria.name,
        criteria.id,
        criteria.genre
    );

    let response = SearchResponse::evaluate(catalog, &criteria);

    if response.status.is_client_error() {
        if json_output {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        eprintln!("Error: {}", response.message);
        std::process::exit(EXIT_INVALID_REQUEST);
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", response.message);
    if !response.movies.is_empty() {
        println!();
        println!("{}", render_table(response.movies.iter().copied()));
    }

    Ok(())
}
