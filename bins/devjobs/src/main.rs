//! devjobs: CLI for searching Swedish developer-job ads.
//!
//! Fetches ads from the public job-search API per occupation category,
//! then filters and ranks them locally with fuzzy matching.

use clap::{Parser, Subcommand};
use devjobs_api_client::{JobSearchClient, Occupation, SearchParams};
use devjobs_cli::output::{format_count, format_distance, Status};
use devjobs_cli::progress::{finish_success, spinner};
use devjobs_engine::{
    filter_and_rank_with, ContractType, EngineMode, FilterSpec, RankOptions, SearchHit,
};
use devjobs_geo::{haversine_distance, Coordinate};
use devjobs_vocab::{city_coordinate, city_names};

#[derive(Parser)]
#[command(name = "devjobs")]
#[command(about = "Search Swedish developer-job ads with fuzzy matching and ranking")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch ads for a category, filter and rank them locally
    Search {
        /// Free query text: tech, profession or city ("react stockholm")
        #[arg(default_value = "")]
        query: String,
        /// Occupation category: frontend, backend, fullstack or all
        #[arg(long, default_value = "all")]
        category: Occupation,
        /// Explicit location (overrides any city found in the query)
        #[arg(long)]
        location: Option<String>,
        /// Search radius in km (0 disables radius filtering)
        #[arg(long, default_value_t = 0.0)]
        radius: f64,
        /// Contract type: all, permanent or temporary
        #[arg(long, default_value = "all")]
        contract: String,
        /// Searcher latitude (with --lon, used as the radius center)
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        /// Searcher longitude
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Page size requested from the API
        #[arg(long, default_value_t = 25)]
        limit: u32,
        /// Pagination offset
        #[arg(long, default_value_t = 0)]
        offset: u32,
        /// Trust the server-side narrowing: only rank, skip local filters
        #[arg(long)]
        rank_only: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known cities and their coordinates
    Cities {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Great-circle distance between two known cities
    Distance {
        /// Starting city
        from: String,
        /// Destination city
        to: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Search {
            query,
            category,
            location,
            radius,
            contract,
            lat,
            lon,
            limit,
            offset,
            rank_only,
            json,
        } => {
            let spec = FilterSpec {
                query,
                location,
                radius_km: radius,
                contract_type: parse_contract(&contract)?,
            };

            let user = match (lat, lon) {
                (Some(lat), Some(lon)) => Some(Coordinate::try_new(lat, lon)?),
                _ => None,
            };

            let client = JobSearchClient::new()?;
            let params =
                SearchParams::for_filter_spec(category, &spec).with_page(offset, limit);

            let pb = spinner("Fetching ads...");
            let response = client.search().fetch(&params).await?;
            finish_success(
                &pb,
                &format!("Fetched {}", format_count(response.hits.len(), "ad", "ads")),
            );

            let options = RankOptions {
                mode: if rank_only {
                    EngineMode::RankOnly
                } else {
                    EngineMode::FilterAndRank
                },
                ..RankOptions::default()
            };

            let hits = filter_and_rank_with(&response.hits, &spec, user, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print_hits(&hits);
            }
        }

        Commands::Cities { json } => {
            if json {
                let cities: Vec<serde_json::Value> = city_names()
                    .filter_map(|name| {
                        city_coordinate(name).map(|c| {
                            serde_json::json!({
                                "name": name,
                                "latitude": c.latitude,
                                "longitude": c.longitude,
                            })
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&cities)?);
            } else {
                Status::header("Known cities");
                for name in city_names() {
                    if let Some(coord) = city_coordinate(name) {
                        println!("{:<14} {:>8.4}, {:>8.4}", name, coord.latitude, coord.longitude);
                    }
                }
            }
        }

        Commands::Distance { from, to } => {
            let from_coord = city_coordinate(&from)
                .ok_or_else(|| anyhow::anyhow!("unknown city: {from}"))?;
            let to_coord =
                city_coordinate(&to).ok_or_else(|| anyhow::anyhow!("unknown city: {to}"))?;

            let km = haversine_distance(&from_coord, &to_coord);
            println!("{from} → {to}: {}", format_distance(km));
        }
    }

    Ok(())
}

fn parse_contract(value: &str) -> anyhow::Result<ContractType> {
    match value.to_lowercase().as_str() {
        "all" => Ok(ContractType::All),
        "permanent" => Ok(ContractType::Permanent),
        "temporary" => Ok(ContractType::Temporary),
        other => anyhow::bail!("unknown contract type: {other} (use all, permanent or temporary)"),
    }
}

fn print_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        Status::warning("No ads matched the given filters");
        return;
    }

    Status::header(&format!("{} matching", format_count(hits.len(), "ad", "ads")));

    for hit in hits {
        let posting = &hit.posting;
        println!("[{:>3}] {}", hit.score, posting.headline);

        let mut details = Vec::new();
        if let Some(employer) = posting.employer_name() {
            details.push(employer.to_string());
        }
        if let Some(municipality) = posting.municipality() {
            details.push(municipality.to_string());
        }
        if let Some(distance) = hit.distance_km {
            details.push(format_distance(distance));
        }
        if let Some(deadline) = posting.application_deadline.as_deref() {
            details.push(format!("apply by {}", deadline.get(..10).unwrap_or(deadline)));
        }

        if !details.is_empty() {
            println!("      {}", details.join(" · "));
        }
    }
}
