use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arsenal::api::{build_router, state::AppState};
use arsenal::calculate::{compare, leaderboard, rank, weapon_card, CardRow};
use arsenal::catalog::{Catalog, WeaponFilter};
use arsenal::config::AppConfig;
use arsenal::models::{BodyPart, Winner};
use arsenal::storage::read_dataset;

#[derive(Parser)]
#[command(name = "arsenal")]
#[command(about = "Weapon stat catalog with objective rankings and side-by-side comparison")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Rank weapons by an objective
    Rank {
        /// Objective key (see `objectives`)
        #[arg(long, short)]
        objective: String,

        /// Body part: base, head, torso or limb
        #[arg(long, default_value = "base")]
        body_part: String,

        /// Only weapons whose name contains this text
        #[arg(long)]
        search: Option<String>,

        /// Only weapons of this type
        #[arg(long = "type")]
        weapon_type: Option<String>,

        /// Drop weapons heavier than this
        #[arg(long)]
        max_weight: Option<f64>,

        /// Show the whole ranking
        #[arg(long)]
        all: bool,
    },

    /// Compare two weapons stat by stat
    Compare {
        /// First weapon
        a: String,

        /// Second weapon
        b: String,
    },

    /// List weapons by category
    List {
        #[arg(long)]
        search: Option<String>,

        #[arg(long = "type")]
        weapon_type: Option<String>,

        #[arg(long)]
        max_weight: Option<f64>,

        /// Print an alphabetical name list instead of category groups
        #[arg(long)]
        sorted: bool,
    },

    /// Show one weapon's card
    Show {
        /// Weapon name
        name: String,
    },

    /// List registered objectives
    Objectives,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&PathBuf::from(&cli.config))
        .with_context(|| format!("loading config {}", cli.config))?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = PathBuf::from(dir);
    }
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting arsenal v{}", env!("CARGO_PKG_VERSION"));

    let catalog = load_catalog(&config)?;
    let registry = config.scoring.registry();

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(catalog, config);
            let app = build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Rank {
            objective,
            body_part,
            search,
            weapon_type,
            max_weight,
            all,
        } => {
            let body_part: BodyPart = body_part.parse()?;
            let filter = WeaponFilter {
                search,
                weapon_type,
                max_weight,
            };
            let weapons = catalog.filter(&filter);
            let ranked = rank(&catalog, &registry, &weapons, &objective, body_part);
            let board = leaderboard(
                &catalog,
                &registry,
                &objective,
                &ranked,
                body_part,
                config.rankings.top_n,
                all,
            );

            let Some(label) = board.label else {
                println!("No objective named '{}'. Available:", objective);
                for o in registry.iter() {
                    println!("  {}", o.kind.key());
                }
                return Ok(());
            };

            println!("{} ({})", label, body_part);
            if board.entries.is_empty() {
                println!("  no weapon has data for this objective");
            }
            for entry in &board.entries {
                println!("{:>3}. {:<28} {}", entry.position, entry.name, entry.display);
            }
            if board.has_more {
                println!("  ... {} more (use --all)", board.total - board.entries.len());
            }
        }
        Commands::Compare { a, b } => {
            let Some(comparison) = compare(&catalog, &a, &b, config.scoring.compare_options())
            else {
                let missing = if catalog.contains(&a) { &b } else { &a };
                anyhow::bail!("Unknown weapon '{}'", missing);
            };

            println!("{:<22} {:<24} {:<24}", "", a, b);
            for row in &comparison.rows {
                let marker = match row.winner {
                    Winner::A => "<",
                    Winner::B => ">",
                    Winner::Tie => " ",
                };
                println!(
                    "{:<22} {:<24} {:<24} {}",
                    row.label, row.display_a, row.display_b, marker
                );
            }
            let (wins_a, wins_b) = comparison.tally();
            println!("\n{} wins {}, {} wins {}", a, wins_a, b, wins_b);
        }
        Commands::List {
            search,
            weapon_type,
            max_weight,
            sorted,
        } => {
            let filter = WeaponFilter {
                search,
                weapon_type,
                max_weight,
            };
            let names = catalog.filter(&filter);
            if sorted {
                for name in catalog.sorted_names().iter().filter(|n| names.contains(n)) {
                    println!("{}", name);
                }
            } else {
                for group in catalog.group_by_category(&names) {
                    println!("{} [{}]", group.category, group.weapon_type);
                    for name in &group.weapons {
                        println!("  {}", name);
                    }
                }
            }
            println!("{} weapons (types: {})", names.len(), catalog.weapon_types().join(", "));
        }
        Commands::Show { name } => {
            let card = weapon_card(&catalog, &name)
                .with_context(|| format!("Unknown weapon '{}'", name))?;

            println!("{} ({}, {})", card.name, card.category, card.weapon_type);
            for row in &card.rows {
                match row {
                    CardRow::Stat { label, display, .. } => println!("  {:<22} {}", label, display),
                    CardRow::Separator { .. } => println!(),
                }
            }
            if let Some(dios) = card.dios {
                println!(
                    "  {:<22} {:.0} ({:.2} shots)",
                    "DIOS", dios.value, dios.effective_shots
                );
            }
        }
        Commands::Objectives => {
            for o in registry.iter() {
                let marker = if o.uses_body_part() { "*" } else { " " };
                println!("{:<16} {:<20} {} {}", o.kind.key(), o.label, o.polarity, marker);
            }
            println!("\n* depends on --body-part");
        }
    }

    Ok(())
}

fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let storage = config.storage();
    let dataset = read_dataset(&storage)
        .with_context(|| format!("reading dataset {:?}", storage.dataset_path()))?;
    let catalog = Catalog::from_dataset(dataset, &config.scoring.shotgun_category)?;
    tracing::info!(
        "Catalog ready: {} weapons in {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    Ok(catalog)
}
