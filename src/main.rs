mod cli;

use blogstore::config::{self, Config};
use blogstore::demo;
use blogstore_common::{parse_timestamp, CategoryId, Error, PostId};
use blogstore_db::migrations;
use blogstore_db::pool::{get_conn, init_pool, DbPool};
use blogstore_db::queries::{categories, posts};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use cli::{CategoryAction, Cli, Commands, PostAction};
use rusqlite::Connection;
use std::path::Path;

fn main() -> Result<()> {
    let Cli {
        config: config_path,
        database,
        verbose,
        command,
    } = Cli::parse();

    match command {
        Commands::Demo => {
            let (config, pool) = open_store(config_path.as_deref(), database.as_deref(), verbose)?;
            let conn = get_conn(&pool)?;
            run_demo(&conn, &config)
        }
        Commands::Migrate => {
            let (_, pool) = open_store(config_path.as_deref(), database.as_deref(), verbose)?;
            let conn = get_conn(&pool)?;
            show_migrations(&conn)
        }
        Commands::Category { action } => {
            let (_, pool) = open_store(config_path.as_deref(), database.as_deref(), verbose)?;
            let conn = get_conn(&pool)?;
            category_command(&conn, action)
        }
        Commands::Post { action } => {
            let (_, pool) = open_store(config_path.as_deref(), database.as_deref(), verbose)?;
            let conn = get_conn(&pool)?;
            post_command(&conn, action)
        }
        Commands::InitConfig { path, force } => {
            config::persist::save_config(&path, &Config::default(), force)?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
        Commands::Validate {
            config: validate_path,
        } => {
            let path = validate_path.or(config_path);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("blogstore {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load config, set up logging, open the pool and migrate the schema.
///
/// A schema failure stops here; no command runs against an un-migrated
/// database.
fn open_store(
    config_path: Option<&Path>,
    database: Option<&str>,
    verbose: bool,
) -> Result<(Config, DbPool)> {
    let mut config = config::load_config_or_default(config_path)?;
    if let Some(url) = database {
        config::override_database_url(&mut config, url);
    }

    init_logging(verbose, &config);
    for warning in config::config_warnings(&config) {
        tracing::warn!("{warning}");
    }

    tracing::info!("Opening database at {}", config.database.url);
    let pool = init_pool(&config.database)
        .with_context(|| format!("Failed to open database {}", config.database.url))?;

    Ok((config, pool))
}

fn init_logging(verbose: bool, config: &Config) {
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "blogstore=trace,blogstore_db=debug,blogstore_common=debug".to_string()
        } else {
            config.logging.filter.clone()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(conn: &Connection, config: &Config) -> Result<()> {
    let report = demo::run_demo(conn, &config.demo, Utc::now().fixed_offset());
    print!("{}", report.render());

    if !report.is_success() {
        anyhow::bail!("{} demo step(s) failed", report.failures());
    }
    Ok(())
}

fn show_migrations(conn: &Connection) -> Result<()> {
    let version = migrations::current_version(conn)?;
    println!(
        "Schema version: {} (latest {})",
        version,
        migrations::latest_version()
    );

    for entry in migrations::applied_migrations(conn)? {
        println!(
            "  {:>3}  {:<28} applied {}",
            entry.version, entry.name, entry.applied_at
        );
    }
    Ok(())
}

fn category_command(conn: &Connection, action: CategoryAction) -> Result<()> {
    match action {
        CategoryAction::Add { name } => {
            let category = categories::add_category(conn, &name)?;
            println!("Category added (id {}).", category.id);
        }
        CategoryAction::List { json } => {
            let all = categories::list_categories(conn)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                println!("Categories:");
                for category in &all {
                    println!("{}", demo::format_category(category));
                }
            }
        }
        CategoryAction::Get { id, json } => {
            let id = CategoryId::new(id);
            let category =
                categories::get_category(conn, id)?.ok_or_else(|| Error::not_found("category", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&category)?);
            } else {
                println!("{}", demo::format_category(&category));
            }
        }
        CategoryAction::Remove { id } => {
            let id = CategoryId::new(id);
            if categories::remove_category(conn, id)? {
                println!("Category {id} removed.");
            } else {
                println!("Category {id} not found.");
            }
        }
    }
    Ok(())
}

fn post_command(conn: &Connection, action: PostAction) -> Result<()> {
    match action {
        PostAction::Add {
            title,
            content,
            published,
        } => {
            let published = match published {
                Some(s) => parse_timestamp(&s)?,
                None => Utc::now().fixed_offset(),
            };
            let post = posts::add_post(conn, &title, &content, published)?;
            println!("Post added (id {}).", post.id);
        }
        PostAction::List { json } => {
            let all = posts::list_posts(conn)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                println!("Posts:");
                for post in &all {
                    println!("{}", demo::format_post(post));
                }
            }
        }
        PostAction::Get { id, json } => {
            let id = PostId::new(id);
            let post = posts::get_post(conn, id)?.ok_or_else(|| Error::not_found("post", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                println!("{}", demo::format_post(&post));
            }
        }
        PostAction::Remove { id } => {
            let id = PostId::new(id);
            if posts::remove_post(conn, id)? {
                println!("Post {id} removed.");
            } else {
                println!("Post {id} not found.");
            }
        }
        PostAction::Range { start, end, json } => {
            let start = parse_timestamp(&start)?;
            let end = parse_timestamp(&end)?;
            let found = posts::find_posts_in_date_range(conn, start, end)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                println!("Posts published from {start} to {end}:");
                for post in &found {
                    println!("{}", demo::format_post(post));
                }
            }
        }
    }
    Ok(())
}

fn validate_config(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    for warning in config::config_warnings(&config) {
        println!("Warning: {warning}");
    }

    println!("Configuration is valid");
    println!("  Database: {}", config.database.url);
    println!("  Log filter: {}", config.logging.filter);
    println!(
        "  Demo range: {} to {}",
        config.demo.range_start, config.demo.range_end
    );
    Ok(())
}
