use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blogstore")]
#[command(author, version, about = "Minimal blog content store for categories and posts")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database to use instead of the configured one (file path or :memory:)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demo sequence against the database
    Demo,

    /// Bring the database schema up to date and show the migration ledger
    Migrate,

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Write a default configuration file
    InitConfig {
        /// Where to write the file
        #[arg(default_value = "./blogstore.toml")]
        path: PathBuf,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Add a category
    Add {
        /// Category name
        name: String,
    },

    /// List all categories
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one category by id
    Get {
        /// Category id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a category by id
    Remove {
        /// Category id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum PostAction {
    /// Add a post
    Add {
        /// Post title
        #[arg(long)]
        title: String,

        /// Post content
        #[arg(long)]
        content: String,

        /// Publication date as RFC 3339 with offset (defaults to now, UTC)
        #[arg(long)]
        published: Option<String>,
    },

    /// List all posts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one post by id
    Get {
        /// Post id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a post by id
    Remove {
        /// Post id
        id: i64,
    },

    /// List posts published between two instants, both inclusive
    Range {
        /// Start, RFC 3339 with offset
        start: String,

        /// End, RFC 3339 with offset
        end: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
