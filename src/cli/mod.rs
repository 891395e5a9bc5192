//! Command-line surface.
//!
//! Each resource gets its own subcommand module; they all go through the
//! same client stack (list controller, mutation guard) rather than issuing
//! raw requests, so the CLI observes the same pending/refetch behaviour an
//! interactive front-end would.

pub mod admins;
pub mod contents;
pub mod courses;
pub mod quiz;
pub mod seed;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use studyhall_client::ApiClient;
use studyhall_config::ApiConfig;
use studyhall_core::ApiError;
use studyhall_models::Session;

#[derive(Parser)]
#[command(name = "studyhall")]
#[command(about = "Studyhall CLI - administrative tools for the Studyhall platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage courses
    Courses {
        #[command(subcommand)]
        command: courses::CourseCommand,
    },
    /// Manage platform administrator accounts
    Admins {
        #[command(subcommand)]
        command: admins::AdminCommand,
    },
    /// Manage lecture contents and their ordering
    Contents {
        #[command(subcommand)]
        command: contents::ContentCommand,
    },
    /// Quiz question generation
    Quiz {
        #[command(subcommand)]
        command: quiz::QuizCommand,
    },
    /// Seed the platform with fake demo courses and contents
    Seed {
        /// Number of courses to create
        #[arg(short = 'c', long, default_value = "5")]
        courses: usize,

        /// Number of contents per course
        #[arg(long, default_value = "4")]
        contents: usize,
    },
}

/// Pagination flags shared by all list commands.
#[derive(Args, Clone)]
pub struct PageArgs {
    /// Page to fetch (1-based; clamped to the last page)
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Rows per page (1-100)
    #[arg(long, default_value = "10")]
    pub page_size: i64,

    /// Free-text search filter
    #[arg(long)]
    pub search: Option<String>,
}

pub async fn run(cli: Cli) -> Result<(), ApiError> {
    let client = build_client()?;

    match cli.command {
        Commands::Courses { command } => courses::run(client, command).await,
        Commands::Admins { command } => admins::run(client, command).await,
        Commands::Contents { command } => contents::run(client, command).await,
        Commands::Quiz { command } => quiz::run(client, command).await,
        Commands::Seed { courses, contents } => seed::run(client, courses, contents).await,
    }
}

fn build_client() -> Result<Arc<ApiClient>, ApiError> {
    let config = ApiConfig::from_env();
    let session = match &config.token {
        Some(token) => Session::with_token(token.clone()),
        None => Session::anonymous(),
    };

    Ok(Arc::new(ApiClient::new(&config, session)?))
}
