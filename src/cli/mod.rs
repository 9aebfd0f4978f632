//! CLI module for the Disease Risk API
//!
//! - `serve`: run the HTTP API
//! - `models`: load the configured models and report their status

pub mod models;
pub mod serve;

use clap::{Parser, Subcommand};

/// Disease Risk API - diabetes, heart disease and Parkinson's risk predictions
#[derive(Parser)]
#[command(name = "disease-risk-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Load every configured model and print its status
    Models(models::ModelsArgs),
}
