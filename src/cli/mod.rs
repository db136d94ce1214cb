//! Command line interface
//!
//! - `serve`: run the HTTP API
//! - `token`: mint a session token for local testing

pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

/// Team View API - read-only team aggregate for authenticated accounts
#[derive(Parser)]
#[command(name = "team-view")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Print a signed session token
    Token(token::TokenArgs),
}
