// product_service/src/cli.rs

//! Command line: run the server or one of the database admin commands.

use clap::{Parser, Subcommand};

/// Product catalog HTTP service
#[derive(Parser, Debug)]
#[command(name = "product-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  /// Start the HTTP server (default)
  Serve,

  /// Drop and re-create the products table. Destroys existing data.
  InitDb,

  /// Insert the sample product catalog
  SeedDb,
}

impl Cli {
  /// Parse command line arguments
  pub fn parse_args() -> Self {
    Cli::parse()
  }

  pub fn command(&self) -> Command {
    self.command.unwrap_or(Command::Serve)
  }
}
