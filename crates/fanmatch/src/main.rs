//! fanmatch - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fanmatch build-catalog` | Embed the player descriptions into a catalog |
//! | `fanmatch match` | Best catalog match for a game, role and playstyle |
//! | `fanmatch verify` | Check an identity document against a name |
//! | `fanmatch register` | Full onboarding: validate, verify, match, save |
//! | `fanmatch config` | Print or save the effective configuration |

// Force-link fanmatch-providers so linkme registrations are included
extern crate fanmatch_providers;

use clap::Parser;
use fanmatch::cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let output = run(cli).await?;
    println!("{output}");
    Ok(())
}
