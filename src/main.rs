use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use uri_route::config::load_config;
use uri_route::observability::init_logging;
use uri_route::{compile, RouteTable, SubPatterns};

#[derive(Parser)]
#[command(name = "uri-route")]
#[command(about = "Compile URI patterns and test them against URIs", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the regular expression and group names for a pattern
    Compile {
        pattern: String,

        /// Regex fragment for one group, as NAME=FRAGMENT
        #[arg(short, long = "group", value_parser = parse_group)]
        groups: Vec<(String, String)>,
    },
    /// Match URIs against the routes of a route file
    Match {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(required = true)]
        uris: Vec<String>,
    },
}

fn parse_group(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, fragment)| (name.to_string(), fragment.to_string()))
        .ok_or_else(|| format!("expected NAME=FRAGMENT, got `{}`", raw))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { pattern, groups } => {
            init_logging(cli.log_level.as_deref().unwrap_or("info"))?;

            let groups: SubPatterns = groups.into_iter().collect();
            let compiled = compile(&pattern, &groups)?;
            let out = json!({
                "pattern": compiled.pattern(),
                "regex": compiled.as_str(),
                "names": compiled.names(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Match { config, uris } => {
            let file = load_config(&config)?;
            init_logging(
                cli.log_level
                    .as_deref()
                    .unwrap_or(&file.observability.log_level),
            )?;

            let table = RouteTable::from_config(&file.routes, |_, _| {})?;
            tracing::info!(routes = table.len(), "Route table ready");

            for uri in uris {
                let out = match table.resolve(&uri) {
                    Some(found) => json!({
                        "uri": uri,
                        "route": found.route,
                        "params": found.params,
                    }),
                    None => json!({ "uri": uri, "route": null, "params": null }),
                };
                println!("{}", serde_json::to_string(&out)?);
            }
        }
    }

    Ok(())
}
