//! tool-registry CLI - inspect the built-in tool catalog.
//!
//! Subcommands:
//! - list: catalog entries, optionally one category, optionally as JSON
//! - names: normalised names in catalog order
//! - resolve: what a name resolves to (unknown names fall back to search)
//! - overview: prompt overview for a set of names
//! - user-tools: availability-filtered tools for a user with given grants

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tool_registry::{
    render_overview, Config, MemoryCredentialStore, OAuthProvider, ToolCatalog, ToolCategory,
    User, UserId,
};

/// Inspect the agent tool catalog
#[derive(Parser, Debug)]
#[command(name = "tool-registry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Optional JSON config file
    #[arg(short, long, global = true, env = "TOOL_REGISTRY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog entries
    List {
        /// Only this category (external, default, marketing, affiliate)
        #[arg(long)]
        category: Option<ToolCategory>,

        /// Print JSON summaries instead of names
        #[arg(long)]
        json: bool,
    },

    /// Print normalised tool names in catalog order
    Names,

    /// Resolve a tool name
    Resolve {
        name: String,

        /// Fail instead of falling back to the default tool
        #[arg(long)]
        strict: bool,
    },

    /// Render the prompt overview for tool names (all tools if none given)
    Overview { names: Vec<String> },

    /// List tools available to a user
    UserTools {
        /// User id
        #[arg(short, long)]
        user: String,

        /// OAuth providers the user has installed
        #[arg(short, long)]
        grant: Vec<OAuthProvider>,

        /// Requested tool names
        names: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.apply_env(|key| std::env::var(key).ok())?;

    // Initialize observability
    tool_registry::observability::init_tracing(&config.observability);

    let catalog = ToolCatalog::builtin().with_availability(config.availability.clone());
    tracing::debug!("Catalog loaded with {} tools", catalog.len());

    match cli.command {
        Commands::List { category, json } => {
            let summaries: Vec<_> = catalog
                .summaries()
                .into_iter()
                .filter(|s| category.map_or(true, |c| s.category == c))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for summary in summaries {
                    println!(
                        "{:<10} {:<28} {}",
                        summary.category, summary.name, summary.public_description
                    );
                }
            }
        }
        Commands::Names => {
            for name in catalog.list_all_tool_names() {
                println!("{}", name);
            }
        }
        Commands::Resolve { name, strict } => {
            let tool = if strict {
                catalog.find_by_name(&name).ok_or_else(|| {
                    tool_registry::Error::not_found(format!("Unknown tool: {}", name))
                })?
            } else {
                catalog.resolve_by_name(&name)
            };
            println!("{}", tool.name());
        }
        Commands::Overview { names } => {
            let tools = if names.is_empty() {
                catalog.list_all_tools()
            } else {
                names.iter().map(|n| catalog.resolve_by_name(n)).collect()
            };
            println!("{}", render_overview(&tools));
        }
        Commands::UserTools { user, grant, names } => {
            let user_id = UserId::from_string(user)?;
            let store = MemoryCredentialStore::new();
            for provider in grant {
                store.install(user_id.clone(), provider).await;
            }
            let user = User::new(user_id);
            let tools = catalog.list_user_tools(&names, &user, &store).await?;
            for tool in tools {
                println!("{}", tool.name());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_category() {
        let cli = Cli::try_parse_from([
            "tool-registry",
            "list",
            "--category",
            "marketing",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::List { category, json } => {
                assert_eq!(category, Some(ToolCategory::Marketing));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_short_config_with_list() {
        let cli = Cli::try_parse_from(["tool-registry", "list", "-c", "tools.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tools.json")));
        assert!(matches!(cli.command, Commands::List { category: None, json: false }));
    }

    #[test]
    fn test_parse_user_tools_grants() {
        let cli = Cli::try_parse_from([
            "tool-registry",
            "user-tools",
            "--user",
            "u-1",
            "--grant",
            "sid",
            "sid",
            "image",
        ])
        .unwrap();
        match cli.command {
            Commands::UserTools { user, grant, names } => {
                assert_eq!(user, "u-1");
                assert_eq!(grant, vec![OAuthProvider::Sid]);
                assert_eq!(names, vec!["sid", "image"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["tool-registry", "list", "--category", "finance"]).is_err());
    }
}
