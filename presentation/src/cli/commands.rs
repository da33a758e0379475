//! CLI command definitions

use clap::Parser;
use kbridge_domain::ArgumentBag;
use serde_json::Value;
use std::path::PathBuf;

/// CLI arguments for kbridge
#[derive(Parser, Debug)]
#[command(name = "kbridge")]
#[command(author, version, about = "Knowledge-base tool adapter for LLM agents")]
#[command(long_about = r#"
kbridge runs one knowledge-base action against the configured backend and
prints what the model would see.

Actions:
  list_workspaces, list_pages (list), search (keyword_search),
  semantic_search, read (read_page), create (create_page),
  update (update_page), get_structure

Configuration files are loaded from (in priority order):
1. KBRIDGE_* environment variables (e.g. KBRIDGE_BACKEND__API_KEY)
2. --config <path>     Explicit config file
3. ./kbridge.toml      Project-level config
4. ~/.config/kbridge/config.toml   Global config

Example:
  kbridge search --query "error handling"
  kbridge read --page-id 8f2c1a
  kbridge update --page-id 8f2c1a --title "New title" --tag rust --tag notes
  kbridge --args '{"action":"semantic_search","query":"lifetimes"}' --json
"#)]
pub struct Cli {
    /// Action to run (not required with --schema, --show-config or --args)
    pub action: Option<String>,

    /// Search query, or document id for read
    #[arg(short, long)]
    pub query: Option<String>,

    /// Page to read or update
    #[arg(long, value_name = "ID")]
    pub page_id: Option<String>,

    /// Page title (create, update)
    #[arg(long)]
    pub title: Option<String>,

    /// Page content in markdown (create, update)
    #[arg(long)]
    pub content: Option<String>,

    /// Page tag (can be specified multiple times)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Maximum number of results (1-50, default 10)
    #[arg(short, long)]
    pub limit: Option<i64>,

    /// Workspace to use instead of the configured one
    #[arg(long, value_name = "ID")]
    pub workspace_id: Option<String>,

    /// Raw JSON argument object; flags above override its keys
    #[arg(long, value_name = "JSON")]
    pub args: Option<String>,

    /// Print the serialized tool result instead of text
    #[arg(long)]
    pub json: bool,

    /// Print the tool definition as JSON Schema and exit
    #[arg(long)]
    pub schema: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Build the tool's argument bag from `--args` and the individual flags.
    pub fn to_arguments(&self) -> Result<ArgumentBag, serde_json::Error> {
        let mut bag = match &self.args {
            Some(raw) => ArgumentBag::from_value(serde_json::from_str::<Value>(raw)?),
            None => ArgumentBag::new(),
        };

        let strings = [
            ("action", &self.action),
            ("query", &self.query),
            ("page_id", &self.page_id),
            ("title", &self.title),
            ("content", &self.content),
            ("workspace_id", &self.workspace_id),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                bag.insert(key, value.as_str());
            }
        }

        if !self.tags.is_empty() {
            bag.insert("tags", self.tags.clone());
        }
        if let Some(limit) = self.limit {
            bag.insert("limit", limit);
        }

        Ok(bag)
    }
}
