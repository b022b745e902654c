//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use dorkforge_application::GenerateDorksRequest;
use dorkforge_domain::{FilterCriterion, GenerationRefinements, SearchEngine};
use std::collections::HashMap;
use std::path::PathBuf;

/// Export file format for generated dorks
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Plain text, one query per line with comment headers
    Txt,
    /// CSV with category, query and run metadata columns
    Csv,
    /// JSON document with metadata and per-category grouping
    Json,
    /// Markdown report with tables and combined queries
    #[value(alias = "markdown")]
    Md,
}

/// CLI arguments for dorkforge
#[derive(Parser, Debug)]
#[command(name = "dorkforge")]
#[command(author, version, about = "Search dork validation, explanation and generation")]
#[command(long_about = r#"
dorkforge builds and checks search-engine dorks: queries made of
operator:value directives such as site:example.com or ext:sql.

It can validate and explain a query, suggest related variants, and
generate dorks from categories of parametrized templates.

Configuration files are loaded from (in priority order):
1. DORKFORGE_* environment variables
2. --config <path>      Explicit config file
3. ./dorkforge.toml     Project-level config
4. ~/.config/dorkforge/config.toml   Global config

Example:
  dorkforge validate 'site:example.com ext:sql'
  dorkforge generate login_pages sensitive_files --domain example.com
  dorkforge generate config_files -d example.com --export csv -o out.csv
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Template bundle file or directory (overrides [templates] path)
    #[arg(long, value_name = "PATH", global = true)]
    pub templates: Option<PathBuf>,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a query and list any problems
    Validate {
        /// The query to check
        query: String,
    },

    /// Describe what each operator in a query does
    Explain {
        /// The query to explain
        query: String,
    },

    /// Suggest related variants of a query
    Permute {
        /// The query to vary
        query: String,
    },

    /// List template categories
    Categories,

    /// Show the templates and filters of one category
    Show {
        /// Category id
        category: String,
    },

    /// Search template patterns and descriptions
    Search {
        /// Case-insensitive keyword
        keyword: String,
    },

    /// Generate dorks from one or more categories
    Generate(GenerateArgs),

    /// Clean up a generated query (code fences, prefixes, spacing) and audit it
    Sanitize {
        /// Raw text, e.g. a model answer
        text: String,
    },

    /// Merge several queries into OR-combined queries
    Combine {
        /// Queries to merge
        #[arg(required = true, num_args = 1..)]
        queries: Vec<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Categories to generate
    #[arg(required = true, value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Template parameter (can be specified multiple times)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Target domain; fills {domain} and {domain_name}
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Keyword; fills {keyword}
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Keep dorks matching a filter (key=value; repeated keys are OR-ed)
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<FilterCriterion>,

    /// Search engine to translate operators for
    #[arg(short, long, value_name = "ENGINE", value_parser = parse_engine)]
    pub engine: Option<SearchEngine>,

    /// Keep dorks that fail validation
    #[arg(long)]
    pub no_validate: bool,

    /// Maximum number of dorks per category
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Exclude plain-http results
    #[arg(long)]
    pub https_only: bool,

    /// Keep only dorks using one of these operators
    #[arg(long = "include-op", value_name = "OP")]
    pub include_operators: Vec<String>,

    /// Drop dorks containing this text
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude_patterns: Vec<String>,

    /// Extra quoted term appended to every dork
    #[arg(long = "keyword-term", value_name = "TERM")]
    pub keyword_terms: Vec<String>,

    /// Export format (writes to --output-file or stdout)
    #[arg(long, value_enum)]
    pub export: Option<ExportFormat>,

    /// File to write the export to
    #[arg(short, long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,
}

impl GenerateArgs {
    /// Template parameters; explicit `-p` values win over `--domain`/`--keyword`
    pub fn params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if let Some(domain) = &self.domain {
            params.insert("domain".to_string(), domain.clone());
            params.insert("domain_name".to_string(), domain.clone());
        }
        if let Some(keyword) = &self.keyword {
            params.insert("keyword".to_string(), keyword.clone());
        }
        for (key, value) in &self.params {
            params.insert(key.clone(), value.clone());
        }
        params
    }

    pub fn refinements(&self) -> GenerationRefinements {
        GenerationRefinements {
            include_operators: self.include_operators.clone(),
            exclude_patterns: self.exclude_patterns.clone(),
            custom_keywords: self.keyword_terms.clone(),
            https_only: self.https_only,
            max_dorks: self.max.unwrap_or(0),
        }
    }

    pub fn to_request(&self) -> GenerateDorksRequest {
        let mut request = GenerateDorksRequest::new(self.params())
            .with_filters(self.filters.clone())
            .with_refinements(self.refinements());
        if let Some(engine) = self.engine {
            request = request.with_search_engine(engine);
        }
        if self.no_validate {
            request = request.with_validation(false);
        }
        request
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_filter(s: &str) -> Result<FilterCriterion, String> {
    s.parse().map_err(|e: dorkforge_domain::DomainError| e.to_string())
}

fn parse_engine(s: &str) -> Result<SearchEngine, String> {
    s.parse().map_err(|e: dorkforge_domain::DomainError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dorkforge").chain(args.iter().copied())).unwrap()
    }

    fn generate_args(args: &[&str]) -> GenerateArgs {
        match parse(args).command {
            Some(Command::Generate(generate)) => generate,
            other => panic!("expected generate, got {:?}", other),
        }
    }

    // ==================== Global flags ====================

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["validate", "site:x.com", "--json", "-vv", "--no-color"]);
        assert!(cli.json);
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Validate { ref query }) if query == "site:x.com"));
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = parse(&["--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    // ==================== Generate ====================

    #[test]
    fn test_generate_params() {
        let args = generate_args(&[
            "generate",
            "login_pages",
            "files",
            "-d",
            "example.com",
            "-p",
            "keyword=admin",
            "-p",
            "domain_name=Example",
        ]);
        assert_eq!(args.categories, vec!["login_pages", "files"]);

        let params = args.params();
        assert_eq!(params["domain"], "example.com");
        assert_eq!(params["domain_name"], "Example");
        assert_eq!(params["keyword"], "admin");
    }

    #[test]
    fn test_generate_request() {
        let args = generate_args(&[
            "generate",
            "files",
            "--filter",
            "ext=ext:sql",
            "--engine",
            "Bing",
            "--no-validate",
            "--max",
            "5",
            "--https-only",
            "--include-op",
            "ext",
            "--keyword-term",
            "backup",
        ]);
        let request = args.to_request();
        assert_eq!(request.filters, vec![FilterCriterion::new("ext", "ext:sql")]);
        assert_eq!(request.search_engine, Some(SearchEngine::Bing));
        assert_eq!(request.validate, Some(false));
        assert_eq!(request.refinements.max_dorks, 5);
        assert!(request.refinements.https_only);
        assert_eq!(request.refinements.include_operators, vec!["ext"]);
        assert_eq!(request.refinements.custom_keywords, vec!["backup"]);
    }

    #[test]
    fn test_generate_defaults_leave_config_in_charge() {
        let request = generate_args(&["generate", "files"]).to_request();
        assert!(request.search_engine.is_none());
        assert!(request.validate.is_none());
        assert!(request.refinements.is_empty());
    }

    #[test]
    fn test_generate_export_alias() {
        let args = generate_args(&["generate", "files", "--export", "markdown", "-o", "r.md"]);
        assert_eq!(args.export, Some(ExportFormat::Md));
        assert_eq!(args.output_file, Some(PathBuf::from("r.md")));
    }

    #[test]
    fn test_rejects_malformed_values() {
        let argv = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("dorkforge").chain(args.iter().copied()))
        };
        assert!(argv(&["generate", "files", "-p", "novalue"]).is_err());
        assert!(argv(&["generate", "files", "-p", "=x"]).is_err());
        assert!(argv(&["generate", "files", "--filter", "nokey"]).is_err());
        assert!(argv(&["generate", "files", "--engine", "altavista"]).is_err());
        assert!(argv(&["generate"]).is_err());
        assert!(argv(&["combine"]).is_err());
    }
}
