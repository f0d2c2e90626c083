//! Command-line interface definitions

use crate::catalog::Group;
use crate::filters::{FilterSet, Tab};
use crate::search::RankPolicy;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Group toggles layered over the configured filter set
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Enable a group (can specify multiple: --enable chats --enable lists)
    #[arg(short = 'e', long = "enable", value_name = "GROUP")]
    pub enable: Vec<Group>,

    /// Disable a group (can specify multiple)
    #[arg(short = 'd', long = "disable", value_name = "GROUP")]
    pub disable: Vec<Group>,
}

impl FilterArgs {
    /// Apply the toggles to `base`; disables win over enables
    #[must_use]
    pub fn apply(&self, mut base: FilterSet) -> FilterSet {
        for group in &self.enable {
            base.set(*group, true);
        }
        for group in &self.disable {
            base.set(*group, false);
        }
        base
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "seekr")]
#[command(about = "Quick switcher for people, files, chats and lists", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Catalog file to search (overrides config)
    #[arg(short = 'c', long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive switcher (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Start with this query already typed
        #[arg(long = "query", value_name = "QUERY")]
        query: Option<String>,

        /// Tab to start on (all, files, people, chats, lists)
        #[arg(short = 't', long = "tab", value_name = "TAB")]
        tab: Option<Tab>,
    },

    /// Rank the catalog against a query and print the results
    #[command(visible_alias = "q")]
    Query {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Tab to evaluate under
        #[arg(short = 't', long = "tab", value_name = "TAB", default_value = "all")]
        tab: Tab,

        #[command(flatten)]
        filters: FilterArgs,

        /// Leave out records the query does not match at all
        #[arg(long = "drop-unmatched")]
        drop_unmatched: bool,

        /// Treat substring matches as unmatched
        #[arg(long = "no-contains")]
        no_contains: bool,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Print, copy or open a record's link
    #[command(visible_alias = "l")]
    Link {
        #[arg(value_name = "ID")]
        id: String,

        /// Copy the link to the clipboard
        #[arg(long = "copy")]
        copy: bool,

        /// Open the link in the default browser
        #[arg(long = "open")]
        open: bool,
    },

    /// Show the visible tabs and their record counts
    Tabs {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            tab: None,
        })
    }
}

impl Commands {
    /// Ranking policy for `query`, layered over the configured one
    #[must_use]
    pub const fn rank_policy(&self, base: RankPolicy) -> RankPolicy {
        match self {
            Self::Query {
                drop_unmatched,
                no_contains,
                ..
            } => RankPolicy {
                include_contains: base.include_contains && !*no_contains,
                drop_unmatched: base.drop_unmatched || *drop_unmatched,
            },
            _ => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seekr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_subcommand_defaults_to_browse() {
        let cli = parse(&[]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: None,
                tab: None
            }
        );
    }

    #[test]
    fn test_browse_with_tab() {
        let cli = parse(&["browse", "--query", "ran", "--tab", "people"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: Some("ran".into()),
                tab: Some(Tab::Group(Group::People)),
            }
        );
    }

    #[test]
    fn test_unknown_tab_rejected() {
        let result = Cli::try_parse_from(["seekr", "browse", "--tab", "photos"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_flags() {
        let cli = parse(&[
            "query",
            "rand",
            "--enable",
            "chats",
            "-d",
            "files",
            "--no-contains",
            "--json",
        ]);
        let Some(Commands::Query {
            query,
            tab,
            filters,
            json,
            ..
        }) = cli.command.clone()
        else {
            panic!("expected query command");
        };
        assert_eq!(query, "rand");
        assert_eq!(tab, Tab::All);
        assert_eq!(filters.enable, vec![Group::Chats]);
        assert_eq!(filters.disable, vec![Group::Files]);
        assert!(json);

        let policy = cli.get_command().rank_policy(RankPolicy::default());
        assert!(!policy.include_contains);
        assert!(!policy.drop_unmatched);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["tabs", "--quiet", "--catalog", "/tmp/records.toml"]);
        assert!(cli.quiet);
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/records.toml")));
    }

    #[test]
    fn test_filter_args_disable_wins() {
        let args = FilterArgs {
            enable: vec![Group::Chats, Group::Files],
            disable: vec![Group::Files],
        };
        let filters = args.apply(FilterSet::default());
        assert!(filters.chats);
        assert!(!filters.files);
        assert!(filters.people);
        assert!(!filters.lists);
    }

    #[test]
    fn test_rank_policy_untouched_outside_query() {
        let base = RankPolicy {
            include_contains: false,
            drop_unmatched: true,
        };
        let command = Commands::Tabs {
            filters: FilterArgs::default(),
        };
        assert_eq!(command.rank_policy(base), base);
    }
}
