use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "userdir", version)]
#[command(about = "Browse and edit a remote user directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// User collection URL (overrides config and USERDIR_ENDPOINT)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users
    #[command(alias = "ls")]
    List,

    /// Add a user
    #[command(alias = "a")]
    Add {
        /// First name (required, no digits)
        #[arg(long, default_value = "")]
        name: String,

        /// Last name (required, no digits)
        #[arg(long, default_value = "")]
        lastname: String,

        /// Phone number (free text)
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Update a user
    #[command(alias = "u")]
    Update {
        /// Id of the user
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        lastname: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a user
    #[command(alias = "rm")]
    Delete {
        /// Id of the user
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or change configuration
    Config {
        /// Config key (endpoint, mutations, validate-updates)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
