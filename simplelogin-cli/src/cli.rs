//! Command-line definition.

use clap::{Args, Parser, Subcommand, ValueEnum};
use simplelogin_client::{AliasGenerator, RandomAliasMode, RandomAliasSuffix, SenderFormat};

use crate::display::{DisplayOptions, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "simplelogin-cli", version)]
#[command(about = "Manage SimpleLogin email aliases from the terminal", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Single-line JSON, borderless tables
    #[arg(long, global = true)]
    pub compact: bool,

    /// Hide table headers
    #[arg(long, global = true)]
    pub no_headers: bool,

    /// API base URL (overrides config file and SIMPLELOGIN_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            format: self.output,
            compact: self.compact,
            no_headers: self.no_headers,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the stored API key
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Manage aliases
    #[command(subcommand)]
    Alias(AliasCommand),
    /// Manage an alias's contacts
    #[command(subcommand)]
    Contact(ContactCommand),
    /// Manage custom domains
    #[command(subcommand)]
    Domain(DomainCommand),
    /// Manage mailboxes
    #[command(subcommand)]
    Mailbox(MailboxCommand),
    /// View or change account settings
    #[command(subcommand)]
    Setting(SettingCommand),
    /// Show account statistics
    Stats,
    /// View or change the user profile
    #[command(subcommand)]
    Userinfo(UserinfoCommand),
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Store an API key created in the dashboard
    SetKey {
        key: String,
    },
    /// Log in with email and password and store the returned key
    Login {
        #[arg(long)]
        email: String,
        /// Read from stdin when neither the flag nor the variable is set
        #[arg(long, env = "SIMPLELOGIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Device name shown in the dashboard
        #[arg(long, default_value = "simplelogin-cli")]
        device: String,
    },
    /// Remove the stored API key
    Logout,
}

#[derive(Debug, Subcommand)]
pub enum AliasCommand {
    /// Show suffixes and prefix suggestion for a new alias
    Options {
        hostname: Option<String>,
    },
    /// Create a custom alias
    New {
        hostname: Option<String>,
        #[arg(long)]
        alias_prefix: String,
        /// Signed suffix from `alias options`
        #[arg(long)]
        signed_suffix: String,
        #[arg(short, long = "mailbox-ids", value_delimiter = ',', required = true)]
        mailbox_ids: Vec<u64>,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Create a random alias
    Random {
        hostname: Option<String>,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        #[arg(long)]
        note: Option<String>,
    },
    /// List aliases; without PAGE every page is fetched
    #[command(visible_alias = "ls")]
    List {
        page: Option<u32>,
        #[command(flatten)]
        filter: AliasFilterArgs,
    },
    /// Show one alias
    Get {
        id: u64,
    },
    /// Delete an alias
    Delete {
        id: u64,
    },
    /// Enable or disable an alias
    Toggle {
        id: u64,
    },
    /// List forward/reply/block events; without PAGE every page is fetched
    Activities {
        id: u64,
        page: Option<u32>,
    },
    /// Change an alias; only the given fields are sent
    Update {
        id: u64,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long = "mailbox-ids", value_delimiter = ',')]
        mailbox_ids: Option<Vec<u64>>,
        #[arg(long)]
        disable_pgp: Option<bool>,
        #[arg(long)]
        pinned: Option<bool>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct AliasFilterArgs {
    #[arg(short, long, conflicts_with_all = ["disabled", "enabled"])]
    pub pinned: bool,
    #[arg(short, long, conflicts_with = "enabled")]
    pub disabled: bool,
    #[arg(short, long)]
    pub enabled: bool,
    /// Search text
    #[arg(short, long)]
    pub query: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// List contacts of an alias; without PAGE every page is fetched
    #[command(visible_alias = "ls")]
    List {
        alias_id: u64,
        page: Option<u32>,
    },
    /// Add a contact to an alias
    Create {
        alias_id: u64,
        email: String,
    },
    /// Delete a contact
    Delete {
        id: u64,
    },
    /// Block or unblock forwarding from a contact
    Block {
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum DomainCommand {
    /// List custom domains
    #[command(visible_alias = "ls")]
    List,
    /// Change a custom domain; only the given fields are sent
    Update {
        id: u64,
        #[arg(long)]
        catch_all: Option<bool>,
        #[arg(long)]
        random_prefix_generation: Option<bool>,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long = "mailbox-ids", value_delimiter = ',')]
        mailbox_ids: Option<Vec<u64>>,
    },
    /// List aliases deleted from a domain
    Trash {
        id: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum MailboxCommand {
    /// List mailboxes
    #[command(visible_alias = "ls")]
    List,
    /// Add a mailbox (a verification email is sent)
    Create {
        email: String,
    },
    /// Delete a mailbox
    Delete {
        id: u64,
        /// Move its aliases to this mailbox instead of deleting them
        #[arg(long)]
        transfer_aliases_to: Option<u64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingCommand {
    /// Show settings
    Get,
    /// Change settings; only the given fields are sent
    Update {
        #[arg(long, value_enum)]
        alias_generator: Option<GeneratorArg>,
        #[arg(long)]
        notification: Option<bool>,
        #[arg(long)]
        random_alias_default_domain: Option<String>,
        #[arg(long, value_enum)]
        sender_format: Option<SenderFormatArg>,
        #[arg(long, value_enum)]
        random_alias_suffix: Option<SuffixArg>,
    },
    /// List domains usable for random aliases
    Domains,
}

#[derive(Debug, Subcommand)]
pub enum UserinfoCommand {
    /// Show the profile
    Get,
    /// Change the profile; only the given fields are sent
    Update {
        #[arg(long)]
        name: Option<String>,
        /// Base64-encoded image
        #[arg(long)]
        profile_picture: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Uuid,
    Word,
}

impl From<ModeArg> for RandomAliasMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Uuid => Self::Uuid,
            ModeArg::Word => Self::Word,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GeneratorArg {
    Word,
    Uuid,
}

impl From<GeneratorArg> for AliasGenerator {
    fn from(arg: GeneratorArg) -> Self {
        match arg {
            GeneratorArg::Word => Self::Word,
            GeneratorArg::Uuid => Self::Uuid,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SenderFormatArg {
    At,
    A,
    NameOnly,
    AtOnly,
    NoName,
}

impl From<SenderFormatArg> for SenderFormat {
    fn from(arg: SenderFormatArg) -> Self {
        match arg {
            SenderFormatArg::At => Self::At,
            SenderFormatArg::A => Self::A,
            SenderFormatArg::NameOnly => Self::NameOnly,
            SenderFormatArg::AtOnly => Self::AtOnly,
            SenderFormatArg::NoName => Self::NoName,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SuffixArg {
    Word,
    RandomString,
}

impl From<SuffixArg> for RandomAliasSuffix {
    fn from(arg: SuffixArg) -> Self {
        match arg {
            SuffixArg::Word => Self::Word,
            SuffixArg::RandomString => Self::RandomString,
        }
    }
}
