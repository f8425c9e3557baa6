use crate::inventory::ComponentType;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "ims-manager")]
#[command(about = "A CLI tool for managing server hardware inventory")]
pub struct Cli {
    /// Settings file (default: <config dir>/ims-manager/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Inventory API endpoint, overrides settings and IMS_API_URL
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Bearer token, overrides settings and IMS_API_TOKEN
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Template (virtual server) commands
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Server configuration commands
    #[command(subcommand)]
    Server(ServerCommands),

    /// Component inventory commands
    #[command(subcommand)]
    Component(ComponentCommands),
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List virtual server configurations usable as templates
    List {
        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Copy a template's components onto a server configuration
    Import {
        /// UUID of the configuration receiving the components
        #[arg(long)]
        target: String,

        /// UUID of the template configuration
        #[arg(long)]
        template: String,

        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum ServerCommands {
    /// List server configurations
    List {
        /// Maximum number of configurations
        #[arg(short, long, default_value = "100")]
        limit: u32,

        /// Number of configurations to skip
        #[arg(short, long, default_value = "0")]
        offset: u32,

        /// Configuration status filter (1 = active)
        #[arg(short, long)]
        status: Option<u8>,

        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Show one server configuration
    Show {
        /// Configuration UUID
        #[arg(long)]
        uuid: String,

        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum ComponentCommands {
    /// List inventory of one component type
    Available {
        /// Component type
        #[arg(long = "type", value_enum)]
        component_type: ComponentType,

        /// Include components already assigned to a server
        #[arg(long)]
        include_unavailable: bool,

        /// Maximum number of components
        #[arg(short, long, default_value = "100")]
        limit: u32,

        /// Output format (json, yaml, or pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Assign one inventory component to a server configuration
    Add {
        /// Configuration UUID
        #[arg(long)]
        server: String,

        /// Component type
        #[arg(long = "type", value_enum)]
        component_type: ComponentType,

        /// Inventory component UUID
        #[arg(long)]
        component: String,

        /// Quantity to assign
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Slot position hint
        #[arg(short, long, default_value = "")]
        slot: String,

        /// Skip the server-side compatibility check
        #[arg(long)]
        force: bool,
    },
}
