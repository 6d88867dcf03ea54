//! Command line surface.

use models::{Gender, PackageCode, PaymentStatus, Weekday};
use portal_core::dashboard::PaymentPreset;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[clap(
    name = "fyw",
    about = "Final Year Week portal: register, check your balance, pay, and manage students",
    version
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Directory holding config.json, session.json and fyw.log
    #[clap(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Override the portal API base URL for this run
    #[clap(long, global = true)]
    pub api_base_url: Option<String>,

    /// Show debug logs on the terminal
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the packages on sale
    Packages {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Register for Final Year Week and pick a package
    Register(RegisterArgs),

    /// Look up an existing registration and remember it
    Login {
        /// Matric number used at registration
        matric_number: String,
    },

    /// Forget the remembered matric number
    Logout,

    /// Show payment progress and invites
    Status {
        /// Defaults to the remembered matric number
        matric_number: Option<String>,
    },

    /// Start a payment and print the checkout link
    Pay(PayArgs),

    /// Confirm a payment from the gateway callback URL or its reference
    Verify {
        /// Callback URL (with `reference` or `tx_ref`) or the bare reference
        reference: String,
    },

    /// Admin tools
    Admin {
        #[clap(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Matric number (at least 6 characters)
    #[clap(long)]
    pub matric_number: String,

    /// Full name as it should appear on the invite
    #[clap(long)]
    pub full_name: String,

    /// male or female
    #[clap(long)]
    pub gender: Gender,

    #[clap(long)]
    pub email: Option<String>,

    /// Package code: T (Corporate Plus), C (Corporate & Owambe), F (Full Experience)
    #[clap(long)]
    pub package: PackageCode,

    /// Theme day for Corporate Plus: tuesday, wednesday or thursday
    #[clap(long)]
    pub day: Option<Weekday>,

    /// Register again even if a matric number is already remembered
    #[clap(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct PayArgs {
    /// Amount in naira; capped at the outstanding balance
    #[clap(long, conflicts_with = "preset")]
    pub amount: Option<f64>,

    /// Pay a share of the outstanding balance
    #[clap(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Defaults to the remembered matric number
    #[clap(long)]
    pub matric_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    #[value(name = "25")]
    Quarter,
    #[value(name = "50")]
    Half,
    #[value(name = "100")]
    Full,
}

impl From<PresetArg> for PaymentPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Quarter => PaymentPreset::Quarter,
            PresetArg::Half => PaymentPreset::Half,
            PresetArg::Full => PaymentPreset::Full,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Sign in; the password is read from stdin when not given
    Login {
        email: String,

        #[clap(long)]
        password: Option<String>,
    },

    /// Forget the stored admin token
    Logout,

    /// List registered students
    Students(StudentsArgs),

    /// Search students interactively, one query per line on stdin
    Search(FilterArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// NOT_PAID, PARTIALLY_PAID or FULLY_PAID
    #[clap(long)]
    pub status: Option<PaymentStatus>,

    /// T, C or F
    #[clap(long)]
    pub package: Option<PackageCode>,

    /// Rows per page; defaults to the configured page size
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct StudentsArgs {
    /// Match on matric number or name
    #[clap(long)]
    pub search: Option<String>,

    #[clap(flatten)]
    pub filters: FilterArgs,

    #[clap(long, default_value_t = 1)]
    pub page: u32,

    /// Write the page as CSV into this directory
    #[clap(long)]
    pub export: Option<PathBuf>,

    /// Output as JSON
    #[clap(long)]
    pub json: bool,
}
