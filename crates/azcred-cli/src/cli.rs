use clap::{Parser, Subcommand};
use std::path::PathBuf;

use azcred_domain::DEFAULT_CREDENTIAL_FILE_PATH;

#[derive(Debug, Parser)]
#[command(
    name = "azcred",
    about = "Write and remove the Azure credential file used by CSI driver test runs",
    version
)]
pub struct Cli {
    /// Location of the credential file.
    #[arg(long, env = "AZCRED_OUTPUT", default_value = DEFAULT_CREDENTIAL_FILE_PATH, global = true)]
    pub output: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve credentials and write the credential file.
    Create {
        /// Target Azure China instead of the public cloud.
        #[arg(long)]
        china: bool,
    },

    /// Remove the credential file. Succeeds if it is already gone.
    Delete,

    /// Print what `create` would write, with the client secret masked.
    Show {
        /// Target Azure China instead of the public cloud.
        #[arg(long)]
        china: bool,
    },
}
