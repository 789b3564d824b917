use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Set the API server address")]
    SetAddr(SetAddrArgs),
    #[command(about = "Show the effective configuration")]
    Show,
}

#[derive(Args)]
pub struct SetAddrArgs {
    pub addr: String,
}
