use clap::{Args, Subcommand};
use gymctl_core::GymKind;
use uuid::Uuid;

#[derive(Args)]
pub struct GymArgs {
    #[command(subcommand)]
    pub command: GymCommand,
}

#[derive(Subcommand)]
pub enum GymCommand {
    List,
    Get(GymGetArgs),
    Create(GymCreateArgs),
    Update(GymUpdateArgs),
    Delete(GymDeleteArgs),
    #[command(about = "List gyms with their remaining capacity")]
    Available,
}

#[derive(Args)]
pub struct GymGetArgs {
    pub id: Uuid,
}

#[derive(Args)]
pub struct GymCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub kind: GymKind,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub capacity: Option<i64>,
}

#[derive(Args)]
pub struct GymUpdateArgs {
    pub id: Uuid,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub kind: Option<GymKind>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub capacity: Option<i64>,
}

#[derive(Args)]
pub struct GymDeleteArgs {
    pub id: Uuid,
}
