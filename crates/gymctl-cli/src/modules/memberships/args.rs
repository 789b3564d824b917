use clap::{Args, Subcommand};
use uuid::Uuid;

#[derive(Args)]
pub struct MembershipArgs {
    #[command(subcommand)]
    pub command: MembershipCommand,
}

#[derive(Subcommand)]
pub enum MembershipCommand {
    #[command(about = "Add a user to a gym")]
    Add(MembershipAddArgs),
    #[command(about = "Remove a user from a gym")]
    Remove(MembershipRemoveArgs),
    #[command(about = "List the members of a gym")]
    Members(MembershipMembersArgs),
    #[command(about = "List the gyms a user belongs to")]
    Gyms(MembershipGymsArgs),
    #[command(about = "List the gyms the signed-in user belongs to")]
    Mine,
}

#[derive(Args)]
pub struct MembershipAddArgs {
    #[arg(long)]
    pub user_id: Uuid,
    #[arg(long)]
    pub gym_id: Uuid,
}

#[derive(Args)]
pub struct MembershipRemoveArgs {
    #[arg(long)]
    pub user_id: Uuid,
    #[arg(long)]
    pub gym_id: Uuid,
}

#[derive(Args)]
pub struct MembershipMembersArgs {
    pub gym_id: Uuid,
}

#[derive(Args)]
pub struct MembershipGymsArgs {
    pub user_id: Uuid,
}
