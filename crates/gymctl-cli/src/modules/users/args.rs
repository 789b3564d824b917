use chrono::NaiveDate;
use clap::{Args, Subcommand};
use gymctl_core::FitnessGoal;
use uuid::Uuid;

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    List,
    Create(UserCreateArgs),
    Update(UserUpdateArgs),
    Delete(UserDeleteArgs),
    #[command(about = "List the gyms a user belongs to, with join dates")]
    Memberships(UserMembershipsArgs),
}

#[derive(Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub date_of_birth: NaiveDate,
    #[arg(long)]
    pub fitness_goal: FitnessGoal,
}

#[derive(Args)]
pub struct UserUpdateArgs {
    pub id: Uuid,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    pub fitness_goal: Option<FitnessGoal>,
}

#[derive(Args)]
pub struct UserDeleteArgs {
    pub id: Uuid,
}

#[derive(Args)]
pub struct UserMembershipsArgs {
    pub id: Uuid,
}
