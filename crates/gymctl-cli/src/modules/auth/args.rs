use chrono::NaiveDate;
use clap::Args;
use gymctl_core::FitnessGoal;

#[derive(Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub date_of_birth: NaiveDate,
    #[arg(long)]
    pub fitness_goal: FitnessGoal,
}

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct VerifyArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub code: String,
}

#[derive(Args)]
pub struct ResendCodeArgs {
    #[arg(long)]
    pub email: String,
}

#[derive(Args)]
pub struct ForgotPasswordArgs {
    #[arg(long)]
    pub email: String,
}

#[derive(Args)]
pub struct ResetPasswordArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub password: Option<String>,
}
