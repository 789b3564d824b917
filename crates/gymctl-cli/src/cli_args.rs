use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::auth::args::*;
pub use crate::modules::gyms::args::*;
pub use crate::modules::memberships::args::*;
pub use crate::modules::system::args::*;
pub use crate::modules::users::args::*;

#[derive(Parser)]
#[command(name = "gymctl")]
#[command(about = "Gym membership CLI")]
pub struct Cli {
    #[arg(long, env = "GYMCTL_ADDR")]
    pub addr: Option<String>,
    #[arg(long, env = "GYMCTL_TOKEN")]
    pub token: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Create an account")]
    Signup(SignupArgs),
    #[command(about = "Confirm an account with the emailed code")]
    Verify(VerifyArgs),
    #[command(about = "Request a new verification code")]
    ResendCode(ResendCodeArgs),
    #[command(about = "Sign in and store session tokens")]
    Login(LoginArgs),
    #[command(about = "Sign out and clear session tokens")]
    Logout,
    ForgotPassword(ForgotPasswordArgs),
    ResetPassword(ResetPasswordArgs),
    #[command(about = "Show the signed-in user's profile")]
    Whoami,
    Users(UserArgs),
    Gyms(GymArgs),
    Memberships(MembershipArgs),
    Config(ConfigArgs),
}
