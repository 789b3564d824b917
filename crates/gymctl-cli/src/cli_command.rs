use reqwest::Method;

use crate::cli_args::*;
use crate::modules::gyms::handle_gym;
use crate::modules::memberships::handle_membership;
use crate::modules::system::http::{print_json_response, send_request};
use crate::modules::system::CommandContext;
use crate::modules::users::handle_user;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Whoami => {
            let response = send_request(ctx, Method::GET, "/api/users", None).await?;
            print_json_response(response).await?;
        }
        Command::Users(args) => handle_user(args, ctx).await?,
        Command::Gyms(args) => handle_gym(args, ctx).await?,
        Command::Memberships(args) => handle_membership(args, ctx).await?,
        Command::Signup(_)
        | Command::Verify(_)
        | Command::ResendCode(_)
        | Command::Login(_)
        | Command::Logout
        | Command::ForgotPassword(_)
        | Command::ResetPassword(_)
        | Command::Config(_) => {
            unreachable!()
        }
    }

    Ok(())
}
