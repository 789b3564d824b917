use gymctl_core::api::users::{CreateUserRequest, UpdateUserRequest};

use super::http::{create_user, delete_user, ensure_manager, list_users, update_user, user_memberships};
use crate::cli_args::*;
use crate::modules::system::http::{print_empty_response, print_json_response};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_user(args: UserArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        UserCommand::List => {
            let response = list_users(ctx).await?;
            print_json_response(response).await?;
        }
        UserCommand::Create(args) => {
            ensure_manager(ctx).await?;
            let payload = CreateUserRequest {
                name: args.name,
                email: args.email,
                date_of_birth: args.date_of_birth,
                fitness_goal: args.fitness_goal,
            };
            let response = create_user(ctx, payload).await?;
            print_json_response(response).await?;
        }
        UserCommand::Update(args) => {
            let payload = UpdateUserRequest {
                name: args.name,
                date_of_birth: args.date_of_birth,
                fitness_goal: args.fitness_goal,
            };
            let response = update_user(ctx, &args.id, payload).await?;
            print_json_response(response).await?;
        }
        UserCommand::Delete(args) => {
            ensure_manager(ctx).await?;
            let response = delete_user(ctx, &args.id).await?;
            print_empty_response(response, "User deleted").await?;
        }
        UserCommand::Memberships(args) => {
            let response = user_memberships(ctx, &args.id).await?;
            print_json_response(response).await?;
        }
    }
    Ok(())
}
