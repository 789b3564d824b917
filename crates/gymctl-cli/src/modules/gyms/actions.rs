use gymctl_core::api::gyms::{CreateGymRequest, UpdateGymRequest};

use super::http::{create_gym, delete_gym, get_gym, list_available, list_gyms, update_gym};
use crate::cli_args::*;
use crate::modules::system::http::{print_empty_response, print_json_response};
use crate::modules::system::CommandContext;
use crate::modules::users::ensure_manager;

pub(crate) async fn handle_gym(args: GymArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        GymCommand::List => {
            let response = list_gyms(ctx).await?;
            print_json_response(response).await?;
        }
        GymCommand::Get(args) => {
            let response = get_gym(ctx, &args.id).await?;
            print_json_response(response).await?;
        }
        GymCommand::Create(args) => {
            let profile = ensure_manager(ctx).await?;
            let payload = CreateGymRequest {
                name: args.name,
                kind: args.kind,
                location: args.location,
                capacity: args.capacity,
                user_id: profile.id,
            };
            let response = create_gym(ctx, payload).await?;
            print_json_response(response).await?;
        }
        GymCommand::Update(args) => {
            ensure_manager(ctx).await?;
            let payload = UpdateGymRequest {
                name: args.name,
                kind: args.kind,
                location: args.location,
                capacity: args.capacity,
            };
            let response = update_gym(ctx, &args.id, payload).await?;
            print_json_response(response).await?;
        }
        GymCommand::Delete(args) => {
            ensure_manager(ctx).await?;
            let response = delete_gym(ctx, &args.id).await?;
            print_empty_response(response, "Gym deleted").await?;
        }
        GymCommand::Available => {
            let response = list_available(ctx).await?;
            print_json_response(response).await?;
        }
    }
    Ok(())
}
