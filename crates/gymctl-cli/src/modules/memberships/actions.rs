use gymctl_core::api::memberships::CreateMembershipRequest;

use super::http::{add_membership, gym_members, my_gyms, remove_membership, user_gyms};
use crate::cli_args::*;
use crate::modules::system::http::{print_empty_response, print_json_response};
use crate::modules::system::CommandContext;
use crate::modules::users::ensure_manager;

pub(crate) async fn handle_membership(
    args: MembershipArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        MembershipCommand::Add(args) => {
            ensure_manager(ctx).await?;
            let payload = CreateMembershipRequest {
                user_id: args.user_id,
                gym_id: args.gym_id,
            };
            let response = add_membership(ctx, payload).await?;
            print_json_response(response).await?;
        }
        MembershipCommand::Remove(args) => {
            ensure_manager(ctx).await?;
            let response = remove_membership(ctx, &args.user_id, &args.gym_id).await?;
            print_empty_response(response, "Membership removed").await?;
        }
        MembershipCommand::Members(args) => {
            let response = gym_members(ctx, &args.gym_id).await?;
            print_json_response(response).await?;
        }
        MembershipCommand::Gyms(args) => {
            let response = user_gyms(ctx, &args.user_id).await?;
            print_json_response(response).await?;
        }
        MembershipCommand::Mine => {
            let response = my_gyms(ctx).await?;
            print_json_response(response).await?;
        }
    }
    Ok(())
}
