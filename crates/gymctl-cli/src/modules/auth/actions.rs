use reqwest::Method;
use tracing::warn;

use gymctl_core::api::auth::{
    AuthResponse, ForgotPasswordRequest, ResendCodeRequest, ResetPasswordRequest, SigninRequest,
    SignupRequest, VerifyRequest,
};

use crate::cli_args::*;
use crate::modules::auth::store::TokenKind;
use crate::modules::system::http::{
    decode_json, print_empty_response, response_error, send_request,
};
use crate::modules::system::{ApiError, CommandContext};
use crate::prompt_password;

pub(crate) async fn handle_signup(
    args: SignupArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let payload = SignupRequest {
        name: args.name,
        email: args.email.clone(),
        password,
        date_of_birth: args.date_of_birth,
        fitness_goal: args.fitness_goal,
    };
    let response = send_request(
        ctx,
        Method::POST,
        "/users/signup",
        Some(serde_json::to_value(&payload)?),
    )
    .await?;
    let message = format!(
        "Account created; a verification code was sent to {}. Run `gymctl verify` to confirm it.",
        args.email
    );
    print_empty_response(response, &message).await
}

pub(crate) async fn handle_login(args: LoginArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let payload = SigninRequest {
        email: args.email,
        password,
    };
    let response = send_request(
        ctx,
        Method::POST,
        "/users/signin",
        Some(serde_json::to_value(&payload)?),
    )
    .await?;
    let auth: AuthResponse = decode_json(response).await?;

    ctx.store.set(TokenKind::Access, Some(&auth.access_token))?;
    ctx.store.set(TokenKind::Refresh, Some(&auth.refresh_token))?;
    ctx.store
        .set(TokenKind::Identity, auth.id_token.as_deref())?;

    println!("Signed in");
    Ok(())
}

pub(crate) async fn handle_verify(
    args: VerifyArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    ensure_verification_code(&args.code)?;
    let payload = VerifyRequest {
        email: args.email,
        code: args.code,
    };
    let response = send_request(
        ctx,
        Method::POST,
        "/users/verify",
        Some(serde_json::to_value(&payload)?),
    )
    .await?;
    print_empty_response(response, "Email verified. Run `gymctl login` to sign in.").await
}

pub(crate) async fn handle_resend_code(
    args: ResendCodeArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let url = format!("{}/auth/resend-code", ctx.addr.trim_end_matches('/'));
    let payload = ResendCodeRequest { email: args.email };
    let response = ctx
        .client
        .post(url)
        .json(&payload)
        .send()
        .await
        .map_err(|err| ApiError::NetworkUnavailable(err.to_string()))?;
    if !response.status().is_success() {
        return Err(response_error(response).await.into());
    }
    println!("Verification code resent");
    Ok(())
}

pub(crate) async fn handle_forgot_password(
    args: ForgotPasswordArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let payload = ForgotPasswordRequest { email: args.email };
    let response = send_request(
        ctx,
        Method::POST,
        "/users/forgot-password",
        Some(serde_json::to_value(&payload)?),
    )
    .await?;
    print_empty_response(
        response,
        "Reset code sent. Run `gymctl reset-password` with the code from your email.",
    )
    .await
}

pub(crate) async fn handle_reset_password(
    args: ResetPasswordArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    ensure_verification_code(&args.code)?;
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("New password: ")?,
    };
    let payload = ResetPasswordRequest {
        email: args.email,
        code: args.code,
        password,
    };
    let response = send_request(
        ctx,
        Method::POST,
        "/users/reset-password",
        Some(serde_json::to_value(&payload)?),
    )
    .await?;
    print_empty_response(response, "Password reset. Run `gymctl login` to sign in.").await
}

/// Remote logout is best-effort: the local session is torn down no matter
/// what the server says.
pub(crate) async fn handle_logout(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    if let Err(err) = send_logout(ctx).await {
        warn!("logout request failed: {err:#}; clearing local session anyway");
    }
    ctx.store.clear_all()?;
    println!("Signed out");
    Ok(())
}

async fn send_logout(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let url = format!("{}/auth/logout", ctx.addr.trim_end_matches('/'));
    let mut builder = ctx.client.post(url);
    if let Some(token) = ctx.access_token()? {
        builder = builder.bearer_auth(token);
    }
    let response = builder.send().await?;
    if !response.status().is_success() {
        return Err(response_error(response).await.into());
    }
    Ok(())
}

/// Client-side check; a malformed code never reaches the network layer.
fn ensure_verification_code(code: &str) -> anyhow::Result<()> {
    if code.len() != 6 || !code.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::Validation("the verification code is 6 digits".to_string()).into());
    }
    Ok(())
}
