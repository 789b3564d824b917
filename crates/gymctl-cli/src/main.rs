use clap::Parser;
use std::io::{self, Write};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::store::TokenStore;
use crate::modules::auth::{
    handle_forgot_password, handle_login, handle_logout, handle_resend_code, handle_reset_password,
    handle_signup, handle_verify, Session,
};
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, resolve_addr, save_config,
    CommandContext,
};

pub(crate) const DEFAULT_ADDR: &str = "http://localhost:3001";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let client = reqwest::Client::builder()
        // cookies ride along with the bearer token (dual-mode auth)
        .cookie_store(true)
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;
    let mut config = load_config()?;
    let addr = resolve_addr(cli.addr.clone(), &config);

    let store = TokenStore::open();
    let refresh_gate = Mutex::new(());
    let ctx = CommandContext {
        client: &client,
        addr: &addr,
        store: &store,
        token_override: cli.token.clone(),
        refresh_gate: &refresh_gate,
    };

    match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
        }
        command => {
            ensure_secure_addr(&addr, cli.insecure)?;
            match command {
                Command::Signup(args) => handle_signup(args, &ctx).await?,
                Command::Verify(args) => handle_verify(args, &ctx).await?,
                Command::ResendCode(args) => handle_resend_code(args, &ctx).await?,
                Command::ForgotPassword(args) => handle_forgot_password(args, &ctx).await?,
                Command::ResetPassword(args) => handle_reset_password(args, &ctx).await?,
                Command::Login(args) => handle_login(args, &ctx).await?,
                Command::Logout => handle_logout(&ctx).await?,
                command => {
                    if ctx.token_override.is_none() {
                        let session = Session::load(&store)?;
                        if !session.is_authenticated() {
                            anyhow::bail!("not signed in; run `gymctl login` (or pass --token)");
                        }
                    }
                    handle_command(command, &ctx).await?;
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .init();
    Ok(())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
