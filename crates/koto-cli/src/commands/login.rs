use anyhow::bail;
use serde::Serialize;

use koto_site::{ConfigCredentials, CredentialValidator};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output;

#[derive(Serialize)]
struct LoginResponse<'a> {
    status: &'a str,
    username: &'a str,
}

/// Handle `koto login`: check the supplied pair against configured admin
/// credentials.
pub fn handle(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let validator = ConfigCredentials::new(
        ctx.config.admin.username.clone(),
        ctx.config.admin.password.clone(),
    );

    if !validator.validate(&args.username, &args.password) {
        bail!("invalid credentials");
    }

    tracing::info!(username = %args.username, "admin login accepted");
    output::output(
        &LoginResponse {
            status: "ok",
            username: &args.username,
        },
        flags.format,
    )
}
