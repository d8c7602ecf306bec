use std::sync::Arc;

use anyhow::{Context, Result};
use chorus_core::{CancellationToken, Client, ClientConfig, MemoryStore, Role, UserLike};
use chorus_http::RestTransport;
use clap::Parser;
use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Command;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chorus_core=info,chorus_http=info,chorus_inspect=info"));
    if args.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let mut config = ClientConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config))?;
    config.apply_env_overrides();
    if config.api.token.is_none() {
        tracing::warn!("no API token configured; set CHORUS_TOKEN or api.token");
    }

    let store = Arc::new(MemoryStore::with_config(&config.cache));
    let transport = Arc::new(RestTransport::new(&config.api)?);
    let client = Client::with_api_config(store, transport, &config.api);

    // Ctrl-C stops any role listing in progress.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    match args.command {
        Command::Guild { guild } => {
            let guild = client.guild(guild).await?;
            println!("{} ({})", guild.name(), guild.id());
            println!("  created  {}", guild.created_at());
            if let Some(url) = guild.icon_url() {
                println!("  icon     {url}");
            }
            match guild.owner().await {
                Ok(owner) => println!("  owner    {} {}", owner.tag(), owner.mention()),
                Err(err) => tracing::warn!(error = %err, "could not resolve guild owner"),
            }
        }
        Command::Member { guild, user } => {
            let member = client.member(guild, user).await?;
            let guild = member.guild().await?;
            println!("{} in {}", member.display_name(), guild.name());
            println!("  tag      {}", member.tag());
            println!("  mention  {}", member.nickname_mention());
            println!("  joined   {}", member.joined_at());
            print_roles(member.roles_until(cancel.clone())).await?;
            if !cancel.is_cancelled() {
                println!("  perms    {:?}", member.base_permissions().await?);
            }
        }
        Command::Emoji { guild, emoji } => {
            let emoji = client.emoji(guild, emoji).await?;
            println!("{} {}", emoji.as_format(), emoji.image_url());
            if let Some(creator) = emoji.user() {
                println!("  creator  {}", creator.tag());
            }
            print_roles(emoji.roles_until(cancel.clone())).await?;
        }
        Command::User { user } => {
            let user = client.user(user).await?;
            println!("{} {}", user.tag(), user.mention());
            println!("  created  {}", user.created_at());
            println!(
                "  avatar   {}",
                user.avatar_url().unwrap_or_else(|| user.default_avatar_url())
            );
        }
    }

    Ok(())
}

async fn print_roles(mut roles: BoxStream<'static, chorus_core::Result<Role>>) -> Result<()> {
    println!("  roles");
    while let Some(role) = roles.next().await {
        let role = role?;
        println!("    {} {} {}", role.color_hex(), role.name(), role.mention());
    }
    Ok(())
}
