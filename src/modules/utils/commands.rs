use crate::modules::relay::view;
use crate::modules::stats::client::StatsError;
use crate::{Context, Error};
use poise::serenity_prelude::CreateEmbed;
use poise::CreateReply;
use tracing::warn;

/// Simple ping command to check if the bot is alive.
#[poise::command(prefix_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.say(format!("Pong! Latency: {}ms", latency.as_millis()))
        .await?;
    Ok(())
}

/// Show bot-wide counters: guilds, cached users, gateway latency.
#[poise::command(prefix_command)]
pub async fn stats(ctx: Context<'_>) -> Result<(), Error> {
    let (guilds, users) = {
        let cache = &ctx.serenity_context().cache;
        let guild_ids = cache.guilds();
        let users: u64 = guild_ids
            .iter()
            .filter_map(|id| cache.guild(*id).map(|guild| guild.member_count))
            .sum();
        (guild_ids.len(), users)
    };
    let latency = ctx.ping().await;

    let embed = CreateEmbed::new()
        .title("Bot Stats")
        .colour(view::BLURPLE)
        .field("Guilds", guilds.to_string(), true)
        .field("Users", users.to_string(), true)
        .field("Latency", format!("{}ms", latency.as_millis()), true);
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// On-demand stats query for a username, same formatting as the relay.
#[poise::command(prefix_command)]
pub async fn lookup(ctx: Context<'_>, username: String) -> Result<(), Error> {
    match ctx.data().stats.lookup(&username).await {
        Ok(stats) => {
            ctx.send(CreateReply::default().embed(view::stats_embed(&username, &stats)))
                .await?;
        }
        Err(StatsError::UnknownPlayer) => {
            ctx.say(format!("❌ `{username}` is not a valid account."))
                .await?;
        }
        Err(e) => {
            warn!("lookup for {username} failed: {e}");
            ctx.say("❌ Stats lookup failed, try again later.").await?;
        }
    }
    Ok(())
}
