use crate::config::Config;
use crate::events::EventManager;
use dashmap::DashMap;
use modules::relay::handler::{CopyButtonHandler, RelayHandler};
use modules::relay::parser::AccountRecord;
use modules::stats::client::StatsClient;
use modules::system::events::ReadyHandler;
use modules::utils::commands::{lookup, ping, stats};
use poise::serenity_prelude::{self as serenity, CreateAllowedMentions, MessageId};
use std::sync::Arc;
use tracing::{error, info, trace};

mod config;
mod events;
mod modules;
mod web;

#[derive(Clone, Debug)]
pub struct Data {
    pub stats: Arc<StatsClient>,
    pub event_manager: Arc<EventManager>,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    info!("starting hermes");

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = web::serve(port).await {
            error!("health check server failed: {e}");
        }
    });

    let token = config.token.clone();
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions::<Data, Error> {
            allowed_mentions: Some(CreateAllowedMentions::new().empty_roles().empty_users()),
            commands: vec![ping(), stats(), lookup()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("!".to_string()),
                ..Default::default()
            },
            pre_command: |ctx| {
                Box::pin(async move {
                    trace!(
                        "Command {} used by {} in {}",
                        ctx.command().qualified_name,
                        ctx.author().tag(),
                        ctx.guild_id()
                            .map_or_else(|| "DM".to_string(), |id| id.to_string())
                    );
                })
            },
            post_command: |ctx| {
                Box::pin(async move {
                    info!(
                        "Command {} completed for {} in {}",
                        ctx.command().qualified_name,
                        ctx.author().tag(),
                        ctx.guild_id()
                            .map_or_else(|| "DM".to_string(), |id| id.to_string())
                    );
                })
            },
            on_error: |error| {
                Box::pin(async move {
                    match error {
                        poise::FrameworkError::Command { error, ctx, .. } => {
                            error!(
                                "Command {} failed for {} in {}: {:?}",
                                ctx.command().qualified_name,
                                ctx.author().tag(),
                                ctx.guild_id()
                                    .map_or_else(|| "DM".to_string(), |id| id.to_string()),
                                error
                            );
                        }
                        err => error!("Other framework error: {:?}", err),
                    }
                })
            },
            event_handler: |ctx, event, _framework, data| {
                Box::pin(async move {
                    data.event_manager.dispatch(ctx, event).await;
                    Ok(())
                })
            },
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| {
            Box::pin(async move {
                let stats = Arc::new(StatsClient::new(
                    config.stats_api_url.clone(),
                    config.stats_api_key.clone(),
                ));
                let accounts: Arc<DashMap<MessageId, AccountRecord>> = Arc::new(DashMap::new());

                let mut event_manager = EventManager::new();
                event_manager.register(ReadyHandler::new(config.clone()));
                event_manager.register(RelayHandler::new(
                    config.clone(),
                    stats.clone(),
                    accounts.clone(),
                ));
                event_manager.register(CopyButtonHandler::new(accounts));

                Ok(Data {
                    stats,
                    event_manager: Arc::new(event_manager),
                })
            })
        })
        .build();

    let client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await;

    client.unwrap().start().await.unwrap();
}
