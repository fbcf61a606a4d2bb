use super::parser::AccountRecord;
use super::view;
use crate::config::Config;
use crate::events::EventHandler;
use crate::modules::stats::client::StatsClient;
use async_trait::async_trait;
use dashmap::DashMap;
use poise::serenity_prelude::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    FullEvent, Message, MessageId,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Watches the input channel for webhook-posted account dumps, enriches
/// them against the stats API, and republishes the formatted summary to
/// the output channel.
#[derive(Debug)]
pub struct RelayHandler {
    config: Arc<Config>,
    stats: Arc<StatsClient>,
    accounts: Arc<DashMap<MessageId, AccountRecord>>,
}

impl RelayHandler {
    pub fn new(
        config: Arc<Config>,
        stats: Arc<StatsClient>,
        accounts: Arc<DashMap<MessageId, AccountRecord>>,
    ) -> Self {
        Self {
            config,
            stats,
            accounts,
        }
    }

    async fn relay(&self, ctx: &Context, message: &Message) -> Result<(), crate::Error> {
        info!("webhook message received in channel {}", message.channel_id);

        let Some(record) = AccountRecord::parse(&message.content) else {
            debug!("message is missing required account fields, skipping");
            return Ok(());
        };

        match self.stats.lookup(&record.username).await {
            Ok(stats) => {
                let response = CreateMessage::new()
                    .embed(view::account_embed(&record, &stats))
                    .components(vec![view::copy_buttons()]);
                let sent = self
                    .config
                    .output_channel
                    .send_message(&ctx.http, response)
                    .await?;

                let username = record.username.clone();
                self.accounts.insert(sent.id, record);
                info!("account embed sent for {username}");
            }
            Err(e) => {
                warn!("stats lookup for {} failed: {e}", record.username);
                let response =
                    CreateMessage::new().embed(view::invalid_account_embed(&record.username));
                self.config
                    .output_channel
                    .send_message(&ctx.http, response)
                    .await?;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl EventHandler for RelayHandler {
    fn name(&self) -> &str {
        "Relay"
    }

    async fn handle(&self, ctx: &Context, event: &FullEvent) -> Result<(), crate::Error> {
        let FullEvent::Message { new_message } = event else {
            return Ok(());
        };

        let own_id = ctx.cache.current_user().id;
        if new_message.author.id == own_id {
            return Ok(());
        }
        if new_message.channel_id != self.config.input_channel
            || new_message.webhook_id.is_none()
        {
            return Ok(());
        }

        self.relay(ctx, new_message).await
    }
}

/// Answers the copy buttons on relayed account embeds. The bound values
/// live only in this process; buttons on messages posted before a restart
/// get an ephemeral "no longer available" notice instead.
#[derive(Debug)]
pub struct CopyButtonHandler {
    accounts: Arc<DashMap<MessageId, AccountRecord>>,
}

impl CopyButtonHandler {
    pub fn new(accounts: Arc<DashMap<MessageId, AccountRecord>>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl EventHandler for CopyButtonHandler {
    fn name(&self) -> &str {
        "CopyButtons"
    }

    async fn handle(&self, ctx: &Context, event: &FullEvent) -> Result<(), crate::Error> {
        let FullEvent::InteractionCreate { interaction } = event else {
            return Ok(());
        };
        let Some(component) = interaction.as_message_component() else {
            return Ok(());
        };
        let custom_id = component.data.custom_id.as_str();
        if !custom_id.starts_with("copy:") {
            return Ok(());
        }

        let reveal = self
            .accounts
            .get(&component.message.id)
            .and_then(|record| match custom_id {
                view::COPY_SESSION => Some(("Session token", record.session_token.clone())),
                view::COPY_UUID => Some(("UUID", record.uuid.clone())),
                view::COPY_USERNAME => Some(("Username", record.username.clone())),
                _ => None,
            });

        let content = match &reveal {
            Some((_, value)) => format!("```\n{value}\n```"),
            None => "❌ This data is no longer available.".to_string(),
        };

        component
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new()
                        .content(content)
                        .ephemeral(true),
                ),
            )
            .await?;

        if let Some((label, _)) = reveal {
            info!("{label} copied by {}", component.user.tag());
        }

        Ok(())
    }
}
