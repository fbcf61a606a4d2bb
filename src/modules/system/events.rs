use crate::config::Config;
use crate::events::EventHandler;
use async_trait::async_trait;
use poise::serenity_prelude::{ActivityData, Context, FullEvent, OnlineStatus};
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct ReadyHandler {
    config: Arc<Config>,
}

impl ReadyHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EventHandler for ReadyHandler {
    fn name(&self) -> &str {
        "Ready"
    }

    async fn handle(&self, ctx: &Context, event: &FullEvent) -> Result<(), crate::Error> {
        if let FullEvent::Ready { data_about_bot } = event {
            info!("{} has connected to Discord", data_about_bot.user.name);
            info!("monitoring channel {}", self.config.input_channel);
            ctx.set_presence(
                Some(ActivityData::watching("for Minecraft accounts")),
                OnlineStatus::Online,
            );
        }
        Ok(())
    }
}
