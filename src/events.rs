use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};
use poise::serenity_prelude::{Context, FullEvent};
use std::fmt::Debug;
use std::sync::Arc;

/// A gateway event consumer. Handlers are registered once at startup and
/// receive every event; each decides for itself what to react to.
#[async_trait]
pub trait EventHandler: Send + Sync + Debug {
    fn name(&self) -> &str;
    async fn handle(&self, ctx: &Context, event: &FullEvent) -> Result<(), crate::Error>;
}

#[derive(Debug, Default)]
pub struct EventManager {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: impl EventHandler + 'static) {
        self.handlers.push(Arc::new(handler));
    }

    /// Fans one event out to every handler on its own task. Handler errors
    /// are logged, never propagated; one failing handler cannot stall the
    /// dispatch of the others.
    pub async fn dispatch(&self, ctx: &Context, event: &FullEvent) {
        let mut futures = FuturesUnordered::new();

        for handler in &self.handlers {
            let handler = Arc::clone(handler);
            let ctx = ctx.clone();
            let event = event.clone();

            futures.push(tokio::spawn(async move {
                if let Err(e) = handler.handle(&ctx, &event).await {
                    tracing::error!("error in event handler {}: {e}", handler.name());
                }
            }));
        }

        while futures.next().await.is_some() {}
    }
}
