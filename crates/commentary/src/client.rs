//! Fire-and-forget commentary client.
//!
//! Each request is spawned as its own task on a runtime owned by the client.
//! Finished replies land in an unbounded channel that the game loop drains
//! with [`CommentaryClient::try_recv`]. Provider errors never surface: they are
//! replaced by fallback lines.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::{Handle, Runtime};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::{CommentaryConfig, ProviderKind};
use crate::engine::{Commentator, CommentaryReply};
use crate::protocol::{commentary_or_fallback, debrief_fallback};
use crate::provider::{CommandProvider, CommentaryProvider, ScriptedProvider};
use crate::types::{GameEvent, GameStats};

pub struct CommentaryClient {
    /// Present when the client owns its runtime.
    runtime: Option<Runtime>,
    handle: Handle,
    provider: Arc<dyn CommentaryProvider>,
    tx: mpsc::UnboundedSender<CommentaryReply>,
    rx: mpsc::UnboundedReceiver<CommentaryReply>,
}

impl CommentaryClient {
    /// Build a client with its own small multi-threaded runtime.
    pub fn new(provider: Arc<dyn CommentaryProvider>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("snake-commentary")
            .enable_all()
            .build()
            .context("failed to start commentary runtime")?;
        let handle = runtime.handle().clone();
        Ok(Self::build(Some(runtime), handle, provider))
    }

    /// Spawn onto an existing runtime instead of owning one.
    pub fn with_handle(handle: Handle, provider: Arc<dyn CommentaryProvider>) -> Self {
        Self::build(None, handle, provider)
    }

    /// Build the configured client, or `None` when commentary is disabled.
    pub fn from_config(config: &CommentaryConfig) -> Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }
        let provider: Arc<dyn CommentaryProvider> = match &config.provider {
            ProviderKind::Scripted => Arc::new(ScriptedProvider),
            ProviderKind::Command(line) => {
                match CommandProvider::from_command_line(line, config.timeout) {
                    Some(cmd) => Arc::new(cmd),
                    None => Arc::new(ScriptedProvider),
                }
            }
        };
        Self::new(provider).map(Some)
    }

    fn build(
        runtime: Option<Runtime>,
        handle: Handle,
        provider: Arc<dyn CommentaryProvider>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            handle,
            provider,
            tx,
            rx,
        }
    }

    /// Ask for a line. Returns immediately.
    pub fn request(&self, event: GameEvent, score: u32) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = provider.commentary(score, event).await;
            if let Err(e) = &result {
                warn!(event = event.as_str(), score, error = %e, "commentary failed");
            }
            let line = commentary_or_fallback(result);
            debug!(event = event.as_str(), text = %line.text, "commentary ready");
            // Receiver gone means the client was dropped.
            let _ = tx.send(CommentaryReply::Line(line));
        });
    }

    /// Ask for a post-game report. Returns immediately.
    pub fn request_report(&self, stats: GameStats) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let report = match provider.debrief(stats).await {
                Ok(report) => report,
                Err(e) => {
                    warn!(score = stats.score, error = %e, "debrief failed");
                    debrief_fallback()
                }
            };
            let _ = tx.send(CommentaryReply::Debrief {
                run: stats.run,
                report,
            });
        });
    }

    /// Next finished reply. Never blocks.
    pub fn try_recv(&mut self) -> Option<CommentaryReply> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next reply. Blocks the calling thread.
    ///
    /// Must not be called from inside an async context.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<CommentaryReply> {
        let rx = &mut self.rx;
        self.handle
            .block_on(async { tokio::time::timeout(timeout, rx.recv()).await.ok().flatten() })
    }
}

impl Drop for CommentaryClient {
    fn drop(&mut self) {
        if let Some(rt) = self.runtime.take() {
            rt.shutdown_background();
        }
    }
}

impl Commentator for CommentaryClient {
    fn request_commentary(&mut self, event: GameEvent, score: u32) {
        self.request(event, score);
    }

    fn request_debrief(&mut self, stats: GameStats) {
        self.request_report(stats);
    }

    fn poll_reply(&mut self) -> Option<CommentaryReply> {
        self.try_recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommentaryError;
    use crate::types::{Commentary, Debrief, Mood};
    use async_trait::async_trait;

    struct Failing;

    #[async_trait]
    impl CommentaryProvider for Failing {
        async fn commentary(&self, _: u32, _: GameEvent) -> Result<Commentary, CommentaryError> {
            Err(CommentaryError::Timeout(Duration::from_millis(1)))
        }

        async fn debrief(&self, _: GameStats) -> Result<Debrief, CommentaryError> {
            Err(CommentaryError::Empty)
        }
    }

    struct Blank;

    #[async_trait]
    impl CommentaryProvider for Blank {
        async fn commentary(&self, _: u32, _: GameEvent) -> Result<Commentary, CommentaryError> {
            Err(CommentaryError::Empty)
        }

        async fn debrief(&self, _: GameStats) -> Result<Debrief, CommentaryError> {
            Err(CommentaryError::Empty)
        }
    }

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_scripted_reply_arrives() {
        let mut client = CommentaryClient::new(Arc::new(ScriptedProvider)).unwrap();
        assert!(client.try_recv().is_none());
        client.request(GameEvent::Eat, 5);
        match client.recv_timeout(WAIT) {
            Some(CommentaryReply::Line(line)) => assert_eq!(line.mood, Mood::Excited),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_errors_become_fallbacks() {
        let mut client = CommentaryClient::new(Arc::new(Failing)).unwrap();
        client.request(GameEvent::Die, 3);
        assert_eq!(
            client.recv_timeout(WAIT),
            Some(CommentaryReply::Line(Commentary::new(
                "Connection unstable...",
                Mood::Neutral
            )))
        );

        client.request_report(GameStats {
            run: 4,
            score: 3,
            moves: 10,
            duration_secs: 4,
        });
        match client.recv_timeout(WAIT) {
            Some(CommentaryReply::Debrief { run, report }) => {
                assert_eq!(run, 4);
                assert_eq!(report.score_rating, "Unknown Entity")
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_empty_reply_fallback() {
        let mut client = CommentaryClient::new(Arc::new(Blank)).unwrap();
        client.request(GameEvent::Start, 0);
        assert_eq!(
            client.recv_timeout(WAIT),
            Some(CommentaryReply::Line(Commentary::new("System online.", Mood::Neutral)))
        );
    }

    #[test]
    fn test_disabled_config_builds_nothing() {
        let cfg = CommentaryConfig {
            enabled: false,
            ..CommentaryConfig::default()
        };
        assert!(CommentaryClient::from_config(&cfg).unwrap().is_none());
    }
}
