//! The poll loop: fetch, validate, translate, notify, sleep.
//!
//! All per-iteration state lives on the [`Poller`] itself — the
//! `from_date` cursor and the last reported error text. Neither
//! survives a process restart.

use crate::api::StatusSource;
use crate::model::{check_response, parse_status};
use crate::notify::Messenger;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{debug, error, info};

/// Coordinator for the fetch → validate → translate → notify cycle.
pub struct Poller<S, M> {
    api: S,
    messenger: M,
    interval: Duration,
    /// `from_date` for the next request, epoch seconds.
    cursor: i64,
    /// Text of the last error reported to the chat. Repeats of the
    /// same text are suppressed to avoid spam on sustained outages.
    last_error: Option<String>,
    shutdown: Arc<Notify>,
}

impl<S: StatusSource, M: Messenger> Poller<S, M> {
    /// New poller with the cursor at the current time.
    pub fn new(api: S, messenger: M, interval: Duration) -> Self {
        Self {
            api,
            messenger,
            interval,
            cursor: chrono::Utc::now().timestamp(),
            last_error: None,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Override the starting cursor.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Handle to request shutdown from another task.
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        Arc::clone(&self.shutdown)
    }

    /// Run until shutdown is requested. There is no other exit: every
    /// cycle error is absorbed, reported, and followed by the fixed
    /// sleep.
    pub async fn run(&mut self) {
        info!(interval_secs = self.interval.as_secs(), "poller started");

        loop {
            self.tick().await;

            tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("poller shutting down");
                    return;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }

    /// One full cycle, including error reporting and dedup. No sleep.
    pub async fn tick(&mut self) {
        match self.cycle().await {
            Ok(Some(message)) => {
                info!("homework status changed");
                self.messenger.send_message(&message).await;
            }
            Ok(None) => {
                debug!("homework status unchanged");
            }
            Err(e) => {
                error!("poll cycle failed: {e}");
                let text = format!("Сбой в работе программы: {e}");
                if self.last_error.as_deref() != Some(text.as_str()) {
                    self.messenger.send_message(&text).await;
                }
                self.last_error = Some(text);
            }
        }
    }

    /// Fetch and interpret one response. Returns the notification text
    /// when the most recent homework changed status, `None` when the
    /// list is empty.
    async fn cycle(&mut self) -> crate::error::Result<Option<String>> {
        let response = self.api.homework_statuses(self.cursor).await?;

        // Advance the cursor only from a successful fetch; hold it
        // unchanged when the response omits current_date.
        if let Some(ts) = response.get("current_date").and_then(|v| v.as_i64()) {
            self.cursor = ts;
        }

        let homeworks = check_response(&response)?;
        match homeworks.first() {
            Some(homework) => Ok(Some(parse_status(homework)?)),
            None => Ok(None),
        }
    }
}
