//! Rescan Policy - When new conversation warrants re-scoring

use chrono::{DateTime, Duration, Utc};
use shared::RescanConfig;

/// Message bookkeeping of one conversation session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub started_at: DateTime<Utc>,
    pub last_scan_at: Option<DateTime<Utc>>,
    /// Messages received since the last scan
    pub messages_since_scan: u32,
    pub total_messages: u64,
}

impl SessionState {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            last_scan_at: None,
            messages_since_scan: 0,
            total_messages: 0,
        }
    }

    pub fn record_message(&mut self) {
        self.messages_since_scan = self.messages_since_scan.saturating_add(1);
        self.total_messages += 1;
    }

    pub fn mark_scanned(&mut self, at: DateTime<Utc>) {
        self.last_scan_at = Some(at);
        self.messages_since_scan = 0;
    }

    /// Last scan, or the session start if nothing was scanned yet
    pub fn last_activity_mark(&self) -> DateTime<Utc> {
        self.last_scan_at.unwrap_or(self.started_at)
    }
}

/// Decides whether a session is due for re-scoring
pub trait RescanPolicy: Send + Sync {
    fn should_rescan(&self, state: &SessionState, now: DateTime<Utc>) -> bool;
}

/// Rescan after N new messages, or after an interval if anything new arrived
#[derive(Debug, Clone)]
pub struct MessageCountOrInterval {
    every_messages: u32,
    every: Duration,
}

impl MessageCountOrInterval {
    pub fn new(every_messages: u32, every: Duration) -> Self {
        Self {
            every_messages,
            every,
        }
    }

    /// Intervals too long to represent never elapse
    pub fn from_config(config: &RescanConfig) -> Self {
        let every = i64::try_from(config.every_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self::new(config.every_messages, every)
    }
}

impl Default for MessageCountOrInterval {
    fn default() -> Self {
        Self::from_config(&RescanConfig::default())
    }
}

impl RescanPolicy for MessageCountOrInterval {
    fn should_rescan(&self, state: &SessionState, now: DateTime<Utc>) -> bool {
        if state.messages_since_scan == 0 {
            return false;
        }
        if self.every_messages > 0 && state.messages_since_scan >= self.every_messages {
            return true;
        }
        now - state.last_activity_mark() >= self.every
    }
}

impl<F> RescanPolicy for F
where
    F: Fn(&SessionState, DateTime<Utc>) -> bool + Send + Sync,
{
    fn should_rescan(&self, state: &SessionState, now: DateTime<Utc>) -> bool {
        self(state, now)
    }
}
