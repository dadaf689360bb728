use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::persist::sink::SaveSink;

/// Save lifecycle as observed by the caller. `Saving` is entered as soon as a
/// changed payload is scheduled, not when the sink fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Saved,
    Error,
}

enum PumpCmd {
    Schedule(Value),
    Flush(oneshot::Sender<SaveState>),
}

/// Debounced autosave controller.
///
/// One debounce timer is live at a time per pump; scheduling a changed
/// payload cancels and replaces it. Sink calls run inline on the worker task,
/// so two calls never overlap for the same pump — a schedule arriving while
/// a save is in flight queues behind it and supersedes afterward. Dropping
/// every handle lets the worker drain: a still-pending payload is saved
/// before the task exits.
#[derive(Clone)]
pub struct AutosavePump {
    cmd_tx: mpsc::UnboundedSender<PumpCmd>,
    state_rx: watch::Receiver<SaveState>,
}

impl AutosavePump {
    pub fn spawn(sink: Arc<dyn SaveSink>, delay: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SaveState::Idle);
        tokio::spawn(run_pump(cmd_rx, state_tx, sink, delay));
        Self { cmd_tx, state_rx }
    }

    /// Queue the payload for a debounced save. A payload whose serialized
    /// form equals the last scheduled one is dropped without touching the
    /// timer, so incidental re-renders do not cause redundant saves.
    pub fn schedule(&self, payload: Value) {
        let _ = self.cmd_tx.send(PumpCmd::Schedule(payload));
    }

    /// Persist any pending payload immediately, awaiting the sink before
    /// returning. No-op when nothing is pending.
    pub async fn flush(&self) -> SaveState {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.cmd_tx.send(PumpCmd::Flush(ack_tx)).is_err() {
            return *self.state_rx.borrow();
        }
        match ack_rx.await {
            Ok(state) => state,
            Err(_) => *self.state_rx.borrow(),
        }
    }

    pub fn state(&self) -> SaveState {
        *self.state_rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SaveState> {
        self.state_rx.clone()
    }

    /// Flush whenever the process is told to stop or loses its terminal, so
    /// a debounced save is never lost to suspension.
    #[cfg(unix)]
    pub fn spawn_suspend_flush(&self) -> tokio::task::JoinHandle<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let pump = self.clone();
        tokio::spawn(async move {
            let (mut term, mut hangup) = match (
                signal(SignalKind::terminate()),
                signal(SignalKind::hangup()),
            ) {
                (Ok(t), Ok(h)) => (t, h),
                (t, h) => {
                    warn!(
                        term_ok = t.is_ok(),
                        hangup_ok = h.is_ok(),
                        "autosave: could not register suspend signals"
                    );
                    return;
                }
            };

            loop {
                tokio::select! {
                    _ = term.recv() => {}
                    _ = hangup.recv() => {}
                }
                info!("autosave: suspend signal received, flushing");
                pump.flush().await;
            }
        })
    }
}

async fn run_pump(
    mut cmd_rx: mpsc::UnboundedReceiver<PumpCmd>,
    state_tx: watch::Sender<SaveState>,
    sink: Arc<dyn SaveSink>,
    delay: Duration,
) {
    let mut pending: Option<Value> = None;
    let mut last_scheduled: Option<String> = None;
    let mut deadline = Instant::now();

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                Some(PumpCmd::Schedule(payload)) => {
                    let serialized = payload.to_string();
                    if last_scheduled.as_deref() == Some(serialized.as_str()) {
                        debug!("autosave: payload unchanged, skipping");
                        continue;
                    }
                    last_scheduled = Some(serialized);
                    pending = Some(payload);
                    deadline = Instant::now() + delay;
                    let _ = state_tx.send(SaveState::Saving);
                    debug!(delay_ms = delay.as_millis() as u64, "autosave: debounce armed");
                }
                Some(PumpCmd::Flush(ack)) => {
                    if let Some(payload) = pending.take() {
                        save(sink.as_ref(), &payload, &state_tx, &mut last_scheduled).await;
                    }
                    let _ = ack.send(*state_tx.borrow());
                }
                None => {
                    if let Some(payload) = pending.take() {
                        save(sink.as_ref(), &payload, &state_tx, &mut last_scheduled).await;
                    }
                    break;
                }
            },
            _ = sleep_until(deadline), if pending.is_some() => {
                if let Some(payload) = pending.take() {
                    save(sink.as_ref(), &payload, &state_tx, &mut last_scheduled).await;
                }
            }
        }
    }
}

async fn save(
    sink: &dyn SaveSink,
    payload: &Value,
    state_tx: &watch::Sender<SaveState>,
    last_scheduled: &mut Option<String>,
) {
    match sink.persist(payload).await {
        Ok(()) => {
            let _ = state_tx.send(SaveState::Saved);
            debug!("autosave: payload persisted");
        }
        Err(e) => {
            // Clear the dedupe snapshot so the same payload can be retried.
            *last_scheduled = None;
            let _ = state_tx.send(SaveState::Error);
            warn!(error = %e, "autosave: sink failed");
        }
    }
}
