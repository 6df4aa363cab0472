//! Signal handling for puasar.
//!
//! SIGINT, SIGTERM, and SIGHUP shut the widget down (the "Quit" action);
//! SIGUSR1 forces a full panel re-render (the "Refresh" action, useful
//! after a suspend/resume or a manual clock change). Signals arrive on a
//! dedicated thread and are translated into messages the main loop drains
//! once per tick.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM, SIGUSR1},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    sync::mpsc::{Receiver, Sender, channel},
    thread,
};

/// Message type for all signal-based communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalMessage {
    /// Re-render the full widget panel (SIGUSR1).
    Refresh,
    /// Shutdown signal (SIGTERM, SIGINT, SIGHUP).
    Shutdown,
}

/// Signal handling state shared between the signal thread and the main loop.
pub struct SignalState {
    /// Atomic flag indicating if the application should keep running.
    pub running: Arc<AtomicBool>,
    /// Channel receiver the main loop drains every tick.
    pub signal_receiver: Receiver<SignalMessage>,
    /// Channel sender, kept so additional producers could be attached.
    pub signal_sender: Sender<SignalMessage>,
}

/// Install the signal handler thread and return the shared state.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let running = Arc::new(AtomicBool::new(true));
    let (signal_sender, signal_receiver) = channel();

    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP, SIGUSR1])
        .context("Failed to register signal handlers")?;

    let thread_running = Arc::clone(&running);
    let thread_sender = signal_sender.clone();
    thread::spawn(move || {
        for signal in signals.forever() {
            match signal {
                SIGUSR1 => {
                    if debug_enabled {
                        log_debug!("Received SIGUSR1, refreshing panel");
                    }
                    if thread_sender.send(SignalMessage::Refresh).is_err() {
                        break;
                    }
                }
                SIGINT | SIGTERM | SIGHUP => {
                    thread_running.store(false, Ordering::SeqCst);
                    let _ = thread_sender.send(SignalMessage::Shutdown);
                    break;
                }
                _ => {}
            }
        }
    });

    Ok(SignalState {
        running,
        signal_receiver,
        signal_sender,
    })
}
