//! Dismissal sources for a ringing alarm

use std::fmt;
use std::future;
use std::io::{self, BufRead};
use std::time::Duration;

use tokio::sync::oneshot;

/// Why the alarm was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Enter pressed on the terminal
    Enter,
    /// SIGINT (Ctrl-C)
    Interrupt,
    /// SIGTERM
    Terminate,
    /// The --dismiss-after timer ran out
    Timeout,
}

impl DismissReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enter => "dismissed",
            Self::Interrupt => "interrupted",
            Self::Terminate => "terminated",
            Self::Timeout => "timed out",
        }
    }
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wait until the user dismisses the alarm or `after` elapses.
///
/// Sources that cannot be set up (no terminal on stdin, no signal
/// support) are ignored rather than treated as a dismissal.
pub async fn wait_for_dismiss(after: Option<Duration>) -> DismissReason {
    let enter = spawn_enter_listener();

    tokio::select! {
        _ = enter_pressed(enter) => DismissReason::Enter,
        _ = interrupted() => DismissReason::Interrupt,
        _ = terminated() => DismissReason::Terminate,
        _ = elapsed(after) => DismissReason::Timeout,
    }
}

/// Read a line on a plain thread so a pending read never holds up
/// runtime shutdown.
fn spawn_enter_listener() -> oneshot::Receiver<()> {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        if let Ok(n) = io::stdin().lock().read_line(&mut line) {
            if n > 0 {
                let _ = tx.send(());
            }
        }
    });
    rx
}

async fn enter_pressed(rx: oneshot::Receiver<()>) {
    // EOF drops the sender: no keyboard, keep waiting on the others
    if rx.await.is_err() {
        future::pending::<()>().await;
    }
}

async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminated() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(_) => future::pending::<()>().await,
    }
}

#[cfg(not(unix))]
async fn terminated() {
    future::pending::<()>().await
}

async fn elapsed(after: Option<Duration>) {
    match after {
        Some(duration) => tokio::time::sleep(duration).await,
        None => future::pending::<()>().await,
    }
}
