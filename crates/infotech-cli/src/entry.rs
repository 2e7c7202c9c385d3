//! Process entry point: the single error boundary of an invocation.
//!
//! The command runs on a blocking worker while the current task waits for
//! either its result or Ctrl+C. Racing the two keeps an interrupt visible
//! even while a handler is blocked reading a prompt.

use std::any::Any;
use std::future::Future;

use infotech_core::Config;
use tokio::task::JoinError;

use crate::bootstrap::bootstrap;
use crate::commands::Commands;
use crate::error::CliError;

/// Notice printed when the user interrupts a command.
pub const CANCELLED_MESSAGE: &str = "⚠️  Operation cancelled by user";

/// How an invocation ended.
#[derive(Debug)]
pub enum Outcome {
    /// The command finished normally.
    Completed,
    /// The user interrupted the command.
    Cancelled,
    /// The command failed or panicked.
    Failed(CliError),
}

impl Outcome {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::Cancelled | Self::Failed(_) => 1,
        }
    }

    /// Message shown to the user, if any, and whether it goes to stderr.
    pub fn message(&self) -> Option<(String, bool)> {
        match self {
            Self::Completed => None,
            Self::Cancelled => Some((format!("\n{CANCELLED_MESSAGE}"), false)),
            Self::Failed(e) => Some((format!("❌ Error: {e}"), true)),
        }
    }

    /// Print the outcome's message, if any.
    pub fn report(&self) {
        match self.message() {
            Some((message, true)) => eprintln!("{message}"),
            Some((message, false)) => println!("{message}"),
            None => {}
        }
    }
}

/// Run `task` to completion unless `interrupt` resolves first.
///
/// An interrupted task is abandoned, not awaited.
pub async fn supervise<F, I>(task: F, interrupt: I) -> Outcome
where
    F: FnOnce() -> Result<(), CliError> + Send + 'static,
    I: Future<Output = ()>,
{
    let handle = tokio::task::spawn_blocking(task);

    tokio::select! {
        biased;
        () = interrupt => {
            tracing::debug!("interrupted by user");
            Outcome::Cancelled
        }
        joined = handle => match joined {
            Ok(Ok(())) => Outcome::Completed,
            Ok(Err(e)) => Outcome::Failed(e),
            Err(e) => Outcome::Failed(join_error(e)),
        },
    }
}

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
pub async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

/// Bootstrap and run one command, converting every ending into an [`Outcome`].
pub fn run(command: Commands, config: Config) -> Outcome {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => return Outcome::Failed(CliError::Io(e)),
    };

    let outcome = runtime.block_on(supervise(
        move || bootstrap(config)?.run(command),
        interrupt_signal(),
    ));

    // A cancelled command may still be blocked on stdin; don't wait for it.
    runtime.shutdown_background();
    outcome
}

fn join_error(e: JoinError) -> CliError {
    if e.is_panic() {
        CliError::Panic(panic_message(e.into_panic().as_ref()))
    } else {
        CliError::Internal(e.to_string())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
