use anyhow::Result;
use clap::Parser;
use vigil::libs::actuator::MacActuator;
use vigil::libs::config::Config;
use vigil::libs::engine::{ActivityEngine, Reporter, RunSummary, StopHandle};
use vigil::libs::input::HotkeyListener;
use vigil::libs::messages::Message;
use vigil::libs::view::{self, Dashboard, LogReporter};
use vigil::{msg_error, msg_info};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Replace the live dashboard with plain sequential log lines
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.debug {
        // Route the message macros through tracing for this run.
        std::env::set_var("VIGIL_DEBUG", "1");
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
            .init();
    }

    match run(&cli).await {
        Ok(summary) => view::show_summary(&summary),
        Err(err) => {
            msg_error!(Message::UnexpectedFailure(err.to_string()));
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<RunSummary> {
    let config = Config::read()?;
    let engine_config = config.engine.unwrap_or_default();
    let automation = config.automation.unwrap_or_default();

    if !cli.debug {
        view::banner();
    }

    let actuator = MacActuator::new(&automation.target_app);
    let listener = HotkeyListener::new();
    let reporter: Box<dyn Reporter> = if cli.debug {
        Box::new(LogReporter)
    } else {
        Box::new(Dashboard::new())
    };

    let mut engine = ActivityEngine::new(
        engine_config,
        automation.pause_apps,
        Box::new(actuator),
        Box::new(listener),
        reporter,
    );

    spawn_signal_handler(engine.stop_handle());

    engine.run().await
}

/// Requests engine shutdown on SIGTERM/SIGINT (Unix) or Ctrl+C elsewhere.
/// The engine observes the request at its next one-second suspension point.
fn spawn_signal_handler(handle: StopHandle) {
    #[cfg(unix)]
    tokio::spawn(async move {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate()).expect(&Message::FailedToCreateSigtermHandler.to_string());
        let mut sigint = signal(SignalKind::interrupt()).expect(&Message::FailedToCreateSigintHandler.to_string());

        tokio::select! {
            _ = sigterm.recv() => {
                msg_info!(Message::ReceivedSigterm);
            }
            _ = sigint.recv() => {
                msg_info!(Message::ReceivedSigint);
            }
        }

        handle.stop();
    });

    #[cfg(not(unix))]
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                msg_info!(Message::ReceivedCtrlC);
            }
            Err(err) => {
                msg_error!(Message::CtrlCListenFailed(err.to_string()));
                return;
            }
        }

        handle.stop();
    });
}
