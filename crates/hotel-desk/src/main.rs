use hotel_desk::config::DeskConfig;
use hotel_desk::lifecycle::HotelSystem;
use hotel_desk::session::Session;
use record_actor::tracing::setup_tracing;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let config = DeskConfig::default();
    let system = HotelSystem::new(&config);

    let mut session = Session::new(
        &system,
        config.room_count,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        tokio::io::stderr(),
    );
    let outcome = session.run().await;
    // The session holds client clones; release them so the actors can stop.
    drop(session);

    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
    }

    match outcome {
        Ok(outcome) => {
            info!(?outcome, "Session finished");
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            ExitCode::FAILURE
        }
    }
}
