use anyhow::Context;
use clap::Parser;
use event_reservations::utils::logger;
use event_reservations::{
    CliConfig, LineTerminal, ReservationError, ReservationSession, SessionEnd, Settings,
};

fn main() {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let settings = match cli
        .load_file_config()
        .and_then(|file| Settings::resolve(&cli, file.as_ref()))
    {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );
    tracing::debug!(?settings, "starting event-reservations");

    if let Err(e) = run(&settings) {
        tracing::error!("❌ Session failed: {:?}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", recovery_suggestion(&e));
        std::process::exit(3);
    }
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    let terminal = LineTerminal::stdio();

    let mut session = match ReservationSession::setup(terminal, settings) {
        Ok(session) => session,
        Err(ReservationError::InputClosed) => {
            tracing::info!("input closed before the event was created");
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to set up the event"),
    };

    let end = session.run().context("reservation session aborted")?;
    let status = session.event().status();
    tracing::info!(
        ?end,
        capacity = status.capacity,
        reserved = status.reserved,
        available = status.available,
        "session finished"
    );
    if end == SessionEnd::InputClosed {
        println!();
    }

    Ok(())
}

fn recovery_suggestion(error: &anyhow::Error) -> &'static str {
    error
        .downcast_ref::<ReservationError>()
        .map(ReservationError::recovery_suggestion)
        .unwrap_or("Restart the program")
}
