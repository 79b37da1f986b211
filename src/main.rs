use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{CliConfig, GameSession, HttpMailer, Pairing, ScenarioConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting secret-santa CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = ScenarioConfig::from_file(&cli.scenario)
        .with_context(|| format!("failed to load scenario from {}", cli.scenario))?;

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let session = match GameSession::new(config.game_settings(), config.participants.clone()) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Scenario rejected: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let pairings = if cli.dry_run {
        tracing::info!("Dry run: no notifications will be sent");
        session.dry_run_with(&mut rng, cli.silent)
    } else {
        let mailer = HttpMailer::new(
            config.mailer.endpoint.clone(),
            config.mailer.api_key.clone(),
        );
        session.play_with(&mut rng, &mailer, cli.silent).await?
    };

    if let Some(path) = &cli.export {
        export_pairings(path, &pairings)
            .with_context(|| format!("failed to export pairings to {}", path))?;
        tracing::info!("Pairings exported to {}", path);
    }

    println!("✅ Drew {} pairings", pairings.len());

    Ok(())
}

fn export_pairings(path: &str, pairings: &[Pairing]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for pairing in pairings {
        writer.serialize(pairing)?;
    }

    writer.flush()?;
    Ok(())
}
