//! Table dealer replay
//!
//! Runs a game described by a JSON script: seats the scripted players with
//! built-in agents, replays the recorded rounds through the dealer and prints
//! the final standings.
//!
//! Usage: `dealer-replay <script.json> [verbosity]`

use anyhow::{Context, Result, anyhow, bail};
use dealer::{Dealer, Script, ScriptedEngine, agents};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE: &str = "usage: dealer-replay <script.json> [verbosity]";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let verbose: u8 = match args.next() {
        Some(v) => v
            .parse()
            .with_context(|| format!("invalid verbosity {:?}", v))?,
        None => 1,
    };

    let script =
        Script::from_path(&path).with_context(|| format!("failed to load script {}", path))?;
    let config = script
        .config
        .ok_or_else(|| anyhow!("script {} has no config section", path))?;
    info!(
        "Replaying {}: {} players, {} rounds recorded",
        path,
        script.players.len(),
        script.rounds.len()
    );

    let mut dealer = Dealer::with_config(
        ScriptedEngine::from_script(&script),
        config.small_blind_amount,
        config.initial_stack,
    );
    dealer.set_verbose(verbose);
    for player in &script.players {
        let Some(agent) = agents::builtin(&player.agent) else {
            bail!("unknown agent {:?} for player {}", player.agent, player.name);
        };
        dealer.register_player(&player.name, agent)?;
    }

    let result = dealer.start_game(config.max_round)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
