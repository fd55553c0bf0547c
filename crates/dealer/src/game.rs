//! Game loop

use dealer_core::{
    Agent, Chips, DEFAULT_SEED, DealerError, GameConfig, IdentifierPool, Message, PlayerId, Result,
    Seat, Table,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bookkeeping;
use crate::builder;
use crate::engine::RoundEngine;
use crate::registry::AgentRegistry;
use crate::round;
use crate::router::MessageRouter;
use crate::summary::MessageSummarizer;

/// Final standings of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub config: GameConfig,
    pub rounds_played: u32,
    pub seats: Vec<Seat>,
}

impl GameResult {
    pub fn total_chips(&self) -> Chips {
        self.seats.iter().map(|s| s.stack).sum()
    }

    /// Seats still in the game
    pub fn survivors(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.is_active())
    }
}

/// Runs one game: registration, then rounds until the limit or a single
/// survivor
///
/// Registry, table and configuration belong to this dealer alone and go away
/// with it when `start_game` returns.
pub struct Dealer<E: RoundEngine> {
    engine: E,
    router: MessageRouter,
    table: Table,
    small_blind_amount: Option<Chips>,
    initial_stack: Option<Chips>,
    summarizer: MessageSummarizer,
}

impl<E: RoundEngine> Dealer<E> {
    /// Create a dealer with no blind or stack configured
    pub fn new(engine: E) -> Self {
        Self::with_seed(engine, DEFAULT_SEED)
    }

    /// Create a dealer whose player identifiers derive from `seed`
    pub fn with_seed(engine: E, seed: u64) -> Self {
        Self {
            engine,
            router: MessageRouter::new(AgentRegistry::new(IdentifierPool::new(seed))),
            table: Table::new(),
            small_blind_amount: None,
            initial_stack: None,
            summarizer: MessageSummarizer::default(),
        }
    }

    /// Create a dealer with blind and stack already set
    pub fn with_config(engine: E, small_blind_amount: Chips, initial_stack: Chips) -> Self {
        let mut dealer = Self::new(engine);
        dealer.set_small_blind_amount(small_blind_amount);
        dealer.set_initial_stack(initial_stack);
        dealer
    }

    pub fn set_small_blind_amount(&mut self, amount: Chips) {
        self.small_blind_amount = Some(amount);
    }

    pub fn set_initial_stack(&mut self, amount: Chips) {
        self.initial_stack = Some(amount);
    }

    /// 0 silences the summarizer
    pub fn set_verbose(&mut self, verbose: u8) {
        self.summarizer.set_verbose(verbose);
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn registry(&self) -> &AgentRegistry {
        self.router.registry()
    }

    /// Seat a player and bind the agent that plays for it
    pub fn register_player<A>(&mut self, name: &str, agent: A) -> Result<PlayerId>
    where
        A: Agent + 'static,
    {
        let (_, initial_stack) = self.blind_and_stack()?;
        let registry = self.router.registry_mut();
        let id = registry.issue()?;
        registry.register(id.clone(), agent)?;
        let pos = self.table.sit_down(Seat::new(id.clone(), name, initial_stack));
        info!("{} sat down at seat {} as {}", name, pos, id);
        Ok(id)
    }

    /// Play up to `max_round` rounds and return the final standings
    pub fn start_game(mut self, max_round: u32) -> Result<GameResult> {
        let (small_blind_amount, initial_stack) = self.blind_and_stack()?;
        let config = GameConfig::new(small_blind_amount, initial_stack, max_round);
        config.validate()?;

        info!(
            "Game starting: {} players, up to {} rounds, small blind {}",
            self.table.len(),
            max_round,
            small_blind_amount
        );
        self.publish(builder::game_start_message(&config, &self.table)?)?;

        let mut table = std::mem::take(&mut self.table);
        let mut rounds_played = 0;
        for round_count in 1..=max_round {
            if is_game_finished(&table) {
                info!(
                    "{} active players left, stopping before round {}",
                    table.active_count(),
                    round_count
                );
                break;
            }
            table = round::play_round(
                &mut self.engine,
                &mut self.router,
                &self.summarizer,
                round_count,
                small_blind_amount,
                table,
            )?;
            rounds_played = round_count;

            if round_count < max_round {
                bookkeeping::prepare_for_next_round(&mut table, &config)?;
            } else {
                bookkeeping::exclude_broke_players(&mut table)?;
            }
        }

        self.publish(builder::game_result_message(&config, &table)?)?;
        info!("Game finished after {} rounds", rounds_played);
        Ok(GameResult {
            config,
            rounds_played,
            seats: table.seats().to_vec(),
        })
    }

    fn blind_and_stack(&self) -> Result<(Chips, Chips)> {
        let small_blind_amount = self
            .small_blind_amount
            .ok_or(DealerError::ConfigMissing("small_blind_amount"))?;
        let initial_stack = self
            .initial_stack
            .ok_or(DealerError::ConfigMissing("initial_stack"))?;
        Ok((small_blind_amount, initial_stack))
    }

    fn publish(&mut self, message: Message) -> Result<()> {
        self.summarizer
            .summarize_messages(std::slice::from_ref(&message));
        debug!("Publishing {}", message);
        self.router.deliver(&message)?;
        Ok(())
    }
}

/// Zero or one players left in the game
fn is_game_finished(table: &Table) -> bool {
    table.active_count() <= 1
}
