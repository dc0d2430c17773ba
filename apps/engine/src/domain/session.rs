//! The session state machine: roster, turn order, resource tags, projects,
//! the week deck, and the event log.
//!
//! Every operation here is a single synchronous step. Callers that may
//! overlap commands must serialize access through
//! [`crate::state::SessionRegistry`]; the session itself assumes
//! one-mutation-at-a-time.

use rand::Rng;

use crate::domain::player::Player;
use crate::domain::project::{Project, ProjectTick};
use crate::domain::prompts::{SeasonalPrompts, WeekEntry};
use crate::domain::season::Season;
use crate::domain::shuffle::{derive_turn_order_seed, shuffle_with_seed};
use crate::domain::week_deck::WeekDeck;
use crate::errors::{DomainError, StateKind, ValidationKind};

/// Outcome of [`GameSession::start_week`]. The end of the game is an
/// expected condition, reported as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekStart {
    /// The deck was already spent (or the session was otherwise ended).
    GameOver,
    /// A week was drawn; the report carries everything to announce.
    Week(WeekReport),
}

/// Everything the command layer needs to announce a drawn week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekReport {
    pub season: Season,
    pub week: WeekEntry,
    /// Names of projects that completed on this tick, in creation order.
    pub completed_projects: Vec<String>,
    /// True when this draw emptied the deck and ended the game.
    pub ended_game: bool,
}

/// One storytelling session: a year of seasonal weeks played by a roster in
/// fixed circular turn order.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub(crate) seed: u64,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player_index: usize,
    pub(crate) abundances: Vec<String>,
    pub(crate) scarcities: Vec<String>,
    pub(crate) projects: Vec<Project>,
    pub(crate) year: WeekDeck,
    pub(crate) game_over: bool,
    pub(crate) logs: Vec<String>,
}

impl GameSession {
    /// Fresh session with an OS-sourced base seed.
    pub fn new(prompts: &SeasonalPrompts) -> Self {
        Self::with_seed(prompts, rand::rng().random())
    }

    /// Fresh session with a caller-chosen base seed. Deck order and the
    /// eventual turn order are fully determined by the seed.
    pub fn with_seed(prompts: &SeasonalPrompts, seed: u64) -> Self {
        Self {
            seed,
            players: Vec::new(),
            current_player_index: 0,
            abundances: Vec::new(),
            scarcities: Vec::new(),
            projects: Vec::new(),
            year: WeekDeck::new(prompts, seed),
            game_over: false,
            logs: Vec::new(),
        }
    }

    /// Wholesale replacement: new seed, freshly shuffled deck, empty roster,
    /// projects, tags, and log.
    pub fn reset(&mut self, prompts: &SeasonalPrompts) {
        *self = Self::new(prompts);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    // --- roster ---

    /// Append a new non-mod player. Returns false (and mutates nothing) if
    /// the name is already registered; registering twice never duplicates.
    pub fn register_player(&mut self, name: &str) -> bool {
        if self.player(name).is_some() {
            return false;
        }
        self.players.push(Player::new(name));
        true
    }

    /// Promote an existing player to mod, or register a new mod. Always
    /// succeeds; promotion is idempotent.
    pub fn register_mod(&mut self, name: &str) {
        match self.player_mut(name) {
            Some(player) => player.promote_to_mod(),
            None => self.players.push(Player::new_mod(name)),
        }
    }

    /// Look up a player by exact name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// The roster in turn order (registration order before `start_game`).
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    // --- contempt (unregistered player reported as None, not an error) ---

    /// Give `name` a contempt token; `None` if unregistered.
    pub fn add_contempt(&mut self, name: &str) -> Option<u32> {
        self.player_mut(name).map(Player::add_contempt)
    }

    /// Spend one of `name`'s contempt tokens; `Some(false)` when the balance
    /// is empty, `None` if unregistered.
    pub fn use_contempt(&mut self, name: &str) -> Option<bool> {
        self.player_mut(name).map(Player::use_contempt)
    }

    /// Current contempt balance; `None` if unregistered.
    pub fn contempt(&self, name: &str) -> Option<u32> {
        self.player(name).map(|p| p.contempt_tokens)
    }

    // --- resource tags ---

    /// Record `tag` as scarce. Inserts once, evicts the tag from the
    /// abundance list, and returns the scarcity list for display.
    pub fn add_scarcity(&mut self, tag: &str) -> Result<&[String], DomainError> {
        Self::require_tag(tag)?;
        Self::insert_tag(&mut self.scarcities, tag);
        Self::remove_tag(&mut self.abundances, tag);
        Ok(&self.scarcities)
    }

    /// Record `tag` as abundant; mirror image of [`GameSession::add_scarcity`].
    pub fn add_abundance(&mut self, tag: &str) -> Result<&[String], DomainError> {
        Self::require_tag(tag)?;
        Self::insert_tag(&mut self.abundances, tag);
        Self::remove_tag(&mut self.scarcities, tag);
        Ok(&self.abundances)
    }

    /// Drop `tag` from the scarcity list; absent tags are a quiet no-op.
    pub fn remove_scarcity(&mut self, tag: &str) {
        Self::remove_tag(&mut self.scarcities, tag);
    }

    /// Drop `tag` from the abundance list; absent tags are a quiet no-op.
    pub fn remove_abundance(&mut self, tag: &str) {
        Self::remove_tag(&mut self.abundances, tag);
    }

    pub fn scarcities(&self) -> &[String] {
        &self.scarcities
    }

    pub fn abundances(&self) -> &[String] {
        &self.abundances
    }

    fn require_tag(tag: &str) -> Result<(), DomainError> {
        if tag.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::BlankResourceName,
                "resource name must not be blank",
            ));
        }
        Ok(())
    }

    fn insert_tag(list: &mut Vec<String>, tag: &str) {
        if !list.iter().any(|t| t == tag) {
            list.push(tag.to_string());
        }
    }

    fn remove_tag(list: &mut Vec<String>, tag: &str) {
        list.retain(|t| t != tag);
    }

    // --- turn order ---

    /// Fix the turn order with a uniform in-place shuffle of the roster and
    /// hand the first turn to the first shuffled player.
    pub fn start_game(&mut self) -> Result<(), DomainError> {
        if self.players.is_empty() {
            return Err(DomainError::state(
                StateKind::EmptyRoster,
                "cannot start a game with no registered players",
            ));
        }
        shuffle_with_seed(&mut self.players, derive_turn_order_seed(self.seed));
        self.current_player_index = 0;
        Ok(())
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Result<&Player, DomainError> {
        self.players.get(self.current_player_index).ok_or_else(|| {
            DomainError::state(StateKind::EmptyRoster, "no players registered")
        })
    }

    /// Pass the turn circularly and return the new current player.
    pub fn advance_turn(&mut self) -> Result<&Player, DomainError> {
        if self.players.is_empty() {
            return Err(DomainError::state(
                StateKind::EmptyRoster,
                "cannot pass the turn with no registered players",
            ));
        }
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.current_player()
    }

    // --- weeks and seasons ---

    /// First season with weeks left, `None` once the deck is spent.
    pub fn current_season(&self) -> Option<Season> {
        self.year.current_season()
    }

    /// Draw the front week of `season`. Callers should consult
    /// [`GameSession::current_season`] first.
    pub fn draw_week(&mut self, season: Season) -> Result<WeekEntry, DomainError> {
        self.year.draw_week(season)
    }

    /// Start the active player's week: draw the current season's prompt,
    /// tick every project, and end the game if that draw spent the deck.
    /// Deck exhaustion is the sole game-over trigger.
    pub fn start_week(&mut self) -> WeekStart {
        if self.game_over {
            return WeekStart::GameOver;
        }
        let Some(season) = self.year.current_season() else {
            self.set_game_over();
            return WeekStart::GameOver;
        };
        // The season was just reported non-empty, so the draw succeeds.
        let Ok(week) = self.year.draw_week(season) else {
            self.set_game_over();
            return WeekStart::GameOver;
        };

        let completed_projects = self.advance_all_projects();
        let ended_game = self.year.is_exhausted();
        if ended_game {
            self.set_game_over();
        }

        WeekStart::Week(WeekReport {
            season,
            week,
            completed_projects,
            ended_game,
        })
    }

    /// One-way transition; only a full reset clears it.
    pub fn set_game_over(&mut self) {
        self.game_over = true;
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    // --- projects (0-based creation-order index; out of range is false) ---

    /// Append an active project taking `weeks` weeks to complete.
    pub fn add_project(&mut self, name: &str, weeks: u32) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::BlankProjectName,
                "project name must not be blank",
            ));
        }
        self.projects.push(Project::new(name, weeks));
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn remove_project(&mut self, index: usize) -> bool {
        if index < self.projects.len() {
            self.projects.remove(index);
            true
        } else {
            false
        }
    }

    pub fn finish_project(&mut self, index: usize) -> bool {
        match self.projects.get_mut(index) {
            Some(project) => {
                project.finish();
                true
            }
            None => false,
        }
    }

    pub fn fail_project(&mut self, index: usize) -> bool {
        match self.projects.get_mut(index) {
            Some(project) => {
                project.fail();
                true
            }
            None => false,
        }
    }

    /// Tick every project once, in creation order, and return the names of
    /// those that completed on this call (same order; the ticks are
    /// logically simultaneous).
    pub fn advance_all_projects(&mut self) -> Vec<String> {
        self.projects
            .iter_mut()
            .filter_map(|p| match p.pass_time() {
                ProjectTick::Completed => Some(p.name.clone()),
                _ => None,
            })
            .collect()
    }

    // --- event log ---

    /// Append to the session log. Append-only, no deduplication, no cap.
    pub fn log_event(&mut self, event: impl Into<String>) {
        self.logs.push(event.into());
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }
}
