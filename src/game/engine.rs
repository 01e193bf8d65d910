//! The stateful Banqi engine.

use im::Vector;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, error, trace};

use super::builder::BanqiGameBuilder;
use crate::core::{
    is_valid_position, Action, Board, BoardSnapshot, Cell, GameRng, GameRngState, GameState,
    HiddenLayout, Piece, PlayerSlot, Position, RuleConfig, Side,
};
use crate::events::{EventKind, GameEvent, ObserverId, ObserverRegistry};
use crate::rules::error::checked_position;
use crate::rules::{classify_move, judge, ActionError, GameResult, MoveKind};

/// A game of Banqi.
///
/// Owned and driven by one caller: flip or move, then `change_player`, then
/// re-read the state. Rejected actions return an [`ActionError`] and leave
/// the game untouched.
///
/// ```
/// use banqi::game::BanqiGame;
///
/// let mut game = BanqiGame::new(7);
/// assert_eq!(game.legal_moves().len(), 32);
///
/// let piece = game.flip(3, 1).unwrap();
/// assert_eq!(game.current_side(), Some(piece.side));
///
/// game.change_player().unwrap();
/// assert_eq!(game.current_side(), Some(piece.side.opponent()));
/// ```
#[derive(Debug)]
pub struct BanqiGame {
    state: GameState,
    rules: RuleConfig,
    rng: GameRng,
    observers: ObserverRegistry,
}

impl BanqiGame {
    /// A fresh game dealt from `seed`, with standard rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        BanqiGameBuilder::new().seed(seed).build()
    }

    /// Start configuring a game.
    #[must_use]
    pub fn builder() -> BanqiGameBuilder {
        BanqiGameBuilder::new()
    }

    pub(crate) fn from_parts(state: GameState, rules: RuleConfig, rng: GameRng) -> Self {
        Self {
            state,
            rules,
            rng,
            observers: ObserverRegistry::new(),
        }
    }

    // === Lifecycle ===

    /// Deal a new game from the engine's own RNG.
    pub fn restart(&mut self) {
        let hidden = HiddenLayout::shuffled(&mut self.rng);
        debug!(seed = self.rng.seed(), "game restarted");
        self.reset(hidden);
    }

    /// Deal a new game from a caller-supplied random source.
    ///
    /// The engine's own RNG is left untouched.
    pub fn restart_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug!("game restarted from caller RNG");
        self.reset(HiddenLayout::shuffled(rng));
    }

    /// Start a new game over a fixed deal.
    pub fn restart_with_layout(&mut self, hidden: HiddenLayout) {
        debug!("game restarted from fixed layout");
        self.reset(hidden);
    }

    fn reset(&mut self, hidden: HiddenLayout) {
        self.state = GameState::new(hidden);
        self.observers.emit(&GameEvent::Restarted);
    }

    // === Queries ===

    /// Copy of the board as an 8×4 grid.
    #[must_use]
    pub fn board_state(&self) -> BoardSnapshot {
        self.state.board().snapshot()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Checkpoint of the dealing RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Pieces of `side` captured so far, oldest first.
    #[must_use]
    pub fn captured(&self, side: Side) -> &Vector<Piece> {
        self.state.captured(side)
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerSlot {
        self.state.current_player()
    }

    /// Side to move, `None` before the first flip.
    #[must_use]
    pub fn current_side(&self) -> Option<Side> {
        self.state.current_side()
    }

    /// Consecutive non-capturing relocations.
    #[must_use]
    pub fn no_progress(&self) -> u32 {
        self.state.no_progress()
    }

    /// True iff `(row, col)` is on the board.
    #[must_use]
    pub const fn is_valid_position(row: i32, col: i32) -> bool {
        is_valid_position(row, col)
    }

    /// Win/draw detection. `None` while the game continues.
    #[must_use]
    pub fn who_wins(&self) -> Option<GameResult> {
        judge(self.state.board(), self.state.no_progress(), &self.rules)
    }

    // === Flipping ===

    /// True iff the cell is on the board and face down.
    #[must_use]
    pub fn can_flip(&self, row: i32, col: i32) -> bool {
        Position::new(row, col).is_some_and(|pos| self.state.board().get(pos).is_face_down())
    }

    /// Reveal the piece at `(row, col)`.
    ///
    /// The first flip of a game binds the player to move to the revealed
    /// piece's side. Any flip resets the no-progress counter.
    pub fn flip(&mut self, row: i32, col: i32) -> Result<Piece, ActionError> {
        let at = checked_position(row, col).map_err(rejected)?;
        self.flip_at(at)
    }

    fn flip_at(&mut self, at: Position) -> Result<Piece, ActionError> {
        if !self.state.board().get(at).is_face_down() {
            return Err(rejected(ActionError::NotFaceDown(at)));
        }

        let piece = self.state.hidden().piece_at(at);
        self.state.board.set(at, Cell::Revealed(piece));
        self.state.no_progress = 0;
        let assigned = self.state.current_side.is_none();
        if assigned {
            self.state.current_side = Some(piece.side);
        }

        debug!(%at, %piece, "flipped");
        self.observers.emit(&GameEvent::Flipped { at, piece });
        if assigned {
            let player = self.state.current_player;
            debug!(%player, side = %piece.side, "side assigned");
            self.observers.emit(&GameEvent::SideAssigned { player, side: piece.side });
        }

        Ok(piece)
    }

    // === Moving ===

    /// True iff the side to move may move from one cell to the other.
    #[must_use]
    pub fn can_move(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        self.check_move(from_row, from_col, to_row, to_col).is_ok()
    }

    /// Classify a move without executing it.
    pub fn check_move(
        &self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<MoveKind, ActionError> {
        let from = checked_position(from_row, from_col)?;
        let to = checked_position(to_row, to_col)?;
        self.classify(from, to)
    }

    fn classify(&self, from: Position, to: Position) -> Result<MoveKind, ActionError> {
        classify_move(self.state.board(), self.state.current_side(), &self.rules, from, to)
            .map_err(|violation| ActionError::IllegalMove { from, to, violation })
    }

    /// Move the piece at `(from_row, from_col)`, capturing if the destination
    /// holds an opposing piece.
    ///
    /// Captures reset the no-progress counter; relocations onto an empty cell
    /// increment it.
    pub fn move_piece(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<MoveKind, ActionError> {
        let from = checked_position(from_row, from_col).map_err(rejected)?;
        let to = checked_position(to_row, to_col).map_err(rejected)?;
        self.move_at(from, to)
    }

    fn move_at(&mut self, from: Position, to: Position) -> Result<MoveKind, ActionError> {
        let kind = self.classify(from, to).map_err(rejected)?;
        self.execute(from, to, kind);
        Ok(kind)
    }

    /// Carry out a classified move.
    ///
    /// # Panics
    ///
    /// If the board disagrees with the classification just made for it.
    fn execute(&mut self, from: Position, to: Position, kind: MoveKind) {
        let attacker = match self.state.board.take(from) {
            Cell::Revealed(piece) => piece,
            cell => {
                error!(%from, %to, ?kind, ?cell, "approved move has no piece at the source");
                panic!("Approved move {from} -> {to} starts from {cell:?}");
            }
        };
        let displaced = self.state.board.take(to);
        self.state.board.set(to, Cell::Revealed(attacker));
        let jump = kind.is_jump();

        let event = match kind {
            MoveKind::Slide | MoveKind::JumpSlide => {
                if displaced != Cell::Empty {
                    error!(%from, %to, ?kind, ?displaced, "relocation onto an occupied cell");
                    panic!("Approved relocation {from} -> {to} landed on {displaced:?}");
                }
                self.state.no_progress += 1;
                GameEvent::Moved { piece: attacker, from, to, jump }
            }
            MoveKind::Capture(expected) | MoveKind::JumpCapture(expected) => {
                let victim = self.state.record_capture(displaced);
                if victim != expected {
                    error!(
                        %from, %to, %expected, %victim,
                        "captured piece differs from classification"
                    );
                    panic!("Approved capture {from} -> {to} expected {expected}, found {victim}");
                }
                self.state.no_progress = 0;
                GameEvent::Captured { attacker, victim, from, to, jump }
            }
        };

        debug!(%from, %to, ?kind, no_progress = self.state.no_progress, "moved");
        self.observers.emit(&event);
    }

    // === Turns ===

    /// Pass the turn: the other slot plays the other side.
    ///
    /// Fails until a flip has revealed which side is to move.
    pub fn change_player(&mut self) -> Result<(), ActionError> {
        let side = self
            .state
            .current_side
            .ok_or(ActionError::SideUnknown)
            .map_err(rejected)?;

        let player = self.state.current_player.next();
        let side = side.opponent();
        self.state.current_player = player;
        self.state.current_side = Some(side);
        debug!(%player, %side, "turn changed");
        self.observers.emit(&GameEvent::TurnChanged { player, side });
        Ok(())
    }

    // === Actions ===

    /// Every legal action for the player to move, in row-major order: flips
    /// first, then moves grouped by source.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Action> {
        let board = self.state.board();
        let mut actions: Vec<Action> = board
            .cells()
            .filter(|(_, cell)| cell.is_face_down())
            .map(|(pos, _)| Action::Flip(pos))
            .collect();

        if let Some(side) = self.state.current_side() {
            for (from, piece) in board.pieces_of(side) {
                actions.extend(self.moves_of(from, piece));
            }
        }

        actions
    }

    /// Legal actions starting at one cell: a flip if it is face down, or the
    /// moves of the piece there if it belongs to the side to move.
    #[must_use]
    pub fn legal_moves_from(&self, row: i32, col: i32) -> Vec<Action> {
        let Some(pos) = Position::new(row, col) else {
            return Vec::new();
        };
        match self.state.board().get(pos) {
            Cell::FaceDown => vec![Action::Flip(pos)],
            Cell::Revealed(piece) if Some(piece.side) == self.state.current_side() => {
                self.moves_of(pos, piece).collect()
            }
            _ => Vec::new(),
        }
    }

    fn moves_of(&self, from: Position, piece: Piece) -> impl Iterator<Item = Action> + '_ {
        let targets: SmallVec<[Position; 10]> = if piece.is_cannon() {
            from.lines().collect()
        } else {
            from.neighbors().into_iter().collect()
        };
        targets
            .into_iter()
            .filter(move |&to| self.classify(from, to).is_ok())
            .map(move |to| Action::Move { from, to })
    }

    /// Execute an action, typically one taken from [`Self::legal_moves`].
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Flip(at) => self.flip_at(at).map(drop),
            Action::Move { from, to } => self.move_at(from, to).map(drop),
        }
    }

    // === Observers ===

    /// Observe every game event.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Observe only the given kinds of event.
    pub fn subscribe_to(
        &mut self,
        kinds: &[EventKind],
        observer: impl FnMut(&GameEvent) + 'static,
    ) -> ObserverId {
        self.observers.subscribe_to(kinds, observer)
    }

    /// Stop observing. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }
}

fn rejected(error: ActionError) -> ActionError {
    trace!(%error, "action rejected");
    error
}
