//! Translates queued commands into session calls.

use log::{debug, warn};
use sudokifu_core::Position;
use sudokifu_game::{GameError, GameSession};

use crate::command::{Command, CommandQueue, MoveDirection};

/// Owns the focused cell and applies commands to a session.
///
/// Focus starts at the top-left corner. A move that would leave the grid
/// keeps the focus where it is, matching arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputController {
    focus: Position,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            focus: Position::new(0, 0),
        }
    }

    /// The currently focused cell.
    #[must_use]
    pub fn focus(&self) -> Position {
        self.focus
    }

    pub fn move_focus(&mut self, direction: MoveDirection) {
        if let Some(next) = direction.apply_to(self.focus) {
            self.focus = next;
        }
    }

    /// Applies one command to `session`.
    ///
    /// Replay navigation commands are ignored when no replay is bound.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ReplayInProgress`] when an edit command
    /// arrives while a replay owns the board.
    pub fn handle(&mut self, session: &mut GameSession, command: Command) -> Result<(), GameError> {
        match command {
            Command::SelectCell(pos) => self.focus = pos,
            Command::MoveFocus(direction) => self.move_focus(direction),
            Command::SetCell(digit) => session.set_cell(self.focus, digit)?,
            Command::ClearCell => session.clear_cell(self.focus)?,
            Command::ClearBoard => session.clear_board(),
            Command::Advance => {
                if let Some(engine) = session.replay_mut() {
                    engine.advance();
                } else {
                    debug!("advance ignored: no replay bound");
                }
            }
            Command::Retreat => {
                if let Some(engine) = session.replay_mut() {
                    engine.retreat();
                } else {
                    debug!("retreat ignored: no replay bound");
                }
            }
            Command::JumpToEnd => {
                if let Some(engine) = session.replay_mut() {
                    engine.jump_to_end();
                } else {
                    debug!("jump ignored: no replay bound");
                }
            }
        }
        Ok(())
    }

    /// Drains `queue` into `session`, logging commands the session refuses.
    pub fn handle_all(&mut self, session: &mut GameSession, queue: &mut CommandQueue) {
        for command in queue.take_all() {
            if let Err(err) = self.handle(session, command) {
                warn!("command {command:?} dropped: {err}");
            }
        }
    }
}
