//! Discrete input commands and the queue that buffers them.

use std::mem;

use sudokifu_core::{Digit, Position};

/// One discrete user command, decoupled from whatever input produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectCell(Position),
    MoveFocus(MoveDirection),
    SetCell(Digit),
    ClearCell,
    ClearBoard,
    Advance,
    Retreat,
    JumpToEnd,
}

/// A focus movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// Returns the neighboring position, or `None` at the grid edge.
    #[must_use]
    pub fn apply_to(self, pos: Position) -> Option<Position> {
        match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(),
            Self::Left => pos.left(),
            Self::Right => pos.right(),
        }
    }
}

/// Commands collected from input handling, drained at dispatch time.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn request(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn take_all(&mut self) -> Vec<Command> {
        mem::take(&mut self.commands)
    }
}
