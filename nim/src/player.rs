use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
}

impl Default for Player {
    fn default() -> Self {
        Player::Zero
    }
}

impl Player {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }
}

/// Map a player to their opponent.
pub fn other_player(player: Player) -> Player {
    player.other()
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.index())
    }
}
