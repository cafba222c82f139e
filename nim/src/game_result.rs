use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    /// No objects were ever on the table, so nobody won.
    Decided,
    Ongoing,
}
