use log::trace;

use crate::error::PredictionError;

use super::Game;

impl Game {
    /// Records how many tricks the player expects to win this round.
    ///
    /// A prediction cannot be changed once made.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The player is not part of the game
    /// - `tricks` exceeds the current round number
    /// - The player has already predicted this round
    pub fn make_prediction(&mut self, player: &str, tricks: usize) -> Result<(), PredictionError> {
        let seat = self
            .seat_of(player)
            .ok_or(PredictionError::UnknownPlayer)?;

        if tricks > self.round {
            return Err(PredictionError::OutOfRange { max: self.round });
        }

        let slot = &mut self.predictions[seat];
        if slot.is_some() {
            return Err(PredictionError::AlreadyPredicted);
        }
        *slot = Some(tricks);

        trace!("{player} predicts {tricks} trick(s) in round {}", self.round);

        Ok(())
    }
}
