use alloc::vec::Vec;

use log::info;

use crate::error::ScoreError;
use crate::result::{PlayerScore, RoundScore};

use super::Game;

/// Points for one round.
///
/// An exact prediction earns 20 plus 10 per trick won. A miss costs 10 per
/// trick of difference. Scores are not floored at zero.
///
/// ```
/// use wizrs::round_points;
///
/// assert_eq!(round_points(2, 2), 40);
/// assert_eq!(round_points(2, 0), -20);
/// ```
#[must_use]
#[expect(clippy::cast_possible_wrap, reason = "trick counts are at most 20")]
pub const fn round_points(predicted: usize, won: usize) -> isize {
    if predicted == won {
        20 + 10 * won as isize
    } else {
        -10 * predicted.abs_diff(won) as isize
    }
}

impl Game {
    /// Scores the finished round and adds the points to every player's total.
    ///
    /// Call exactly once per round, after the last trick. Calling it again
    /// before the next round applies the points a second time.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been started, a player still holds
    /// cards, or a player never predicted.
    pub fn calculate_round_scores(&mut self) -> Result<RoundScore, ScoreError> {
        if self.round == 0 {
            return Err(ScoreError::RoundNotStarted);
        }
        if !self.is_round_complete() {
            return Err(ScoreError::RoundNotComplete);
        }

        let predictions: Vec<usize> = self
            .predictions
            .iter()
            .copied()
            .collect::<Option<_>>()
            .ok_or(ScoreError::MissingPrediction)?;

        let mut players = Vec::with_capacity(predictions.len());
        for (seat, predicted) in predictions.into_iter().enumerate() {
            let won = self.tricks_won[seat];
            let delta = round_points(predicted, won);
            self.scores[seat] += delta;

            players.push(PlayerScore {
                player: self.players[seat].clone(),
                predicted,
                won,
                delta,
                total: self.scores[seat],
            });
        }

        info!("round {} scored: {:?}", self.round, self.scores);

        Ok(RoundScore {
            round: self.round,
            players,
        })
    }
}
