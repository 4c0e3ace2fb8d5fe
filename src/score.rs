/// A score or expectation value in the range `0.0..=1.0`, where `0.0` is a
/// loss and `1.0` is a win.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Score(pub f64);

impl From<Score> for f64 {
    fn from(Score(score): Score) -> f64 {
        score
    }
}

impl Score {
    pub const LOSS: Score = Score(0.0);
    pub const WIN: Score = Score(1.0);

    /// Score of the first side given the points of both sides.
    ///
    /// Only a strict win counts. A draw is scored as a loss for the first
    /// side, just like a defeat.
    pub fn from_points(first: i64, second: i64) -> Score {
        if first > second {
            Score::WIN
        } else {
            Score::LOSS
        }
    }

    pub fn opposite(self) -> Score {
        Score(1.0 - self.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}
