//! Gesture sequencing around the circular board

use crate::types::{Case, Direction, LayeringStrategy, MovementSequence, MovementToken, SLOT_COUNT};
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Enter,
    Prefix,
    Start,
    Runs,
    Exit,
    Done,
}

/// Lazily yields the tokens of one gesture.
///
/// The finger enters the circle, crosses into `start`, then winds around
/// the board one sector per step. After each run the sense of rotation
/// flips so the path zig-zags instead of crossing itself. The iterator is
/// consumed once; collect it into a [`MovementSequence`] to keep it.
#[derive(Debug, Clone)]
pub struct Movement {
    prefix: std::vec::IntoIter<MovementToken>,
    runs: std::vec::IntoIter<usize>,
    current: Direction,
    clockwise: bool,
    remaining: usize,
    first_run: bool,
    stage: Stage,
}

impl Movement {
    pub fn new(start: Direction, clockwise: bool, runs: Vec<usize>, prefix: Vec<MovementToken>) -> Self {
        Self {
            prefix: prefix.into_iter(),
            runs: runs.into_iter(),
            current: start,
            clockwise,
            remaining: 0,
            first_run: true,
            stage: Stage::Enter,
        }
    }
}

impl Iterator for Movement {
    type Item = MovementToken;

    fn next(&mut self) -> Option<MovementToken> {
        loop {
            match self.stage {
                Stage::Enter => {
                    self.stage = Stage::Prefix;
                    return Some(MovementToken::InsideCircle);
                }
                Stage::Prefix => match self.prefix.next() {
                    Some(token) => return Some(token),
                    None => self.stage = Stage::Start,
                },
                Stage::Start => {
                    self.stage = Stage::Runs;
                    return Some(self.current.into());
                }
                Stage::Runs => {
                    if self.remaining > 0 {
                        self.remaining -= 1;
                        self.current = self.current.step(self.clockwise);
                        return Some(self.current.into());
                    }
                    match self.runs.next() {
                        Some(length) => {
                            if !self.first_run {
                                self.clockwise = !self.clockwise;
                            }
                            self.first_run = false;
                            self.remaining = length;
                        }
                        None => self.stage = Stage::Exit,
                    }
                }
                Stage::Exit => {
                    self.stage = Stage::Done;
                    return Some(MovementToken::InsideCircle);
                }
                Stage::Done => return None,
            }
        }
    }
}

/// Gesture for a character `steps` sectors away from `start` on `layer`.
pub fn movement_sequence(
    start: Direction,
    clockwise: bool,
    steps: usize,
    layer: usize,
    case: Case,
    strategy: LayeringStrategy,
) -> MovementSequence {
    let runs = strategy.run_lengths(steps, layer, case);
    let prefix = strategy.layer_prefix(layer);
    trace!("{} {} cw={} runs={:?}", strategy, start, clockwise, runs);
    Movement::new(start, clockwise, runs, prefix).collect()
}

/// Where a layout slot sits on the board: the sector the gesture starts in,
/// the way it winds and how many sectors it crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPosition {
    pub start: Direction,
    pub clockwise: bool,
    pub steps: usize,
}

impl BoardPosition {
    pub fn gesture(&self, layer: usize, case: Case, strategy: LayeringStrategy) -> MovementSequence {
        movement_sequence(self.start, self.clockwise, self.steps, layer, case, strategy)
    }
}

/// The 32 board positions in layout slot order.
///
/// The keyboard looks actions up by this order, so it must not change:
/// directions in reverse (RIGHT, BOTTOM, LEFT, TOP), counter-clockwise
/// before clockwise, steps 1 to 4, then rotated right by one group so
/// slot 0 is TOP clockwise 1.
pub fn board_positions() -> Vec<BoardPosition> {
    let mut positions = Vec::with_capacity(SLOT_COUNT);
    for &start in Direction::ALL.iter().rev() {
        for clockwise in [false, true] {
            for steps in 1..=4 {
                positions.push(BoardPosition { start, clockwise, steps });
            }
        }
    }
    positions.rotate_right(4);
    positions
}
