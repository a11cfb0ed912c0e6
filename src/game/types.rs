//! Flappy round data structures: bird, obstacle columns, lifecycle enums.

use crate::constants::*;
use crate::engine::{Aabb, Body, Tween};
use serde::{Deserialize, Serialize};

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    /// The bird overlapped an obstacle segment.
    Collision,
    /// The bird left the screen vertically.
    OutOfBounds,
}

/// Round lifecycle. A round starts `Running`; only a collision under the
/// freeze policy moves it to `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Running,
    Ended,
}

/// What a collision does to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Kill the bird, stop the pipes and the spawner, and wait for a restart.
    #[default]
    Freeze,
    /// Restart immediately, same as leaving the screen.
    Restart,
}

impl CollisionPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Freeze => "Freeze",
            Self::Restart => "Restart",
        }
    }
}

/// Events produced by a round for the host to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    Started,
    ColumnSpawned { score: u32 },
    Crashed { score: u32 },
    LeftScreen { score: u32 },
    Sound(&'static str),
}

/// The player-controlled bird.
#[derive(Debug, Clone)]
pub struct Bird {
    pub body: Body,
    pub alive: bool,
    /// Cosmetic rotation in degrees (negative = nose up).
    pub angle: f64,
    /// Active "look up" animation started by a jump.
    pub tween: Option<Tween>,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            body: Body::new(BIRD_START_X, BIRD_START_Y, BIRD_SIZE, BIRD_SIZE)
                .with_gravity(GRAVITY)
                .with_anchor(BIRD_ANCHOR_X, BIRD_ANCHOR_Y),
            alive: true,
            angle: 0.0,
            tween: None,
        }
    }

    pub fn x(&self) -> f64 {
        self.body.x
    }

    pub fn y(&self) -> f64 {
        self.body.y
    }

    pub fn velocity(&self) -> f64 {
        self.body.velocity_y
    }

    pub fn bounds(&self) -> Aabb {
        self.body.bounds()
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// One pipe block occupying a single slot of a column.
#[derive(Debug, Clone)]
pub struct Segment {
    pub body: Body,
    pub slot: usize,
}

impl Segment {
    pub fn new(slot: usize) -> Self {
        Self {
            body: Body::new(PIPE_SPAWN_X, slot_y(slot), PIPE_SIZE, PIPE_SIZE)
                .with_velocity(PIPE_VELOCITY, 0.0),
            slot,
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.body.bounds()
    }
}

/// The segments of one spawn event, sharing a single two-slot gap.
#[derive(Debug, Clone)]
pub struct Column {
    pub gap_start: usize,
    pub segments: Vec<Segment>,
}

impl Column {
    pub fn new(gap_start: usize) -> Self {
        Self {
            gap_start,
            segments: occupied_slots(gap_start).map(Segment::new).collect(),
        }
    }
}

/// Top edge of a slot band.
pub fn slot_y(slot: usize) -> f64 {
    slot as f64 * SLOT_HEIGHT + SLOT_MARGIN
}

/// Slots that get a segment when the gap starts at `gap_start`.
pub fn occupied_slots(gap_start: usize) -> impl Iterator<Item = usize> {
    (0..SLOT_COUNT).filter(move |&slot| slot != gap_start && slot != gap_start + 1)
}
