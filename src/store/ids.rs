// Hands out recipe ids
//
// Ids only need to be unique and increasing. The default source uses the
// wall clock in milliseconds, bumped forward when the clock stalls or goes
// backwards so two quick adds never collide.

use crate::store::RecipeId;
use chrono::Utc;

/// Anything that can mint a fresh recipe id
pub trait IdSource {
    fn next_id(&mut self) -> RecipeId;
}

/// Millisecond timestamps, forced strictly increasing
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: RecipeId,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, now: RecipeId) -> RecipeId {
        let id = if now > self.last { now } else { self.last + 1 };
        self.last = id;
        id
    }
}

impl IdSource for TimestampIds {
    fn next_id(&mut self) -> RecipeId {
        self.issue(Utc::now().timestamp_millis())
    }
}

/// 1, 2, 3, ... Handy when output has to be reproducible.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: RecipeId,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> RecipeId {
        self.last += 1;
        self.last
    }
}
