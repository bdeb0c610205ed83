//! Tube module - capacity-bounded stacks of colored blocks
//!
//! A tube is a LIFO stack: blocks are pushed onto the top (the end of the
//! sequence) and only ever removed from the top. Every operation returns a new
//! tube and leaves the receiver untouched.
//!
//! Invalid mutations are rejected rather than reported as errors:
//!
//! - [`Tube::push`] on a full tube returns `None`
//! - [`Tube::pop`] on an empty tube returns the tube unchanged and no block

use serde::Serialize;
use uuid::Uuid;

use crate::error::GameError;
use crate::rng::SimpleRng;
use crate::types::Color;

/// Opaque block identity, used for keying only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Opaque tube identity, used to address tubes in actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TubeId(Uuid);

impl TubeId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Draw an id from the game RNG so replays with the same seed agree on ids.
    pub fn from_rng(rng: &mut SimpleRng) -> Self {
        Self(uuid::Builder::from_random_bytes(rng.next_bytes_16()).into_uuid())
    }
}

impl std::fmt::Display for TubeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single colored unit occupying one slot in a tube
///
/// Only `color` takes part in matching; `id` exists so observers can key blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    pub id: BlockId,
    pub color: Color,
}

impl Block {
    /// Create a block with a fresh random id
    pub fn new(color: Color) -> Self {
        Self {
            id: BlockId::new_v4(),
            color,
        }
    }
}

/// Capacity-bounded stack of blocks, bottom to top
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tube {
    id: TubeId,
    blocks: Vec<Block>,
    capacity: usize,
}

impl Tube {
    /// Create an empty tube with a random id
    pub fn with_capacity(capacity: usize) -> Result<Self, GameError> {
        if capacity == 0 {
            return Err(GameError::InvalidCapacity);
        }
        Ok(Self::empty(TubeId::new_v4(), capacity))
    }

    /// Empty tube with a caller-chosen id; capacity is clamped to at least 1.
    pub(crate) fn empty(id: TubeId, capacity: usize) -> Self {
        Self {
            id,
            blocks: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn id(&self) -> TubeId {
        self.id
    }

    /// Blocks from bottom (index 0) to top
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.blocks.len() >= self.capacity
    }

    pub fn top(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Colors from bottom to top
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.blocks.iter().map(|b| b.color)
    }

    /// Return a new tube with `block` on top, or `None` if this tube is full.
    pub fn push(&self, block: Block) -> Option<Tube> {
        if self.is_full() {
            return None;
        }
        let mut next = self.clone();
        next.blocks.push(block);
        Some(next)
    }

    /// Return the tube without its top block, plus the removed block.
    pub fn pop(&self) -> (Tube, Option<Block>) {
        let mut next = self.clone();
        let removed = next.blocks.pop();
        (next, removed)
    }

    /// Return a new tube with the top `count` blocks removed.
    ///
    /// No-op when `count` exceeds the number of blocks.
    pub fn consume_match(&self, count: usize) -> Tube {
        if count > self.blocks.len() {
            return self.clone();
        }
        let mut next = self.clone();
        next.blocks.truncate(self.blocks.len() - count);
        next
    }
}
