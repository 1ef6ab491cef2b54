use thiserror::Error;

use crate::{direction::Direction, pool::PoolKind};

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("No valid plate weights for the {0} pool.")]
    EmptyPool(PoolKind),
    #[error("No valid weight {0} is possible with the given plates.")]
    NoValidChange(Direction),
    #[error("The {kind} pool has {len} plates; at most {max} are supported.")]
    PoolTooLarge {
        kind: PoolKind,
        len: usize,
        max: usize,
    },
}
