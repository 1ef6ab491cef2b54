use itertools::Itertools;

use crate::{
    change::Change,
    direction::Direction,
    plate::Plate,
    pool::{Pool, PoolKind},
    solution::Solution,
    solver_error::SolverError,
    stack::Stack,
};

/// Cap on plates per pool. Both pools are power-set enumerated, so the
/// search visits 2^(n + m) candidate pairs.
pub const MAX_POOL_PLATES: usize = 12;

/// Finds the smallest achievable weight change in the given direction,
/// along with every distinct (remove, add) plate exchange that realises it.
/// Ties on magnitude are all returned; there is no preference for fewer
/// plates.
///
/// # Errors
/// `EmptyPool` if either pool has no plates, `PoolTooLarge` if either pool
/// exceeds [`MAX_POOL_PLATES`], and `NoValidChange` if no pair of subsets
/// moves the weight strictly in the requested direction.
pub fn solve(
    current: &Pool,
    available: &Pool,
    direction: Direction,
) -> Result<Solution, SolverError> {
    for (kind, pool) in [
        (PoolKind::Current, current),
        (PoolKind::Available, available),
    ] {
        if pool.is_empty() {
            return Err(SolverError::EmptyPool(kind));
        }
        if pool.len() > MAX_POOL_PLATES {
            return Err(SolverError::PoolTooLarge {
                kind,
                len: pool.len(),
                max: MAX_POOL_PLATES,
            });
        }
    }

    let additions = Stack::enumerate(available);
    let removals = Stack::enumerate(current);

    let mut best: Option<Plate> = None;
    let mut winners: Vec<Change> = Vec::new();

    for (addition, removal) in additions.iter().cartesian_product(removals.iter()) {
        if !direction.permits(addition.total(), removal.total()) {
            continue;
        }

        let magnitude = addition.total().abs_diff(removal.total());
        let change = || Change::new(removal.plates().to_vec(), addition.plates().to_vec());

        match best {
            Some(b) if magnitude > b => {}
            Some(b) if magnitude == b => winners.push(change()),
            _ => {
                best = Some(magnitude);
                winners = vec![change()];
            }
        }
    }

    let Some(magnitude) = best else {
        return Err(SolverError::NoValidChange(direction));
    };

    let changes = winners.into_iter().sorted().dedup().collect();
    Ok(Solution::new(direction, magnitude, changes))
}
