use itertools::Itertools;

use crate::{plate::Plate, pool::Pool};

/// One subset of a pool together with its total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    plates: Vec<Plate>,
    total: Plate,
}

impl Stack {
    #[must_use]
    pub fn new(plates: Vec<Plate>) -> Self {
        let plates = plates.into_iter().sorted().collect::<Vec<_>>();
        let total = plates.iter().copied().sum();
        Stack { plates, total }
    }

    /// Every subset of the pool, the empty and full stacks included: 2^n
    /// stacks for a pool of n plates. Subsets are tracked by which plates
    /// were chosen, so duplicate weights produce distinct stacks and two
    /// stacks may share a total.
    #[must_use]
    pub fn enumerate(pool: &Pool) -> Vec<Stack> {
        pool.plates()
            .iter()
            .powerset()
            .map(|plates| Stack::new(plates.into_iter().copied().collect()))
            .collect()
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn total(&self) -> Plate {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_every_subset() {
        let pool = Pool::parse("1, 1.25, 2");
        assert_eq!(Stack::enumerate(&pool).len(), 8);
    }

    #[test]
    fn includes_exactly_one_empty_stack() {
        let pool = Pool::parse("1, 2, 5");
        let empty = Stack::enumerate(&pool)
            .into_iter()
            .filter(|stack| stack.plates().is_empty())
            .collect::<Vec<_>>();

        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].total(), Plate::new(0));
    }

    #[test]
    fn totals_match_plates() {
        let pool = Pool::parse("0.5, 1.25, 2.5, 5");
        for stack in Stack::enumerate(&pool) {
            let recomputed: Plate = stack.plates().iter().copied().sum();
            assert_eq!(stack.total(), recomputed);
        }
    }

    #[test]
    fn duplicate_plates_yield_distinct_stacks() {
        let pool = Pool::parse("2.5, 2.5");
        let stacks = Stack::enumerate(&pool);

        assert_eq!(stacks.len(), 4);

        let totals = stacks
            .iter()
            .map(|stack| stack.total())
            .sorted()
            .collect::<Vec<_>>();
        assert_eq!(
            totals,
            vec![
                Plate::new(0),
                Plate::new(250),
                Plate::new(250),
                Plate::new(500)
            ]
        );
    }

    #[test]
    fn empty_pool_yields_only_the_empty_stack() {
        let stacks = Stack::enumerate(&Pool::default());
        assert_eq!(stacks.len(), 1);
        assert!(stacks[0].plates().is_empty());
    }
}
