//! Problem instance and candidate scoring.

/// A single knapsack item: a weight and the value gained by packing it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight consumed when the item is selected. Non-negative.
    pub weight: f64,
    /// Value gained when the item is selected. Non-negative.
    pub value: f64,
}

impl Item {
    /// Creates an item from a weight/value pair.
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }
}

/// A 0/1 knapsack instance: an ordered item list and a capacity.
///
/// Candidate solutions are fixed-length bit vectors (`&[bool]`), one bit
/// per item in item-list order. The instance is read-only after
/// construction.
///
/// # Scoring
///
/// [`evaluate`](Knapsack::evaluate) scores overweight candidates as `0.0`
/// instead of rejecting them. Infeasible candidates thus remain valid
/// members of harmony memory and are displaced over time by anything with
/// positive value; this keeps selection pressure intact without a repair
/// pass at scoring time.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: f64,
}

impl Knapsack {
    /// Creates an instance from an item list and a capacity.
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self { items, capacity }
    }

    /// The item list, in the order solution bits refer to it.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items, and therefore the length of every solution.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The weight capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Total weight of the selected items.
    pub fn weight(&self, solution: &[bool]) -> f64 {
        self.items
            .iter()
            .zip(solution)
            .filter(|(_, &selected)| selected)
            .map(|(item, _)| item.weight)
            .sum()
    }

    /// Scores a candidate: the value-sum of selected items, or `0.0` when
    /// their weight-sum exceeds capacity.
    pub fn evaluate(&self, solution: &[bool]) -> f64 {
        if self.weight(solution) > self.capacity {
            return 0.0;
        }
        self.items
            .iter()
            .zip(solution)
            .filter(|(_, &selected)| selected)
            .map(|(item, _)| item.value)
            .sum()
    }

    /// Whether any non-empty solution can exist: true iff at least one
    /// item individually fits the capacity.
    ///
    /// Used as a cheap precondition gate before committing to a run.
    pub fn is_feasible(&self) -> bool {
        self.items.iter().any(|item| item.weight <= self.capacity)
    }

    /// Indices of items that individually fit the capacity.
    pub(crate) fn feasible_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.weight <= self.capacity)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn instance() -> Knapsack {
        Knapsack::new(
            vec![
                Item::new(2.0, 3.0),
                Item::new(3.0, 4.0),
                Item::new(4.0, 5.0),
                Item::new(5.0, 6.0),
            ],
            5.0,
        )
    }

    #[test]
    fn test_evaluate_feasible() {
        let problem = instance();
        assert_eq!(problem.evaluate(&[true, true, false, false]), 7.0);
        assert_eq!(problem.evaluate(&[false, false, false, true]), 6.0);
    }

    #[test]
    fn test_evaluate_empty_selection() {
        let problem = instance();
        assert_eq!(problem.evaluate(&[false, false, false, false]), 0.0);
    }

    #[test]
    fn test_evaluate_overweight_scores_zero() {
        let problem = instance();
        // weight 2 + 4 = 6 > 5, despite value 8
        assert_eq!(problem.evaluate(&[true, false, true, false]), 0.0);
        assert_eq!(problem.evaluate(&[true, true, true, true]), 0.0);
    }

    #[test]
    fn test_weight_sums_selected() {
        let problem = instance();
        assert_eq!(problem.weight(&[true, false, true, false]), 6.0);
        assert_eq!(problem.weight(&[false, false, false, false]), 0.0);
    }

    #[test]
    fn test_is_feasible() {
        assert!(instance().is_feasible());
        let hopeless = Knapsack::new(vec![Item::new(10.0, 1.0)], 5.0);
        assert!(!hopeless.is_feasible());
    }

    #[test]
    fn test_is_feasible_boundary_weight() {
        let exact = Knapsack::new(vec![Item::new(5.0, 1.0)], 5.0);
        assert!(exact.is_feasible());
    }

    #[test]
    fn test_feasible_indices() {
        let problem = Knapsack::new(
            vec![Item::new(6.0, 1.0), Item::new(2.0, 1.0), Item::new(9.0, 1.0)],
            5.0,
        );
        assert_eq!(problem.feasible_indices(), vec![1]);
    }

    proptest! {
        /// evaluate returns 0 when overweight, else exactly the value sum.
        #[test]
        fn prop_evaluate_matches_sums(
            pairs in prop::collection::vec((0.0f64..20.0, 0.0f64..20.0), 1..12),
            bits in prop::collection::vec(any::<bool>(), 12),
            capacity in 0.0f64..40.0,
        ) {
            let items: Vec<Item> = pairs.iter().map(|&(w, v)| Item::new(w, v)).collect();
            let n = items.len();
            let problem = Knapsack::new(items, capacity);
            let solution = &bits[..n];

            let weight: f64 = problem
                .items()
                .iter()
                .zip(solution)
                .filter(|(_, &s)| s)
                .map(|(it, _)| it.weight)
                .sum();
            let value: f64 = problem
                .items()
                .iter()
                .zip(solution)
                .filter(|(_, &s)| s)
                .map(|(it, _)| it.value)
                .sum();

            let expected = if weight > capacity { 0.0 } else { value };
            prop_assert_eq!(problem.evaluate(solution), expected);
        }

        /// is_feasible is false iff every item individually exceeds capacity.
        #[test]
        fn prop_feasibility_matches_any_fit(
            weights in prop::collection::vec(0.0f64..20.0, 1..12),
            capacity in 0.0f64..20.0,
        ) {
            let items: Vec<Item> = weights.iter().map(|&w| Item::new(w, 1.0)).collect();
            let problem = Knapsack::new(items, capacity);
            prop_assert_eq!(
                problem.is_feasible(),
                weights.iter().any(|&w| w <= capacity)
            );
        }
    }
}
