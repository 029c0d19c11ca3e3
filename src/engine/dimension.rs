//! Cumulative dimensions tracked along routes.

/// A quantity accumulated along each vehicle's route and bounded per vehicle.
///
/// Visiting node `i` adds `transit(i)` to the running value (the "cumul").
/// The cumul may never exceed the vehicle's capacity at any node; engines
/// must refuse any extension that would break this.
///
/// # Examples
///
/// ```
/// use u_cvrp::engine::Dimension;
///
/// let dim = Dimension::new("Capacity", vec![0.0, 4.0, 7.0], 0.0, vec![10.0], true);
/// assert_eq!(dim.try_visit(0, 0.0, 1), Some(4.0));
/// assert_eq!(dim.try_visit(0, 4.0, 2), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    name: String,
    transits: Vec<f64>,
    slack_max: f64,
    capacities: Vec<f64>,
    fix_start_cumul_to_zero: bool,
}

impl Dimension {
    /// Creates a dimension.
    ///
    /// * `transits` — quantity added when visiting each node
    /// * `slack_max` — extra increase allowed between nodes
    /// * `capacities` — per-vehicle upper bound on the cumul
    /// * `fix_start_cumul_to_zero` — whether every route starts at zero
    pub fn new(
        name: impl Into<String>,
        transits: Vec<f64>,
        slack_max: f64,
        capacities: Vec<f64>,
        fix_start_cumul_to_zero: bool,
    ) -> Self {
        Self {
            name: name.into(),
            transits,
            slack_max,
            capacities,
            fix_start_cumul_to_zero,
        }
    }

    /// Dimension name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantity added by visiting `node`.
    pub fn transit(&self, node: usize) -> f64 {
        self.transits[node]
    }

    /// Number of nodes with a transit.
    pub fn num_nodes(&self) -> usize {
        self.transits.len()
    }

    /// Number of vehicles with a capacity.
    pub fn num_vehicles(&self) -> usize {
        self.capacities.len()
    }

    /// Upper bound on the cumul for `vehicle`.
    pub fn capacity(&self, vehicle: usize) -> f64 {
        self.capacities[vehicle]
    }

    /// Maximum slack between consecutive nodes.
    pub fn slack_max(&self) -> f64 {
        self.slack_max
    }

    /// Whether routes start with a cumul of zero.
    pub fn fixes_start_cumul_to_zero(&self) -> bool {
        self.fix_start_cumul_to_zero
    }

    /// Cumul at the start of a route.
    ///
    /// Zero when fixed; otherwise the tightest start is still zero because
    /// transits are non-negative.
    pub fn start_cumul(&self) -> f64 {
        0.0
    }

    /// Cumul after visiting `node` from `cumul`, or `None` if it would exceed
    /// `vehicle`'s capacity.
    pub fn try_visit(&self, vehicle: usize, cumul: f64, node: usize) -> Option<f64> {
        let next = cumul + self.transit(node);
        (next <= self.capacity(vehicle)).then_some(next)
    }

    /// Sum of transits over `nodes`.
    pub fn total_transit(&self, nodes: &[usize]) -> f64 {
        nodes.iter().map(|&n| self.transit(n)).sum()
    }
}
