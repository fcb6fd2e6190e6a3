// Domain-level result of a solve: feasibility, objective, assignments, open sites

/// Shipped quantities at or below this threshold are treated as zero
/// and omitted from the extracted plan.
pub const QUANTITY_TOLERANCE: f64 = 1e-3;

/// A binary opening variable above this threshold counts as open.
pub const OPEN_THRESHOLD: f64 = 0.5;

/// Quantity shipped from one site to one client in one period
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub client: usize,
    pub site: usize,
    pub period: usize,
    pub quantity: f64,
}

/// A site opened at a capacity level in a period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenSite {
    pub site: usize,
    pub level: usize,
    pub period: usize,
}

/// Extracted result of one solve.
///
/// Infeasibility is a normal outcome: `feasible` is false and the
/// remaining fields are empty. For a feasible plan, `objective_value`
/// is present and the assignment and open-site schedules list every
/// entry above the extraction thresholds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanSolution {
    pub feasible: bool,
    pub objective_value: Option<f64>,
    pub assignments: Vec<Assignment>,
    pub open_sites: Vec<OpenSite>,
}

impl PlanSolution {
    /// A plan proven to have no feasible assignment.
    pub fn infeasible() -> Self {
        Self {
            feasible: false,
            objective_value: None,
            assignments: Vec::new(),
            open_sites: Vec::new(),
        }
    }

    /// A feasible optimal plan.
    pub fn optimal(
        objective_value: f64,
        assignments: Vec<Assignment>,
        open_sites: Vec<OpenSite>,
    ) -> Self {
        Self {
            feasible: true,
            objective_value: Some(objective_value),
            assignments,
            open_sites,
        }
    }

    /// Total quantity shipped across all clients, sites, and periods.
    pub fn total_shipped(&self) -> f64 {
        self.assignments.iter().map(|a| a.quantity).sum()
    }

    /// Total quantity received by `site` in `period`.
    pub fn shipped_to(&self, site: usize, period: usize) -> f64 {
        self.assignments
            .iter()
            .filter(|a| a.site == site && a.period == period)
            .map(|a| a.quantity)
            .sum()
    }

    /// Capacity level `site` is opened at in `period`, if any.
    pub fn open_level(&self, site: usize, period: usize) -> Option<usize> {
        self.open_sites
            .iter()
            .find(|o| o.site == site && o.period == period)
            .map(|o| o.level)
    }
}
