// Variable layout: the one place that fixes the variable ordering
// Formulation and extraction must agree on it exactly

use crate::domain::instance::Instance;
use crate::domain::models::VarId;

/// Lexicographic mapping between index triples and variable ids.
///
/// Shipment variables come first, ordered by `(client, site, period)`;
/// opening variables follow, ordered by `(site, level, period)`. The
/// mapping depends only on the instance dimensions, so formulating the
/// same instance twice yields identical ids and names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableLayout {
    clients: usize,
    sites: usize,
    levels: usize,
    periods: usize,
}

impl VariableLayout {
    pub fn new(instance: &Instance) -> Self {
        Self {
            clients: instance.clients,
            sites: instance.sites,
            levels: instance.levels,
            periods: instance.periods,
        }
    }

    /// Id of shipment variable `q[client][site][period]`.
    pub fn shipment(&self, client: usize, site: usize, period: usize) -> VarId {
        debug_assert!(client < self.clients && site < self.sites && period < self.periods);
        VarId((client * self.sites + site) * self.periods + period)
    }

    /// Id of opening variable `y[site][level][period]`.
    pub fn opening(&self, site: usize, level: usize, period: usize) -> VarId {
        debug_assert!(site < self.sites && level < self.levels && period < self.periods);
        VarId(self.num_shipment_vars() + (site * self.levels + level) * self.periods + period)
    }

    /// Number of continuous shipment variables.
    pub fn num_shipment_vars(&self) -> usize {
        self.clients * self.sites * self.periods
    }

    /// Number of binary opening variables.
    pub fn num_opening_vars(&self) -> usize {
        self.sites * self.levels * self.periods
    }

    /// Total variable count.
    pub fn num_vars(&self) -> usize {
        self.num_shipment_vars() + self.num_opening_vars()
    }
}
