// Problem instance: dimensions and coefficient tables, validated atomically

/// Error raised when an instance fails validation
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("dimension `{0}` must be positive")]
    EmptyDimension(&'static str),

    #[error("missing coefficient table `{0}`")]
    MissingTable(&'static str),

    #[error("table `{table}` has wrong shape: expected {expected}, found {found}")]
    ShapeMismatch {
        table: &'static str,
        expected: String,
        found: String,
    },

    #[error("coefficient `{table}{index}` must be finite and non-negative, found {value}")]
    InvalidCoefficient {
        table: &'static str,
        index: String,
        value: f64,
    },
}

/// A fully specified facility location problem.
///
/// Dimensions: `clients` demand points, `sites` candidate facility
/// locations, `levels` capacity tiers a site can be opened at, and
/// `periods` planning time steps. Every coefficient table is indexed
/// from zero and must be fully populated.
///
/// Instances are built through [`Instance::builder`], which validates
/// all tables at once, and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    /// Number of clients (N).
    pub clients: usize,
    /// Number of candidate sites (M).
    pub sites: usize,
    /// Number of capacity levels (L).
    pub levels: usize,
    /// Number of planning periods (T).
    pub periods: usize,
    /// `demand[i][t]`: demand of client `i` in period `t`.
    pub demand: Vec<Vec<u64>>,
    /// `transport_cost[i][j][t]`: per-unit cost from site `j` to client `i` in period `t`.
    pub transport_cost: Vec<Vec<Vec<f64>>>,
    /// `capacity[k]`: throughput capacity of level `k`.
    pub capacity: Vec<u64>,
    /// `opening_cost[k][t]`: cost to operate a site at level `k` in period `t`.
    pub opening_cost: Vec<Vec<f64>>,
    /// `budget[t]`: spending cap for period `t`.
    pub budget: Vec<f64>,
    /// `operating_cost[t]`: flat per-opened-facility surcharge in period `t`.
    pub operating_cost: Vec<f64>,
}

impl Instance {
    /// Starts building an instance with the given dimensions.
    pub fn builder(clients: usize, sites: usize, levels: usize, periods: usize) -> InstanceBuilder {
        InstanceBuilder {
            clients,
            sites,
            levels,
            periods,
            demand: None,
            transport_cost: None,
            capacity: None,
            opening_cost: None,
            budget: None,
            operating_cost: None,
        }
    }

    /// Total demand across all clients and periods.
    pub fn total_demand(&self) -> u64 {
        self.demand.iter().flatten().sum()
    }

    /// Checks dimensions, table shapes, and coefficient domains.
    ///
    /// Builder-produced instances always pass; this is re-run by the
    /// formulator and should be called explicitly on instances obtained
    /// any other way (e.g. deserialized from a file).
    pub fn validate(&self) -> Result<(), InstanceError> {
        for (name, value) in [
            ("clients", self.clients),
            ("sites", self.sites),
            ("levels", self.levels),
            ("periods", self.periods),
        ] {
            if value == 0 {
                return Err(InstanceError::EmptyDimension(name));
            }
        }

        check_shape_2d("demand", &self.demand, self.clients, self.periods, |row| {
            row.len()
        })?;

        if self.transport_cost.len() != self.clients {
            return Err(shape_mismatch(
                "transport_cost",
                format!("{} clients", self.clients),
                format!("{} rows", self.transport_cost.len()),
            ));
        }
        for (i, per_site) in self.transport_cost.iter().enumerate() {
            if per_site.len() != self.sites {
                return Err(shape_mismatch(
                    "transport_cost",
                    format!("{} sites in row {i}", self.sites),
                    format!("{}", per_site.len()),
                ));
            }
            for (j, per_period) in per_site.iter().enumerate() {
                if per_period.len() != self.periods {
                    return Err(shape_mismatch(
                        "transport_cost",
                        format!("{} periods in row [{i}][{j}]", self.periods),
                        format!("{}", per_period.len()),
                    ));
                }
                for (t, &cost) in per_period.iter().enumerate() {
                    check_coefficient("transport_cost", format!("[{i}][{j}][{t}]"), cost)?;
                }
            }
        }

        if self.capacity.len() != self.levels {
            return Err(shape_mismatch(
                "capacity",
                format!("{} levels", self.levels),
                format!("{}", self.capacity.len()),
            ));
        }

        check_shape_2d(
            "opening_cost",
            &self.opening_cost,
            self.levels,
            self.periods,
            |row| row.len(),
        )?;
        for (k, per_period) in self.opening_cost.iter().enumerate() {
            for (t, &cost) in per_period.iter().enumerate() {
                check_coefficient("opening_cost", format!("[{k}][{t}]"), cost)?;
            }
        }

        for (name, table) in [("budget", &self.budget), ("operating_cost", &self.operating_cost)] {
            if table.len() != self.periods {
                return Err(shape_mismatch(
                    name,
                    format!("{} periods", self.periods),
                    format!("{}", table.len()),
                ));
            }
            for (t, &value) in table.iter().enumerate() {
                check_coefficient(name, format!("[{t}]"), value)?;
            }
        }

        Ok(())
    }
}

fn shape_mismatch(table: &'static str, expected: String, found: String) -> InstanceError {
    InstanceError::ShapeMismatch {
        table,
        expected,
        found,
    }
}

fn check_shape_2d<R>(
    table: &'static str,
    rows: &[R],
    outer: usize,
    inner: usize,
    row_len: impl Fn(&R) -> usize,
) -> Result<(), InstanceError> {
    if rows.len() != outer {
        return Err(shape_mismatch(
            table,
            format!("{outer} rows"),
            format!("{}", rows.len()),
        ));
    }
    for (i, row) in rows.iter().enumerate() {
        if row_len(row) != inner {
            return Err(shape_mismatch(
                table,
                format!("{inner} entries in row {i}"),
                format!("{}", row_len(row)),
            ));
        }
    }
    Ok(())
}

fn check_coefficient(table: &'static str, index: String, value: f64) -> Result<(), InstanceError> {
    if !value.is_finite() || value < 0.0 {
        return Err(InstanceError::InvalidCoefficient {
            table,
            index,
            value,
        });
    }
    Ok(())
}

/// Builder for [`Instance`]; `build` validates everything at once.
#[derive(Debug, Clone)]
pub struct InstanceBuilder {
    clients: usize,
    sites: usize,
    levels: usize,
    periods: usize,
    demand: Option<Vec<Vec<u64>>>,
    transport_cost: Option<Vec<Vec<Vec<f64>>>>,
    capacity: Option<Vec<u64>>,
    opening_cost: Option<Vec<Vec<f64>>>,
    budget: Option<Vec<f64>>,
    operating_cost: Option<Vec<f64>>,
}

impl InstanceBuilder {
    /// Sets `demand[i][t]` for every client and period.
    pub fn demand(mut self, demand: Vec<Vec<u64>>) -> Self {
        self.demand = Some(demand);
        self
    }

    /// Sets `transport_cost[i][j][t]` for every client, site, and period.
    pub fn transport_cost(mut self, transport_cost: Vec<Vec<Vec<f64>>>) -> Self {
        self.transport_cost = Some(transport_cost);
        self
    }

    /// Sets `capacity[k]` for every level.
    pub fn capacity(mut self, capacity: Vec<u64>) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets `opening_cost[k][t]` for every level and period.
    pub fn opening_cost(mut self, opening_cost: Vec<Vec<f64>>) -> Self {
        self.opening_cost = Some(opening_cost);
        self
    }

    /// Sets `budget[t]` for every period.
    pub fn budget(mut self, budget: Vec<f64>) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Sets `operating_cost[t]` for every period.
    pub fn operating_cost(mut self, operating_cost: Vec<f64>) -> Self {
        self.operating_cost = Some(operating_cost);
        self
    }

    /// Assembles and validates the instance.
    pub fn build(self) -> Result<Instance, InstanceError> {
        let instance = Instance {
            clients: self.clients,
            sites: self.sites,
            levels: self.levels,
            periods: self.periods,
            demand: self.demand.ok_or(InstanceError::MissingTable("demand"))?,
            transport_cost: self
                .transport_cost
                .ok_or(InstanceError::MissingTable("transport_cost"))?,
            capacity: self.capacity.ok_or(InstanceError::MissingTable("capacity"))?,
            opening_cost: self
                .opening_cost
                .ok_or(InstanceError::MissingTable("opening_cost"))?,
            budget: self.budget.ok_or(InstanceError::MissingTable("budget"))?,
            operating_cost: self
                .operating_cost
                .ok_or(InstanceError::MissingTable("operating_cost"))?,
        };
        instance.validate()?;
        Ok(instance)
    }
}
