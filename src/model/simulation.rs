//! Net worth growth projection for the simulation page

/// Inputs of a projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Expected annual return in percent
    pub annual_return: f64,
    /// Horizon in whole years
    pub years: u32,
    /// Amount added at the end of every month
    pub monthly_contribution: f64,
}

impl SimulationParams {
    pub const MIN_RETURN: f64 = -10.0;
    pub const MAX_RETURN: f64 = 20.0;
    pub const RETURN_STEP: f64 = 0.5;
    pub const MAX_YEARS: u32 = 40;

    pub fn new(monthly_contribution: f64) -> Self {
        Self {
            annual_return: 6.0,
            years: 10,
            monthly_contribution,
        }
    }

    pub fn raise_return(&mut self) {
        self.annual_return = (self.annual_return + Self::RETURN_STEP).min(Self::MAX_RETURN);
    }

    pub fn lower_return(&mut self) {
        self.annual_return = (self.annual_return - Self::RETURN_STEP).max(Self::MIN_RETURN);
    }

    pub fn extend(&mut self) {
        self.years = (self.years + 1).min(Self::MAX_YEARS);
    }

    pub fn shorten(&mut self) {
        self.years = self.years.saturating_sub(1).max(1);
    }
}

/// Project a starting balance forward with monthly compounding
///
/// Returns one point per year, starting with year 0 (the starting balance).
pub fn project_growth(start: f64, params: &SimulationParams) -> Vec<(u32, f64)> {
    let monthly_rate = params.annual_return / 100.0 / 12.0;
    let mut balance = start;
    let mut points = Vec::with_capacity(params.years as usize + 1);
    points.push((0, balance));

    for year in 1..=params.years {
        for _ in 0..12 {
            balance = balance * (1.0 + monthly_rate) + params.monthly_contribution;
        }
        points.push((year, balance));
    }

    points
}

/// Total amount contributed over the horizon
pub fn total_contributions(params: &SimulationParams) -> f64 {
    params.monthly_contribution * 12.0 * f64::from(params.years)
}
