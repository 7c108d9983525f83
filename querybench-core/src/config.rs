/// Matrix dimensions for one benchmark run.
///
/// Constructed once at startup and passed into the runner by value;
/// there is no ambient configuration state. How the values are sourced
/// (file, flags, hardcoded) is the caller's concern.
#[derive(Clone, Debug)]
pub struct BenchPlan {
    /// Requested row bounds, walked in the given order.
    pub scales: Vec<u64>,
    /// Attempts per (scale, client) cell.
    pub repetitions: u32,
}

impl BenchPlan {
    pub fn new(scales: Vec<u64>, repetitions: u32) -> Self {
        Self {
            scales,
            repetitions,
        }
    }

    /// True when the matrix has no cells to execute. The runner treats
    /// an empty plan as a successful no-op; rejecting it is up to the
    /// caller.
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty() || self.repetitions == 0
    }
}
