/// Exchange rate source, expressed as units of local currency per one
/// unit of foreign currency. The ledger fetches the rate on every
/// conversion and never caches it.
pub trait RateProvider {
    fn rate(&self) -> f64;
}

/// Default EUR rate used when no provider is injected.
pub const DEFAULT_EUR_RATE: f64 = 1.08;

/// Rate provider that always returns the same rate.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateProvider {
    rate: f64,
}

impl FixedRateProvider {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for FixedRateProvider {
    fn default() -> Self {
        Self::new(DEFAULT_EUR_RATE)
    }
}

impl RateProvider for FixedRateProvider {
    fn rate(&self) -> f64 {
        self.rate
    }
}
