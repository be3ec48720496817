//! Speed-adaptive filtering for noisy sensor data
pub mod bank;
pub mod channels;
pub mod clock;
pub mod dynamic;
pub mod low_pass;
pub mod one_euro;
pub mod params;
pub mod typed;

/// A generic filter interface
pub trait Filter<T> {
    /// Filter the input data
    fn filter(&mut self, input: T) -> T;
}

impl Filter<f64> for low_pass::LowPassFilter {
    fn filter(&mut self, input: f64) -> f64 {
        low_pass::LowPassFilter::filter(self, input)
    }
}
