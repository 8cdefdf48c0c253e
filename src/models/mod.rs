mod intervention;
mod scenario;

pub use intervention::Intervention;
pub use scenario::Scenario;
