mod permission;
mod simulated;

pub use permission::SimulatedPermission;
pub use simulated::SimulatedProvider;
