pub mod class;
pub use class::*;

pub mod presets;
pub use presets::*;

pub mod range;
pub use range::*;

pub mod versus;
pub use versus::*;
