pub mod chart_spec;
pub mod cycle;

pub use chart_spec::ChartSpec;
pub use cycle::CycleConfig;
