pub mod bar;
pub mod model;
pub mod registry;

pub use bar::BarChart;
pub use model::{BarPoint, BarSeries, Orientation};
pub use registry::{ChartId, ChartRegistry};
