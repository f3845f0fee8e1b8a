pub mod cell;
pub mod coerce;
pub mod request;
pub mod series;
pub mod table;

pub use cell::CellValue;
pub use coerce::coerce_number;
pub use request::{Axis, ChartRequest, ChartType};
pub use series::{ChartSeries, HistogramBin, ScatterPoint};
pub use table::{Record, Table};
