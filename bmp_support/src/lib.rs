mod common;
pub mod writer;

pub use common::{pixels_per_meter_from_ppi, PIXELS_PER_METER_OPTION};
pub use writer::BMPWriter;
