mod parameters;
mod row;

pub use parameters::{DieParameters, MAX_CHANNEL_LENGTH_MM};
pub use row::{RowCountPolicy, RowSpec};
