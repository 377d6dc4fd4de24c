mod state;

pub use state::{SortColumn, SortDirection, TableState};
