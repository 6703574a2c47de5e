pub mod csv_roster;

pub use csv_roster::{ImportError, read_roster};
