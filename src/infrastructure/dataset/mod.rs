//! Listings dataset loading

mod accessor;
mod csv_reader;

pub use accessor::CsvListingsAccessor;
pub use csv_reader::{parse_listings, read_listings_file};
