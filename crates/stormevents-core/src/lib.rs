pub mod damage;
pub mod enrich;
pub mod error;
pub mod fips;
pub mod io;
pub mod pipeline;
pub mod schema;
pub mod views;
