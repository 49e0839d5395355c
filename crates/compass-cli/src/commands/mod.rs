pub mod generate;
pub mod schema;
pub mod serve;
