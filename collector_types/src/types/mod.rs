mod payload;
mod schema;

pub use payload::*;
pub use schema::*;
