pub mod dispatch;
pub mod habitable;
pub mod query;
pub mod random;
pub mod schema;
pub mod score;
pub mod shared;
pub mod stats;
