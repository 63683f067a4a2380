pub mod compose;
pub mod measure;
pub mod metrics;
pub mod month;
