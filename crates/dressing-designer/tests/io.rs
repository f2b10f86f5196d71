#[path = "io/export.rs"]
mod export;
#[path = "io/serialization.rs"]
mod serialization;
