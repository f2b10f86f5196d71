#[path = "core/generation.rs"]
mod generation;
#[path = "core/history.rs"]
mod history;
#[path = "core/partition.rs"]
mod partition;
