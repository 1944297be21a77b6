pub mod history;
pub mod sessions;
pub mod simulation;
