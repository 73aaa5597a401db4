pub mod client;
pub mod diseases;
pub mod variant;
