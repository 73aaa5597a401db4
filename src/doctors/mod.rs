pub mod doctor;
pub mod selection;
