pub mod labels;
pub mod resolve;
pub mod sectors;
pub mod spin;
