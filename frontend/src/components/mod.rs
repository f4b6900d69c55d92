pub mod prize_modal;

pub use prize_modal::PrizeModal;
