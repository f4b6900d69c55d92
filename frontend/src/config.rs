use once_cell::sync::Lazy;
use shared::sectors::{build_sectors, Sector};

/// The ordered prize list is the only required configuration; sector count,
/// losing slices and colors are all derived from it.
pub const BASE_PRIZES: [&str; 6] = [
    "Mousepad",
    "Wristband",
    "Phone holder",
    "Keychain",
    "Chocolate",
    "Candy",
];

pub static SECTORS: Lazy<Vec<Sector>> = Lazy::new(|| {
    let prizes: Vec<String> = BASE_PRIZES.iter().map(|p| p.to_string()).collect();
    build_sectors(&prizes).expect("BASE_PRIZES holds at least one prize")
});
