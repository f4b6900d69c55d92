use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label carried by the interleaved losing slices.
pub const NO_WIN_LABEL: &str = "No win";

/// One wedge of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Sector {
    pub label: String,
    pub is_win: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelConfigError {
    /// An empty prize list would leave the wheel with zero slices.
    NoPrizes,
}

impl fmt::Display for WheelConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelConfigError::NoPrizes => write!(f, "prize list must contain at least one prize"),
        }
    }
}

impl std::error::Error for WheelConfigError {}

/// Interleaves every prize with a losing slice, so wins and losses strictly
/// alternate and the wheel ends up with `2 * prizes.len()` sectors.
pub fn build_sectors(prizes: &[String]) -> Result<Vec<Sector>, WheelConfigError> {
    if prizes.is_empty() {
        return Err(WheelConfigError::NoPrizes);
    }

    let mut sectors = Vec::with_capacity(prizes.len() * 2);
    for prize in prizes {
        sectors.push(Sector {
            label: prize.clone(),
            is_win: true,
        });
        sectors.push(Sector {
            label: NO_WIN_LABEL.to_string(),
            is_win: false,
        });
    }
    Ok(sectors)
}

/// Angular width of one sector; identical for all sectors.
pub fn slice_angle(sector_count: usize) -> f64 {
    TAU / sector_count as f64
}

/// CSS color for sector `index`: hue rotated evenly around the color wheel,
/// fixed saturation and lightness.
pub fn color_for(index: usize, sector_count: usize) -> String {
    let hue = (360.0 * index as f64 / sector_count as f64).round();
    format!("hsl({}, 85%, 55%)", hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prizes(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sectors_alternate_starting_with_win() {
        let sectors = build_sectors(&prizes(&["mousepad", "wristband", "keychain"])).unwrap();
        assert_eq!(sectors.len(), 6);
        for (i, sector) in sectors.iter().enumerate() {
            assert_eq!(sector.is_win, i % 2 == 0);
        }
        assert_eq!(sectors[0].label, "mousepad");
        assert_eq!(sectors[1].label, NO_WIN_LABEL);
        assert_eq!(sectors[4].label, "keychain");
    }

    #[test]
    fn test_empty_prize_list_is_rejected() {
        assert_eq!(build_sectors(&[]), Err(WheelConfigError::NoPrizes));
    }

    #[test]
    fn test_slice_angle_covers_full_circle() {
        for count in [2, 4, 6, 8, 12, 16] {
            let total = slice_angle(count) * count as f64;
            assert!((total - TAU).abs() < 1e-12);
        }
    }

    #[test]
    fn test_color_hues_are_evenly_spaced() {
        assert_eq!(color_for(0, 4), "hsl(0, 85%, 55%)");
        assert_eq!(color_for(1, 4), "hsl(90, 85%, 55%)");
        assert_eq!(color_for(3, 4), "hsl(270, 85%, 55%)");
        // Distinct hues for every sector of a 12-slice wheel.
        let colors: Vec<String> = (0..12).map(|i| color_for(i, 12)).collect();
        for (i, color) in colors.iter().enumerate() {
            assert!(!colors[..i].contains(color));
        }
    }
}
