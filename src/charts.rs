//! Light tables for specific NOAA charts.
//!
//! Characteristics are copied as printed on the chart. See the USCG Light
//! List for the meaning of each entry.

use crate::colors::LightColor;

/// A charted light and the phase offset it is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChartEntry {
    pub characteristic: &'static str,
    pub phase_offset_ms: u32,
}

impl ChartEntry {
    pub const fn new(characteristic: &'static str, phase_offset_ms: u32) -> Self {
        Self {
            characteristic,
            phase_offset_ms,
        }
    }
}

const R: u32 = LightColor::Red.phase_offset_ms();
const G: u32 = LightColor::Green.phase_offset_ms();
const W: u32 = LightColor::White.phase_offset_ms();
const Y: u32 = LightColor::Yellow.phase_offset_ms();

/// Chart 12283, Annapolis Harbor.
pub const ANNAPOLIS_HARBOR: [ChartEntry; 16] = [
    ChartEntry::new("Q G", G),
    ChartEntry::new("Q W", W),
    ChartEntry::new("Fl R 2.5s", R),
    ChartEntry::new("Fl R 2.5s", R),
    ChartEntry::new("Fl Y 2.5s", Y),
    ChartEntry::new("Fl G 2.5s", G),
    ChartEntry::new("Fl R 4s", R),
    ChartEntry::new("Fl R 4s", R),
    ChartEntry::new("Fl (4+5) G 30s", G),
    ChartEntry::new("Fl G 4s", G),
    ChartEntry::new("Fl G 4s", G),
    ChartEntry::new("Fl (4+3) Y 30s", Y),
    ChartEntry::new("Fl Y 4s", Y),
    ChartEntry::new("Fl W 6s", W),
    ChartEntry::new("Fl R 6s", R),
    ChartEntry::new("Fl W 10s", W),
];

/// Chart 12270, Chesapeake Bay: Eastern Bay and South River; Selby Bay.
pub const EASTERN_BAY: [ChartEntry; 20] = [
    ChartEntry::new("Fl (4+5) G 30s", G),
    ChartEntry::new("Fl G 4s", G),
    ChartEntry::new("Q G", G),
    ChartEntry::new("Fl G 2.5s", G),
    ChartEntry::new("Fl (2+1) G 6s", G),
    ChartEntry::new("Fl G 6s", G),
    ChartEntry::new("Q R", R),
    ChartEntry::new("Fl R 2.5", R),
    ChartEntry::new("Fl R 4s", R),
    ChartEntry::new("Fl R 6s", R),
    ChartEntry::new("Fl (2+1) R 6s", R),
    ChartEntry::new("Fl W 6s", W),
    ChartEntry::new("Fl W 10s", W),
    ChartEntry::new("Fl W 4s", W),
    ChartEntry::new("Fl W 5s", W),
    ChartEntry::new("Fl (4+3) Y 30s", Y),
    ChartEntry::new("Fl Y 2.5s", Y),
    ChartEntry::new("Fl Y 4s", Y),
    ChartEntry::new("F Y", Y),
    ChartEntry::new("Oc (2+1) R 6s", R),
];
