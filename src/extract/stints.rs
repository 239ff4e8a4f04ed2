//! Tyre stint derivation from lap rows.

use std::collections::BTreeMap;

use crate::provider::RawLapRow;
use crate::schema::TyreStint;

/// Group laps into tyre stints per driver.
///
/// Laps missing a driver or stint number are skipped. Output is sorted by
/// driver, then stint number, so the file is deterministic regardless of
/// the provider's row order.
pub fn derive_stints(laps: &[RawLapRow]) -> Vec<TyreStint> {
    let mut stints: BTreeMap<(String, u32), TyreStint> = BTreeMap::new();

    for lap in laps {
        let (Some(driver), Some(stint_number)) = (lap.driver.as_ref(), lap.stint) else {
            continue;
        };

        let entry = stints.entry((driver.clone(), stint_number)).or_insert_with(|| TyreStint {
            driver: driver.clone(),
            stint_number,
            compound: lap.compound.clone(),
            start_lap: None,
            end_lap: None,
            num_laps_in_stint: 0,
        });

        entry.num_laps_in_stint += 1;
        if entry.compound.is_none() {
            entry.compound = lap.compound.clone();
        }
        if let Some(lap_number) = lap.lap_number {
            entry.start_lap = Some(entry.start_lap.map_or(lap_number, |n| n.min(lap_number)));
            entry.end_lap = Some(entry.end_lap.map_or(lap_number, |n| n.max(lap_number)));
        }
    }

    stints.into_values().collect()
}
