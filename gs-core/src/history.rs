//! Grouping of persisted calculation rows into route cards.
//!
//! The backend stores one row per `(route, modal)` pair. The dashboard shows
//! one card per route, so rows sharing origin, destination and distance are
//! folded together. Grouping is a pure function of the fetched rows and is
//! recomputed from scratch on every fetch.

use crate::lifecycle::Lifecycle;
use crate::models::CalculationRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Footprint of one modal inside a [`GroupedCalculation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalFootprint {
    pub modal: String,
    pub carbon_footprint_kg: f64,
}

/// One route card: every record sharing the same origin, destination and
/// distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedCalculation {
    pub origin_city: String,
    pub destination_city: String,
    pub distance_km: f64,
    /// Timestamp of the first record seen for this route.
    pub created_at: String,
    pub footprints: Vec<ModalFootprint>,
}

#[derive(Hash, PartialEq, Eq)]
struct RouteKey<'a> {
    origin: &'a str,
    destination: &'a str,
    distance_bits: u64,
}

impl<'a> RouteKey<'a> {
    fn of(record: &'a CalculationRecord) -> Self {
        // 0.0 and -0.0 compare equal as floats, so they share a key.
        let distance = if record.distance_km == 0.0 {
            0.0
        } else {
            record.distance_km
        };
        Self {
            origin: &record.origin_city,
            destination: &record.destination_city,
            distance_bits: distance.to_bits(),
        }
    }
}

/// Group records by `(origin_city, destination_city, distance_km)`.
///
/// Groups appear in the order their first record is encountered; footprints
/// inside a group keep the order of the input. Distances are compared on
/// their raw value, so a backend that rounds the same route differently
/// across calls will produce separate cards.
pub fn group_calculations(records: &[CalculationRecord]) -> Vec<GroupedCalculation> {
    let mut index: HashMap<RouteKey<'_>, usize> = HashMap::new();
    let mut groups: Vec<GroupedCalculation> = Vec::new();

    for record in records {
        let slot = *index.entry(RouteKey::of(record)).or_insert_with(|| {
            groups.push(GroupedCalculation {
                origin_city: record.origin_city.clone(),
                destination_city: record.destination_city.clone(),
                distance_km: record.distance_km,
                created_at: record.created_at.clone(),
                footprints: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].footprints.push(ModalFootprint {
            modal: record.modal.clone(),
            carbon_footprint_kg: record.carbon_footprint_kg,
        });
    }

    log::debug!(
        "Grouped {} calculation records into {} routes",
        records.len(),
        groups.len()
    );
    groups
}

/// Alert shown when deleting the history fails.
pub const CLEAR_FAILED: &str = "Could not clear the history. Please try again.";

/// Apply the outcome of a delete-all request to the displayed history.
///
/// Success empties the list and voids any fetch still in flight, so a late
/// answer cannot bring cleared cards back. Failure leaves the history exactly
/// as it was and returns the alert to show.
pub fn apply_clear(
    history: &mut Lifecycle<Vec<GroupedCalculation>>,
    outcome: Result<(), String>,
) -> Option<&'static str> {
    match outcome {
        Ok(()) => {
            history.replace(Vec::new());
            None
        }
        Err(message) => {
            log::error!("Clearing history failed: {}", message);
            Some(CLEAR_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn record(id: i64, origin: &str, dest: &str, distance: f64, modal: &str, co2: f64) -> CalculationRecord {
        CalculationRecord {
            id,
            origin_city: origin.to_string(),
            destination_city: dest.to_string(),
            distance_km: distance,
            modal: modal.to_string(),
            carbon_footprint_kg: co2,
            created_at: format!("2024-05-01T10:00:{:02}", id % 60),
        }
    }

    #[test]
    fn same_route_forms_one_card() {
        let records = vec![
            record(1, "A", "B", 100.0, "truck", 50.0),
            record(2, "A", "B", 100.0, "electric", 10.0),
        ];
        let groups = group_calculations(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].origin_city, "A");
        assert_eq!(groups[0].destination_city, "B");
        assert_eq!(groups[0].distance_km, 100.0);
        assert_eq!(groups[0].created_at, "2024-05-01T10:00:01");
        assert_eq!(
            groups[0].footprints,
            vec![
                ModalFootprint {
                    modal: "truck".to_string(),
                    carbon_footprint_kg: 50.0
                },
                ModalFootprint {
                    modal: "electric".to_string(),
                    carbon_footprint_kg: 10.0
                },
            ]
        );
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let records = vec![
            record(1, "C", "D", 20.0, "moto", 2.1),
            record(2, "A", "B", 100.0, "moto", 10.5),
            record(3, "C", "D", 20.0, "carro_gasolina", 3.84),
        ];
        let groups = group_calculations(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].origin_city, "C");
        assert_eq!(groups[0].footprints.len(), 2);
        assert_eq!(groups[1].origin_city, "A");
    }

    #[test]
    fn any_key_difference_splits_groups() {
        let records = vec![
            record(1, "A", "B", 100.0, "moto", 1.0),
            record(2, "B", "A", 100.0, "moto", 1.0),
            record(3, "A", "B", 100.01, "moto", 1.0),
            record(4, "A", "C", 100.0, "moto", 1.0),
        ];
        assert_eq!(group_calculations(&records).len(), 4);
    }

    #[test]
    fn signed_zero_distances_share_a_group() {
        let records = vec![
            record(1, "A", "A", 0.0, "moto", 0.0),
            record(2, "A", "A", -0.0, "carro_gasolina", 0.0),
        ];
        assert_eq!(group_calculations(&records).len(), 1);
    }

    #[test]
    fn empty_input_gives_no_groups() {
        assert!(group_calculations(&[]).is_empty());
    }

    fn loaded(records: &[CalculationRecord]) -> Lifecycle<Vec<GroupedCalculation>> {
        let mut history = Lifecycle::default();
        let seq = history.begin();
        history.finish(seq, Ok(group_calculations(records)));
        history
    }

    #[test]
    fn confirmed_clear_empties_the_list() {
        let mut history = loaded(&[
            record(1, "A", "B", 100.0, "truck", 50.0),
            record(2, "A", "B", 100.0, "electric", 10.0),
        ]);
        assert_eq!(apply_clear(&mut history, Ok(())), None);
        assert_eq!(history.value(), Some(&Vec::new()));
        assert!(!history.is_loading());
        assert_eq!(history.error(), None);
    }

    #[test]
    fn failed_clear_keeps_the_list_and_alerts() {
        let mut history = loaded(&[record(1, "A", "B", 100.0, "truck", 50.0)]);
        let before = history.clone();
        let alert = apply_clear(&mut history, Err("HTTP 500: boom".to_string()));
        assert_eq!(alert, Some(CLEAR_FAILED));
        assert_eq!(history, before);
        assert_eq!(history.value().map(Vec::len), Some(1));
    }

    #[test]
    fn clear_voids_a_fetch_in_flight() {
        let mut history = loaded(&[record(1, "A", "B", 100.0, "truck", 50.0)]);
        let seq = history.begin();
        apply_clear(&mut history, Ok(()));

        let stale = group_calculations(&[record(1, "A", "B", 100.0, "truck", 50.0)]);
        assert!(!history.finish(seq, Ok(stale)));
        assert_eq!(history.value(), Some(&Vec::new()));
    }

    fn membership(groups: &[GroupedCalculation]) -> BTreeMap<(String, String, u64), Vec<String>> {
        groups
            .iter()
            .map(|g| {
                let mut modals: Vec<String> = g.footprints.iter().map(|f| f.modal.clone()).collect();
                modals.sort();
                (
                    (g.origin_city.clone(), g.destination_city.clone(), g.distance_km.to_bits()),
                    modals,
                )
            })
            .collect()
    }

    /// Records drawn from a small pool of routes and modals, plus a
    /// permutation of the same records.
    fn records_and_shuffle() -> impl Strategy<Value = (Vec<CalculationRecord>, Vec<CalculationRecord>)> {
        let cities = ["A", "B", "C"];
        let distances = [100.0, 250.5];
        let modals = ["moto", "carro_gasolina", "caminhao_pequeno", "veiculo_eletrico"];
        prop::collection::vec((0usize..3, 0usize..3, 0usize..2, 0usize..4), 0..24)
            .prop_map(move |rows| {
                rows.iter()
                    .enumerate()
                    .map(|(i, &(o, d, km, m))| {
                        record(i as i64, cities[o], cities[d], distances[km], modals[m], i as f64)
                    })
                    .collect::<Vec<_>>()
            })
            .prop_flat_map(|records| (Just(records.clone()), Just(records).prop_shuffle()))
    }

    proptest! {
        #[test]
        fn prop_membership_ignores_input_order((records, shuffled) in records_and_shuffle()) {
            let original = group_calculations(&records);
            let reordered = group_calculations(&shuffled);
            prop_assert_eq!(membership(&original), membership(&reordered));

            // Within a group, footprints follow input order.
            for group in &reordered {
                let ids: Vec<f64> = group.footprints.iter().map(|f| f.carbon_footprint_kg).collect();
                let expected: Vec<f64> = shuffled
                    .iter()
                    .filter(|r| r.origin_city == group.origin_city
                        && r.destination_city == group.destination_city
                        && r.distance_km == group.distance_km)
                    .map(|r| r.carbon_footprint_kg)
                    .collect();
                prop_assert_eq!(ids, expected);
            }
        }
    }
}
