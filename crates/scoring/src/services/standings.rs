use uuid::Uuid;

use crate::models::{RaceScorecard, SailNumber, ScoringPolicy, StandingEntry};

struct BoatSeries {
    sail_number: SailNumber,
    boat_name: Option<String>,
    scores: Vec<f64>,
    wins: u32,
    best_finish: Option<u32>,
}

/// Rolls ranked race scorecards into series standings.
///
/// Non-finishers score fleet size + penalty offset for that race; a boat with
/// no entry at all in a race (DNC) scores nothing there and the race does not
/// count toward `races_sailed`. Discards drop each boat's own worst scores
/// once the configured race count is reached. Output is deterministic for a
/// given input, including entry ids.
pub fn compute_standings(races: &[RaceScorecard], policy: &ScoringPolicy) -> Vec<StandingEntry> {
    // First-appearance order keeps the final stable tiebreak deterministic.
    let mut boats: Vec<BoatSeries> = Vec::new();

    for race in races {
        let fleet_size = race.fleet_size() as u32;
        let penalty = f64::from(fleet_size + policy.non_finisher_penalty_offset);

        for result in &race.results {
            let points = match result.corrected_position {
                Some(position) => policy.points.points_for_position(position),
                None => penalty,
            };

            let slot = match boats
                .iter()
                .position(|b| b.sail_number == result.sail_number)
            {
                Some(slot) => slot,
                None => {
                    boats.push(BoatSeries {
                        sail_number: result.sail_number.clone(),
                        boat_name: None,
                        scores: Vec::new(),
                        wins: 0,
                        best_finish: None,
                    });
                    boats.len() - 1
                }
            };
            let boat = &mut boats[slot];

            boat.scores.push(points);
            if boat.boat_name.is_none() {
                boat.boat_name = result.boat_name.clone();
            }
            if result.corrected_position == Some(1) {
                boat.wins += 1;
            }
            if let Some(position) = result.corrected_position {
                boat.best_finish = Some(boat.best_finish.map_or(position, |b| b.min(position)));
            }
        }
    }

    let discards_active = policy
        .discard
        .filter(|d| races.len() as u32 >= d.after_races);

    // Lowest position seen anywhere in the series, per boat; third tiebreak.
    let best_finishes: Vec<u32> = boats
        .iter()
        .map(|b| b.best_finish.unwrap_or(u32::MAX))
        .collect();

    let entries: Vec<StandingEntry> = boats
        .into_iter()
        .map(|boat| {
            let total_points: f64 = boat.scores.iter().sum();
            let net_points = match discards_active {
                Some(discard) => {
                    let mut scores = boat.scores.clone();
                    scores.sort_by(f64::total_cmp);
                    let keep = scores.len().saturating_sub(discard.worst_n as usize);
                    scores[..keep].iter().sum()
                }
                None => total_points,
            };
            StandingEntry {
                entry_id: entry_id(races, &boat.sail_number),
                sail_number: boat.sail_number,
                boat_name: boat.boat_name,
                total_points,
                net_points,
                wins: boat.wins,
                races_sailed: boat.scores.len() as u32,
                rank: 0,
            }
        })
        .collect();

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        entries[a]
            .net_points
            .total_cmp(&entries[b].net_points)
            .then_with(|| entries[b].wins.cmp(&entries[a].wins))
            .then_with(|| best_finishes[a].cmp(&best_finishes[b]))
    });

    let mut ranked: Vec<StandingEntry> = order.iter().map(|&i| entries[i].clone()).collect();
    let sorted_keys: Vec<(f64, u32, u32)> = order
        .iter()
        .map(|&i| (entries[i].net_points, entries[i].wins, best_finishes[i]))
        .collect();

    let mut index = 0;
    while index < ranked.len() {
        let key = sorted_keys[index];
        let tied = sorted_keys[index..]
            .iter()
            .take_while(|k| k.0.total_cmp(&key.0).is_eq() && k.1 == key.1 && k.2 == key.2)
            .count();
        for entry in &mut ranked[index..index + tied] {
            entry.rank = (index + 1) as u32;
        }
        index += tied;
    }

    ranked
}

/// Deterministic per-(regatta, system, boat) id so repeated computations
/// return identical entries.
fn entry_id(races: &[RaceScorecard], sail_number: &SailNumber) -> Uuid {
    let (regatta, system) = races
        .first()
        .map(|r| (r.regatta_id, r.system_code.as_str()))
        .unwrap_or((Uuid::nil(), ""));
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("{regatta}:{system}:{sail_number}").as_bytes(),
    )
}
