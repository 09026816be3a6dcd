//! Distance-based de-duplication of candidate points.

use log::debug;

use crate::types::Point;

/// Thin `points` until no two survivors are within `distance` of each other.
///
/// Each round picks the first point (in list order) that has at least one
/// other point within `distance`, drops all of those neighbors, and starts
/// over. The chosen point itself survives. Exact duplicates count as
/// neighbors. Survivors keep their relative order.
pub fn filter_by_distance(mut points: Vec<Point>, distance: f64) -> Vec<Point> {
    let before = points.len();
    let mut rounds = 0usize;

    while let Some((index, neighbors)) = first_crowded(&points, distance) {
        let mut doomed = vec![false; points.len()];
        for j in neighbors {
            doomed[j] = true;
        }
        debug_assert!(!doomed[index]);

        let mut position = 0usize;
        points.retain(|_| {
            let keep = !doomed[position];
            position += 1;
            keep
        });
        rounds += 1;
    }

    debug!(
        "cluster filter d={}: {} -> {} points in {} rounds",
        distance,
        before,
        points.len(),
        rounds
    );
    points
}

/// First point with neighbors within `distance`, and the neighbor indices.
fn first_crowded(points: &[Point], distance: f64) -> Option<(usize, Vec<usize>)> {
    points.iter().enumerate().find_map(|(i, &point)| {
        let neighbors: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|&(j, &other)| j != i && other.length_to(point) <= distance)
            .map(|(j, _)| j)
            .collect();

        if neighbors.is_empty() {
            None
        } else {
            Some((i, neighbors))
        }
    })
}
