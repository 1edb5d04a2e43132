//! Resolve a location to the closest of candidate vertices.
//!
//! The resolution is a linear scan and knows nothing about graph structure.
//! Locations and the distance between them are entirely up to the caller, so
//! the same function serves geographic coordinates as well as points in a
//! plane.
//!
//! # Examples
//!
//! ```
//! use footway::algo::nearest;
//!
//! let candidates = [(10, (0.0, 4.0)), (20, (1.0, 1.0)), (30, (-3.0, 0.0))];
//! let planar = |a: &(f64, f64), b: &(f64, f64)| (a.0 - b.0).hypot(a.1 - b.1);
//!
//! let nearest = nearest(&(0.0, 0.0), candidates, planar).unwrap();
//! assert_eq!(nearest.vertex, 20);
//! ```

use thiserror::Error;

/// The closest candidate and its distance from the target location.
#[derive(Debug, Clone, PartialEq)]
pub struct Nearest<V, D> {
    pub vertex: V,
    pub distance: D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// There was no candidate to choose from.
    #[error("no candidate vertex to resolve the location to")]
    Unresolved,
}

/// Finds the candidate closest to the target location.
///
/// Candidates are `(vertex, location)` pairs. If multiple candidates are
/// equally close, the first one encountered wins. Candidates with
/// incomparable distance (e.g., NaN) are skipped.
pub fn nearest<V, C, D, I, F>(
    target: &C,
    candidates: I,
    mut distance: F,
) -> Result<Nearest<V, D>, Error>
where
    I: IntoIterator<Item = (V, C)>,
    F: FnMut(&C, &C) -> D,
    D: PartialOrd,
{
    let mut closest: Option<Nearest<V, D>> = None;

    for (vertex, location) in candidates {
        let dist = distance(target, &location);

        // NaN is not even equal to itself.
        if dist.partial_cmp(&dist).is_none() {
            continue;
        }

        let is_closer = closest
            .as_ref()
            .map_or(true, |closest| dist < closest.distance);

        if is_closer {
            closest = Some(Nearest {
                vertex,
                distance: dist,
            });
        }
    }

    closest.ok_or(Error::Unresolved)
}
