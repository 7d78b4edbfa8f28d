/// Geometry of one observed anchor relative to the viewport top.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry<N> {
    pub node: N,
    pub top: f64,
    pub height: f64,
    pub is_intersecting: bool,
}

impl<N> VisibilityEntry<N> {
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Choose the active index among `(unit index, distance to viewport center)`.
///
/// The smallest distance wins. On a tie the previous index is kept when it is
/// one of the tied candidates, otherwise the lowest index wins.
pub fn pick_active(candidates: &[(usize, f64)], previous: Option<usize>) -> Option<usize> {
    let best = candidates
        .iter()
        .map(|(_, distance)| *distance)
        .fold(f64::INFINITY, f64::min);
    if !best.is_finite() {
        return None;
    }

    let mut tied: Vec<usize> = candidates
        .iter()
        .filter(|(_, distance)| (*distance - best).abs() <= f64::EPSILON)
        .map(|(index, _)| *index)
        .collect();
    tied.sort_unstable();

    match previous {
        Some(prev) if tied.contains(&prev) => Some(prev),
        _ => tied.first().copied(),
    }
}
