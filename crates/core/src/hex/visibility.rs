//! Line-of-sight and field-of-view queries. Both are built on
//! [Hex::line_to]: a hex can see another if nothing opaque sits on the line
//! between them.

use crate::hex::{Hex, HexSet};
use log::trace;

impl Hex {
    /// Check if this hex can see `target`, given a set of opaque hexes. Every
    /// hex on [Self::line_to] is checked, **including both ends**. So if
    /// `target` is itself a blocker, this returns `false`, and the same goes
    /// for a blocker standing on this hex.
    pub fn has_line_of_sight(self, target: Hex, blockers: &HexSet) -> bool {
        match self.line_to(target).find(|hex| blockers.contains(hex)) {
            Some(blocker) => {
                trace!(
                    "Line of sight from {} to {} blocked at {}",
                    self,
                    target,
                    blocker
                );
                false
            }
            None => true,
        }
    }

    /// Filter `candidates` down to the ones this hex can see. A candidate is
    /// visible if any of these hold:
    ///
    /// - There are no blockers at all
    /// - It's this hex or one of its neighbors (even if it's a blocker, you
    ///   can always see the wall you're standing next to)
    /// - [Self::has_line_of_sight] passes
    ///
    /// Candidates keep their input order.
    pub fn field_of_view<'a, I>(
        self,
        candidates: I,
        blockers: &'a HexSet,
    ) -> impl Iterator<Item = Hex> + 'a
    where
        I: IntoIterator<Item = Hex>,
        I::IntoIter: 'a,
    {
        candidates.into_iter().filter(move |&candidate| {
            blockers.is_empty()
                || self.distance_to(candidate) <= 1
                || self.has_line_of_sight(candidate, blockers)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hex::rectangle_grid, util::hex_list};

    fn blockers(hexes: &[Hex]) -> HexSet {
        hexes.iter().copied().collect()
    }

    #[test]
    fn test_has_line_of_sight() {
        let source = Hex::new(1, 1);
        let walls = blockers(&[Hex::new(2, 0), Hex::new(3, 0)]);
        // Line goes (1,1) (2,0) (3,0) (4,-1)
        assert!(!source.has_line_of_sight(Hex::new(4, -1), &walls));
        // Line goes (1,1) (2,1) (3,0)... and (3,0) is a wall
        assert!(!source.has_line_of_sight(Hex::new(3, 0), &walls));
        assert!(source.has_line_of_sight(Hex::new(3, 1), &walls));
        assert!(source.has_line_of_sight(Hex::new(0, 3), &walls));
        assert!(source.has_line_of_sight(source, &HexSet::default()));
    }

    /// The target being a blocker counts as blocked, even right next door
    #[test]
    fn test_line_of_sight_to_blocker() {
        let source = Hex::ORIGIN;
        let target = Hex::new(1, 0);
        let walls = blockers(&[target]);
        assert!(!source.has_line_of_sight(target, &walls));
        assert!(!target.has_line_of_sight(source, &walls));
        assert!(!target.has_line_of_sight(target, &walls));
    }

    #[test]
    fn test_field_of_view() {
        let universe: Vec<Hex> = rectangle_grid(6, 4).collect();
        assert_eq!(universe.len(), 24);
        let walls = blockers(&[Hex::new(2, 0), Hex::new(3, 0)]);

        let visible: Vec<Hex> =
            Hex::new(1, 1).field_of_view(universe, &walls).collect();
        assert_eq!(visible.len(), 16);
        assert_eq!(
            hex_list(visible),
            "[(0,0) (0,1) (0,2) (0,3) (1,0) (1,1) (1,2) (1,3) \
            (2,0) (2,1) (2,2) (3,1) (3,2) (4,1) (5,0) (5,1)]"
        );
    }

    #[test]
    fn test_field_of_view_no_blockers() {
        let source = Hex::new(-4, 9);
        let universe: Vec<Hex> = rectangle_grid(5, 5).collect();
        let visible: Vec<Hex> = source
            .field_of_view(universe.iter().copied(), &HexSet::default())
            .collect();
        assert_eq!(visible, universe);
    }

    #[test]
    fn test_field_of_view_keeps_order() {
        let source = Hex::ORIGIN;
        let walls = blockers(&[Hex::new(1, 0)]);
        let candidates = vec![
            Hex::new(0, 2),
            Hex::new(2, 0),
            Hex::new(1, 0),
            Hex::new(-2, 1),
        ];
        // (2,0) is behind the wall, but the wall itself is adjacent
        assert_eq!(
            source.field_of_view(candidates, &walls).collect::<Vec<_>>(),
            vec![Hex::new(0, 2), Hex::new(1, 0), Hex::new(-2, 1)]
        );
    }
}
