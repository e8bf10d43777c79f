use core::fmt;

/// Kind of a single grid cell. Terrain kinds carry an entry cost, [Impassable](CellKind::Impassable)
/// can never be entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    Start,
    Goal,
    #[default]
    TerrainEasy,
    TerrainMedium,
    TerrainHard,
    Impassable,
}

impl CellKind {
    pub const ALL: [CellKind; 6] = [
        CellKind::Start,
        CellKind::Goal,
        CellKind::TerrainEasy,
        CellKind::TerrainMedium,
        CellKind::TerrainHard,
        CellKind::Impassable,
    ];

    /// Cost of entering a cell of this kind. Start and goal are free to enter, impassable
    /// cells have no cost.
    #[inline]
    pub fn cost(self) -> Option<u32> {
        match self {
            CellKind::Start | CellKind::Goal => Some(0),
            CellKind::TerrainEasy => Some(1),
            CellKind::TerrainMedium => Some(2),
            CellKind::TerrainHard => Some(3),
            CellKind::Impassable => None,
        }
    }

    #[inline]
    pub fn is_traversable(self) -> bool {
        self != CellKind::Impassable
    }

    pub fn is_terrain(self) -> bool {
        matches!(
            self,
            CellKind::TerrainEasy | CellKind::TerrainMedium | CellKind::TerrainHard
        )
    }

    /// Character used for this kind in the text form of a grid.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Start => 'S',
            CellKind::Goal => 'G',
            CellKind::TerrainEasy => '.',
            CellKind::TerrainMedium => '~',
            CellKind::TerrainHard => '^',
            CellKind::Impassable => '#',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<CellKind> {
        CellKind::ALL.into_iter().find(|kind| kind.glyph() == glyph)
    }

    /// Maps a plain wall grid onto the terrain model: open cells become easy terrain.
    pub fn from_blocked(blocked: bool) -> CellKind {
        if blocked {
            CellKind::Impassable
        } else {
            CellKind::TerrainEasy
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CellKind::Start => "start",
            CellKind::Goal => "goal",
            CellKind::TerrainEasy => "easy terrain",
            CellKind::TerrainMedium => "medium terrain",
            CellKind::TerrainHard => "hard terrain",
            CellKind::Impassable => "impassable",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_costs() {
        assert_eq!(CellKind::TerrainEasy.cost(), Some(1));
        assert_eq!(CellKind::TerrainMedium.cost(), Some(2));
        assert_eq!(CellKind::TerrainHard.cost(), Some(3));
        assert_eq!(CellKind::Start.cost(), Some(0));
        assert_eq!(CellKind::Goal.cost(), Some(0));
        assert_eq!(CellKind::Impassable.cost(), None);
    }

    #[test]
    fn only_impassable_blocks() {
        for kind in CellKind::ALL {
            assert_eq!(kind.is_traversable(), kind != CellKind::Impassable);
            assert_eq!(kind.is_traversable(), kind.cost().is_some());
        }
    }

    #[test]
    fn glyphs_are_unique() {
        for kind in CellKind::ALL {
            assert_eq!(CellKind::from_glyph(kind.glyph()), Some(kind));
        }
        assert_eq!(CellKind::from_glyph('x'), None);
    }
}
