use crate::items::Item;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The obstacle surrounding a town. Crossing it requires one specific item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Cave,
}

impl Terrain {
    /// All terrains, drawn from uniformly when a town is generated.
    pub const ALL: [Terrain; 6] = [
        Terrain::Mountains,
        Terrain::Ocean,
        Terrain::Plains,
        Terrain::Desert,
        Terrain::Jungle,
        Terrain::Cave,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Mountains => "Mountains",
            Terrain::Ocean => "Ocean",
            Terrain::Plains => "Plains",
            Terrain::Desert => "Desert",
            Terrain::Jungle => "Jungle",
            Terrain::Cave => "Cave",
        }
    }

    /// The one item that lets a hunter cross this terrain.
    pub fn required_item(&self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Jungle => Item::Machete,
            Terrain::Cave => Item::Lantern,
        }
    }

    /// Rolls the terrain for a new town.
    pub fn random(rng: &mut impl Rng) -> Terrain {
        Terrain::ALL[rng.gen_range(0..Terrain::ALL.len())]
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
