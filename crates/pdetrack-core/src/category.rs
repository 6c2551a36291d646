//! The five orientations of the water master plan.
//!
//! Categories are a closed set with a fixed display order. Everything that
//! iterates categories (partitioning, page building, navigation) goes through
//! [`Category::ALL`] so the order is declared exactly once.

use serde::{Deserialize, Serialize};

/// One thematic orientation of the plan
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 1 - Water quality degradation
    WaterQuality,
    /// 2 - Lake eutrophication
    LakeEutrophication,
    /// 3 - Invasive exotic species
    InvasiveSpecies,
    /// 4 - Wildlife habitat loss
    WildlifeHabitat,
    /// 5 - Wetlands and water environments
    Wetlands,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::WaterQuality,
        Category::LakeEutrophication,
        Category::InvasiveSpecies,
        Category::WildlifeHabitat,
        Category::Wetlands,
    ];

    /// Display order, 1 through 5
    pub const fn number(self) -> u8 {
        match self {
            Category::WaterQuality => 1,
            Category::LakeEutrophication => 2,
            Category::InvasiveSpecies => 3,
            Category::WildlifeHabitat => 4,
            Category::Wetlands => 5,
        }
    }

    /// The label used in the workbook's `Orientation` column
    pub const fn source_label(self) -> &'static str {
        match self {
            Category::WaterQuality => "1 - Éviter la dégradation de la qualité de l'eau",
            Category::LakeEutrophication => "2 - Ralentir l'eutrophisation des lacs",
            Category::InvasiveSpecies => {
                "3 - Limiter la prolifération des espèces exotiques envahissantes"
            }
            Category::WildlifeHabitat => "4 - Freiner la perte d'habitat faunique",
            Category::Wetlands => {
                "5 - Éviter la destruction ou la dégradation de la qualité des milieux humides et hydriques"
            }
        }
    }

    /// Short label shown in the navigation bar
    pub const fn nav_label(self) -> &'static str {
        match self {
            Category::WaterQuality => "1. Qualité de l'eau",
            Category::LakeEutrophication => "2. Eutrophisation des lacs",
            Category::InvasiveSpecies => "3. Espèces exotiques envahissantes",
            Category::WildlifeHabitat => "4. Habitats fauniques",
            Category::Wetlands => "5. Milieux humides et hydriques",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Category::WaterQuality => "💧🌊",
            Category::LakeEutrophication => "🦠🏞️",
            Category::InvasiveSpecies => "🌾🦪",
            Category::WildlifeHabitat => "🐟🦎",
            Category::Wetlands => "🌿🦆",
        }
    }

    /// Match a workbook label against the known categories.
    ///
    /// Only surrounding whitespace is ignored; any other difference means
    /// the label is unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.source_label() == label)
    }

    /// Look up a category by its display number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.number() == number)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nav_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_declared_order() {
        let numbers: Vec<u8> = Category::ALL.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.source_label()), Some(category));
            assert_eq!(Category::from_number(category.number()), Some(category));
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            Category::from_label("  2 - Ralentir l'eutrophisation des lacs \n"),
            Some(Category::LakeEutrophication)
        );
    }

    #[test]
    fn unknown_labels_do_not_match() {
        assert_eq!(Category::from_label(""), None);
        assert_eq!(Category::from_label("6 - Autre"), None);
        assert_eq!(Category::from_label("2 - ralentir l'eutrophisation des lacs"), None);
        assert_eq!(Category::from_number(0), None);
        assert_eq!(Category::from_number(6), None);
    }
}
