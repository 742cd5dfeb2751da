//! Terrain surrounding a town and the item needed to cross it.

use crate::inventory::Inventory;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Terrain {
    name: &'static str,
    required_item: &'static str,
}

/// The six terrains a town can be surrounded by, in draw order.
pub const TERRAINS: [Terrain; 6] = [
    Terrain::new("Mountains", "rope"),
    Terrain::new("Ocean", "boat"),
    Terrain::new("Plains", "horse"),
    Terrain::new("Desert", "water"),
    Terrain::new("Jungle", "machete"),
    Terrain::new("Marsh", "boots"),
];

impl Terrain {
    pub const fn new(name: &'static str, required_item: &'static str) -> Self {
        Self {
            name,
            required_item,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.name
    }

    pub fn required_item(&self) -> &'static str {
        self.required_item
    }

    /// True if the kit holds the item this terrain demands.
    pub fn can_cross<const N: usize>(&self, kit: &Inventory<String, N>) -> bool {
        kit.contains(self.required_item)
    }

    pub fn info_string(&self) -> String {
        format!(
            "You see {}. You'll need a {} to cross.",
            self.name, self.required_item
        )
    }

    /// Uniform draw over [`TERRAINS`].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let roll = rng.gen::<f64>() * TERRAINS.len() as f64;
        TERRAINS[(roll as usize).min(TERRAINS.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn by_name(name: &str) -> Terrain {
        TERRAINS
            .iter()
            .copied()
            .find(|t| t.display_name().eq_ignore_ascii_case(name))
            .unwrap()
    }

    #[test]
    fn test_can_cross_requires_item() {
        let desert = by_name("desert");
        let mut kit: Inventory<String, 8> = Inventory::new();
        assert!(!desert.can_cross(&kit));
        kit.insert("water".to_string()).unwrap();
        assert!(desert.can_cross(&kit));
    }

    #[test]
    fn test_random_low_roll_is_mountains() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(Terrain::random(&mut rng).display_name(), "Mountains");
    }

    #[test]
    fn test_random_high_roll_is_marsh() {
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(Terrain::random(&mut rng).display_name(), "Marsh");
    }

    #[test]
    fn test_every_terrain_needs_a_distinct_item() {
        let mut items: Vec<_> = TERRAINS.iter().map(|t| t.required_item()).collect();
        items.sort_unstable();
        items.dedup();
        assert_eq!(items.len(), TERRAINS.len());
    }

    #[test]
    fn test_info_string_names_item() {
        let ocean = by_name("Ocean");
        assert!(ocean.info_string().contains("boat"));
    }
}
