//! Treasures hidden in towns.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    /// Worthless find; never goes into the chest.
    Dust,
}

impl Treasure {
    /// Every assignable treasure, in draw order.
    pub const ALL: [Treasure; 4] = [
        Treasure::Crown,
        Treasure::Trophy,
        Treasure::Gem,
        Treasure::Dust,
    ];

    /// The three treasures that win the game when held together.
    pub const WINNING_SET: [Treasure; 3] = [Treasure::Trophy, Treasure::Gem, Treasure::Crown];

    pub fn name(&self) -> &'static str {
        match self {
            Treasure::Crown => "crown",
            Treasure::Trophy => "trophy",
            Treasure::Gem => "gem",
            Treasure::Dust => "dust",
        }
    }

    pub fn is_valuable(&self) -> bool {
        !matches!(self, Treasure::Dust)
    }

    /// Uniform draw over the four kinds.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let roll = rng.gen::<f64>() * Self::ALL.len() as f64;
        Self::ALL[(roll as usize).min(Self::ALL.len() - 1)]
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_only_dust_is_worthless() {
        for t in Treasure::ALL {
            assert_eq!(t.is_valuable(), t != Treasure::Dust);
        }
    }

    #[test]
    fn test_random_covers_all_kinds_roughly_evenly() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts: HashMap<Treasure, u32> = HashMap::new();
        for _ in 0..4000 {
            *counts.entry(Treasure::random(&mut rng)).or_default() += 1;
        }
        for t in Treasure::ALL {
            let n = counts.get(&t).copied().unwrap_or(0);
            assert!((800..1200).contains(&n), "{} drawn {} times", t, n);
        }
    }

    #[test]
    fn test_names_are_lowercase() {
        assert_eq!(Treasure::Crown.to_string(), "crown");
        assert_eq!(Treasure::Dust.name(), "dust");
    }
}
