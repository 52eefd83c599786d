//! Defaults for everything the generative backend does not deliver.
//!
//! Prices, ratings and images are not part of a grounded answer.
//! They are synthesized by a [`SynthesisPolicy`] that can be
//! replaced, e.g. by a deterministic one in tests.

use rand::Rng;

use crate::entities::*;

/// Unsplash photo ids of luxury hotels, used round-robin.
pub const LUXURY_HOTEL_IMAGES: [&str; 8] = [
    "1566073771259-6a8506099945",
    "1582719478250-c89cae4dc85b",
    "1542314831-068cd1dbfeeb",
    "1571896349842-33c89424de2d",
    "1611892440504-42a792e24d32",
    "1564501049412-61c2a3083791",
    "1520250497591-112f2f40a3f4",
    "1445013517792-079571584b71",
];

pub const FALLBACK_REVIEW_SNIPPETS: [&str; 3] = [
    "Una experiencia transformadora. El nivel de detalle es inigualable.",
    "La mejor ubicación de la ciudad con un servicio de guante blanco.",
    "Simplemente espectacular. Superó todas mis expectativas.",
];

pub const HOTEL_DESCRIPTION: &str = "Una joya arquitectónica que redefine el concepto de \
    hospitalidad. Disfrute de vistas panorámicas, gastronomía de autor y un servicio \
    personalizado que anticipa cada uno de sus deseos.";

pub const VERIFIED_ADDRESS: &str = "Ubicación Premium verificada";
pub const UNVERIFIED_ADDRESS: &str = "Distrito Financiero y de Lujo";

/// Nightly prices are drawn from `MIN_PRICE..MAX_PRICE`.
pub const MIN_PRICE: u64 = 250;
pub const MAX_PRICE: u64 = 750;

/// Ratings are drawn from `MIN_RATING..MAX_RATING`.
pub const MIN_RATING: f64 = 4.7;
pub const MAX_RATING: f64 = 5.0;

pub fn photo_url(photo_id: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo_id}?auto=format&fit=crop&w=800&q=80")
}

pub fn placeholder_name(index: usize) -> String {
    format!("LuxeStay Signature {}", index + 1)
}

pub trait SynthesisPolicy {
    /// Called once per search, the stamp becomes part of every hotel id.
    fn batch_stamp(&mut self) -> Timestamp {
        Timestamp::now()
    }

    fn price(&mut self, index: usize) -> Price;

    fn rating(&mut self, index: usize) -> f64;

    fn address(&mut self, has_maps_uri: bool) -> String {
        let address = if has_maps_uri {
            VERIFIED_ADDRESS
        } else {
            UNVERIFIED_ADDRESS
        };
        address.to_string()
    }

    fn description(&mut self, _index: usize) -> String {
        HOTEL_DESCRIPTION.to_string()
    }

    fn image(&mut self, index: usize) -> String {
        photo_url(LUXURY_HOTEL_IMAGES[index % LUXURY_HOTEL_IMAGES.len()])
    }

    fn review_snippets(&mut self, _index: usize) -> Vec<String> {
        FALLBACK_REVIEW_SNIPPETS
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

/// Random prices and ratings within the luxury range.
#[derive(Debug)]
pub struct LuxurySynthesis<R> {
    rng: R,
}

impl<R: Rng> LuxurySynthesis<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SynthesisPolicy for LuxurySynthesis<R> {
    fn price(&mut self, _index: usize) -> Price {
        Price::from_dollars(self.rng.gen_range(MIN_PRICE..MAX_PRICE))
    }

    fn rating(&mut self, _index: usize) -> f64 {
        self.rng.gen_range(MIN_RATING..MAX_RATING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn prices_and_ratings_stay_in_range() {
        let mut policy = LuxurySynthesis::new(StdRng::seed_from_u64(7));
        for i in 0..1_000 {
            let amount = policy.price(i).amount().unwrap();
            assert!((MIN_PRICE..MAX_PRICE).contains(&amount));
            let rating = policy.rating(i);
            assert!((MIN_RATING..MAX_RATING).contains(&rating));
        }
    }

    #[test]
    fn same_seed_same_values() {
        let mut a = LuxurySynthesis::new(StdRng::seed_from_u64(42));
        let mut b = LuxurySynthesis::new(StdRng::seed_from_u64(42));
        for i in 0..10 {
            assert_eq!(a.price(i), b.price(i));
            assert_eq!(a.rating(i).to_bits(), b.rating(i).to_bits());
        }
    }

    #[test]
    fn images_round_robin() {
        let mut policy = LuxurySynthesis::new(StdRng::seed_from_u64(0));
        assert_eq!(policy.image(0), policy.image(8));
        assert_ne!(policy.image(0), policy.image(1));
        assert_eq!(
            policy.image(9),
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=800&q=80"
        );
    }

    #[test]
    fn placeholder_address() {
        let mut policy = LuxurySynthesis::new(StdRng::seed_from_u64(0));
        assert_eq!(policy.address(true), VERIFIED_ADDRESS);
        assert_eq!(policy.address(false), UNVERIFIED_ADDRESS);
    }
}
