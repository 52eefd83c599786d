use std::cell::RefCell;

use crate::{
    entities::*,
    gateways::HotelSearchGateway,
    repositories::{Error as RepoError, *},
    synthesis::SynthesisPolicy,
};

#[derive(Default)]
pub struct MockDb {
    pub user: RefCell<Option<User>>,
    pub favorites: RefCell<Vec<Hotel>>,
    pub favorite_writes: RefCell<usize>,
    /// Simulates records that can no longer be parsed.
    pub corrupt: RefCell<bool>,
}

impl MockDb {
    fn check_corruption(&self) -> Result<()> {
        if *self.corrupt.borrow() {
            return Err(RepoError::Malformed("expected value at line 1 column 1".into()));
        }
        Ok(())
    }
}

impl UserRepo for MockDb {
    fn load_user(&self) -> Result<Option<User>> {
        self.check_corruption()?;
        Ok(self.user.borrow().clone())
    }
    fn save_user(&self, user: &User) -> Result<()> {
        *self.user.borrow_mut() = Some(user.clone());
        Ok(())
    }
    fn clear_user(&self) -> Result<()> {
        *self.user.borrow_mut() = None;
        Ok(())
    }
}

impl FavoritesRepo for MockDb {
    fn load_favorites(&self) -> Result<Vec<Hotel>> {
        self.check_corruption()?;
        Ok(self.favorites.borrow().clone())
    }
    fn save_favorites(&self, favorites: &[Hotel]) -> Result<()> {
        *self.favorites.borrow_mut() = favorites.to_vec();
        *self.favorite_writes.borrow_mut() += 1;
        Ok(())
    }
}

/// Records every request and replays a canned outcome.
pub struct StubGateway {
    answer: std::result::Result<GroundedAnswer, String>,
    pub requests: RefCell<Vec<(String, Option<Coordinates>)>>,
}

impl StubGateway {
    pub fn answering(answer: GroundedAnswer) -> Self {
        Self {
            answer: Ok(answer),
            requests: RefCell::default(),
        }
    }
    pub fn failing(msg: &str) -> Self {
        Self {
            answer: Err(msg.to_string()),
            requests: RefCell::default(),
        }
    }
}

impl HotelSearchGateway for StubGateway {
    fn grounded_search(
        &self,
        prompt: &str,
        coordinates: Option<Coordinates>,
    ) -> anyhow::Result<GroundedAnswer> {
        self.requests
            .borrow_mut()
            .push((prompt.to_string(), coordinates));
        self.answer.clone().map_err(anyhow::Error::msg)
    }
}

/// Deterministic synthesis: $300, rating 4.8, fixed stamp.
#[derive(Default)]
pub struct FixedSynthesis;

impl SynthesisPolicy for FixedSynthesis {
    fn batch_stamp(&mut self) -> Timestamp {
        Timestamp::from_millis(1_700_000_000_000)
    }
    fn price(&mut self, _: usize) -> Price {
        Price::from_dollars(300)
    }
    fn rating(&mut self, _: usize) -> f64 {
        4.8
    }
}
