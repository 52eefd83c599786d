use crate::entities::{Coordinates, GroundedAnswer};

/// A generative backend that answers a prompt
/// with results grounded on real places.
pub trait HotelSearchGateway {
    fn grounded_search(
        &self,
        prompt: &str,
        coordinates: Option<Coordinates>,
    ) -> anyhow::Result<GroundedAnswer>;
}
