use super::*;
use luxestay_entities as e;

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User { id, email, name } = from;
        Self {
            id: id.into(),
            email,
            name,
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User { id, email, name } = from;
        Self {
            id: id.into(),
            email,
            name,
        }
    }
}

impl From<e::hotel::Hotel> for Hotel {
    fn from(from: e::hotel::Hotel) -> Self {
        let e::hotel::Hotel {
            id,
            name,
            rating,
            price_per_night,
            description,
            address,
            image,
            distance,
            maps_url,
            review_snippets,
        } = from;
        Self {
            id: id.into(),
            name,
            rating,
            price_per_night: price_per_night.into(),
            description,
            address,
            image,
            distance,
            google_maps_url: maps_url,
            review_snippets,
        }
    }
}

impl From<Hotel> for e::hotel::Hotel {
    fn from(from: Hotel) -> Self {
        let Hotel {
            id,
            name,
            rating,
            price_per_night,
            description,
            address,
            image,
            distance,
            google_maps_url,
            review_snippets,
        } = from;
        Self {
            id: id.into(),
            name,
            rating,
            price_per_night: price_per_night.into(),
            description,
            address,
            image,
            distance,
            maps_url: google_maps_url,
            review_snippets,
        }
    }
}

impl From<e::geo::Coordinates> for gemini::LatLng {
    fn from(from: e::geo::Coordinates) -> Self {
        let e::geo::Coordinates { lat, lng } = from;
        Self {
            latitude: lat,
            longitude: lng,
        }
    }
}

impl From<gemini::MapsChunk> for e::grounding::GroundingChunk {
    fn from(from: gemini::MapsChunk) -> Self {
        let gemini::MapsChunk {
            uri,
            title,
            place_answer_sources,
            ..
        } = from;
        let review_snippets = place_answer_sources
            .and_then(|sources| sources.review_snippets)
            .map(|snippets| {
                snippets
                    .into_iter()
                    .filter_map(gemini::ReviewSnippet::into_text)
                    .collect::<Vec<_>>()
            })
            .filter(|snippets| !snippets.is_empty());
        Self {
            title: title.filter(|t| !t.trim().is_empty()),
            uri: uri.filter(|u| !u.trim().is_empty()),
            review_snippets,
        }
    }
}

impl From<gemini::GenerateContentResponse> for e::grounding::GroundedAnswer {
    fn from(from: gemini::GenerateContentResponse) -> Self {
        let text = from.text();
        let chunks = from
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.grounding_metadata)
            .map(|m| m.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            // Chunks without map data still count,
            // they will get a placeholder name.
            .map(|chunk| {
                chunk
                    .maps
                    .map(e::grounding::GroundingChunk::from)
                    .unwrap_or_default()
            })
            .collect();
        Self { text, chunks }
    }
}
