use std::fmt;

use super::prelude::*;
use crate::{gateways::HotelSearchGateway, synthesis::*};

/// Used when the backend answers without any text.
pub const DEFAULT_NARRATIVE: &str =
    "He seleccionado personalmente estas estancias excepcionales para su próximo viaje.";

/// Returned instead of any kind of search failure.
pub const APOLOGY: &str = "Nuestros servicios de conserjería están experimentando alta demanda. \
     Por favor, intente de nuevo en unos momentos.";

pub const NEARBY_QUERY: &str = "hoteles de lujo cerca de mí";
pub const GENERIC_QUERY: &str = "hoteles de lujo en ciudades exclusivas";

pub fn search_prompt(query: &str) -> String {
    format!(
        "Eres un conserje de lujo de LuxeStay. Busca hoteles reales y exclusivos en {query}. \
         Proporciona el nombre real, dirección aproximada y una descripción sofisticada \
         en español que resalte la exclusividad."
    )
}

/// Maps every grounding chunk onto exactly one hotel,
/// keeping the order of the chunks.
pub fn shape_hotels<P>(chunks: Vec<GroundingChunk>, policy: &mut P) -> Vec<Hotel>
where
    P: SynthesisPolicy + ?Sized,
{
    let stamp = policy.batch_stamp();
    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| {
            let GroundingChunk {
                title,
                uri,
                review_snippets,
            } = chunk;
            let name = title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| placeholder_name(index));
            let address = policy.address(uri.is_some());
            let review_snippets = review_snippets.unwrap_or_else(|| policy.review_snippets(index));
            Hotel {
                id: format!("hotel-{index}-{stamp}").into(),
                name,
                rating: policy.rating(index),
                price_per_night: policy.price(index),
                description: policy.description(index),
                address,
                image: policy.image(index),
                distance: None,
                maps_url: uri,
                review_snippets: Some(review_snippets),
            }
        })
        .collect()
}

/// Turns the outcome of a grounded search into a result.
///
/// Failures never escape: they are logged and
/// replaced by an empty list and an apology.
pub fn shape_search_response<E, P>(
    response: std::result::Result<GroundedAnswer, E>,
    policy: &mut P,
) -> SearchResult
where
    E: fmt::Display,
    P: SynthesisPolicy + ?Sized,
{
    match response {
        Ok(GroundedAnswer { text, chunks }) => {
            let text = text
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NARRATIVE.to_string());
            let hotels = shape_hotels(chunks, policy);
            log::debug!("Found {} hotels", hotels.len());
            SearchResult { hotels, text }
        }
        Err(err) => {
            log::error!("Hotel search failed: {err}");
            SearchResult {
                hotels: vec![],
                text: APOLOGY.to_string(),
            }
        }
    }
}

pub fn search_hotels<G, P>(gateway: &G, policy: &mut P, query: &SearchQuery) -> SearchResult
where
    G: HotelSearchGateway + ?Sized,
    P: SynthesisPolicy + ?Sized,
{
    let SearchQuery { text, coordinates } = query;
    log::info!("Searching hotels: {text}");
    let prompt = search_prompt(text);
    let response = gateway.grounded_search(&prompt, *coordinates);
    shape_search_response(response, policy)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{FixedSynthesis, StubGateway},
        *,
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn chunk(title: Option<&str>, uri: Option<&str>) -> GroundingChunk {
        GroundingChunk {
            title: title.map(Into::into),
            uri: uri.map(Into::into),
            review_snippets: None,
        }
    }

    #[test]
    fn one_hotel_per_chunk() {
        let chunks = vec![
            chunk(Some("Hotel Akwa Palace"), Some("https://maps.google.com/?cid=1")),
            chunk(None, None),
            chunk(Some("La Falaise"), None),
        ];
        let mut policy = LuxurySynthesis::new(StdRng::seed_from_u64(1));
        let hotels = shape_hotels(chunks, &mut policy);
        assert_eq!(hotels.len(), 3);
        assert_eq!(hotels[0].name, "Hotel Akwa Palace");
        assert_eq!(hotels[1].name, "LuxeStay Signature 2");
        assert_eq!(hotels[2].name, "La Falaise");
        for hotel in &hotels {
            assert!(!hotel.name.is_empty());
            let price = hotel.price_per_night.as_str();
            assert!(price.starts_with('$'));
            assert!(price[1..].parse::<u64>().is_ok());
            assert!((MIN_RATING..MAX_RATING).contains(&hotel.rating));
        }
    }

    #[test]
    fn placeholder_fields() {
        let chunks = vec![
            chunk(Some("A"), Some("https://maps.google.com/?cid=1")),
            chunk(Some("B"), None),
        ];
        let hotels = shape_hotels(chunks, &mut FixedSynthesis::default());
        assert_eq!(hotels[0].address, VERIFIED_ADDRESS);
        assert_eq!(
            hotels[0].maps_url.as_deref(),
            Some("https://maps.google.com/?cid=1")
        );
        assert_eq!(hotels[1].address, UNVERIFIED_ADDRESS);
        assert!(hotels[1].maps_url.is_none());
        assert_eq!(hotels[0].id.as_str(), "hotel-0-1700000000000");
        assert_eq!(hotels[1].id.as_str(), "hotel-1-1700000000000");
        assert_eq!(hotels[1].price_per_night.as_str(), "$300");
        assert_eq!(hotels[1].description, HOTEL_DESCRIPTION);
    }

    #[test]
    fn chunk_reviews_take_precedence() {
        let mut with_reviews = chunk(Some("A"), None);
        with_reviews.review_snippets = Some(vec!["Servicio impecable".into()]);
        let chunks = vec![with_reviews, chunk(Some("B"), None)];
        let hotels = shape_hotels(chunks, &mut FixedSynthesis::default());
        assert_eq!(
            hotels[0].review_snippets,
            Some(vec!["Servicio impecable".to_string()])
        );
        assert_eq!(hotels[1].review_snippets.as_ref().unwrap().len(), 3);
        assert_eq!(
            hotels[1].review_snippets.as_ref().unwrap()[0],
            FALLBACK_REVIEW_SNIPPETS[0]
        );
    }

    #[test]
    fn default_narrative() {
        let answer = GroundedAnswer {
            text: None,
            chunks: vec![],
        };
        let res = shape_search_response::<String, _>(Ok(answer), &mut FixedSynthesis::default());
        assert!(res.hotels.is_empty());
        assert_eq!(res.text, DEFAULT_NARRATIVE);
    }

    #[test]
    fn blank_title_and_text_fall_back() {
        let answer = GroundedAnswer {
            text: Some("  ".into()),
            chunks: vec![chunk(Some(""), None), chunk(Some(" \n"), None)],
        };
        let res = shape_search_response::<String, _>(Ok(answer), &mut FixedSynthesis::default());
        assert_eq!(res.text, DEFAULT_NARRATIVE);
        assert_eq!(res.hotels[0].name, "LuxeStay Signature 1");
        assert_eq!(res.hotels[1].name, "LuxeStay Signature 2");
    }

    #[test]
    fn failure_yields_apology() {
        let res = shape_search_response::<_, _>(
            Err("connection refused"),
            &mut FixedSynthesis::default(),
        );
        assert_eq!(
            res,
            SearchResult {
                hotels: vec![],
                text: APOLOGY.to_string()
            }
        );
    }

    #[test]
    fn search_with_gateway() {
        let gateway = StubGateway::answering(GroundedAnswer {
            text: Some("Estas son mis recomendaciones.".into()),
            chunks: vec![chunk(Some("Hilton Yaoundé"), None)],
        });
        let query = SearchQuery {
            text: "Yaoundé".into(),
            coordinates: Some(Coordinates::new(3.87, 11.52)),
        };
        let res = search_hotels(&gateway, &mut FixedSynthesis::default(), &query);
        assert_eq!(res.text, "Estas son mis recomendaciones.");
        assert_eq!(res.hotels.len(), 1);
        let requests = gateway.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].0.contains("hoteles reales y exclusivos en Yaoundé"));
        assert_eq!(requests[0].1, Some(Coordinates::new(3.87, 11.52)));
    }

    #[test]
    fn search_with_failing_gateway() {
        let gateway = StubGateway::failing("timeout");
        let query = SearchQuery {
            text: "Paris".into(),
            coordinates: None,
        };
        let res = search_hotels(&gateway, &mut FixedSynthesis::default(), &query);
        assert!(res.hotels.is_empty());
        assert_eq!(res.text, APOLOGY);
    }
}
