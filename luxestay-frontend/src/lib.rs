use leptos::*;
use rand::{rngs::StdRng, SeedableRng};

use luxestay_core::{app::*, entities::*, synthesis::LuxurySynthesis, usecases};
use luxestay_frontend_api as api;

mod components;
mod geolocation;
mod pages;
mod session;

use self::{pages::*, session::LocalStorageSession};

const GEMINI_API_KEY: Option<&str> = option_env!("LUXESTAY_GEMINI_API_KEY");

pub type Controller = AppController<LocalStorageSession>;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- state -- //

    let (controller, restored) = AppController::new(LocalStorageSession);
    let app = RwSignal::new(controller);
    let screen = create_memo(move |_| app.with(|app| app.state().screen()));

    let gemini = api::GeminiApi::new(
        api::DEFAULT_API_URL.to_string(),
        api::DEFAULT_MODEL.to_string(),
        GEMINI_API_KEY.map(ToString::to_string),
    );
    let seed = u64::try_from(Timestamp::now().as_millis()).unwrap_or_default();
    let synthesis = store_value(LuxurySynthesis::new(StdRng::seed_from_u64(seed)));

    // -- actions -- //

    let search = create_action(move |request: &SearchRequest| {
        let SearchRequest { ticket, query } = request.clone();
        let gemini = gemini.clone();
        async move {
            log::info!("Searching hotels: {}", query.text);
            let prompt = usecases::search_prompt(&query.text);
            let response = gemini
                .maps_grounded(prompt, query.coordinates.map(Into::into))
                .await
                .map(GroundedAnswer::from);
            let result = synthesis
                .try_update_value(|policy| usecases::shape_search_response(response, policy))
                .unwrap_or_default();
            app.update(|app| {
                app.search_finished(ticket, result);
            });
        }
    });

    // -- callbacks -- //

    let on_location = move |coordinates: Option<Coordinates>| {
        if let Some(request) = app.try_update(|app| app.location_resolved(coordinates)) {
            search.dispatch(request);
        }
    };

    let on_authenticated = Callback::new(move |LocateDevice| {
        geolocation::current_position(on_location);
    });

    let on_search = Callback::new(move |request: SearchRequest| {
        search.dispatch(request);
    });

    if let Some(locate) = restored {
        log::debug!("Restored session");
        on_authenticated.call(locate);
    }

    move || {
        if screen.get().is_auth() {
            view! { <Auth app on_authenticated /> }.into_view()
        } else {
            view! { <Home app on_search /> }.into_view()
        }
    }
}
