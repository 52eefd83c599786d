use leptos::{
    wasm_bindgen::{closure::Closure, JsCast},
    window,
};
use web_sys::{GeolocationPosition, GeolocationPositionError};

use luxestay_core::entities::Coordinates;

/// Queries the device location once.
///
/// `on_resolved` is called exactly once, with `None`
/// if the location is unavailable or access is denied.
pub fn current_position<F>(on_resolved: F)
where
    F: Fn(Option<Coordinates>) + Clone + 'static,
{
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            log::warn!("Geolocation is not supported: {err:?}");
            on_resolved(None);
            return;
        }
    };
    let on_success = {
        let on_resolved = on_resolved.clone();
        Closure::once_into_js(move |position: GeolocationPosition| {
            let coords = position.coords();
            on_resolved(Some(Coordinates::new(coords.latitude(), coords.longitude())));
        })
    };
    let on_error = {
        let on_resolved = on_resolved.clone();
        Closure::once_into_js(move |err: GeolocationPositionError| {
            log::info!("Location access denied: {}", err.message());
            on_resolved(None);
        })
    };
    if let Err(err) = geolocation.get_current_position_with_error_callback(
        on_success.unchecked_ref(),
        Some(on_error.unchecked_ref()),
    ) {
        log::warn!("Unable to query location: {err:?}");
        on_resolved(None);
    }
}
