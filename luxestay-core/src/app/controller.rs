use super::state::*;
use crate::{
    entities::*,
    repositories::{FavoritesRepo, UserRepo},
    usecases::{self, Credentials},
    view::FilterChip,
};

/// Shown below the authentication form.
pub const INVALID_CREDENTIALS: &str = "Credenciales de membresía inválidas.";

/// Identifies an issued search.
///
/// Only the completion of the latest ticket is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

/// A search the host has to run and report back
/// with [`AppController::search_finished`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
    pub query: SearchQuery,
}

/// Asks the host to query the device location once
/// and to report back with [`AppController::location_resolved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocateDevice;

#[derive(Debug)]
pub struct AppController<R> {
    repo: R,
    state: AppState,
    last_ticket: u64,
}

impl<R> AppController<R>
where
    R: UserRepo + FavoritesRepo,
{
    /// Restores the persisted session.
    ///
    /// A restored user skips the authentication screen
    /// but the host still has to locate the device to
    /// get initial results.
    pub fn new(repo: R) -> (Self, Option<LocateDevice>) {
        let usecases::RestoredSession { user, favorites } = usecases::restore_session(&repo);
        let screen = if user.is_some() {
            Screen::Home
        } else {
            Screen::Login
        };
        let locate = user.as_ref().map(|_| LocateDevice);
        let state = AppState {
            screen,
            user,
            favorites,
            ..Default::default()
        };
        let controller = Self {
            repo,
            state,
            last_ticket: 0,
        };
        (controller, locate)
    }

    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Switches between login and signup.
    pub fn toggle_auth_mode(&mut self) {
        self.state.screen = match self.state.screen {
            Screen::Login => Screen::Signup,
            Screen::Signup => Screen::Login,
            Screen::Home => return,
        };
        self.state.auth_error = None;
    }

    pub fn login(&mut self, email: &str, password: &str) -> Option<LocateDevice> {
        let credentials = Credentials { email, password };
        match usecases::login(&credentials, Timestamp::now()) {
            Ok(user) => Some(self.enter(user)),
            Err(err) => {
                log::debug!("Login rejected: {err}");
                self.state.auth_error = Some(INVALID_CREDENTIALS.to_string());
                None
            }
        }
    }

    pub fn signup(&mut self, email: &str, password: &str, name: Option<&str>) -> LocateDevice {
        let credentials = Credentials { email, password };
        let user = usecases::signup(&credentials, name, Timestamp::now());
        self.enter(user)
    }

    fn enter(&mut self, user: User) -> LocateDevice {
        if let Err(err) = usecases::start_session(&self.repo, &user) {
            log::error!("Unable to persist user: {err}");
        }
        self.state.user = Some(user);
        self.state.auth_error = None;
        self.state.screen = Screen::Home;
        LocateDevice
    }

    /// Issues the initial search, biased by the location if it is known.
    pub fn location_resolved(&mut self, coordinates: Option<Coordinates>) -> SearchRequest {
        let query = match coordinates {
            Some(c) => {
                log::debug!("Device located at {}, {}", c.lat, c.lng);
                usecases::NEARBY_QUERY
            }
            None => {
                log::info!("Device location unavailable");
                usecases::GENERIC_QUERY
            }
        };
        self.state.coordinates = coordinates;
        self.issue_search(query.to_string())
    }

    /// Blank queries and searches without a user are ignored.
    pub fn submit_search(&mut self, query: &str) -> Option<SearchRequest> {
        let query = query.trim();
        if query.is_empty() || self.state.screen != Screen::Home {
            return None;
        }
        Some(self.issue_search(query.to_string()))
    }

    fn issue_search(&mut self, text: String) -> SearchRequest {
        self.last_ticket += 1;
        self.state.loading = true;
        SearchRequest {
            ticket: SearchTicket(self.last_ticket),
            query: SearchQuery {
                text,
                coordinates: self.state.coordinates,
            },
        }
    }

    /// Applies the result of the latest search.
    ///
    /// Returns `false` if the result belongs to an outdated search.
    pub fn search_finished(&mut self, ticket: SearchTicket, result: SearchResult) -> bool {
        if ticket != SearchTicket(self.last_ticket) {
            log::debug!("Discarding outdated search result {ticket:?}");
            return false;
        }
        let SearchResult { hotels, text } = result;
        self.state.hotels = hotels;
        self.state.narrative = Some(text);
        self.state.tab = Tab::Discover;
        self.state.loading = false;
        true
    }

    /// Favorites survive the logout, pending searches don't.
    pub fn logout(&mut self) {
        if let Err(err) = usecases::end_session(&self.repo) {
            log::error!("Unable to clear user: {err}");
        }
        self.last_ticket += 1;
        self.state.user = None;
        self.state.selected = None;
        self.state.loading = false;
        self.state.screen = Screen::Login;
    }

    pub fn select_hotel(&mut self, hotel: Hotel) {
        self.state.selected = Some(hotel);
    }

    pub fn close_details(&mut self) {
        self.state.selected = None;
    }

    /// Returns whether the hotel is a favorite afterwards.
    pub fn toggle_favorite(&mut self, hotel: &Hotel) -> bool {
        usecases::toggle_and_save_favorite(&self.repo, &mut self.state.favorites, hotel)
            .unwrap_or_else(|err| {
                log::error!("Unable to persist favorites: {err}");
                self.state.is_favorite(&hotel.id)
            })
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.state.tab = tab;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    /// Filters are not applied to the results.
    pub fn apply_filter(&self, chip: FilterChip) {
        log::info!("Filter selected: {}", chip.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{tests::MockDb, ADMIN_EMAIL, ADMIN_PASSWORD};
    use luxestay_entities::builders::Builder;

    fn hotel(id: &str) -> Hotel {
        Hotel::build().id(id).name(id).finish()
    }

    fn result(ids: &[&str], text: &str) -> SearchResult {
        SearchResult {
            hotels: ids.iter().copied().map(hotel).collect(),
            text: text.to_string(),
        }
    }

    fn logged_in() -> AppController<MockDb> {
        let (mut app, locate) = AppController::new(MockDb::default());
        assert!(locate.is_none());
        assert!(app.login("alexander.knight@mail.cm", "secret").is_some());
        app
    }

    #[test]
    fn start_on_login_screen() {
        let (app, locate) = AppController::new(MockDb::default());
        assert_eq!(app.state().screen(), Screen::Login);
        assert!(app.state().user().is_none());
        assert!(locate.is_none());
    }

    #[test]
    fn restore_user_and_favorites() {
        let db = MockDb::default();
        *db.user.borrow_mut() = Some(User::build().finish());
        *db.favorites.borrow_mut() = vec![hotel("a")];
        let (app, locate) = AppController::new(db);
        assert_eq!(app.state().screen(), Screen::Home);
        assert_eq!(locate, Some(LocateDevice));
        assert!(app.state().is_favorite(&"a".into()));
    }

    #[test]
    fn start_with_corrupt_records() {
        let db = MockDb::default();
        *db.corrupt.borrow_mut() = true;
        let (app, _) = AppController::new(db);
        assert_eq!(app.state().screen(), Screen::Login);
        assert!(app.state().favorites().is_empty());
    }

    #[test]
    fn login_as_admin() {
        let (mut app, _) = AppController::new(MockDb::default());
        assert_eq!(app.login(ADMIN_EMAIL, ADMIN_PASSWORD), Some(LocateDevice));
        assert_eq!(app.state().screen(), Screen::Home);
        assert_eq!(app.state().user().unwrap().name, "VIP Admin");
        assert_eq!(app.repo.user.borrow().as_ref().unwrap().name, "VIP Admin");
    }

    #[test]
    fn reject_invalid_login() {
        let (mut app, _) = AppController::new(MockDb::default());
        assert!(app.login("alexander.knight", "secret").is_none());
        assert_eq!(app.state().screen(), Screen::Login);
        assert_eq!(app.state().auth_error(), Some(INVALID_CREDENTIALS));
        assert!(app.repo.user.borrow().is_none());
    }

    #[test]
    fn toggling_auth_mode_clears_error() {
        let (mut app, _) = AppController::new(MockDb::default());
        app.login("nobody", "");
        app.toggle_auth_mode();
        assert_eq!(app.state().screen(), Screen::Signup);
        assert!(app.state().auth_error().is_none());
        app.toggle_auth_mode();
        assert_eq!(app.state().screen(), Screen::Login);
    }

    #[test]
    fn signup_always_succeeds() {
        let (mut app, _) = AppController::new(MockDb::default());
        app.toggle_auth_mode();
        app.signup("whatever", "", None);
        assert_eq!(app.state().screen(), Screen::Home);
        assert_eq!(
            app.state().user().unwrap().name,
            usecases::DEFAULT_GUEST_NAME
        );
    }

    #[test]
    fn nearby_search_if_located() {
        let mut app = logged_in();
        let coords = Coordinates::new(4.05, 9.7);
        let req = app.location_resolved(Some(coords));
        assert_eq!(req.query.text, usecases::NEARBY_QUERY);
        assert_eq!(req.query.coordinates, Some(coords));
        assert!(app.state().is_loading());
    }

    #[test]
    fn generic_search_if_location_denied() {
        let mut app = logged_in();
        let req = app.location_resolved(None);
        assert_eq!(req.query.text, usecases::GENERIC_QUERY);
        assert!(req.query.coordinates.is_none());
    }

    #[test]
    fn ignore_blank_search() {
        let mut app = logged_in();
        assert!(app.submit_search("   ").is_none());
        assert!(!app.state().is_loading());
    }

    #[test]
    fn ignore_search_without_user() {
        let (mut app, _) = AppController::new(MockDb::default());
        assert!(app.submit_search("Paris").is_none());
    }

    #[test]
    fn search_uses_last_known_location() {
        let mut app = logged_in();
        let coords = Coordinates::new(3.87, 11.52);
        app.location_resolved(Some(coords));
        let req = app.submit_search(" Kribi ").unwrap();
        assert_eq!(req.query.text, "Kribi");
        assert_eq!(req.query.coordinates, Some(coords));
    }

    #[test]
    fn results_replace_previous_ones() {
        let mut app = logged_in();
        let req = app.location_resolved(None);
        assert!(app.search_finished(req.ticket, result(&["a", "b"], "first")));
        app.set_tab(Tab::Favorites);
        let req = app.submit_search("Douala").unwrap();
        assert!(app.search_finished(req.ticket, result(&["c"], "second")));
        let state = app.state();
        assert_eq!(state.hotels().len(), 1);
        assert_eq!(state.narrative(), Some("second"));
        assert_eq!(state.tab(), Tab::Discover);
        assert!(!state.is_loading());
    }

    #[test]
    fn discard_outdated_results() {
        let mut app = logged_in();
        let first = app.location_resolved(None);
        let second = app.submit_search("Limbe").unwrap();
        assert!(first.ticket < second.ticket);
        assert!(app.search_finished(second.ticket, result(&["new"], "new")));
        assert!(!app.search_finished(first.ticket, result(&["old"], "old")));
        assert_eq!(app.state().hotels()[0].id.as_str(), "new");
        assert_eq!(app.state().narrative(), Some("new"));
    }

    #[test]
    fn keep_loading_until_latest_search_finished() {
        let mut app = logged_in();
        let first = app.location_resolved(None);
        app.submit_search("Limbe").unwrap();
        app.search_finished(first.ticket, result(&["old"], "old"));
        assert!(app.state().is_loading());
        assert!(app.state().hotels().is_empty());
    }

    #[test]
    fn logout_keeps_favorites() {
        let mut app = logged_in();
        assert!(app.toggle_favorite(&hotel("a")));
        app.select_hotel(hotel("a"));
        let pending = app.submit_search("Paris").unwrap();
        app.logout();
        assert_eq!(app.state().screen(), Screen::Login);
        assert!(app.state().user().is_none());
        assert!(app.state().selected().is_none());
        assert!(app.repo.user.borrow().is_none());
        assert_eq!(app.repo.favorites.borrow().len(), 1);
        assert!(!app.search_finished(pending.ticket, result(&["x"], "late")));
    }

    #[test]
    fn toggle_and_persist_favorites() {
        let mut app = logged_in();
        let a = hotel("a");
        assert!(app.toggle_favorite(&a));
        assert!(app.state().is_favorite(&a.id));
        assert!(!app.toggle_favorite(&a));
        assert!(!app.state().is_favorite(&a.id));
        assert_eq!(*app.repo.favorite_writes.borrow(), 2);
        assert!(app.repo.favorites.borrow().is_empty());
    }

    #[test]
    fn displayed_hotels_depend_on_tab() {
        let mut app = logged_in();
        let req = app.location_resolved(None);
        app.search_finished(req.ticket, result(&["a", "b"], ""));
        app.toggle_favorite(&hotel("b"));
        assert_eq!(app.state().displayed_hotels().len(), 2);
        app.set_tab(Tab::Favorites);
        assert_eq!(app.state().displayed_hotels().len(), 1);
        assert_eq!(app.state().displayed_hotels()[0].id.as_str(), "b");
    }

    #[test]
    fn map_only_while_discovering() {
        let mut app = logged_in();
        app.set_view_mode(ViewMode::Map);
        assert!(app.state().shows_map());
        app.set_tab(Tab::Favorites);
        assert!(!app.state().shows_map());
    }

    #[test]
    fn details_overlay() {
        let mut app = logged_in();
        app.select_hotel(hotel("a"));
        assert_eq!(app.state().selected().unwrap().id.as_str(), "a");
        app.close_details();
        assert!(app.state().selected().is_none());
    }
}
