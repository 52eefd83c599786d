use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use luxestay_core::{
    app::{AppController, LocateDevice, Screen, SearchRequest},
    entities::{Coordinates, Hotel},
    gateways::HotelSearchGateway,
    repositories::{FavoritesRepo, UserRepo},
    synthesis::SynthesisPolicy,
    usecases,
    view::FilterChip,
};

use crate::{
    cli::{Command, Line},
    render,
};

const WELCOME: &str = "Bienvenido a LuxeStay. Escriba 'help' para ver los comandos.";
const LOGOUT_QUESTION: &str = "¿Desea concluir su estancia? [s/N] ";
const GOODBYE: &str = "Hasta pronto.";
const LOGIN_REQUIRED: &str = "Acceda primero con 'login' o 'signup'.";
const ALREADY_LOGGED_IN: &str = "Ya se encuentra en su suite. Use 'logout' para salir.";

/// Interactive session on a terminal.
///
/// The location is fixed at startup and searches run
/// synchronously, so there is never more than one
/// search in flight.
pub struct Repl<R, G, P> {
    app: AppController<R>,
    gateway: G,
    synthesis: P,
    location: Option<Coordinates>,
    pending: Option<LocateDevice>,
}

impl<R, G, P> Repl<R, G, P>
where
    R: UserRepo + FavoritesRepo,
    G: HotelSearchGateway,
    P: SynthesisPolicy,
{
    pub fn new(repo: R, gateway: G, synthesis: P, location: Option<Coordinates>) -> Self {
        let (app, pending) = AppController::new(repo);
        Self {
            app,
            gateway,
            synthesis,
            location,
            pending,
        }
    }

    pub fn run<I, O>(&mut self, mut input: I, mut out: O) -> io::Result<()>
    where
        I: BufRead,
        O: Write,
    {
        writeln!(out, "{WELCOME}")?;
        self.refresh(&mut out)?;
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }
            let command = match Line::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    write!(out, "{}", err.render())?;
                    continue;
                }
            };
            if self.execute(command, &mut input, &mut out)?.is_break() {
                break;
            }
        }
        writeln!(out, "{GOODBYE}")
    }

    fn execute<I, O>(
        &mut self,
        command: Command,
        input: &mut I,
        out: &mut O,
    ) -> io::Result<ControlFlow<()>>
    where
        I: BufRead,
        O: Write,
    {
        let screen = self.app.state().screen();
        match command {
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::Login { .. } | Command::Signup { .. } if !screen.is_auth() => {
                writeln!(out, "{ALREADY_LOGGED_IN}")?;
                return Ok(ControlFlow::Continue(()));
            }
            Command::Login { email, password } => {
                if screen != Screen::Login {
                    self.app.toggle_auth_mode();
                }
                self.pending = self.app.login(&email, &password);
            }
            Command::Signup {
                email,
                password,
                name,
            } => {
                if screen == Screen::Login {
                    self.app.toggle_auth_mode();
                }
                let name = name.join(" ");
                self.pending = Some(self.app.signup(&email, &password, Some(name.as_str())));
            }
            _ if screen.is_auth() => {
                writeln!(out, "{LOGIN_REQUIRED}")?;
                return Ok(ControlFlow::Continue(()));
            }
            Command::Logout => {
                write!(out, "{LOGOUT_QUESTION}")?;
                out.flush()?;
                let mut answer = String::new();
                input.read_line(&mut answer)?;
                if !is_yes(&answer) {
                    return Ok(ControlFlow::Continue(()));
                }
                self.app.logout();
            }
            Command::Search { query } => {
                if let Some(request) = self.app.submit_search(&query.join(" ")) {
                    self.search(request, out)?;
                }
            }
            Command::Tab { tab } => self.app.set_tab(tab.into()),
            Command::View { mode } => self.app.set_view_mode(mode.into()),
            Command::Fav { number } => {
                let Some(hotel) = self.listed_hotel(number) else {
                    return not_listed(out, number);
                };
                self.app.toggle_favorite(&hotel);
            }
            Command::Show { number } => {
                let Some(hotel) = self.listed_hotel(number) else {
                    return not_listed(out, number);
                };
                self.app.select_hotel(hotel);
            }
            Command::Close => self.app.close_details(),
            Command::Filter { chip } => {
                let chip: FilterChip = chip.into();
                self.app.apply_filter(chip);
                writeln!(out, "Filtro seleccionado: {}", chip.label())?;
                return Ok(ControlFlow::Continue(()));
            }
            Command::Whoami => {
                if let Some(user) = self.app.state().user() {
                    writeln!(out, "{} <{}>", user.name, user.email)?;
                }
                return Ok(ControlFlow::Continue(()));
            }
        }
        self.refresh(out)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Runs the initial search if the member just entered.
    fn refresh<O: Write>(&mut self, out: &mut O) -> io::Result<()> {
        if self.pending.take().is_some() {
            let request = self.app.location_resolved(self.location);
            self.search(request, out)?;
        }
        render::state(out, self.app.state())
    }

    fn search<O: Write>(&mut self, request: SearchRequest, out: &mut O) -> io::Result<()> {
        writeln!(out, "Consultando a nuestro conserje...")?;
        out.flush()?;
        let SearchRequest { ticket, query } = request;
        let result = usecases::search_hotels(&self.gateway, &mut self.synthesis, &query);
        self.app.search_finished(ticket, result);
        Ok(())
    }

    /// Hotels are numbered from 1 as they are listed.
    fn listed_hotel(&self, number: usize) -> Option<Hotel> {
        let index = number.checked_sub(1)?;
        self.app.state().displayed_hotels().get(index).cloned()
    }
}

fn not_listed<O: Write>(out: &mut O, number: usize) -> io::Result<ControlFlow<()>> {
    writeln!(out, "No hay ninguna estancia con el número {number}.")?;
    Ok(ControlFlow::Continue(()))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}
