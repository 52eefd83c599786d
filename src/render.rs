//! Text views of the application state.

use std::io::{self, Write};

use luxestay_core::{
    app::{AppState, Screen, Tab},
    entities::Hotel,
    view::{format_rating, MapPlacement, AMENITIES, SELECTION_NOTE},
};

const MAP_ROWS: usize = 20;
const MAP_COLS: usize = 60;

const NO_RESULTS: &str = "No se han hallado resultados para su criterio.";
const EMPTY_COLLECTION: &str = "Su colección privada está esperando su primera joya.";

pub fn state<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    match (state.screen(), state.selected()) {
        (Screen::Login | Screen::Signup, _) => auth(out, state),
        (Screen::Home, Some(hotel)) => details(out, hotel, state.is_favorite(&hotel.id)),
        (Screen::Home, None) => home(out, state),
    }
}

pub fn auth<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    let title = match state.screen() {
        Screen::Signup => "Inaugurar Membresía",
        _ => "Acceso Exclusivo",
    };
    writeln!(out, "LuxeStay · {title}")?;
    if let Some(err) = state.auth_error() {
        writeln!(out, "! {err}")?;
    }
    writeln!(out, "  login <email> <contraseña>")?;
    writeln!(out, "  signup <email> <contraseña> [nombre]")
}

pub fn home<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    if let Some(user) = state.user() {
        writeln!(out, "LuxeStay · {}", user.name)?;
    }
    if state.is_loading() {
        return writeln!(out, "Consultando a nuestro conserje...");
    }
    let hotels = state.displayed_hotels();
    match state.tab() {
        Tab::Discover => {
            writeln!(out, "== Descubrimiento ==")?;
            writeln!(
                out,
                "{} estancias exclusivas curadas para usted",
                hotels.len()
            )?;
            if let Some(price) = state.average_price() {
                writeln!(out, "Promedio por noche: {price}")?;
            }
            if let Some(text) = state.narrative() {
                writeln!(out)?;
                writeln!(out, "{text}")?;
            }
        }
        Tab::Favorites => {
            writeln!(out, "== Colección Privada ==")?;
            writeln!(out, "Sus alojamientos favoritos guardados con distinción")?;
        }
    }
    writeln!(out)?;
    if hotels.is_empty() {
        let empty = match state.tab() {
            Tab::Discover => NO_RESULTS,
            Tab::Favorites => EMPTY_COLLECTION,
        };
        return writeln!(out, "{empty}");
    }
    if state.shows_map() {
        map(out, hotels, state.coordinates().is_some())
    } else {
        list(out, hotels, |hotel| state.is_favorite(&hotel.id))
    }
}

pub fn list<W, F>(out: &mut W, hotels: &[Hotel], is_favorite: F) -> io::Result<()>
where
    W: Write,
    F: Fn(&Hotel) -> bool,
{
    for (index, hotel) in hotels.iter().enumerate() {
        let heart = if is_favorite(hotel) { "♥" } else { " " };
        writeln!(
            out,
            "{:>2}. {heart} {}  ★ {}  {} / noche",
            index + 1,
            hotel.name,
            format_rating(hotel.rating),
            hotel.price_per_night.xaf_display()
        )?;
        writeln!(out, "       {}", hotel.address)?;
    }
    Ok(())
}

fn marker(index: usize) -> char {
    u32::try_from(index + 1)
        .ok()
        .and_then(|n| char::from_digit(n, 36))
        .unwrap_or('*')
}

const fn cell(MapPlacement { top, left }: MapPlacement) -> (usize, usize) {
    (top * MAP_ROWS / 100, left * MAP_COLS / 100)
}

/// Hotels are numbered like in the list, `@` marks the member.
pub fn map<W: Write>(out: &mut W, hotels: &[Hotel], located: bool) -> io::Result<()> {
    let mut grid = vec![vec!['·'; MAP_COLS]; MAP_ROWS];
    if located {
        let (row, col) = cell(MapPlacement::CENTER);
        grid[row][col] = '@';
    }
    for index in 0..hotels.len() {
        let (row, col) = cell(MapPlacement::of_index(index));
        grid[row][col] = marker(index);
    }
    let border = "-".repeat(MAP_COLS);
    writeln!(out, "+{border}+")?;
    for row in grid {
        writeln!(out, "|{}|", row.into_iter().collect::<String>())?;
    }
    writeln!(out, "+{border}+")?;
    for (index, hotel) in hotels.iter().enumerate() {
        writeln!(
            out,
            " {} {}  {}",
            marker(index),
            hotel.name,
            hotel.price_per_night.xaf_display()
        )?;
    }
    Ok(())
}

pub fn details<W: Write>(out: &mut W, hotel: &Hotel, is_favorite: bool) -> io::Result<()> {
    writeln!(out, "Categoría Platino")?;
    writeln!(
        out,
        "{}{}",
        hotel.name,
        if is_favorite { "  ♥" } else { "" }
    )?;
    writeln!(out, "{}", hotel.address)?;
    writeln!(
        out,
        "★ {}  ·  {} / noche",
        format_rating(hotel.rating),
        hotel.price_per_night.xaf_display()
    )?;
    let amenities: Vec<_> = AMENITIES.iter().map(|a| a.label).collect();
    writeln!(out, "{}", amenities.join("  ·  "))?;
    writeln!(out)?;
    writeln!(out, "Propuesta de Valor")?;
    writeln!(out, "{} {SELECTION_NOTE}", hotel.description)?;
    for review in hotel.review_snippets.iter().flatten() {
        writeln!(out, "  « {review} »")?;
    }
    if let Some(url) = &hotel.maps_url {
        writeln!(out, "Google Maps: {url}")?;
    }
    writeln!(out)?;
    writeln!(out, "[Asegurar Reserva] (close para volver)")
}
