use leptos::*;

use luxestay_core::{app::*, entities::*, usecases, view::FilterChip};

use crate::{components::*, Controller};

const LOGOUT_QUESTION: &str = "¿Desea concluir su estancia?";

#[allow(clippy::too_many_lines)]
#[component]
pub fn Home(app: RwSignal<Controller>, on_search: Callback<SearchRequest>) -> impl IntoView {
    // -- derived state -- //

    let user_name = Signal::derive(move || {
        app.with(|app| {
            app.state()
                .user()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        })
    });
    let tab = create_memo(move |_| app.with(|app| app.state().tab()));
    let view_mode = create_memo(move |_| app.with(|app| app.state().view_mode()));
    let shows_map = create_memo(move |_| app.with(|app| app.state().shows_map()));
    let loading = create_memo(move |_| app.with(|app| app.state().is_loading()));
    let located = create_memo(move |_| app.with(|app| app.state().coordinates().is_some()));
    let narrative = create_memo(move |_| {
        app.with(|app| app.state().narrative().map(ToString::to_string))
    });
    let hotels = create_memo(move |_| app.with(|app| app.state().displayed_hotels().to_vec()));
    let result_count = create_memo(move |_| app.with(|app| app.state().hotels().len()));
    let average_price = create_memo(move |_| app.with(|app| app.state().average_price()));
    let favorites = create_memo(move |_| app.with(|app| app.state().favorites().to_vec()));
    let selected = create_memo(move |_| app.with(|app| app.state().selected().cloned()));

    let is_favorite =
        move |id: &Id| favorites.with(|favorites| usecases::is_favorite(favorites, id));
    let discovering = move || tab.get() == Tab::Discover;

    // -- callbacks -- //

    let on_logout = Callback::new(move |()| {
        if window().confirm_with_message(LOGOUT_QUESTION).unwrap_or(false) {
            app.update(|app| app.logout());
        }
    });

    let on_submit_search = Callback::new(move |query: String| {
        if let Some(request) = app.try_update(|app| app.submit_search(&query)).flatten() {
            on_search.call(request);
        }
    });

    let on_filter = Callback::new(move |chip: FilterChip| {
        app.with_untracked(|app| app.apply_filter(chip));
    });

    let on_select = Callback::new(move |hotel: Hotel| {
        app.update(|app| app.select_hotel(hotel));
    });

    let on_toggle_favorite = Callback::new(move |hotel: Hotel| {
        app.update(|app| {
            app.toggle_favorite(&hotel);
        });
    });

    let on_back = Callback::new(move |()| {
        app.update(|app| app.close_details());
    });

    let set_tab = move |tab: Tab| app.update(|app| app.set_tab(tab));
    let set_view_mode = move |mode: ViewMode| app.update(|app| app.set_view_mode(mode));

    let view_mode_class = move |mode: ViewMode| {
        if view_mode.get() == mode {
            "px-5 py-2.5 rounded-xl text-[10px] font-black uppercase tracking-widest bg-gold-500 text-white"
        } else {
            "px-5 py-2.5 rounded-xl text-[10px] font-black uppercase tracking-widest text-gray-400"
        }
    };

    let tab_class = move |t: Tab| {
        if tab.get() == t {
            "flex flex-col items-center text-gold-600"
        } else {
            "flex flex-col items-center text-gray-300"
        }
    };

    view! {
      <div class="min-h-screen bg-[#FDFCF8] flex flex-col">
        <Header user_name on_logout />
        <main class="flex-1 max-w-7xl mx-auto w-full px-4 py-8">
          <Show when=discovering>
            <SearchBar on_submit=on_submit_search />
            <FilterBar on_select=on_filter />
          </Show>
          <div class="flex flex-col md:flex-row md:items-end justify-between mb-10 gap-6">
            <div>
              <h2 class="text-4xl font-black text-gray-900 tracking-tighter">
                {move || if discovering() { "Descubrimiento" } else { "Colección Privada" }}
              </h2>
              <p class="text-gray-400 text-sm mt-2">
                {move || if discovering() {
                    format!("{} estancias exclusivas curadas para usted", result_count.get())
                  } else {
                    "Sus alojamientos favoritos guardados con distinción".to_string()
                  }
                }
              </p>
            </div>
            {move || discovering().then(|| average_price.get()).flatten().map(|price| view! {
              <div class="flex items-center space-x-3 bg-gold-50/50 self-start px-4 py-2 rounded-xl border border-gold-100/50">
                <i class="fas fa-chart-line text-gold-500 text-xs"></i>
                <span class="text-[9px] font-black text-gold-600 uppercase tracking-widest">"Promedio por noche"</span>
                <span class="text-sm font-black text-gold-700">{ price }</span>
              </div>
            })}
            <Show when=discovering>
              <div class="bg-white/50 backdrop-blur border border-gold-100/50 rounded-2xl p-1.5 flex shadow-sm shrink-0">
                <button class=move || view_mode_class(ViewMode::List) on:click=move |_| set_view_mode(ViewMode::List)>
                  <i class="fas fa-list-ul mr-2"></i>"Lista"
                </button>
                <button class=move || view_mode_class(ViewMode::Map) on:click=move |_| set_view_mode(ViewMode::Map)>
                  <i class="fas fa-map-marked-alt mr-2"></i>"Mapa"
                </button>
              </div>
            </Show>
          </div>
          {move || discovering().then(|| narrative.get()).flatten().map(|text| view! {
            <p class="bg-[#FAF9F6] p-6 rounded-3xl border-l-4 border-gold-400 mb-10 italic text-gray-600">{ text }</p>
          })}
          {move || if loading.get() {
              view! {
                <div class="flex flex-col items-center justify-center py-40">
                  <i class="fas fa-crown fa-spin text-lg text-gold-500"></i>
                  <p class="mt-4 text-[9px] font-black text-gold-600 uppercase tracking-widest">"Consultando a nuestro conserje"</p>
                </div>
              }.into_view()
            } else if shows_map.get() {
              view! { <MapView hotels=hotels.into() located=located.into() on_select /> }.into_view()
            } else if hotels.with(Vec::is_empty) {
              view! {
                <div class="col-span-full text-center py-40 bg-white/40 rounded-[3rem] border-2 border-dashed border-gold-200/50">
                  <i class="fas fa-gem text-gold-500 text-xl"></i>
                  <p class="mt-4 text-gray-400">
                    {if discovering() {
                        "No se han hallado resultados para su criterio."
                      } else {
                        "Su colección privada está esperando su primera joya."
                      }
                    }
                  </p>
                </div>
              }.into_view()
            } else {
              view! {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-10">
                  <For
                    each=move || hotels.get()
                    key=|hotel| hotel.id.clone()
                    children=move |hotel| {
                        let id = hotel.id.clone();
                        let is_favorite = Signal::derive(move || is_favorite(&id));
                        view! { <HotelCard hotel is_favorite on_select on_toggle_favorite /> }
                    }
                  />
                </div>
              }.into_view()
            }
          }
        </main>
        <nav class="bg-white/90 backdrop-blur-xl border-t border-gold-100/50 py-5 px-8 sticky bottom-0 z-40">
          <div class="flex justify-around items-center">
            <button class=move || tab_class(Tab::Discover) on:click=move |_| set_tab(Tab::Discover)>
              <i class="fas fa-compass"></i>
              <span class="text-[9px] font-black uppercase tracking-widest mt-1">"Explorar"</span>
            </button>
            <button class=move || tab_class(Tab::Favorites) on:click=move |_| set_tab(Tab::Favorites)>
              <i class="fas fa-gem"></i>
              <span class="text-[9px] font-black uppercase tracking-widest mt-1">"Muestrario"</span>
            </button>
          </div>
        </nav>
        {move || selected.get().map(|hotel| {
            let id = hotel.id.clone();
            let is_favorite = Signal::derive(move || is_favorite(&id));
            view! { <HotelDetails hotel is_favorite on_back on_toggle_favorite /> }
        })}
      </div>
    }
}
