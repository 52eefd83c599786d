use leptos::*;

use luxestay_core::{
    entities::Hotel,
    view::{format_rating, MapPlacement},
};

fn position_style(MapPlacement { top, left }: MapPlacement) -> String {
    format!("top: {top}%; left: {left}%")
}

/// A simulated map: markers are scattered by index, not geocoded.
#[component]
pub fn MapView(
    hotels: Signal<Vec<Hotel>>,
    located: Signal<bool>,
    on_select: Callback<Hotel>,
) -> impl IntoView {
    let markers = move || {
        hotels
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, hotel)| {
                let style = position_style(MapPlacement::of_index(index));
                let rating = format_rating(hotel.rating);
                let price = hotel.price_per_night.xaf_display();
                let name = hotel.name.clone();
                view! {
                  <button
                    class="absolute transform -translate-x-1/2 -translate-y-1/2 group z-20 focus:outline-none"
                    style=style
                    on:click=move |_| on_select.call(hotel.clone())
                  >
                    <div class="mb-2 opacity-0 group-hover:opacity-100 transition-all duration-300 pointer-events-none">
                      <div class="bg-white/95 backdrop-blur-md px-4 py-3 rounded-2xl border border-gold-100 flex flex-col items-center min-w-[140px]">
                        <span class="text-xs font-black text-gray-900">{ name }</span>
                        <span class="text-[10px] font-black text-gold-700">{ price }</span>
                        <span class="flex items-center text-[9px] text-gold-500 font-bold">
                          <i class="fas fa-star mr-1"></i>{ rating }
                        </span>
                      </div>
                    </div>
                    <div class="relative bg-gradient-to-br from-gold-500 to-gold-700 w-6 h-6 rounded-full border-2 border-white shadow-2xl flex items-center justify-center">
                      <i class="fas fa-hotel text-[8px] text-white"></i>
                    </div>
                  </button>
                }
            })
            .collect_view()
    };

    view! {
      <div class="relative w-full h-[450px] md:h-[650px] bg-[#f9f7f2] rounded-[3rem] overflow-hidden border border-gold-100 shadow-2xl">
        <div class="absolute inset-0 opacity-[0.05] pointer-events-none"></div>
        <Show when=move || located.get()>
          <div class="absolute transform -translate-x-1/2 -translate-y-1/2 z-10" style=position_style(MapPlacement::CENTER)>
            <div class="absolute -inset-4 bg-gold-400 rounded-full animate-ping opacity-20"></div>
            <div class="relative w-4 h-4 bg-gold-600 rounded-full border-2 border-white"></div>
          </div>
        </Show>
        { markers }
        <div class="absolute top-8 left-8">
          <div class="bg-white/95 backdrop-blur-md px-5 py-2.5 rounded-2xl border border-gold-100/30 inline-flex items-center shadow-xl">
            <span class="shrink-0 w-2 h-2 bg-gold-500 rounded-full animate-pulse mr-3"></span>
            <span class="text-[9px] font-black uppercase tracking-widest text-gray-700">"Vista de Conserjería"</span>
          </div>
        </div>
      </div>
    }
}
