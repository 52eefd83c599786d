use leptos::*;

use luxestay_core::{entities::Hotel, view::format_rating};

#[component]
pub fn HotelCard(
    hotel: Hotel,
    is_favorite: Signal<bool>,
    on_select: Callback<Hotel>,
    on_toggle_favorite: Callback<Hotel>,
) -> impl IntoView {
    let heart_class = move || {
        if is_favorite.get() {
            "fas fa-heart text-gold-500"
        } else {
            "far fa-heart text-white"
        }
    };
    let rating = format_rating(hotel.rating);
    let price = hotel.price_per_night.xaf_display();
    let selected = hotel.clone();
    let toggled = hotel.clone();

    view! {
      <article
        class="bg-gradient-to-br from-white via-white to-gold-50/40 rounded-[2.5rem] overflow-hidden border border-gold-50 shadow-sm hover:shadow-2xl transition-all duration-500 cursor-pointer group flex flex-col h-full"
        on:click=move |_| on_select.call(selected.clone())
      >
        <div class="relative h-72 overflow-hidden">
          <img src=hotel.image alt=hotel.name.clone() class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700" />
          <div class="absolute inset-0 bg-gradient-to-t from-black/70 via-transparent to-transparent opacity-60"></div>
          <button
            class="absolute top-5 right-5 z-10 w-11 h-11 rounded-2xl bg-white/20 backdrop-blur flex items-center justify-center"
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle_favorite.call(toggled.clone());
            }
          >
            <i class=heart_class></i>
          </button>
          <div class="absolute bottom-5 left-5">
            <span class="bg-white/95 backdrop-blur-md px-3 py-1.5 rounded-xl text-xs font-black text-gray-900">
              <i class="fas fa-star text-[10px] mr-1.5 text-gold-500"></i>{ rating }
            </span>
          </div>
        </div>
        <div class="p-8 flex flex-col flex-1">
          <h3 class="font-black text-gray-900 text-xl leading-tight group-hover:text-gold-700 transition-colors">{ hotel.name }</h3>
          <p class="flex items-start text-xs text-gray-400 mt-3">
            <i class="fas fa-map-marker-alt mt-0.5 mr-2.5 text-gold-400 shrink-0"></i>{ hotel.address }
          </p>
          <div class="mt-auto flex items-center justify-between pt-6 border-t border-gold-100/30">
            <div class="flex flex-col">
              <span class="text-[9px] font-black text-gold-600 uppercase tracking-widest">"Por noche"</span>
              <span class="text-lg font-black text-gray-900">{ price }</span>
            </div>
            <span class="text-[9px] font-black text-gold-600 uppercase tracking-widest">
              "Ver detalles"<i class="fas fa-arrow-right ml-2 text-[8px]"></i>
            </span>
          </div>
        </div>
      </article>
    }
}
