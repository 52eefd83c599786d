use leptos::*;

use luxestay_core::{
    entities::Hotel,
    view::{format_rating, AMENITIES, SELECTION_NOTE},
};

#[component]
pub fn HotelDetails(
    hotel: Hotel,
    is_favorite: Signal<bool>,
    on_back: Callback<()>,
    on_toggle_favorite: Callback<Hotel>,
) -> impl IntoView {
    let heart_class = move || {
        if is_favorite.get() {
            "fas fa-heart text-gold-500"
        } else {
            "far fa-heart"
        }
    };
    let rating = format_rating(hotel.rating);
    let price = hotel.price_per_night.xaf_display();
    let reviews = hotel.review_snippets.clone().unwrap_or_default();
    let maps_url = hotel.maps_url.clone();
    let name = hotel.name.clone();
    let toggled = hotel.clone();

    view! {
      <div class="fixed inset-0 bg-[#FDFCF8] z-[60] overflow-y-auto animate-in slide-in-from-right duration-500">
        <div class="relative h-[60vh] min-h-[400px]">
          <img src=hotel.image alt=name class="w-full h-full object-cover" />
          <div class="absolute inset-0 bg-gradient-to-b from-black/40 via-transparent to-[#FDFCF8]"></div>
          <button
            class="absolute top-8 left-8 w-12 h-12 bg-white/90 backdrop-blur rounded-2xl shadow-xl flex items-center justify-center text-gray-800"
            on:click=move |_| on_back.call(())
          >
            <i class="fas fa-chevron-left"></i>
          </button>
          <button
            class="absolute top-8 right-8 w-12 h-12 bg-white/90 backdrop-blur rounded-2xl shadow-xl flex items-center justify-center"
            on:click=move |_| on_toggle_favorite.call(toggled.clone())
          >
            <i class=heart_class></i>
          </button>
        </div>
        <div class="px-8 max-w-4xl mx-auto -mt-32 relative z-10 pb-32">
          <div class="bg-white rounded-[3rem] p-10 shadow-2xl border border-gold-50">
            <div class="flex flex-col md:flex-row justify-between items-start gap-6 mb-10">
              <div>
                <span class="text-[9px] font-black text-gold-600 uppercase tracking-[0.2em]">"Categoría Platino"</span>
                <h1 class="text-4xl font-black text-gray-900 tracking-tighter">{ hotel.name }</h1>
                <p class="flex items-center text-gray-400 mt-3">
                  <i class="fas fa-map-marker-alt text-gold-500 mr-2"></i>{ hotel.address }
                </p>
                <span class="inline-flex items-center text-gold-700 bg-gold-50/80 px-3 py-1.5 rounded-xl border border-gold-100/50 mt-4">
                  <i class="fas fa-star mr-1"></i>{ rating }
                </span>
              </div>
              <div class="bg-gold-50 p-6 rounded-3xl text-center min-w-[140px] border border-gold-100 shadow-inner">
                <span class="text-[9px] font-black text-gold-600 uppercase tracking-widest">"Por noche"</span>
                <p class="text-2xl font-black text-gold-700">{ price }</p>
              </div>
            </div>
            <div class="grid grid-cols-2 sm:grid-cols-4 gap-4 mb-12">
              {AMENITIES
                  .iter()
                  .map(|amenity| view! {
                    <div class="bg-gold-50/30 border border-gold-100/50 p-4 rounded-2xl flex flex-col items-center text-center">
                      <i class=format!("fas {} text-gold-500 text-xl", amenity.icon)></i>
                      <span class="mt-2 text-[9px] font-black uppercase tracking-widest text-gray-700">{ amenity.label }</span>
                    </div>
                  })
                  .collect_view()}
            </div>
            <h2 class="text-xs font-black text-gold-600 uppercase tracking-[0.2em] mb-4">"Propuesta de Valor"</h2>
            <p class="text-gray-600 leading-relaxed mb-12">{ hotel.description }" "{ SELECTION_NOTE }</p>
            <div class="grid md:grid-cols-2 gap-4 mb-12">
              {reviews
                  .into_iter()
                  .map(|review| view! {
                    <blockquote class="bg-[#FAF9F6] p-6 rounded-3xl border-l-4 border-gold-400 relative">
                      <i class="fas fa-quote-left absolute top-4 right-4 text-gold-100 text-3xl"></i>
                      <p class="italic text-gray-600">{ review }</p>
                    </blockquote>
                  })
                  .collect_view()}
            </div>
            <div class="flex flex-col sm:flex-row gap-6 items-center border-t border-gold-50 pt-10">
              {maps_url.map(|url| view! {
                <a href=url target="_blank" rel="noopener" class="text-[10px] font-black text-gold-600 uppercase tracking-widest">
                  <i class="fas fa-map-marked-alt mr-2"></i>"Ver en Google Maps"
                </a>
              })}
              <button
                class="flex-1 w-full py-5 bg-gradient-to-r from-gold-400 to-gold-600 text-white font-black rounded-2xl uppercase tracking-widest text-xs"
                on:click=move |_| log::info!("Reservations are not available")
              >
                "Asegurar Reserva"
              </button>
            </div>
          </div>
        </div>
      </div>
    }
}
