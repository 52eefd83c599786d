use leptos::*;

use luxestay_core::view::FilterChip;

#[component]
pub fn FilterBar(on_select: Callback<FilterChip>) -> impl IntoView {
    view! {
      <div class="flex space-x-3 overflow-x-auto pb-2 no-scrollbar px-4 mb-10">
        <button class="flex-shrink-0 w-12 h-12 rounded-2xl border border-gold-100 bg-white flex items-center justify-center text-gray-400">
          <i class="fas fa-sliders-h"></i>
        </button>
        {FilterChip::ALL
            .into_iter()
            .map(|chip| view! {
              <button
                class="flex-shrink-0 px-6 py-3 rounded-2xl border border-gold-100 bg-white text-xs font-black uppercase tracking-widest text-gray-700 hover:border-gold-400 hover:bg-gold-50 transition-all flex items-center shadow-sm"
                on:click=move |_| on_select.call(chip)
              >
                <i class=format!("fas {} text-gold-500 mr-2", chip.icon())></i>
                { chip.label() }
              </button>
            })
            .collect_view()}
      </div>
    }
}
