use leptos::*;

#[component]
pub fn Header(user_name: Signal<String>, on_logout: Callback<()>) -> impl IntoView {
    view! {
      <header class="bg-white/80 backdrop-blur-md border-b border-gold-50 sticky top-0 z-50 shadow-sm">
        <div class="max-w-7xl mx-auto px-6 h-24 flex items-center justify-between">
          <div class="flex items-center space-x-4">
            <i class="fas fa-crown text-gold-500 text-2xl"></i>
            <span class="text-2xl font-black text-gray-900 tracking-tighter uppercase italic leading-none">"LuxeStay"</span>
          </div>
          <div class="flex items-center space-x-8">
            <div class="hidden sm:flex flex-col items-end">
              <span class="text-[9px] font-black text-gold-600 uppercase tracking-widest">"Miembro Platino"</span>
              <span class="font-black text-gray-900">{ user_name }</span>
            </div>
            <button
              class="w-12 h-12 rounded-2xl border border-gold-100 bg-white flex items-center justify-center text-gray-400 hover:border-gold-400 hover:text-gold-500 transition-all"
              title="Cerrar sesión"
              on:click=move |_| on_logout.call(())
            >
              <i class="fas fa-power-off text-lg"></i>
            </button>
          </div>
        </div>
      </header>
    }
}
