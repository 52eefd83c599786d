use leptos::{ev, *};

#[component]
pub fn SearchBar(on_submit: Callback<String>) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(query.get_untracked());
    };

    view! {
      <form class="relative max-w-3xl mx-auto mb-8" on:submit=submit>
        <i class="fas fa-search text-xl absolute left-6 top-1/2 -translate-y-1/2 text-gold-500"></i>
        <input
          type="text"
          class="block w-full pl-16 pr-40 py-6 bg-white border border-gold-100 rounded-3xl outline-none focus:ring-2 focus:ring-gold-400 text-gray-800"
          placeholder="Explore destinos de élite (ej. París, Maldivas, Dubai)..."
          prop:value=query
          on:input=move |ev| set_query.set(event_target_value(&ev))
        />
        <button
          type="submit"
          class="absolute right-3 top-1/2 -translate-y-1/2 px-8 py-4 bg-gradient-to-r from-gold-400 to-gold-600 text-white font-black rounded-2xl text-xs uppercase tracking-widest"
        >
          "Explorar"
        </button>
      </form>
    }
}
