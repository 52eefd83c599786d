use leptos::{ev, *};

use luxestay_core::app::{LocateDevice, Screen};

use crate::Controller;

const INPUT_CLASS: &str = "block w-full px-6 py-4 bg-gold-50/30 border border-gold-100 rounded-2xl focus:ring-2 focus:ring-gold-400 focus:bg-white outline-none transition-all text-gray-800 placeholder-gray-300";
const LABEL_CLASS: &str = "block text-[9px] font-black text-gold-600 uppercase tracking-[0.2em] mb-2 ml-1";

#[component]
pub fn Auth(app: RwSignal<Controller>, on_authenticated: Callback<LocateDevice>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let screen = create_memo(move |_| app.with(|app| app.state().screen()));
    let error = create_memo(move |_| {
        app.with(|app| app.state().auth_error().map(ToString::to_string))
    });
    let is_signup = move || screen.get() == Screen::Signup;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let name = name.get_untracked();
        let locate = app
            .try_update(|app| match screen.get_untracked() {
                Screen::Signup => Some(app.signup(&email, &password, Some(name.as_str()))),
                Screen::Login | Screen::Home => app.login(&email, &password),
            })
            .flatten();
        if let Some(locate) = locate {
            log::info!("Successfully authenticated");
            on_authenticated.call(locate);
        }
    };

    view! {
      <div class="min-h-screen bg-[#FDFCF8] flex items-center justify-center px-4 py-12 relative overflow-hidden">
        <div class="max-w-md w-full space-y-10 bg-white/80 backdrop-blur-xl p-12 rounded-[3rem] border border-gold-100 relative z-10">
          <div class="text-center">
            <i class="fas fa-crown text-gold-500 text-2xl animate-pulse"></i>
            <h1 class="text-2xl font-black text-gray-900 tracking-tighter uppercase italic">"LuxeStay"</h1>
            <p class="mt-8 text-gold-800/50 font-black uppercase tracking-[0.4em] text-[10px]">
              {move || if is_signup() { "Inaugurar Membresía" } else { "Acceso Exclusivo" }}
            </p>
          </div>
          {move || error.get().map(|err| view! {
            <div class="bg-red-50 text-red-600 text-[10px] p-4 rounded-2xl border border-red-100 text-center font-black uppercase tracking-widest">
              { err }
            </div>
          })}
          <form class="space-y-6" on:submit=on_submit>
            <Show when=is_signup>
              <div>
                <label class=LABEL_CLASS>"Nombre Completo"</label>
                <input
                  type="text"
                  class=INPUT_CLASS
                  placeholder="Alexander Knight"
                  prop:value=name
                  on:input=move |ev| set_name.set(event_target_value(&ev))
                />
              </div>
            </Show>
            <div>
              <label class=LABEL_CLASS>"Correo Electrónico"</label>
              <input
                type="email"
                required
                class=INPUT_CLASS
                placeholder="vip@luxestay.com"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
              />
            </div>
            <div>
              <label class=LABEL_CLASS>"Contraseña"</label>
              <input
                type="password"
                required
                class=INPUT_CLASS
                placeholder="••••••••"
                prop:value=password
                on:input=move |ev| set_password.set(event_target_value(&ev))
              />
            </div>
            <button
              type="submit"
              class="w-full py-5 bg-gradient-to-r from-gold-400 to-gold-600 text-white font-black rounded-2xl uppercase tracking-widest text-xs"
            >
              {move || if is_signup() { "Unirse al Círculo" } else { "Entrar a la Suite" }}
            </button>
          </form>
          <div class="text-center">
            <button
              class="text-[10px] font-black text-gold-600 uppercase tracking-widest hover:text-gold-800"
              on:click=move |_| app.update(|app| app.toggle_auth_mode())
            >
              {move || if is_signup() {
                  "¿Ya es miembro? Acceda aquí"
                } else {
                  "¿No posee membresía? Solicítela"
                }
              }
            </button>
          </div>
        </div>
      </div>
    }
}
