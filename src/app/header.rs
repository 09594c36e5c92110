use leptos::prelude::*;

use super::theme::ThemeToggle;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#accueil", "Accueil"),
    ("#a-propos", "À propos"),
    ("#services", "Services"),
];
const CONTACT_LINK: (&str, &str) = ("#contact", "Contact");

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="sticky top-0 z-40 bg-background/90 backdrop-blur shadow">
            <div class="mx-auto max-w-6xl px-4 py-4 flex items-center justify-between gap-4">
                <a href="#accueil" class="text-xl font-bold" aria-label="Retour à l'accueil">
                    <span class="text-red">"Zdr"</span>
                    "_DEV"
                </a>
                <nav class="hidden md:block" aria-label="Navigation principale">
                    <ul class="flex gap-6">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <li>
                                        <a
                                            href=*href
                                            class="hover:text-red transition-colors duration-200"
                                        >
                                            {*label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="flex items-center gap-3">
                    <ThemeToggle />
                    <a
                        href=CONTACT_LINK.0
                        class="hidden md:inline-block bg-red/90 hover:bg-red text-white px-4 py-2 rounded-md font-medium transition-all duration-200"
                    >
                        "Me contacter"
                    </a>
                    <button
                        type="button"
                        class="md:hidden text-2xl"
                        aria-label="Ouvrir le menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <nav
                                class="md:hidden border-t border-muted/30 px-4 pb-4"
                                aria-label="Navigation mobile"
                            >
                                <ul class="flex flex-col gap-3 pt-3">
                                    {NAV_LINKS
                                        .iter()
                                        .chain(std::iter::once(&CONTACT_LINK))
                                        .map(|(href, label)| {
                                            view! {
                                                <li>
                                                    <a href=*href on:click=move |_| set_menu_open.set(false)>
                                                        {*label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </nav>
                        }
                    })
            }}
        </header>
    }
}
