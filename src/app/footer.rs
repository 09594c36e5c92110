use leptos::prelude::*;

use crate::config::{mailto, BUILD_YEAR, CONTACT_EMAIL, LOCATION, SITE_NAME};
use crate::legal::LegalDoc;

#[component]
pub fn Footer(legal: RwSignal<Option<LegalDoc>>) -> impl IntoView {
    let legal_button = move |doc: LegalDoc| {
        view! {
            <button
                type="button"
                class="hover:text-red underline-offset-4 hover:underline"
                on:click=move |_| legal.set(Some(doc))
            >
                {doc.label()}
            </button>
        }
    };

    view! {
        <footer class="border-t border-muted/30 py-12">
            <div class="mx-auto max-w-6xl px-4 grid gap-8 md:grid-cols-3">
                <div>
                    <h4 class="text-xl font-bold mb-2">
                        <span class="text-red">"Zdr"</span>
                        "_DEV"
                    </h4>
                    <p class="text-sm text-muted">"Votre voisin développeur · " {LOCATION}</p>
                    <p class="text-sm text-muted">
                        "Sites web pour artisans, commerçants et restaurateurs du 12."
                    </p>
                </div>
                <div>
                    <h5 class="font-bold mb-2">"Navigation"</h5>
                    <ul class="space-y-1 text-sm">
                        <li>
                            <a href="#accueil">"Accueil"</a>
                        </li>
                        <li>
                            <a href="#a-propos">"À propos"</a>
                        </li>
                        <li>
                            <a href="#services">"Services"</a>
                        </li>
                        <li>
                            <a href="#contact">"Contact"</a>
                        </li>
                    </ul>
                </div>
                <div>
                    <h5 class="font-bold mb-2">"Contact"</h5>
                    <ul class="space-y-1 text-sm">
                        <li>
                            <a href=mailto()>{CONTACT_EMAIL}</a>
                        </li>
                        <li>{LOCATION}</li>
                    </ul>
                </div>
            </div>
            <div class="mx-auto max-w-6xl px-4 mt-10 flex flex-col sm:flex-row justify-between gap-4 text-sm text-muted">
                <p>{format!("© {BUILD_YEAR} {SITE_NAME} — Tous droits réservés.")}</p>
                <p class="flex gap-2">
                    {legal_button(LegalDoc::Mentions)} <span>"·"</span>
                    {legal_button(LegalDoc::Privacy)}
                </p>
            </div>
        </footer>
    }
}
