use leptos::prelude::*;

use crate::catalog::{format_price, starting_price};

const TRUST_BADGES: &[&str] = &["✓ Devis gratuit en 24h", "✓ Paiement en 3×"];

#[component]
pub fn Hero() -> impl IntoView {
    let from = format_price(starting_price());

    view! {
        <section id="accueil" class="relative min-h-[80vh] flex items-center section-content">
            <div class="mx-auto max-w-6xl px-4 grid gap-10 lg:grid-cols-2 items-center">
                <div>
                    <span class="inline-block mb-4 px-3 py-1 rounded-full bg-red/10 text-red text-sm font-medium">
                        "Votre partenaire web en Aveyron"
                    </span>
                    <h1 class="text-4xl lg:text-5xl font-bold leading-tight mb-6">
                        "L'agence ruthénoise" <br /> "au service "
                        <span class="text-red">"de votre développement"</span>
                    </h1>
                    <p class="text-lg leading-relaxed mb-6">
                        "Artisan, commerçant, restaurateur aveyronnais ? Je m'engage à créer un site web à votre image pour attirer la clientèle. Visible sur Google, adapté au mobile, livré en 2 semaines."
                    </p>
                    <div class="flex flex-wrap gap-3">
                        {TRUST_BADGES
                            .iter()
                            .map(|text| {
                                view! {
                                    <span class="px-3 py-1 rounded-md border border-muted/30 text-sm">
                                        {*text}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex flex-col gap-4 items-start lg:items-end">
                    <a
                        href="#contact"
                        class="bg-red/90 hover:bg-red text-white px-6 py-3 rounded-md font-medium transition-all duration-200"
                    >
                        "Demander mon audit gratuit →"
                    </a>
                    <a
                        href="#services"
                        class="border border-muted/40 hover:border-red px-6 py-3 rounded-md font-medium transition-all duration-200"
                    >
                        {format!("Voir les offres dès {from} €")}
                    </a>
                </div>
            </div>
            <a
                href="#a-propos"
                class="absolute bottom-6 left-1/2 -translate-x-1/2 text-2xl text-muted"
                aria-label="Descendre vers la section suivante"
            >
                "↓"
            </a>
        </section>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    let from = format_price(starting_price());

    view! {
        <section id="cta-final" class="bg-foreground text-background py-20 section-content">
            <div class="mx-auto max-w-3xl px-4 text-center">
                <span class="text-sm uppercase tracking-wide text-red font-medium">
                    "Prêt à vous lancer ?"
                </span>
                <h2 class="text-3xl font-bold my-4">
                    "Donnez à votre activité" <br /> "la "
                    <span class="text-red">"présence digitale"</span> " qu'elle mérite"
                </h2>
                <p class="mb-8">
                    "Discutons de votre projet autour d'un café à Rodez, ou en visio. Premier échange gratuit et sans engagement."
                </p>
                <a
                    href="#contact"
                    class="inline-block bg-red/90 hover:bg-red text-white px-6 py-3 rounded-md font-medium transition-all duration-200"
                >
                    "En savoir plus →"
                </a>
                <p class="mt-6 text-sm opacity-80">
                    {format!("Devis gratuit en 24h · Paiement en 3× · À partir de {from} €")}
                </p>
            </div>
        </section>
    }
}
