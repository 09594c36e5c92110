use leptos::prelude::*;

use crate::catalog::{Offer, OFFERS, SERVICES, SUBSCRIPTIONS};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-20 bg-foreground/5 section-content">
            <div class="mx-auto max-w-6xl px-4">
                <SectionTitle
                    label="Services"
                    title="Ce que je fais pour vous"
                    subtitle="Des solutions concrètes pour les professionnels de l'Aveyron."
                />
                <div class="grid gap-6 md:grid-cols-2 mb-20">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <article class="p-6 rounded-lg border border-muted/30">
                                    <h3 class="text-xl font-bold mb-4">{service.title}</h3>
                                    <p class="text-muted mb-2">{service.problem}</p>
                                    <p class="mb-2">{service.benefit}</p>
                                    <p class="text-green font-medium">{service.impact}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>

                <SectionTitle
                    label="Création"
                    title="Des offres à prix fixe"
                    subtitle="Un tarif clair dès le départ, sans surprise. Paiement en 3× possible."
                />
                <div class="grid gap-6 md:grid-cols-2 mb-20">
                    {OFFERS.iter().map(|offer| view! { <OfferCard offer=*offer /> }).collect_view()}
                </div>

                <SectionTitle
                    label="Abonnements"
                    title="Votre site entre de bonnes mains"
                    subtitle="Hébergement, sécurité et évolutions, sans engagement."
                />
                <div class="grid gap-6 md:grid-cols-3">
                    {SUBSCRIPTIONS
                        .iter()
                        .map(|offer| view! { <OfferCard offer=*offer /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionTitle(
    label: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-10">
            <span class="text-sm uppercase tracking-wide text-red font-medium">{label}</span>
            <h2 class="text-3xl font-bold mt-2 mb-3">{title}</h2>
            <p class="text-muted max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
fn OfferCard(offer: Offer) -> impl IntoView {
    let border = if offer.is_highlighted() {
        "relative p-6 rounded-lg border-2 border-red shadow-lg"
    } else {
        "relative p-6 rounded-lg border border-muted/30"
    };

    view! {
        <article class=border id=offer.id>
            {offer
                .badge
                .map(|badge| {
                    view! {
                        <span class="absolute -top-3 right-4 px-3 py-1 rounded-full bg-red text-white text-xs font-bold">
                            {badge}
                        </span>
                    }
                })}
            <h3 class="text-xl font-bold">{offer.name}</h3>
            {offer.kind.map(|kind| view! { <p class="text-sm text-muted">{kind}</p> })}
            <p class="text-3xl font-bold my-4">{offer.price_label()}</p>
            <p class="mb-4">{offer.description}</p>
            <ul class="space-y-1 text-sm">
                {offer
                    .features
                    .iter()
                    .map(|feature| view! { <li>"✓ " {*feature}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}
