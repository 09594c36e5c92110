use leptos::prelude::*;

use crate::catalog::SKILLS;

const VALUES: &[&str] = &["Qualité", "Transparence", "Réactivité"];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="a-propos" class="py-20 section-content">
            <div class="mx-auto max-w-6xl px-4">
                <div class="text-center mb-12">
                    <span class="text-sm uppercase tracking-wide text-red font-medium">
                        "À propos"
                    </span>
                    <h2 class="text-3xl font-bold mt-2">
                        "Un développeur passionné," <br /> "au service de "
                        <span class="text-red">"votre réussite"</span>
                    </h2>
                </div>
                <div class="grid gap-12 lg:grid-cols-2">
                    <div class="space-y-4 leading-relaxed">
                        <p>
                            "Salut, moi c'est " <strong>"Zdr_DEV"</strong>
                            " — développeur web full stack basé à " <strong>"Rodez"</strong>
                            ", au cœur de l'Aveyron. Je conçois des sites et applications web "
                            <em>"modernes, performants et sécurisés"</em>
                            " pour les entrepreneurs, artisans et PME qui veulent une vraie présence en ligne."
                        </p>
                        <p>
                            "Mon approche : comprendre votre métier, traduire vos besoins en solutions digitales concrètes et vous livrer un produit fini, sans jargon technique inutile. Du design à la mise en production, je gère tout le processus."
                        </p>
                        <p>
                            "Chaque projet est une collaboration. Je m'engage sur la qualité, les délais et un accompagnement transparent du début à la fin."
                        </p>
                        <div class="flex flex-wrap gap-3 pt-2">
                            {VALUES
                                .iter()
                                .map(|v| {
                                    view! {
                                        <span class="px-3 py-1 rounded-md bg-green/10 text-green text-sm font-medium">
                                            "✓ "
                                            {*v}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="grid gap-4 sm:grid-cols-2">
                        {SKILLS
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="p-4 rounded-lg border border-muted/30">
                                        <h4 class="font-bold mb-3">{skill.category}</h4>
                                        <div class="flex flex-wrap gap-2">
                                            {skill
                                                .techs
                                                .iter()
                                                .map(|t| {
                                                    view! {
                                                        <span class="px-2 py-1 rounded bg-muted/20 text-sm">
                                                            {*t}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
