use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::config::{mailto, CONTACT_EMAIL, FORM_ENDPOINT, LOCATION};
use crate::contact::{
    Attempt, Banner, ContactController, Field, HttpRelay, Relay, SubmitError,
};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border bg-background text-foreground focus:outline-none focus:ring-2 transition-all duration-200";

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{INPUT_CLASS} border-red focus:ring-red")
    } else {
        format!("{INPUT_CLASS} border-muted focus:ring-cyan")
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let controller = RwSignal::new(ContactController::new());
    let relay = StoredValue::new(HttpRelay::new(FORM_ENDPOINT));
    let submitting = Memo::new(move |_| controller.with(|c| c.is_submitting()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Attempt::Send(payload)) = controller.try_update(|c| c.prepare()) else {
            return;
        };
        let relay = relay.get_value();
        spawn_local(async move {
            let result = relay.deliver(&payload).await;
            controller.update(|c| match c.complete(result) {
                // the banner already tells the visitor how it went
                Ok(()) | Err(SubmitError::Transmission(_)) => {}
                Err(
                    err @ (SubmitError::Invalid(_)
                    | SubmitError::RateLimited
                    | SubmitError::Busy
                    | SubmitError::NotSubmitting),
                ) => log::error!("contact: unexpected completion result: {err}"),
            });
        });
    };

    let value = move |field: Field| controller.with(|c| c.value(field).to_string());
    let has_error = move |field: Field| controller.with(|c| c.errors().contains(field));
    let described_by =
        move |field: Field| has_error(field).then(|| format!("err-{}", field.attr()));

    view! {
        <section id="contact" class="py-20 section-content">
            <div class="mx-auto max-w-6xl px-4">
                <div class="text-center mb-12">
                    <span class="text-sm uppercase tracking-wide text-red font-medium">
                        "Contact"
                    </span>
                    <h2 class="text-3xl font-bold mt-2 mb-3">
                        "Discutons de votre " <span class="text-red">"projet"</span>
                    </h2>
                    <p class="text-muted max-w-2xl mx-auto">
                        "Dites-moi simplement ce que vous faites et ce dont vous avez besoin. Je vous recontacte sous 24 h, on en discute comme des voisins."
                    </p>
                </div>

                <div class="grid gap-10 lg:grid-cols-2">
                    <form class="space-y-5" on:submit=on_submit novalidate=true>
                        // hidden from humans, bots fill everything
                        <input
                            type="text"
                            name=Field::Honeypot.attr()
                            class="hidden"
                            tabindex="-1"
                            autocomplete="off"
                            aria-hidden="true"
                            prop:value=move || value(Field::Honeypot)
                            on:input=move |ev| {
                                controller.update(|c| c.edit(Field::Honeypot, event_target_value(&ev)))
                            }
                        />

                        <div class="flex flex-col gap-1">
                            <label for="contact-name" class="font-medium">
                                "Votre nom"
                            </label>
                            <input
                                id="contact-name"
                                type="text"
                                name=Field::Name.attr()
                                autocomplete="name"
                                placeholder="Ex : Marie Martin"
                                maxlength=Field::Name.max_len().map(|n| n.to_string())
                                class=move || input_class(has_error(Field::Name))
                                aria-describedby=move || described_by(Field::Name)
                                prop:value=move || value(Field::Name)
                                on:input=move |ev| {
                                    controller.update(|c| c.edit(Field::Name, event_target_value(&ev)))
                                }
                            />
                            <FieldError controller field=Field::Name />
                        </div>

                        <div class="flex flex-col gap-1">
                            <label for="contact-email" class="font-medium">
                                "Votre email (pour vous recontacter)"
                            </label>
                            <input
                                id="contact-email"
                                type="email"
                                name=Field::Email.attr()
                                autocomplete="email"
                                placeholder="marie@moncommerce.fr"
                                maxlength=Field::Email.max_len().map(|n| n.to_string())
                                class=move || input_class(has_error(Field::Email))
                                aria-describedby=move || described_by(Field::Email)
                                prop:value=move || value(Field::Email)
                                on:input=move |ev| {
                                    controller.update(|c| c.edit(Field::Email, event_target_value(&ev)))
                                }
                            />
                            <FieldError controller field=Field::Email />
                        </div>

                        <div class="flex flex-col gap-1">
                            <label for="contact-message" class="font-medium">
                                "Parlez-moi de votre activité et de vos besoins"
                            </label>
                            <textarea
                                id="contact-message"
                                name=Field::Message.attr()
                                autocomplete="off"
                                rows="5"
                                placeholder="Ex : Je suis boulanger à Rodez et j'aimerais un site pour présenter mes produits et prendre des commandes…"
                                maxlength=Field::Message.max_len().map(|n| n.to_string())
                                class=move || input_class(has_error(Field::Message))
                                aria-describedby=move || described_by(Field::Message)
                                prop:value=move || value(Field::Message)
                                on:input=move |ev| {
                                    controller.update(|c| c.edit(Field::Message, event_target_value(&ev)))
                                }
                            ></textarea>
                            <FieldError controller field=Field::Message />
                        </div>

                        <button
                            type="submit"
                            class="w-full bg-red/90 hover:bg-red disabled:opacity-60 text-white px-6 py-3 rounded-md font-medium transition-all duration-200"
                            disabled=move || submitting.get()
                        >
                            {move || {
                                if submitting.get() {
                                    "Envoi en cours…"
                                } else {
                                    "☕ Discuter de mon projet"
                                }
                            }}
                        </button>

                        {move || {
                            controller
                                .with(|c| c.banner())
                                .map(|banner| match banner {
                                    Banner::Success => {
                                        Either::Left(
                                            view! {
                                                <p class="p-3 rounded-md bg-green/10 text-green" role="alert">
                                                    "✅ C'est envoyé ! Je vous recontacte sous 24 h pour en discuter."
                                                </p>
                                            },
                                        )
                                    }
                                    Banner::Failure => {
                                        Either::Right(
                                            view! {
                                                <p class="p-3 rounded-md bg-red/10 text-red" role="alert">
                                                    "❌ Une erreur est survenue. Veuillez réessayer ou me contacter par email."
                                                </p>
                                            },
                                        )
                                    }
                                })
                        }}
                    </form>

                    <ContactInfo />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FieldError(controller: RwSignal<ContactController>, field: Field) -> impl IntoView {
    move || {
        controller
            .with(|c| c.error(field).map(str::to_string))
            .map(|msg| {
                view! {
                    <span id=format!("err-{}", field.attr()) class="text-sm text-red" role="alert">
                        {msg}
                    </span>
                }
            })
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <aside class="space-y-4">
            <InfoCard title="Email">
                <a href=mailto() class="text-cyan hover:underline">
                    {CONTACT_EMAIL}
                </a>
            </InfoCard>
            <InfoCard title="Localisation">
                <p>{LOCATION}</p>
            </InfoCard>
            <InfoCard title="Disponibilité">
                <p>"Lun – Ven · 9h – 18h"</p>
                <p>"RDV possible à Rodez, Millau ou en visio"</p>
            </InfoCard>
            <p class="text-sm text-muted leading-relaxed">
                "Basé à Rodez, j'interviens dans tout l'Aveyron : Millau, Villefranche-de-Rouergue, Decazeville, Espalion… On peut se retrouver autour d'un café pour discuter de votre projet !"
            </p>
        </aside>
    }
}

#[component]
fn InfoCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="p-4 rounded-lg border border-muted/30">
            <h4 class="font-bold mb-1">{title}</h4>
            {children()}
        </div>
    }
}
