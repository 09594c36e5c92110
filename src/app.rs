mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod legal;
mod services;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{SITE_NAME, SITE_URL};
use crate::legal::LegalDoc;
use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::{CallToAction, Hero};
use legal::LegalModal;
use services::Services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/zdr-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | {SITE_NAME}") />
        <Meta
            name="description"
            content="Création de sites web pour artisans, commerçants et restaurateurs à Rodez et dans tout l'Aveyron."
        />
        <Link rel="canonical" href=SITE_URL />

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site is one scrolling page; sections are reached by anchor.
#[component]
fn HomePage() -> impl IntoView {
    let legal = RwSignal::new(None::<LegalDoc>);

    view! {
        <Title text="Développeur web à Rodez" />
        <Header />
        <main>
            <Hero />
            <About />
            <Services />
            <CallToAction />
            <Contact />
        </main>
        <Footer legal />
        <LegalModal legal />
    }
}
