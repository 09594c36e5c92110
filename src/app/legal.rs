use leptos::{either::Either, ev, prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::legal::get_legal;
use crate::legal::{LegalDoc, LegalPage};

#[server(input = GetUrl)]
pub async fn get_legal_server(doc: LegalDoc) -> Result<LegalPage, ServerFnError> {
    get_legal(doc).map_err(ServerFnError::new)
}

/// Stop the page behind the overlay from scrolling.
fn lock_scroll(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = document().body() {
            let overflow = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", overflow);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

#[component]
pub fn LegalModal(legal: RwSignal<Option<LegalDoc>>) -> impl IntoView {
    let page = Resource::new(
        move || legal.get(),
        |doc| async move {
            match doc {
                Some(doc) => get_legal_server(doc).await.ok(),
                None => None,
            }
        },
    );
    let close = move || legal.set(None);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && legal.get_untracked().is_some() {
            close();
        }
    });
    on_cleanup(move || {
        handle.remove();
        lock_scroll(false);
    });

    Effect::new(move |_| lock_scroll(legal.get().is_some()));

    view! {
        <Show when=move || legal.get().is_some()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4"
                on:click=move |_| close()
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-label=move || legal.get().map(LegalDoc::label)
                    class="relative max-h-[85vh] w-full max-w-3xl overflow-y-auto rounded-lg bg-background text-foreground p-8 shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute right-4 top-4 text-2xl text-muted hover:text-foreground"
                        aria-label="Fermer"
                        on:click=move |_| close()
                    >
                        "×"
                    </button>
                    <Suspense fallback=|| view! { <p class="text-muted">"Chargement…"</p> }>
                        {move || {
                            page.get()
                                .map(|page| match page {
                                    Some(page) => {
                                        let updated = page.updated_label();
                                        let LegalPage { title, html, .. } = page;
                                        Either::Left(
                                            view! {
                                                <h2 class="text-2xl font-bold mb-2">{title}</h2>
                                                <p class="text-sm text-muted mb-6">
                                                    "Dernière mise à jour : " {updated}
                                                </p>
                                                <div class="legal-content space-y-4" inner_html=html></div>
                                            },
                                        )
                                    }
                                    None => {
                                        Either::Right(
                                            view! {
                                                <p class="text-red">
                                                    "Document indisponible pour le moment."
                                                </p>
                                            },
                                        )
                                    }
                                })
                        }}
                    </Suspense>
                </div>
            </div>
        </Show>
    }
}
