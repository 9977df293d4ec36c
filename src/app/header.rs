use leptos::prelude::*;

use super::content::NAME;

const NAV: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Services", "#services"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-40 bg-black/60 backdrop-blur">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold">
                    {NAME}
                </a>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    "☰"
                </button>
                <nav class=move || {
                    if open.get() {
                        "absolute top-full inset-x-0 flex flex-col gap-4 p-4 bg-black/90 md:static md:flex-row md:p-0 md:bg-transparent"
                    } else {
                        "hidden md:flex md:flex-row gap-6"
                    }
                }>
                    {NAV
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-muted hover:text-white"
                                    on:click=move |_| set_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
