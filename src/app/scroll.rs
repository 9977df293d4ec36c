use leptos::prelude::*;
use leptos_use::use_window_scroll;

/// Mounts the scroll animations once the page has hydrated and tears them
/// down with the page. Also renders the reading-progress bar they drive.
#[component]
pub fn ScrollAnimations() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::motion::{MotionConfig, ScrollDriver};

        let driver = StoredValue::new_local(None::<ScrollDriver>);
        Effect::new(move |_| match ScrollDriver::mount(MotionConfig::default()) {
            Ok(mounted) => driver.set_value(Some(mounted)),
            Err(err) => log::warn!("scroll animations unavailable: {err}"),
        });
        on_cleanup(move || {
            if let Some(mounted) = driver.try_update_value(Option::take).flatten() {
                mounted.unmount();
            }
        });
    }

    view! {
        <div
            data-scroll-progress=""
            aria-hidden="true"
            class="fixed top-0 left-0 z-50 h-1 w-full bg-gradient-to-r from-blue via-purple to-pink"
            style="transform: scaleX(0); transform-origin: left center"
        ></div>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let class = move || {
        let base = "fixed bottom-6 right-6 z-40 w-10 h-10 flex items-center justify-center rounded-full bg-brightBlack/70 border border-muted/30 transition-opacity duration-300";
        if y.get() > 600.0 {
            format!("{base} opacity-100")
        } else {
            format!("{base} opacity-0 pointer-events-none")
        }
    };

    view! {
        <a href="#home" aria-label="Back to top" class=class>
            "↑"
        </a>
    }
}
