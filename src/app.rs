use yew::prelude::*;

use crate::a11y::{LiveRegion, SkipLink};
use crate::components::about::About;
use crate::components::back_to_top::BackToTop;
use crate::components::contact::ContactForm;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::partners::Partners;
use crate::components::services::Services;
use crate::components::stats::Stats;
use crate::context::SiteContext;
use crate::effects;

#[function_component(App)]
pub fn app() -> Html {
    let announcement = use_state(String::new);
    let pointer_mode = use_state_eq(|| false);

    let announce = {
        let announcement = announcement.clone();
        Callback::from(move |message: String| announcement.set(message))
    };
    let context = SiteContext {
        announce,
        pointer_mode: *pointer_mode,
    };

    // Behaviors attach to the rendered markup once it exists. Anything whose
    // markup is missing simply does not mount.
    {
        let pointer_mode = pointer_mode.clone();
        use_effect_with_deps(
            move |_| {
                let on_pointer_mode = Callback::from(move |mode: bool| pointer_mode.set(mode));
                let effects = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| effects::mount_all(&document, on_pointer_mode))
                    .unwrap_or_default();
                move || drop(effects)
            },
            (),
        );
    }

    html! {
        <ContextProvider<SiteContext> context={context}>
            <SkipLink />
            <Navbar />
            <main id="main-content" tabindex="-1">
                <Hero />
                <Services />
                <About />
                <Stats />
                <Partners />
                <ContactForm />
            </main>
            <Footer />
            <BackToTop />
            <LiveRegion message={(*announcement).clone()} />
            <style>{PAGE_CSS}</style>
        </ContextProvider<SiteContext>>
    }
}

const PAGE_CSS: &str = r#"
* {
    box-sizing: border-box;
    margin: 0;
}
body {
    background: #101014;
    color: #fff;
    font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
}
main:focus {
    outline: none;
}
h1, h2, h3 {
    font-weight: 700;
}

/* Focus outlines are for keyboard users; mousedown sets the flag, Tab clears it. */
body.using-mouse :focus {
    outline: none;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}

.skip-link {
    position: absolute;
    top: -48px;
    left: 1rem;
    z-index: 200;
    padding: 0.6rem 1rem;
    background: #1E90FF;
    color: #fff;
    border-radius: 0 0 8px 8px;
    text-decoration: none;
    transition: top 0.2s ease;
}
.skip-link:focus {
    top: 0;
}

[data-reveal] {
    opacity: 0;
    transition: opacity 0.6s ease, transform 0.6s ease;
}
[data-reveal="fade-up"] {
    transform: translateY(24px);
}
[data-reveal].revealed {
    opacity: 1;
    transform: none;
}
@media (prefers-reduced-motion: reduce) {
    [data-reveal] {
        transition: none;
    }
}
"#;
