use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

// The scroll hint fades once the user has actually started scrolling.
const FADE_AT_PX: f64 = 160.0;

#[function_component(Hero)]
pub fn hero() -> Html {
    let faded = use_state_eq(|| false);

    {
        let faded = faded.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let faded = faded.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                let y = win.scroll_y().unwrap_or(0.0);
                                faded.set(y > FADE_AT_PX);
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <header class="hero" id="top">
            <div class="hero-layer hero-layer-back" data-parallax-speed="0.3"></div>
            <div class="hero-layer hero-layer-front" data-parallax-speed="0.5"></div>
            <div class="hero-content">
                <h1 class="hero-title">{"Digital products with personality"}</h1>
                <p class="hero-subtitle">
                    {"Vetra is an independent studio in São Paulo designing and shipping brands, websites and product interfaces."}
                </p>
                <div class="hero-cta-group">
                    <a class="hero-cta" href="#contact">{"Start a project"}</a>
                    <a class="hero-cta hero-cta-ghost" href="#work">{"See our work"}</a>
                </div>
            </div>
            <a
                class={classes!("hero-scroll", (*faded).then_some("faded"))}
                href="#services"
                aria-label="Scroll to services"
            >
                {"↓"}
            </a>
            <style>{HERO_CSS}</style>
        </header>
    }
}

const HERO_CSS: &str = r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    overflow: hidden;
}
.hero-layer {
    position: absolute;
    inset: -20% 0;
    pointer-events: none;
    will-change: transform;
}
.hero-layer-back {
    background: radial-gradient(circle at 30% 40%, rgba(126, 178, 255, 0.18), transparent 60%);
}
.hero-layer-front {
    background: radial-gradient(circle at 70% 70%, rgba(255, 158, 100, 0.12), transparent 55%);
}
.hero-content {
    position: relative;
    z-index: 1;
    max-width: 760px;
    padding: 0 1.5rem;
}
.hero-title {
    font-size: 3.4rem;
    line-height: 1.1;
    margin-bottom: 1.2rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero-subtitle {
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.75);
    margin-bottom: 2.2rem;
}
.hero-cta-group {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}
.hero-cta {
    padding: 0.9rem 1.8rem;
    border-radius: 8px;
    background: #1E90FF;
    color: #fff;
    text-decoration: none;
    font-weight: 600;
    transition: background 0.2s ease;
}
.hero-cta:hover {
    background: #3f9fff;
}
.hero-cta-ghost {
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.35);
}
.hero-cta-ghost:hover {
    background: rgba(255, 255, 255, 0.08);
}
.hero-scroll {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    color: rgba(255, 255, 255, 0.7);
    font-size: 1.4rem;
    text-decoration: none;
    animation: hero-bob 2s ease-in-out infinite;
    transition: opacity 0.4s ease;
}
.hero-scroll.faded {
    opacity: 0;
    pointer-events: none;
}
@keyframes hero-bob {
    0%, 100% { transform: translateX(-50%) translateY(0); }
    50% { transform: translateX(-50%) translateY(8px); }
}
@media (max-width: 768px) {
    .hero-title {
        font-size: 2.3rem;
    }
}
"#;
