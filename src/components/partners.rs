use yew::prelude::*;

const PARTNERS: [&str; 6] = [
    "Altamira Coffee",
    "Brisa Bank",
    "Cobalto Games",
    "Drift Mobility",
    "Estela Health",
    "Farol Media",
];

#[function_component(Partners)]
pub fn partners() -> Html {
    html! {
        <section class="partners" id="partners" data-reveal="fade">
            <h2>{"Companies we work with"}</h2>
            <div class="partners-viewport">
                // The list is doubled so the CSS loop is seamless.
                <div class="partners-track" tabindex="0">
                    { for PARTNERS.iter().chain(PARTNERS.iter()).map(|name| html! {
                        <span class="partner">{*name}</span>
                    }) }
                </div>
            </div>
            <style>{PARTNERS_CSS}</style>
        </section>
    }
}

const PARTNERS_CSS: &str = r#"
.partners {
    padding: 4rem 0;
    text-align: center;
}
.partners h2 {
    font-size: 1.4rem;
    color: rgba(255, 255, 255, 0.6);
    margin-bottom: 2rem;
}
.partners-viewport {
    overflow: hidden;
}
.partners-track {
    display: flex;
    gap: 4rem;
    width: max-content;
    padding: 0 2rem;
    animation: partners-slide 24s linear infinite;
}
.partner {
    font-size: 1.3rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.45);
    white-space: nowrap;
}
@keyframes partners-slide {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}
"#;
