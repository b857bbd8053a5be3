use yew::prelude::*;

const SERVICES: [(&str, &str); 4] = [
    (
        "Brand identity",
        "Naming, visual systems and guidelines that survive contact with real products.",
    ),
    (
        "Web design",
        "Marketing sites and design systems, from first sketch to shipped front-end.",
    ),
    (
        "Product interfaces",
        "Interface design for web and mobile products, validated with real users.",
    ),
    (
        "Technical consulting",
        "Performance, accessibility and front-end architecture reviews.",
    ),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services" id="services">
            <h2 data-reveal="fade-up">{"What we do"}</h2>
            <div class="service-grid">
                { for SERVICES.iter().enumerate().map(|(i, (title, blurb))| html! {
                    <div
                        class="service-card"
                        data-tilt=""
                        data-reveal="fade-up"
                        data-reveal-delay={(i * 100).to_string()}
                    >
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </div>
                }) }
            </div>
            <style>{SERVICES_CSS}</style>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
.services {
    max-width: 1100px;
    margin: 0 auto;
    padding: 6rem 1.5rem;
}
.services h2 {
    font-size: 2.4rem;
    text-align: center;
    margin-bottom: 3rem;
}
.service-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
    gap: 1.5rem;
}
.service-card {
    background: rgba(30, 30, 36, 0.7);
    border: 1px solid rgba(126, 178, 255, 0.12);
    border-radius: 14px;
    padding: 2rem 1.6rem;
    will-change: transform;
    transition: transform 0.15s ease;
}
.service-card h3 {
    margin-bottom: 0.8rem;
    color: #7EB2FF;
}
.service-card p {
    color: rgba(255, 255, 255, 0.7);
    line-height: 1.5;
}
"#;
