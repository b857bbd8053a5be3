use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about" id="studio" data-reveal="fade">
            <div class="about-text">
                <h2>{"A small studio, on purpose"}</h2>
                <p>
                    {"We keep the team deliberately small so the people you meet in the first
                      call are the ones doing the work. No handoffs, no account layers."}
                </p>
                <p>
                    {"Since 2014 we have shipped brands and products for companies across
                      Brazil and abroad, from seed-stage startups to public institutions."}
                </p>
            </div>
            <div class="about-photos">
                <img data-src="/assets/studio-space.jpg" alt="The Vetra studio space" />
                <img data-src="/assets/studio-team.jpg" alt="The team at work" />
            </div>
            <style>{ABOUT_CSS}</style>
        </section>
    }
}

const ABOUT_CSS: &str = r#"
.about {
    max-width: 1100px;
    margin: 0 auto;
    padding: 4rem 1.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}
.about h2 {
    font-size: 2.2rem;
    margin-bottom: 1.2rem;
}
.about p {
    color: rgba(255, 255, 255, 0.72);
    line-height: 1.6;
    margin-bottom: 1rem;
}
.about-photos {
    display: grid;
    gap: 1rem;
}
.about-photos img {
    width: 100%;
    border-radius: 12px;
    opacity: 0;
    transition: opacity 0.5s ease;
}
.about-photos img.loaded {
    opacity: 1;
}
@media (max-width: 768px) {
    .about {
        grid-template-columns: 1fr;
    }
}
"#;
