use yew::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("128", "Projects shipped"),
    ("54", "Long-term clients"),
    ("12", "Years in business"),
    ("9", "Design awards"),
];

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats" id="work" data-reveal="fade-up">
            { for STATS.iter().map(|(target, label)| html! {
                <div class="stat">
                    <span class="stat-value" data-counter={*target}>{"0"}</span>
                    <span class="stat-label">{*label}</span>
                </div>
            }) }
            <style>{STATS_CSS}</style>
        </section>
    }
}

const STATS_CSS: &str = r#"
.stats {
    max-width: 1100px;
    margin: 0 auto;
    padding: 5rem 1.5rem;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
    gap: 2rem;
    text-align: center;
}
.stat-value {
    display: block;
    font-size: 3rem;
    font-weight: 700;
    color: #7EB2FF;
}
.stat-label {
    color: rgba(255, 255, 255, 0.65);
}
"#;
