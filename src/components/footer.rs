use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <span>{"© 2026 Vetra Studio — São Paulo"}</span>
                <div class="footer-links">
                    <a href="mailto:hello@vetra.studio">{"hello@vetra.studio"}</a>
                    <a href="#top">{"Back to top"}</a>
                </div>
            </div>
            <style>{FOOTER_CSS}</style>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
.footer {
    border-top: 1px solid rgba(255, 255, 255, 0.08);
    padding: 2rem 1.5rem;
}
.footer-inner {
    max-width: 1100px;
    margin: 0 auto;
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 1rem;
    color: rgba(255, 255, 255, 0.55);
}
.footer-links {
    display: flex;
    gap: 1.5rem;
}
.footer-links a {
    color: rgba(255, 255, 255, 0.7);
    text-decoration: none;
}
.footer-links a:hover {
    color: #7EB2FF;
}
"#;
