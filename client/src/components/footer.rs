//! Site footer with brand, link row and copyright.

use leptos::prelude::*;

const FOOTER_LINKS: [&str; 4] = ["TERMS", "PRIVACY", "COOKIES", "DMCA"];

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">"PAPER.IO 2025"</div>
            <nav class="site-footer__links">
                <a class="site-footer__link" href="/">"GAMES"</a>
                {FOOTER_LINKS
                    .iter()
                    .map(|label| view! { <span class="site-footer__link">{*label}</span> })
                    .collect::<Vec<_>>()}
            </nav>
            <p class="site-footer__legal">
                "© 2025 PAPER.IO UNBLOCKED SCHOOL NETWORK. THIS SITE IS PROVIDED \"AS IS\" FOR EDUCATIONAL AND ENTERTAINMENT PURPOSES. ALL TRADEMARKS BELONG TO THEIR RESPECTIVE OWNERS."
            </p>
        </footer>
    }
}
