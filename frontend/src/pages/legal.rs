use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::table::{PageModule, PageView};
use crate::seo::PageMeta;
use crate::Route;

pub fn terms_module() -> PageModule {
    PageModule::new(
        PageMeta::new(
            "Terms of Service",
            "The terms that apply when you use the Fieldwork Studio website.",
            "/terms",
        ),
        PageView::Terms,
    )
}

pub fn privacy_module() -> PageModule {
    PageModule::new(
        PageMeta::new(
            "Privacy Policy",
            "What we collect through this website, why, and how to ask us to delete it.",
            "/privacy",
        ),
        PageView::Privacy,
    )
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Terms of Service"}</h1>
                <p class="updated">{"Last updated: 2 March 2026"}</p>

                <section>
                    <h2>{"1. About these terms"}</h2>
                    <p>{"This website is operated by Fieldwork Studio Oy. By using it you agree to these terms. Client engagements are governed by a separate signed agreement."}</p>
                </section>

                <section>
                    <h2>{"2. Content"}</h2>
                    <p>{"Case studies, images and text on this site belong to Fieldwork Studio or our clients and are shown with permission. Please don't reuse them without asking."}</p>
                </section>

                <section>
                    <h2>{"3. Enquiries"}</h2>
                    <p>{"Sending us an enquiry does not create a contract. Quotes are valid for 30 days unless stated otherwise."}</p>
                </section>

                <section>
                    <h2>{"4. Liability"}</h2>
                    <p>{"We keep this site accurate but provide it as is. We are not liable for losses arising from its use, to the extent permitted by law."}</p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Privacy Policy"}</h1>
                <p class="updated">{"Last updated: 2 March 2026"}</p>

                <section>
                    <h2>{"What we collect"}</h2>
                    <ul>
                        <li>{"What you send through the contact and booking forms: name, email, company and your message."}</li>
                        <li>{"Anonymous, cookie-free page view counts."}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"How we use it"}</h2>
                    <p>{"Only to reply to your enquiry and, if we work together, to run the project. We never sell or share it for marketing."}</p>
                </section>

                <section>
                    <h2>{"Processors"}</h2>
                    <p>{"Form submissions are delivered to our inbox by a third-party form service based in the EU."}</p>
                </section>

                <section>
                    <h2>{"Your rights"}</h2>
                    <p>
                        {"Email "}
                        <a href="mailto:privacy@fieldwork.studio">{"privacy@fieldwork.studio"}</a>
                        {" to see, correct or delete anything we hold about you."}
                    </p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
