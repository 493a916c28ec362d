use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::forms::{BookingForm, ContactForm};
use crate::routing::table::{PageModule, PageView};
use crate::seo::PageMeta;

pub fn module() -> PageModule {
    PageModule::new(
        PageMeta::new(
            "Contact",
            "Say hello or request a proposal. We reply to every enquiry within two working days.",
            "/contact",
        ),
        PageView::Contact,
    )
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Hello,
    Project,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let tab = use_state(|| Tab::Hello);

    let switch_to = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            tab.set(target);
        })
    };

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Let's talk"}</h1>
                <p>{"Tell us a little about yourself. A real person reads every message."}</p>
            </section>

            <div class="contact-layout">
                <aside class="contact-details">
                    <h3>{"Studio"}</h3>
                    <p>{"Fieldwork Studio Oy"}<br/>{"Tallberginkatu 1"}<br/>{"00180 Helsinki"}</p>
                    <h3>{"Email"}</h3>
                    <p><a href="mailto:hello@fieldwork.studio">{"hello@fieldwork.studio"}</a></p>
                    <h3>{"New business"}</h3>
                    <p><a href="mailto:new@fieldwork.studio">{"new@fieldwork.studio"}</a></p>
                </aside>

                <div class="contact-forms">
                    <div class="form-tabs" role="tablist">
                        <button
                            role="tab"
                            class={classes!("form-tab", (*tab == Tab::Hello).then(|| "active"))}
                            onclick={switch_to(Tab::Hello)}
                        >
                            {"Say hello"}
                        </button>
                        <button
                            role="tab"
                            class={classes!("form-tab", (*tab == Tab::Project).then(|| "active"))}
                            onclick={switch_to(Tab::Project)}
                        >
                            {"Start a project"}
                        </button>
                    </div>
                    {
                        match *tab {
                            Tab::Hello => html! { <ContactForm /> },
                            Tab::Project => html! { <BookingForm /> },
                        }
                    }
                </div>
            </div>
        </div>
    }
}
