use yew::prelude::*;
use yew_router::prelude::*;

use crate::locale::{use_locale, Localized};
use crate::Route;

const THANK_YOU: Localized = Localized::new("Thank you for applying!", "Хүсэлт илгээсэнд баярлалаа!");
const NEXT: Localized = Localized::new(
    "We'll review your answers and get back to you shortly.",
    "Бид таны хариултыг судлаад удахгүй эргэн холбогдоно.",
);
const BACK_HOME: Localized = Localized::new("Back to home", "Нүүр хуудас руу буцах");
const NOT_FOUND: Localized = Localized::new("Page not found", "Хуудас олдсонгүй");

#[derive(Properties, PartialEq)]
struct NoticeProps {
    title: AttrValue,
    #[prop_or_default]
    body: Option<AttrValue>,
    link: AttrValue,
}

#[function_component(Notice)]
fn notice(props: &NoticeProps) -> Html {
    html! {
        <main class="notice-page">
            <h1>{ &props.title }</h1>
            if let Some(body) = &props.body {
                <p>{ body }</p>
            }
            <Link<Route> to={Route::Home} classes="notice-link">
                { &props.link }{" →"}
            </Link<Route>>
            <style>
                {r#"
                    .notice-page {
                        max-width: 40rem;
                        margin: 0 auto;
                        padding: 8rem 2rem;
                        text-align: center;
                        position: relative;
                    }
                    .notice-page h1 {
                        font-size: 2.25rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .notice-page p {
                        opacity: 0.8;
                        margin-bottom: 2rem;
                    }
                    .notice-link {
                        display: inline-flex;
                        border-radius: 1rem;
                        background: #fff;
                        color: #000;
                        padding: 0.75rem 1.25rem;
                        font-weight: 500;
                        text-decoration: none;
                    }
                "#}
            </style>
        </main>
    }
}

#[function_component(Thanks)]
pub fn thanks() -> Html {
    let (locale, _) = use_locale();
    html! {
        <Notice
            title={locale.t(&THANK_YOU)}
            body={Some(AttrValue::from(locale.t(&NEXT)))}
            link={locale.t(&BACK_HOME)}
        />
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let (locale, _) = use_locale();
    html! {
        <Notice title={locale.t(&NOT_FOUND)} link={locale.t(&BACK_HOME)} />
    }
}
