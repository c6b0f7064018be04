use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::counter::Counter;
use crate::components::magnetic::Magnetic;
use crate::components::plan_card::PlanCard;
use crate::components::reveal::Reveal;
use crate::locale::{use_locale, Currency, LocaleAction, Localized, Track};
use crate::pricing::{order_plans, plans_for};
use crate::Route;

struct CounterSpec {
    key: &'static str,
    end: f64,
    decimals: usize,
    label: Localized,
    suffix: Option<&'static str>,
}

const COUNTERS: &[CounterSpec] = &[
    CounterSpec {
        key: "brands",
        end: 120.0,
        decimals: 0,
        label: Localized::new("+ brands supported", "+ брэнд хамтран ажилласан"),
        suffix: None,
    },
    CounterSpec {
        key: "ad",
        end: 1_000_000.0,
        decimals: 0,
        label: Localized::new("$ managed ad/mo*", "$/сар зарын менежмент*"),
        suffix: None,
    },
    CounterSpec {
        key: "roas",
        end: 4.8,
        decimals: 1,
        label: Localized::new("avg. ROAS on scale*", "дундаж ROAS*"),
        suffix: Some("x"),
    },
];

struct Service {
    title: Localized,
    bullets: [Localized; 3],
}

const SERVICES: &[Service] = &[
    Service {
        title: Localized::new("Performance Media Buying", "Гүйцэтгэлд суурилсан медиа"),
        bullets: [
            Localized::new("Meta, TikTok, Google", "Meta, TikTok, Google"),
            Localized::new("Offer + audience testing", "Санал/аудит тест"),
            Localized::new("Daily optimization", "Өдөр тутмын оновчлол"),
        ],
    },
    Service {
        title: Localized::new("CRO & Landing Pages", "CRO ба Лэндинг"),
        bullets: [
            Localized::new("On-page experiments", "Хуудас туршилт"),
            Localized::new("A/B testing", "A/B тест"),
            Localized::new("Speed & tracking", "Хурд & хэмжилт"),
        ],
    },
    Service {
        title: Localized::new("UGC & Creatives", "UGC ба Креатив"),
        bullets: [
            Localized::new("Briefs & hooks", "Бриф & hook"),
            Localized::new("Editing guidance", "Засварын чиглэл"),
            Localized::new("Content calendar", "Контент календарь"),
        ],
    },
];

const CASES: &[(&str, &str, &str)] = &[
    ("NomadTea", "+212% AOV", "New hooks + CRO sprint"),
    ("SteppeFit", "3.9x ROAS", "Cold to warm funnel"),
    ("KhatanBeauty", "-42% CPA", "Creative angles test"),
];

const STEPS: &[(Localized, Localized)] = &[
    (
        Localized::new("Audit & plan", "Аудит, төлөвлөгөө"),
        Localized::new("Account + store audit, targets, KPI model.", "Данс, дэлгүүрийн аудит, зорилго, KPI."),
    ),
    (
        Localized::new("Build systems", "Систем бүтээх"),
        Localized::new("Tracking, offers, creative briefs, pages.", "Хэмжилт, санал, креатив бриф, лэндинг."),
    ),
    (
        Localized::new("Launch & learn", "Нэвтрүүлж тестлэх"),
        Localized::new("Structured tests to find winners fast.", "Ялагч креатив/саналыг хурдан олох тест."),
    ),
    (
        Localized::new("Scale", "Тэлэх"),
        Localized::new("Budget ramp, LTV plays, new channels.", "Төсөв нэмэгдүүлэлт, LTV, шинэ суваг."),
    ),
    (
        Localized::new("Optimize", "Оновчлох"),
        Localized::new("CRO sprints, feed + catalog hygiene.", "CRO спринт, фийд/каталог цэвэрлэгээ."),
    ),
    (
        Localized::new("Report & repeat", "Тайлан, давтах"),
        Localized::new("Weekly insights, next tests.", "7 хоногийн тайлан, дараагийн тест."),
    ),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Ariunaa, NomadTea", "They built us a predictable funnel in 3 weeks."),
    ("Bilguun, SteppeFit", "Creative testing finally clicked. Costs dropped fast."),
    ("Khaliun, KhatanBeauty", "The landing refresh doubled our conversion rate."),
];

const FAQ: &[(Localized, Localized)] = &[
    (
        Localized::new("How fast can we launch?", "Хэзээ эхлэх вэ?"),
        Localized::new(
            "Most brands launch within 7–10 days after audit and setup.",
            "Аудит, тохиргооны дараа ихэнх брэнд 7–10 хоногт эхэлдэг.",
        ),
    ),
    (
        Localized::new("Do you need long-term contracts?", "Урт хугацааны гэрээ хэрэгтэй юу?"),
        Localized::new("No. Month-to-month with clear KPIs.", "Үгүй. KPI тодорхой, сараар сунгана."),
    ),
    (
        Localized::new("Can you work with my existing creatives?", "Одоо байгаа креатив ашиглаж болох уу?"),
        Localized::new(
            "Yes — we test your assets and supply new angles if needed.",
            "Тийм — таны материалыг тестлээд, шаардлагатай бол шинэ өнцөг гаргана.",
        ),
    ),
    (
        Localized::new("Which industries do you support?", "Ямар салбаруудтай ажилладаг вэ?"),
        Localized::new(
            "E-commerce and local services (beauty, fitness, education, food, more).",
            "E-коммерс болон үйлчилгээ (гоо сайхан, фитнес, боловсрол, хоол, бусад).",
        ),
    ),
];

const TRUSTED_BY: &[&str] = &[
    "BrandOne", "NomadTea", "SteppeFit", "UlaanStore", "SkyBakery", "AltanTech", "KhatanBeauty",
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let (locale, dispatch) = use_locale();
    let lang = locale.language;

    let track_button = |track: Track| {
        let dispatch = dispatch.clone();
        let onclick = Callback::from(move |_: MouseEvent| dispatch.emit(LocaleAction::SetTrack(track)));
        html! {
            <button
                class={classes!("segment", (locale.track == track).then_some("active"))}
                {onclick}
            >
                { track.label().get(lang) }
            </button>
        }
    };

    let currency_button = |currency: Currency| {
        let dispatch = dispatch.clone();
        let onclick = Callback::from(move |_: MouseEvent| dispatch.emit(LocaleAction::SetCurrency(currency)));
        html! {
            <button
                class={classes!("segment", (locale.currency == currency).then_some("active"))}
                {onclick}
            >
                { currency.code() }
            </button>
        }
    };

    let plans = order_plans(plans_for(locale.track));

    html! {
        <div class="landing-page">
            // Hero
            <section id="home" class="hero">
                <div class="hero-orbs" aria-hidden="true">
                    <div class="orb orb-a"></div>
                    <div class="orb orb-b"></div>
                </div>
                <div class="section-inner hero-grid">
                    <div class="hero-copy">
                        <Reveal index={0}>
                            <div class="hero-badge">
                                {"✦ "}
                                { locale.t(&Localized::new("Direct-to-Consumer growth systems", "D2C өсөлтийн систем")) }
                            </div>
                        </Reveal>
                        <Reveal index={1}>
                            <h1 class="hero-title">
                                <span class="gradient-text">
                                    { locale.t(&Localized::new(
                                        "We build, launch, and scale profitable ad systems.",
                                        "Бид ашигтай зарын систем бүтээж, нэвтрүүлж, тэлдэг.",
                                    )) }
                                </span>
                            </h1>
                        </Reveal>
                        <Reveal index={2}>
                            <p class="hero-subtitle">
                                { locale.t(&Localized::new(
                                    "Done-for-you media buying, conversion, and creative for e-commerce & service brands in Mongolia and beyond.",
                                    "Монгол болон гадаадын e-коммерс, үйлчилгээний брэндүүдэд зориулсан медиа худалдан авалт, хөрвүүлэлт, креативын иж бүрэн үйлчилгээ.",
                                )) }
                            </p>
                        </Reveal>
                        <Reveal index={3}>
                            <div class="hero-cta-group">
                                <Magnetic>
                                    <Link<Route> to={Route::Apply} classes="hero-cta">
                                        { locale.t(&Localized::new("Get a proposal", "Санал авахаар холбогдох")) }
                                        {" →"}
                                        <span class="sheen" aria-hidden="true"><span></span></span>
                                    </Link<Route>>
                                </Magnetic>
                                <a href="#work" class="hero-secondary">
                                    { locale.t(&Localized::new("See our work", "Төслүүдийг харах")) }
                                </a>
                            </div>
                        </Reveal>
                    </div>
                    <div class="hero-media">
                        <div class="media-frame">
                            <div class="media-float">
                                { locale.t(&Localized::new("Your case study video / image", "Танай кейс видеo / зураг")) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Trust bar
            <section class="trust-bar">
                <div class="section-inner trust-inner">
                    <span class="trust-label">
                        { locale.t(&Localized::new("Trusted by", "Дараах брэндүүд итгэдэг")) }
                    </span>
                    <div class="marquee-mask">
                        <div class="marquee-track">
                            { for TRUSTED_BY.iter().chain(TRUSTED_BY.iter()).map(|name| html! {
                                <div class="marquee-chip">{ *name }</div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            // Results
            <section id="results" class="section-inner section">
                <div class="grid-3">
                    { for COUNTERS.iter().enumerate().map(|(i, c)| html! {
                        <Reveal key={c.key} index={i}>
                            <Counter
                                end={c.end}
                                decimals={c.decimals}
                                label={locale.t(&c.label)}
                                suffix={c.suffix.map(AttrValue::from)}
                            />
                        </Reveal>
                    }) }
                </div>
                <p class="footnote">
                    { locale.t(&Localized::new(
                        "*Placeholders. Replace with your real metrics.",
                        "*Түр тоо. Жинхэнэ үзүүлэлтээр солино уу.",
                    )) }
                </p>
            </section>

            // Services
            <section id="services" class="section-inner section">
                <h2 class="section-title">{ locale.t(&Localized::new("What we do", "Бид юу хийдэг вэ")) }</h2>
                <div class="grid-3">
                    { for SERVICES.iter().enumerate().map(|(i, s)| html! {
                        <Reveal index={i}>
                            <div class="card lift">
                                <div class="card-title">{ locale.t(&s.title) }</div>
                                <ul class="check-list">
                                    { for s.bullets.iter().map(|b| html! {
                                        <li><span class="check" aria-hidden="true">{"✓"}</span><span>{ locale.t(b) }</span></li>
                                    }) }
                                </ul>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            // Selected work
            <section id="work" class="section-inner section">
                <h2 class="section-title">{ locale.t(&Localized::new("Selected Work", "Сонгосон төслүүд")) }</h2>
                <div class="grid-3">
                    { for CASES.iter().enumerate().map(|(i, (brand, result, desc))| html! {
                        <Reveal index={i}>
                            <div class="card lift case-card">
                                <div class="case-thumb"></div>
                                <div class="card-title">{ *brand }</div>
                                <div class="case-result">{ *result }</div>
                                <p class="muted">{ *desc }</p>
                                <Link<Route> to={Route::Apply} classes="case-link">
                                    { locale.t(&Localized::new("Request full case", "Дэлгэрэнгүй үзэх")) }{" ›"}
                                </Link<Route>>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            // Process
            <section id="process" class="section-inner section">
                <h2 class="section-title">{ locale.t(&Localized::new("How we work", "Бид хэрхэн ажилладаг")) }</h2>
                <ol class="grid-3 steps">
                    { for STEPS.iter().enumerate().map(|(i, (title, desc))| html! {
                        <li>
                            <Reveal index={i}>
                                <div class="card">
                                    <div class="step-number">{ format!("{}.", i + 1) }</div>
                                    <div class="card-title">{ locale.t(title) }</div>
                                    <p class="muted">{ locale.t(desc) }</p>
                                </div>
                            </Reveal>
                        </li>
                    }) }
                </ol>
            </section>

            // Pricing
            <section id="pricing" class="section-inner section">
                <h2 class="section-title">{ locale.t(&Localized::new("Pricing", "Үнийн санал")) }</h2>
                <div class="pricing-controls">
                    <div class="segmented">
                        { for Track::ALL.iter().map(|t| track_button(*t)) }
                    </div>
                    <div class="segmented push-right">
                        { currency_button(Currency::Mnt) }
                        { currency_button(Currency::Usd) }
                    </div>
                </div>
                <div class="grid-3 plans">
                    { for plans.iter().enumerate().map(|(i, plan)| html! {
                        <Reveal key={plan.name} index={i} class="plan-slot">
                            <PlanCard plan={*plan} currency={locale.currency} language={lang} />
                        </Reveal>
                    }) }
                </div>
                <p class="footnote">
                    { locale.t(&Localized::new(
                        "Includes monthly management. Ad budgets listed are separate client spend; adjustable. No long-term lock-ins.",
                        "Сарын менежмент багтсан. Дурдсан зарын төсөв нь харилцагчийн тусдаа зардал; өөрчилж болно. Урт хугацааны гэрээ шаардлагагүй.",
                    )) }
                </p>
            </section>

            // Testimonials
            <section class="section-inner section">
                <h2 class="section-title">{ locale.t(&Localized::new("What clients say", "Харилцагчдын сэтгэгдэл")) }</h2>
                <div class="grid-3">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, (name, quote))| html! {
                        <Reveal index={i}>
                            <div class="card">
                                <div class="stars">{"★ ★ ★ ★ ★"}</div>
                                <p class="quote">{ *quote }</p>
                                <div class="attribution">{ format!("— {}", name) }</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            // FAQ
            <section class="section-inner section">
                <h2 class="section-title">{"FAQ"}</h2>
                <div class="faq-grid">
                    { for FAQ.iter().map(|(q, a)| html! {
                        <FaqItem question={locale.t(q)} answer={locale.t(a)} />
                    }) }
                </div>
            </section>

            <style>
                {r#"
                    .landing-page {
                        position: relative;
                    }
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding-left: 2rem;
                        padding-right: 2rem;
                    }
                    .section {
                        padding-top: 5rem;
                        padding-bottom: 5rem;
                    }
                    .section-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .grid-3 {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 1.5rem;
                        list-style: none;
                        padding: 0;
                    }
                    .card {
                        border: 1px solid rgba(148, 163, 184, 0.25);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        background: rgba(15, 23, 42, 0.4);
                        backdrop-filter: blur(8px);
                        height: 100%;
                        transition: box-shadow 0.5s ease, transform 0.5s ease;
                    }
                    .card:hover {
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
                    }
                    .card.lift:hover {
                        transform: translateY(-2px);
                    }
                    .card-title {
                        font-weight: 600;
                        font-size: 1.125rem;
                        margin-bottom: 0.5rem;
                    }
                    .muted {
                        font-size: 0.875rem;
                        color: #cbd5e1;
                        margin-top: 0.25rem;
                    }
                    .check-list, .plan-features ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                    .check-list li, .plan-features li {
                        display: flex;
                        gap: 0.5rem;
                        align-items: flex-start;
                    }
                    .footnote {
                        font-size: 0.75rem;
                        color: #94a3b8;
                        margin-top: 0.75rem;
                    }

                    .hero {
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-orbs {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                    }
                    .orb {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                    }
                    .orb-a {
                        top: -6rem;
                        left: -4rem;
                        height: 20rem;
                        width: 20rem;
                        opacity: 0.2;
                        background: linear-gradient(to bottom right, #818cf8, #67e8f9);
                    }
                    .orb-b {
                        bottom: -4rem;
                        right: -2rem;
                        height: 24rem;
                        width: 24rem;
                        opacity: 0.15;
                        background: linear-gradient(to bottom right, #e879f9, #d8b4fe);
                    }
                    .hero-grid {
                        position: relative;
                        display: grid;
                        grid-template-columns: 7fr 5fr;
                        gap: 2.5rem;
                        align-items: center;
                        padding-top: 7rem;
                        padding-bottom: 7rem;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: 1px solid rgba(148, 163, 184, 0.3);
                        border-radius: 9999px;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero-title {
                        font-size: 3.75rem;
                        font-weight: 800;
                        letter-spacing: -0.025em;
                        line-height: 1.15;
                        margin: 0;
                    }
                    .gradient-text {
                        background: linear-gradient(to right, #fff, #818cf8, #fff);
                        background-size: 200% auto;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        display: inline-block;
                        animation: floaty 6s ease-in-out infinite;
                    }
                    .hero-subtitle {
                        margin-top: 1.25rem;
                        font-size: 1.125rem;
                        color: #cbd5e1;
                        max-width: 42rem;
                    }
                    .hero-cta-group {
                        margin-top: 2rem;
                        display: flex;
                        gap: 0.75rem;
                        flex-wrap: wrap;
                    }
                    .magnetic {
                        display: inline-block;
                        will-change: transform;
                    }
                    .hero-cta {
                        position: relative;
                        display: inline-flex;
                        align-items: center;
                        border-radius: 1rem;
                        background: #fff;
                        color: #000;
                        padding: 0.75rem 1.25rem;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .hero-secondary {
                        display: inline-flex;
                        align-items: center;
                        border: 1px solid rgba(148, 163, 184, 0.4);
                        border-radius: 1rem;
                        padding: 0.75rem 1.25rem;
                        font-weight: 500;
                        color: inherit;
                        text-decoration: none;
                    }
                    .sheen {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        border-radius: inherit;
                    }
                    .sheen span {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: -50%;
                        width: 33%;
                        background: rgba(0, 0, 0, 0.1);
                        filter: blur(4px);
                        animation: sheen 1.2s ease-in-out infinite;
                    }
                    .media-frame {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        border: 1px solid rgba(148, 163, 184, 0.25);
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: linear-gradient(to bottom right, #1e293b, #0f172a);
                    }
                    .media-float {
                        height: 100%;
                        display: grid;
                        place-items: center;
                        font-size: 0.875rem;
                        opacity: 0.8;
                        animation: floaty 8s ease-in-out infinite;
                    }

                    .trust-bar {
                        border-top: 1px solid #1e293b;
                        border-bottom: 1px solid #1e293b;
                    }
                    .trust-inner {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        padding-top: 1.5rem;
                        padding-bottom: 1.5rem;
                    }
                    .trust-label {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        opacity: 0.6;
                        white-space: nowrap;
                    }
                    .marquee-mask {
                        position: relative;
                        overflow: hidden;
                        flex: 1;
                        -webkit-mask-image: linear-gradient(90deg, rgba(0,0,0,0), #000 6%, #000 94%, rgba(0,0,0,0));
                        mask-image: linear-gradient(90deg, rgba(0,0,0,0), #000 6%, #000 94%, rgba(0,0,0,0));
                    }
                    .marquee-track {
                        display: flex;
                        gap: 2.5rem;
                        width: max-content;
                        animation: marquee 32s linear infinite;
                        will-change: transform;
                    }
                    .marquee-chip {
                        height: 2rem;
                        width: 7rem;
                        border: 1px solid rgba(30, 41, 59, 0.6);
                        border-radius: 0.75rem;
                        background: rgba(15, 23, 42, 0.5);
                        display: grid;
                        place-items: center;
                        font-size: 11px;
                        opacity: 0.8;
                    }

                    .counter-card {
                        border: 1px solid rgba(148, 163, 184, 0.25);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        background: rgba(15, 23, 42, 0.4);
                        backdrop-filter: blur(8px);
                    }
                    .counter-icon, .check {
                        color: #6366f1;
                        font-weight: 700;
                    }
                    .counter-value {
                        font-size: 1.875rem;
                        font-weight: 800;
                    }
                    .counter-label {
                        font-size: 0.875rem;
                        opacity: 0.7;
                    }

                    .case-thumb {
                        aspect-ratio: 16 / 9;
                        border-radius: 0.75rem;
                        background: linear-gradient(to bottom right, #1e293b, #0f172a);
                        margin-bottom: 1rem;
                    }
                    .case-result {
                        font-size: 0.875rem;
                        opacity: 0.7;
                    }
                    .case-link {
                        display: inline-flex;
                        margin-top: 0.75rem;
                        color: #6366f1;
                        text-decoration: none;
                    }
                    .step-number {
                        font-size: 0.875rem;
                        opacity: 0.7;
                        margin-bottom: 0.25rem;
                    }

                    .pricing-controls {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .segmented {
                        display: inline-flex;
                        border: 1px solid rgba(148, 163, 184, 0.4);
                        border-radius: 1rem;
                        overflow: hidden;
                    }
                    .segmented.push-right {
                        margin-left: auto;
                    }
                    .segment {
                        background: transparent;
                        color: inherit;
                        border: none;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        cursor: pointer;
                    }
                    .segment:hover {
                        background: #0f172a;
                    }
                    .segment.active {
                        background: #fff;
                        color: #000;
                    }
                    .plans {
                        align-items: stretch;
                    }
                    .plan-slot {
                        height: 100%;
                    }
                    .plan-card {
                        height: 100%;
                        border: 1px solid rgba(148, 163, 184, 0.25);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        background: rgba(15, 23, 42, 0.4);
                        backdrop-filter: blur(8px);
                        transition: box-shadow 0.5s ease, transform 0.5s ease;
                    }
                    .plan-card:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.4);
                    }
                    .plan-card.highlight {
                        box-shadow: 0 0 0 2px #4f46e5;
                    }
                    .plan-tagline {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        opacity: 0.7;
                        margin-bottom: 0.25rem;
                    }
                    .plan-name {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .plan-price {
                        margin-top: 0.75rem;
                        font-size: 1.875rem;
                        font-weight: 800;
                    }
                    .plan-note {
                        margin-top: 0.25rem;
                        font-size: 0.75rem;
                        opacity: 0.7;
                    }
                    .plan-promise {
                        margin-top: 0.75rem;
                        font-size: 0.875rem;
                        border: 1px solid rgba(148, 163, 184, 0.3);
                        border-radius: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .plan-features {
                        margin-top: 1.25rem;
                        flex: 1;
                        min-height: 0;
                        overflow: auto;
                        padding-right: 0.25rem;
                    }
                    .plan-features::-webkit-scrollbar {
                        width: 6px;
                    }
                    .plan-features::-webkit-scrollbar-thumb {
                        background: rgba(100, 116, 139, .35);
                        border-radius: 9999px;
                    }
                    .plan-cta {
                        margin-top: 1.5rem;
                        position: relative;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 1rem;
                        padding: 0.5rem 1rem;
                        font-weight: 500;
                        border: 1px solid rgba(148, 163, 184, 0.4);
                        color: inherit;
                        text-decoration: none;
                    }
                    .plan-cta.primary {
                        background: #fff;
                        color: #000;
                        border-color: transparent;
                    }

                    .stars {
                        font-size: 0.875rem;
                        opacity: 0.7;
                    }
                    .quote {
                        margin-top: 0.75rem;
                    }
                    .attribution {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        opacity: 0.7;
                    }

                    .faq-grid {
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 1.5rem;
                    }
                    .faq-item {
                        border: 1px solid rgba(148, 163, 184, 0.25);
                        border-radius: 1rem;
                        padding: 1.5rem;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: none;
                        border: none;
                        color: inherit;
                        font-weight: 600;
                        font-size: 1rem;
                        text-align: left;
                        cursor: pointer;
                        padding: 0;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 20rem;
                    }

                    .reveal {
                        opacity: 0;
                        transform: translateY(16px);
                        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                    }
                    .reveal.shown {
                        opacity: 1;
                        transform: none;
                    }

                    @keyframes floaty {
                        0% { transform: translateY(0) }
                        50% { transform: translateY(-6px) }
                        100% { transform: translateY(0) }
                    }
                    @keyframes sheen {
                        0% { transform: translateX(-120%) }
                        100% { transform: translateX(120%) }
                    }
                    @keyframes marquee {
                        from { transform: translateX(0) }
                        to { transform: translateX(-50%) }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal { transform: none; transition: opacity 0.2s linear; }
                        .gradient-text, .media-float, .marquee-track, .sheen span { animation: none; }
                    }
                    @media (max-width: 768px) {
                        .hero-grid, .grid-3, .faq-grid {
                            grid-template-columns: minmax(0, 1fr);
                        }
                        .hero-grid {
                            padding-top: 5rem;
                            padding-bottom: 5rem;
                        }
                        .hero-title {
                            font-size: 2.25rem;
                        }
                        .trust-inner {
                            display: block;
                        }
                        .trust-label {
                            display: block;
                            margin-bottom: 0.75rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_process_steps_and_four_faqs() {
        assert_eq!(STEPS.len(), 6);
        assert_eq!(FAQ.len(), 4);
    }

    #[test]
    fn only_fractional_counters_carry_decimals() {
        for c in COUNTERS {
            assert_eq!(c.decimals > 0, c.end.fract() != 0.0, "{}", c.key);
        }
    }

    #[test]
    fn copy_is_translated() {
        let all = COUNTERS
            .iter()
            .map(|c| c.label)
            .chain(SERVICES.iter().map(|s| s.title))
            .chain(STEPS.iter().flat_map(|(t, d)| [*t, *d]))
            .chain(FAQ.iter().flat_map(|(q, a)| [*q, *a]));
        for text in all {
            assert!(!text.en.is_empty() && !text.mn.is_empty(), "{:?}", text);
        }
    }
}
