use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::USD_TO_MNT;
use crate::locale::{Currency, Language, Localized};
use crate::pricing::{format_price, PricingPlan};
use crate::Route;

const AD_SPEND: Localized = Localized::new("Ad spend:", "Зарын төсөв:");
const PROMISE: Localized = Localized::new("Deliverable Promise:", "Амлалт:");
const APPLY_NOW: Localized = Localized::new("Apply Now", "Хүсэлт гаргах");

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: &'static PricingPlan,
    pub currency: Currency,
    pub language: Language,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = props.plan;
    let lang = props.language;
    let price = format_price(Some(&plan.price), props.currency, USD_TO_MNT);

    html! {
        <div class={classes!("plan-card", plan.highlight.then_some("highlight"))}>
            <div class="plan-tagline">{ plan.tagline }</div>
            <div class="plan-name">{ plan.name }</div>
            <div class="plan-price">{ price }</div>

            if !plan.ad_spend_note.is_empty() {
                <div class="plan-note">{ format!("{} {}", AD_SPEND.get(lang), plan.ad_spend_note) }</div>
            }

            if let Some(promise) = plan.promise {
                <div class="plan-promise">
                    <strong>{ PROMISE.get(lang) }</strong>{" "}{ promise }
                </div>
            }

            <div class="plan-features">
                <ul>
                    { for plan.features.iter().map(|f| html! {
                        <li><span class="check" aria-hidden="true">{"✓"}</span><span>{ *f }</span></li>
                    }) }
                </ul>
            </div>

            <Link<Route> to={Route::Apply} classes={classes!("plan-cta", plan.highlight.then_some("primary"))}>
                { APPLY_NOW.get(lang) }
                <span class="sheen" aria-hidden="true"><span></span></span>
            </Link<Route>>
        </div>
    }
}
