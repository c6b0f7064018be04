//! Pricing catalogue and the price formatting used by the plan cards.

use crate::locale::{Currency, Track};

/// How a plan is priced: a flat MNT amount or a USD-denominated one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceDescriptor {
    Local(u64),
    Usd(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub tagline: &'static str,
    pub highlight: bool,
    pub price: PriceDescriptor,
    pub ad_spend_note: &'static str,
    pub features: &'static [&'static str],
    pub promise: Option<&'static str>,
}

/// Formats a monthly price for the selected currency.
///
/// Conversions round to the nearest whole unit. An absent price renders as an
/// empty string.
pub fn format_price(price: Option<&PriceDescriptor>, currency: Currency, usd_to_mnt: u64) -> String {
    let rate = usd_to_mnt as f64;
    match (price, currency) {
        (None, _) => String::new(),
        (Some(PriceDescriptor::Usd(usd)), Currency::Usd) => format!("${} / mo", group_thousands(*usd)),
        (Some(PriceDescriptor::Usd(usd)), Currency::Mnt) => {
            let mnt = (*usd as f64 * rate).round() as u64;
            format!("{} {} / mo", group_thousands(mnt), Currency::Mnt)
        }
        (Some(PriceDescriptor::Local(mnt)), Currency::Usd) => {
            let usd = (*mnt as f64 / rate).round() as u64;
            format!("${} / mo", group_thousands(usd))
        }
        (Some(PriceDescriptor::Local(mnt)), Currency::Mnt) => {
            format!("{} {} / mo", group_thousands(*mnt), Currency::Mnt)
        }
    }
}

/// `3450000` -> `3,450,000`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Puts the highlighted plan in the middle of a three-card row.
///
/// Any other shape (no highlight, already centred, not exactly three plans)
/// keeps the catalogue order.
pub fn order_plans(plans: &[PricingPlan]) -> Vec<&PricingPlan> {
    let highlighted = plans.iter().position(|p| p.highlight);
    match highlighted {
        Some(hi) if hi != 1 && plans.len() == 3 => {
            let mut others = plans.iter().enumerate().filter(|(i, _)| *i != hi).map(|(_, p)| p);
            match (others.next(), others.next()) {
                (Some(first), Some(last)) => vec![first, &plans[hi], last],
                _ => plans.iter().collect(),
            }
        }
        _ => plans.iter().collect(),
    }
}

pub fn plans_for(track: Track) -> &'static [PricingPlan] {
    match track {
        Track::Ecom => ECOM_PLANS,
        Track::Service => SERVICE_PLANS,
    }
}

static ECOM_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter Growth",
        tagline: "Anchor — Most Popular",
        highlight: true,
        price: PriceDescriptor::Local(4_200_000),
        ad_spend_note: "Client ad spend 1.5M+ MNT",
        features: &[
            "Shopify setup/optimization (bank transfer & site setup)",
            "Pixel + GA4 + Meta CAPI tracking",
            "Meta Ads management (real campaigns) – 6–8 creatives/mo",
            "Community management",
            "3 essential flows (Email & SMS): Welcome, Sales, Abandoned Cart",
            "Messenger/IG chatbot 24/7 (basic FAQs, order follow-up)",
            "Weekly KPI report: Spend, Orders, Sales, ROAS",
        ],
        promise: None,
    },
    PricingPlan {
        name: "Scaling OS",
        tagline: "Structured growth",
        highlight: false,
        price: PriceDescriptor::Local(8_600_000),
        ad_spend_note: "Client ad spend 6M+ MNT",
        features: &[
            "Everything in Starter Growth",
            "Meta scaling + Google Ads + TikTok Ads",
            "15–20 creatives/mo (+ design)",
            "6–8 flows: Post-purchase, Review, Winback, Promo blasts",
            "Advanced chatbot: cart recovery, product finder, upsell prompts",
            "CRO: 1–2 landing/checkout tests per month",
            "Bi-weekly reporting call + live dashboard",
        ],
        promise: Some("Improve ROAS/MER by 30% within 90 days"),
    },
    PricingPlan {
        name: "Market Dominator (Prestige)",
        tagline: "Category ownership",
        highlight: false,
        price: PriceDescriptor::Usd(5_000),
        ad_spend_note: "Client ad spend 20M+ MNT",
        features: &[
            "Everything in Scaling OS",
            "Agency Backend Setup",
            "Dedicated creative: 40+ ads/month (UGC, scripted, testimonials)",
            "Full-funnel ads: Meta, TikTok, Google, YouTube",
            "Monthly CRO sprint: new LPs, A/B testing offers/bundles",
            "Full Email/SMS management (2–3 campaigns/week)",
            "Loyalty program + review automation setup",
            "Weekly strategy call + quarterly roadmap",
        ],
        promise: Some("Double monthly online revenue within 90 days (with agreed ad budget)"),
    },
];

static SERVICE_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Lead Engine Starter",
        tagline: "Anchor — Most Popular",
        highlight: true,
        price: PriceDescriptor::Usd(1_000),
        ad_spend_note: "Client ad spend 1M+ MNT (~$300–$1,500)",
        features: &[
            "Landing page funnel (form + calendar booking e.g., Calendly)",
            "Facebook/Instagram Ads (structured campaigns)",
            "Automated SMS/Email 5-touch nurture",
            "Messenger/IG chatbot (auto-response + booking prompts)",
            "Weekly KPI report: Spend, CPL, booked appointments",
        ],
        promise: Some("Generate consistent weekly leads (min. 20–30 leads/mo)"),
    },
    PricingPlan {
        name: "Growth Engine",
        tagline: "Steady monthly lead flow",
        highlight: false,
        price: PriceDescriptor::Usd(2_000),
        ad_spend_note: "Client ad spend $1,500–$3,000",
        features: &[
            "Everything in Starter",
            "Website build for high-intent Google Ads",
            "Google Search Ads (local intent; needs ≥ $10/day)",
            "10–15 creatives/month + LP variants",
            "CRO: 1–2 landing/checkout tests per month",
            "Email/SMS nurture (reviews, promotions, winbacks)",
            "Advanced chatbot: appointment scheduling, lead qualification",
            "Bi-weekly report call + dashboard access",
        ],
        promise: Some("Reduce CPL by 25% and increase bookings by 50% within 90 days"),
    },
    PricingPlan {
        name: "Category Leader (Prestige)",
        tagline: "Dominate your city",
        highlight: false,
        price: PriceDescriptor::Usd(4_000),
        ad_spend_note: "Client ad spend $3,000–$6,000",
        features: &[
            "Everything in Growth Engine",
            "Agency Backend Setup",
            "YouTube/TikTok awareness campaigns",
            "Dedicated lead manager system: instant SMS + auto-callback < 5 mins",
            "CRM setup (HubSpot/Pipedrive) + full pipeline automation",
            "Branded microsite (service showcase + testimonials)",
            "Monthly strategy workshop with founder",
            "Facebook/Instagram Ads (UGC)",
            "KPI guarantee clause: min. X qualified leads/month",
        ],
        promise: Some("Become #1 in city searches and lead volume within 90 days"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::USD_TO_MNT;

    #[test]
    fn usd_plan_renders_in_both_currencies() {
        let price = PriceDescriptor::Usd(1000);
        assert_eq!(format_price(Some(&price), Currency::Mnt, USD_TO_MNT), "3,450,000 MNT / mo");
        assert_eq!(format_price(Some(&price), Currency::Usd, USD_TO_MNT), "$1,000 / mo");
    }

    #[test]
    fn local_plan_converts_back_to_usd() {
        let price = PriceDescriptor::Local(3_450_000);
        assert_eq!(format_price(Some(&price), Currency::Usd, USD_TO_MNT), "$1,000 / mo");
        assert_eq!(format_price(Some(&price), Currency::Mnt, USD_TO_MNT), "3,450,000 MNT / mo");
    }

    #[test]
    fn local_to_usd_rounds_to_nearest_dollar() {
        // 4_200_000 / 3450 = 1217.39..
        let price = PriceDescriptor::Local(4_200_000);
        assert_eq!(format_price(Some(&price), Currency::Usd, USD_TO_MNT), "$1,217 / mo");
        // 8_600_000 / 3450 = 2492.75..
        let price = PriceDescriptor::Local(8_600_000);
        assert_eq!(format_price(Some(&price), Currency::Usd, USD_TO_MNT), "$2,493 / mo");
    }

    #[test]
    fn missing_price_is_empty() {
        assert_eq!(format_price(None, Currency::Usd, USD_TO_MNT), "");
        assert_eq!(format_price(None, Currency::Mnt, USD_TO_MNT), "");
    }

    #[test]
    fn every_catalogue_price_formats_in_every_currency() {
        for track in Track::ALL {
            for plan in plans_for(track) {
                for currency in [Currency::Mnt, Currency::Usd] {
                    let shown = format_price(Some(&plan.price), currency, USD_TO_MNT);
                    assert!(shown.ends_with(" / mo"), "{} -> {}", plan.name, shown);
                }
            }
        }
    }

    #[test]
    fn grouping_handles_short_and_long_numbers() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(17_250_000), "17,250,000");
    }

    #[test]
    fn highlighted_plan_moves_to_the_middle() {
        let ordered = order_plans(plans_for(Track::Ecom));
        let names: Vec<_> = ordered.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Scaling OS", "Starter Growth", "Market Dominator (Prestige)"]);
        assert!(ordered[1].highlight);
    }

    #[test]
    fn order_is_untouched_without_a_highlight_or_three_plans() {
        let mut plans = plans_for(Track::Service).to_vec();
        for plan in plans.iter_mut() {
            plan.highlight = false;
        }
        let names: Vec<_> = order_plans(&plans).iter().map(|p| p.name).collect();
        assert_eq!(names, ["Lead Engine Starter", "Growth Engine", "Category Leader (Prestige)"]);

        let pair = &plans_for(Track::Ecom)[..2];
        let names: Vec<_> = order_plans(pair).iter().map(|p| p.name).collect();
        assert_eq!(names, ["Starter Growth", "Scaling OS"]);
    }

    #[test]
    fn each_track_has_exactly_one_highlight() {
        for track in Track::ALL {
            assert_eq!(plans_for(track).iter().filter(|p| p.highlight).count(), 1);
        }
    }
}
