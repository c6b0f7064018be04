use std::fmt;
use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Mn,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Mn,
            Language::Mn => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Mn => "MN",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Mnt,
    Usd,
}

impl Currency {
    pub fn toggled(self) -> Self {
        match self {
            Currency::Mnt => Currency::Usd,
            Currency::Usd => Currency::Mnt,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Mnt => "MNT",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Offering track: which business category the pricing section is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Track {
    #[default]
    Ecom,
    Service,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Ecom, Track::Service];

    pub fn label(self) -> Localized {
        match self {
            Track::Ecom => Localized::new("E-Commerce (Shopify)", "E-коммерс (Shopify)"),
            Track::Service => Localized::new("Service-Based", "Үйлчилгээний бизнес"),
        }
    }
}

/// A piece of copy in both site languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub mn: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, mn: &'static str) -> Self {
        Self { en, mn }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Mn => self.mn,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LocaleState {
    pub language: Language,
    pub currency: Currency,
    pub track: Track,
}

impl LocaleState {
    pub fn t(&self, text: &Localized) -> &'static str {
        text.get(self.language)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleAction {
    ToggleLanguage,
    ToggleCurrency,
    SetCurrency(Currency),
    SetTrack(Track),
}

impl LocaleState {
    pub fn apply(self, action: LocaleAction) -> Self {
        match action {
            LocaleAction::ToggleLanguage => Self { language: self.language.toggled(), ..self },
            LocaleAction::ToggleCurrency => Self { currency: self.currency.toggled(), ..self },
            LocaleAction::SetCurrency(currency) => Self { currency, ..self },
            LocaleAction::SetTrack(track) => Self { track, ..self },
        }
    }
}

impl Reducible for LocaleState {
    type Action = LocaleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            log::debug!("locale changed: {:?}", next);
            Rc::new(next)
        }
    }
}

pub type LocaleContext = UseReducerHandle<LocaleState>;

/// Current locale, falling back to the defaults when rendered outside the provider.
#[hook]
pub fn use_locale() -> (LocaleState, Callback<LocaleAction>) {
    match use_context::<LocaleContext>() {
        Some(ctx) => {
            let state = *ctx;
            let dispatch = Callback::from(move |action| ctx.dispatch(action));
            (state, dispatch)
        }
        None => (LocaleState::default(), Callback::noop()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_visit() {
        let state = LocaleState::default();
        assert_eq!(state.language, Language::En);
        assert_eq!(state.currency, Currency::Mnt);
        assert_eq!(state.track, Track::Ecom);
    }

    #[test]
    fn each_axis_toggles_independently() {
        let state = LocaleState::default()
            .apply(LocaleAction::ToggleLanguage)
            .apply(LocaleAction::SetTrack(Track::Service));
        assert_eq!(state.language, Language::Mn);
        assert_eq!(state.currency, Currency::Mnt);
        assert_eq!(state.track, Track::Service);

        let state = state.apply(LocaleAction::ToggleCurrency);
        assert_eq!(state.currency, Currency::Usd);
        assert_eq!(state.language, Language::Mn);
    }

    #[test]
    fn toggling_twice_returns_to_start() {
        let start = LocaleState::default();
        let back = start
            .apply(LocaleAction::ToggleCurrency)
            .apply(LocaleAction::ToggleCurrency);
        assert_eq!(start, back);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(LocaleState::default());
        let next = state.clone().reduce(LocaleAction::SetCurrency(Currency::Mnt));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(LocaleAction::SetCurrency(Currency::Usd));
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(next.currency, Currency::Usd);
    }

    #[test]
    fn localized_picks_active_language() {
        let text = Localized::new("Pricing", "Үнэ");
        assert_eq!(text.get(Language::En), "Pricing");
        assert_eq!(text.get(Language::Mn), "Үнэ");
        let state = LocaleState::default().apply(LocaleAction::ToggleLanguage);
        assert_eq!(state.t(&text), "Үнэ");
    }
}
