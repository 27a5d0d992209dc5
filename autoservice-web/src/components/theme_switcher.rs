use gloo_storage::{LocalStorage, Storage};
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{
    Callback, Classes, Html, Properties, function_component, html, use_effect_with, use_state,
};
use yew_icons::{Icon, IconId};

const THEME_KEY: &str = "autoservice.theme";

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

pub fn toggled(theme: &str) -> &'static str {
    if theme == "dark" { "light" } else { "dark" }
}

fn apply_theme(theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
    {
        let _ = html_element.set_attribute("data-theme", theme);
    }
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (i18n, ..) = use_translation();
    let current_theme = use_state(|| "light".to_string());

    // Saved choice first, then the system preference.
    {
        let current_theme = current_theme.clone();
        use_effect_with((), move |_| {
            let saved = LocalStorage::get::<String>(THEME_KEY).ok();
            let system_prefers_dark = window()
                .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .is_some_and(|media_query| media_query.matches());
            let theme = saved.unwrap_or_else(|| {
                if system_prefers_dark { "dark" } else { "light" }.to_string()
            });
            apply_theme(&theme);
            current_theme.set(theme);
            || {}
        });
    }

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let new_theme = toggled(&current_theme);
            current_theme.set(new_theme.to_string());
            apply_theme(new_theme);
            if let Err(err) = LocalStorage::set(THEME_KEY, new_theme) {
                log::debug!("theme not saved: {err}");
            }
        })
    };

    let theme_icon = match current_theme.as_str() {
        "light" => IconId::HeroiconsSolidMoon,
        _ => IconId::HeroiconsSolidSun,
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label={i18n.t("theme.selector")}
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggled;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(toggled("dark"), "light");
        assert_eq!(toggled("light"), "dark");
        assert_eq!(toggled(""), "dark");
    }
}
