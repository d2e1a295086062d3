use iced::Font;
use iced::font::Family;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_ICON_SIZE: f32 = 48.0;
pub const DEFAULT_ICON_COLOR: &str = "#ffffff";
pub const DEFAULT_ACTIVE_ICON_COLOR: &str = "#ffffff";
pub const DEFAULT_HOVER_ICON_COLOR: &str = "#ffffff";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#202225";
pub const DEFAULT_ACTIVE_BACKGROUND_COLOR: &str = "#5865F2";
pub const DEFAULT_HOVER_BACKGROUND_COLOR: &str = "#36393f";
pub const DEFAULT_BORDER_RADIUS: &str = "50%";
pub const DEFAULT_ACTIVE_BORDER_RADIUS: &str = "10%";
pub const DEFAULT_HOVER_BORDER_RADIUS: &str = "20%";
pub const DEFAULT_NAV_WIDTH: f32 = 80.0;
pub const DEFAULT_NAV_GAP: f32 = 32.0;

const DEFAULT_PAGES: [(&str, &str); 4] = [
    ("Home", "FaHome"),
    ("Chat", "FaComments"),
    ("Friends", "FaUserFriends"),
    ("Settings", "FaCog"),
];

/// One selectable entry of the rail.
///
/// Entries are never rejected: a `name` that is missing or not a string reads
/// as empty and such an `icon` reads as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub name: String,
    pub icon: Option<String>,
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let field = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };

        Ok(Self {
            name: field("name").unwrap_or_default(),
            icon: field("icon"),
        })
    }
}

impl Page {
    pub fn new(name: impl Into<String>, icon: Option<&str>) -> Self {
        Self {
            name: name.into(),
            icon: icon.map(str::to_string),
        }
    }
}

/// Caller-supplied rail options. Every field is optional.
///
/// Fields holding a value of the wrong JSON type are treated as omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    #[serde(deserialize_with = "lenient")]
    pub font_size: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    pub icon_size: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    pub icon_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub active_icon_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hover_icon_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub active_background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hover_background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub border_radius: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub active_border_radius: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hover_border_radius: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub nav_width: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    pub nav_gap: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    pub pages: Option<Vec<Page>>,
}

/// Visual theme published by the host. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostTheme {
    #[serde(deserialize_with = "lenient")]
    pub text_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub primary_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub secondary_background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub font: Option<String>,
}

/// Fully resolved rail parameters used for a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub font_size: f32,
    pub icon_size: f32,
    pub icon_color: String,
    pub active_icon_color: String,
    pub hover_icon_color: String,
    pub background_color: String,
    pub active_background_color: String,
    pub hover_background_color: String,
    pub border_radius: String,
    pub active_border_radius: String,
    pub hover_border_radius: String,
    pub nav_width: f32,
    pub nav_gap: f32,
    pub pages: Vec<Page>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        resolve(&NavConfig::default(), None)
    }
}

/// Resolve caller options against the host theme and literal defaults.
///
/// Each field takes the caller value, then the theme analog when the field
/// has one, then the literal default. Empty strings and non-positive sizes
/// count as omitted.
pub fn resolve(config: &NavConfig, theme: Option<&HostTheme>) -> EffectiveConfig {
    let themed = |pick: fn(&HostTheme) -> &Option<String>| {
        theme.and_then(|theme| text(pick(theme)))
    };

    EffectiveConfig {
        font_size: size(config.font_size).unwrap_or(DEFAULT_FONT_SIZE),
        icon_size: size(config.icon_size).unwrap_or(DEFAULT_ICON_SIZE),
        icon_color: text(&config.icon_color)
            .or_else(|| themed(|t| &t.text_color))
            .unwrap_or(DEFAULT_ICON_COLOR)
            .to_string(),
        active_icon_color: text(&config.active_icon_color)
            .unwrap_or(DEFAULT_ACTIVE_ICON_COLOR)
            .to_string(),
        hover_icon_color: text(&config.hover_icon_color)
            .or_else(|| themed(|t| &t.text_color))
            .unwrap_or(DEFAULT_HOVER_ICON_COLOR)
            .to_string(),
        background_color: text(&config.background_color)
            .or_else(|| themed(|t| &t.background_color))
            .unwrap_or(DEFAULT_BACKGROUND_COLOR)
            .to_string(),
        active_background_color: text(&config.active_background_color)
            .or_else(|| themed(|t| &t.primary_color))
            .unwrap_or(DEFAULT_ACTIVE_BACKGROUND_COLOR)
            .to_string(),
        hover_background_color: text(&config.hover_background_color)
            .or_else(|| themed(|t| &t.secondary_background_color))
            .unwrap_or(DEFAULT_HOVER_BACKGROUND_COLOR)
            .to_string(),
        border_radius: text(&config.border_radius)
            .unwrap_or(DEFAULT_BORDER_RADIUS)
            .to_string(),
        active_border_radius: text(&config.active_border_radius)
            .unwrap_or(DEFAULT_ACTIVE_BORDER_RADIUS)
            .to_string(),
        hover_border_radius: text(&config.hover_border_radius)
            .unwrap_or(DEFAULT_HOVER_BORDER_RADIUS)
            .to_string(),
        nav_width: size(config.nav_width).unwrap_or(DEFAULT_NAV_WIDTH),
        nav_gap: size(config.nav_gap).unwrap_or(DEFAULT_NAV_GAP),
        pages: config.pages.clone().unwrap_or_else(default_pages),
    }
}

/// Pages shown when the caller omits `pages` entirely.
pub fn default_pages() -> Vec<Page> {
    DEFAULT_PAGES
        .iter()
        .map(|(name, icon)| Page::new(*name, Some(icon)))
        .collect()
}

/// Pick the rail font from a CSS `font-family` list.
///
/// Only generic family keywords are honoured; named faces fall through to the
/// next entry and the list defaults to sans-serif.
pub fn font_from_theme(theme: Option<&HostTheme>) -> Font {
    let family = theme
        .and_then(|theme| text(&theme.font))
        .and_then(|list| {
            list.split(',')
                .map(|entry| entry.trim().trim_matches(['"', '\'']))
                .find_map(generic_family)
        })
        .unwrap_or(Family::SansSerif);

    Font {
        family,
        ..Font::DEFAULT
    }
}

fn generic_family(name: &str) -> Option<Family> {
    match name.to_ascii_lowercase().as_str() {
        "sans-serif" | "sans serif" => Some(Family::SansSerif),
        "serif" => Some(Family::Serif),
        "monospace" => Some(Family::Monospace),
        "cursive" => Some(Family::Cursive),
        "fantasy" => Some(Family::Fantasy),
        _ => None,
    }
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn size(value: Option<f32>) -> Option<f32> {
    value.filter(|value| value.is_finite() && *value > 0.0)
}

/// Deserialize an optional field, mapping type mismatches to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            log::debug!("ignoring malformed rail option: {err}");
            Ok(None)
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::font::Family;

    use super::*;

    fn theme() -> HostTheme {
        HostTheme {
            text_color: Some(String::from("#111111")),
            background_color: Some(String::from("#222222")),
            primary_color: Some(String::from("#333333")),
            secondary_background_color: Some(String::from("#444444")),
            font: Some(String::from("\"Source Sans Pro\", serif")),
        }
    }

    #[test]
    fn given_empty_config_and_no_theme_when_resolving_then_literal_defaults_apply()
     {
        let effective = resolve(&NavConfig::default(), None);

        assert_eq!(effective.font_size, 24.0);
        assert_eq!(effective.icon_size, 48.0);
        assert_eq!(effective.icon_color, "#ffffff");
        assert_eq!(effective.active_icon_color, "#ffffff");
        assert_eq!(effective.hover_icon_color, "#ffffff");
        assert_eq!(effective.background_color, "#202225");
        assert_eq!(effective.active_background_color, "#5865F2");
        assert_eq!(effective.hover_background_color, "#36393f");
        assert_eq!(effective.border_radius, "50%");
        assert_eq!(effective.active_border_radius, "10%");
        assert_eq!(effective.hover_border_radius, "20%");
        assert_eq!(effective.nav_width, 80.0);
        assert_eq!(effective.nav_gap, 32.0);

        let pages: Vec<(&str, Option<&str>)> = effective
            .pages
            .iter()
            .map(|page| (page.name.as_str(), page.icon.as_deref()))
            .collect();
        assert_eq!(
            pages,
            vec![
                ("Home", Some("FaHome")),
                ("Chat", Some("FaComments")),
                ("Friends", Some("FaUserFriends")),
                ("Settings", Some("FaCog")),
            ]
        );
    }

    #[test]
    fn given_theme_when_resolving_omitted_fields_then_theme_analogs_apply() {
        let effective = resolve(&NavConfig::default(), Some(&theme()));

        assert_eq!(effective.icon_color, "#111111");
        assert_eq!(effective.hover_icon_color, "#111111");
        assert_eq!(effective.background_color, "#222222");
        assert_eq!(effective.active_background_color, "#333333");
        assert_eq!(effective.hover_background_color, "#444444");
        // No theme analog for these.
        assert_eq!(effective.active_icon_color, "#ffffff");
        assert_eq!(effective.border_radius, "50%");
    }

    #[test]
    fn given_caller_values_when_resolving_then_they_win_over_theme() {
        let config = NavConfig {
            icon_color: Some(String::from("red")),
            background_color: Some(String::from("#000000")),
            nav_gap: Some(8.0),
            ..NavConfig::default()
        };

        let effective = resolve(&config, Some(&theme()));

        assert_eq!(effective.icon_color, "red");
        assert_eq!(effective.hover_icon_color, "#111111");
        assert_eq!(effective.background_color, "#000000");
        assert_eq!(effective.nav_gap, 8.0);
    }

    #[test]
    fn given_partial_theme_when_resolving_then_missing_analogs_use_literals() {
        let partial = HostTheme {
            primary_color: Some(String::from("#abcdef")),
            text_color: Some(String::new()),
            ..HostTheme::default()
        };

        let effective = resolve(&NavConfig::default(), Some(&partial));

        assert_eq!(effective.active_background_color, "#abcdef");
        assert_eq!(effective.icon_color, "#ffffff");
        assert_eq!(effective.background_color, "#202225");
    }

    #[test]
    fn given_falsy_values_when_resolving_then_they_count_as_omitted() {
        let config = NavConfig {
            font_size: Some(0.0),
            icon_size: Some(-4.0),
            border_radius: Some(String::new()),
            ..NavConfig::default()
        };

        let effective = resolve(&config, None);

        assert_eq!(effective.font_size, 24.0);
        assert_eq!(effective.icon_size, 48.0);
        assert_eq!(effective.border_radius, "50%");
    }

    #[test]
    fn given_explicit_empty_pages_when_resolving_then_list_stays_empty() {
        let config = NavConfig {
            pages: Some(Vec::new()),
            ..NavConfig::default()
        };

        assert!(resolve(&config, None).pages.is_empty());
    }

    #[test]
    fn given_loose_json_when_deserialized_then_mismatched_fields_are_dropped() {
        let json = serde_json::json!({
            "fontSize": "huge",
            "iconSize": 40,
            "iconColor": 12,
            "navWidth": null,
            "pages": [{ "name": "A" }, { "name": "B", "icon": 7 }],
            "unknownField": true
        });

        let config: NavConfig =
            serde_json::from_value(json).expect("config should deserialize");

        assert_eq!(config.font_size, None);
        assert_eq!(config.icon_size, Some(40.0));
        assert_eq!(config.icon_color, None);
        assert_eq!(config.nav_width, None);
        assert_eq!(
            config.pages,
            Some(vec![Page::new("A", None), Page::new("B", None)])
        );
    }

    #[test]
    fn given_one_malformed_page_when_resolving_then_caller_list_is_kept() {
        let json = serde_json::json!({
            "pages": [{ "name": "A", "icon": "FaBook" }, { "name": 5 }, "junk"]
        });

        let config: NavConfig =
            serde_json::from_value(json).expect("config should deserialize");
        let effective = resolve(&config, None);

        assert_eq!(
            effective.pages,
            vec![
                Page::new("A", Some("FaBook")),
                Page::new("", None),
                Page::new("", None),
            ]
        );
    }

    #[test]
    fn given_pages_of_wrong_type_when_resolving_then_defaults_apply() {
        let json = serde_json::json!({ "pages": "Home,Chat" });

        let config: NavConfig =
            serde_json::from_value(json).expect("config should deserialize");

        assert_eq!(config.pages, None);
        assert_eq!(resolve(&config, None).pages, default_pages());
    }

    #[test]
    fn given_theme_font_list_when_picking_font_then_first_generic_family_wins() {
        assert_eq!(font_from_theme(None).family, Family::SansSerif);
        assert_eq!(font_from_theme(Some(&theme())).family, Family::Serif);

        let mono = HostTheme {
            font: Some(String::from("Fira Code, monospace")),
            ..HostTheme::default()
        };
        assert_eq!(font_from_theme(Some(&mono)).family, Family::Monospace);

        let named_only = HostTheme {
            font: Some(String::from("Inter")),
            ..HostTheme::default()
        };
        assert_eq!(font_from_theme(Some(&named_only)).family, Family::SansSerif);
    }
}
