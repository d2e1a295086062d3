use navrail_ui_rail::{HostSignal, HostTheme, NavConfig};
use serde::{Deserialize, Deserializer, Serialize};

use super::errors::HostError;

/// Protocol revision announced in `componentReady`.
pub(crate) const API_VERSION: u32 = 1;

const VALUE_DATA_TYPE: &str = "json";

/// Inputs of one host render: rail arguments plus the optional theme.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct RenderArgs {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) args: NavConfig,
    #[serde(default)]
    pub(crate) theme: Option<HostTheme>,
}

/// Messages read from the host, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub(crate) enum InboundMessage {
    Render(RenderArgs),
    #[serde(other)]
    Unknown,
}

/// Messages written to the host, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub(crate) enum OutboundMessage {
    #[serde(rename_all = "camelCase")]
    ComponentReady { api_version: u32 },
    SetFrameHeight { height: f32 },
    #[serde(rename_all = "camelCase")]
    SetComponentValue {
        value: String,
        data_type: &'static str,
    },
}

impl OutboundMessage {
    pub(crate) fn ready() -> Self {
        Self::ComponentReady {
            api_version: API_VERSION,
        }
    }
}

impl From<HostSignal> for OutboundMessage {
    fn from(signal: HostSignal) -> Self {
        match signal {
            HostSignal::FrameHeight(height) => Self::SetFrameHeight { height },
            HostSignal::Value(value) => Self::SetComponentValue {
                value,
                data_type: VALUE_DATA_TYPE,
            },
        }
    }
}

/// Decode one inbound protocol line.
pub(crate) fn parse_inbound(line: &str) -> Result<InboundMessage, HostError> {
    Ok(serde_json::from_str(line)?)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use navrail_ui_rail::{HostSignal, Page};
    use serde_json::json;

    use super::{InboundMessage, OutboundMessage, RenderArgs, parse_inbound};

    #[test]
    fn given_render_line_when_parsed_then_args_and_theme_are_decoded() {
        let line = json!({
            "type": "render",
            "args": {
                "pages": [{ "name": "home", "icon": "FaHome" }],
                "navWidth": 72,
            },
            "theme": { "primaryColor": "#ff0000" },
        })
        .to_string();

        let Ok(InboundMessage::Render(args)) = parse_inbound(&line) else {
            panic!("render message expected");
        };

        assert_eq!(
            args.args.pages,
            Some(vec![Page::new("home", Some("FaHome"))])
        );
        assert_eq!(args.args.nav_width, Some(72.0));
        let theme = args.theme.expect("theme should be decoded");
        assert_eq!(theme.primary_color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn given_null_args_and_theme_when_parsed_then_defaults_are_used() {
        let line = r#"{"type":"render","args":null,"theme":null}"#;

        let message = parse_inbound(line).expect("line should parse");

        assert_eq!(message, InboundMessage::Render(RenderArgs::default()));
    }

    #[test]
    fn given_unknown_type_when_parsed_then_message_is_ignored() {
        let message =
            parse_inbound(r#"{"type":"ping"}"#).expect("line should parse");

        assert_eq!(message, InboundMessage::Unknown);
    }

    #[test]
    fn given_garbage_line_when_parsed_then_error_is_returned() {
        assert!(parse_inbound("not json").is_err());
        assert!(parse_inbound(r#"{"args":{}}"#).is_err());
    }

    #[test]
    fn given_outbound_messages_when_serialized_then_wire_names_are_camel_case()
    {
        let ready = serde_json::to_value(OutboundMessage::ready())
            .expect("ready should serialize");
        assert_eq!(ready, json!({ "type": "componentReady", "apiVersion": 1 }));

        let height = serde_json::to_value(OutboundMessage::from(
            HostSignal::FrameHeight(400.0),
        ))
        .expect("height should serialize");
        assert_eq!(height, json!({ "type": "setFrameHeight", "height": 400.0 }));

        let value = serde_json::to_value(OutboundMessage::from(
            HostSignal::Value(String::from("settings")),
        ))
        .expect("value should serialize");
        assert_eq!(
            value,
            json!({
                "type": "setComponentValue",
                "value": "settings",
                "dataType": "json",
            })
        );
    }
}
