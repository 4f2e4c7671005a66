#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn default_parameter_is_the_variable() {
        let cfg: SessionValueConfig = "${session:a.b}".parse().expect("valid token");
        assert_eq!(cfg.variable.as_deref(), Some("a.b"));
        assert!(!cfg.evaluate_as_nested_properties);
        assert_eq!(cfg.format, FormatOptions::default());
    }

    #[test]
    fn options_are_case_insensitive() {
        let cfg: SessionValueConfig =
            "${session:a.b:padding=5:evaluateAsNestedProperties=true}".parse().expect("valid token");
        assert_eq!(cfg, SessionValueConfig::new("a.b").nested(true).padding(5));

        let cfg: SessionValueConfig = "${SESSION:Variable=x:PADDING=-3:EVALUATEASNESTEDPROPERTIES=TRUE}"
            .parse()
            .expect("valid token");
        assert_eq!(cfg, SessionValueConfig::new("x").nested(true).padding(-3));
    }

    #[test]
    fn all_formatting_options() {
        let cfg: SessionValueConfig =
            "${session:item=k:padding=4:padCharacter=*:fixedLength=true:upperCase=true:lowerCase=false:culture=en-GB}"
                .parse()
                .expect("valid token");
        let expected = SessionValueConfig::new("k")
            .padding(4)
            .pad_character('*')
            .fixed_length(true)
            .upper_case(true)
            .lower_case(false)
            .culture("en-GB");
        assert_eq!(cfg, expected);
    }

    #[test]
    fn legacy_renderer_name_is_accepted() {
        let cfg: SessionValueConfig = "${aspnet-session:a}".parse().expect("valid token");
        assert_eq!(cfg.variable.as_deref(), Some("a"));
    }

    #[test]
    fn missing_and_empty_variable() {
        let cfg: SessionValueConfig = "${session}".parse().expect("valid token");
        assert_eq!(cfg.variable, None);
        let cfg: SessionValueConfig = "${session:}".parse().expect("valid token");
        assert_eq!(cfg.variable.as_deref(), Some(""));
    }

    #[test]
    fn malformed_tokens() {
        let cases: Vec<(&str, ConfigError)> = vec![
            (
                "session:a",
                ConfigError::Envelope {
                    token: "session:a".into(),
                },
            ),
            (
                "${session:a",
                ConfigError::Envelope {
                    token: "${session:a".into(),
                },
            ),
            (
                "${date:a}",
                ConfigError::UnknownRenderer { name: "date".into() },
            ),
            (
                "${session:a:colour=red}",
                ConfigError::UnknownOption {
                    name: "colour".into(),
                },
            ),
            (
                "${session:a:padding=wide}",
                ConfigError::InvalidValue {
                    option: "padding".into(),
                    value: "wide".into(),
                    expected: "an integer",
                },
            ),
            (
                "${session:a:fixedLength=yes}",
                ConfigError::InvalidValue {
                    option: "fixedLength".into(),
                    value: "yes".into(),
                    expected: "true or false",
                },
            ),
            (
                "${session:a:padCharacter=ab}",
                ConfigError::InvalidValue {
                    option: "padCharacter".into(),
                    value: "ab".into(),
                    expected: "a single character",
                },
            ),
            ("${session:a:variable=b}", ConfigError::DuplicateVariable),
            ("${session:a:b}", ConfigError::DuplicateVariable),
        ];
        for (token, expected) in cases {
            assert_eq!(
                token.parse::<SessionValueConfig>(),
                Err(expected),
                "{token}"
            );
        }
    }

    #[test]
    fn error_messages_are_readable() {
        let err = "${date:a}".parse::<SessionValueConfig>().unwrap_err();
        assert_eq!(err.to_string(), "unknown layout renderer 'date'");
        let err = "nope".parse::<SessionValueConfig>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "layout token must have the form ${name:...}, got 'nope'"
        );
    }

    #[test]
    fn display_writes_a_token_that_parses_back() {
        let cfg = SessionValueConfig::new("a.b")
            .nested(true)
            .padding(-7)
            .pad_character('_')
            .upper_case(true)
            .culture("de-DE");
        let token = cfg.to_string();
        assert_eq!(
            token,
            "${session:a.b:padding=-7:padCharacter=_:upperCase=true:culture=de-DE:evaluateAsNestedProperties=true}"
        );
        assert_eq!(token.parse::<SessionValueConfig>(), Ok(cfg));
        assert_eq!(SessionValueConfig::default().to_string(), "${session}");

        for cfg in [
            SessionValueConfig::new("a:b"),
            SessionValueConfig::new("k=v"),
            SessionValueConfig::new(r"back\slash}"),
            SessionValueConfig::new("a").padding(3).pad_character(':'),
            SessionValueConfig::new("a").padding(3).pad_character('}'),
            SessionValueConfig::new("a").padding(3).pad_character('\\'),
        ] {
            let token = cfg.to_string();
            assert_eq!(token.parse::<SessionValueConfig>(), Ok(cfg), "{token}");
        }
        assert_eq!(
            SessionValueConfig::new("a:b").padding(2).pad_character(':').to_string(),
            r"${session:a\:b:padding=2:padCharacter=\:}"
        );
    }

    #[test]
    fn escaped_separators_stay_in_values() {
        let cfg: SessionValueConfig = r"${session:a\:b\=c:padCharacter=\}}"
            .parse()
            .expect("valid token");
        assert_eq!(cfg.variable.as_deref(), Some("a:b=c"));
        assert_eq!(cfg.format.pad_character, '}');

        let cfg: SessionValueConfig = r"${session:variable=x\:y}".parse().expect("valid token");
        assert_eq!(cfg.variable.as_deref(), Some("x:y"));
    }

    #[test]
    fn deserializes_from_json() {
        let cfg: SessionValueConfig = serde_json::from_str(
            r#"{
                "variable": "a.b",
                "evaluateAsNestedProperties": true,
                "padding": 5,
                "padCharacter": "0",
                "culture": "en-GB"
            }"#,
        )
        .expect("valid json");
        let expected = SessionValueConfig::new("a.b")
            .nested(true)
            .padding(5)
            .pad_character('0')
            .culture("en-GB");
        assert_eq!(cfg, expected);

        let empty: SessionValueConfig = serde_json::from_str("{}").expect("valid json");
        assert_eq!(empty, SessionValueConfig::default());
    }
}
