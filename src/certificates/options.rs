use crate::config::{OptionKind, OptionSpec, OptionValue};

/// Declared options of the certificate tooling fronted by the push
/// certificate action. Keys, kinds and defaults follow the tooling's own
/// documentation; the action forwards the validated bag untouched.
pub fn available_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new(
            "development",
            "Renew the development push certificate instead of the production one",
            OptionKind::Bool,
        )
        .env("PUSHCERT_DEVELOPMENT")
        .default_value(OptionValue::Bool(false)),
        OptionSpec::new(
            "website_push",
            "Create a website push certificate",
            OptionKind::Bool,
        )
        .env("PUSHCERT_WEBSITE_PUSH")
        .default_value(OptionValue::Bool(false)),
        OptionSpec::new(
            "generate_p12",
            "Generate a p12 file additionally to the PEM file",
            OptionKind::Bool,
        )
        .env("PUSHCERT_GENERATE_P12")
        .default_value(OptionValue::Bool(true)),
        OptionSpec::new(
            "active_days_limit",
            "Renew the certificate if it expires within this many days",
            OptionKind::Int,
        )
        .env("PUSHCERT_ACTIVE_DAYS_LIMIT")
        .default_value(OptionValue::Int(30)),
        OptionSpec::new(
            "force",
            "Create a new certificate even if the current one is still valid",
            OptionKind::Bool,
        )
        .env("PUSHCERT_FORCE")
        .default_value(OptionValue::Bool(false)),
        OptionSpec::new(
            "save_private_key",
            "Keep the generated private key next to the certificate",
            OptionKind::Bool,
        )
        .env("PUSHCERT_SAVE_PRIVATE_KEY")
        .default_value(OptionValue::Bool(true)),
        OptionSpec::new(
            "app_identifier",
            "Bundle identifier of the app the certificate is issued for",
            OptionKind::String,
        )
        .env("PUSHCERT_APP_IDENTIFIER"),
        OptionSpec::new(
            "username",
            "Developer portal account username",
            OptionKind::String,
        )
        .env("PUSHCERT_USERNAME"),
        OptionSpec::new(
            "team_id",
            "Developer portal team id, for accounts that belong to multiple teams",
            OptionKind::String,
        )
        .env("PUSHCERT_TEAM_ID"),
        OptionSpec::new(
            "team_name",
            "Developer portal team name",
            OptionKind::String,
        )
        .env("PUSHCERT_TEAM_NAME"),
        OptionSpec::new(
            "p12_password",
            "Password used to protect the generated p12 file",
            OptionKind::String,
        )
        .env("PUSHCERT_P12_PASSWORD")
        .sensitive(),
        OptionSpec::new(
            "pem_name",
            "Output file name override for the generated certificate",
            OptionKind::String,
        )
        .env("PUSHCERT_PEM_NAME"),
        OptionSpec::new(
            "output_path",
            "Directory the certificate files are written to",
            OptionKind::String,
        )
        .env("PUSHCERT_OUTPUT_PATH")
        .default_value(OptionValue::String(".".to_string())),
    ]
}
