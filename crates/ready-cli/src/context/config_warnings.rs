use ready_config::ReadyConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ReadyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ReadyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    // AIREADY_LEAD_CAPTURE_ENDPOINT (single underscore) is the usual slip.
    if !config.lead_capture.is_configured()
        && env_keys
            .iter()
            .any(|key| key.starts_with("AIREADY_LEAD") && !key.starts_with("AIREADY_LEAD_CAPTURE__"))
    {
        warnings.push(
            "Lead capture is in demo mode while AIREADY_LEAD* env vars exist. Use double underscores (example: AIREADY_LEAD_CAPTURE__ENDPOINT)."
                .to_string(),
        );
    }

    if config.store.dir.is_empty()
        && env_keys
            .iter()
            .any(|key| key.starts_with("AIREADY_STORE") && !key.starts_with("AIREADY_STORE__"))
    {
        warnings.push(
            "Store dir appears default while AIREADY_STORE* env vars exist. Use double underscores (example: AIREADY_STORE__DIR)."
                .to_string(),
        );
    }

    warnings
}
