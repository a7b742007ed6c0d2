use anyhow::{anyhow, Result};

use pushcert::RegistryUpdateChecker;

#[test]
fn registry_reports_latest_release_for_a_published_crate() -> Result<()> {
    let checker = RegistryUpdateChecker::new();
    let release = checker
        .check_now("serde")
        .ok_or_else(|| anyhow!("expected a release from the registry"))?;
    if release.version.trim().is_empty() {
        return Err(anyhow!("registry returned an empty version"));
    }
    Ok(())
}

#[test]
fn registry_yields_nothing_for_unknown_crates() -> Result<()> {
    let checker = RegistryUpdateChecker::new();
    if let Some(release) = checker.check_now("pushcert-integration-test-does-not-exist") {
        return Err(anyhow!(
            "expected no release, registry returned {}",
            release.version
        ));
    }
    Ok(())
}

#[test]
fn full_lookup_cycle_completes_against_the_live_registry() -> Result<()> {
    use pushcert::UpdateChecker;

    let checker = RegistryUpdateChecker::new();
    checker.start_looking_for_update("serde");
    // Joins the background fetch; must never fail the caller.
    checker.show_update_status("serde", "0.0.1");
    Ok(())
}
