//! Full passes over scripted sites.

mod support;

use std::sync::atomic::Ordering;

use betbot::application::SitesManager;
use betbot::domain::{League, Quote, Sport};
use betbot::port::{CollectingReport, SiteCatalog};

use support::site::{soccer_catalog, ScriptedSite};

fn league<'a>(report: &'a CollectingReport, key: &str) -> &'a betbot::domain::Event {
    report
        .events()
        .iter()
        .find(|e| e.league().as_str() == key)
        .unwrap_or_else(|| panic!("league {key} missing from report"))
}

#[tokio::test]
async fn merges_sites_per_league() {
    let mut manager = SitesManager::new();
    manager.register(Box::new(
        ScriptedSite::new("a", soccer_catalog())
            .with_quotes(1, &[("Legia", "Lech", [1.90, 3.40, 4.20])]),
    ));
    manager.register(Box::new(
        ScriptedSite::new("b", soccer_catalog())
            .with_quotes(1, &[("Lech Poznan", "Legia Warszawa", [1.95, 3.30, 4.10])]),
    ));

    let mut report = CollectingReport::new();
    let summary = manager.run(None, &mut report).await;

    assert_eq!(summary.leagues, 2);
    assert_eq!(summary.matches, 1);
    let poland = league(&report, "poland");
    assert_eq!(poland.len(), 1);
    let merged = poland.iter().next().unwrap();
    assert_eq!(merged.id().as_str(), "legia VS lech");
    assert_eq!(merged.site_count(), 2);
    assert!(league(&report, "italy").is_empty());
}

#[tokio::test]
async fn failing_site_does_not_affect_others() {
    let mut manager = SitesManager::new();
    manager.register(Box::new(
        ScriptedSite::new("flaky", soccer_catalog())
            .failing_on(1)
            .with_quotes(2, &[("Inter", "Milan", [2.20, 3.20, 3.30])]),
    ));
    manager.register(Box::new(
        ScriptedSite::new("steady", soccer_catalog())
            .with_quotes(1, &[("Legia", "Lech", [1.90, 3.40, 4.20])])
            .with_quotes(2, &[("Internazionale", "AC Milan", [2.25, 3.15, 3.25])]),
    ));

    let mut report = CollectingReport::new();
    let summary = manager.run(None, &mut report).await;
    assert_eq!(summary.leagues, 2);

    let poland = league(&report, "poland");
    assert_eq!(poland.len(), 1);
    let legia = poland.iter().next().unwrap();
    assert_eq!(legia.quote("steady"), Some(&Quote::from([1.90, 3.40, 4.20])));
    assert!(legia.quote("flaky").is_none());

    let italy = league(&report, "italy");
    assert_eq!(italy.len(), 1);
    assert_eq!(italy.iter().next().unwrap().site_count(), 2);
}

#[tokio::test]
async fn sites_are_only_asked_for_covered_leagues() {
    let poland_only = ScriptedSite::new(
        "poland-only",
        SiteCatalog::new().with_sport("soccer", 10, &[("poland", 1)]),
    )
    .with_quotes(1, &[("Legia", "Lech", [1.90, 3.40, 4.20])]);
    let calls = poland_only.calls();

    let mut manager = SitesManager::new();
    manager.register(Box::new(poland_only));
    manager.register(Box::new(ScriptedSite::new("both", soccer_catalog())));

    let mut report = CollectingReport::new();
    manager.run(None, &mut report).await;

    assert_eq!(report.events().len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn run_restricted_to_selected_sports() {
    let mut manager = SitesManager::new();
    manager.register(Box::new(ScriptedSite::new(
        "multi",
        soccer_catalog().with_sport("tennis", 20, &[("atp", 5)]),
    )));
    assert_eq!(
        manager.sports(),
        vec![Sport::from("soccer"), Sport::from("tennis")]
    );

    let mut report = CollectingReport::new();
    let summary = manager
        .run(Some(&[Sport::from("tennis")]), &mut report)
        .await;

    assert_eq!(summary.leagues, 1);
    assert_eq!(report.events()[0].league(), &League::from("atp"));
}

#[tokio::test]
async fn leagues_are_emitted_in_key_order() {
    let mut manager = SitesManager::new();
    manager.register(Box::new(ScriptedSite::new("a", soccer_catalog())));

    let mut report = CollectingReport::new();
    manager.run(None, &mut report).await;

    let leagues: Vec<_> = report
        .into_events()
        .into_iter()
        .map(|e| e.league().to_string())
        .collect();
    assert_eq!(leagues, vec!["italy", "poland"]);
}
