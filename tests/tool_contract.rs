//! Contract tests for the lookup tools as seen by a host runtime.
//!
//! Every call goes through the public API and the JSON wire mapping.

use astro_tutor::tools::{days_in_year, planet_fact, Planet};
use astro_tutor::{root_agent, LookupResult};
use serde_json::json;

const PLANETS: [(&str, &str, &str); 8] = [
    (
        "Mercury",
        "Mercury orbits the Sun in just 88 Earth‑days.",
        "88",
    ),
    ("Venus", "Venus rotates backwards (retrograde spin).", "225"),
    (
        "Earth",
        "Earth is the densest planet in the Solar System.",
        "365.25",
    ),
    (
        "Mars",
        "Mars hosts the tallest known volcano, Olympus Mons.",
        "687",
    ),
    (
        "Jupiter",
        "Jupiter has a persistent anticyclonic storm called the Great Red Spot.",
        "4,333",
    ),
    (
        "Saturn",
        "Saturn’s rings are less than 1 km thick in most places.",
        "10,759",
    ),
    (
        "Uranus",
        "Uranus spins on its side—its axial tilt is 98°.",
        "30,687",
    ),
    (
        "Neptune",
        "Neptune was the first planet found by mathematical prediction.",
        "60,190",
    ),
];

#[test]
fn test_every_planet_fact_and_period() {
    for (name, fact, days) in PLANETS {
        for input in [name.to_string(), name.to_lowercase(), name.to_uppercase()] {
            assert_eq!(planet_fact(&input), LookupResult::fact(fact));
            assert_eq!(
                days_in_year(&input),
                LookupResult::report(format!("One {} year ≈ {} Earth days.", name, days))
            );
        }
    }
}

#[test]
fn test_tables_cover_exactly_eight_planets() {
    assert_eq!(Planet::ALL.len(), PLANETS.len());
    for (planet, (name, _, _)) in Planet::ALL.iter().zip(PLANETS) {
        assert_eq!(planet.name(), name);
    }
}

#[test]
fn test_unknown_names_quote_the_original_input() {
    for input in ["Pluto", "the moon", "", " Mars", "Marss", "Ceres"] {
        let fact = planet_fact(input);
        assert!(!fact.is_success(), "{:?} should not match", input);
        assert!(fact.text().contains(&format!("'{}'", input)));

        let year = days_in_year(input);
        assert!(!year.is_success(), "{:?} should not match", input);
        assert!(year.text().contains(&format!("'{}'", input)));
    }
}

#[test]
fn test_spec_examples() {
    assert_eq!(
        planet_fact("mars").to_value().unwrap(),
        json!({"status": "success", "fact": "Mars hosts the tallest known volcano, Olympus Mons."})
    );
    assert_eq!(
        days_in_year("Neptune").to_value().unwrap(),
        json!({"status": "success", "report": "One Neptune year ≈ 60,190 Earth days."})
    );
    assert_eq!(
        planet_fact("Pluto").to_value().unwrap(),
        json!({"status": "error", "error_message": "Sorry, I don’t have a fact for 'Pluto'."})
    );
    assert_eq!(
        days_in_year("Earth").to_value().unwrap(),
        json!({"status": "success", "report": "One Earth year ≈ 365.25 Earth days."})
    );
}

#[test]
fn test_repeated_calls_are_identical() {
    for input in ["saturn", "SATURN", "Vulcan"] {
        let first = (planet_fact(input), days_in_year(input));
        for _ in 0..3 {
            assert_eq!((planet_fact(input), days_in_year(input)), first);
        }
    }
}

#[tokio::test]
async fn test_agent_dispatch_matches_direct_calls() {
    let agent = root_agent().expect("default agent");
    for (name, _, _) in PLANETS {
        let via_agent = agent
            .call_tool("planet_fact", json!({ "planet": name }))
            .await
            .expect("dispatch");
        assert_eq!(via_agent, planet_fact(name));

        let via_agent = agent
            .call_tool("days_in_year", json!({ "planet": name }))
            .await
            .expect("dispatch");
        assert_eq!(via_agent, days_in_year(name));
    }
}

#[tokio::test]
async fn test_malformed_arguments_are_invocation_errors() {
    let agent = root_agent().expect("default agent");
    assert!(agent.call_tool("planet_fact", json!({})).await.is_err());
    assert!(agent
        .call_tool("days_in_year", json!({"planet": null}))
        .await
        .is_err());
}

#[test]
fn test_manifest_exposes_tool_schemas() {
    let manifest = root_agent().expect("default agent").manifest();
    let names: Vec<&str> = manifest
        .tools
        .iter()
        .map(|tool| tool["name"].as_str().expect("tool name"))
        .collect();
    assert_eq!(names, vec!["planet_fact", "days_in_year"]);
    for tool in &manifest.tools {
        assert_eq!(tool["parameters"]["required"], json!(["planet"]));
    }
}
