use std::time::Duration;

use client_frontend_cli::{App, BATTLE_REFUSED, CliConfig, INVALID_CHOICE, NOT_FOUND};
use client_pokeapi::{MockPokemonSource, pokemon_payload};
use poke_core::ScriptedRange;

fn source() -> MockPokemonSource {
    MockPokemonSource::new()
        .with_payload(
            "bulbasaur",
            pokemon_payload("bulbasaur", &["grass", "poison"], 45, 49, 49),
        )
        .with_payload("charmander", pokemon_payload("charmander", &["fire"], 39, 52, 43))
        .with_response("missingno", 404, "Not Found")
}

async fn run_session(app: &mut App, input: &str) -> String {
    let mut output = Vec::new();
    app.run(input.as_bytes(), &mut output)
        .await
        .expect("session should finish");
    String::from_utf8(output).expect("utf-8 output")
}

#[tokio::test]
async fn test_search_prints_summary() {
    let mock = source();
    let mut app = App::builder()
        .source(mock.clone())
        .config(CliConfig::instant())
        .build()
        .unwrap();

    let out = run_session(&mut app, "1\nBulbasaur\n3\n").await;

    assert!(out.starts_with("poke-search\n\n1: search\n2: battle\n3: exit\nchoose: "));
    assert!(out.contains(
        "pokemon name: bulbasaur - type: grass, poison - hp: 45, attack: 49, defense: 49\n"
    ));
    assert_eq!(mock.requests(), vec!["bulbasaur".to_string()]);
}

#[tokio::test]
async fn test_search_miss_prints_not_found() {
    let mut app = App::builder()
        .source(source())
        .config(CliConfig::instant())
        .build()
        .unwrap();

    let out = run_session(&mut app, "1\nmissingno\n3\n").await;

    assert!(out.contains(&format!("pokemon name: {NOT_FOUND}\n")));
}

#[tokio::test]
async fn test_invalid_choice_reprompts() {
    let mut app = App::builder()
        .source(source())
        .config(CliConfig::instant())
        .build()
        .unwrap();

    let out = run_session(&mut app, "9\n3\n").await;

    assert!(out.contains(&format!("choose: {INVALID_CHOICE}\n")));
    assert_eq!(out.matches("choose: ").count(), 2);
}

#[tokio::test]
async fn test_end_of_input_exits_cleanly() {
    let mut app = App::builder()
        .source(source())
        .config(CliConfig::instant())
        .build()
        .unwrap();

    let out = run_session(&mut app, "").await;
    assert!(out.ends_with("choose: "));

    let out = run_session(&mut app, "1\n").await;
    assert!(out.ends_with("pokemon name: "));
}

#[tokio::test]
async fn test_battle_with_unknown_is_refused() {
    let mock = source();
    let mut app = App::builder()
        .source(mock.clone())
        .config(CliConfig::instant())
        .build()
        .unwrap();

    let out = run_session(&mut app, "2\nbulbasaur\nmissingno\n3\n").await;

    assert!(out.contains(&format!("pokemon 2 name: {BATTLE_REFUSED}\n\n1: search")));
    assert!(!out.contains("starting battle"));
    assert!(!out.contains("attacks"));
    assert_eq!(
        mock.requests(),
        vec!["bulbasaur".to_string(), "missingno".to_string()]
    );
}

#[tokio::test]
async fn test_battle_narration() {
    let mut app = App::builder()
        .source(source())
        .rng(ScriptedRange::new(std::iter::repeat_n(u32::MAX, 32)))
        .config(CliConfig::instant())
        .build()
        .unwrap();

    let out = run_session(&mut app, "2\nbulbasaur\ncharmander\n3\n").await;

    assert!(out.contains("pokemon 2 name: \nstarting battle: bulbasaur vs charmander\n"));
    assert!(
        out.contains("bulbasaur attacks charmander for 6 damage. charmander has 33 hp left.\n")
    );
    assert!(out.contains("charmander attacks bulbasaur for 3 damage. bulbasaur has 42 hp left.\n"));
    assert!(out.contains("charmander attacks bulbasaur for 3 damage. bulbasaur has 27 hp left.\n"));
    assert!(out.contains("\n\ncharmander fainted. bulbasaur wins!\n"));
    assert_eq!(out.matches(" attacks ").count(), 13);
}

#[tokio::test]
async fn test_battle_pacing_uses_configured_delay() {
    tokio::time::pause();

    let mut config = CliConfig::instant();
    config.battle.pace = Duration::from_secs(1);
    let mut app = App::builder()
        .source(source())
        .rng(ScriptedRange::new(std::iter::repeat_n(u32::MAX, 32)))
        .config(config)
        .build()
        .unwrap();

    let start = tokio::time::Instant::now();
    let out = run_session(&mut app, "2\nbulbasaur\ncharmander\n3\n").await;

    // One pause after the opening line and after each of the 13 attacks.
    assert_eq!(start.elapsed(), Duration::from_secs(14));
    assert!(out.contains("bulbasaur wins!"));
}

#[tokio::test]
async fn test_seeded_battles_repeat() {
    let mut config = CliConfig::instant();
    config.battle.seed = Some(151);

    let mut first = App::builder()
        .source(source())
        .config(config.clone())
        .build()
        .unwrap();
    let mut second = App::builder()
        .source(source())
        .config(config)
        .build()
        .unwrap();

    let input = "2\nbulbasaur\ncharmander\n3\n";
    assert_eq!(
        run_session(&mut first, input).await,
        run_session(&mut second, input).await
    );
}
