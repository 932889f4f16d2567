use std::collections::BTreeSet;

use map_runtime::{CharacterSnapshot, RuntimeConfig, RuntimeError, Scenario};
use motion_content::{ScenarioLoader, ScenarioSpec};
use motion_core::{
    CharacterId, CharacterKind, CharacterLookup, CharacterRef, EventId, OracleError, Position,
};

const SCENARIO: &str = r#"(
    map: (width: 10, height: 10, blocked: [(3, 0)]),
    routes: {
        "pace": (commands: [(command_id: 1), (command_id: 3)], repeat: true),
        "hop": (commands: [(command_id: 24), (command_id: 1), (command_id: 1), (command_id: 25)]),
        "wander": (commands: [(command_id: 8)], repeat: true),
    },
    characters: [
        (kind: Player, position: (0, 5)),
        (kind: Event(1), position: (0, 0), frequency: Some(8), route: Some("pace")),
        (kind: Event(2), position: (5, 5)),
        (kind: Event(3), position: (8, 8), frequency: Some(7), route: Some("wander")),
    ],
    forced: [
        (at_tick: 2, character: 2, route: "hop", frequency: 4),
    ],
)"#;

fn spec() -> ScenarioSpec {
    ScenarioLoader::parse(SCENARIO).expect("scenario should parse")
}

fn scenario() -> Scenario {
    Scenario::from_spec(&spec(), RuntimeConfig::default()).expect("scenario should build")
}

fn event_id(scenario: &Scenario, event: u32) -> CharacterId {
    scenario
        .runtime()
        .resolve(CharacterRef::Event(EventId(event)), None)
        .expect("event is placed")
        .id
}

#[test]
fn characters_are_placed_as_written() {
    let scenario = scenario();
    let runtime = scenario.runtime();

    assert_eq!(runtime.characters().count(), 4);
    assert!(runtime.player().unwrap().is_in_position(0, 5));
    let pacer = runtime.character(event_id(&scenario, 1)).unwrap();
    assert_eq!(pacer.kind, CharacterKind::Event(EventId(1)));
    assert_eq!(pacer.move_frequency, 8);
    assert_eq!(scenario.remaining_scheduled(), 1);
}

#[test]
fn scheduled_routes_are_forced_at_their_tick() {
    let mut scenario = scenario();
    let hopper = event_id(&scenario, 2);

    scenario.run(2).expect("ticks before the schedule");
    assert!(scenario.runtime().character(hopper).unwrap().is_in_position(5, 5));
    assert!(scenario.runtime().is_movement_settled());

    scenario.step().expect("scheduled tick");
    let character = scenario.runtime().character(hopper).unwrap();
    assert!(character.is_jumping());
    assert!(character.is_in_position(7, 5));
    assert!(scenario.runtime().pending().contains(hopper));
    assert_eq!(scenario.remaining_scheduled(), 0);

    scenario.run(20).expect("jump lands");
    let character = scenario.runtime().character(hopper).unwrap();
    assert!(!character.is_jumping());
    assert!(character.is_in_position(7, 5));
    assert!(scenario.runtime().is_movement_settled());
}

#[test]
fn custom_routes_repeat_on_their_own() {
    let mut scenario = scenario();
    let pacer = event_id(&scenario, 1);

    let mut visited = BTreeSet::new();
    for _ in 0..40 {
        scenario.step().expect("tick");
        visited.insert(scenario.runtime().character(pacer).unwrap().position);
    }

    assert_eq!(
        visited.into_iter().collect::<Vec<_>>(),
        [Position::new(0, 0), Position::new(1, 0)]
    );
}

#[test]
fn replays_are_deterministic() {
    fn trace() -> Vec<Vec<CharacterSnapshot>> {
        let mut scenario = scenario();
        (0..60)
            .map(|_| {
                scenario.step().expect("tick");
                scenario.runtime().snapshots()
            })
            .collect()
    }

    let first = trace();
    assert_eq!(first, trace());

    let wanderer = first
        .iter()
        .flatten()
        .filter(|snapshot| snapshot.kind == CharacterKind::Event(EventId(3)))
        .map(|snapshot| snapshot.position)
        .collect::<BTreeSet<_>>();
    assert!(wanderer.len() > 1);
}

#[test]
fn undefined_routes_are_rejected() {
    let mut spec = spec();
    spec.characters[2].route = Some("nope".to_string());

    assert_eq!(
        Scenario::from_spec(&spec, RuntimeConfig::default()).err(),
        Some(RuntimeError::UnknownRoute("nope".to_string()))
    );
}

#[test]
fn forcing_onto_a_missing_event_fails_the_tick() {
    let mut spec = spec();
    spec.forced[0].character = 9;
    spec.forced[0].at_tick = 0;
    let mut scenario =
        Scenario::from_spec(&spec, RuntimeConfig::default()).expect("scenario should build");

    assert_eq!(
        scenario.step().err(),
        Some(RuntimeError::Lookup(OracleError::EventNotFound(9)))
    );
}

#[test]
fn snapshots_serialize_for_traces() {
    let scenario = scenario();
    let json = serde_json::to_value(scenario.runtime().snapshots()).expect("serialize");

    assert_eq!(json.as_array().map(Vec::len), Some(4));
    assert_eq!(json[0]["position"]["x"], 0);
    assert_eq!(json[0]["position"]["y"], 5);
}
