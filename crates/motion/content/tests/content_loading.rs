use std::fs;

use motion_content::{CharacterKindSpec, ContentFactory, ScenarioLoader};
use motion_core::{Facing, Layer, UnknownCommandPolicy, VehicleKind};
use tempfile::TempDir;

const SCENARIO: &str = r#"(
    map: (
        width: 20,
        height: 15,
        loop_horizontal: true,
        blocked: [(4, 4), (5, 4)],
        bush: [(2, 2, 8)],
    ),
    routes: {
        "pace": (commands: [(command_id: 1), (command_id: 3)], repeat: true),
        "spin": (commands: [(command_id: 16), (command_id: 16)]),
    },
    characters: [
        (kind: Player, position: (1, 1)),
        (kind: Event(3), position: (6, 6), facing: Left, speed: Some(3), route: Some("pace")),
        (kind: Vehicle(Boat), position: (10, 2), layer: Above),
    ],
    forced: [
        (at_tick: 4, character: 3, route: "spin", frequency: 8),
    ],
)"#;

fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("config.toml"), "unknown_command = \"stall\"\nrng_seed = 7\n")
        .expect("write config");
    fs::write(
        dir.path().join("routes.ron"),
        r#"{ "wait": (commands: [(command_id: 23)]) }"#,
    )
    .expect("write routes");
    fs::create_dir(dir.path().join("scenarios")).expect("create scenarios dir");
    fs::write(dir.path().join("scenarios").join("demo.ron"), SCENARIO).expect("write scenario");
    dir
}

#[test]
fn factory_loads_every_file() {
    let dir = data_dir();
    let factory = ContentFactory::new(dir.path());

    let config = factory.load_config().expect("config");
    assert_eq!(config.unknown_command, UnknownCommandPolicy::Stall);
    assert_eq!(config.rng_seed, 7);

    let routes = factory.load_routes().expect("routes");
    assert_eq!(routes.names().collect::<Vec<_>>(), vec!["wait"]);

    let scenario = factory.load_scenario("demo").expect("scenario");
    assert!(scenario.map.loop_horizontal);
    assert!(!scenario.map.loop_vertical);
    assert_eq!(scenario.characters.len(), 3);

    let event = &scenario.characters[1];
    assert_eq!(event.kind, CharacterKindSpec::Event(3));
    assert_eq!(event.facing, Facing::Left);
    assert_eq!(event.speed, Some(3));
    assert_eq!(event.route.as_deref(), Some("pace"));

    let boat = &scenario.characters[2];
    assert_eq!(boat.kind, CharacterKindSpec::Vehicle(VehicleKind::Boat));
    assert_eq!(boat.layer, Layer::Above);
    assert_eq!(boat.facing, Facing::Down);

    assert_eq!(scenario.forced[0].frequency, 8);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = TempDir::new().expect("create temp dir");
    let config = ContentFactory::new(dir.path()).load_config().expect("config");
    assert_eq!(config.unknown_command, UnknownCommandPolicy::Skip);
}

#[test]
fn dangling_route_names_are_rejected() {
    let broken = SCENARIO.replace("route: \"spin\"", "route: \"nowhere\"");
    let error = ScenarioLoader::parse(&broken).unwrap_err();
    assert!(error.to_string().contains("nowhere"));
}

#[test]
fn missing_scenario_file_names_the_path() {
    let dir = data_dir();
    let error = ContentFactory::new(dir.path())
        .load_scenario("absent")
        .unwrap_err();
    assert!(error.to_string().contains("absent.ron"));
}
