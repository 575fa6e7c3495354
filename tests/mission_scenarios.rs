// tests/mission_scenarios.rs
use glam::IVec2;
use rover_mission::{
    Heading, InstructionSet, Mission, MissionConfig, MissionError, Plateau, Rover, RoverOp,
    TrailingRover,
};

const MAIN_SCRIPT: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM";

fn run(script: &str) -> Mission {
    let mut mission = Mission::new(script);
    mission.start().unwrap();
    mission
}

fn run_err(script: &str, config: MissionConfig) -> MissionError {
    let mut mission = Mission::new(script).with_config(config);
    let err = mission.start().unwrap_err();
    assert_eq!(mission.output(), "", "no partial output on error");
    assert!(mission.reports().is_empty());
    assert!(mission.plateau().is_none());
    err
}

#[test]
fn test_main_case() {
    let mission = run(MAIN_SCRIPT);
    assert_eq!(mission.output(), "1 3 N\n5 1 E\n");

    let reports = mission.reports();
    assert_eq!(reports.len(), 2);
    assert!(!reports[0].halted);
    assert!(!reports[1].halted);

    // Both parked cells are now blocked.
    let plateau = mission.plateau().unwrap();
    assert!(!plateau.is_valid_position(1, 3));
    assert!(!plateau.is_valid_position(5, 1));
    assert_eq!(plateau.occupied_count(), 2);
}

#[test]
fn test_rover_scenarios_step_by_step() {
    let mut plateau = Plateau::new(5, 5);

    let mut rover_a = Rover::new(&plateau, 1, 2, Heading::North);
    assert!(!rover_a.navigate("LMLMLMLMM"));
    assert_eq!(rover_a.report(), "1 3 N");
    let a = rover_a.position();
    plateau.save_rover_pos(a.x, a.y).unwrap();

    let mut rover_b = Rover::new(&plateau, 3, 3, Heading::East);
    assert!(!rover_b.navigate("MMRMMRMRRM"));
    assert_eq!(rover_b.report(), "5 1 E");
    assert_eq!(rover_b.to_string(), "5 1 E");
}

#[test]
fn test_rover_turns() {
    let plateau = Plateau::new(5, 5);
    let mut rover = Rover::new(&plateau, 0, 0, Heading::North);

    rover.navigate("L");
    assert_eq!(rover.report(), "0 0 W");

    rover.navigate("RRR");
    assert_eq!(rover.report(), "0 0 S");
}

#[test]
fn test_rover_moves() {
    let plateau = Plateau::new(5, 5);
    let mut rover = Rover::new(&plateau, 0, 0, Heading::North);
    assert!(!rover.navigate("M"));
    assert_eq!(rover.report(), "0 1 N");
}

#[test]
fn test_rover_limit_hit() {
    let plateau = Plateau::new(5, 5);
    let mut rover = Rover::new(&plateau, 0, 0, Heading::South);

    assert!(rover.navigate("M"));
    assert_eq!(rover.report(), "0 0 S");

    assert!(rover.navigate("RM"));
    assert_eq!(rover.report(), "0 0 W");
}

#[test]
fn test_halt_discards_remaining_instructions() {
    let plateau = Plateau::new(2, 2);
    let mut rover = Rover::new(&plateau, 0, 2, Heading::North);
    assert!(rover.navigate("MRM"));
    assert_eq!(rover.report(), "0 2 N");
}

#[test]
fn test_unknown_instructions_are_skipped() {
    let plateau = Plateau::new(5, 5);
    let mut rover = Rover::new(&plateau, 0, 0, Heading::North);
    assert!(!rover.navigate("MxM?R "));
    assert_eq!(rover.report(), "0 2 E");
}

#[test]
fn test_trailing_unknown_after_hit_still_reports_halt() {
    // Halting stops before the unknown character is ever seen.
    let plateau = Plateau::new(0, 0);
    let mut rover = Rover::new(&plateau, 0, 0, Heading::East);
    assert!(rover.navigate("MX"));
}

#[test]
fn test_custom_instruction_set() {
    let plateau = Plateau::new(5, 5);
    let ops = InstructionSet::standard()
        .with_op('F', RoverOp::Move)
        .with_op('M', RoverOp::Ignore);
    let mut rover = Rover::new(&plateau, 0, 0, Heading::East);
    assert!(!rover.navigate_with(&ops, "FFMM"));
    assert_eq!(rover.position(), IVec2::new(2, 0));
}

#[test]
fn test_later_rover_blocked_by_parked_rover() {
    let mission = run("5 5\n1 2 N\nM\n1 1 N\nMMR");
    assert_eq!(mission.output(), "1 3 N\n1 2 N\n");

    let reports = mission.reports();
    assert!(!reports[0].halted);
    assert!(reports[1].halted);
    assert_eq!(reports[1].position, IVec2::new(1, 2));
    assert_eq!(reports[1].heading, Heading::North);
}

#[test]
fn test_halted_rover_parks_on_last_valid_cell() {
    let mission = run("3 3\n0 0 S\nMLM\n0 1 S\nM");
    assert_eq!(mission.output(), "0 0 S\n0 1 S\n");
    assert!(mission.reports()[0].halted);
    assert!(mission.reports()[1].halted);
}

#[test]
fn test_header_orders_y_before_x() {
    // Header "2 7": Y spans 0..=2, X spans 0..=7.
    let mission = run("2 7\n6 0 E\nMM\n0 1 N\nMM");
    assert_eq!(mission.output(), "7 0 E\n0 2 N\n");
    assert!(mission.reports()[0].halted);
    assert!(mission.reports()[1].halted);
}

#[test]
fn test_empty_instruction_line() {
    let mission = run("5 5\n2 2 W\n\n3 3 N\nL");
    assert_eq!(mission.output(), "2 2 W\n3 3 W\n");
    assert!(!mission.reports()[0].halted);
}

#[test]
fn test_header_only_script() {
    let mission = run("4 4\n");
    assert_eq!(mission.output(), "");
    assert!(mission.reports().is_empty());
    assert_eq!(mission.plateau().unwrap().occupied_count(), 0);
}

#[test]
fn test_crlf_script() {
    let mission = run("5 5\r\n1 2 N\r\nLMLMLMLMM\r\n3 3 E\r\nMMRMMRMRRM\r\n");
    assert_eq!(mission.output(), "1 3 N\n5 1 E\n");
}

#[test]
fn test_invalid_header() {
    for script in ["5 x\n1 2 N\nM", "5\n1 2 N\nM", "5 5 5", "-5 5", "5,5"] {
        let header = script.lines().next().unwrap();
        assert_eq!(
            run_err(script, MissionConfig::default()),
            MissionError::InvalidHeader(header.to_string())
        );
    }
}

#[test]
fn test_missing_header() {
    assert_eq!(
        run_err("", MissionConfig::default()),
        MissionError::MissingHeader
    );
}

#[test]
fn test_invalid_placement_reports_line() {
    assert_eq!(
        run_err("5 5\n1 2 N\nM\n1 2\nM", MissionConfig::default()),
        MissionError::InvalidPlacement {
            line: 4,
            input: "1 2".into()
        }
    );
    assert_eq!(
        run_err("5 5\n1 2 Q\nM", MissionConfig::default()),
        MissionError::InvalidPlacement {
            line: 2,
            input: "1 2 Q".into()
        }
    );
}

#[test]
fn test_trailing_rover_policy() {
    let script = "5 5\n1 2 N\nM\n3 3 E";
    assert_eq!(
        run_err(script, MissionConfig::default()),
        MissionError::MissingInstructions { line: 4 }
    );

    let mut mission = Mission::new(script).with_config(MissionConfig {
        trailing_rover: TrailingRover::Idle,
        ..Default::default()
    });
    mission.start().unwrap();
    assert_eq!(mission.output(), "1 3 N\n3 3 E\n");
}

#[test]
fn test_start_cell_validation() {
    assert_eq!(
        run_err("5 5\n6 0 N\nM", MissionConfig::default()),
        MissionError::StartOffPlateau { line: 2, x: 6, y: 0 }
    );
    assert_eq!(
        run_err("5 5\n1 1 N\n\n1 1 E\nM", MissionConfig::default()),
        MissionError::StartOccupied { line: 4, x: 1, y: 1 }
    );
}

#[test]
fn test_unchecked_start_cells() {
    let unchecked = MissionConfig {
        validate_start: false,
        ..Default::default()
    };

    let mut mission = Mission::new("5 5\n1 1 N\n\n1 1 E\nM").with_config(unchecked.clone());
    mission.start().unwrap();
    assert_eq!(mission.output(), "1 1 N\n2 1 E\n");

    // An off-plateau rover cannot move back in, so its final cell fails to commit.
    assert_eq!(
        run_err("2 2\n5 5 N\nL", unchecked),
        MissionError::OffPlateau { x: 5, y: 5 }
    );
}

#[test]
fn test_restart_runs_from_scratch() {
    let mut mission = Mission::new(MAIN_SCRIPT);
    mission.start().unwrap();
    mission.start().unwrap();
    assert_eq!(mission.output(), "1 3 N\n5 1 E\n");
    assert_eq!(mission.reports().len(), 2);
}

#[test]
fn test_reports_serialize_with_heading_letters() {
    let mission = run(MAIN_SCRIPT);
    let json = serde_json::to_value(mission.reports()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "position": [1, 3], "heading": "N", "halted": false },
            { "position": [5, 1], "heading": "E", "halted": false },
        ])
    );
}
