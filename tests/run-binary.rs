use assert_cmd::Command;

const CORRIDOR: &str = r#"{"staticLayer":[["wall","wall","wall","wall","wall"],["wall","","","target","wall"],["wall","wall","wall","wall","wall"]],"computerSet":{"{\"x\":2,\"y\":1}":{}},"player":{"x":1,"y":1}}"#;

fn snekoban(command: &str, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("snekoban")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg(command)
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn run_new_game() {
    let output = r#"{"errCode":0,"data":{"staticLayer":[["wall","wall","wall","wall","wall"],["wall","","","target","wall"],["wall","wall","wall","wall","wall"]],"computerSet":{"{\"x\":2,\"y\":1}":{}},"player":{"x":1,"y":1}},"DEBUG_DATA":[]}"#;

    snekoban(
        "new_game",
        r#"[[["wall"],["wall"],["wall"],["wall"],["wall"]],
            [["wall"],["player"],["computer"],["target"],["wall"]],
            [["wall"],["wall"],["wall"],["wall"],["wall"]]]"#,
    )
    .success()
    .stdout(output)
    .stderr("");
}

#[test]
fn run_solve_puzzle() {
    snekoban("solve_puzzle", CORRIDOR)
        .success()
        .stdout(r#"{"errCode":0,"data":["right"],"DEBUG_DATA":["1"]}"#)
        .stderr("");
}

#[test]
fn run_solve_already_solved() {
    let solved = CORRIDOR.replace(r#"{\"x\":2,\"y\":1}"#, r#"{\"x\":3,\"y\":1}"#);
    snekoban("solve_puzzle", &solved)
        .success()
        .stdout(r#"{"errCode":0,"data":[],"DEBUG_DATA":[]}"#);
}

#[test]
fn run_dashed_command() {
    snekoban("-solve_puzzle", CORRIDOR)
        .success()
        .stdout(r#"{"errCode":0,"data":["right"],"DEBUG_DATA":["1"]}"#);

    snekoban("-victory_check", CORRIDOR)
        .success()
        .stdout(r#"{"errCode":0,"data":false,"DEBUG_DATA":[]}"#);
}

#[test]
fn run_step_game() {
    let input = format!(r#"{{"game":{},"direction":"right"}}"#, CORRIDOR);
    let output = r#"{"errCode":0,"data":{"staticLayer":[["wall","wall","wall","wall","wall"],["wall","","","target","wall"],["wall","wall","wall","wall","wall"]],"computerSet":{"{\"x\":3,\"y\":1}":{}},"player":{"x":2,"y":1}},"DEBUG_DATA":[]}"#;

    snekoban("step_game", &input).success().stdout(output);
}

#[test]
fn run_unknown_command() {
    snekoban("-teleport", CORRIDOR)
        .success()
        .stdout(r#"{"errCode":1,"errMsg":"Unknown command: -teleport","DEBUG_DATA":[]}"#);
}

#[test]
fn run_missing_command() {
    // clap reports this one, nothing goes to stdout
    Command::cargo_bin("snekoban")
        .unwrap()
        .write_stdin(CORRIDOR)
        .assert()
        .failure()
        .stdout("");
}
