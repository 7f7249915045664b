use gunslinger_cli::run;
use serial_test::serial;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).to_string(),
        String::from_utf8_lossy(&err).to_string(),
    )
}

#[test]
fn deal_prints_seats_board_and_winner() {
    let (code, out, err) = run_args(&["gunslinger", "deal", "--seed", "1"]);
    assert_eq!(code, 0, "stderr={err}");
    assert!(out.starts_with("Seed: 1\n"));
    for seat in ["You: ", "Dealer: ", "The Jackal: ", "Vex: ", "Board: ", "Winner: "] {
        assert!(out.contains(seat), "missing {seat} in {out}");
    }
}

#[test]
fn deal_is_reproducible() {
    let first = run_args(&["gunslinger", "deal", "--seed", "2024"]);
    let second = run_args(&["gunslinger", "deal", "--seed", "2024"]);
    assert_eq!(first, second);
}

#[test]
fn eval_accepts_letters_and_symbols() {
    let (code, out, _) = run_args(&["gunslinger", "eval", "As", "Ah", "A♦", "K♠", "Kh", "2c", "3d"]);
    assert_eq!(code, 0);
    assert!(out.contains("Best hand: Full House"));
}

#[test]
fn eval_rejects_garbage() {
    let (code, out, err) = run_args(&["gunslinger", "eval", "As", "Ah", "Xx", "Ks", "Kh"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Invalid input:"));
}

#[test]
#[serial]
fn cfg_reads_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gunslinger.toml");
    std::fs::write(&path, "starting_money = 500\nlog_filter = \"debug\"\n").unwrap();
    unsafe {
        std::env::set_var("GUNSLINGER_CONFIG", &path);
        std::env::remove_var("GUNSLINGER_STARTING_MONEY");
        std::env::remove_var("GUNSLINGER_LOG");
    }

    let (code, out, _) = run_args(&["gunslinger", "cfg"]);
    unsafe {
        std::env::remove_var("GUNSLINGER_CONFIG");
    }

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["starting_money"]["value"], 500);
    assert_eq!(json["starting_money"]["source"], "file");
    assert_eq!(json["log_filter"]["value"], "debug");
    assert_eq!(json["seed"]["source"], "default");
}

#[test]
#[serial]
fn cfg_with_a_missing_file_fails() {
    unsafe {
        std::env::set_var("GUNSLINGER_CONFIG", "/nonexistent/gunslinger.toml");
    }
    let (code, out, err) = run_args(&["gunslinger", "cfg"]);
    unsafe {
        std::env::remove_var("GUNSLINGER_CONFIG");
    }
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("cannot read config file"));
}

#[test]
#[serial]
fn play_rejects_an_unknown_opponent_policy() {
    let (code, out, err) = run_args(&["gunslinger", "play", "--seed", "1", "--ai", "shark"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert_eq!(
        err,
        "Error: Invalid input: unknown opponent policy 'shark'\n"
    );
}
