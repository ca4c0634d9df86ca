//! Tests for argument parsing and command output.

use clap::Parser;
use rps_cli::{run, Cli, Command, FormArg, FormatArg};
use rps_core::{export::read_csv, ErrorCategory};

fn run_args(args: &[&str]) -> rps_core::Result<String> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_parse_rotor_defaults() {
    let cli = Cli::try_parse_from(["rps", "rotor", "3"]).unwrap();
    match cli.command {
        Command::Rotor { n, form, json } => {
            assert_eq!(n, 3);
            assert_eq!(form, FormArg::DoubleAngle);
            assert!(!json);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_solid_options() {
    let cli = Cli::try_parse_from(["rps", "solid", "cube", "--format", "json", "-o", "cube.json"]).unwrap();
    match cli.command {
        Command::Solid { name, format, output } => {
            assert_eq!(name, "cube");
            assert_eq!(format, FormatArg::Json);
            assert_eq!(output.unwrap().to_str(), Some("cube.json"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_rejects_negative_index() {
    assert!(Cli::try_parse_from(["rps", "rotor", "-1"]).is_err());
}

#[test]
fn test_global_edge_tolerance() {
    let cli = Cli::try_parse_from(["rps", "list", "--edge-tolerance", "1e-4"]).unwrap();
    assert_eq!(cli.edge_tolerance, Some(1e-4));
    assert_eq!(rps_cli::selector_config(&cli).edge_tolerance, 1e-4);
}

#[test]
fn test_edge_tolerance_must_be_positive() {
    for bad in ["--edge-tolerance=-1", "--edge-tolerance=0", "--edge-tolerance=NaN", "--edge-tolerance=inf"] {
        let err = Cli::try_parse_from(["rps", "list", bad]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{}", bad);
        assert_eq!(err.exit_code(), 2);
    }
}

#[test]
fn test_loose_edge_tolerance_still_lists_solids() {
    let out = run_args(&["rps", "list", "--edge-tolerance", "0.1"]).unwrap();
    assert_eq!(out.lines().count(), 6);
}

#[test]
fn test_rotor_text_output() {
    let out = run_args(&["rps", "rotor", "0"]).unwrap();
    assert!(out.contains("n = 0 (double-angle)"));
    assert!(out.contains("projected (-0.707107, 0.000000, 0.707107)"), "{}", out);
}

#[test]
fn test_rotor_json_output() {
    let out = run_args(&["rps", "rotor", "5", "--form", "conjugate-pair", "--json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["index"], 5);
    assert_eq!(value["form"], "conjugate_pair");
    assert_eq!(value["phase"], 0.0);
    assert!(value["projected"].is_array());
}

#[test]
fn test_orbit_reports_degeneracy() {
    let out = run_args(&["rps", "orbit", "--limit", "100"]).unwrap();
    assert!(out.starts_with("2 distinct rotors among n < 100"), "{}", out);
}

#[test]
fn test_solid_csv_to_stdout() {
    let out = run_args(&["rps", "solid", "Dodecahedron"]).unwrap();
    let points = read_csv(&out).unwrap();
    assert_eq!(points.len(), 20);
}

#[test]
fn test_solid_json_to_file() {
    let path = std::env::temp_dir().join(format!("rps-cli-test-{}.json", std::process::id()));
    let path_str = path.to_str().unwrap().to_string();

    let out = run_args(&["rps", "solid", "octahedron", "--format", "json", "--output", &path_str]).unwrap();
    assert!(out.contains("Wrote 6 vertices of octahedron"));

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["solid"], "octahedron");
    assert_eq!(value["edges"].as_array().unwrap().len(), 12);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_unknown_solid_lists_choices() {
    let err = run_args(&["rps", "solid", "prism"]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Input);
    assert_eq!(err.exit_code(), 2);
    let msg = err.to_string();
    assert!(msg.contains("tetrahedron, cube, octahedron, icosahedron, dodecahedron"), "{}", msg);
}

#[test]
fn test_verify_passes() {
    let out = run_args(&["rps", "verify", "icosahedron", "--golden"]).unwrap();
    assert!(out.contains("icosahedron: 12 vertices, 30 edges"), "{}", out);
    assert!(out.contains("golden ratio     found"));
    assert!(out.contains("rotation group   invariant (order 60)"));
    assert!(out.trim_end().ends_with("PASSED"));
}

#[test]
fn test_list_covers_all_solids() {
    let out = run_args(&["rps", "list"]).unwrap();
    assert_eq!(out.lines().count(), 6);
    for name in ["tetrahedron", "cube", "octahedron", "icosahedron", "dodecahedron"] {
        assert!(out.contains(name));
    }
    // Cube corners (±1, ±1, ±1) sit at distance √3
    let cube = out.lines().find(|l| l.starts_with("cube ")).unwrap();
    assert!(cube.trim_end().ends_with("1.732051"), "{}", cube);
}
