/*
 * Copyright LumbreTravel Contributors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *      https://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

fn read_json(fname: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(fname).expect("Failed to read fixture");
    serde_json::from_str(&text).expect("Fixture is not valid JSON")
}

mod lib {
    use super::read_json;

    use cool_asserts::assert_matches;
    use lumbretravel_tool_args::dates::DateError;
    use lumbretravel_tool_args::{ArgumentError, ArgumentPreparer, PrepareConfig};

    fn run_integration_test(call_fname: &str, expected_fname: &str, config: PrepareConfig) {
        let mut call = read_json(call_fname);
        let expected = read_json(expected_fname);

        ArgumentPreparer::new(config)
            .prepare_call(&mut call)
            .expect("Failed to prepare tool call");
        assert!(expected == call, "{expected} != {call}");
    }

    #[test]
    fn create_program() {
        run_integration_test(
            "tests/fixtures/create_program.json",
            "tests/fixtures/create_program.prepared.json",
            PrepareConfig::default(),
        );
    }

    #[test]
    fn add_activities() {
        run_integration_test(
            "tests/fixtures/add_activities.json",
            "tests/fixtures/add_activities.prepared.json",
            PrepareConfig::default(),
        );
    }

    #[test]
    fn daily_activities() {
        let mut call = read_json("tests/fixtures/daily_activities.json");
        let rewrites = ArgumentPreparer::default()
            .prepare_call(&mut call)
            .expect("Failed to prepare tool call");
        assert_eq!(rewrites.len(), 1);
        assert_eq!(
            call.pointer("/arguments/date"),
            Some(&serde_json::json!("2025-07-16T03:00:00.000Z"))
        );
    }

    #[test]
    fn nonexistent_end_date_is_rejected() {
        let original = read_json("tests/fixtures/update_program_invalid.json");
        let mut call = original.clone();
        assert_matches!(
            ArgumentPreparer::default().prepare_call(&mut call),
            Err(err @ ArgumentError::InvalidDate { source: DateError::InvalidFormat(_), .. }) => {
                assert_eq!(
                    err.to_tool_result(),
                    serde_json::json!({
                        "content": [{
                            "type": "text",
                            "text": "LumbreTravel Tool API error: Invalid date format: 31-06-2025 (argument `endDate`)"
                        }],
                        "isError": true
                    })
                );
            }
        );
        assert_eq!(call, original);
    }
}

#[cfg(feature = "cli")]
mod cli {
    use super::read_json;

    use assert_cmd::{assert::OutputAssertExt, cargo_bin_cmd};

    #[test]
    fn normalize_prints_the_canonical_date() {
        for spelling in [
            "2024-03-20",
            "03/20/2024",
            "20 March 2024",
            "2024-03-20T18:45:00.000Z",
            "20-03-2024",
        ] {
            let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
            let cmd = cmd.arg("normalize").arg(spelling);
            cmd.unwrap().assert().success().stdout("20-03-2024\n");
        }
    }

    #[test]
    fn normalize_rejects_an_invalid_date() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .arg("normalize")
            .arg("2024-13-20")
            .arg("--error-format")
            .arg("plain");
        let output = cmd.assert().failure().code(1).get_output().clone();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid date format: 2024-13-20"), "{stderr}");
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn normalize_json_literal_must_be_a_string() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .arg("normalize")
            .arg("20240320")
            .arg("--json")
            .arg("--error-format")
            .arg("json");
        let output = cmd.assert().failure().code(1).get_output().clone();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("date_error::not_a_string"), "{stderr}");
    }

    #[test]
    fn instant_prints_three_in_the_morning_utc() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd.arg("instant").arg("20-03-2024");
        cmd.unwrap()
            .assert()
            .success()
            .stdout("2024-03-20T03:00:00.000Z\n");
    }

    #[test]
    fn instant_requires_canonical_text() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .arg("instant")
            .arg("2024-03-20")
            .arg("--error-format")
            .arg("plain");
        let output = cmd.assert().failure().code(1).get_output().clone();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Error converting date: '2024-03-20'"),
            "{stderr}"
        );
    }

    #[test]
    fn prepare_rewrites_a_tool_call_file() {
        let expected = read_json("tests/fixtures/add_activities.prepared.json");

        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd.arg("prepare").arg("tests/fixtures/add_activities.json");
        let output = cmd.unwrap();
        output.clone().assert().success();
        let actual: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
        assert_eq!(actual, expected);
    }

    #[test]
    fn prepare_reads_bare_arguments_from_stdin() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .arg("prepare")
            .arg("--tool")
            .arg("daily_activities")
            .arg("--normalize-instant-inputs")
            .write_stdin(r#"{ "date": "16 July 2025" }"#);
        let output = cmd.unwrap();
        output.clone().assert().success();
        let actual: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
        assert_eq!(
            actual,
            serde_json::json!({ "date": "2025-07-16T03:00:00.000Z" })
        );
    }

    #[test]
    fn prepare_logs_rewrites_only_when_verbose() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .env_remove("RUST_LOG")
            .arg("prepare")
            .arg("tests/fixtures/create_program.json");
        let quiet = cmd.unwrap();
        assert!(quiet.stderr.is_empty());

        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .env_remove("RUST_LOG")
            .arg("prepare")
            .arg("tests/fixtures/create_program.json")
            .arg("-v");
        let verbose = cmd.unwrap();
        let stderr = String::from_utf8_lossy(&verbose.stderr);
        assert!(stderr.contains("prepared tool call"), "{stderr}");
        assert!(stderr.contains("prepared date argument"), "{stderr}");
    }

    #[test]
    fn prepare_writes_to_an_output_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("prepared.json");

        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .arg("prepare")
            .arg("tests/fixtures/create_program.json")
            .arg("--output")
            .arg(&out);
        cmd.unwrap().assert().success().stdout("");

        let actual = read_json(out.to_str().expect("Temp path is not UTF-8"));
        assert_eq!(
            actual,
            read_json("tests/fixtures/create_program.prepared.json")
        );
    }

    #[test]
    fn prepare_reports_the_offending_argument() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .arg("prepare")
            .arg("tests/fixtures/update_program_invalid.json")
            .arg("--error-format")
            .arg("json");
        let output = cmd.assert().failure().code(1).get_output().clone();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("argument_error::invalid_date"), "{stderr}");
        assert!(stderr.contains("endDate"), "{stderr}");
    }

    #[test]
    fn prepare_reports_a_missing_input_file() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .arg("prepare")
            .arg("tests/fixtures/does_not_exist.json")
            .arg("--error-format")
            .arg("json");
        let output = cmd.assert().failure().code(1).get_output().clone();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("cli_error::file_open_error"), "{stderr}");
    }

    #[test]
    fn plan_lists_one_tool() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd.arg("plan").arg("update_activities");
        cmd.unwrap()
            .assert()
            .success()
            .stdout("update_activities\tactivities[].date\tcanonical\n");
    }

    #[test]
    fn plan_lists_every_tool() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let output = cmd.arg("plan").unwrap();
        output.clone().assert().success();
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.lines().count(), 9);
        assert!(stdout.contains("daily_activities\tdate\tinstant\n"));
    }

    #[test]
    fn plan_prints_json_rows() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let output = cmd.arg("plan").arg("get_programs_by_date_range").arg("--json").unwrap();
        output.clone().assert().success();
        let actual: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
        assert_eq!(
            actual,
            serde_json::json!([
                { "tool": "get_programs_by_date_range", "path": "startDate", "encoding": "canonical" },
                { "tool": "get_programs_by_date_range", "path": "endDate", "encoding": "canonical" }
            ])
        );
    }

    #[test]
    fn normalize_accepts_short_utc_offsets() {
        for spelling in ["2024-03-20T18:45:00.000z", "2024-03-20T18:45:00.000+00"] {
            let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
            let cmd = cmd.arg("normalize").arg(spelling);
            cmd.unwrap().assert().success().stdout("20-03-2024\n");
        }
    }

    #[test]
    fn plan_rejects_tools_without_dates() {
        let mut cmd = cargo_bin_cmd!("lumbretravel-tool-args");
        let cmd = cmd
            .arg("plan")
            .arg("season_summary")
            .arg("--error-format")
            .arg("json");
        let output = cmd.assert().failure().code(1).get_output().clone();
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("cli_error::no_date_plan"), "{stderr}");
    }
}
