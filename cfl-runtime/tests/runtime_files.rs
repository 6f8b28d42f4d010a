//! Integration tests: programs, input and output on disk

use std::fs;

use cfl_runtime::{
    CfluviurrhRuntime, Consent, ConsoleEmoter, RuntimeConfig, RuntimeError, create_output,
    open_input,
};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(program: &str, input: &[u8]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("program.cfl"), program).unwrap();
        fs::write(dir.path().join("input.bin"), input).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, console_input: &str) -> (Result<cfl_runtime::RunReport, RuntimeError>, String) {
        let mut runtime = CfluviurrhRuntime::new(RuntimeConfig::default());
        runtime.load_file(self.path("program.cfl")).unwrap();

        let mut emoter = ConsoleEmoter::new(console_input.as_bytes(), Vec::new());
        assert_eq!(emoter.obtain_consent().unwrap(), Consent::Granted);

        let input = open_input(self.path("input.bin")).unwrap();
        let output = create_output(self.path("output.bin")).unwrap();
        let result = runtime.run(input, output, &mut emoter);

        let (_, console) = emoter.into_inner();
        (result, String::from_utf8(console).unwrap())
    }

    fn output(&self) -> Vec<u8> {
        fs::read(self.path("output.bin")).unwrap()
    }
}

#[test]
fn test_comment_program_writes_one_byte() {
    let ws = Workspace::new("a=5(comment)a>", b"");
    let (result, _) = ws.run("y\n");
    assert!(result.is_ok());
    assert_eq!(ws.output(), vec![5]);
}

#[test]
fn test_branch_waits_for_emoter() {
    let ws = Workspace::new("t@=x a=3 b=4 t?a<b a=0 :x a>", b"");
    let (result, console) = ws.run("y\n\n");
    let report = result.unwrap();
    assert_eq!(ws.output(), vec![3]);
    assert_eq!(report.stats.jumps, 1);
    assert!(console.contains("[EMOTER: please genuinely experience"));
    assert_eq!(console.matches("[EMOTER:").count(), 1);
}

#[test]
fn test_echo_program_copies_input() {
    let program = "
        (copy input to output)
        l@=r e@=e z=0 z-=1
        :r c< e?c=z c> l?0=0
        :e
    ";
    let ws = Workspace::new(program, b"ok");
    // consentimento + 5 confirmações (2 por byte, 1 no fim)
    let (result, console) = ws.run("y\n\n\n\n\n\n");
    let report = result.unwrap();
    assert_eq!(ws.output(), b"ok".to_vec());
    assert_eq!(report.stats.conditionals, 5);
    assert_eq!(console.matches("and press Enter]").count(), 5);
}

#[test]
fn test_emoter_walks_away() {
    let ws = Workspace::new("t@=x a=3 b=4 t?a<b :x a>", b"");
    let (result, _) = ws.run("y\n");
    assert!(matches!(
        result,
        Err(RuntimeError::Execution(cfl_runtime::ExecError::Emoter(_)))
    ));
    assert!(ws.output().is_empty());
}

#[test]
fn test_fatal_error_keeps_earlier_output() {
    let ws = Workspace::new("a=7 a> a@=q", b"");
    let (result, _) = ws.run("y\n");
    assert!(matches!(
        result,
        Err(RuntimeError::Execution(cfl_runtime::ExecError::UndefinedLabel { label: 'q', .. }))
    ));
    assert_eq!(ws.output(), vec![7]);
}

#[test]
fn test_report_serializes() {
    let ws = Workspace::new("a=5 a>", b"");
    let (result, _) = ws.run("y\n");
    let json = serde_json::to_value(result.unwrap()).unwrap();
    assert_eq!(json["stats"]["bytes_out"], 1);
    assert_eq!(json["registers"]["cells"][0], 5);
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfluviurrh.toml");
    fs::write(&path, "[machine]\neof_value = 0\n").unwrap();
    let config = RuntimeConfig::from_file(&path).unwrap();
    assert_eq!(config.machine.eof_value, 0);

    let missing = RuntimeConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(missing, RuntimeError::Config(_)));
}

#[test]
fn test_missing_input_file() {
    let err = open_input("/nonexistent/input.bin").unwrap_err();
    assert!(err.to_string().starts_with("Can't open input file"));
}
