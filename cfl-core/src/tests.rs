//! Testes integrados: programas completos

use crate::*;

fn run_with(
    source: &str,
    input: &[u8],
    config: MachineConfig,
) -> (ExecResult<ExecutionStats>, Vec<u8>, RegisterBank, Vec<EmotionCue>) {
    let program = Program::from(source);
    let mut emoter = RecordingEmoter::new();
    let mut interpreter = Interpreter::with_config(&program, input, Vec::new(), &mut emoter, config);
    let result = interpreter.run();
    let registers = interpreter.registers().clone();
    let output = interpreter.into_output();
    (result, output, registers, emoter.cues().to_vec())
}

fn run(source: &str, input: &[u8]) -> (ExecResult<ExecutionStats>, Vec<u8>, RegisterBank) {
    let (result, output, registers, _) = run_with(source, input, MachineConfig::default());
    (result, output, registers)
}

#[test]
fn test_comment_is_transparent() {
    let (result, output, _) = run("a=5(comment)a>", b"");
    assert!(result.is_ok());
    assert_eq!(output, vec![5]);
}

#[test]
fn test_comment_spans_lines() {
    let (result, output, _) = run("a=1(line one\nline two a=9)\na>", b"");
    assert!(result.is_ok());
    assert_eq!(output, vec![1]);
}

#[test]
fn test_conditional_jumps_to_label() {
    let (result, output, _, cues) =
        run_with("t@=xa=3b=4t?a<ba=0:xa>", b"", MachineConfig::default());
    let stats = result.unwrap();
    assert_eq!(output, vec![3]);
    assert_eq!(stats.jumps, 1);
    assert_eq!(cues.len(), 1);
    // t=18, a=3, b=4 → soma 25
    assert_eq!(cues[0].emotion.name(), EMOTIONS[25]);
    assert_eq!(cues[0].to_string(), "faint embarrassment");
}

#[test]
fn test_every_letter_assignment_visible_through_uppercase() {
    for letter in b'a'..=b'z' {
        let upper = letter.to_ascii_uppercase() as char;
        let letter = letter as char;
        let source = format!("{letter}=5 o={upper}");
        let (result, _, registers) = run(&source, b"");
        assert!(result.is_ok(), "{source}");
        let index = (letter as u8 - b'a') as usize;
        assert_eq!(registers.get(index), 5);
        assert_eq!(registers.get(14), 5, "{source}");
    }
}

#[test]
fn test_uppercase_target_aliases_lowercase() {
    let (result, output, registers) = run("A=7a>", b"");
    assert!(result.is_ok());
    assert_eq!(output, vec![7]);
    assert_eq!(registers.get(0), 7);
}

#[test]
fn test_uppercase_indirect_mode() {
    let config = MachineConfig::default().with_uppercase(UppercaseMode::Indirect);
    // a=2 → A designa c
    let (result, _, registers, _) = run_with("a=2c=8b=AA+=1", b"", config.clone());
    assert!(result.is_ok());
    assert_eq!(registers.get(1), 8);
    assert_eq!(registers.get(2), 9);

    // a=9*3=27 → fora do banco
    let (result, _, _, _) = run_with("a=9a*=3b=A", b"", config);
    assert!(matches!(result, Err(ExecError::InvalidReference { symbol: 'A', offset: 9 })));
}

#[test]
fn test_digit_address_is_invalid_reference() {
    let (result, _, _) = run("1=5", b"");
    assert!(matches!(result, Err(ExecError::InvalidReference { symbol: '1', offset: 0 })));
}

#[test]
fn test_invalid_operand_reference() {
    let (result, _, _) = run("a=!", b"");
    assert!(matches!(result, Err(ExecError::InvalidReference { symbol: '!', offset: 2 })));
}

#[test]
fn test_premature_end_of_program() {
    for source in ["a=", "a", "a+", "a?", "a?1", "a?1<", "a@=", "a=1:"] {
        let (result, _, _) = run(source, b"");
        assert!(
            matches!(result, Err(ExecError::PrematureEndOfProgram { .. })),
            "{source}: {result:?}"
        );
    }
}

#[test]
fn test_undefined_label() {
    let (result, _, _) = run("a@=q", b"");
    assert!(matches!(result, Err(ExecError::UndefinedLabel { label: 'q', offset: 3 })));
}

#[test]
fn test_label_inside_comment_resolves() {
    let (result, _, registers) = run("(:q)a@=q", b"");
    assert!(result.is_ok());
    assert_eq!(registers.get(0), 1);
}

#[test]
fn test_unimplemented_instruction() {
    let (result, _, _) = run("a=1 #", b"");
    assert!(matches!(result, Err(ExecError::UnimplementedInstruction { symbol: '#', offset: 4 })));
}

#[test]
fn test_unimplemented_operator() {
    let (result, _, _) = run("a!", b"");
    assert!(matches!(result, Err(ExecError::UnimplementedOperator { symbol: '!', offset: 1 })));
    let (result, _, _) = run("a+>", b"");
    assert!(result.is_ok());
    let (result, _, _) = run("a++", b"");
    assert!(matches!(result, Err(ExecError::UnimplementedOperator { symbol: '+', offset: 2 })));
}

#[test]
fn test_unimplemented_relop() {
    let (result, _, _) = run("a?1!2", b"");
    assert!(matches!(result, Err(ExecError::UnimplementedRelop { symbol: '!', offset: 3 })));
}

#[test]
fn test_division_by_zero_is_fatal() {
    let (result, _, _) = run("a=5a/=0", b"");
    assert!(matches!(result, Err(ExecError::DivisionByZero { offset: 3 })));
}

#[test]
fn test_output_round_trip_low_byte() {
    // r = 300 → byte 44; lido de volta em s
    let (result, output, _) = run("r=6r*=5r*=5r*=2r>", b"");
    assert!(result.is_ok());
    assert_eq!(output, vec![(300 % 256) as u8]);

    let (result, _, registers) = run("s<", &output);
    assert!(result.is_ok());
    assert_eq!(registers.get(18), 44);
}

#[test]
fn test_echo_until_eof() {
    // copia a entrada para a saída até o sentinela -1
    let source = "
        (echo)
        l@=r e@=e z=0 z-=1
        :r c<
        e?c=z
        c>
        l?0=0
        :e
    ";
    let (result, output, _, cues) = run_with(source, b"hi!", MachineConfig::default());
    let stats = result.unwrap();
    assert_eq!(output, b"hi!".to_vec());
    assert_eq!(stats.bytes_in, 3);
    assert_eq!(stats.bytes_out, 3);
    // duas condicionais por byte lido e uma no EOF
    assert_eq!(cues.len(), 7);
}

#[test]
fn test_conditional_cue_uses_current_registers() {
    let (result, _, _, cues) = run_with("a=3b=4a?0>1", b"", MachineConfig::default());
    assert!(result.is_ok());
    assert_eq!(cues[0], emotion::select(&{
        let mut bank = RegisterBank::new();
        bank.set(0, 3);
        bank.set(1, 4);
        bank
    }));
    assert_eq!(cues[0].to_string(), "mild wistfulness");
}

#[test]
fn test_nul_terminates_program() {
    let program = Program::new(b"a=1a>\0a=2a>".to_vec());
    let mut interpreter = Interpreter::new(&program, &b""[..], Vec::new(), SilentEmoter);
    interpreter.run().unwrap();
    assert_eq!(interpreter.into_output(), vec![1]);
}

#[test]
fn test_failing_emoter_aborts_branch() {
    struct Absent;
    impl Emoter for Absent {
        fn present(&mut self, _cue: &EmotionCue) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no one is there"))
        }
    }

    let program = Program::from("a=1a?1=1");
    let mut interpreter = Interpreter::new(&program, &b""[..], Vec::new(), Absent);
    let err = interpreter.run().unwrap_err();
    assert!(matches!(err, ExecError::Emoter(_)));
}
