mod common;
use common::*;

#[test]
fn reserved_word_as_declared_name() {
    let report = validate("VAR\nIF : BOOL;\nEND_VAR");
    assert_well_formed(&report);
    assert!(!report.is_valid);
    assert_eq!(codes(&report.errors), vec![DiagnosticCode::ReservedIdentifier]);
    let error = &report.errors[0];
    assert_eq!(error.category, Category::Syntax);
    assert_eq!(error.severity, Severity::Critical);
    assert!(error.message.contains("reserved word"));
    assert_eq!(error.line, Some(2));
    assert_eq!(error.column, Some(1));
}

#[test]
fn unmatched_parenthesis() {
    let report = validate("x := (a + b;");
    assert!(!report.is_valid);
    assert_eq!(codes(&report.errors), vec![DiagnosticCode::UnmatchedParentheses]);
    assert_eq!(report.errors[0].message, "Unmatched parentheses in code");
    assert_eq!(report.errors[0].line, None);
    insta::assert_snapshot!(report.errors[0].to_string(), @"error[E102]: Unmatched parentheses in code");
}

#[test]
fn unmatched_parenthesis_regardless_of_other_content() {
    let report = validate(CONVEYOR.replace("count := count + 1;", "count := (count + 1;").as_str());
    assert_eq!(codes(&report.errors), vec![DiagnosticCode::UnmatchedParentheses]);
}

#[test]
fn multi_line_comment_prose_is_not_code() {
    let source = "PROGRAM Pump
(*
  If the sensor fails, stop the pump
  for safety (see manual)
  WHILE in doubt, CASE closed
*)
VAR
  run : BOOL;
END_VAR
run := TRUE;
END_PROGRAM
";
    let report = validate(source);
    assert_well_formed(&report);
    assert!(report.is_valid);
    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(!codes(&report.suggestions).contains(&DiagnosticCode::MissingComments));
}

#[test]
fn nested_comment_spanning_lines() {
    let source = "(* outer\n(* inner *) still IF (\n*) x := (1;\n";
    let report = validate(source);
    assert_eq!(codes(&report.errors), vec![DiagnosticCode::UnmatchedParentheses]);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[test]
fn comparison_used_as_assignment() {
    let report = validate("VAR\na : BOOL;\nEND_VAR\na = TRUE;");
    assert!(report.is_valid);
    let recommending: Vec<_> = report
        .warnings
        .iter()
        .filter(|diag| diag.code == DiagnosticCode::ComparisonAsAssignment)
        .collect();
    assert_eq!(recommending.len(), 1);
    assert!(recommending[0].message.contains(":="));
    assert_eq!(recommending[0].line, Some(4));
}

#[test]
fn safety_keyword_detection() {
    let report = validate("emergency_stop := TRUE;");
    assert!(report.safety.emergency_stop);
    assert!(report.safety_score >= 20);
    assert!(!report
        .suggestions
        .iter()
        .any(|diag| diag.code == DiagnosticCode::MissingEmergencyStop));
}

#[test]
fn unused_variable() {
    let report = validate("VAR\nunused_var : INT;\nEND_VAR");
    assert!(report.errors.is_empty());
    assert_eq!(codes(&report.warnings), vec![DiagnosticCode::UnusedVariable]);
    let warning = &report.warnings[0];
    assert_eq!(warning.category, Category::Style);
    assert_eq!(warning.severity, Severity::Low);
    assert!(warning.message.contains("declared but never used"));
    assert_eq!(warning.line, None);
}

#[test]
fn score_arithmetic() {
    // Two keyword-pair errors and one missing terminator.
    let report = validate("// c\nemergency := 1;\nIF a\nWHILE b\nx := 1");
    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.syntax_score, 65);
    assert_eq!(report.logic_score, 100);
}

#[test]
fn empty_and_blank_input() {
    for source in ["", "   ", "\n\n\t\n"] {
        let report = validate(source);
        assert_well_formed(&report);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(
            codes(&report.suggestions),
            vec![
                DiagnosticCode::MissingComments,
                DiagnosticCode::MissingEmergencyStop
            ]
        );
        assert_eq!(report.syntax_score, 100);
        assert_eq!(report.logic_score, 100);
        assert_eq!(report.safety_score, 0);
        assert!(report.compliance.naming_convention_followed);
        assert!(!report.compliance.variable_declaration_present);
    }
}

#[test]
fn non_structured_text_input() {
    let report = validate("def main():\n    print('hello')\n");
    assert_well_formed(&report);
    assert!(report.is_valid);
}

#[test]
fn naming_and_type_warnings() {
    let report = validate("VAR\n    _raw : WORD;\n    buffer : ARRAY[0..9] OF INT;\nEND_VAR");
    assert!(report.is_valid);
    assert!(!report.compliance.naming_convention_followed);
    assert!(report.compliance.standard_data_type_used);
    let naming = report
        .warnings
        .iter()
        .find(|diag| diag.code == DiagnosticCode::NamingConvention)
        .expect("naming warning");
    assert_eq!(naming.category, Category::IecCompliance);
    assert_eq!((naming.line, naming.column), (Some(2), Some(5)));
    let non_standard = report
        .warnings
        .iter()
        .find(|diag| diag.code == DiagnosticCode::NonStandardType)
        .expect("type warning");
    assert!(non_standard.message.ends_with("ARRAY"));
    assert_eq!(non_standard.line, Some(3));
}

#[test]
fn block_structure_and_declaration_evidence() {
    let report = validate(CONVEYOR);
    assert!(report.compliance.variable_declaration_present);
    assert!(report.compliance.block_structure_compliant);
    assert!(report.compliance.standard_data_type_used);
    assert!(report.compliance.naming_convention_followed);
}

#[test]
fn large_programs_get_a_decomposition_suggestion() {
    let mut source = String::from("(* big *)\nestop := FALSE;\n");
    for i in 0..120 {
        source.push_str(&format!("x{i} := {i};\n"));
    }
    let report = validate(&source);
    assert_eq!(codes(&report.suggestions), vec![DiagnosticCode::LargeProgram]);

    let relaxed = Validator::new(ValidatorConfig {
        large_program_lines: 500,
        ..ValidatorConfig::default()
    })
    .validate(&source);
    assert!(relaxed.suggestions.is_empty());
}

#[test]
fn disabled_codes_are_suppressed() {
    let validator = Validator::new(ValidatorConfig {
        disabled: vec!["W104".to_string(), "S101".to_string()],
        ..ValidatorConfig::default()
    });
    let report = validator.validate("x := 1");
    assert!(report.warnings.is_empty());
    assert_eq!(
        codes(&report.suggestions),
        vec![DiagnosticCode::MissingEmergencyStop]
    );
}
