use cambridge_pseudo::formatter::{format, is_formatted};

fn indents(text: &str) -> Vec<usize> {
    text.split('\n')
        .map(|line| line.len() - line.trim_start().len())
        .collect()
}

#[test]
fn test_keywords_uppercased_identifiers_kept() {
    assert_eq!(format("declare x : integer"), "DECLARE x : INTEGER");
    assert_eq!(format("output studentName"), "OUTPUT studentName");
}

#[test]
fn test_nested_if() {
    let formatted = format("IF A>0 THEN\nIF B>0 THEN\nOUTPUT \"x\"\nENDIF\nENDIF");
    assert_eq!(indents(&formatted), vec![0, 3, 6, 3, 0]);
}

#[test]
fn test_if_else() {
    let source = "if x > 0 then\noutput \"pos\"\nelse\noutput \"neg\"\nendif";
    assert_eq!(
        format(source),
        "IF x > 0 THEN\n   OUTPUT \"pos\"\nELSE\n   OUTPUT \"neg\"\nENDIF"
    );
}

#[test]
fn test_loops() {
    let source = "for i ← 1 to 3\noutput i\nnext i\nwhile x < 3 do\nx ← x + 1\nendwhile\nrepeat\nx ← x - 1\nuntil x = 0";
    let formatted = format(source);
    assert_eq!(indents(&formatted), vec![0, 3, 0, 0, 3, 0, 0, 3, 0]);
    assert!(formatted.starts_with("FOR i ← 1 TO 3\n"));
}

#[test]
fn test_case_with_otherwise() {
    let source = "CASE OF Grade\n'A' : OUTPUT \"top\"\nOTHERWISE OUTPUT \"other\"\nENDCASE";
    assert_eq!(indents(&format(source)), vec![0, 3, 3, 0]);
}

#[test]
fn test_procedure_block() {
    let source = "procedure greet(name : string)\noutput \"Hi \" + name\nendprocedure\ncall greet(\"Ada\")";
    assert_eq!(
        format(source),
        "PROCEDURE greet(name : STRING)\n   OUTPUT \"Hi \" + name\nENDPROCEDURE\nCALL greet(\"Ada\")"
    );
}

#[test]
fn test_quoted_text_untouched() {
    assert_eq!(
        format("output \"if then else\" + 'do'"),
        "OUTPUT \"if then else\" + 'do'"
    );
}

#[test]
fn test_comments_are_indented_not_rewritten() {
    assert_eq!(
        format("IF X THEN\n// output here\nENDIF"),
        "IF X THEN\n   // output here\nENDIF"
    );
}

#[test]
fn test_stray_closers_floor_at_zero() {
    assert_eq!(format("ENDIF\nENDWHILE\nOUTPUT 1"), "ENDIF\nENDWHILE\nOUTPUT 1");
}

#[test]
fn test_blank_lines_and_line_count() {
    let source = "IF X THEN\n\n  OUTPUT 1   \n\nENDIF\n";
    let formatted = format(source);
    assert_eq!(formatted, "IF X THEN\n\n   OUTPUT 1\n\nENDIF\n");
    assert_eq!(formatted.split('\n').count(), source.split('\n').count());
}

#[test]
fn test_empty_input() {
    assert_eq!(format(""), "");
    assert_eq!(format(" \n\t\n"), "");
    assert!(is_formatted(""));
}

#[test]
fn test_is_formatted() {
    assert!(!is_formatted("if x then\noutput x\nendif"));
    assert!(is_formatted(&format("if x then\noutput x\nendif")));
}

#[test]
fn test_formatted_indentation_is_never_warned() {
    use cambridge_pseudo::validator::{validate, DiagnosticCode};

    let source = "while x < 3 do\nif x > 1 then\nfor i ← 1 to 2\noutput i\nnext i\nendif\nendwhile";
    let formatted = format(source);
    assert_eq!(indents(&formatted), vec![0, 3, 6, 9, 6, 3, 0]);
    assert!(validate(&formatted)
        .warnings
        .iter()
        .all(|d| d.code != DiagnosticCode::Indentation));
}
