use std::env;
use std::fs;
use layout2xml::parser::{parse_layout_config, read_layout_file};
use layout2xml::{compile_layout, ConfigError, Error, LayeringStrategy};

const LOWER: &str = "nmpq ecx? rsb! ouvz hlj@ ifw, tyk. adg'";
const UPPER: &str = "NMPQ ECX* RSB! OUVZ HLJ@ IFW_ TYK- ADG\"";

fn layout_file(strategy: &str, layouts: &[&str]) -> String {
    let mut content = format!("{}\n@\nme@example.com\nME@EXAMPLE.COM\n", strategy);
    for line in layouts {
        content.push_str(line);
        content.push('\n');
    }
    content
}

#[test]
fn test_empty_file() {
    match parse_layout_config("") {
        Err(ConfigError::TooFewLines { found }) => assert_eq!(found, 0),
        other => panic!("Expected TooFewLines, got {:?}", other),
    }
}

#[test]
fn test_header_without_layouts() {
    let input = layout_file("eight_pen", &[]);
    match parse_layout_config(&input) {
        Err(ConfigError::TooFewLines { found }) => assert_eq!(found, 4),
        other => panic!("Expected TooFewLines, got {:?}", other),
    }
}

#[test]
fn test_unknown_strategy() {
    let input = layout_file("eightpen", &[LOWER, UPPER]);
    match parse_layout_config(&input) {
        Err(ConfigError::UnknownStrategy(name)) => assert_eq!(name, "eightpen"),
        other => panic!("Expected UnknownStrategy, got {:?}", other),
    }
}

#[test]
fn test_strategy_line_is_trimmed() {
    let input = layout_file("  prefix_eight_pen \t", &[LOWER, UPPER]);
    let config = parse_layout_config(&input).expect("Failed to parse");
    assert_eq!(config.strategy, LayeringStrategy::PrefixEightPen);
}

#[test]
fn test_short_layout_line() {
    // Spacers missing between groups
    let input = layout_file("eight_pen", &[LOWER, "NMPQECX*RSB!OUVZHLJ@IFW_TYK-ADG\""]);
    match parse_layout_config(&input) {
        Err(ConfigError::LayoutLength { line, found, expected }) => {
            assert_eq!(line, 6);
            assert_eq!(found, 32);
            assert_eq!(expected, 39);
        }
        other => panic!("Expected LayoutLength, got {:?}", other),
    }
}

#[test]
fn test_misplaced_spacer() {
    let lower = "nmpq ecx?_rsb! ouvz hlj@ ifw, tyk. adg'";
    let input = layout_file("eight_pen", &[lower, UPPER]);
    match parse_layout_config(&input) {
        Err(ConfigError::MisplacedSpacer { line, column, found }) => {
            assert_eq!(line, 5);
            assert_eq!(column, 10);
            assert_eq!(found, '_');
        }
        other => panic!("Expected MisplacedSpacer, got {:?}", other),
    }
}

#[test]
fn test_odd_number_of_layout_lines() {
    let input = layout_file("eight_pen", &[LOWER, UPPER, LOWER]);
    match parse_layout_config(&input) {
        Err(ConfigError::UnpairedLayout { line }) => assert_eq!(line, 7),
        other => panic!("Expected UnpairedLayout, got {:?}", other),
    }
}

#[test]
fn test_trailing_spacer_accepted() {
    let lower = format!("{} ", LOWER);
    let input = layout_file("eight_pen", &[&lower, UPPER]);
    let config = parse_layout_config(&input).expect("Failed to parse");
    assert_eq!(config.layers[0].lower.slot(31), Some('\''));
}

#[test]
fn test_error_surfaces_through_compile() {
    let input = layout_file("spiral", &[LOWER, UPPER]);
    match compile_layout(&input) {
        Err(Error::Config(ConfigError::UnknownStrategy(name))) => assert_eq!(name, "spiral"),
        other => panic!("Expected UnknownStrategy, got {:?}", other),
    }
}

#[test]
fn test_error_messages() {
    let input = layout_file("eight_pen", &[LOWER]);
    let err = parse_layout_config(&input).unwrap_err();
    assert_eq!(err.to_string(), "Layout at line 5 has no upper case line to pair with");

    let err = parse_layout_config("spiral").unwrap_err();
    assert!(err.to_string().contains("expected at least 5"));
}

#[test]
fn test_file_with_bom() {
    let dir = env::temp_dir().join("layout2xml_parser_test");
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join("bom.layout");

    let content = format!("\u{FEFF}{}", layout_file("single_direction_change", &[LOWER, UPPER]));
    fs::write(&path, content).expect("Failed to write layout");

    let config = read_layout_file(&path).expect("BOM should be ignored");
    assert_eq!(config.strategy, LayeringStrategy::SingleDirectionChange);
    assert_eq!(config.layers.len(), 1);

    let _ = fs::remove_file(&path);
}
