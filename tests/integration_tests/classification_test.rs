// tests/integration_tests/classification_test.rs
use super::common::test_config;
use codepack::{Category, Classifier, DataRule, ProjectConfig};
use std::path::Path;

fn classifier(config: &ProjectConfig) -> Classifier {
    let mut warnings = Vec::new();
    let classifier = Classifier::new(config, &mut warnings);
    assert!(warnings.is_empty());
    classifier
}

#[test]
fn test_data_rules_take_priority() {
    let classifier = classifier(&test_config(Path::new("/project")));

    assert_eq!(classifier.classify("data/schema.dart"), Category::Data);
    assert_eq!(classifier.classify("lib/data.dart"), Category::Code);
    assert_eq!(classifier.classify("assets/data/list.txt"), Category::Data);
    assert_eq!(classifier.classify("config.JSON"), Category::Data);
}

#[test]
fn test_code_extension_rules() {
    let classifier = classifier(&test_config(Path::new("/project")));

    assert_eq!(classifier.classify("src/MAIN.CODE"), Category::Code);
    assert_eq!(classifier.classify(".code"), Category::Locals);
    assert_eq!(classifier.classify("Makefile"), Category::Locals);
    assert_eq!(classifier.classify("archive.code.bak"), Category::Locals);
}

#[test]
fn test_generated_dart_files_are_data() {
    let config = ProjectConfig {
        code_extensions: vec![String::from("dart")],
        data_rules: vec![
            DataRule::Extension(String::from("data.dart")),
            DataRule::PathContains(String::from("/fixtures/")),
            DataRule::Pattern(String::from("*.arb")),
        ],
        ..ProjectConfig::new("/project".into())
    };
    let classifier = classifier(&config);

    assert_eq!(classifier.classify("lib/users.data.dart"), Category::Data);
    assert_eq!(classifier.classify("lib/users.dart"), Category::Code);
    assert_eq!(classifier.classify("test/fixtures/a.dart"), Category::Data);
    assert_eq!(classifier.classify("l10n/app_en.arb"), Category::Data);
}
