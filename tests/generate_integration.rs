//! Integration tests for template generation

use std::path::Path;

use pretty_assertions::assert_eq;

use tokengen::{
    generate, generate_with_config, Color, Config, ProjectAssets, RawColor, TemplateError,
    TextStyle,
};

fn assets() -> ProjectAssets {
    ProjectAssets::new(
        vec![
            Color::new("Primary Blue", 51, 91, 210, 1.0),
            Color::new("Clear Red", 255, 0, 0, 0.8),
        ],
        vec![
            TextStyle::new("Body", "Helvetica", 17.0, RawColor::new(51, 91, 210, 1.0))
                .with_letter_spacing(0.5),
            TextStyle::new("Caption", "Helvetica", 12.0, RawColor::new(255, 0, 0, 0.79999995)),
            TextStyle::new("Orphan", "Helvetica", 10.0, RawColor::new(1, 1, 1, 1.0)),
        ],
    )
}

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_fixture_generates_swift_palette() {
    let assets = ProjectAssets::from_file(&fixture("project.json")).expect("Should load project");
    let template =
        std::fs::read_to_string(fixture("Palette.swift.template")).expect("Should read template");

    let output = generate(&template, &assets).expect("Should generate");

    insta::assert_snapshot!(output.trim_end(), @r##"
    import UIKit

    extension UIColor {
        static let primaryBlue = UIColor(hex: "#ff335bd2")
        static let clearRed = UIColor(hex: "#ccff0000")
    }

    extension TextStyle {
        static let largeTitle = TextStyle(font: "Avenir-Heavy", size: 34, lineHeight: 41, color: .primaryBlue)
        static let caption = TextStyle(font: "Avenir-Book", size: 12, color: .clearRed)
        static let footnote = TextStyle(font: "Avenir-Book", size: 10)
    }
    "##);
}

#[test]
fn test_trailing_newline_preserved() {
    let output = generate("line\n", &assets()).unwrap();
    assert_eq!(output, "line\n");
}

#[test]
fn test_nested_loops() {
    let template = "\
{{% FOR color %}}
{{% color.identity %}}:
{{% FOR textStyle %}}
  {{% textStyle.identity %}}
{{% ENDFOR %}}
{{% ENDFOR %}}
done";
    let output = generate(template, &assets()).unwrap();
    assert_eq!(
        output,
        "\
Primary Blue:
  Body
  Caption
  Orphan
Clear Red:
  Body
  Caption
  Orphan
done"
    );
}

#[test]
fn test_nested_conditionals() {
    let template = "\
{{% FOR textStyle %}}
{{% IF textStyle.color.identity %}}
{{% IF textStyle.letterSpacing %}}
{{% textStyle.identity %}} spaced
{{% ENDIF %}}
{{% textStyle.identity %}} colored
{{% ENDIF %}}
{{% ENDFOR %}}";
    let output = generate(template, &assets()).unwrap();
    assert_eq!(output, "Body spaced\nBody colored\nCaption colored");
}

#[test]
fn test_inline_conditional_true_and_false() {
    let template = "\
{{% FOR textStyle %}}
let {{% textStyle.identity|lowercase %}}{{% IF textStyle.letterSpacing %}} = {{% textStyle.letterSpacing %}}{{% ENDIF %}};
{{% ENDFOR %}}";
    let output = generate(template, &assets()).unwrap();
    assert_eq!(output, "let body = 0.5;\nlet caption;\nlet orphan;");
}

#[test]
fn test_inline_conditional_keeps_only_non_blank_lines() {
    let template = "\
{{% FOR textStyle %}}
   {{% IF textStyle.letterSpacing %}}spacing{{% ENDIF %}}\t
{{% ENDFOR %}}";
    let output = generate(template, &assets()).unwrap();
    assert_eq!(output, "   spacing\t");
}

#[test]
fn test_inline_conditional_all_blank_lines_emit_nothing() {
    let template = "\
{{% FOR textStyle %}}
   {{% IF textStyle.fontWeight %}}bold{{% ENDIF %}}\t
{{% ENDFOR %}}";
    let output = generate(template, &assets()).unwrap();
    assert_eq!(output, "");
}

#[test]
fn test_inline_loop_keeps_only_middle_fragment() {
    let assets = ProjectAssets::new(
        vec![
            Color::new("A", 1, 1, 1, 1.0),
            Color::new("B", 2, 2, 2, 1.0),
        ],
        vec![],
    );
    let template = "pre{{% FOR color %}}[{{% color.identity %}}]{{% ENDFOR %}}post";
    assert_eq!(generate(template, &assets).unwrap(), "[A]\n[B]");
}

#[test]
fn test_many_inline_conditionals_on_one_line() {
    let template = format!(
        "{{{{% FOR color %}}}}\n{}\n{{{{% ENDFOR %}}}}",
        "{{% IF color.identity %}}x{{% ENDIF %}},".repeat(70)
    );
    let output = generate(&template, &assets()).unwrap();
    let expected = "x,".repeat(70);
    assert_eq!(output, format!("{expected}\n{expected}"));
}

#[test]
fn test_condition_on_empty_value_is_true() {
    let assets = ProjectAssets::new(vec![Color::new("", 0, 0, 0, 1.0)], vec![]);
    let template = "{{% FOR color %}}\n{{% IF color.identity %}}\nnamed\n{{% ENDIF %}}\n{{% ENDFOR %}}";
    assert_eq!(generate(template, &assets).unwrap(), "named");
}

#[test]
fn test_transformation_pipeline() {
    let template = "{{% FOR color %}}\n{{% color.identity|snakecase|uppercase %}} {{% color.identity | kebabcase %}}\n{{% ENDFOR %}}";
    let output = generate(template, &assets()).unwrap();
    assert_eq!(output, "PRIMARY_BLUE primary-blue\nCLEAR_RED clear-red");
}

#[test]
fn test_unknown_transformation_fails() {
    let template = "{{% FOR color %}}\n{{% color.identity|bogus %}}\n{{% ENDFOR %}}";
    let err = generate(template, &assets()).unwrap_err();
    assert_eq!(
        err.kind,
        TemplateError::UnknownTransformation {
            name: "bogus".to_string()
        }
    );
}

#[test]
fn test_missing_color_for_text_style() {
    let template = "{{% FOR textStyle %}}\n{{% textStyle.color.identity %}}\n{{% ENDFOR %}}";
    let err = generate(template, &assets()).unwrap_err();
    assert_eq!(
        err.kind,
        TemplateError::MissingColorForTextStyle {
            text_style: "Orphan".to_string()
        }
    );
    assert_eq!(err.line, Some(2));
}

#[test]
fn test_open_block_fails() {
    let template = "{{% FOR color %}}\n{{% IF color.identity %}}\nx\n{{% ENDFOR %}}";
    let err = generate(template, &assets()).unwrap_err();
    assert_eq!(
        err.kind,
        TemplateError::OpenBlock {
            keyword: "IF".to_string(),
            identifier: "color.identity".to_string()
        }
    );
}

#[test]
fn test_unknown_token_fails() {
    let template = "{{% FOR color %}}\n{{% color.hsl %}}\n{{% ENDFOR %}}";
    let err = generate(template, &assets()).unwrap_err();
    assert_eq!(err.kind, TemplateError::unknown_token("color.hsl"));
}

#[test]
fn test_conditional_without_context_fails() {
    let err = generate("{{% IF color.identity %}}\nx\n{{% ENDIF %}}", &assets()).unwrap_err();
    assert_eq!(err.kind, TemplateError::unknown_token("color.identity"));
}

#[test]
fn test_reserved_identity_fails_before_parsing() {
    // The template never mentions colors and is itself broken
    let config = Config::new().with_reserved_colors(["clearRed"]);
    let err = generate_with_config("{{% FOR nothing %}}", &assets(), &config).unwrap_err();
    assert_eq!(
        err.kind,
        TemplateError::ProhibitedIdentities {
            identities: "clearRed".to_string()
        }
    );
}

#[test]
fn test_config_file_drives_guard() {
    let config = Config::from_str(
        r#"
reserved_colors = ["primary_blue"]
reserved_text_styles = ["Caption", "unused"]
"#,
    )
    .unwrap();
    let err = generate_with_config("text", &assets(), &config).unwrap_err();
    assert_eq!(
        err.kind,
        TemplateError::ProhibitedIdentities {
            identities: "Caption, primary_blue".to_string()
        }
    );
}

#[test]
fn test_error_report_renders_line() {
    let template = "header\n{{% FOR color %}}\n{{% color.nope %}}\n{{% ENDFOR %}}";
    let err = generate(template, &assets()).unwrap_err();
    assert_eq!(err.line, Some(3));
    let report = err.format(template, "palette.template");
    assert!(report.contains("unknown token 'color.nope'"));
}

#[test]
fn test_parallel_generation_shares_assets() {
    let assets = &assets();
    let config = &Config::default();
    let template = "{{% FOR color %}}\n{{% color.rgb %}}\n{{% ENDFOR %}}";

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || generate_with_config(template, assets, config).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for output in outputs {
        assert_eq!(output, "#335bd2\n#ff0000");
    }
}
