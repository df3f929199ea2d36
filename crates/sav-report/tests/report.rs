use sav_header::{HeaderReader, MemoryProvider, collect_dictionary};
use sav_model::{Category, CategoryValue, Scalar, SubValue, VarValue};
use sav_report::{LINE_SEP, render_dictionary, render_header_report};

/// A small demographic survey dictionary touching every value shape.
fn demo_provider() -> MemoryProvider {
    MemoryProvider::complete()
        .with(
            Category::VarNames,
            CategoryValue::List(vec![
                "age".to_string(),
                "income".to_string(),
                "sex".to_string(),
            ]),
        )
        .with(
            Category::VarTypes,
            CategoryValue::var_map([("age", 0i64), ("income", 0i64), ("sex", 1i64)]),
        )
        .with(
            Category::VarLabels,
            CategoryValue::var_map([
                ("age", "Age in years"),
                ("income", "Household income"),
                ("sex", ""),
            ]),
        )
        .with(
            Category::Formats,
            CategoryValue::var_map([("age", "F3"), ("income", "F8.2"), ("sex", "A1")]),
        )
        .with(
            Category::Alignments,
            CategoryValue::var_map([("age", "right"), ("income", "right"), ("sex", "left")]),
        )
        .with(
            Category::ColumnWidths,
            CategoryValue::var_map([("age", 8i64), ("income", 10i64), ("sex", 8i64)]),
        )
        .with(
            Category::MeasureLevels,
            CategoryValue::var_map([("age", "ratio"), ("income", "ratio"), ("sex", "nominal")]),
        )
        .with(
            Category::VarRoles,
            CategoryValue::var_map([("age", "input"), ("income", "target"), ("sex", "input")]),
        )
        .with(
            Category::FileAttributes,
            CategoryValue::var_map([("VersionNumber", "1")]),
        )
        .with(
            Category::FileLabel,
            CategoryValue::Scalar("Demo file".to_string()),
        )
        .with(
            Category::ValueLabels,
            CategoryValue::nested_map([("sex", [("1", "male"), ("2", "female")])]),
        )
        .with(
            Category::VarAttributes,
            CategoryValue::nested_map([("age", [("DerivedFrom", "birthdate")])]),
        )
        .with(
            Category::MissingValues,
            CategoryValue::NestedMap(
                [
                    (
                        "age".to_string(),
                        [(
                            "values".to_string(),
                            SubValue::List(vec![
                                Scalar::Number(997.0),
                                Scalar::Number(998.0),
                                Scalar::Number(999.0),
                            ]),
                        )]
                        .into(),
                    ),
                    (
                        "income".to_string(),
                        [
                            ("lower".to_string(), SubValue::Scalar(Scalar::Number(-9.0))),
                            ("upper".to_string(), SubValue::Scalar(Scalar::Number(-1.0))),
                        ]
                        .into(),
                    ),
                ]
                .into(),
            ),
        )
        .with(
            Category::MultRespDefs,
            CategoryValue::nested_map([(
                "mrfinance",
                [
                    ("label", SubValue::from("Financial sources")),
                    ("setType", SubValue::from("C")),
                    (
                        "varNames",
                        SubValue::List(vec![Scalar::from("income"), Scalar::from("savings")]),
                    ),
                ],
            )]),
        )
        .with(
            Category::VarSets,
            CategoryValue::VarMap(
                [(
                    "demographics".to_string(),
                    VarValue::List(vec!["age".to_string(), "sex".to_string()]),
                )]
                .into(),
            ),
        )
}

#[test]
fn display_dictionary_round_trip() {
    let provider = MemoryProvider::complete()
        .with(
            Category::VarNames,
            CategoryValue::List(vec!["age".to_string(), "sex".to_string()]),
        )
        .with(
            Category::VarLabels,
            CategoryValue::var_map([("age", "Age in years"), ("sex", "")]),
        )
        .with(
            Category::FileLabel,
            CategoryValue::Scalar("Demo file".to_string()),
        );
    let mut reader = HeaderReader::new(provider);
    let report = render_dictionary(reader.dictionary().expect("dictionary"));
    let lines = report.lines();

    let pos = |line: &str| lines.iter().position(|l| l == line).expect(line);
    assert_eq!(pos("#FILELABEL") + 1, pos("Demo file"));
    assert_eq!(pos("#VARLABELS") + 1, pos("age -- Age in years"));
    assert_eq!(pos("#VARNAMES") + 1, pos("age"));
    assert_eq!(pos("age") + 1, pos("sex"));
    // The empty label for sex produces no line.
    assert!(!lines.iter().any(|l| l.starts_with("sex -- ")));
}

#[test]
fn every_category_emits_exactly_one_header_in_sorted_order() {
    let dictionary = collect_dictionary(&demo_provider()).expect("collect");
    let report = render_dictionary(&dictionary);
    let headers: Vec<&str> = report
        .lines()
        .iter()
        .filter(|line| line.starts_with('#'))
        .map(String::as_str)
        .collect();
    let expected: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("#{}", c.name().to_uppercase()))
        .collect();
    assert_eq!(headers, expected);
}

#[test]
fn render_is_byte_identical_across_calls() {
    let dictionary = collect_dictionary(&demo_provider()).expect("collect");
    let first = render_dictionary(&dictionary).to_text();
    let second = render_dictionary(&dictionary).to_text();
    assert_eq!(first, second);
}

#[test]
fn banner_is_prepended_when_present() {
    let provider = demo_provider().with_text_info("File created by fixture 1.0");
    let mut reader = HeaderReader::new(provider);
    let text = render_header_report(&mut reader).expect("report");
    assert!(text.starts_with(&format!("File created by fixture 1.0{LINE_SEP}#ALIGNMENTS")));
}

#[test]
fn absent_or_empty_banner_is_omitted() {
    let mut reader = HeaderReader::new(demo_provider());
    let text = render_header_report(&mut reader).expect("report");
    assert!(text.starts_with("#ALIGNMENTS"));

    let mut reader = HeaderReader::new(demo_provider().with_text_info(""));
    let text = render_header_report(&mut reader).expect("report");
    assert!(text.starts_with("#ALIGNMENTS"));
}

#[test]
fn demo_dictionary_report_snapshot() {
    let dictionary = collect_dictionary(&demo_provider()).expect("collect");
    let report = render_dictionary(&dictionary);
    insta::assert_snapshot!(report.to_text(), @r"
#ALIGNMENTS
age -- right
income -- right
sex -- left
#CASEWEIGHTVAR
#COLUMNWIDTHS
age -- 8
income -- 10
sex -- 8
#FILEATTRIBUTES
VersionNumber -- 1
#FILELABEL
Demo file
#FORMATS
age -- F3
income -- F8.2
sex -- A1
#MEASURELEVELS
age -- ratio
income -- ratio
sex -- nominal
#MISSINGVALUES
age: values -- 997.0, 998.0, 999.0
income: lower -- -9.0
income: upper -- -1.0
#MULTRESPDEFS
mrfinance: label -- Financial sources
mrfinance: setType -- C
mrfinance: varNames -- income, savings
#VALUELABELS
sex: 1 -- male
sex: 2 -- female
#VARATTRIBUTES
age: DerivedFrom -- birthdate
#VARLABELS
age -- Age in years
income -- Household income
#VARNAMES
age
income
sex
#VARROLES
age -- input
income -- target
sex -- input
#VARSETS
demographics -- age, sex
#VARTYPES
age -- 0
income -- 0
sex -- 1
");
}
