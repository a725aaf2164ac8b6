use tc2md::{convert, format, parse, Document, InvalidInput, Method, Step, StepKind};

#[test]
fn package_and_scenario() {
    let output = convert(&[
        "package demoPkg",
        "func TestX(t *testing.T) {",
        "// # Opens the door",
        "}",
    ])
    .unwrap();
    assert_eq!(
        output,
        vec![
            "## `demoPkg`",
            "---",
            "#### `TestX`",
            "### Opens the door",
            "",
            "[top](#demoPkg)",
        ]
    );
}

#[test]
fn tags_without_package() {
    let output = convert(&["func TestY(t *testing.T) {", "// > Alpha, Beta", "}"]).unwrap();
    assert_eq!(
        output,
        vec!["---", "#### `TestY`", "> Alpha, Beta", "", "[top](#top)"]
    );
}

#[test]
fn errors_carry_their_message() {
    let none: Vec<String> = Vec::new();
    let nil = parse(&none).unwrap_err();
    let empty = convert(&[""]).unwrap_err();
    assert_eq!(nil, InvalidInput::Nil);
    assert_eq!(nil.to_string(), "nil input");
    assert_eq!(empty.to_string(), "empty input");
}

#[test]
fn format_of_nothing_is_nothing() {
    assert!(format(None).is_empty());
}

#[test]
fn badly_spaced_markers_never_render() {
    for bad in ["// #header", "//  - point"] {
        let output = convert(&[
            "package p",
            "func TestZ(t *testing.T) {",
            bad,
            "}",
        ])
        .unwrap();
        assert_eq!(
            output,
            vec!["## `p`", "---", "#### `TestZ`", "", "[top](#p)"],
            "{bad:?}"
        );
    }
}

#[test]
fn unicode_spacing_never_renders() {
    let output = convert(&[
        "func TestX(t *testing.T) {",
        "// -\u{a0}nbsp step",
        "//\u{2003}# em-space",
        "}",
    ])
    .unwrap();
    assert_eq!(output, vec!["---", "#### `TestX`", "", "[top](#top)"]);
}

#[test]
fn methods_render_in_declaration_order() {
    let output = convert(&[
        "func TestB(t *testing.T) {",
        "// # second letter",
        "}",
        "func TestA(t *testing.T) {",
        "// # first letter",
        "}",
    ])
    .unwrap();
    let b = output.iter().position(|l| l == "### second letter").unwrap();
    let a = output.iter().position(|l| l == "### first letter").unwrap();
    assert!(b < a);
    assert_eq!(output.iter().filter(|l| *l == "[top](#top)").count(), 2);
}

#[test]
fn parse_once_format_twice() {
    let lines = [
        "package p",
        "func TestOnce(t *testing.T) {",
        "\t// ## GIVEN input",
        "\t// - one",
        "\t// -- two",
        "\t// --- three",
        "}",
    ];
    let doc = parse(&lines).unwrap();
    assert_eq!(format(Some(&doc)), format(Some(&doc)));
    assert_eq!(format(Some(&doc)), convert(&lines).unwrap());
}

#[test]
fn hand_built_document() {
    let doc = Document {
        package_name: "manual".to_string(),
        methods: vec![Method {
            name: "TestManual".to_string(),
            tags: vec!["Tag".to_string(), "Complex Tag".to_string()],
            scenario: String::new(),
            steps: vec![
                Step::new(StepKind::Indented, "two spaces"),
                Step::new(StepKind::Indented2, "four spaces"),
            ],
        }],
        ..Default::default()
    };
    assert_eq!(
        format(Some(&doc)),
        vec![
            "## `manual`",
            "---",
            "#### `TestManual`",
            "> Tag, Complex Tag",
            "  - two spaces",
            "    - four spaces",
            "",
            "[top](#manual)",
        ]
    );
}
