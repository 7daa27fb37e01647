use std::sync::Arc;
use std::thread;

use command_signature_core::{
    DefaultValue, Multiplicity, ParameterDefinition, ParameterKind, Presence, SignatureResult,
};
use command_signature_parser::{
    Declaration, RegexMatcher, ScanMatcher, SignatureMatcher, SignatureParser, parse_signature,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parsers() -> Vec<SignatureParser> {
    vec![
        SignatureParser::with_matcher(ScanMatcher),
        SignatureParser::with_matcher(RegexMatcher::new().expect("patterns compile")),
    ]
}

fn only_argument(signature: &str) -> ParameterDefinition {
    let result = parse_signature(signature).unwrap();
    assert!(result.options.is_empty(), "unexpected options in {signature:?}");
    assert_eq!(result.arguments.len(), 1, "expected one argument in {signature:?}");
    result.arguments.into_iter().next().unwrap()
}

fn only_option(signature: &str) -> ParameterDefinition {
    let result = parse_signature(signature).unwrap();
    assert!(result.arguments.is_empty(), "unexpected arguments in {signature:?}");
    assert_eq!(result.options.len(), 1, "expected one option in {signature:?}");
    result.options.into_iter().next().unwrap()
}

// ---------------------------------------------------------------------------
// Single blocks
// ---------------------------------------------------------------------------

#[test]
fn test_plain_argument() {
    let foo = only_argument("cmd {foo}");

    assert_eq!(foo, ParameterDefinition::argument("foo"));
    assert_eq!(foo.presence, Presence::Required);
    assert_eq!(foo.multiplicity, Multiplicity::Single);
    assert!(foo.default.is_none());
    assert!(foo.description.is_none());
}

#[test]
fn test_argument_with_default() {
    let foo = only_argument("cmd {foo=bar}");

    assert_eq!(foo.name, "foo");
    assert_eq!(foo.presence, Presence::Optional);
    assert_eq!(foo.multiplicity, Multiplicity::Single);
    assert_eq!(foo.default, Some(DefaultValue::Single("bar".into())));
}

#[test]
fn test_required_option() {
    let flag = only_option("cmd {--flag}");

    assert_eq!(flag.name, "flag");
    assert_eq!(flag.kind, ParameterKind::Option);
    assert_eq!(flag.presence, Presence::Required);
    assert_eq!(flag.multiplicity, Multiplicity::Single);
}

#[test]
fn test_list_argument_with_defaults() {
    let items = only_argument("cmd {items[]=a,b,c}");

    assert_eq!(items.name, "items");
    assert_eq!(items.presence, Presence::Optional);
    assert_eq!(items.multiplicity, Multiplicity::List);
    assert_eq!(
        items.default,
        Some(DefaultValue::List(vec!["a".into(), "b".into(), "c".into()]))
    );
}

#[test]
fn test_required_list_option() {
    let tags = only_option("cmd {--tags[]}");

    assert_eq!(tags.multiplicity, Multiplicity::List);
    assert_eq!(tags.presence, Presence::Required);
    assert!(tags.default.is_none());
}

#[test]
fn test_single_default_keeps_separator() {
    let csv = only_argument("cmd {csv=a,b}");

    assert_eq!(csv.default, Some(DefaultValue::Single("a,b".into())));
}

#[test]
fn test_description() {
    let name = only_argument("cmd {name:Description text}");

    assert_eq!(name.name, "name");
    assert_eq!(name.description.as_deref(), Some("Description text"));
}

#[test]
fn test_multiple_colons_drop_description() {
    let name = only_argument("cmd {name:a:b:c}");

    assert_eq!(name.name, "name");
    assert!(name.description.is_none());
}

#[test]
fn test_empty_description_is_absent() {
    let name = only_argument("cmd {name:}");

    assert!(name.description.is_none());
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_blocks_are_skipped() {
    for signature in [
        "cmd {}",
        "cmd {--}",
        "cmd {:only description}",
        "cmd {9lives}",
        "cmd {na me}",
        "cmd {foo[}",
        "cmd {foo[]x}",
        "cmd {-x}",
    ] {
        let result = parse_signature(signature).unwrap();
        assert_eq!(result.name, "cmd");
        assert!(result.is_empty(), "{signature:?} should yield no parameters");
    }
}

#[test]
fn test_malformed_block_does_not_disturb_neighbours() {
    let result = parse_signature("cmd {a} {} {--b} {!!} {c}").unwrap();

    let arguments: Vec<&str> = result.arguments.iter().map(|a| a.name.as_str()).collect();
    let options: Vec<&str> = result.options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(arguments, vec!["a", "c"]);
    assert_eq!(options, vec!["b"]);
}

#[test]
fn test_empty_input() {
    let result = parse_signature("").unwrap();

    assert_eq!(result, SignatureResult::new(""));
}

#[test]
fn test_unbalanced_braces() {
    let result = parse_signature("cmd {name {--flag} }").unwrap();

    // The first `}` closes the block opened by the first `{`.
    assert!(result.is_empty());

    let result = parse_signature("cmd name} {--flag").unwrap();
    assert!(result.is_empty());
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn test_greet_signature() {
    let result = parse_signature("greet {name} {--yell=} {--times=1 : Repeat count}").unwrap();

    assert_eq!(result.name, "greet");
    assert_eq!(result.arguments, vec![ParameterDefinition::argument("name")]);
    assert_eq!(
        result.options,
        vec![
            ParameterDefinition::option("yell").optional(),
            ParameterDefinition::option("times")
                .optional()
                .with_default(DefaultValue::Single("1".into()))
                .with_description("Repeat count"),
        ]
    );
}

#[test]
fn test_signature_without_blocks() {
    let result = parse_signature("noop").unwrap();

    assert_eq!(result.name, "noop");
    assert!(result.arguments.is_empty());
    assert!(result.options.is_empty());
}

#[test]
fn test_blocks_with_spaces_survive_name_split() {
    let result = parse_signature("mail:send {user : The user to notify} {--queue= : Queue name}")
        .unwrap();

    assert_eq!(result.name, "mail:send");
    assert_eq!(
        result.find_argument("user").unwrap().description.as_deref(),
        Some("The user to notify")
    );
    assert_eq!(
        result.find_option("queue").unwrap().description.as_deref(),
        Some("Queue name")
    );
}

#[test]
fn test_order_within_each_kind() {
    let result = parse_signature("cmd {--z} {a} {--y} {b} {--x} {c}").unwrap();

    let arguments: Vec<&str> = result.arguments.iter().map(|a| a.name.as_str()).collect();
    let options: Vec<&str> = result.options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(arguments, vec!["a", "b", "c"]);
    assert_eq!(options, vec!["z", "y", "x"]);
}

#[test]
fn test_parse_is_deterministic() {
    let signature = "deploy {env} {targets[]=web,worker} {--force} {--tag= : Release tag}";

    for parser in parsers() {
        let first = parser.parse(signature).unwrap();
        let second = parser.parse(signature).unwrap();
        assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Matcher agreement
// ---------------------------------------------------------------------------

const AGREEMENT_CASES: &[&str] = &[
    "",
    "noop",
    "greet {name} {--yell=} {--times=1 : Repeat count}",
    "cmd {items[]=a,b,c} {--tags[]=} {--x[]=,}",
    "cmd {} {--} {:desc} {a:b:c} {9x} {x y} {x[} {x[]y}",
    "cmd {a{b} c} {d\ne} {f}",
    "cmd {--url=http://example.com} {q==x}",
    "cmd { padded } {\t--tab=1\t}",
    "grüß {é} {name:Grüße}",
    "cmd {dry-run} {user_id=7} {--Level=INFO}",
];

#[test]
fn test_matchers_agree_on_results() {
    let [scan, regex]: [SignatureParser; 2] = parsers().try_into().unwrap();

    for signature in AGREEMENT_CASES {
        assert_eq!(
            scan.parse(signature).unwrap(),
            regex.parse(signature).unwrap(),
            "matchers disagree on {signature:?}"
        );
    }
}

#[test]
fn test_matchers_agree_on_declarations() {
    let regex = RegexMatcher::new().unwrap();

    for text in [
        "", "--", "a", "--a", "a[]", "a=", "a[]=x,y", "--a[]=", "a b", "a[", "a=b=c", "_a", "a-",
    ] {
        let expected: Option<Declaration<'_>> = ScanMatcher.declaration(text).unwrap();
        assert_eq!(
            regex.declaration(text).unwrap(),
            expected,
            "declaration {text:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn test_shared_parser_across_threads() {
    let parser = Arc::new(SignatureParser::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                let signature = format!("job{i} {{input}} {{--retries={i}}}");
                parser.parse(&signature).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.name, format!("job{i}"));
        assert_eq!(
            result.find_option("retries").unwrap().default,
            Some(DefaultValue::Single(i.to_string()))
        );
    }
}
