//! End-to-end tests for binding flags onto derived configuration structs.

use std::collections::HashMap;

use flagbind::{FieldBinder, Settings, initialize};
use rstest::{fixture, rstest};

#[derive(Debug, Clone, Default, PartialEq, FieldBinder)]
struct AppConfig {
    name: String,
    count: Vec<i32>,
    ports: Vec<u16>,
    level: u8,
    offset: i64,
    weights: Vec<f64>,
    switches: Vec<bool>,
    ratio: f64,
    verbose: bool,
    labels: HashMap<String, String>,
}

#[fixture]
fn config() -> AppConfig {
    AppConfig::default()
}

fn run(config: &mut AppConfig, tokens: &[&str]) {
    let settings = Settings::from_tokens("binding", "--", tokens.iter().copied());
    initialize(config, &settings);
}

#[rstest]
fn integer_list_collects_every_value(mut config: AppConfig) {
    run(&mut config, &["--count", "1", "2", "3"]);
    assert_eq!(config.count, vec![1, 2, 3]);
}

#[rstest]
fn repeated_assignments_accumulate(mut config: AppConfig) {
    run(&mut config, &["--count=1", "--count=2"]);
    assert_eq!(config.count, vec![1, 2]);
}

#[rstest]
fn multiple_text_values_keep_trailing_space(mut config: AppConfig) {
    run(&mut config, &["--name", "Alice", "Smith"]);
    assert_eq!(config.name, "Alice Smith ");
}

#[rstest]
fn single_text_value_is_stored_verbatim(mut config: AppConfig) {
    run(&mut config, &["--name=Alice Smith"]);
    assert_eq!(config.name, "Alice Smith");
}

#[rstest]
fn unknown_flags_change_nothing(mut config: AppConfig) {
    run(&mut config, &["--colour", "red", "--size=9"]);
    assert_eq!(config, AppConfig::default());
}

#[rstest]
fn bad_list_values_are_dropped(mut config: AppConfig) {
    run(&mut config, &["--ports", "80", "notaport", "443"]);
    assert_eq!(config.ports, vec![80, 443]);
}

#[rstest]
fn values_before_the_first_flag_are_ignored(mut config: AppConfig) {
    run(&mut config, &["Bob", "--name", "Alice"]);
    assert_eq!(config.name, "Alice");
}

#[rstest]
fn capitalized_flags_match_lowercase_fields(mut config: AppConfig) {
    run(&mut config, &["--Name", "Alice", "--Level", "4"]);
    assert_eq!(config.name, "Alice");
    assert_eq!(config.level, 4);
}

#[rstest]
fn fully_uppercase_flags_do_not_match(mut config: AppConfig) {
    run(&mut config, &["--NAME", "Alice"]);
    assert_eq!(config.name, "");
}

#[rstest]
#[case::decimal(&["--level", "42"], 42)]
#[case::first_value_only(&["--level", "7", "9"], 7)]
#[case::overflow_keeps_previous(&["--level", "300"], 1)]
#[case::hex_not_accepted(&["--level", "0x10"], 1)]
#[case::garbage_keeps_previous(&["--level", "high"], 1)]
#[case::missing_value_keeps_previous(&["--level"], 1)]
fn integer_scalars_parse_first_value_base_ten(#[case] tokens: &[&str], #[case] expected: u8) {
    let mut config = AppConfig {
        level: 1,
        ..AppConfig::default()
    };
    run(&mut config, tokens);
    assert_eq!(config.level, expected);
}

#[derive(Debug, Clone, PartialEq, FieldBinder)]
struct Widths {
    small: isize,
    big: usize,
    wide: i64,
    huge: u64,
    offsets: Vec<isize>,
    sizes: Vec<usize>,
}

const UNTOUCHED: Widths = Widths {
    small: 7,
    big: 7,
    wide: 7,
    huge: 7,
    offsets: Vec::new(),
    sizes: Vec::new(),
};

fn bind_widths(tokens: &[&str]) -> Widths {
    let mut widths = UNTOUCHED;
    let settings = Settings::from_tokens("binding", "--", tokens.iter().copied());
    initialize(&mut widths, &settings);
    widths
}

#[rstest]
#[case::isize_max(&["--small", "2147483647"], Widths { small: 2_147_483_647, ..UNTOUCHED })]
#[case::isize_min(&["--small", "-2147483648"], Widths { small: -2_147_483_648, ..UNTOUCHED })]
#[case::isize_above_32_bits(&["--small", "3000000000"], UNTOUCHED)]
#[case::isize_below_32_bits(&["--small", "-2147483649"], UNTOUCHED)]
#[case::usize_max(&["--big", "4294967295"], Widths { big: 4_294_967_295, ..UNTOUCHED })]
#[case::usize_above_32_bits(&["--big", "5000000000"], UNTOUCHED)]
#[case::i64_min(&["--wide", "-9223372036854775808"], Widths { wide: i64::MIN, ..UNTOUCHED })]
#[case::i64_above_max(&["--wide", "9223372036854775808"], UNTOUCHED)]
#[case::u64_max(&["--huge", "18446744073709551615"], Widths { huge: u64::MAX, ..UNTOUCHED })]
#[case::u64_above_max(&["--huge", "18446744073709551616"], UNTOUCHED)]
#[case::isize_list(
    &["--offsets", "3000000000", "0x100000000", "-5", "0x7fffffff"],
    Widths { offsets: vec![-5, 2_147_483_647], ..UNTOUCHED }
)]
#[case::usize_list(
    &["--sizes", "5000000000", "0xffffffff", "0x100000000"],
    Widths { sizes: vec![4_294_967_295], ..UNTOUCHED }
)]
fn integer_widths_are_range_checked(#[case] tokens: &[&str], #[case] expected: Widths) {
    assert_eq!(bind_widths(tokens), expected);
}

#[rstest]
fn signed_scalars_accept_negative_values(mut config: AppConfig) {
    run(&mut config, &["--offset=-9000000000"]);
    assert_eq!(config.offset, -9_000_000_000);
}

#[rstest]
fn list_integers_detect_their_base(mut config: AppConfig) {
    run(
        &mut config,
        &["--count", "0x10", "0o17", "0b101", "017", "1_000", "-0x1"],
    );
    assert_eq!(config.count, vec![16, 15, 5, 15, 1000, -1]);
}

#[rstest]
fn float_and_bool_lists_are_coerced(mut config: AppConfig) {
    run(
        &mut config,
        &[
            "--weights", "0.5", "1e3", "heavy", "--switches", "t", "FALSE", "yes", "1",
        ],
    );
    assert_eq!(config.weights, vec![0.5, 1000.0]);
    assert_eq!(config.switches, vec![true, false, true]);
}

#[rstest]
fn lists_append_to_existing_content() {
    let mut config = AppConfig {
        ports: vec![22],
        ..AppConfig::default()
    };
    run(&mut config, &["--ports", "80"]);
    assert_eq!(config.ports, vec![22, 80]);
}

#[rstest]
fn unsupported_fields_stay_untouched() {
    let mut config = AppConfig {
        ratio: 0.25,
        verbose: true,
        ..AppConfig::default()
    };
    run(
        &mut config,
        &["--ratio", "0.75", "--verbose", "false", "--labels", "a=b"],
    );
    assert_eq!(config.ratio.to_bits(), 0.25_f64.to_bits());
    assert!(config.verbose);
    assert!(config.labels.is_empty());
}

#[rstest]
fn binding_is_deterministic() {
    let tokens = [
        "--name", "Alice", "Smith", "--count=1", "--ports", "80", "x", "--count", "2",
    ];
    let mut first = AppConfig::default();
    let mut second = AppConfig::default();
    run(&mut first, &tokens);
    run(&mut second, &tokens);
    assert_eq!(first, second);
}

#[rstest]
fn empty_invocation_leaves_config_alone() {
    let mut config = AppConfig {
        name: "keep".to_owned(),
        ..AppConfig::default()
    };
    run(&mut config, &[]);
    assert_eq!(config.name, "keep");
}

#[rstest]
fn resolve_and_assign_are_usable_directly() -> anyhow::Result<()> {
    let mut config = AppConfig::default();
    let handle = AppConfig::resolve("ports")
        .ok_or_else(|| anyhow::anyhow!("ports should resolve"))?;
    let outcome = config.assign(handle, &["8080".to_owned(), "bad".to_owned()]);
    anyhow::ensure!(outcome.stored() == 1, "expected one stored value");
    anyhow::ensure!(outcome.skipped().len() == 1, "expected one skipped value");
    anyhow::ensure!(config.ports == [8080], "unexpected ports {:?}", config.ports);
    Ok(())
}
