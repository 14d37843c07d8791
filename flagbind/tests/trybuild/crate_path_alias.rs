use flagbind::{FieldBinder, Settings};

/// Verifies that `#[flagbind(crate = "flagbind")]` is accepted and the
/// generated code compiles. Uses the real crate name as a self-referential
/// alias so no workspace reconfiguration is needed.
#[derive(Debug, Default, FieldBinder)]
#[flagbind(crate = "flagbind")]
struct CratePathConfig {
    value: String,
    count: u32,
}

fn main() {
    let mut config = CratePathConfig::default();
    let settings = Settings::from_tokens("alias", "--", ["--value", "hello", "--count", "1"]);
    flagbind::initialize(&mut config, &settings);
    let _: (&String, u32) = (&config.value, config.count);
}
