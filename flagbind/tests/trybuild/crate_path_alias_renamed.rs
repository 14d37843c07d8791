use flagbind as binder;

/// Generated code must only reach the runtime crate through the alias.
#[derive(Debug, Default, binder::FieldBinder)]
#[flagbind(crate = "binder")]
struct AliasedConfig {
    hosts: Vec<String>,
}

fn main() {
    let mut config = AliasedConfig::default();
    let settings = binder::Settings::from_tokens("alias", "--", ["--hosts", "a", "b"]);
    let report = binder::initialize_strict(&mut config, &settings);
    let _: Result<binder::BindReport, binder::BindError> = report;
    let _ = config.hosts.len();
}
