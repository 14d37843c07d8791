use std::collections::HashMap;

use flagbind::FieldBinder;

struct Opaque;

#[derive(FieldBinder)]
struct Attributed {
    #[flagbind(name = "port")]
    ports: Vec<u16>,
    #[flagbind(skip)]
    opaque: Opaque,
    r#match: String,
    ratio: f64,
    enabled: bool,
    env: HashMap<String, String>,
    widths: Vec<usize>,
}

fn main() {
    let mut attributed = Attributed {
        ports: Vec::new(),
        opaque: Opaque,
        r#match: String::new(),
        ratio: 0.0,
        enabled: false,
        env: HashMap::new(),
        widths: Vec::new(),
    };
    let handle = Attributed::resolve("port");
    let _ = handle.map(|h| attributed.assign(h, &["1".to_owned()]));
    let _ = (&attributed.opaque, attributed.ratio, attributed.enabled, &attributed.env);
    let _ = (&attributed.r#match, &attributed.widths);
    let _ = Attributed::descriptors().len();
}
