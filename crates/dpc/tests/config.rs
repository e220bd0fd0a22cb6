// Config is held per thread; each test runs its own thread so none of them
// observe another's settings.

use dpc::prelude::*;
use std::thread;

const DPC_TOML: &str = r#"
[pack]
name = "Example Pack"
namespace = "example"
dev = true

[log]
level = "warn"

[script]
header = false
"#;

fn in_fresh_thread<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    thread::spawn(f).join().unwrap()
}

#[test]
fn render_uses_initialized_config() {
    let text = in_fresh_thread(|| {
        dpc::init_config(DPC_TOML).unwrap();

        let mut script = Script::new("example:debug".parse().unwrap());
        script.push(Log::warn("careful")).push(Say::new("done").unwrap());
        script.render().unwrap()
    });

    assert_eq!(
        text,
        "tellraw @a {\"text\":\"[debug | warning] - careful\",\"color\":\"yellow\"}\nsay done"
    );
}

#[test]
fn render_without_config_uses_defaults() {
    let text = in_fresh_thread(|| {
        let mut script = Script::new("example:debug".parse().unwrap());
        script.push(Log::warn("hidden")).push(Say::new("shown").unwrap());
        script.render().unwrap()
    });

    assert_eq!(
        text,
        "# This script was automatically generated for [Untitled Pack]\n\nsay shown"
    );
}

#[test]
fn invalid_config_is_rejected() {
    let err = in_fresh_thread(|| dpc::init_config("[pack]\nnamespace = \"\"\n").unwrap_err());
    assert_eq!(err.class(), dpc::ErrorClass::Config);

    let err = in_fresh_thread(|| dpc::init_config("[log]\nlevel = \"loud\"\n").unwrap_err());
    assert_eq!(err.class(), dpc::ErrorClass::Config);
}

#[test]
fn config_round_trips_through_toml() {
    let text = in_fresh_thread(|| {
        dpc::init_config(DPC_TOML).unwrap();
        Config::to_toml().unwrap()
    });

    assert!(text.contains("namespace = \"example\""));
    assert!(text.contains("level = \"warn\""));
}
