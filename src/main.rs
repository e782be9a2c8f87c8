use anyhow::Context;
use theme_toggle_demo::{init_tracing, DemoApp, DemoConfig};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load().context("Failed to load demo configuration")?;
    init_tracing(&config.log_filter);

    let app = DemoApp::new(&config);

    let view = app.render()?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    // Simulate a tap on the first toggle, then show the re-rendered screen.
    view.press_toggle(0);
    let view = app.render()?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
