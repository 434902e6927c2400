//! Headless demo of the htracker shell
//!
//! Walks the shell through a scripted session and prints the rendered
//! scaffold after each step. Useful for eyeballing the chrome policy and the
//! serialized view format without a host frontend.

use anyhow::Result;
use htracker::app_platform::RecordingSystemBars;
use htracker::app_ui::screens::ScreenEvent;
use htracker::app_ui::{BottomTab, DrawerDestination};
use htracker::AppScaffold;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut shell = AppScaffold::new(RecordingSystemBars::new(), &["en"])?;

    print_step(&shell, "launch")?;

    shell.handle(ScreenEvent::SplashFinished);
    print_step(&shell, "splash finished")?;

    shell.select_bottom_tab(BottomTab::Habits);
    shell.handle(ScreenEvent::AddHabitsRequested);
    shell.handle(ScreenEvent::TemplatesRequested { templates_id: 1 });
    shell.handle(ScreenEvent::TemplateChosen { template_id: 4 });
    print_step(&shell, "editing a habit from a template")?;

    shell.handle(ScreenEvent::OpenChooseIcon);
    shell.handle(ScreenEvent::OpenChooseIconColor);
    print_step(&shell, "sheet swapped to the color picker")?;

    while shell.system_back() {}
    print_step(&shell, "backed out to the section root")?;

    shell.handle(ScreenEvent::OpenDrawer);
    shell.select_drawer_destination(DrawerDestination::Settings);
    print_step(&shell, "settings")?;

    let bars = shell.system_bars();
    tracing::info!(calls = ?bars.borrow().calls(), "system bar calls made during the session");
    Ok(())
}

fn print_step<S: htracker::app_platform::SystemBarStyler + 'static>(
    shell: &AppScaffold<S>,
    label: &str,
) -> Result<()> {
    println!("--- {label} ---");
    println!("{}", serde_json::to_string_pretty(&shell.render())?);
    Ok(())
}
