use crate::app::App;
use crate::command::naming::display_token;
use crate::config::flags::FlagSet;
use crate::config::load::to_table;

/// Renders help: about line, flags with their current values, and commands.
pub fn usage<A: App>(app: &A) -> String {
    let flags = match to_table(app.config()) {
        Ok(table) => FlagSet::from_table(&table),
        Err(e) => {
            tracing::warn!(target: "gear.usage", error = %e, "config not renderable, listing no flags");
            FlagSet::default()
        }
    };

    let mut cmd = flags
        .command(app.name(), app.about())
        .override_usage(format!("{} [FLAGS] [COMMAND]", app.name()))
        .after_help(commands_section(app));
    cmd.render_help().to_string()
}

fn commands_section<A: App>(app: &A) -> String {
    let commands = app.commands();
    if commands.is_empty() {
        return "Commands: none (running without a command opens the GUI)".to_string();
    }

    let rows: Vec<(String, &str)> = commands
        .iter()
        .map(|c| (display_token(&c.method), c.about.as_deref().unwrap_or("")))
        .collect();
    let width = rows.iter().map(|(t, _)| t.len()).max().unwrap_or(0);

    let mut out = String::from("Commands:\n");
    for (token, about) in rows {
        if about.is_empty() {
            out.push_str(&format!("  {token}\n"));
        } else {
            out.push_str(&format!("  {token:<width$}  {about}\n"));
        }
    }
    out.push_str("\nRun without a command to open the GUI.");
    out
}
