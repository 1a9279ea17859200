use clap::Parser;
use std::error::Error;

use hover_popup::popup::{self, PointerEvent, PopupTrigger, Transition};

#[derive(Parser, Debug)]
#[command(
    name = "popup_cli",
    about = "Replay pointer events against a freshly mounted hover popup",
    version
)]
struct Cli {
    /// Comma-separated events to replay: enter, leave, click
    #[arg(short = 'e', long = "events", value_delimiter = ',')]
    events: Vec<PointerEvent>,

    /// Print one JSON document instead of a text report
    #[arg(long = "json", short = 'j')]
    json: bool,
}

fn json_report(widget: &PopupTrigger, transitions: &[Transition]) -> serde_json::Value {
    serde_json::json!({
        "transitions": transitions,
        "state": widget,
        "tree": widget.render(),
    })
}

fn transition_line(step: &Transition) -> String {
    format!(
        "{:<6} {:<9} panel={:<5} full={}",
        step.event,
        if step.changed { "changed" } else { "unchanged" },
        step.state.is_panel_visible(),
        step.state.is_full(),
    )
}

fn text_report(widget: &PopupTrigger, transitions: &[Transition]) -> String {
    let mut out = String::new();
    for step in transitions {
        out.push_str(&transition_line(step));
        out.push('\n');
    }
    if !transitions.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "state: show_image={} show_full_image={}\n",
        widget.is_panel_visible(),
        widget.is_full()
    ));
    out.push_str(&widget.render().outline());
    out
}

fn main() -> Result<(), Box<dyn Error>> {
    hover_popup::logging::init("warn");
    let cli = Cli::parse();

    let (widget, transitions) = popup::replay(&cli.events);

    if cli.json {
        let report = json_report(&widget, &transitions);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", text_report(&widget, &transitions));
    }
    Ok(())
}
